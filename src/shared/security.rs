use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a snapshot or config file (32 MB)
///
/// A catalog holds a few hundred bundles; anything near this size is not
/// a bundle export.
pub const MAX_FILE_SIZE: u64 = 32 * 1024 * 1024;

/// Maximum length of a single value placed into a request URL
pub const MAX_URL_COMPONENT_LENGTH: usize = 255;

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - Description of the file (e.g., "bundles.json")
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds `max_size`
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Validates a value before it is placed into a backend URL
///
/// Bundle ids legitimately contain `:` and `/`, so those are left to
/// percent-encoding; characters that would change the meaning of the
/// request line are rejected outright.
///
/// # Arguments
/// * `component` - The value to check
/// * `component_type` - Description used in the error message
pub fn validate_url_component(component: &str, component_type: &str) -> Result<()> {
    if component.is_empty() {
        anyhow::bail!("{} must not be empty", component_type);
    }

    if component.len() > MAX_URL_COMPONENT_LENGTH {
        anyhow::bail!(
            "{} is too long ({} bytes). Maximum allowed: {} bytes",
            component_type,
            component.len(),
            MAX_URL_COMPONENT_LENGTH
        );
    }

    if component.contains("..") || component.contains('\\') {
        anyhow::bail!(
            "Security: {} contains path traversal sequences which are not allowed",
            component_type
        );
    }

    if component
        .chars()
        .any(|c| c.is_control() || c == '#' || c == '?' || c == '&')
    {
        anyhow::bail!("Security: {} contains URL-unsafe characters", component_type);
    }

    Ok(())
}
