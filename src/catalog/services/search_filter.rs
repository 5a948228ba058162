use crate::catalog::domain::BundleRecord;

/// Free-text bundle query
///
/// Tokens are ANDed; each token may match any of the searchable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    tokens: Vec<String>,
}

impl SearchQuery {
    /// Splits `query` on single spaces, dropping empty tokens
    pub fn parse(query: &str) -> Self {
        Self {
            tokens: query
                .split(' ')
                .filter(|token| !token.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn matches(&self, bundle: &BundleRecord) -> bool {
        self.tokens
            .iter()
            .all(|token| token_matches(token, bundle))
    }

    /// Matching bundles in their original order
    pub fn filter<'a>(&self, bundles: &'a [BundleRecord]) -> Vec<&'a BundleRecord> {
        bundles.iter().filter(|b| self.matches(b)).collect()
    }
}

fn token_matches(token: &str, bundle: &BundleRecord) -> bool {
    let needle = token.to_lowercase();
    let number = leading_integer(token);

    if let (Some(number), Some(id)) = (number, bundle.bundle_id()) {
        if id.num() == number {
            return true;
        }
    }
    if number.is_some() && number == leading_integer(&bundle.ticket) {
        return true;
    }

    [
        &bundle.subject,
        &bundle.ticket,
        &bundle.creator,
        &bundle.status,
        &bundle.target,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// Integer value of the leading ASCII digits of `raw`
///
/// `"42abc"` reads as 42; a string without leading digits has no value.
pub fn leading_integer(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let digits = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .map_or(trimmed, |end| &trimmed[..end]);
    digits.parse().ok()
}
