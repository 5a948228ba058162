use std::fmt;

/// Distribution bucket used for ids that do not parse
pub const UNKNOWN_DISTRIBUTION: &str = "unknown";

/// Structured form of a bundle identifier such as `bundle:bionic/1042`
///
/// Parsing never fails loudly: malformed ids simply have no `BundleId`,
/// and callers fall back to the `unknown` distribution bucket and to no
/// numeric sort key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BundleId {
    dist: String,
    num: u64,
}

impl BundleId {
    pub fn new(dist: impl Into<String>, num: u64) -> Self {
        Self {
            dist: dist.into(),
            num,
        }
    }

    /// Parses `<prefix>:<dist>/<num>`
    ///
    /// The string must split into exactly two `:`-separated parts, the
    /// second of which must split into exactly two `/`-separated parts
    /// whose last part is a base-10 integer.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split(':');
        let (Some(_), Some(rest), None) = (parts.next(), parts.next(), parts.next()) else {
            return None;
        };

        let mut segments = rest.split('/');
        let (Some(dist), Some(num), None) = (segments.next(), segments.next(), segments.next())
        else {
            return None;
        };

        let num = num.parse::<u64>().ok()?;
        Some(Self::new(dist, num))
    }

    /// Distribution of `raw`, or `unknown` when the id does not parse
    pub fn dist_or_unknown(raw: &str) -> String {
        Self::parse(raw)
            .map(|id| id.dist)
            .unwrap_or_else(|| UNKNOWN_DISTRIBUTION.to_string())
    }

    pub fn dist(&self) -> &str {
        &self.dist
    }

    pub fn num(&self) -> u64 {
        self.num
    }
}

impl fmt::Display for BundleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bundle:{}/{}", self.dist, self.num)
    }
}
