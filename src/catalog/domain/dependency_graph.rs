use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Directed "replaces" relation: `from` replaces the packages of `to`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyEdge {
    pub from: String,
    pub to: String,
}

impl DependencyEdge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Builds an edge from the wire form, a two element string array
    ///
    /// Arrays of any other length are not edges. Ids written in the older
    /// `bundle/<dist>/<num>` spelling are normalized to `bundle:<dist>/<num>`.
    pub fn from_pair(pair: &[String]) -> Option<Self> {
        match pair {
            [from, to] => Some(Self::new(normalize_id(from), normalize_id(to))),
            _ => None,
        }
    }
}

fn normalize_id(raw: &str) -> String {
    match raw.strip_prefix("bundle/") {
        Some(rest) => format!("bundle:{}", rest),
        None => raw.to_string(),
    }
}

/// Dependency-derived bundle classes offered as "show only" filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum DependencyType {
    /// Bundles that replace nothing
    IndependentBundles,
    /// Bundles that no other bundle replaces
    LatestReplacements,
}

impl DependencyType {
    pub fn label(&self) -> &'static str {
        match self {
            DependencyType::IndependentBundles => "Independent Bundles",
            DependencyType::LatestReplacements => "Latest Replacements",
        }
    }
}

impl fmt::Display for DependencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for DependencyType {
    type Err = String;

    /// Accepts the label as well as the short forms used on the command line
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '_'], "-").as_str() {
            "independent" | "independent-bundles" => Ok(DependencyType::IndependentBundles),
            "latest" | "latest-replacements" => Ok(DependencyType::LatestReplacements),
            _ => Err(format!(
                "Invalid show-only option: {}. Please specify 'independent' or 'latest'",
                s
            )),
        }
    }
}

/// DependencyGraph aggregate over the ids of one snapshot
///
/// Adjacency lists keep edge order and duplicates exactly as received.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    adjacency: HashMap<String, Vec<String>>,
    reverse: HashMap<String, Vec<String>>,
    independent: BTreeSet<String>,
    latest_replacements: BTreeSet<String>,
}

impl DependencyGraph {
    pub fn new(
        adjacency: HashMap<String, Vec<String>>,
        reverse: HashMap<String, Vec<String>>,
        independent: BTreeSet<String>,
        latest_replacements: BTreeSet<String>,
    ) -> Self {
        Self {
            adjacency,
            reverse,
            independent,
            latest_replacements,
        }
    }

    /// Ids replaced by `id`, in edge order
    pub fn dependencies_of(&self, id: &str) -> &[String] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Ids of bundles replacing `id`, in edge order
    pub fn replaced_by(&self, id: &str) -> &[String] {
        self.reverse.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_dependencies(&self, id: &str) -> bool {
        self.adjacency.get(id).is_some_and(|deps| !deps.is_empty())
    }

    pub fn independent(&self) -> &BTreeSet<String> {
        &self.independent
    }

    pub fn latest_replacements(&self) -> &BTreeSet<String> {
        &self.latest_replacements
    }

    pub fn is_independent(&self, id: &str) -> bool {
        self.independent.contains(id)
    }

    pub fn is_latest_replacement(&self, id: &str) -> bool {
        self.latest_replacements.contains(id)
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Number of bundles per dependency type
    pub fn type_counts(&self) -> Vec<(DependencyType, usize)> {
        vec![
            (DependencyType::IndependentBundles, self.independent.len()),
            (
                DependencyType::LatestReplacements,
                self.latest_replacements.len(),
            ),
        ]
    }
}

/// Dependency data of a snapshot
///
/// `Unavailable` means there is nothing to say about dependencies; it must
/// not be read as "no bundle has dependencies".
#[derive(Debug, Clone, Default)]
pub enum DependencyInfo {
    Available(DependencyGraph),
    #[default]
    Unavailable,
}

impl DependencyInfo {
    pub fn graph(&self) -> Option<&DependencyGraph> {
        match self {
            DependencyInfo::Available(graph) => Some(graph),
            DependencyInfo::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, DependencyInfo::Available(_))
    }
}
