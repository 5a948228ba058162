use crate::catalog::domain::{DependencyEdge, DependencyGraph, DependencyInfo};
use std::collections::{BTreeSet, HashMap, HashSet};

/// DependencyResolver service building the replaces-graph of a snapshot
///
/// Single pass over the edges, then two set differences over the ids:
/// O(edges + bundles).
pub struct DependencyResolver;

impl DependencyResolver {
    /// Resolves edges against the ids of a snapshot
    ///
    /// Edges pointing at an unknown id are dropped silently. An empty edge
    /// list carries no information and yields `DependencyInfo::Unavailable`.
    ///
    /// # Arguments
    /// * `edges` - Edges in the order the source delivered them
    /// * `known_ids` - Ids of every bundle in the snapshot
    pub fn resolve<'a, I>(edges: &[DependencyEdge], known_ids: I) -> DependencyInfo
    where
        I: IntoIterator<Item = &'a str>,
    {
        if edges.is_empty() {
            return DependencyInfo::Unavailable;
        }

        let known: HashSet<&str> = known_ids.into_iter().collect();
        let mut adjacency: HashMap<String, Vec<String>> = HashMap::new();
        let mut reverse: HashMap<String, Vec<String>> = HashMap::new();
        let mut targets: HashSet<&str> = HashSet::new();

        for edge in edges {
            if !known.contains(edge.to.as_str()) {
                continue;
            }
            adjacency
                .entry(edge.from.clone())
                .or_default()
                .push(edge.to.clone());
            reverse
                .entry(edge.to.clone())
                .or_default()
                .push(edge.from.clone());
            targets.insert(edge.to.as_str());
        }

        let independent: BTreeSet<String> = known
            .iter()
            .filter(|id| !adjacency.contains_key(**id))
            .map(|id| id.to_string())
            .collect();

        let latest_replacements: BTreeSet<String> = known
            .iter()
            .filter(|id| !targets.contains(**id))
            .map(|id| id.to_string())
            .collect();

        DependencyInfo::Available(DependencyGraph::new(
            adjacency,
            reverse,
            independent,
            latest_replacements,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> Vec<&'static str> {
        vec!["A", "B", "C"]
    }

    fn graph(edges: &[DependencyEdge], ids: &[&str]) -> DependencyGraph {
        match DependencyResolver::resolve(edges, ids.iter().copied()) {
            DependencyInfo::Available(graph) => graph,
            DependencyInfo::Unavailable => panic!("expected dependency data"),
        }
    }

    #[test]
    fn test_chain_latest_and_independent() {
        let edges = vec![DependencyEdge::new("A", "B"), DependencyEdge::new("B", "C")];
        let graph = graph(&edges, &ids());

        assert_eq!(
            graph.latest_replacements().iter().collect::<Vec<_>>(),
            vec!["A"]
        );
        assert_eq!(graph.independent().iter().collect::<Vec<_>>(), vec!["C"]);
    }

    #[test]
    fn test_independent_partitions_ids() {
        let edges = vec![
            DependencyEdge::new("A", "B"),
            DependencyEdge::new("A", "C"),
            DependencyEdge::new("C", "B"),
        ];
        let ids = ["A", "B", "C", "D"];
        let graph = graph(&edges, &ids);

        for id in ids {
            let has_outgoing = graph.has_dependencies(id);
            assert_ne!(has_outgoing, graph.is_independent(id), "id {}", id);
        }
        assert_eq!(
            graph.independent().iter().collect::<Vec<_>>(),
            vec!["B", "D"]
        );
    }

    #[test]
    fn test_unknown_targets_are_dropped() {
        let edges = vec![
            DependencyEdge::new("A", "B"),
            DependencyEdge::new("A", "ZZZ"),
            DependencyEdge::new("C", "ZZZ"),
        ];
        let graph = graph(&edges, &ids());

        assert_eq!(graph.dependencies_of("A"), ["B"]);
        assert!(!graph.has_dependencies("C"));
        assert!(graph.is_independent("C"));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_duplicates_and_order_preserved() {
        let edges = vec![
            DependencyEdge::new("A", "C"),
            DependencyEdge::new("A", "B"),
            DependencyEdge::new("A", "C"),
        ];
        let graph = graph(&edges, &ids());
        assert_eq!(graph.dependencies_of("A"), ["C", "B", "C"]);
        assert_eq!(graph.replaced_by("C"), ["A", "A"]);
    }

    #[test]
    fn test_unknown_source_still_marks_target() {
        let edges = vec![DependencyEdge::new("X", "B")];
        let graph = graph(&edges, &ids());
        assert!(!graph.is_latest_replacement("B"));
        assert!(graph.is_latest_replacement("A"));
    }

    #[test]
    fn test_empty_edges_unavailable() {
        let info = DependencyResolver::resolve(&[], ids());
        assert!(!info.is_available());
    }
}
