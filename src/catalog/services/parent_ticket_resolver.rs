use crate::catalog::domain::{BundleRecord, ParentReference, ParentTicketIndex};
use std::collections::{BTreeSet, HashSet};

/// ParentTicketResolver service computing a bundle's "based on" ancestry
///
/// Starting from the bundle's own parent tickets, every bundle declaring
/// one of those tickets contributes its parent tickets too, transitively.
/// The walk runs on an explicit work stack with a visited set, so cyclic
/// ticket graphs terminate and deep chains do not grow the call stack.
pub struct ParentTicketResolver;

impl ParentTicketResolver {
    /// Resolves the parent tree of `bundle`
    ///
    /// # Returns
    /// Direct parents in declaration order, then indirect parents sorted
    /// lexicographically. No ticket appears twice.
    pub fn resolve(bundle: &BundleRecord, index: &ParentTicketIndex) -> Vec<ParentReference> {
        let mut direct: Vec<&str> = Vec::new();
        for ticket in bundle.parent_tickets() {
            if !direct.contains(&ticket.as_str()) {
                direct.push(ticket);
            }
        }

        let reachable = Self::reachable_tickets(&direct, index);
        let direct_set: HashSet<&str> = direct.iter().copied().collect();

        let mut parents: Vec<ParentReference> = direct
            .iter()
            .map(|ticket| ParentReference::direct(*ticket, Self::bundles_for(ticket, index)))
            .collect();

        parents.extend(
            reachable
                .into_iter()
                .filter(|ticket| !direct_set.contains(ticket))
                .map(|ticket| ParentReference::indirect(ticket, Self::bundles_for(ticket, index))),
        );

        parents
    }

    /// Collects every ticket reachable from `start`, including `start` itself
    fn reachable_tickets<'a>(start: &[&'a str], index: &'a ParentTicketIndex) -> BTreeSet<&'a str> {
        let mut visited: BTreeSet<&'a str> = BTreeSet::new();
        let mut pending: Vec<&'a str> = start.iter().rev().copied().collect();

        while let Some(ticket) = pending.pop() {
            if !visited.insert(ticket) {
                continue;
            }
            let Some(bundles) = index.get(ticket) else {
                continue;
            };
            for other in bundles {
                for parent in other.parent_tickets() {
                    if !visited.contains(parent.as_str()) {
                        pending.push(parent);
                    }
                }
            }
        }

        visited
    }

    fn bundles_for(ticket: &str, index: &ParentTicketIndex) -> Vec<BundleRecord> {
        index.get(ticket).cloned().unwrap_or_default()
    }

    /// Builds the ticket index of a bundle list
    ///
    /// Bundles appear under each ticket in list order.
    pub fn build_index(bundles: &[BundleRecord]) -> ParentTicketIndex {
        let mut index = ParentTicketIndex::new();
        for bundle in bundles {
            for ticket in bundle.parent_tickets() {
                let entry = index.entry(ticket.clone()).or_default();
                if !entry.iter().any(|b| b.id == bundle.id) {
                    entry.push(bundle.clone());
                }
            }
        }
        index
    }
}
