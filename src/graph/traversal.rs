// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the breadth-first search for the busbar sections
//! reachable from a node.

use std::collections::{HashSet, VecDeque};

use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::equipment_kind::ConnectablePredicates;
use crate::{Error, Switch, Terminal};

use super::{Link, VoltageLevelGraph};

/// A busbar section reached while searching from a node.
#[derive(Debug, PartialEq)]
pub struct BusbarResult<'a, S> {
    /// The id of the busbar section.
    pub busbar_section_id: &'a str,
    /// The number of switches traversed to reach the busbar section.
    pub depth: usize,
    /// The number of switches traversed before the last one.
    pub switches_before_last: usize,
    /// The last switch traversed, or `None` if the busbar section was reached
    /// without going through any switch.
    pub last_switch: Option<&'a S>,
}

/// A partial path in the search queue.
struct PathEntry {
    node: NodeIndex,
    switches: Vec<EdgeIndex>,
    last_switch: Option<EdgeIndex>,
}

/// Traversal methods.
impl<T, S> VoltageLevelGraph<T, S>
where
    T: Terminal,
    S: Switch,
{
    /// Returns all the busbar sections that can be reached from the given
    /// node without going through another busbar section, in the order they
    /// were found.
    ///
    /// Open switches are traversed too, the state of the last switch on each
    /// path is reported in the result.  Internal connections are traversed
    /// without being counted as switches.
    ///
    /// Returns an error if the given node does not exist.
    pub fn busbar_section_candidates(
        &self,
        node: u64,
    ) -> Result<Vec<BusbarResult<'_, S>>, Error> {
        let start = self.node_index(node)?;

        let mut visited = HashSet::new();
        let mut queue = VecDeque::from([PathEntry {
            node: start,
            switches: vec![],
            last_switch: None,
        }]);
        let mut found = vec![];

        while let Some(entry) = queue.pop_front() {
            if !visited.insert(entry.node) {
                continue;
            }

            let node_id = self.graph[entry.node];
            let mut busbar_sections = self
                .terminals_at(node_id)?
                .filter(|t| t.is_busbar_section());
            if let Some(first) = busbar_sections.next() {
                let depth = entry.switches.len();
                let last_switch = entry.last_switch.and_then(|e| self.switch_at(e));
                for busbar_section in std::iter::once(first).chain(busbar_sections) {
                    found.push(BusbarResult {
                        busbar_section_id: busbar_section.connectable_id(),
                        depth,
                        switches_before_last: if last_switch.is_some() { depth - 1 } else { 0 },
                        last_switch,
                    });
                }
                continue;
            }

            // Links in insertion order.
            let mut links = self.graph.edges(entry.node).collect::<Vec<_>>();
            links.sort_by_key(|e| e.id());

            for link in links {
                let next = if link.source() == entry.node {
                    link.target()
                } else {
                    link.source()
                };
                if visited.contains(&next) {
                    continue;
                }

                let mut switches = entry.switches.clone();
                let mut last_switch = entry.last_switch;
                if let Link::Switch(_) = link.weight() {
                    switches.push(link.id());
                    last_switch = Some(link.id());
                }
                queue.push_back(PathEntry {
                    node: next,
                    switches,
                    last_switch,
                });
            }
        }

        Ok(found)
    }
}
