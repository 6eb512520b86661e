// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Resolution of the bus or busbar section a terminal is connected to.

use crate::equipment_kind::SwitchPredicates;
use crate::{Error, Switch, Terminal, TopologyKind};

use super::{BusbarResult, VoltageLevelGraph};

impl<'a, S> BusbarResult<'a, S>
where
    S: Switch,
{
    /// Picks the busbar section a terminal should be considered connected
    /// to, from the candidates found by a search.
    ///
    /// Candidates are ranked by:
    ///  1. a closed last switch, then the lowest depth and the fewest switches
    ///     before the last one,
    ///  2. an open last switch, with the same ordering,
    ///  3. no switch at all, with the lowest depth.
    ///
    /// If none of these apply, the first candidate is returned.  Ties keep the
    /// order of the candidates.  Returns `None` only if there are no
    /// candidates.
    pub fn select<'r>(candidates: &'r [Self]) -> Option<&'r Self> {
        let rank = |r: &&Self| (r.depth, r.switches_before_last);

        candidates
            .iter()
            .filter(|r| r.last_switch.is_some_and(|s| s.is_closed()))
            .min_by_key(rank)
            .or_else(|| {
                candidates
                    .iter()
                    .filter(|r| r.last_switch.is_some_and(|s| s.is_open()))
                    .min_by_key(rank)
            })
            .or_else(|| {
                candidates
                    .iter()
                    .filter(|r| r.last_switch.is_none())
                    .min_by_key(|r| r.depth)
            })
            .or_else(|| candidates.first())
    }
}

/// Connectivity resolution.
impl<T, S> VoltageLevelGraph<T, S>
where
    T: Terminal,
    S: Switch,
{
    /// Returns the id of the bus or busbar section the given terminal is
    /// connected to.
    ///
    /// In bus-breaker topology, this is the bus the terminal is connected to,
    /// or the bus it would connect to if it is disconnected.
    ///
    /// In node-breaker topology, the busbar sections reachable from the
    /// terminal's node are searched, and the best one is picked as described
    /// in [`BusbarResult::select`].  Returns `None` if no busbar section can
    /// be reached.
    ///
    /// The terminal is expected to belong to this voltage level.  Returns an
    /// error if its node is not part of the graph.
    pub fn bus_or_busbar_section_id<'a>(
        &'a self,
        terminal: &'a T,
    ) -> Result<Option<&'a str>, Error> {
        match self.topology_kind {
            TopologyKind::BusBreaker => Ok(if terminal.is_connected() {
                terminal.bus_id()
            } else {
                terminal.connectable_bus_id()
            }),
            TopologyKind::NodeBreaker => {
                let Some(node) = terminal.node() else {
                    return Err(Error::invalid_terminal(format!(
                        "Terminal of {} has no node in a node-breaker voltage level.",
                        terminal.connectable_id()
                    )));
                };

                let candidates = self.busbar_section_candidates(node)?;
                let selected = BusbarResult::select(&candidates).map(|r| r.busbar_section_id);
                tracing::debug!(
                    "Terminal of {} at node {}: {} busbar section candidates, selected {:?}.",
                    terminal.connectable_id(),
                    node,
                    candidates.len(),
                    selected
                );

                Ok(selected)
            }
        }
    }
}
