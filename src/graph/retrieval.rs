// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for retrieving terminals and switches from a
//! [`VoltageLevelGraph`].

use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::equipment_kind::ConnectablePredicates;
use crate::iterators::{IncidentSwitches, Switches, Terminals, TerminalsAt};
use crate::{Error, Switch, Terminal, TopologyKind};

use super::{Link, VoltageLevelGraph};

/// `Terminal` and `Switch` retrieval.
impl<T, S> VoltageLevelGraph<T, S>
where
    T: Terminal,
    S: Switch,
{
    /// Returns the topology kind of the voltage level.
    pub fn topology_kind(&self) -> TopologyKind {
        self.topology_kind
    }

    /// Returns the number of nodes in the voltage level.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the switch with the given `switch_id`, if it exists.
    pub fn switch(&self, switch_id: &str) -> Result<&S, Error> {
        self.switch_indices
            .get(switch_id)
            .and_then(|&index| self.switch_at(index))
            .ok_or_else(|| {
                Error::switch_not_found(format!("Switch with id {} not found.", switch_id))
            })
    }

    /// Returns an iterator over the terminals in the voltage level, in the
    /// order they were given.
    pub fn terminals(&self) -> Terminals<T> {
        Terminals {
            iter: self.terminals.iter(),
        }
    }

    /// Returns an iterator over the switches in the voltage level, in the
    /// order they were given.
    pub fn switches(&self) -> Switches<S> {
        Switches {
            iter: self.graph.raw_edges().iter(),
        }
    }

    /// Returns an iterator over the terminals of the busbar sections in the
    /// voltage level.
    pub fn busbar_sections(&self) -> impl Iterator<Item = &T> {
        self.terminals.iter().filter(|t| t.is_busbar_section())
    }

    /// Returns an iterator over the terminals of the connectable with the
    /// given id.
    pub fn terminals_of<'a>(&'a self, connectable_id: &'a str) -> impl Iterator<Item = &'a T> {
        self.terminals
            .iter()
            .filter(move |t| t.connectable_id() == connectable_id)
    }

    /// Returns an iterator over the terminals at the given node.
    ///
    /// Returns an error if the given node does not exist.
    pub fn terminals_at(&self, node: u64) -> Result<TerminalsAt<T>, Error> {
        self.node_index(node)?;
        Ok(TerminalsAt {
            terminals: &self.terminals,
            iter: self
                .terminals_by_node
                .get(&node)
                .map(|indices| indices.iter())
                .unwrap_or_default(),
        })
    }

    /// Returns an iterator over the switches connected to the given node.
    ///
    /// Returns an error if the given node does not exist.
    pub fn incident_switches(&self, node: u64) -> Result<IncidentSwitches<S>, Error> {
        let index = self.node_index(node)?;
        Ok(IncidentSwitches {
            iter: self.graph.edges(index),
        })
    }

    pub(crate) fn node_index(&self, node: u64) -> Result<NodeIndex, Error> {
        self.node_indices
            .get(&node)
            .copied()
            .ok_or_else(|| Error::node_not_found(format!("Node {} not found.", node)))
    }

    pub(crate) fn switch_at(&self, index: EdgeIndex) -> Option<&S> {
        match self.graph.edge_weight(index)? {
            Link::Switch(switch) => Some(switch),
            Link::Internal => None,
        }
    }
}
