// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for creating [`VoltageLevelGraph`] instances from given terminals,
//! switches and internal connections.

use petgraph::graph::{NodeIndex, UnGraph};

use crate::equipment_kind::{ConnectablePredicates, SwitchPredicates};
use crate::{Error, Switch, Terminal, TopologyKind, VoltageLevelGraphConfig};

use super::{Link, NodeIndexMap, SwitchIndexMap, VoltageLevelGraph};

/// `VoltageLevelGraph` instantiation.
impl<T, S> VoltageLevelGraph<T, S>
where
    T: Terminal,
    S: Switch,
{
    /// Creates a new [`VoltageLevelGraph`] from the given terminals, switches
    /// and internal connections.
    ///
    /// Internal connections are given as pairs of node numbers.  Bus-breaker
    /// voltage levels must not have switches or internal connections.
    ///
    /// Returns an error if the voltage level is invalid.
    pub fn try_new<TerminalIterator, SwitchIterator, ConnectionIterator>(
        topology_kind: TopologyKind,
        terminals: TerminalIterator,
        switches: SwitchIterator,
        internal_connections: ConnectionIterator,
        config: VoltageLevelGraphConfig,
    ) -> Result<Self, Error>
    where
        TerminalIterator: IntoIterator<Item = T>,
        SwitchIterator: IntoIterator<Item = S>,
        ConnectionIterator: IntoIterator<Item = (u64, u64)>,
    {
        let mut vlg = Self {
            topology_kind,
            graph: UnGraph::default(),
            node_indices: NodeIndexMap::new(),
            switch_indices: SwitchIndexMap::new(),
            terminals: Vec::new(),
            terminals_by_node: Default::default(),
            config,
        };
        vlg.add_terminals(terminals)?;
        vlg.add_switches(switches)?;
        vlg.add_internal_connections(internal_connections)?;

        vlg.validate()?;

        Ok(vlg)
    }

    /// Returns the index of the given node, adding it to the graph if it
    /// isn't there yet.
    fn ensure_node(&mut self, node: u64) -> NodeIndex {
        *self
            .node_indices
            .entry(node)
            .or_insert_with(|| self.graph.add_node(node))
    }

    fn add_terminals(&mut self, terminals: impl IntoIterator<Item = T>) -> Result<(), Error> {
        for terminal in terminals {
            let cid = terminal.connectable_id();

            if terminal.is_unspecified() {
                return Err(Error::invalid_terminal(format!(
                    "ConnectableKind not specified for connectable: {cid}"
                )));
            }

            match self.topology_kind {
                TopologyKind::NodeBreaker => {
                    let Some(node) = terminal.node() else {
                        return Err(Error::invalid_terminal(format!(
                            "Terminal of {cid} has no node in a node-breaker voltage level."
                        )));
                    };
                    self.ensure_node(node);
                    self.terminals_by_node
                        .entry(node)
                        .or_default()
                        .push(self.terminals.len());
                }
                TopologyKind::BusBreaker => {
                    if terminal.connectable_bus_id().is_none() {
                        return Err(Error::invalid_terminal(format!(
                            "Terminal of {cid} has no bus in a bus-breaker voltage level."
                        )));
                    }
                }
            }

            self.terminals.push(terminal);
        }

        Ok(())
    }

    fn add_switches(&mut self, switches: impl IntoIterator<Item = S>) -> Result<(), Error> {
        for switch in switches {
            let switch_id = switch.switch_id().to_string();
            let (node1, node2) = (switch.node1(), switch.node2());

            if self.topology_kind == TopologyKind::BusBreaker {
                return Err(Error::invalid_graph(format!(
                    "Switch:({switch_id}) Bus-breaker voltage levels can't have node-breaker switches."
                )));
            }
            if node1 == node2 {
                return Err(Error::invalid_switch(format!(
                    "Switch:({switch_id}) Can't connect node {node1} to itself."
                )));
            }
            if self.switch_indices.contains_key(&switch_id) {
                return Err(Error::invalid_graph(format!(
                    "Duplicate switch ID found: {switch_id}"
                )));
            }
            if switch.has_unspecified_kind() {
                if !self.config.allow_unspecified_switches {
                    return Err(Error::invalid_switch(format!(
                        "SwitchKind not specified for switch: {switch_id}"
                    )));
                }
                tracing::warn!("Switch {} has an unspecified kind.", switch_id);
            }

            let index1 = self.ensure_node(node1);
            let index2 = self.ensure_node(node2);
            let edge = self.graph.add_edge(index1, index2, Link::Switch(switch));
            self.switch_indices.insert(switch_id, edge);
        }

        Ok(())
    }

    fn add_internal_connections(
        &mut self,
        connections: impl IntoIterator<Item = (u64, u64)>,
    ) -> Result<(), Error> {
        for (node1, node2) in connections {
            if self.topology_kind == TopologyKind::BusBreaker {
                return Err(Error::invalid_graph(format!(
                    "Internal connection:({node1}, {node2}) Bus-breaker voltage levels can't have internal connections."
                )));
            }
            if node1 == node2 {
                return Err(Error::invalid_connection(format!(
                    "Internal connection:({node1}, {node2}) Can't connect a node to itself."
                )));
            }

            let index1 = self.ensure_node(node1);
            let index2 = self.ensure_node(node2);
            self.graph.add_edge(index1, index2, Link::Internal);
        }

        Ok(())
    }
}
