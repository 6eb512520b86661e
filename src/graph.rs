// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! A graph representation of the switching topology of a single voltage
//! level: the nodes, the switches and internal connections between them, and
//! the terminals of the equipment attached to them.

mod connectivity;
mod creation;
mod feeder_bays;
mod retrieval;
mod topology;
mod traversal;
mod validation;

pub mod iterators;

#[cfg(test)]
mod test_utils;

pub use feeder_bays::FeederBay;
pub use topology::TopologyInfo;
pub use traversal::BusbarResult;

use crate::{Switch, Terminal, TopologyKind, VoltageLevelGraphConfig};
use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use std::collections::HashMap;

/// Nodes stored in an `UnGraph` instance can be addressed with `NodeIndex`es.
///
/// `NodeIndexMap` stores the corresponding `NodeIndex` for any node number of
/// the voltage level, so that nodes in the `UnGraph` can be retrieved from
/// their numbers.
pub(crate) type NodeIndexMap = HashMap<u64, NodeIndex>;

/// `SwitchIndexMap` stores the `EdgeIndex` of every switch, by switch id.
pub(crate) type SwitchIndexMap = HashMap<String, EdgeIndex>;

/// An edge of the node-breaker graph.
#[derive(Debug)]
pub(crate) enum Link<S> {
    /// A switch, which counts towards the depth of a path.
    Switch(S),
    /// A zero-impedance connection between two nodes, without a switch.
    Internal,
}

/// A read-only view of the topology of one voltage level.
///
/// In node-breaker topology, the view holds an undirected multigraph whose
/// weights are the node numbers, with switches and internal connections as
/// edges.  In bus-breaker topology the graph is empty and only the terminals
/// are kept.
pub struct VoltageLevelGraph<T, S>
where
    T: Terminal,
    S: Switch,
{
    topology_kind: TopologyKind,
    graph: UnGraph<u64, Link<S>>,
    node_indices: NodeIndexMap,
    switch_indices: SwitchIndexMap,
    terminals: Vec<T>,
    /// Positions in `terminals` of the terminals at each node.
    terminals_by_node: HashMap<u64, Vec<usize>>,
    config: VoltageLevelGraphConfig,
}
