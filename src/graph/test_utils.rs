// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module is only compiled when running unit tests and contains features
//! that are shared by all tests of the `graph` module.
//!
//! - the `TestTerminal` and `TestSwitch` types, which implement the `Terminal`
//!   and `Switch` traits respectively.
//! - the `VoltageLevelBuilder`, which can declaratively build node-breaker
//!   voltage levels for use in tests.

use crate::{
    BusbarSectionPosition, ConnectableKind, Error, Feeder, FeederDirection, Switch, SwitchKind,
    Terminal, TerminalSide, TopologyKind, VoltageLevelGraph, VoltageLevelGraphConfig,
};

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestTerminal {
    connectable_id: String,
    kind: ConnectableKind,
    node: Option<u64>,
    bus: Option<String>,
    connected: bool,
    position: Option<BusbarSectionPosition>,
    feeder: Option<Feeder>,
    side: Option<TerminalSide>,
}

impl TestTerminal {
    /// Creates a terminal of a node-breaker voltage level.
    pub(crate) fn at_node(connectable_id: &str, kind: ConnectableKind, node: u64) -> Self {
        TestTerminal {
            connectable_id: connectable_id.to_string(),
            kind,
            node: Some(node),
            bus: None,
            connected: true,
            position: None,
            feeder: None,
            side: None,
        }
    }

    /// Creates a terminal of a bus-breaker voltage level.
    pub(crate) fn on_bus(
        connectable_id: &str,
        kind: ConnectableKind,
        bus: &str,
        connected: bool,
    ) -> Self {
        TestTerminal {
            connectable_id: connectable_id.to_string(),
            kind,
            node: None,
            bus: Some(bus.to_string()),
            connected,
            position: None,
            feeder: None,
            side: None,
        }
    }

    pub(crate) fn with_position(mut self, busbar_index: u32, section_index: u32) -> Self {
        self.position = Some(BusbarSectionPosition::new(busbar_index, section_index));
        self
    }

    pub(crate) fn with_feeder(
        mut self,
        name: &str,
        order: i32,
        direction: FeederDirection,
    ) -> Self {
        self.feeder = Some(Feeder {
            name: Some(name.to_string()),
            order: Some(order),
            direction,
        });
        self
    }

    pub(crate) fn with_side(mut self, side: TerminalSide) -> Self {
        self.side = Some(side);
        self
    }
}

impl Terminal for TestTerminal {
    fn connectable_id(&self) -> &str {
        &self.connectable_id
    }

    fn connectable_kind(&self) -> ConnectableKind {
        self.kind
    }

    fn node(&self) -> Option<u64> {
        self.node
    }

    fn bus_id(&self) -> Option<&str> {
        if self.connected {
            self.bus.as_deref()
        } else {
            None
        }
    }

    fn connectable_bus_id(&self) -> Option<&str> {
        self.bus.as_deref()
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn busbar_section_position(&self) -> Option<BusbarSectionPosition> {
        self.position
    }

    fn feeder(&self) -> Option<Feeder> {
        self.feeder.clone()
    }

    fn side(&self) -> Option<TerminalSide> {
        self.side
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestSwitch {
    id: String,
    kind: SwitchKind,
    node1: u64,
    node2: u64,
    open: bool,
}

impl TestSwitch {
    pub(crate) fn new(id: &str, kind: SwitchKind, node1: u64, node2: u64) -> Self {
        TestSwitch {
            id: id.to_string(),
            kind,
            node1,
            node2,
            open: false,
        }
    }

    pub(crate) fn opened(mut self) -> Self {
        self.open = true;
        self
    }
}

impl Switch for TestSwitch {
    fn switch_id(&self) -> &str {
        &self.id
    }

    fn node1(&self) -> u64 {
        self.node1
    }

    fn node2(&self) -> u64 {
        self.node2
    }

    fn kind(&self) -> SwitchKind {
        self.kind
    }

    fn is_open(&self) -> bool {
        self.open
    }
}

/// Represents a node added to the `VoltageLevelBuilder`.
#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug)]
pub(crate) struct NodeHandle(u64);

impl NodeHandle {
    /// Returns the node number.
    pub(crate) fn node(&self) -> u64 {
        self.0
    }
}

/// A builder for creating node-breaker voltage levels easily, for use in
/// tests.
pub(crate) struct VoltageLevelBuilder {
    terminals: Vec<TestTerminal>,
    switches: Vec<TestSwitch>,
    internal_connections: Vec<(u64, u64)>,
    next_node: u64,
}

impl VoltageLevelBuilder {
    /// Creates a new `VoltageLevelBuilder`.
    pub(crate) fn new() -> Self {
        VoltageLevelBuilder {
            terminals: Vec::new(),
            switches: Vec::new(),
            internal_connections: Vec::new(),
            next_node: 0,
        }
    }

    /// Adds an empty node and returns its handle.
    pub(crate) fn node(&mut self) -> NodeHandle {
        let node = self.next_node;
        self.next_node += 1;
        NodeHandle(node)
    }

    /// Adds a terminal on a new node and returns the node's handle.
    pub(crate) fn terminal(&mut self, terminal: impl FnOnce(u64) -> TestTerminal) -> NodeHandle {
        let handle = self.node();
        self.terminals.push(terminal(handle.0));
        handle
    }

    /// Adds a busbar section with the given position on a new node.
    ///
    /// The busbar section is named `BBS{busbar_index}_{section_index}`.
    pub(crate) fn busbar_section(&mut self, busbar_index: u32, section_index: u32) -> NodeHandle {
        self.terminal(|node| {
            TestTerminal::at_node(
                &format!("BBS{busbar_index}_{section_index}"),
                ConnectableKind::BusbarSection,
                node,
            )
            .with_position(busbar_index, section_index)
        })
    }

    /// Adds a busbar section without a position on a new node.
    pub(crate) fn unpositioned_busbar_section(&mut self, id: &str) -> NodeHandle {
        self.terminal(|node| TestTerminal::at_node(id, ConnectableKind::BusbarSection, node))
    }

    /// Adds a generator on a new node.
    pub(crate) fn generator(&mut self, id: &str) -> NodeHandle {
        self.terminal(|node| TestTerminal::at_node(id, ConnectableKind::Generator, node))
    }

    /// Adds a switch between two nodes.  Switches are named `SW{n}` in the
    /// order they are added.
    pub(crate) fn switch(
        &mut self,
        kind: SwitchKind,
        from: NodeHandle,
        to: NodeHandle,
        open: bool,
    ) -> &mut Self {
        let mut switch = TestSwitch::new(
            &format!("SW{}", self.switches.len()),
            kind,
            from.0,
            to.0,
        );
        if open {
            switch = switch.opened();
        }
        self.switches.push(switch);
        self
    }

    /// Adds a closed breaker between two nodes.
    pub(crate) fn breaker(&mut self, from: NodeHandle, to: NodeHandle) -> &mut Self {
        self.switch(SwitchKind::Breaker, from, to, false)
    }

    /// Adds a closed disconnector between two nodes.
    pub(crate) fn disconnector(&mut self, from: NodeHandle, to: NodeHandle) -> &mut Self {
        self.switch(SwitchKind::Disconnector, from, to, false)
    }

    /// Adds an open disconnector between two nodes.
    pub(crate) fn open_disconnector(&mut self, from: NodeHandle, to: NodeHandle) -> &mut Self {
        self.switch(SwitchKind::Disconnector, from, to, true)
    }

    /// Adds an internal connection between two nodes.
    pub(crate) fn internal_connection(&mut self, from: NodeHandle, to: NodeHandle) -> &mut Self {
        self.internal_connections.push((from.0, to.0));
        self
    }

    /// Adds a classic feeder bay below the given busbar section: a
    /// disconnector from the busbar to a new node, then a breaker to the
    /// given equipment's node.
    pub(crate) fn bay(&mut self, busbar_section: NodeHandle, equipment: NodeHandle) -> &mut Self {
        let middle = self.node();
        self.disconnector(busbar_section, middle)
            .breaker(middle, equipment)
    }

    /// Builds and returns the voltage level from the terminals, switches and
    /// internal connections added to the builder.
    pub(crate) fn build(
        &self,
        config: Option<VoltageLevelGraphConfig>,
    ) -> Result<VoltageLevelGraph<TestTerminal, TestSwitch>, Error> {
        VoltageLevelGraph::try_new(
            TopologyKind::NodeBreaker,
            self.terminals.clone(),
            self.switches.clone(),
            self.internal_connections.clone(),
            config.unwrap_or_default(),
        )
    }
}
