// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the traits that need to be implemented by the types
//! that represent a terminal and a switch.

use crate::equipment_kind::{ConnectableKind, SwitchKind, TerminalSide};
use crate::position::{BusbarSectionPosition, Feeder};

/**
This trait needs to be implemented by the type that represents a terminal of
a connectable.

Read more about why this is necessary [here][crate#the-terminal-and-switch-traits].

Node-breaker voltage levels read [`node`][Terminal::node], bus-breaker
voltage levels read [`bus_id`][Terminal::bus_id],
[`connectable_bus_id`][Terminal::connectable_bus_id] and
[`is_connected`][Terminal::is_connected].  The position and feeder methods
have defaults for host models that don't carry layout metadata.

<details>
<summary>Example implementation for a host network model:</summary>

```ignore
impl voltage_level_topology::Terminal for network::TerminalRef<'_> {
    fn connectable_id(&self) -> &str {
        self.connectable().id()
    }

    fn connectable_kind(&self) -> voltage_level_topology::ConnectableKind {
        use network::IdentifiableType as it;
        use voltage_level_topology::ConnectableKind as ck;

        match self.connectable().kind() {
            it::BusbarSection => ck::BusbarSection,
            it::Generator => ck::Generator,
            it::Load => ck::Load,
            it::Battery => ck::Battery,
            it::ShuntCompensator => ck::ShuntCompensator,
            it::StaticVarCompensator => ck::StaticVarCompensator,
            it::DanglingLine => ck::DanglingLine,
            it::Line => ck::Line,
            it::TwoWindingsTransformer => ck::TwoWindingsTransformer,
            it::ThreeWindingsTransformer => ck::ThreeWindingsTransformer,
            it::HvdcConverterStation => ck::HvdcConverterStation,
            other => {
                warn!("Unsupported connectable type: {:?}", other);
                ck::Unspecified
            }
        }
    }

    fn node(&self) -> Option<u64> {
        self.node_breaker_view().map(|v| v.node() as u64)
    }

    fn bus_id(&self) -> Option<&str> {
        self.bus_breaker_view().and_then(|v| v.bus()).map(|b| b.id())
    }

    fn connectable_bus_id(&self) -> Option<&str> {
        self.bus_breaker_view().map(|v| v.connectable_bus().id())
    }

    fn is_connected(&self) -> bool {
        self.connected()
    }

    fn busbar_section_position(&self) -> Option<voltage_level_topology::BusbarSectionPosition> {
        self.connectable()
            .extension::<network::BusbarSectionPosition>()
            .map(|p| {
                voltage_level_topology::BusbarSectionPosition::new(
                    p.busbar_index() as u32,
                    p.section_index() as u32,
                )
            })
    }
}
```

</details>
*/
pub trait Terminal {
    /// Returns the id of the connectable this terminal belongs to.
    fn connectable_id(&self) -> &str;
    /// Returns the kind of the connectable this terminal belongs to.
    fn connectable_kind(&self) -> ConnectableKind;
    /// Returns the node the terminal sits on, in node-breaker topology.
    fn node(&self) -> Option<u64>;
    /// Returns the bus the terminal is currently connected to, in bus-breaker
    /// topology.
    fn bus_id(&self) -> Option<&str>;
    /// Returns the bus the terminal would connect to, in bus-breaker
    /// topology.  Available even when the terminal is disconnected.
    fn connectable_bus_id(&self) -> Option<&str>;
    /// Returns true if the terminal is connected.
    fn is_connected(&self) -> bool;

    /// Returns the grid position of the connectable, if it is a busbar
    /// section that has one.
    fn busbar_section_position(&self) -> Option<BusbarSectionPosition> {
        None
    }

    /// Returns the declared feeder placement of the terminal.
    fn feeder(&self) -> Option<Feeder> {
        None
    }

    /// Returns the side of the terminal, for connectables with more than one
    /// terminal.
    fn side(&self) -> Option<TerminalSide> {
        None
    }
}

/**
This trait needs to be implemented by the type that represents a switch of a
node-breaker voltage level.

Read more about why this is necessary [here][crate#the-terminal-and-switch-traits].

<details>
<summary>Example implementation for a host network model:</summary>

```ignore
impl voltage_level_topology::Switch for network::SwitchRef<'_> {
    fn switch_id(&self) -> &str {
        self.id()
    }

    fn node1(&self) -> u64 {
        self.node_breaker_view().node1() as u64
    }

    fn node2(&self) -> u64 {
        self.node_breaker_view().node2() as u64
    }

    fn kind(&self) -> voltage_level_topology::SwitchKind {
        match self.switch_kind() {
            network::SwitchKind::Breaker => voltage_level_topology::SwitchKind::Breaker,
            network::SwitchKind::Disconnector => voltage_level_topology::SwitchKind::Disconnector,
            network::SwitchKind::LoadBreakSwitch => {
                voltage_level_topology::SwitchKind::LoadBreakSwitch
            }
        }
    }

    fn is_open(&self) -> bool {
        self.open()
    }
}
```

</details>
*/
pub trait Switch {
    /// Returns the id of the switch.
    fn switch_id(&self) -> &str;
    /// Returns the node at the first end of the switch.
    fn node1(&self) -> u64;
    /// Returns the node at the second end of the switch.
    fn node2(&self) -> u64;
    /// Returns the kind of the switch.
    fn kind(&self) -> SwitchKind;
    /// Returns true if the switch is open.
    fn is_open(&self) -> bool;
}
