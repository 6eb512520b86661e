// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

/*!
# Voltage Level Topology

This is a library for resolving the electrical topology of a single voltage
level of a power grid: which busbar section or bus a piece of equipment is
connected to, and how the busbars of the voltage level are laid out.

In node-breaker topology, the equipment and busbar sections of a voltage level
sit on numbered nodes, connected by switches (breakers, disconnectors and
load-break switches) and internal connections.  The switch graph is
undirected and may contain rings and bypass paths.

## The `Terminal` and `Switch` traits

The main struct is [`VoltageLevelGraph`], instances of which can be created by
passing the terminals, switches and internal connections of a voltage level to
the [`try_new`][VoltageLevelGraph::try_new] method.

But because this library is independent of any network model, it doesn't know
about the host's terminal and switch types and instead uses traits to read
them.

Therefore, to be usable with this library, the terminal and switch types must
implement the [`Terminal`] and [`Switch`] traits, respectively.  Check out the
documentation for these traits for sample implementations.

A [`VoltageLevelGraph`] is a snapshot: it is never modified after creation,
and can be queried from multiple threads at once.

## Connectivity resolution

[`bus_or_busbar_section_id`][VoltageLevelGraph::bus_or_busbar_section_id]
returns the bus or busbar section a terminal is connected to.  In node-breaker
topology, it searches the switch graph breadth-first for reachable busbar
sections, without going past any busbar section, and prefers:

1. busbar sections reached through a closed last switch, closest first,
2. then those reached through an open last switch, closest first,
3. then those on the terminal's own node.

A terminal that can't reach any busbar section resolves to `None`.

## Topology classification

[`topology_info`][VoltageLevelGraph::topology_info] returns a
[`TopologyInfo`], with the number of busbars and sections of a regular busbar
grid, the kinds of the switches between sections, the busbar sections of each
busbar, and the [`FeederBay`]s of every other piece of equipment.

The grid is only resolved if every busbar section has a
[`BusbarSectionPosition`].
*/

mod equipment_kind;
pub use equipment_kind::{ConnectableKind, SwitchKind, TerminalSide, TopologyKind};

mod position;
pub use position::{BusbarSectionPosition, Feeder, FeederDirection};

mod graph;
pub use graph::{iterators, BusbarResult, FeederBay, TopologyInfo, VoltageLevelGraph};

mod graph_traits;
pub use graph_traits::{Switch, Terminal};

mod config;
pub use config::VoltageLevelGraphConfig;

mod error;
pub use error::Error;
