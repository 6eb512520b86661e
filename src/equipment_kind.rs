// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module defines the enums that classify switches, connectables and
//! voltage level topologies.

use crate::graph_traits::{Switch, Terminal};
use std::fmt::Display;

/// Represents the kind of a switch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum SwitchKind {
    Unspecified,
    Breaker,
    #[default]
    Disconnector,
    LoadBreakSwitch,
}

impl Display for SwitchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwitchKind::Unspecified => write!(f, "Unspecified"),
            SwitchKind::Breaker => write!(f, "Breaker"),
            SwitchKind::Disconnector => write!(f, "Disconnector"),
            SwitchKind::LoadBreakSwitch => write!(f, "LoadBreakSwitch"),
        }
    }
}

/// Represents the kind of a connectable, i.e. a piece of equipment with one
/// or more terminals in a voltage level.
///
/// Values of the host network model need to be converted to this type, so
/// that they can be used in the `VoltageLevelGraph`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConnectableKind {
    Unspecified,
    BusbarSection,
    Generator,
    Load,
    Battery,
    ShuntCompensator,
    StaticVarCompensator,
    DanglingLine,
    Line,
    TwoWindingsTransformer,
    ThreeWindingsTransformer,
    HvdcConverterStation,
}

impl Display for ConnectableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectableKind::Unspecified => write!(f, "Unspecified"),
            ConnectableKind::BusbarSection => write!(f, "BusbarSection"),
            ConnectableKind::Generator => write!(f, "Generator"),
            ConnectableKind::Load => write!(f, "Load"),
            ConnectableKind::Battery => write!(f, "Battery"),
            ConnectableKind::ShuntCompensator => write!(f, "ShuntCompensator"),
            ConnectableKind::StaticVarCompensator => write!(f, "StaticVarCompensator"),
            ConnectableKind::DanglingLine => write!(f, "DanglingLine"),
            ConnectableKind::Line => write!(f, "Line"),
            ConnectableKind::TwoWindingsTransformer => write!(f, "TwoWindingsTransformer"),
            ConnectableKind::ThreeWindingsTransformer => write!(f, "ThreeWindingsTransformer"),
            ConnectableKind::HvdcConverterStation => write!(f, "HvdcConverterStation"),
        }
    }
}

/// Represents how the equipment of a voltage level is wired together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TopologyKind {
    /// Terminals and busbar sections sit on numbered nodes, connected by
    /// explicit switches.
    NodeBreaker,
    /// Terminals attach directly to named buses.
    BusBreaker,
}

impl Display for TopologyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopologyKind::NodeBreaker => write!(f, "NodeBreaker"),
            TopologyKind::BusBreaker => write!(f, "BusBreaker"),
        }
    }
}

/// Which end of a multi-terminal device a terminal represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum TerminalSide {
    One,
    Two,
    Three,
}

/// Predicates for checking the connectable kind of a `Terminal`.
pub(crate) trait ConnectablePredicates: Terminal {
    fn is_unspecified(&self) -> bool {
        self.connectable_kind() == ConnectableKind::Unspecified
    }

    fn is_busbar_section(&self) -> bool {
        self.connectable_kind() == ConnectableKind::BusbarSection
    }
}

/// Implement the `ConnectablePredicates` trait for all types that implement
/// the `Terminal` trait.
impl<T: Terminal> ConnectablePredicates for T {}

/// Predicates for checking the kind and state of a `Switch`.
pub(crate) trait SwitchPredicates: Switch {
    fn has_unspecified_kind(&self) -> bool {
        self.kind() == SwitchKind::Unspecified
    }

    fn is_closed(&self) -> bool {
        !self.is_open()
    }
}

impl<S: Switch> SwitchPredicates for S {}
