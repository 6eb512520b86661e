// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the configuration options for the `VoltageLevelGraph`.

use crate::SwitchKind;

/// Configuration options for the `VoltageLevelGraph`.
#[derive(Clone, Default, Debug)]
pub struct VoltageLevelGraphConfig {
    /// Whether to allow switches without a kind in the graph.  Switch kinds
    /// play no part in connectivity resolution, so such switches are
    /// traversed like any other.
    pub allow_unspecified_switches: bool,

    /// The kind of switch assumed between two consecutive sections of a
    /// busbar, when the busbar layout is symmetrical.  Defaults to
    /// `SwitchKind::Disconnector`.
    pub section_switch_kind: SwitchKind,
}
