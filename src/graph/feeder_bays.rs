// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Feeder bay placement of the equipment of a voltage level.

use std::collections::BTreeMap;

use crate::equipment_kind::ConnectablePredicates;
use crate::{Error, FeederDirection, Switch, Terminal, TerminalSide};

use super::VoltageLevelGraph;

/// Where one terminal of a connectable plugs into the voltage level.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct FeederBay {
    pub bus_or_busbar_section_id: Option<String>,
    pub order: Option<i32>,
    pub name: Option<String>,
    pub direction: FeederDirection,
    pub side: Option<TerminalSide>,
}

impl<T, S> VoltageLevelGraph<T, S>
where
    T: Terminal,
    S: Switch,
{
    /// Returns the feeder bays of every connectable in the voltage level that
    /// is not a busbar section, keyed by connectable id.
    ///
    /// Each terminal of a connectable gets its own bay, in the order the
    /// terminals were given.
    pub fn feeder_bays(&self) -> Result<BTreeMap<String, Vec<FeederBay>>, Error> {
        let mut bays: BTreeMap<String, Vec<FeederBay>> = BTreeMap::new();

        for terminal in self.terminals().filter(|t| !t.is_busbar_section()) {
            let bus_or_busbar_section_id = self
                .bus_or_busbar_section_id(terminal)?
                .map(str::to_string);
            let feeder = terminal.feeder().unwrap_or_default();

            bays.entry(terminal.connectable_id().to_string())
                .or_default()
                .push(FeederBay {
                    bus_or_busbar_section_id,
                    order: feeder.order,
                    name: feeder.name,
                    direction: feeder.direction,
                    side: terminal.side(),
                });
        }

        Ok(bays)
    }
}
