// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for validating a [`VoltageLevelGraph`].

use std::collections::BTreeMap;

use crate::equipment_kind::ConnectablePredicates;
use crate::{ConnectableKind, Error, Switch, Terminal};

use super::VoltageLevelGraph;

impl<T, S> VoltageLevelGraph<T, S>
where
    T: Terminal,
    S: Switch,
{
    pub(crate) fn validate(&self) -> Result<(), Error> {
        self.validate_connectable_kinds()?;
        self.validate_busbar_sections()?;

        Ok(())
    }

    /// Validates that all terminals of a connectable report the same
    /// connectable kind.
    fn validate_connectable_kinds(&self) -> Result<(), Error> {
        let mut kinds: BTreeMap<&str, ConnectableKind> = BTreeMap::new();
        for terminal in &self.terminals {
            let kind = terminal.connectable_kind();
            let known = *kinds.entry(terminal.connectable_id()).or_insert(kind);
            if known != kind {
                return Err(Error::invalid_terminal(format!(
                    "Connectable {} has terminals of different kinds: {} and {}.",
                    terminal.connectable_id(),
                    known,
                    kind
                )));
            }
        }
        Ok(())
    }

    /// Validates that every busbar section has exactly one terminal.
    fn validate_busbar_sections(&self) -> Result<(), Error> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for terminal in self.terminals.iter().filter(|t| t.is_busbar_section()) {
            *counts.entry(terminal.connectable_id()).or_default() += 1;
        }

        if let Some((id, count)) = counts.into_iter().find(|(_, count)| *count > 1) {
            return Err(Error::invalid_terminal(format!(
                "BusbarSection {id} must have exactly one terminal. Found {count}."
            )));
        }
        Ok(())
    }
}
