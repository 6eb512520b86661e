// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Classification of the busbar layout of a voltage level.

use std::collections::BTreeMap;

use crate::{BusbarSectionPosition, Error, Switch, SwitchKind, Terminal};

use super::{FeederBay, VoltageLevelGraph};

/// The canonical layout of a voltage level, as used for drawing it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct TopologyInfo {
    /// The number of busbars (rows).
    pub busbar_count: u32,
    /// The number of sections in each busbar (columns).
    pub section_count: u32,
    /// Whether every busbar has the same number of sections.
    pub is_symmetrical: bool,
    /// The kinds of the switches between consecutive sections of a busbar.
    pub switch_kinds: Vec<SwitchKind>,
    /// The busbar section ids of each busbar, ordered by section index.
    pub sections_by_busbar: BTreeMap<u32, Vec<String>>,
    /// The feeder bays of each connectable that isn't a busbar section.
    pub feeder_bays: BTreeMap<String, Vec<FeederBay>>,
}

impl TopologyInfo {
    /// A layout that callers must not assume to be a regular grid.
    fn unresolved(feeder_bays: BTreeMap<String, Vec<FeederBay>>) -> Self {
        Self {
            busbar_count: 1,
            section_count: 1,
            is_symmetrical: false,
            switch_kinds: vec![],
            sections_by_busbar: BTreeMap::new(),
            feeder_bays,
        }
    }
}

impl<T, S> VoltageLevelGraph<T, S>
where
    T: Terminal,
    S: Switch,
{
    /// Returns the canonical layout of the voltage level.
    ///
    /// The busbar grid can only be resolved if every busbar section has a
    /// position.  If any of them is missing one, or if there are no busbar
    /// sections, the layout is reported as a single unsymmetrical section,
    /// without switch kinds or sections by busbar.
    ///
    /// The layout is symmetrical if there is a single busbar, or if every
    /// busbar has as many sections as the longest one.  Only then are the
    /// busbar and section counts and the switch kinds derived from the
    /// positions.
    ///
    /// Feeder bays are computed in every case, see
    /// [`feeder_bays`][VoltageLevelGraph::feeder_bays].
    pub fn topology_info(&self) -> Result<TopologyInfo, Error> {
        let feeder_bays = self.feeder_bays()?;

        let Some(positions) = self.busbar_section_positions() else {
            return Ok(TopologyInfo::unresolved(feeder_bays));
        };

        let mut sections_per_busbar: BTreeMap<u32, u32> = BTreeMap::new();
        let mut max_busbar_index = 0;
        let mut max_section_index = 0;
        for (_, position) in &positions {
            let sections = sections_per_busbar
                .entry(position.busbar_index)
                .or_default();
            *sections = (*sections).max(position.section_index);
            max_busbar_index = max_busbar_index.max(position.busbar_index);
            max_section_index = max_section_index.max(position.section_index);
        }

        let is_symmetrical = sections_per_busbar.len() == 1
            || sections_per_busbar
                .values()
                .all(|&sections| sections == max_section_index);

        let mut ordered = positions;
        ordered.sort_by_key(|(id, position)| (position.busbar_index, position.section_index, *id));
        let mut sections_by_busbar: BTreeMap<u32, Vec<String>> = BTreeMap::new();
        for (id, position) in ordered {
            sections_by_busbar
                .entry(position.busbar_index)
                .or_default()
                .push(id.to_string());
        }

        let mut info = TopologyInfo {
            sections_by_busbar,
            ..TopologyInfo::unresolved(feeder_bays)
        };
        if is_symmetrical {
            info.is_symmetrical = true;
            info.busbar_count = max_busbar_index;
            info.section_count = max_section_index;
            info.switch_kinds = vec![
                self.config.section_switch_kind;
                max_section_index.saturating_sub(1) as usize
            ];
        }

        tracing::debug!(
            "Busbar layout: {} busbars, {} sections, symmetrical: {}.",
            info.busbar_count,
            info.section_count,
            info.is_symmetrical
        );

        Ok(info)
    }

    /// Returns the ids and positions of all busbar sections, or `None` if any
    /// of them has no position or there are no busbar sections.
    fn busbar_section_positions(&self) -> Option<Vec<(&str, BusbarSectionPosition)>> {
        let mut positions = vec![];
        for busbar_section in self.busbar_sections() {
            let Some(position) = busbar_section.busbar_section_position() else {
                tracing::debug!(
                    "Busbar section {} has no position, busbar layout is unresolved.",
                    busbar_section.connectable_id()
                );
                return None;
            };
            positions.push((busbar_section.connectable_id(), position));
        }

        if positions.is_empty() {
            tracing::debug!("No busbar sections, busbar layout is unresolved.");
            return None;
        }
        Some(positions)
    }
}
