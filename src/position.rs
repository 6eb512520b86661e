// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Position metadata attached to busbar sections and feeders, used for
//! laying out a voltage level.

/// The position of a busbar section in the busbar grid of a voltage level.
///
/// Both indices start at `1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BusbarSectionPosition {
    /// The busbar (row) the section belongs to.
    pub busbar_index: u32,
    /// The position of the section within its busbar (column).
    pub section_index: u32,
}

impl BusbarSectionPosition {
    /// Creates a new `BusbarSectionPosition`.
    pub fn new(busbar_index: u32, section_index: u32) -> Self {
        Self {
            busbar_index,
            section_index,
        }
    }
}

/// Where a feeder is drawn, relative to the busbars.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum FeederDirection {
    Top,
    Bottom,
    #[default]
    Undefined,
}

/// The declared placement of one terminal of a connectable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Feeder {
    pub name: Option<String>,
    pub order: Option<i32>,
    pub direction: FeederDirection,
}
