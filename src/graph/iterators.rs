// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Iterators over terminals and switches in a `VoltageLevelGraph`.

use petgraph::visit::EdgeRef;

use super::Link;
use crate::{Switch, Terminal};

/// An iterator over the terminals in a `VoltageLevelGraph`.
pub struct Terminals<'a, T>
where
    T: Terminal,
{
    pub(crate) iter: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Terminals<'a, T>
where
    T: Terminal,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }
}

/// An iterator over the terminals at a single node of a `VoltageLevelGraph`.
pub struct TerminalsAt<'a, T>
where
    T: Terminal,
{
    pub(crate) terminals: &'a [T],
    pub(crate) iter: std::slice::Iter<'a, usize>,
}

impl<'a, T> Iterator for TerminalsAt<'a, T>
where
    T: Terminal,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|&i| &self.terminals[i])
    }
}

/// An iterator over the switches in a `VoltageLevelGraph`, in the order they
/// were added.
pub struct Switches<'a, S>
where
    S: Switch,
{
    pub(crate) iter: std::slice::Iter<'a, petgraph::graph::Edge<Link<S>>>,
}

impl<'a, S> Iterator for Switches<'a, S>
where
    S: Switch,
{
    type Item = &'a S;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.by_ref().find_map(|e| match &e.weight {
            Link::Switch(switch) => Some(switch),
            Link::Internal => None,
        })
    }
}

/// An iterator over the switches connected to a node of a
/// `VoltageLevelGraph`.
pub struct IncidentSwitches<'a, S>
where
    S: Switch,
{
    pub(crate) iter: petgraph::graph::Edges<'a, Link<S>, petgraph::Undirected>,
}

impl<'a, S> Iterator for IncidentSwitches<'a, S>
where
    S: Switch,
{
    type Item = &'a S;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.by_ref().find_map(|e| match e.weight() {
            Link::Switch(switch) => Some(switch),
            Link::Internal => None,
        })
    }
}
