//! Casim: a cellular-automaton simulator built around the CoDi
//! growth-and-signaling automaton.

pub mod app;
pub mod model;
