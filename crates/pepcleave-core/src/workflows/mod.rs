//! # Workflows Module
//!
//! High-level entry points tying the core tables and the engine together.
//!
//! A workflow takes raw caller input (sequence text, protease choice,
//! threshold configuration), runs the complete digestion and ranking
//! pipeline, and returns a serializable report. This is the layer library
//! consumers are expected to call.

pub mod digest;
