//! # Core Module
//!
//! This module provides the fundamental building blocks for protein digestion:
//! the closed amino-acid alphabet, the immutable biochemical constant tables,
//! and the protease cleavage rules.
//!
//! ## Overview
//!
//! Everything in this layer is stateless and pure. The amino-acid enumeration
//! is the single source of truth for what a residue is; the chemistry tables
//! attach fixed per-residue constants to it; the protease rules classify
//! individual sequence positions. The stateful digestion and ranking logic
//! lives above this layer, in the engine.
//!
//! ## Architecture
//!
//! - **Residue Alphabet** ([`residue`]) - The 20 canonical amino acids, symbol
//!   conversions, and sequence parsing
//! - **Constant Tables** ([`chemistry`]) - Side-chain and terminal pKa values,
//!   Kyte-Doolittle scores, and charge-sign classification
//! - **Cleavage Rules** ([`protease`]) - The protease variant set and per-site
//!   cleavage classification

pub mod chemistry;
pub mod protease;
pub mod residue;
