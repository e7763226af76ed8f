//! # Pepcleave Core Library
//!
//! A protein-digestion and peptide-ranking engine: it partitions a protein
//! sequence into peptide fragments at predicted protease cleavage sites,
//! computes per-fragment physicochemical properties (isoelectric point,
//! predicted charge state, hydrophobicity), and scores and ranks fragments
//! against a fixed bank of suitability criteria used to pick peptides for
//! targeted mass-spectrometry assays.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a
//! clear separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains the closed amino-acid alphabet,
//!   the immutable biochemical constant tables, and the protease cleavage
//!   rules. Everything here is stateless and pure.
//!
//! - **[`engine`]: The Logic Core.** This layer owns the digestion scan, the
//!   lazily cached peptide property calculators, the criteria filter bank,
//!   and the weighted ranking evaluator, together with the threshold
//!   configuration they are driven by.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer.
//!   It ties the `engine` and `core` together to execute a complete digestion
//!   run, from raw sequence text to a ranked peptide report.

pub mod core;
pub mod engine;
pub mod workflows;
