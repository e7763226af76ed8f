//! # Engine Module
//!
//! This module implements the digestion and ranking engine: it turns a parsed
//! protein sequence into an ordered list of peptide fragments, computes each
//! fragment's physicochemical properties on demand, and scores every fragment
//! against the criteria filter bank to produce a deterministic total order.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - The injected numeric thresholds that
//!   drive the filter bank and the hydrophobicity window
//! - **Digestion** ([`digestion`]) - The single-pass cleavage scan and the
//!   exact partitioning of the sequence into fragments
//! - **Peptides** ([`peptide`]) - Fragment state with lazily cached pI,
//!   charge-state, and hydrophobicity calculators
//! - **Criteria** ([`criteria`]) - The closed set of criterion codes, their
//!   importance order, and their ranking weights
//! - **Filters** ([`filters`]) - The fourteen predicates of the filter bank
//! - **Evaluation** ([`evaluator`]) - Running the bank and assigning ranks
//! - **Error Handling** ([`error`]) - Engine-level error aggregation

pub mod config;
pub mod criteria;
pub mod digestion;
pub mod error;
pub mod evaluator;
pub mod filters;
pub mod peptide;
