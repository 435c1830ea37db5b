//! Character-level sliding-window language model library.
//!
//! This crate provides a fixed-window n-gram language model including:
//! - Window-to-next-character frequency tables with normalized probabilities
//! - Inverse-CDF sampling over per-window cumulative distributions
//! - Seedable generation for reproducible output sequences
//! - Internal utilities for corpus loading
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Core model types and generation logic.
///
/// This module exposes the language model and its probability tables
/// while keeping internal representations private where possible.
pub mod model;

/// I/O utilities (corpus loading).
///
/// Not exposed
pub(crate) mod io;
