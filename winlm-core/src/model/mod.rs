//! Top-level module for the sliding-window language model.
//!
//! This crate provides a character-level fixed-window language model, including:
//! - Per-window probability tables (`ProbabilityTable`, `CharEntry`)
//! - A seedable uniform random source abstraction (`UnitSource`)
//! - The model itself (`LanguageModel`), with training and generation

/// The language model: window index, training pass, and generation loop.
///
/// Exposes construction with or without an explicit seed, repeated
/// training, sampled generation, and a textual inspection dump.
pub mod language_model;

/// Per-window next-character statistics.
///
/// Tracks observation counts in first-seen order and, once finalized,
/// probabilities and cumulative probabilities for inverse-CDF sampling.
pub mod probability_table;

/// Seedable uniform random source.
///
/// Abstracts the pseudo-random algorithm behind a single draw-a-unit
/// capability so that alternate generators can be substituted without
/// affecting the sampling contract.
pub mod random;
