//! Top-level module for the transition model.
//!
//! This module provides:
//! - The Model Builder (`TransitionMap`)
//! - Per-word transition records (`State`)
//! - The run parameters (`GenerationConfig`)
//! - The weighted random walk (`Generator`)

/// Weighted random walk over a transition map.
///
/// Picks a capitalized seed, samples chunks, flattens them into tokens and
/// lays the tokens out in lines.
pub mod generator;

/// Word-to-chunk transition map and the tokenizer feeding it.
pub mod transition_map;

/// Record of the chunks observed after a single word.
///
/// Tracks chunk counts and their total, and supports the shuffled
/// running-sum selection.
pub mod state;

/// Explicit parameter struct for a run (`chunk_size`, `target_length`,
/// `words_per_line`), loadable from JSON.
pub mod generation_config;
