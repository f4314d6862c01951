//! Word-chain text generation library.
//!
//! This crate builds a frequency-weighted transition map from a corpus and
//! walks it to produce new text:
//! - Whitespace tokenization and transition map construction
//! - Weighted random walk with an injectable RNG
//! - Sentence trimming and enclosure stripping of the output
//!
//! The crate never prints and never touches the command line. Reading the
//! corpus is left to the caller (`io::read_corpus` helps).

use rand::Rng;

/// Transition map, generator and run parameters.
pub mod model;

/// Output cleanup (sentence trimming, enclosure stripping).
pub mod text;

/// Error type shared by the whole crate.
pub mod error;

/// File helpers for callers supplying a corpus from disk.
pub mod io;

pub use error::{ChainGenError, ChainGenResult};
pub use model::generation_config::GenerationConfig;
pub use model::generator::Generator;
pub use model::transition_map::TransitionMap;

/// Post-processing switches of `generate_text_with_options`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
	/// Apply `text::cleanup` to the walk.
	pub cleanup: bool,
}

impl Default for GenerationOptions {
	fn default() -> Self {
		Self { cleanup: true }
	}
}

/// Builds a transition map from `corpus` and generates cleaned-up text.
///
/// See `generate_text_with_options`.
pub fn generate_text<R: Rng + ?Sized>(
	corpus: &str,
	config: &GenerationConfig,
	rng: &mut R,
) -> ChainGenResult<String> {
	generate_text_with_options(corpus, config, GenerationOptions::default(), rng)
}

/// Runs the whole pipeline: tokenize, build, walk, then optionally clean up.
///
/// # Errors
/// - `InvalidConfiguration` if `config` does not validate (nothing is built)
/// - Any error of `generate_text_from_map`
pub fn generate_text_with_options<R: Rng + ?Sized>(
	corpus: &str,
	config: &GenerationConfig,
	options: GenerationOptions,
	rng: &mut R,
) -> ChainGenResult<String> {
	config.validate()?;

	let map = TransitionMap::from_text(corpus, config.chunk_size)?;
	generate_text_from_map(&map, config, options, rng)
}

/// Walks an already built map, then optionally cleans up.
///
/// The map keeps the chunk size it was built with; `config.chunk_size` is
/// only validated.
///
/// # Errors
/// - `InvalidConfiguration` if `config` does not validate
/// - Any error of `Generator::generate_chunks`
pub fn generate_text_from_map<R: Rng + ?Sized>(
	map: &TransitionMap,
	config: &GenerationConfig,
	options: GenerationOptions,
	rng: &mut R,
) -> ChainGenResult<String> {
	config.validate()?;

	let stats = map.stats();
	log::info!(
		"transition map ready: {} key(s), {} transition(s), {} occurrence(s)",
		stats.keys,
		stats.transitions,
		stats.occurrences
	);

	let raw = Generator::new(map).generate(rng, config.target_length, config.words_per_line)?;
	if !options.cleanup {
		return Ok(raw);
	}

	let text = text::cleanup(&raw);
	log::debug!("cleanup kept {} of {} byte(s)", text.len(), raw.len());
	Ok(text)
}
