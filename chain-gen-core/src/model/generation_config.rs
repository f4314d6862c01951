use crate::error::{ChainGenError, ChainGenResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parameters of a single build-and-generate run.
///
/// # Responsibilities
/// - Carry the look-ahead width, the output size and the line layout
/// - Provide defaults for every field when loaded from JSON
/// - Reject values the builder and sampler cannot work with
///
/// # Invariants
/// - After `validate` succeeds, `chunk_size >= 1` and `target_length >= 1`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct GenerationConfig {
	/// Number of tokens per chunk (look-ahead width).
	pub chunk_size: usize,

	/// Number of chunks to generate, seed included.
	pub target_length: usize,

	/// Tokens per output line. `0` or negative means a single line.
	pub words_per_line: i64,
}

impl Default for GenerationConfig {
	fn default() -> Self {
		Self { chunk_size: 1, target_length: 500, words_per_line: 0 }
	}
}

impl GenerationConfig {
	/// Creates a config from explicit values.
	///
	/// No validation is done here; see `validate`.
	pub fn new(chunk_size: usize, target_length: usize, words_per_line: i64) -> Self {
		Self { chunk_size, target_length, words_per_line }
	}

	/// Checks the config.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if `chunk_size < 1` or `target_length < 1`.
	pub fn validate(&self) -> ChainGenResult<()> {
		if self.chunk_size < 1 {
			return Err(ChainGenError::InvalidConfiguration("chunk_size must be >= 1".to_owned()));
		}
		if self.target_length < 1 {
			return Err(ChainGenError::InvalidConfiguration(
				"target_length must be >= 1".to_owned(),
			));
		}
		Ok(())
	}

	/// Loads a config from a JSON file and validates it.
	///
	/// Missing fields take their default value.
	///
	/// # Errors
	/// - `Io` if the file cannot be read
	/// - `Json` if it is not a valid config document
	/// - `InvalidConfiguration` if validation fails
	pub fn load<P: AsRef<Path>>(path: P) -> ChainGenResult<Self> {
		let content = std::fs::read_to_string(path)?;
		let config = serde_json::from_str::<Self>(&content)?;

		if config.words_per_line <= 0 {
			log::info!("config.words_per_line is not positive, output will be a single line.")
		}
		config.validate()?;

		log::info!("Loaded config: {:?}", config);
		Ok(config)
	}
}
