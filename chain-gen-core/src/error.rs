use thiserror::Error;

/// Errors raised while building a transition map or walking it.
///
/// None of these are retried by the library. Callers translate them into
/// user-facing messages.
#[derive(Error, Debug)]
pub enum ChainGenError {
	/// `chunk_size` or the target length is zero.
	#[error("Invalid configuration: {0}")]
	InvalidConfiguration(String),

	/// The corpus has no more tokens than `chunk_size`, so the map is empty.
	#[error("Insufficient corpus: {tokens} token(s) for a chunk size of {chunk_size}")]
	InsufficientCorpus { tokens: usize, chunk_size: usize },

	/// No key of the map starts with an uppercase letter.
	#[error("No capitalized token available to start generation")]
	NoCapitalizedSeed,

	/// The walk reached a word that has no record in the map.
	#[error("Dangling transition: `{0}` has no record in the transition map")]
	DanglingTransition(String),

	#[error("IO Error: {0}")]
	Io(#[from] std::io::Error),

	#[error("JSON Parsing Error: {0}")]
	Json(#[from] serde_json::Error),
}

pub type ChainGenResult<T> = Result<T, ChainGenError>;
