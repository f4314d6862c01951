use super::state::State;
use crate::error::{ChainGenError, ChainGenResult};
use rand::Rng;
use rand::seq::IteratorRandom;
use std::collections::BTreeMap;

/// Splits a corpus into tokens on any run of whitespace.
pub fn tokenize(text: &str) -> Vec<&str> {
	text.split_whitespace().collect()
}

/// Represents a word-to-chunk transition map.
///
/// The `TransitionMap` stores, for every word of the corpus, the chunks of
/// `chunk_size` tokens observed right after it.
///
/// # Responsibilities
/// - Build the map from a token sequence
/// - Expose records for the sampler
/// - Provide random keys (any key, or capitalized keys only)
///
/// # Invariants
/// - `chunk_size` is always >= 1
/// - Every record's frequency equals the sum of its chunk counts
/// - Every chunk holds exactly `chunk_size` tokens
/// - The map is read-only once built
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionMap {
	/// Number of tokens per chunk
	chunk_size: usize, // must be >= 1

	/// Number of tokens the map was built from
	token_count: usize,

	/// Mapping from a word to its record
	states: BTreeMap<String, State>,
}

/// Summary of a transition map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapStats {
	pub chunk_size: usize,
	pub token_count: usize,
	/// Number of distinct words with at least one successor.
	pub keys: usize,
	/// Number of distinct (word, chunk) pairs.
	pub transitions: usize,
	/// Sum of every occurrence count.
	pub occurrences: usize,
	/// Word with the highest frequency and that frequency.
	pub busiest_key: Option<(String, usize)>,
}

impl TransitionMap {
	/// Builds a transition map from a token sequence.
	///
	/// For each index `i` with a full chunk after it, the chunk
	/// `tokens[i + 1 ..= i + chunk_size]` joined by single spaces is counted
	/// as a successor of `tokens[i]`. The trailing `chunk_size` tokens are
	/// never used as keys.
	///
	/// # Notes
	/// - A corpus with `chunk_size` tokens or fewer gives an empty map.
	///   Generating from it fails with `InsufficientCorpus`.
	/// - Frequencies are computed once, after every chunk is counted.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if `chunk_size < 1`.
	pub fn build<S: AsRef<str>>(tokens: &[S], chunk_size: usize) -> ChainGenResult<Self> {
		if chunk_size < 1 {
			return Err(ChainGenError::InvalidConfiguration("chunk_size must be >= 1".to_owned()));
		}

		let mut map = Self { chunk_size, token_count: tokens.len(), states: BTreeMap::new() };
		if tokens.len() <= chunk_size {
			log::warn!(
				"corpus has {} token(s), chunk size {}: transition map is empty",
				tokens.len(),
				chunk_size
			);
			return Ok(map);
		}

		for i in 0..tokens.len() - chunk_size {
			let key = tokens[i].as_ref();
			let chunk = tokens[i + 1..=i + chunk_size]
				.iter()
				.map(|token| token.as_ref())
				.collect::<Vec<&str>>()
				.join(" ");

			map.states.entry(key.to_owned()).or_default().add_chunk(chunk);
		}

		for state in map.states.values_mut() {
			state.compute_frequency();
		}

		log::debug!(
			"built transition map: {} key(s) from {} token(s), chunk size {}",
			map.states.len(),
			tokens.len(),
			chunk_size
		);
		Ok(map)
	}

	#[cfg(test)]
	pub(crate) fn from_states<const N: usize>(
		chunk_size: usize,
		states: [(&str, State); N],
	) -> Self {
		let states: BTreeMap<String, State> = states
			.into_iter()
			.map(|(word, state)| (word.to_owned(), state))
			.collect();
		Self { chunk_size, token_count: states.len() + chunk_size, states }
	}

	/// Tokenizes `text` and builds the map from it.
	pub fn from_text(text: &str, chunk_size: usize) -> ChainGenResult<Self> {
		Self::build(&tokenize(text), chunk_size)
	}

	pub fn chunk_size(&self) -> usize {
		self.chunk_size
	}

	/// Number of tokens the map was built from.
	pub fn token_count(&self) -> usize {
		self.token_count
	}

	/// Number of keys.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Returns the record of `word`, if any.
	pub fn get(&self, word: &str) -> Option<&State> {
		self.states.get(word)
	}

	pub fn contains(&self, word: &str) -> bool {
		self.states.contains_key(word)
	}

	/// Iterates over keys in lexicographic order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.states.keys().map(String::as_str)
	}

	/// Iterates over `(word, record)` pairs in lexicographic order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &State)> {
		self.states.iter().map(|(word, state)| (word.as_str(), state))
	}

	/// Keys starting with an uppercase letter.
	pub fn capitalized_keys(&self) -> impl Iterator<Item = &str> {
		self.keys().filter(|word| word.chars().next().is_some_and(char::is_uppercase))
	}

	/// Sum of every record's frequency.
	///
	/// Equals `token_count - chunk_size` for a non-empty map.
	pub fn total_occurrences(&self) -> usize {
		self.states.values().map(State::frequency).sum()
	}

	/// Returns a uniformly random key.
	///
	/// Returns `None` if the map is empty.
	pub fn random_key<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		self.keys().choose(rng)
	}

	/// Returns a uniformly random key starting with an uppercase letter.
	///
	/// Returns `None` if there is no such key.
	pub fn random_capitalized_key<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		self.capitalized_keys().choose(rng)
	}

	/// Summarizes the map.
	pub fn stats(&self) -> MapStats {
		let busiest_key = self
			.iter()
			.fold(None::<(&str, usize)>, |best, (word, state)| match best {
				Some((_, frequency)) if frequency >= state.frequency() => best,
				_ => Some((word, state.frequency())),
			})
			.map(|(word, frequency)| (word.to_owned(), frequency));

		MapStats {
			chunk_size: self.chunk_size,
			token_count: self.token_count,
			keys: self.states.len(),
			transitions: self.states.values().map(State::len).sum(),
			occurrences: self.total_occurrences(),
			busiest_key,
		}
	}
}
