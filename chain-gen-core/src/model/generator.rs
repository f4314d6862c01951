use crate::error::{ChainGenError, ChainGenResult};
use crate::model::transition_map::TransitionMap;
use rand::Rng;

/// Weighted random walk over a `TransitionMap`.
///
/// # Responsibilities
/// - Pick a capitalized starting word
/// - Walk the map, choosing each next chunk by its observed counts
/// - Flatten the chunks into tokens and lay them out in lines
///
/// # Notes
/// - All randomness comes from the caller's RNG. With a seeded RNG the
///   output is reproducible, since the map iterates in a fixed order.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
	map: &'a TransitionMap,
}

impl<'a> Generator<'a> {
	/// Creates a generator reading from `map`.
	pub fn new(map: &'a TransitionMap) -> Self {
		Self { map }
	}

	/// Generates `target_chunks` entries: the seed word followed by
	/// `target_chunks - 1` chunks.
	///
	/// # Behavior
	/// - The seed is a uniformly random key starting with an uppercase letter.
	/// - Each step picks a chunk of the current word with `State::choose_chunk`.
	/// - If the chunk's first token is a key, the walk continues from it;
	///   otherwise a uniformly random key of the whole map is used.
	///
	/// # Errors
	/// - `InvalidConfiguration` if `target_chunks < 1`
	/// - `InsufficientCorpus` if the map is empty
	/// - `NoCapitalizedSeed` if no key starts with an uppercase letter
	/// - `DanglingTransition` if the current word has no usable record
	pub fn generate_chunks<R: Rng + ?Sized>(
		&self,
		rng: &mut R,
		target_chunks: usize,
	) -> ChainGenResult<Vec<&'a str>> {
		if target_chunks < 1 {
			return Err(ChainGenError::InvalidConfiguration(
				"target length must be >= 1".to_owned(),
			));
		}

		let map = self.map;
		if map.is_empty() {
			return Err(ChainGenError::InsufficientCorpus {
				tokens: map.token_count(),
				chunk_size: map.chunk_size(),
			});
		}

		let seed = map.random_capitalized_key(rng).ok_or(ChainGenError::NoCapitalizedSeed)?;
		log::debug!("starting walk from `{}` for {} chunk(s)", seed, target_chunks);

		let mut sequence = Vec::with_capacity(self.sequence_capacity(target_chunks));
		sequence.push(seed);

		let mut word = seed;
		let mut jumps = 0usize;
		while sequence.len() < target_chunks {
			let state = map
				.get(word)
				.ok_or_else(|| ChainGenError::DanglingTransition(word.to_owned()))?;
			let chunk = state
				.choose_chunk(rng)
				.ok_or_else(|| ChainGenError::DanglingTransition(word.to_owned()))?;
			sequence.push(chunk);

			let head = chunk.split(' ').next().unwrap_or(chunk);
			word = if map.contains(head) {
				head
			} else {
				// The chunk came from the end of the corpus.
				jumps += 1;
				let next = map.random_key(rng).ok_or(ChainGenError::InsufficientCorpus {
					tokens: map.token_count(),
					chunk_size: map.chunk_size(),
				})?;
				log::trace!("`{}` has no successor, jumping to `{}`", head, next);
				next
			};
		}

		if jumps > 0 {
			log::debug!("walk jumped to a random word {} time(s)", jumps);
		}
		Ok(sequence)
	}

	/// Capacity reserved up front for a walk of `target_chunks` entries.
	///
	/// Bounded by the corpus size; a longer walk grows the vector as it goes.
	fn sequence_capacity(&self, target_chunks: usize) -> usize {
		target_chunks.min(self.map.token_count())
	}

	/// Generates chunks and splits them back into single tokens.
	///
	/// Order is kept, and so are tokens repeated across overlapping chunks.
	pub fn generate_tokens<R: Rng + ?Sized>(
		&self,
		rng: &mut R,
		target_chunks: usize,
	) -> ChainGenResult<Vec<&'a str>> {
		let chunks = self.generate_chunks(rng, target_chunks)?;
		Ok(chunks.into_iter().flat_map(|chunk| chunk.split(' ')).collect())
	}

	/// Generates text laid out with `words_per_line` tokens per line.
	///
	/// See `generate_chunks` for the errors.
	pub fn generate<R: Rng + ?Sized>(
		&self,
		rng: &mut R,
		target_chunks: usize,
		words_per_line: i64,
	) -> ChainGenResult<String> {
		let tokens = self.generate_tokens(rng, target_chunks)?;
		Ok(format_lines(&tokens, words_per_line))
	}
}

/// Joins tokens with spaces, breaking the line after every
/// `words_per_line`-th token.
///
/// A `words_per_line` of `0` or less keeps everything on one line.
/// No line break follows the last token.
pub fn format_lines<S: AsRef<str>>(tokens: &[S], words_per_line: i64) -> String {
	let join = |line: &[S]| {
		line.iter()
			.map(|token| token.as_ref())
			.collect::<Vec<&str>>()
			.join(" ")
	};

	if words_per_line <= 0 {
		return join(tokens);
	}

	tokens
		.chunks(usize::try_from(words_per_line).unwrap_or(usize::MAX))
		.map(join)
		.collect::<Vec<String>>()
		.join("\n")
}
