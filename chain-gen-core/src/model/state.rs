use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::SliceRandom;


/// Represents the record of a single word in a transition map.
///
/// A `State` stores every chunk observed right after its word, together
/// with the number of times it was observed, plus the total of those
/// counts (`frequency`).
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Responsibilities:
/// - Accumulate chunk occurrences during construction
/// - Compute the total frequency once construction is over
/// - Pick the next chunk using a shuffled running-sum scan
///
/// ## Invariants
/// - Each chunk occurrence count is strictly positive
/// - Once `compute_frequency` has run, `frequency` equals the sum of counts
/// - `frequency` is never stored among the chunks
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct State {
	/// Successor chunks and how many times each one was observed.
	/// Example: { "sat." => 1, "slept." => 1 }
	chunks: BTreeMap<String, usize>,
	/// Sum of all chunk counts.
	frequency: usize,
}

impl State {
	/// Creates a new empty record.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one occurrence of `chunk`.
	///
	/// - If the chunk already exists, its occurrence count is increased.
	/// - Otherwise, it is inserted with an initial count of 1.
	///
	/// The frequency is not touched; call `compute_frequency` afterwards.
	pub(crate) fn add_chunk(&mut self, chunk: String) {
		*self.chunks.entry(chunk).or_insert(0) += 1;
	}

	/// Recomputes `frequency` from the chunk counts.
	pub(crate) fn compute_frequency(&mut self) {
		self.frequency = self.chunks.values().sum();
	}

	/// Total number of observed successors.
	pub fn frequency(&self) -> usize {
		self.frequency
	}

	/// Occurrence count of a chunk, `0` if never observed.
	pub fn count(&self, chunk: &str) -> usize {
		self.chunks.get(chunk).copied().unwrap_or(0)
	}

	/// Iterates over `(chunk, count)` pairs in chunk order.
	pub fn chunks(&self) -> impl Iterator<Item = (&str, usize)> {
		self.chunks.iter().map(|(chunk, count)| (chunk.as_str(), *count))
	}

	/// Number of distinct successor chunks.
	pub fn len(&self) -> usize {
		self.chunks.len()
	}

	pub fn is_empty(&self) -> bool {
		self.chunks.is_empty()
	}

	/// Returns the `n` most frequent chunks, highest count first.
	/// Ties are ordered by chunk text.
	pub fn top_chunks(&self, n: usize) -> Vec<(&str, usize)> {
		let mut chunks: Vec<(&str, usize)> = self.chunks().collect();
		chunks.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
		chunks.truncate(n);
		chunks
	}

	/// Picks the next chunk.
	///
	/// Draws `threshold = round(uniform[0, 1) * frequency)`, shuffles the
	/// chunks, then returns the first chunk at which the running sum of
	/// counts reaches the threshold. A threshold of 0 selects the first
	/// shuffled chunk.
	///
	/// The result is only roughly proportional to the counts: a high-count
	/// chunk shuffled late can be skipped when earlier chunks already reach
	/// the threshold.
	///
	/// Returns `None` if the record has no chunks.
	pub fn choose_chunk<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		if self.chunks.is_empty() {
			return None;
		}

		let threshold = (rng.random::<f64>() * self.frequency as f64).round() as usize;

		let mut candidates: Vec<(&str, usize)> = self.chunks().collect();
		candidates.shuffle(rng);

		let mut sum = 0;
		let mut fallback = None;
		for (chunk, count) in candidates {
			sum += count;
			if sum >= threshold {
				return Some(chunk);
			}
			fallback = Some(chunk);
		}

		// Only reachable if `frequency` is stale.
		fallback
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn state(chunks: &[(&str, usize)]) -> State {
		let mut state = State::new();
		for (chunk, count) in chunks {
			for _ in 0..*count {
				state.add_chunk((*chunk).to_owned());
			}
		}
		state.compute_frequency();
		state
	}

	#[test]
	fn frequency_is_sum_of_counts() {
		let state = state(&[("a", 3), ("b", 1), ("c d", 2)]);
		assert_eq!(state.frequency(), 6);
		assert_eq!(state.count("a"), 3);
		assert_eq!(state.count("missing"), 0);
		assert_eq!(state.len(), 3);
	}

	#[test]
	fn frequency_is_not_maintained_incrementally() {
		let mut state = state(&[("a", 1)]);
		state.add_chunk("b".to_owned());
		assert_eq!(state.frequency(), 1);
		state.compute_frequency();
		assert_eq!(state.frequency(), 2);
	}

	#[test]
	fn top_chunks_orders_by_count_then_text() {
		let state = state(&[("b", 2), ("a", 2), ("c", 5), ("d", 1)]);
		assert_eq!(state.top_chunks(3), vec![("c", 5), ("a", 2), ("b", 2)]);
		assert_eq!(state.top_chunks(10).len(), 4);
	}

	#[test]
	fn empty_state_chooses_nothing() {
		let mut rng = StdRng::seed_from_u64(1);
		assert_eq!(State::new().choose_chunk(&mut rng), None);
	}

	#[test]
	fn single_chunk_is_always_chosen() {
		let state = state(&[("only", 4)]);
		let mut rng = StdRng::seed_from_u64(7);
		for _ in 0..50 {
			assert_eq!(state.choose_chunk(&mut rng), Some("only"));
		}
	}

	#[test]
	fn dominant_chunk_is_chosen_most_often() {
		let state = state(&[("common", 95), ("rare", 5)]);
		let mut rng = StdRng::seed_from_u64(42);
		let common = (0..1000)
			.filter(|_| state.choose_chunk(&mut rng) == Some("common"))
			.count();
		assert!(common > 800, "common chosen {common} times");
	}
}
