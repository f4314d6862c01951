/// Characters ending a sentence.
pub const SENTENCE_ENDINGS: [char; 3] = ['.', '?', '!'];

/// Characters removed by `strip_enclosures`.
pub const ENCLOSURES: [char; 5] = ['"', '[', ']', '(', ')'];

/// Truncates `text` right after its last sentence ending.
///
/// The last occurrence of each of `.`, `?` and `!` is located, and the text
/// is cut after the one found furthest. Text without any of them is
/// returned unchanged.
///
/// Example:
/// `"Hello world. Foo bar? Extra fragment"` → `"Hello world. Foo bar?"`
pub fn trim_to_sentence(text: &str) -> &str {
	let last = SENTENCE_ENDINGS
		.iter()
		.filter_map(|ending| text.rfind(*ending))
		.max();

	match last {
		// Every ending is one byte long.
		Some(index) => &text[..=index],
		None => text,
	}
}

/// Removes every `"`, `[`, `]`, `(` and `)`.
///
/// Pairs are not matched: each character is deleted on its own, so no
/// bracket or quote left open by `trim_to_sentence` survives.
pub fn strip_enclosures(text: &str) -> String {
	text.chars().filter(|c| !ENCLOSURES.contains(c)).collect()
}

/// Trims `text` to its last full sentence, then strips enclosures.
///
/// Idempotent: `cleanup(&cleanup(x)) == cleanup(x)`.
pub fn cleanup(text: &str) -> String {
	strip_enclosures(trim_to_sentence(text))
}
