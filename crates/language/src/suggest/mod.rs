//! Incremental autocomplete dictionary.
//!
//! [`SuggestionIndex`] keeps the words of each line separately together with
//! a per-word count of owning lines. Editing one line only re-extracts that
//! line; the aggregate is updated by the difference, so a keystroke costs
//! time proportional to the edited line rather than the document.
//!
//! Line numbers are opaque keys. The index never renumbers lines: when an
//! insertion or deletion shifts lines, the caller re-submits every line whose
//! number changed.

use std::borrow::Borrow;
use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

/// A distinct, case-sensitive word offered for completion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Suggestion(String);

impl Suggestion {
	pub fn new(text: impl Into<String>) -> Self {
		Self(text.into())
	}

	#[inline]
	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn into_string(self) -> String {
		self.0
	}
}

impl Borrow<str> for Suggestion {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl AsRef<str> for Suggestion {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl From<&str> for Suggestion {
	fn from(text: &str) -> Self {
		Self(text.to_string())
	}
}

impl fmt::Display for Suggestion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Which substrings of a line count as words.
///
/// The ASCII rule is the identifier class `[A-Za-z_][A-Za-z0-9_]*`; the
/// Unicode rule widens letters and digits to any alphabetic/alphanumeric
/// character. `continue_chars` are also accepted after the first character,
/// for grammars such as SQL where `v$session` is one identifier. Words
/// shorter than `min_len` characters are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordRule {
	pub min_len: usize,
	pub unicode: bool,
	pub continue_chars: &'static str,
}

impl WordRule {
	pub const IDENTIFIER: WordRule = WordRule {
		min_len: 2,
		unicode: false,
		continue_chars: "",
	};
	pub const PERMISSIVE: WordRule = WordRule {
		min_len: 2,
		unicode: true,
		continue_chars: "",
	};

	pub const fn with_min_len(self, min_len: usize) -> Self {
		Self { min_len, ..self }
	}

	/// Whether `c` may begin a word.
	pub fn is_start(&self, c: char) -> bool {
		c == '_' || if self.unicode { c.is_alphabetic() } else { c.is_ascii_alphabetic() }
	}

	/// Whether `c` may follow the first character of a word.
	pub fn is_continue(&self, c: char) -> bool {
		c == '_'
			|| self.continue_chars.contains(c)
			|| if self.unicode { c.is_alphanumeric() } else { c.is_ascii_alphanumeric() }
	}

	/// Iterates the words of `text` in order of appearance.
	pub fn words(self, text: &str) -> Words<'_> {
		Words { rule: self, text, offset: 0 }
	}
}

impl Default for WordRule {
	fn default() -> Self {
		Self::IDENTIFIER
	}
}

/// Iterator over the words of a string under a [`WordRule`].
#[derive(Debug, Clone)]
pub struct Words<'a> {
	rule: WordRule,
	text: &'a str,
	offset: usize,
}

impl<'a> Iterator for Words<'a> {
	type Item = &'a str;

	fn next(&mut self) -> Option<&'a str> {
		let text = self.text;
		let rule = self.rule;
		loop {
			let (skip, first) = text[self.offset..].char_indices().find(|&(_, c)| rule.is_start(c))?;
			let start = self.offset + skip;

			let mut end = start + first.len_utf8();
			let mut len = 1;
			for c in text[end..].chars().take_while(|&c| rule.is_continue(c)) {
				end += c.len_utf8();
				len += 1;
			}
			self.offset = end;

			if len >= rule.min_len {
				return Some(&text[start..end]);
			}
		}
	}
}

/// Per-document word index supporting line-level updates.
///
/// Not synchronised: all mutation goes through `&mut self`, so one document's
/// index has a single writer. Independent documents own independent indexes.
#[derive(Debug, Clone, Default)]
pub struct SuggestionIndex {
	rule: WordRule,
	lines: FxHashMap<usize, FxHashSet<Suggestion>>,
	counts: FxHashMap<Suggestion, usize>,
}

impl SuggestionIndex {
	pub fn new(rule: WordRule) -> Self {
		Self {
			rule,
			lines: FxHashMap::default(),
			counts: FxHashMap::default(),
		}
	}

	#[inline]
	pub fn rule(&self) -> WordRule {
		self.rule
	}

	/// Replaces the words recorded for `line` with the words of `text`.
	pub fn process_line(&mut self, line: usize, text: &str) {
		let words: FxHashSet<Suggestion> = self.rule.words(text).map(Suggestion::from).collect();
		let previous = self.lines.remove(&line).unwrap_or_default();

		for word in words.difference(&previous) {
			*self.counts.entry(word.clone()).or_insert(0) += 1;
		}
		for word in previous.difference(&words) {
			self.release(word);
		}

		tracing::trace!(line, words = words.len(), "indexed line");
		if !words.is_empty() {
			self.lines.insert(line, words);
		}
	}

	/// Drops the contribution of `line`. Unknown lines are ignored.
	pub fn delete_line(&mut self, line: usize) {
		let Some(words) = self.lines.remove(&line) else {
			return;
		};
		for word in &words {
			self.release(word);
		}
		tracing::trace!(line, words = words.len(), "removed line");
	}

	/// Forgets every line, e.g. before a document is reloaded.
	pub fn clear_lines(&mut self) {
		self.lines.clear();
		self.counts.clear();
	}

	/// The union of the words of all tracked lines.
	pub fn get_all(&self) -> FxHashSet<Suggestion> {
		self.counts.keys().cloned().collect()
	}

	/// Iterates the aggregate without copying it, in no particular order.
	pub fn iter(&self) -> impl Iterator<Item = &Suggestion> {
		self.counts.keys()
	}

	/// Words extending `prefix`, sorted, excluding `prefix` itself.
	pub fn complete(&self, prefix: &str) -> Vec<&Suggestion> {
		let mut matches: Vec<_> = self
			.counts
			.keys()
			.filter(|word| word.as_str().len() > prefix.len() && word.as_str().starts_with(prefix))
			.collect();
		matches.sort_unstable();
		matches
	}

	pub fn contains(&self, word: &str) -> bool {
		self.counts.contains_key(word)
	}

	/// Number of distinct words.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Number of lines currently contributing at least one word.
	pub fn line_count(&self) -> usize {
		self.lines.len()
	}

	fn release(&mut self, word: &Suggestion) {
		if let Some(count) = self.counts.get_mut(word.as_str()) {
			*count -= 1;
			if *count == 0 {
				self.counts.remove(word.as_str());
			}
		}
	}
}
