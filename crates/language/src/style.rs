//! Token-to-style mapping.
//!
//! Stylers choose an abstract [`StyleCategory`] per token; resolving a
//! category to an actual colour is the renderer's business.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::token::{Token, TokenKind};

/// Abstract highlighting class, independent of any theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleCategory {
	Keyword,
	Type,
	/// Language constants such as `true`, `false` and `null`.
	LangConst,
	Preprocessor,
	Method,
	Number,
	String,
	Comment,
	Operator,
	AttrName,
}

impl StyleCategory {
	pub const ALL: [StyleCategory; 10] = [
		Self::Keyword,
		Self::Type,
		Self::LangConst,
		Self::Preprocessor,
		Self::Method,
		Self::Number,
		Self::String,
		Self::Comment,
		Self::Operator,
		Self::AttrName,
	];

	/// Stable lowercase label, matching the serde representation.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Keyword => "keyword",
			Self::Type => "type",
			Self::LangConst => "lang_const",
			Self::Preprocessor => "preprocessor",
			Self::Method => "method",
			Self::Number => "number",
			Self::String => "string",
			Self::Comment => "comment",
			Self::Operator => "operator",
			Self::AttrName => "attr_name",
		}
	}
}

impl fmt::Display for StyleCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A styled byte range of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StyleSpan {
	pub start: usize,
	pub end: usize,
	pub category: StyleCategory,
}

/// Maps a token sequence to style spans.
///
/// Output is a pure function of the tokens: spans are sorted by start offset
/// and never overlap. Unstyled regions produce no span.
pub trait Styler: Send + Sync {
	type Kind: TokenKind;

	/// Category for a token kind, or `None` for default text.
	fn category(&self, kind: Self::Kind) -> Option<StyleCategory>;

	fn style<'a, I>(&self, tokens: I) -> Vec<StyleSpan>
	where
		I: IntoIterator<Item = Token<'a, Self::Kind>>,
	{
		let mut spans = SpanBuilder::default();
		for token in tokens {
			spans.push(token.start, token.end, self.category(token.kind));
		}
		spans.finish()
	}
}

/// Accumulates spans left to right, enforcing order and disjointness.
///
/// Adjacent ranges of the same category are merged. Empty ranges are ignored
/// and a range starting before the end of the previous one is dropped.
#[derive(Debug, Default)]
pub struct SpanBuilder {
	spans: Vec<StyleSpan>,
	cursor: usize,
}

impl SpanBuilder {
	pub fn push(&mut self, start: usize, end: usize, category: Option<StyleCategory>) {
		if end <= start || start < self.cursor {
			return;
		}
		self.cursor = end;

		let Some(category) = category else {
			return;
		};
		match self.spans.last_mut() {
			Some(last) if last.category == category && last.end == start => last.end = end,
			_ => self.spans.push(StyleSpan { start, end, category }),
		}
	}

	pub fn finish(self) -> Vec<StyleSpan> {
		self.spans
	}
}
