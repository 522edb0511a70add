//! Token and source position types shared by every tokenizer.

use std::fmt;
use std::ops::Range;

/// A 1-based line/column location in source text.
///
/// Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
	/// Line number, starting at 1.
	pub line: u32,
	/// Column number, starting at 1.
	pub column: u32,
}

impl Position {
	/// The location of the first character of any document.
	pub const START: Position = Position { line: 1, column: 1 };

	pub const fn new(line: u32, column: u32) -> Self {
		Self { line, column }
	}
}

impl Default for Position {
	fn default() -> Self {
		Self::START
	}
}

impl fmt::Display for Position {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.line, self.column)
	}
}

/// Closed set of token kinds produced by one grammar.
///
/// Every grammar must be able to represent an unrecognised character and the
/// end of input, so scanning never has to fail.
pub trait TokenKind: Copy + Eq + fmt::Debug + Send + Sync + 'static {
	/// Kind assigned to a character the grammar does not recognise.
	const BAD_CHARACTER: Self;
	/// Kind of the zero-width token that terminates every token stream.
	const EOF: Self;

	/// Returns true for whitespace and comments.
	fn is_trivia(self) -> bool;
}

/// A classified, located slice of the source text.
///
/// `start`/`end` are 0-based byte offsets into the tokenized string, so
/// `&source[token.range()] == token.lexeme` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a, K> {
	pub kind: K,
	pub lexeme: &'a str,
	pub start: usize,
	pub end: usize,
	/// Location of the first character of the lexeme.
	pub pos: Position,
}

impl<'a, K> Token<'a, K> {
	#[inline]
	pub fn line(&self) -> u32 {
		self.pos.line
	}

	#[inline]
	pub fn column(&self) -> u32 {
		self.pos.column
	}

	#[inline]
	pub fn range(&self) -> Range<usize> {
		self.start..self.end
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.end - self.start
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}

	/// Re-tags the token with another kind type, keeping text and location.
	pub fn map_kind<J>(self, f: impl FnOnce(K) -> J) -> Token<'a, J> {
		Token {
			kind: f(self.kind),
			lexeme: self.lexeme,
			start: self.start,
			end: self.end,
			pos: self.pos,
		}
	}
}

impl<K: TokenKind> Token<'_, K> {
	#[inline]
	pub fn is_trivia(&self) -> bool {
		self.kind.is_trivia()
	}

	#[inline]
	pub fn is_eof(&self) -> bool {
		self.kind == K::EOF
	}
}
