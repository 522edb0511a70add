//! Tokenizer driver.
//!
//! A grammar implements [`Tokenizer::scan`], which consumes exactly one token
//! from a [`Scanner`] and classifies it. [`Tokens`] turns that into a lazy,
//! total token stream: lexemes partition the input, the stream always ends
//! with one zero-width `EOF` token, and a grammar that fails to consume input
//! cannot stall it.

mod scanner;

pub use scanner::Scanner;

use std::iter::FusedIterator;

use crate::token::{Position, Token, TokenKind};

/// A single-pass, bounded-lookahead scanner for one grammar.
///
/// Implementations are plain values with no shared state; per-run state such
/// as "inside a backtick substitution" lives in [`Tokenizer::State`].
pub trait Tokenizer: Copy + Send + Sync + 'static {
	type Kind: TokenKind;
	/// Mode carried between tokens of a single run.
	type State: Default;

	/// Consumes one token starting at the scanner's offset and returns its kind.
	///
	/// Called only when input remains. Must consume at least one character.
	fn scan(&self, state: &mut Self::State, scanner: &mut Scanner<'_>) -> Self::Kind;

	/// Returns a lazy token stream over `source`.
	fn tokenize<'a>(&self, source: &'a str) -> Tokens<'a, Self> {
		Tokens::new(*self, source)
	}
}

/// Lazy token stream produced by a [`Tokenizer`].
pub struct Tokens<'a, T: Tokenizer> {
	tokenizer: T,
	scanner: Scanner<'a>,
	state: T::State,
	done: bool,
}

impl<'a, T: Tokenizer> Tokens<'a, T> {
	pub fn new(tokenizer: T, source: &'a str) -> Self {
		Self {
			tokenizer,
			scanner: Scanner::new(source),
			state: T::State::default(),
			done: false,
		}
	}
}

impl<'a, T: Tokenizer> Iterator for Tokens<'a, T> {
	type Item = Token<'a, T::Kind>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		let start = self.scanner.offset();
		let pos = self.scanner.position();

		if self.scanner.is_eof() {
			self.done = true;
			return Some(Token {
				kind: T::Kind::EOF,
				lexeme: "",
				start,
				end: start,
				pos,
			});
		}

		let mut kind = self.tokenizer.scan(&mut self.state, &mut self.scanner);
		if self.scanner.offset() == start {
			tracing::warn!(offset = start, ?kind, "tokenizer made no progress; consuming one character");
			self.scanner.bump();
			kind = T::Kind::BAD_CHARACTER;
		}

		Some(Token {
			kind,
			lexeme: self.scanner.slice_from(start),
			start,
			end: self.scanner.offset(),
			pos,
		})
	}
}

impl<T: Tokenizer> FusedIterator for Tokens<'_, T> {}
