//! Syntax validation results and helpers for grammar validators.
//!
//! Validators report at most one fault: the first structural violation ends
//! the run. Faults are ordinary return values, never panics, and a language
//! without a grammar says so explicitly with [`SyntaxFault::unsupported`].

use thiserror::Error;

use crate::token::{Position, Token, TokenKind};

/// Message carried by the fault of a language with no grammar.
pub const UNSUPPORTED_MESSAGE: &str = "Unable to parse unsupported language";

/// Distinguishes real syntax errors from a missing grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
	/// The source violates the grammar.
	Syntax,
	/// No grammar is available for the language.
	Unsupported,
}

/// The first syntax error found in a document.
///
/// `line` and `column` are 1-based for syntax faults. The unsupported fault
/// is always reported at `0:0`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at {line}:{column}")]
pub struct SyntaxFault {
	pub kind: FaultKind,
	pub message: String,
	pub line: u32,
	pub column: u32,
}

impl SyntaxFault {
	pub fn new(message: impl Into<String>, pos: Position) -> Self {
		Self {
			kind: FaultKind::Syntax,
			message: message.into(),
			line: pos.line,
			column: pos.column,
		}
	}

	/// Fault located at the first character of `token`.
	pub fn at<K>(message: impl Into<String>, token: &Token<'_, K>) -> Self {
		Self::new(message, token.pos)
	}

	/// Fault for a token the grammar did not expect at this point.
	pub fn unexpected<K: TokenKind>(token: &Token<'_, K>) -> Self {
		if token.is_eof() {
			Self::at("Unexpected end of input", token)
		} else {
			Self::at(format!("Unexpected '{}'", token.lexeme), token)
		}
	}

	pub fn unsupported() -> Self {
		Self {
			kind: FaultKind::Unsupported,
			message: UNSUPPORTED_MESSAGE.to_string(),
			line: 0,
			column: 0,
		}
	}

	#[inline]
	pub fn is_unsupported(&self) -> bool {
		self.kind == FaultKind::Unsupported
	}
}

/// Result of validating a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
	Ok,
	Fault(SyntaxFault),
}

impl ParseOutcome {
	pub fn unsupported() -> Self {
		Self::Fault(SyntaxFault::unsupported())
	}

	#[inline]
	pub fn is_ok(&self) -> bool {
		matches!(self, Self::Ok)
	}

	/// Returns true only when the language has no grammar, never for real errors.
	pub fn is_unsupported(&self) -> bool {
		self.fault().is_some_and(SyntaxFault::is_unsupported)
	}

	pub fn fault(&self) -> Option<&SyntaxFault> {
		match self {
			Self::Ok => None,
			Self::Fault(fault) => Some(fault),
		}
	}
}

impl From<Result<(), SyntaxFault>> for ParseOutcome {
	fn from(result: Result<(), SyntaxFault>) -> Self {
		match result {
			Ok(()) => Self::Ok,
			Err(fault) => Self::Fault(fault),
		}
	}
}

/// Syntax checker for one language.
pub trait Validator: Send + Sync {
	/// Validates `source`. `name` identifies the document (usually its file
	/// name) and is only used for diagnostics.
	fn validate(&self, name: &str, source: &str) -> ParseOutcome;
}

/// Validator for languages without a grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unsupported;

impl Validator for Unsupported {
	fn validate(&self, name: &str, _source: &str) -> ParseOutcome {
		tracing::debug!(name, "no grammar available; reporting unsupported");
		ParseOutcome::unsupported()
	}
}

/// Validator that accepts everything (plain text).
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl Validator for AcceptAll {
	fn validate(&self, _name: &str, _source: &str) -> ParseOutcome {
		ParseOutcome::Ok
	}
}

/// Trivia-skipping, one-token-lookahead view of a token stream for
/// recursive-descent validators.
///
/// Once the underlying stream hits `EOF`, the `EOF` token is returned forever.
pub struct TokenStream<'a, K, I> {
	tokens: I,
	peeked: Option<Token<'a, K>>,
	end: Token<'a, K>,
}

impl<'a, K, I> TokenStream<'a, K, I>
where
	K: TokenKind,
	I: Iterator<Item = Token<'a, K>>,
{
	pub fn new(tokens: I) -> Self {
		Self {
			tokens,
			peeked: None,
			end: Token {
				kind: K::EOF,
				lexeme: "",
				start: 0,
				end: 0,
				pos: Position::START,
			},
		}
	}

	/// Returns the next significant token without consuming it.
	pub fn peek(&mut self) -> Token<'a, K> {
		if let Some(token) = self.peeked {
			return token;
		}
		let token = loop {
			match self.tokens.next() {
				Some(token) if token.is_trivia() => continue,
				Some(token) => break token,
				None => break self.end,
			}
		};
		if token.is_eof() {
			self.end = token;
		}
		self.peeked = Some(token);
		token
	}

	/// Consumes and returns the next significant token.
	pub fn bump(&mut self) -> Token<'a, K> {
		let token = self.peek();
		if !token.is_eof() {
			self.peeked = None;
		}
		token
	}

	/// Consumes the next token if it has the given kind.
	pub fn eat(&mut self, kind: K) -> Option<Token<'a, K>> {
		(self.peek().kind == kind).then(|| self.bump())
	}

	/// Consumes a token of `kind` or fails with `message` at the offending token.
	pub fn expect(&mut self, kind: K, message: &str) -> Result<Token<'a, K>, SyntaxFault> {
		let token = self.peek();
		if token.kind == kind {
			Ok(self.bump())
		} else if token.is_eof() {
			Err(SyntaxFault::at(format!("{message}, found end of input"), &token))
		} else {
			Err(SyntaxFault::at(format!("{message}, found '{}'", token.lexeme), &token))
		}
	}
}
