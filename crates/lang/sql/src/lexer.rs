use quill_language::{Scanner, Tokenizer, WordRule};

use crate::token::{OPERATORS, SqlToken, classify_word};

#[derive(Debug, Clone, Copy, Default)]
pub struct SqlLexer;

impl Tokenizer for SqlLexer {
	type Kind = SqlToken;
	type State = ();

	fn scan(&self, _: &mut (), s: &mut Scanner<'_>) -> SqlToken {
		let start = s.offset();
		let Some(c) = s.peek() else {
			return SqlToken::Eof;
		};

		match c {
			c if c.is_whitespace() => {
				s.eat_while(char::is_whitespace);
				SqlToken::Whitespace
			}
			'-' if s.starts_with("--") => {
				s.eat_line();
				SqlToken::LineComment
			}
			'/' if s.starts_with("/*") => {
				s.eat_str("/*");
				while !s.is_eof() && !s.eat_str("*/") {
					s.bump();
				}
				SqlToken::BlockComment
			}
			'\'' => {
				quoted(s, '\'');
				SqlToken::String
			}
			'"' | '`' => {
				quoted(s, c);
				SqlToken::QuotedIdentifier
			}
			'0'..='9' => number(s),
			'.' if s.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) => number(s),
			'@' => {
				s.bump();
				s.eat('@');
				s.eat_while(is_word_char);
				SqlToken::Variable
			}
			':' if s.peek_nth(1).is_some_and(is_word_start) => {
				s.bump();
				s.eat_while(is_word_char);
				SqlToken::Variable
			}
			'$' if s.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) => {
				s.bump();
				s.eat_while(|c| c.is_ascii_digit());
				SqlToken::Variable
			}
			'?' => {
				s.bump();
				SqlToken::Variable
			}
			c if is_word_start(c) => {
				s.eat_while(is_word_char);
				let call = s.peek() == Some('(');
				classify_word(s.slice_from(start), call)
			}
			_ => s.eat_longest(OPERATORS).unwrap_or_else(|| {
				s.bump();
				SqlToken::BadCharacter
			}),
		}
	}
}

/// Unquoted identifier class, shared with the suggestion index.
pub(crate) const IDENTIFIER: WordRule = WordRule {
	continue_chars: "$",
	..WordRule::PERMISSIVE
};

fn is_word_start(c: char) -> bool {
	IDENTIFIER.is_start(c)
}

fn is_word_char(c: char) -> bool {
	IDENTIFIER.is_continue(c)
}

/// Consumes a quoted run where a doubled quote stands for itself.
fn quoted(s: &mut Scanner<'_>, quote: char) {
	s.bump();
	while let Some(c) = s.bump() {
		if c == quote && !s.eat(quote) {
			return;
		}
	}
}

fn number(s: &mut Scanner<'_>) -> SqlToken {
	let mut kind = SqlToken::Integer;
	s.eat_while(|c| c.is_ascii_digit());
	if s.peek() == Some('.') && s.peek_nth(1).is_none_or(|c| c.is_ascii_digit() || c.is_whitespace()) {
		s.bump();
		s.eat_while(|c| c.is_ascii_digit());
		kind = SqlToken::Float;
	}
	if matches!(s.peek(), Some('e' | 'E')) {
		let digit_at = if matches!(s.peek_nth(1), Some('+' | '-')) { 2 } else { 1 };
		if s.peek_nth(digit_at).is_some_and(|c| c.is_ascii_digit()) {
			for _ in 0..digit_at {
				s.bump();
			}
			s.eat_while(|c| c.is_ascii_digit());
			kind = SqlToken::Float;
		}
	}
	kind
}
