use quill_language::{Scanner, Tokenizer};

use crate::token::JsonToken;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLexer;

impl Tokenizer for JsonLexer {
	type Kind = JsonToken;
	type State = ();

	fn scan(&self, _: &mut (), s: &mut Scanner<'_>) -> JsonToken {
		let start = s.offset();
		let Some(c) = s.peek() else {
			return JsonToken::Eof;
		};

		match c {
			' ' | '\t' | '\n' | '\r' => {
				s.eat_while(|c| matches!(c, ' ' | '\t' | '\n' | '\r'));
				JsonToken::Whitespace
			}
			'{' | '}' | '[' | ']' | ':' | ',' => {
				s.bump();
				match c {
					'{' => JsonToken::LBrace,
					'}' => JsonToken::RBrace,
					'[' => JsonToken::LBrack,
					']' => JsonToken::RBrack,
					':' => JsonToken::Colon,
					_ => JsonToken::Comma,
				}
			}
			'"' => {
				string(s);
				JsonToken::String
			}
			'-' | '0'..='9' => number(s),
			'/' if s.starts_with("//") => {
				s.eat_line();
				JsonToken::LineComment
			}
			'/' if s.starts_with("/*") => {
				block_comment(s);
				JsonToken::BlockComment
			}
			c if c.is_ascii_alphabetic() => {
				s.eat_while(|c| c.is_ascii_alphanumeric() || c == '_');
				match s.slice_from(start) {
					"true" => JsonToken::True,
					"false" => JsonToken::False,
					"null" => JsonToken::Null,
					_ => JsonToken::BadCharacter,
				}
			}
			_ => {
				s.bump();
				JsonToken::BadCharacter
			}
		}
	}
}

/// Consumes a string through its closing quote, or to end of input.
fn string(s: &mut Scanner<'_>) {
	s.bump();
	while let Some(c) = s.bump() {
		match c {
			'"' => return,
			'\\' => {
				s.bump();
			}
			_ => {}
		}
	}
}

/// `-?digits(.digits)?([eE][+-]?digits)?`; leading zeros are left for the
/// validator to reject.
fn number(s: &mut Scanner<'_>) -> JsonToken {
	s.eat('-');
	if s.eat_while(|c| c.is_ascii_digit()) == 0 {
		return JsonToken::BadCharacter;
	}
	if s.peek() == Some('.') && s.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) {
		s.bump();
		s.eat_while(|c| c.is_ascii_digit());
	}
	if matches!(s.peek(), Some('e' | 'E')) {
		let digit_at = if matches!(s.peek_nth(1), Some('+' | '-')) { 2 } else { 1 };
		if s.peek_nth(digit_at).is_some_and(|c| c.is_ascii_digit()) {
			for _ in 0..digit_at {
				s.bump();
			}
			s.eat_while(|c| c.is_ascii_digit());
		}
	}
	JsonToken::Number
}

fn block_comment(s: &mut Scanner<'_>) {
	s.eat_str("/*");
	while !s.is_eof() {
		if s.eat_str("*/") {
			return;
		}
		s.bump();
	}
}
