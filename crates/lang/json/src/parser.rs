//! Recursive-descent JSON validator.

use quill_language::{ParseOutcome, SyntaxFault, Token, TokenStream, Tokenizer, Tokens, Validator};

use crate::lexer::JsonLexer;
use crate::token::JsonToken;

/// Deepest array/object nesting accepted before reporting a fault.
pub const MAX_DEPTH: usize = 512;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonValidator;

impl Validator for JsonValidator {
	fn validate(&self, name: &str, source: &str) -> ParseOutcome {
		let result = Parser::new(source).document();
		if let Err(fault) = &result {
			tracing::debug!(name, %fault, "json syntax fault");
		}
		result.into()
	}
}

type Result<T = ()> = std::result::Result<T, SyntaxFault>;

struct Parser<'a> {
	tokens: TokenStream<'a, JsonToken, Tokens<'a, JsonLexer>>,
	depth: usize,
}

impl<'a> Parser<'a> {
	fn new(source: &'a str) -> Self {
		Self {
			tokens: TokenStream::new(JsonLexer.tokenize(source)),
			depth: 0,
		}
	}

	/// A document is empty or exactly one value.
	fn document(&mut self) -> Result {
		if self.tokens.peek().is_eof() {
			return Ok(());
		}
		self.value()?;

		let trailing = self.tokens.peek();
		if trailing.is_eof() {
			Ok(())
		} else {
			Err(SyntaxFault::at(format!("Unexpected '{}' after end of document", trailing.lexeme), &trailing))
		}
	}

	fn value(&mut self) -> Result {
		let token = self.tokens.bump();
		match token.kind {
			JsonToken::LBrace => self.nested(&token, Self::object),
			JsonToken::LBrack => self.nested(&token, Self::array),
			JsonToken::String => check_string(&token),
			JsonToken::Number => check_number(&token),
			JsonToken::True | JsonToken::False | JsonToken::Null => Ok(()),
			_ => Err(SyntaxFault::unexpected(&token)),
		}
	}

	fn nested(&mut self, open: &Token<'a, JsonToken>, body: fn(&mut Self) -> Result) -> Result {
		if self.depth == MAX_DEPTH {
			return Err(SyntaxFault::at("Nesting too deep", open));
		}
		self.depth += 1;
		body(self)?;
		self.depth -= 1;
		Ok(())
	}

	fn object(&mut self) -> Result {
		if self.tokens.eat(JsonToken::RBrace).is_some() {
			return Ok(());
		}
		loop {
			let key = self.tokens.expect(JsonToken::String, "Expected property name")?;
			check_string(&key)?;
			self.tokens.expect(JsonToken::Colon, "Expected ':' after property name")?;
			self.value()?;

			let next = self.tokens.bump();
			match next.kind {
				JsonToken::Comma => continue,
				JsonToken::RBrace => return Ok(()),
				_ => return Err(expected(&next, "Expected ',' or '}'")),
			}
		}
	}

	fn array(&mut self) -> Result {
		if self.tokens.eat(JsonToken::RBrack).is_some() {
			return Ok(());
		}
		loop {
			self.value()?;

			let next = self.tokens.bump();
			match next.kind {
				JsonToken::Comma => continue,
				JsonToken::RBrack => return Ok(()),
				_ => return Err(expected(&next, "Expected ',' or ']'")),
			}
		}
	}
}

fn expected(token: &Token<'_, JsonToken>, message: &str) -> SyntaxFault {
	match token.kind {
		JsonToken::Eof => SyntaxFault::at(format!("{message}, found end of input"), token),
		_ => SyntaxFault::at(format!("{message}, found '{}'", token.lexeme), token),
	}
}

/// Checks escapes, control characters and termination of a string token.
fn check_string(token: &Token<'_, JsonToken>) -> Result {
	let mut chars = token.lexeme.chars().skip(1);
	while let Some(c) = chars.next() {
		match c {
			'"' => return Ok(()),
			'\\' => match chars.next() {
				Some('"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't') => {}
				Some('u') => {
					if !(0..4).all(|_| chars.next().is_some_and(|c| c.is_ascii_hexdigit())) {
						return Err(SyntaxFault::at("Invalid unicode escape in string", token));
					}
				}
				Some(_) => return Err(SyntaxFault::at("Invalid escape sequence in string", token)),
				None => break,
			},
			c if u32::from(c) < 0x20 => return Err(SyntaxFault::at("Control character in string", token)),
			_ => {}
		}
	}
	Err(SyntaxFault::at("Unterminated string", token))
}

fn check_number(token: &Token<'_, JsonToken>) -> Result {
	let digits = token.lexeme.strip_prefix('-').unwrap_or(token.lexeme);
	let mut chars = digits.chars();
	if chars.next() == Some('0') && chars.next().is_some_and(|c| c.is_ascii_digit()) {
		return Err(SyntaxFault::at("Leading zeros are not allowed", token));
	}
	Ok(())
}
