use quill_language::{SpanBuilder, StyleCategory, StyleSpan, Styler, Token};

use crate::token::JsonToken;

/// Styles object keys as attribute names and everything else by kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonStyler;

impl Styler for JsonStyler {
	type Kind = JsonToken;

	fn category(&self, kind: JsonToken) -> Option<StyleCategory> {
		match kind {
			JsonToken::String => Some(StyleCategory::String),
			JsonToken::Number => Some(StyleCategory::Number),
			JsonToken::True | JsonToken::False | JsonToken::Null => Some(StyleCategory::LangConst),
			JsonToken::LineComment | JsonToken::BlockComment => Some(StyleCategory::Comment),
			JsonToken::Colon | JsonToken::Comma => Some(StyleCategory::Operator),
			JsonToken::LBrace
			| JsonToken::RBrace
			| JsonToken::LBrack
			| JsonToken::RBrack
			| JsonToken::Whitespace
			| JsonToken::BadCharacter
			| JsonToken::Eof => None,
		}
	}

	/// A string whose next significant token is `:` is a key.
	fn style<'a, I>(&self, tokens: I) -> Vec<StyleSpan>
	where
		I: IntoIterator<Item = Token<'a, JsonToken>>,
	{
		let tokens: Vec<_> = tokens.into_iter().collect();
		let mut spans = SpanBuilder::default();
		for (i, token) in tokens.iter().enumerate() {
			let category = if token.kind == JsonToken::String && is_key(&tokens[i + 1..]) {
				Some(StyleCategory::AttrName)
			} else {
				self.category(token.kind)
			};
			spans.push(token.start, token.end, category);
		}
		spans.finish()
	}
}

fn is_key(rest: &[Token<'_, JsonToken>]) -> bool {
	rest.iter().find(|t| !t.is_trivia()).is_some_and(|t| t.kind == JsonToken::Colon)
}
