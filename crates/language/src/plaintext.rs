//! Fallback language for unrecognised files.

use crate::language::{FileTypes, Language};
use crate::lexer::{Scanner, Tokenizer};
use crate::parse::AcceptAll;
use crate::style::{StyleCategory, Styler};
use crate::suggest::WordRule;
use crate::token::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextToken {
	Text,
	Eof,
}

impl TokenKind for TextToken {
	// Plain text has no invalid characters.
	const BAD_CHARACTER: Self = TextToken::Text;
	const EOF: Self = TextToken::Eof;

	fn is_trivia(self) -> bool {
		false
	}
}

/// Identity tokenizer: the whole input is one `Text` token.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextTokenizer;

impl Tokenizer for TextTokenizer {
	type Kind = TextToken;
	type State = ();

	fn scan(&self, _: &mut (), scanner: &mut Scanner<'_>) -> TextToken {
		scanner.eat_while(|_| true);
		TextToken::Text
	}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TextStyler;

impl Styler for TextStyler {
	type Kind = TextToken;

	fn category(&self, _: TextToken) -> Option<StyleCategory> {
		None
	}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl Language for PlainText {
	type Kind = TextToken;
	type Tokenizer = TextTokenizer;
	type Validator = AcceptAll;
	type Styler = TextStyler;

	fn name(&self) -> &'static str {
		"plaintext"
	}

	fn file_types(&self) -> FileTypes {
		FileTypes::NONE
	}

	fn tokenizer(&self) -> TextTokenizer {
		TextTokenizer
	}

	fn validator(&self) -> AcceptAll {
		AcceptAll
	}

	fn styler(&self) -> TextStyler {
		TextStyler
	}

	fn word_rule(&self) -> WordRule {
		WordRule::PERMISSIVE
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::token::Position;

	#[test]
	fn test_identity_tokenization() {
		let source = "héllo\nwörld {";
		let tokens: Vec<_> = PlainText.tokenize(source).collect();
		assert_eq!(tokens.len(), 2);
		assert_eq!(tokens[0].kind, TextToken::Text);
		assert_eq!(tokens[0].lexeme, source);
		assert_eq!(tokens[1].kind, TextToken::Eof);
		assert_eq!(tokens[1].pos, Position::new(2, 8));
	}

	#[test]
	fn test_plaintext_is_unstyled_and_valid() {
		assert!(PlainText.style_source("fn main() {}").is_empty());
		assert!(PlainText.validate("notes.xyz", "((( unbalanced").is_ok());
	}

	#[test]
	fn test_plaintext_words_are_permissive() {
		let mut index = PlainText.suggestion_index();
		index.process_line(0, "Grüße aus Köln");
		assert!(index.contains("Grüße"));
		assert!(index.contains("Köln"));
	}
}
