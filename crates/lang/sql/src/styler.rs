use quill_language::{StyleCategory, Styler};

use crate::token::SqlToken;

#[derive(Debug, Clone, Copy, Default)]
pub struct SqlStyler;

impl Styler for SqlStyler {
	type Kind = SqlToken;

	fn category(&self, kind: SqlToken) -> Option<StyleCategory> {
		use SqlToken::*;
		match kind {
			Keyword => Some(StyleCategory::Keyword),
			DataType => Some(StyleCategory::Type),
			Function => Some(StyleCategory::Method),
			Boolean | Null => Some(StyleCategory::LangConst),
			Integer | Float => Some(StyleCategory::Number),
			String => Some(StyleCategory::String),
			LineComment | BlockComment => Some(StyleCategory::Comment),
			Eq | NotEq | Lt | LtEq | Gt | GtEq | Plus | Minus | Star | Slash | Percent | Concat | Cast => {
				Some(StyleCategory::Operator)
			}
			QuotedIdentifier | Identifier | Variable | LParen | RParen | Comma | Semicolon | Dot | Whitespace
			| BadCharacter | Eof => None,
		}
	}
}
