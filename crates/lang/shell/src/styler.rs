use quill_language::{StyleCategory, Styler};

use crate::token::ShellToken;

#[derive(Debug, Clone, Copy, Default)]
pub struct ShellStyler;

impl Styler for ShellStyler {
	type Kind = ShellToken;

	fn category(&self, kind: ShellToken) -> Option<StyleCategory> {
		use ShellToken::*;
		match kind {
			k if k.is_keyword() => Some(StyleCategory::Keyword),
			k if k.is_operator() => Some(StyleCategory::Operator),
			True | False => Some(StyleCategory::LangConst),
			IntegerLiteral | DoubleLiteral => Some(StyleCategory::Number),
			DoubleQuotedString | SingleQuotedString | Escape | EvalContent | HeredocBody => Some(StyleCategory::String),
			Comment => Some(StyleCategory::Comment),
			Shebang => Some(StyleCategory::Preprocessor),
			_ => None,
		}
	}
}
