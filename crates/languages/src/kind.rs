use quill_lang_json::JsonToken;
use quill_lang_shell::ShellToken;
use quill_lang_sql::SqlToken;
use quill_language::{TextToken, Token, TokenKind};

/// Token kind of any built-in language, tagged with its grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnyTokenKind {
	Json(JsonToken),
	Shell(ShellToken),
	Sql(SqlToken),
	Text(TextToken),
}

impl AnyTokenKind {
	pub fn is_trivia(self) -> bool {
		match self {
			Self::Json(k) => k.is_trivia(),
			Self::Shell(k) => k.is_trivia(),
			Self::Sql(k) => k.is_trivia(),
			Self::Text(k) => k.is_trivia(),
		}
	}

	pub fn is_eof(self) -> bool {
		match self {
			Self::Json(k) => k == JsonToken::EOF,
			Self::Shell(k) => k == ShellToken::EOF,
			Self::Sql(k) => k == SqlToken::EOF,
			Self::Text(k) => k == TextToken::EOF,
		}
	}

	pub fn json(self) -> Option<JsonToken> {
		match self {
			Self::Json(k) => Some(k),
			_ => None,
		}
	}

	pub fn shell(self) -> Option<ShellToken> {
		match self {
			Self::Shell(k) => Some(k),
			_ => None,
		}
	}

	pub fn sql(self) -> Option<SqlToken> {
		match self {
			Self::Sql(k) => Some(k),
			_ => None,
		}
	}

	pub fn text(self) -> Option<TextToken> {
		match self {
			Self::Text(k) => Some(k),
			_ => None,
		}
	}
}

/// Keeps the tokens of one grammar, restoring their concrete kind.
pub(crate) fn narrow<'a, K>(
	tokens: impl IntoIterator<Item = Token<'a, AnyTokenKind>>,
	select: fn(AnyTokenKind) -> Option<K>,
) -> impl Iterator<Item = Token<'a, K>> {
	tokens
		.into_iter()
		.filter_map(move |token| select(token.kind).map(|kind| token.map_kind(|_| kind)))
}
