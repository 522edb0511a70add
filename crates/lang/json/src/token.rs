use quill_language::TokenKind;

/// JSON token kinds.
///
/// `//` and `/* */` comments are recognised so JSONC files scan cleanly; the
/// validator treats them as trivia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonToken {
	LBrace,
	RBrace,
	LBrack,
	RBrack,
	Colon,
	Comma,

	/// Double-quoted string, possibly unterminated.
	String,
	Number,

	True,
	False,
	Null,

	LineComment,
	BlockComment,
	Whitespace,

	BadCharacter,
	Eof,
}

impl TokenKind for JsonToken {
	const BAD_CHARACTER: Self = JsonToken::BadCharacter;
	const EOF: Self = JsonToken::Eof;

	fn is_trivia(self) -> bool {
		matches!(self, Self::Whitespace | Self::LineComment | Self::BlockComment)
	}
}
