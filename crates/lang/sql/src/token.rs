use quill_language::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlToken {
	Keyword,
	DataType,
	/// A builtin function name directly followed by `(`.
	Function,
	Boolean,
	Null,

	Integer,
	Float,
	String,
	/// `"name"` or `` `name` ``.
	QuotedIdentifier,
	Identifier,
	/// Bind parameters: `@name`, `@@name`, `:name`, `$1` and `?`.
	Variable,

	Eq,
	NotEq,
	Lt,
	LtEq,
	Gt,
	GtEq,
	Plus,
	Minus,
	Star,
	Slash,
	Percent,
	/// `||`
	Concat,
	/// `::` cast.
	Cast,

	LParen,
	RParen,
	Comma,
	Semicolon,
	Dot,

	LineComment,
	BlockComment,
	Whitespace,
	BadCharacter,
	Eof,
}

impl TokenKind for SqlToken {
	const BAD_CHARACTER: Self = SqlToken::BadCharacter;
	const EOF: Self = SqlToken::Eof;

	fn is_trivia(self) -> bool {
		matches!(self, Self::Whitespace | Self::LineComment | Self::BlockComment)
	}
}

pub(crate) const OPERATORS: &[(&str, SqlToken)] = &[
	("=", SqlToken::Eq),
	("==", SqlToken::Eq),
	("<>", SqlToken::NotEq),
	("!=", SqlToken::NotEq),
	("<", SqlToken::Lt),
	("<=", SqlToken::LtEq),
	(">", SqlToken::Gt),
	(">=", SqlToken::GtEq),
	("+", SqlToken::Plus),
	("-", SqlToken::Minus),
	("*", SqlToken::Star),
	("/", SqlToken::Slash),
	("%", SqlToken::Percent),
	("||", SqlToken::Concat),
	("::", SqlToken::Cast),
	("(", SqlToken::LParen),
	(")", SqlToken::RParen),
	(",", SqlToken::Comma),
	(";", SqlToken::Semicolon),
	(".", SqlToken::Dot),
];

pub(crate) const KEYWORDS: &[&str] = &[
	"ADD", "ALL", "ALTER", "AND", "AS", "ASC", "BEGIN", "BETWEEN", "BY", "CASCADE", "CASE", "CHECK", "COLUMN",
	"COMMIT", "CONSTRAINT", "CREATE", "CROSS", "DATABASE", "DEFAULT", "DELETE", "DESC", "DISTINCT", "DROP", "ELSE",
	"END", "EXCEPT", "EXISTS", "FOREIGN", "FROM", "FULL", "GROUP", "HAVING", "IF", "IN", "INDEX", "INNER", "INSERT",
	"INTERSECT", "INTO", "IS", "JOIN", "KEY", "LEFT", "LIKE", "LIMIT", "NATURAL", "NOT", "OFFSET", "ON", "OR",
	"ORDER", "OUTER", "PRIMARY", "REFERENCES", "RENAME", "REPLACE", "RETURNING", "RIGHT", "ROLLBACK", "SCHEMA",
	"SELECT", "SET", "TABLE", "THEN", "TO", "TRANSACTION", "TRIGGER", "UNION", "UNIQUE", "UPDATE", "USING", "VALUES",
	"VIEW", "WHEN", "WHERE", "WITH",
];

pub(crate) const DATA_TYPES: &[&str] = &[
	"BIGINT", "BLOB", "BOOL", "BOOLEAN", "CHAR", "DATE", "DATETIME", "DECIMAL", "DOUBLE", "FLOAT", "INT", "INTEGER",
	"INTERVAL", "JSON", "NUMERIC", "REAL", "SERIAL", "SMALLINT", "TEXT", "TIME", "TIMESTAMP", "TINYINT", "UUID",
	"VARCHAR",
];

pub(crate) const FUNCTIONS: &[&str] = &[
	"ABS", "AVG", "CAST", "COALESCE", "CONCAT", "COUNT", "IFNULL", "LENGTH", "LOWER", "MAX", "MIN", "NOW", "NULLIF",
	"ROUND", "SUBSTR", "SUBSTRING", "SUM", "TRIM", "UPPER",
];

/// Classifies a bare word, ignoring ASCII case.
pub(crate) fn classify_word(word: &str, call: bool) -> SqlToken {
	let is = |table: &[&str]| table.iter().any(|w| w.eq_ignore_ascii_case(word));
	if word.eq_ignore_ascii_case("true") || word.eq_ignore_ascii_case("false") {
		SqlToken::Boolean
	} else if word.eq_ignore_ascii_case("null") {
		SqlToken::Null
	} else if call && is(FUNCTIONS) {
		SqlToken::Function
	} else if is(KEYWORDS) {
		SqlToken::Keyword
	} else if is(DATA_TYPES) {
		SqlToken::DataType
	} else {
		SqlToken::Identifier
	}
}
