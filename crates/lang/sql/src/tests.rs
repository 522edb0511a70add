use pretty_assertions::assert_eq;
use proptest::prelude::*;
use quill_language::{Language, StyleCategory, StyleSpan, UNSUPPORTED_MESSAGE};

use super::*;

fn kinds(source: &str) -> Vec<SqlToken> {
	Sql.tokenize(source).map(|t| t.kind).collect()
}

fn significant(source: &str) -> Vec<SqlToken> {
	Sql.tokenize(source).filter(|t| !t.is_trivia()).map(|t| t.kind).collect()
}

#[test]
fn test_query_tokens() {
	use SqlToken::*;
	assert_eq!(
		significant("select Count(*) FROM users WHERE id = ?;"),
		[Keyword, Function, LParen, Star, RParen, Keyword, Identifier, Keyword, Identifier, Eq, Variable, Semicolon, Eof]
	);
}

#[test]
fn test_words_are_case_insensitive() {
	use SqlToken::*;
	assert_eq!(
		significant("CREATE table t (ok Boolean default true, n text NULL)"),
		[
			Keyword, Keyword, Identifier, LParen, Identifier, DataType, Keyword, Boolean, Comma, Identifier, DataType,
			Null, RParen, Eof
		]
	);
}

#[test]
fn test_function_names_need_a_call() {
	use SqlToken::*;
	assert_eq!(significant("count"), [Identifier, Eof]);
	assert_eq!(significant("count (x)"), [Identifier, LParen, Identifier, RParen, Eof]);
	assert_eq!(significant("selected"), [Identifier, Eof]);
}

#[test]
fn test_quoting() {
	use SqlToken::*;
	let tokens: Vec<_> = Sql.tokenize("'it''s' \"col\" `c`").collect();
	assert_eq!(tokens[0].kind, String);
	assert_eq!(tokens[0].lexeme, "'it''s'");
	assert_eq!(kinds("'it''s' \"col\" `c`"), [String, Whitespace, QuotedIdentifier, Whitespace, QuotedIdentifier, Eof]);
	assert_eq!(kinds("'open"), [String, Eof]);
}

#[test]
fn test_operators_and_parameters() {
	use SqlToken::*;
	assert_eq!(
		significant("a <= b <> c::int || d"),
		[Identifier, LtEq, Identifier, NotEq, Identifier, Cast, DataType, Concat, Identifier, Eof]
	);
	assert_eq!(significant(":name @x @@rowcount $1"), [Variable, Variable, Variable, Variable, Eof]);
}

#[test]
fn test_comments_and_numbers() {
	use SqlToken::*;
	assert_eq!(kinds("-- c\n/* b"), [LineComment, Whitespace, BlockComment, Eof]);
	assert_eq!(significant("1 2.5 .5 1e3 -1"), [Integer, Float, Float, Float, Minus, Integer, Eof]);
	assert_eq!(significant("t.col"), [Identifier, Dot, Identifier, Eof]);
}

#[test]
fn test_validation_is_unsupported() {
	let outcome = Sql.validate("x.sql", "SELECT 1");
	assert!(outcome.is_unsupported());
	let fault = outcome.fault().cloned().unwrap_or_else(|| panic!("expected a fault"));
	assert_eq!(fault.message, UNSUPPORTED_MESSAGE);
	assert_eq!((fault.line, fault.column), (0, 0));

	// Even syntactically broken input gets the same answer.
	assert_eq!(Sql.validate("x.sql", "SELEC ((("), outcome);
}

#[test]
fn test_style_categories() {
	let span = |start, end, category| StyleSpan { start, end, category };
	assert_eq!(
		Sql.style_source("SELECT 'a' -- x"),
		vec![
			span(0, 6, StyleCategory::Keyword),
			span(7, 10, StyleCategory::String),
			span(11, 15, StyleCategory::Comment),
		]
	);
	assert_eq!(
		Sql.style_source("max(n)::int"),
		vec![
			span(0, 3, StyleCategory::Method),
			span(6, 8, StyleCategory::Operator),
			span(8, 11, StyleCategory::Type),
		]
	);
}

#[test]
fn test_suggestions_keep_whole_identifiers() {
	let line = "SELECT café_total, v$session FROM t";
	let mut index = Sql.suggestion_index();
	index.process_line(0, line);

	let identifiers: Vec<_> = Sql
		.tokenize(line)
		.filter(|t| t.kind == SqlToken::Identifier)
		.map(|t| t.lexeme)
		.collect();
	assert_eq!(identifiers, ["café_total", "v$session", "t"]);
	for ident in identifiers.iter().filter(|i| i.chars().count() >= index.rule().min_len) {
		assert!(index.contains(ident), "{ident} missing");
	}
	assert!(!index.contains("caf"));
	assert!(!index.contains("session"));
}

proptest! {
	#[test]
	fn prop_tokens_partition_input(src in "\\PC*") {
		let rebuilt: String = Sql.tokenize(&src).map(|t| t.lexeme).collect();
		prop_assert_eq!(rebuilt, src);
	}

	#[test]
	fn prop_identifiers_are_suggested(src in "[a-zé_$ ,]{0,40}") {
		let mut index = Sql.suggestion_index();
		index.process_line(0, &src);
		for token in Sql.tokenize(&src).filter(|t| t.kind == SqlToken::Identifier) {
			if token.lexeme.chars().count() >= index.rule().min_len {
				prop_assert!(index.contains(token.lexeme));
			}
		}
	}

	#[test]
	fn prop_spans_sorted(src in "\\PC*") {
		let spans = Sql.style_source(&src);
		for pair in spans.windows(2) {
			prop_assert!(pair[0].end <= pair[1].start);
		}
	}
}
