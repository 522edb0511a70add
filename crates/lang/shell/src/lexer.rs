use quill_language::{Scanner, Tokenizer};

use crate::token::{OPERATORS, ShellToken};

#[derive(Debug, Clone, Copy, Default)]
pub struct ShellLexer;

/// Modes carried across tokens: backtick substitution, arithmetic
/// `((...))`, and here-documents waiting for the end of their line.
#[derive(Debug, Clone, Default)]
pub struct LexState {
	in_backtick: bool,
	/// Open `((` groups, inside which `<<` is a shift.
	arith_depth: u32,
	/// Here-documents opened on the current line, in order.
	pending: Vec<Heredoc>,
	/// The next token is the body of the pending here-documents.
	in_body: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Heredoc {
	delimiter: String,
	/// `<<-` form: leading tabs are ignored on the delimiter line.
	strip_tabs: bool,
}

impl Tokenizer for ShellLexer {
	type Kind = ShellToken;
	type State = LexState;

	fn scan(&self, state: &mut LexState, s: &mut Scanner<'_>) -> ShellToken {
		let start = s.offset();
		let Some(c) = s.peek() else {
			return ShellToken::Eof;
		};

		if std::mem::take(&mut state.in_body) {
			heredoc_bodies(&mut state.pending, s);
			return ShellToken::HeredocBody;
		}

		if state.in_backtick && c != '`' {
			s.eat_while(|c| c != '`');
			return ShellToken::EvalContent;
		}

		match c {
			'`' => {
				s.bump();
				state.in_backtick = !state.in_backtick;
				ShellToken::Backtick
			}
			'#' if start == 0 && s.starts_with("#!") => {
				s.eat_line();
				ShellToken::Shebang
			}
			'#' if at_word_start(s.prev()) => {
				s.eat_line();
				ShellToken::Comment
			}
			// Special parameters: `$#`, `$?`, `$@`, `$!`, `$*`, `$-`, `$$`.
			'#' | '?' | '@' | '!' | '*' | '-' | '$' if s.prev() == Some('$') => {
				s.bump();
				ShellToken::Identifier
			}
			'#' => {
				s.bump();
				ShellToken::Identifier
			}
			c if c.is_whitespace() => {
				if state.pending.is_empty() {
					s.eat_while(char::is_whitespace);
				} else {
					// Stop after the newline; the bodies start on the next line.
					s.eat_while(|c| c.is_whitespace() && c != '\n');
					state.in_body = s.eat('\n');
				}
				ShellToken::Whitespace
			}
			'"' => {
				double_quoted(s);
				ShellToken::DoubleQuotedString
			}
			'\'' => {
				s.bump();
				s.eat_while(|c| c != '\'');
				s.eat('\'');
				ShellToken::SingleQuotedString
			}
			'\\' => {
				s.bump();
				match s.bump() {
					// Line continuation.
					Some('\n') => ShellToken::Whitespace,
					Some(_) => ShellToken::Escape,
					None => ShellToken::BadCharacter,
				}
			}
			'0'..='9' => {
				s.eat_while(|c| c.is_ascii_digit());
				if s.peek() == Some('.') && s.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) {
					s.bump();
					s.eat_while(|c| c.is_ascii_digit());
					ShellToken::DoubleLiteral
				} else {
					ShellToken::IntegerLiteral
				}
			}
			c if c.is_ascii_alphabetic() || c == '_' => {
				s.eat_while(|c| c.is_ascii_alphanumeric() || c == '_');
				ShellToken::keyword(s.slice_from(start)).unwrap_or(ShellToken::Identifier)
			}
			_ => match s.eat_longest(OPERATORS) {
				Some(ShellToken::LParen) => {
					if s.peek() == Some('(') {
						state.arith_depth += 1;
					}
					ShellToken::LParen
				}
				Some(ShellToken::RParen) => {
					if state.arith_depth > 0 && s.peek() == Some(')') {
						state.arith_depth -= 1;
					}
					ShellToken::RParen
				}
				Some(ShellToken::ShiftLeft) if state.arith_depth == 0 => {
					heredoc_operator(state, s);
					ShellToken::ShiftLeft
				}
				Some(kind) => kind,
				None => {
					s.bump();
					ShellToken::BadCharacter
				}
			},
		}
	}
}

/// After `<<`: takes an optional `-` and queues the here-document named by
/// the following word. Leaves `<<` as a plain operator when no delimiter
/// follows (`<<<`, `<< 2`).
fn heredoc_operator(state: &mut LexState, s: &mut Scanner<'_>) {
	let (strip_tabs, rest) = match s.rest().strip_prefix('-') {
		Some(rest) => (true, rest),
		None => (false, s.rest()),
	};
	let Some(delimiter) = heredoc_delimiter(rest) else {
		return;
	};
	if strip_tabs {
		s.bump();
	}
	state.pending.push(Heredoc { delimiter, strip_tabs });
}

/// The delimiter word at the start of `rest`, with quoting removed.
fn heredoc_delimiter(rest: &str) -> Option<String> {
	let word = rest.trim_start_matches([' ', '\t']);
	let first = word.chars().next()?;
	if !(first.is_alphabetic() || matches!(first, '_' | '\'' | '"' | '\\')) {
		return None;
	}

	let mut delimiter = String::new();
	let mut quote = None;
	let mut chars = word.chars();
	while let Some(c) = chars.next() {
		match quote {
			_ if c == '\n' => break,
			Some(q) if c == q => quote = None,
			Some(_) => delimiter.push(c),
			None => match c {
				'\'' | '"' => quote = Some(c),
				'\\' => delimiter.extend(chars.next()),
				c if c.is_whitespace() || matches!(c, ';' | '&' | '|' | '<' | '>' | '(' | ')' | '`') => break,
				c => delimiter.push(c),
			},
		}
	}
	(!delimiter.is_empty()).then_some(delimiter)
}

/// Consumes the bodies of all pending here-documents, each through its
/// delimiter line. The newline after the last delimiter is left in place.
/// A body without a delimiter line runs to end of input.
fn heredoc_bodies(pending: &mut Vec<Heredoc>, s: &mut Scanner<'_>) {
	let mut docs = pending.drain(..).peekable();
	while let Some(doc) = docs.next() {
		loop {
			let start = s.offset();
			s.eat_line();
			let mut line = s.slice_from(start).trim_end_matches('\r');
			if doc.strip_tabs {
				line = line.trim_start_matches('\t');
			}
			if line == doc.delimiter {
				break;
			}
			if !s.eat('\n') {
				return;
			}
		}
		if docs.peek().is_some() && !s.eat('\n') {
			return;
		}
	}
}

/// `#` opens a comment only where a new word could begin.
fn at_word_start(prev: Option<char>) -> bool {
	prev.is_none_or(|c| c.is_whitespace() || matches!(c, ';' | '&' | '|' | '(' | ')'))
}

fn double_quoted(s: &mut Scanner<'_>) {
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
