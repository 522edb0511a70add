//! Block-structure validator for shell scripts.
//!
//! Shell words are permissive, so this does not attempt a full grammar. It
//! tracks compound commands (`if`/`fi`, loops, `case`/`esac`), grouping
//! punctuation, quoting, and command substitution, and reports the first
//! mismatch. Reserved words only count in command position, so `echo done`
//! is a plain word.

use quill_language::{ParseOutcome, SyntaxFault, Token, Tokenizer, Validator};

use crate::lexer::ShellLexer;
use crate::token::ShellToken;

#[derive(Debug, Clone, Copy, Default)]
pub struct ShellValidator;

impl Validator for ShellValidator {
	fn validate(&self, name: &str, source: &str) -> ParseOutcome {
		let result = Checker::default().run(source);
		if let Err(fault) = &result {
			tracing::debug!(name, %fault, "shell syntax fault");
		}
		result.into()
	}
}

type Result<T = ()> = std::result::Result<T, SyntaxFault>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IfStage {
	Condition,
	Then,
	Else,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaseStage {
	/// Between `case` and `in`.
	Subject,
	/// Reading a pattern list up to `)`.
	Pattern,
	/// Commands of an item, ended by `;;` or `esac`.
	Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
	If(IfStage),
	Loop { body: bool },
	Case(CaseStage),
	Brace,
	Paren,
	Bracket,
}

impl Block {
	/// The word or punctuation that must come next to move this block on.
	fn expected(self) -> &'static str {
		match self {
			Block::If(IfStage::Condition) => "then",
			Block::If(_) => "fi",
			Block::Loop { body: false } => "do",
			Block::Loop { body: true } => "done",
			Block::Case(CaseStage::Subject) => "in",
			Block::Case(_) => "esac",
			Block::Brace => "}",
			Block::Paren => ")",
			Block::Bracket => "]",
		}
	}
}

#[derive(Debug, Clone, Copy)]
struct Frame<'a> {
	block: Block,
	opener: Token<'a, ShellToken>,
}

#[derive(Default)]
struct Checker<'a> {
	stack: Vec<Frame<'a>>,
	/// The next word is a command name, so reserved words are live.
	command_start: bool,
	prev: Option<Token<'a, ShellToken>>,
	before_prev: Option<ShellToken>,
	backtick: Option<Token<'a, ShellToken>>,
}

impl<'a> Checker<'a> {
	fn run(mut self, source: &'a str) -> Result {
		self.command_start = true;
		for token in ShellLexer.tokenize(source) {
			match token.kind {
				ShellToken::Whitespace => {
					if is_newline(&token) {
						self.command_start = true;
					}
					continue;
				}
				ShellToken::Comment | ShellToken::Shebang | ShellToken::HeredocBody => continue,
				ShellToken::Eof => return self.finish(&token),
				_ => {}
			}
			self.token(token)?;
			self.before_prev = self.prev.map(|t| t.kind);
			self.prev = Some(token);
		}
		Ok(())
	}

	fn finish(&self, eof: &Token<'a, ShellToken>) -> Result {
		if let Some(open) = &self.backtick {
			return Err(SyntaxFault::at("Unterminated command substitution", open));
		}
		match self.stack.last() {
			None => Ok(()),
			Some(frame) => Err(SyntaxFault::at(
				format!(
					"Expected '{}' to close '{}' opened at line {}, found end of input",
					frame.block.expected(),
					frame.opener.lexeme,
					frame.opener.line()
				),
				eof,
			)),
		}
	}

	fn token(&mut self, token: Token<'a, ShellToken>) -> Result {
		match token.kind {
			ShellToken::DoubleQuotedString if !double_quote_closed(token.lexeme) => {
				return Err(SyntaxFault::at("Unterminated string", &token));
			}
			ShellToken::SingleQuotedString if token.lexeme.len() < 2 || !token.lexeme.ends_with('\'') => {
				return Err(SyntaxFault::at("Unterminated string", &token));
			}
			ShellToken::Backtick => {
				if self.backtick.take().is_none() {
					self.backtick = Some(token);
				}
				self.command_start = false;
				return Ok(());
			}
			ShellToken::EvalContent => return Ok(()),
			_ => {}
		}

		if let Some(Block::Case(stage)) = self.stack.last().map(|f| f.block) {
			if self.case_item(stage, &token) {
				return Ok(());
			}
		}

		let at_start = std::mem::replace(&mut self.command_start, false);
		match token.kind {
			ShellToken::Semicolon | ShellToken::AndAnd | ShellToken::OrOr | ShellToken::Or | ShellToken::And => {
				self.command_start = true;
			}
			ShellToken::Bang if at_start => self.command_start = true,

			ShellToken::If if at_start => self.open(Block::If(IfStage::Condition), token),
			ShellToken::Then if at_start => self.advance(token, Block::If(IfStage::Condition), Block::If(IfStage::Then))?,
			ShellToken::Elif if at_start => self.advance(token, Block::If(IfStage::Then), Block::If(IfStage::Condition))?,
			ShellToken::Else if at_start => self.advance(token, Block::If(IfStage::Then), Block::If(IfStage::Else))?,
			ShellToken::Fi if at_start => match self.top() {
				Some(Block::If(IfStage::Then | IfStage::Else)) => self.close(),
				_ => return Err(self.mismatch(&token)),
			},

			ShellToken::For | ShellToken::Select if at_start => {
				self.open(Block::Loop { body: false }, token);
				self.command_start = false;
			}
			ShellToken::While | ShellToken::Until if at_start => self.open(Block::Loop { body: false }, token),
			ShellToken::Do if at_start => self.advance(token, Block::Loop { body: false }, Block::Loop { body: true })?,
			ShellToken::Done if at_start => match self.top() {
				Some(Block::Loop { body: true }) => self.close(),
				_ => return Err(self.mismatch(&token)),
			},

			ShellToken::Case if at_start => {
				self.open(Block::Case(CaseStage::Subject), token);
				self.command_start = false;
			}
			ShellToken::Esac if at_start => return Err(self.mismatch(&token)),

			ShellToken::LBrace if self.opens_group(at_start) => self.open(Block::Brace, token),
			ShellToken::RBrace => match self.top() {
				Some(Block::Brace) => self.close(),
				_ if at_start => return Err(self.mismatch(&token)),
				// A literal `}` inside a word.
				_ => {}
			},
			ShellToken::LParen => self.open(Block::Paren, token),
			ShellToken::RParen => match self.top() {
				Some(Block::Paren) => self.close(),
				_ => return Err(self.mismatch(&token)),
			},
			ShellToken::LBrack if at_start || self.prev_is(ShellToken::Dollar) => {
				self.open(Block::Bracket, token);
				self.command_start = false;
			}
			ShellToken::RBrack => {
				if self.top() == Some(Block::Bracket) {
					self.close();
				}
			}
			_ => {}
		}
		Ok(())
	}

	/// Handles tokens with a meaning specific to the current `case` stage.
	/// Returns false when the token should go through ordinary handling.
	fn case_item(&mut self, stage: CaseStage, token: &Token<'a, ShellToken>) -> bool {
		match stage {
			CaseStage::Subject => {
				if token.kind == ShellToken::In {
					self.set_top(Block::Case(CaseStage::Pattern));
					self.command_start = true;
				}
				true
			}
			CaseStage::Pattern => {
				match token.kind {
					ShellToken::Esac if self.command_start => {
						self.close();
						self.command_start = false;
					}
					ShellToken::RParen => {
						self.set_top(Block::Case(CaseStage::Commands));
						self.command_start = true;
					}
					_ => self.command_start = false,
				}
				true
			}
			CaseStage::Commands => {
				let terminator = self.prev.is_some_and(|prev| prev.kind == ShellToken::Semicolon && prev.end == token.start)
					&& matches!(token.kind, ShellToken::Semicolon | ShellToken::And);
				if terminator {
					self.set_top(Block::Case(CaseStage::Pattern));
					self.command_start = true;
					return true;
				}
				if token.kind == ShellToken::Esac && self.command_start {
					self.close();
					self.command_start = false;
					return true;
				}
				false
			}
		}
	}

	/// A `{` groups commands at command start, as a function body after
	/// `name()` or `function name`, and as a `${...}` expansion.
	fn opens_group(&self, at_start: bool) -> bool {
		at_start
			|| self.prev_is(ShellToken::RParen)
			|| self.prev_is(ShellToken::Dollar)
			|| self.before_prev == Some(ShellToken::Function)
	}

	fn prev_is(&self, kind: ShellToken) -> bool {
		self.prev.is_some_and(|t| t.kind == kind)
	}

	fn top(&self) -> Option<Block> {
		self.stack.last().map(|f| f.block)
	}

	fn set_top(&mut self, block: Block) {
		if let Some(frame) = self.stack.last_mut() {
			frame.block = block;
		}
	}

	fn open(&mut self, block: Block, opener: Token<'a, ShellToken>) {
		self.stack.push(Frame { block, opener });
		self.command_start = true;
	}

	fn close(&mut self) {
		self.stack.pop();
	}

	/// Moves the innermost block from stage `from` to `to`, or faults.
	fn advance(&mut self, token: Token<'a, ShellToken>, from: Block, to: Block) -> Result {
		if self.top() != Some(from) {
			return Err(self.mismatch(&token));
		}
		self.set_top(to);
		self.command_start = true;
		Ok(())
	}

	fn mismatch(&self, token: &Token<'a, ShellToken>) -> SyntaxFault {
		match self.stack.last() {
			Some(frame) => SyntaxFault::at(
				format!("Expected '{}' before '{}'", frame.block.expected(), token.lexeme),
				token,
			),
			None => SyntaxFault::unexpected(token),
		}
	}
}

/// Whitespace that separates commands. A line continuation does not.
fn is_newline(token: &Token<'_, ShellToken>) -> bool {
	token.lexeme.contains('\n') && !token.lexeme.starts_with('\\')
}

fn double_quote_closed(lexeme: &str) -> bool {
	let mut chars = lexeme.chars().skip(1);
	while let Some(c) = chars.next() {
		match c {
			'"' => return true,
			'\\' => {
				chars.next();
			}
			_ => {}
		}
	}
	false
}
