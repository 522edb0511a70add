//! SQL language support.
//!
//! Tokenizing and styling only: there is no SQL grammar yet, so validation
//! reports the unsupported fault.

mod lexer;
mod styler;
mod token;

pub use lexer::SqlLexer;
use quill_language::{FileTypes, Language, Unsupported, WordRule};
pub use styler::SqlStyler;
pub use token::SqlToken;

#[derive(Debug, Clone, Copy, Default)]
pub struct Sql;

impl Language for Sql {
	type Kind = SqlToken;
	type Tokenizer = SqlLexer;
	type Validator = Unsupported;
	type Styler = SqlStyler;

	fn name(&self) -> &'static str {
		"sql"
	}

	fn file_types(&self) -> FileTypes {
		FileTypes {
			extensions: &["sql"],
			filenames: &[],
			shebangs: &[],
		}
	}

	fn tokenizer(&self) -> SqlLexer {
		SqlLexer
	}

	fn validator(&self) -> Unsupported {
		Unsupported
	}

	fn styler(&self) -> SqlStyler {
		SqlStyler
	}

	fn word_rule(&self) -> WordRule {
		lexer::IDENTIFIER
	}
}

#[cfg(test)]
mod tests;
