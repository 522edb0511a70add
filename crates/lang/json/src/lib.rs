//! JSON language support.
//!
//! Full grammar validation (strict numbers, escape checking, a single root
//! value), with `//` and `/* */` comments tolerated as trivia.

mod lexer;
mod parser;
mod styler;
mod token;

pub use lexer::JsonLexer;
pub use parser::{JsonValidator, MAX_DEPTH};
use quill_language::{FileTypes, Language};
pub use styler::JsonStyler;
pub use token::JsonToken;

#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl Language for Json {
	type Kind = JsonToken;
	type Tokenizer = JsonLexer;
	type Validator = JsonValidator;
	type Styler = JsonStyler;

	fn name(&self) -> &'static str {
		"json"
	}

	fn file_types(&self) -> FileTypes {
		FileTypes {
			extensions: &["json"],
			filenames: &[".babelrc", ".eslintrc", "composer.lock"],
			shebangs: &[],
		}
	}

	fn tokenizer(&self) -> JsonLexer {
		JsonLexer
	}

	fn validator(&self) -> JsonValidator {
		JsonValidator
	}

	fn styler(&self) -> JsonStyler {
		JsonStyler
	}
}
