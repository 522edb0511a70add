//! Shell script language support.
//!
//! The tokenizer covers POSIX sh and the common bash/zsh extensions. The
//! validator checks block structure only; see [`ShellValidator`].

mod lexer;
mod parser;
mod styler;
mod token;

pub use lexer::{LexState, ShellLexer};
pub use parser::ShellValidator;
use quill_language::{FileTypes, Language};
pub use styler::ShellStyler;
pub use token::ShellToken;

#[derive(Debug, Clone, Copy, Default)]
pub struct Shell;

impl Language for Shell {
	type Kind = ShellToken;
	type Tokenizer = ShellLexer;
	type Validator = ShellValidator;
	type Styler = ShellStyler;

	fn name(&self) -> &'static str {
		"shell"
	}

	fn file_types(&self) -> FileTypes {
		FileTypes {
			extensions: &["sh", "bash", "zsh", "ksh"],
			filenames: &[".bashrc", ".bash_profile", ".profile", ".zshrc"],
			shebangs: &["sh", "bash", "zsh", "ksh"],
		}
	}

	fn tokenizer(&self) -> ShellLexer {
		ShellLexer
	}

	fn validator(&self) -> ShellValidator {
		ShellValidator
	}

	fn styler(&self) -> ShellStyler {
		ShellStyler
	}
}
