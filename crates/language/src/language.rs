//! Language definitions.
//!
//! A [`Language`] bundles the tokenizer, validator and styler of one grammar
//! together with its file associations and suggestion word rule. Languages
//! are plain values; the registry owns one instance of each.

use crate::lexer::{Tokenizer, Tokens};
use crate::parse::{ParseOutcome, Validator};
use crate::style::{StyleSpan, Styler};
use crate::suggest::{SuggestionIndex, WordRule};
use crate::token::TokenKind;

/// File associations of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileTypes {
	/// File extensions, without the dot.
	pub extensions: &'static [&'static str],
	/// Exact file names (e.g. `.bashrc`).
	pub filenames: &'static [&'static str],
	/// Interpreters named on a `#!` line.
	pub shebangs: &'static [&'static str],
}

impl FileTypes {
	pub const NONE: FileTypes = FileTypes {
		extensions: &[],
		filenames: &[],
		shebangs: &[],
	};

	/// Case-insensitive match on the base name or a `.ext` suffix.
	pub fn matches(&self, file_name: &str) -> bool {
		let base = base_name(file_name);
		self.filenames.iter().any(|name| base.eq_ignore_ascii_case(name))
			|| self.extensions.iter().any(|ext| has_extension(base, ext))
	}
}

/// A language's grammar components and metadata.
pub trait Language: Send + Sync {
	type Kind: TokenKind;
	type Tokenizer: Tokenizer<Kind = Self::Kind>;
	type Validator: Validator;
	type Styler: Styler<Kind = Self::Kind>;

	/// Stable lowercase identifier (e.g. `"json"`).
	fn name(&self) -> &'static str;

	fn file_types(&self) -> FileTypes;

	fn tokenizer(&self) -> Self::Tokenizer;

	fn validator(&self) -> Self::Validator;

	fn styler(&self) -> Self::Styler;

	/// Word extraction rule for this language's suggestion index.
	fn word_rule(&self) -> WordRule {
		WordRule::IDENTIFIER
	}

	fn tokenize<'a>(&self, source: &'a str) -> Tokens<'a, Self::Tokenizer> {
		self.tokenizer().tokenize(source)
	}

	fn validate(&self, name: &str, source: &str) -> ParseOutcome {
		self.validator().validate(name, source)
	}

	/// Tokenizes and styles `source` in a single pass.
	fn style_source(&self, source: &str) -> Vec<StyleSpan> {
		self.styler().style(self.tokenize(source))
	}

	/// Creates an empty suggestion index for a newly opened document.
	fn suggestion_index(&self) -> SuggestionIndex {
		SuggestionIndex::new(self.word_rule())
	}
}

/// Final path component of `path`, accepting `/` and `\` separators.
pub fn base_name(path: &str) -> &str {
	path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Returns true if `file_name` ends with `.ext`, ignoring ASCII case.
pub fn has_extension(file_name: &str, ext: &str) -> bool {
	let (name, ext) = (file_name.as_bytes(), ext.as_bytes());
	if ext.is_empty() || name.len() <= ext.len() {
		return false;
	}
	let split = name.len() - ext.len();
	name[split - 1] == b'.' && name[split..].eq_ignore_ascii_case(ext)
}

/// Interpreter named by a `#!` line, looking through `env`.
///
/// `#!/usr/bin/env bash` and `#!/bin/bash -e` both yield `bash`.
pub fn shebang_interpreter(first_line: &str) -> Option<&str> {
	let rest = first_line.strip_prefix("#!")?;
	let mut parts = rest.split_whitespace();
	let mut program = base_name(parts.next()?);
	if program == "env" {
		program = parts.find(|arg| !arg.starts_with('-'))?;
	}
	(!program.is_empty()).then_some(program)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_has_extension() {
		assert!(has_extension("data.json", "json"));
		assert!(has_extension("DATA.JSON", "json"));
		assert!(has_extension("dir/archive.tar.sql", "sql"));
		assert!(!has_extension("json", "json"));
		assert!(!has_extension("data.xjson", "json"));
		assert!(!has_extension("data.json", ""));
	}

	#[test]
	fn test_base_name() {
		assert_eq!(base_name("/home/u/.bashrc"), ".bashrc");
		assert_eq!(base_name("C:\\src\\main.sh"), "main.sh");
		assert_eq!(base_name("plain"), "plain");
	}

	#[test]
	fn test_shebang_interpreter() {
		assert_eq!(shebang_interpreter("#!/bin/bash"), Some("bash"));
		assert_eq!(shebang_interpreter("#!/usr/bin/env zsh"), Some("zsh"));
		assert_eq!(shebang_interpreter("#!/usr/bin/env -S bash -e"), Some("bash"));
		assert_eq!(shebang_interpreter("#! /bin/sh -x"), Some("sh"));
		assert_eq!(shebang_interpreter("echo hi"), None);
		assert_eq!(shebang_interpreter("#!"), None);
	}

	#[test]
	fn test_file_types_match_filenames_and_extensions() {
		let types = FileTypes {
			extensions: &["sh"],
			filenames: &[".bashrc"],
			shebangs: &[],
		};
		assert!(types.matches("/home/u/.BASHRC"));
		assert!(types.matches("build.SH"));
		assert!(!types.matches("bashrc"));
		assert!(!FileTypes::NONE.matches("anything.txt"));
	}
}
