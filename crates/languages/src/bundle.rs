use std::iter::FusedIterator;

use quill_lang_json::{Json, JsonLexer};
use quill_lang_shell::{Shell, ShellLexer};
use quill_lang_sql::{Sql, SqlLexer};
use quill_language::plaintext::TextTokenizer;
use quill_language::{
	FileTypes, Language, ParseOutcome, PlainText, StyleSpan, Styler, SuggestionIndex, Token, Tokens, WordRule,
	has_extension,
};

use crate::kind::{AnyTokenKind, narrow};

/// One of the built-in languages.
#[derive(Debug, Clone, Copy)]
pub enum AnyLanguage {
	Json(Json),
	Shell(Shell),
	Sql(Sql),
	PlainText(PlainText),
}

macro_rules! dispatch {
	($language:expr, $lang:ident => $body:expr) => {
		match $language {
			AnyLanguage::Json($lang) => $body,
			AnyLanguage::Shell($lang) => $body,
			AnyLanguage::Sql($lang) => $body,
			AnyLanguage::PlainText($lang) => $body,
		}
	};
}

impl AnyLanguage {
	/// Built-in languages in resolution priority order.
	pub const BUILTIN: [AnyLanguage; 3] = [AnyLanguage::Json(Json), AnyLanguage::Shell(Shell), AnyLanguage::Sql(Sql)];

	pub fn name(self) -> &'static str {
		dispatch!(self, lang => lang.name())
	}

	pub fn file_types(self) -> FileTypes {
		dispatch!(self, lang => lang.file_types())
	}

	pub fn word_rule(self) -> WordRule {
		dispatch!(self, lang => lang.word_rule())
	}
}

/// A language together with its effective file associations and word rule.
///
/// Bundles are built by the [`LanguageRegistry`](crate::LanguageRegistry),
/// which folds user configuration into them. Every operation except
/// [`suggestion_index`](Self::suggestion_index) is a pure function of its
/// input.
#[derive(Debug, Clone)]
pub struct LanguageBundle {
	language: AnyLanguage,
	word_rule: WordRule,
	extra_extensions: Vec<String>,
	extra_filenames: Vec<String>,
}

impl LanguageBundle {
	pub fn new(language: AnyLanguage) -> Self {
		Self {
			language,
			word_rule: language.word_rule(),
			extra_extensions: Vec::new(),
			extra_filenames: Vec::new(),
		}
	}

	pub(crate) fn set_word_rule(&mut self, rule: WordRule) {
		self.word_rule = rule;
	}

	pub(crate) fn add_associations(&mut self, extensions: &[String], filenames: &[String]) {
		self.extra_extensions.extend_from_slice(extensions);
		self.extra_filenames.extend_from_slice(filenames);
	}

	#[inline]
	pub fn language(&self) -> AnyLanguage {
		self.language
	}

	pub fn name(&self) -> &'static str {
		self.language.name()
	}

	#[inline]
	pub fn word_rule(&self) -> WordRule {
		self.word_rule
	}

	/// Built-in file associations. Configured additions are not included.
	pub fn file_types(&self) -> FileTypes {
		self.language.file_types()
	}

	/// Exact base-name match, ignoring ASCII case.
	pub fn matches_filename(&self, base_name: &str) -> bool {
		let builtin = self.file_types().filenames.iter().copied();
		let extra = self.extra_filenames.iter().map(String::as_str);
		builtin.chain(extra).any(|name| base_name.eq_ignore_ascii_case(name))
	}

	/// `.ext` suffix match, ignoring ASCII case.
	pub fn matches_extension(&self, base_name: &str) -> bool {
		let builtin = self.file_types().extensions.iter().copied();
		let extra = self.extra_extensions.iter().map(String::as_str);
		builtin.chain(extra).any(|ext| has_extension(base_name, ext))
	}

	pub fn matches_interpreter(&self, interpreter: &str) -> bool {
		self.file_types().shebangs.contains(&interpreter)
	}

	/// Lazily tokenizes `source`.
	pub fn tokenize<'a>(&self, source: &'a str) -> AnyTokens<'a> {
		match self.language {
			AnyLanguage::Json(lang) => AnyTokens::Json(lang.tokenize(source)),
			AnyLanguage::Shell(lang) => AnyTokens::Shell(lang.tokenize(source)),
			AnyLanguage::Sql(lang) => AnyTokens::Sql(lang.tokenize(source)),
			AnyLanguage::PlainText(lang) => AnyTokens::Text(lang.tokenize(source)),
		}
	}

	pub fn validate(&self, name: &str, source: &str) -> ParseOutcome {
		dispatch!(self.language, lang => lang.validate(name, source))
	}

	/// Styles a token sequence. Tokens of other languages are ignored.
	pub fn style<'a, I>(&self, tokens: I) -> Vec<StyleSpan>
	where
		I: IntoIterator<Item = Token<'a, AnyTokenKind>>,
	{
		match self.language {
			AnyLanguage::Json(lang) => lang.styler().style(narrow(tokens, AnyTokenKind::json)),
			AnyLanguage::Shell(lang) => lang.styler().style(narrow(tokens, AnyTokenKind::shell)),
			AnyLanguage::Sql(lang) => lang.styler().style(narrow(tokens, AnyTokenKind::sql)),
			AnyLanguage::PlainText(lang) => lang.styler().style(narrow(tokens, AnyTokenKind::text)),
		}
	}

	/// Tokenizes and styles `source` in a single pass.
	pub fn style_source(&self, source: &str) -> Vec<StyleSpan> {
		dispatch!(self.language, lang => lang.style_source(source))
	}

	/// Creates an empty suggestion index for a newly opened document.
	pub fn suggestion_index(&self) -> SuggestionIndex {
		SuggestionIndex::new(self.word_rule)
	}
}

/// Lazy token stream of any built-in language.
pub enum AnyTokens<'a> {
	Json(Tokens<'a, JsonLexer>),
	Shell(Tokens<'a, ShellLexer>),
	Sql(Tokens<'a, SqlLexer>),
	Text(Tokens<'a, TextTokenizer>),
}

impl<'a> Iterator for AnyTokens<'a> {
	type Item = Token<'a, AnyTokenKind>;

	fn next(&mut self) -> Option<Self::Item> {
		match self {
			Self::Json(tokens) => tokens.next().map(|t| t.map_kind(AnyTokenKind::Json)),
			Self::Shell(tokens) => tokens.next().map(|t| t.map_kind(AnyTokenKind::Shell)),
			Self::Sql(tokens) => tokens.next().map(|t| t.map_kind(AnyTokenKind::Sql)),
			Self::Text(tokens) => tokens.next().map(|t| t.map_kind(AnyTokenKind::Text)),
		}
	}
}

impl FusedIterator for AnyTokens<'_> {}
