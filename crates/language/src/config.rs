//! User configuration for language resolution and suggestions.
//!
//! ```toml
//! [suggestions]
//! min_word_len = 3
//!
//! [languages.shell]
//! extensions = ["bats"]
//! filenames = ["PKGBUILD"]
//! min_word_len = 2
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::suggest::WordRule;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("failed to read config: {0}")]
	Io(#[from] std::io::Error),

	#[error("invalid config: {0}")]
	Parse(#[from] toml::de::Error),

	/// A `[languages.<name>]` table names no registered language.
	#[error("unknown language: {0}")]
	UnknownLanguage(String),

	/// The fallback language only matches what nothing else does, so it
	/// cannot take extensions or file names.
	#[error("language '{0}' is the fallback and takes no file associations")]
	FallbackAssociations(String),

	#[error("invalid extension for language '{language}': {extension:?}")]
	InvalidExtension { language: String, extension: String },

	#[error("min_word_len must be at least 1")]
	InvalidWordLength,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	pub suggestions: SuggestionConfig,
	/// Per-language overrides keyed by language name.
	pub languages: BTreeMap<String, LanguageOverride>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SuggestionConfig {
	/// Global minimum word length, overriding each language's default.
	pub min_word_len: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LanguageOverride {
	/// Additional extensions, matched after the built-in ones.
	pub extensions: Vec<String>,
	/// Additional exact file names.
	pub filenames: Vec<String>,
	pub min_word_len: Option<usize>,
}

impl Config {
	/// Parses and normalises a TOML document.
	pub fn from_toml(content: &str) -> Result<Self> {
		let mut config: Config = toml::from_str(content)?;
		config.normalize()?;
		Ok(config)
	}

	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)?;
		let config = Self::from_toml(&content)?;
		tracing::debug!(path = %path.display(), languages = config.languages.len(), "loaded language config");
		Ok(config)
	}

	pub fn language(&self, name: &str) -> Option<&LanguageOverride> {
		self.languages.get(name)
	}

	/// Applies the configured minimum word length to a language's base rule.
	///
	/// A per-language setting wins over the global one.
	pub fn word_rule(&self, language: &str, base: WordRule) -> WordRule {
		let min_len = self
			.language(language)
			.and_then(|o| o.min_word_len)
			.or(self.suggestions.min_word_len);
		match min_len {
			Some(min_len) => base.with_min_len(min_len),
			None => base,
		}
	}

	/// Strips leading dots from extensions, lowercases them and rejects
	/// empty entries and zero word lengths.
	fn normalize(&mut self) -> Result<()> {
		if self.suggestions.min_word_len == Some(0) {
			return Err(ConfigError::InvalidWordLength);
		}
		for (language, entry) in &mut self.languages {
			if entry.min_word_len == Some(0) {
				return Err(ConfigError::InvalidWordLength);
			}
			for ext in &mut entry.extensions {
				let normalized = ext.trim().trim_start_matches('.').to_ascii_lowercase();
				if normalized.is_empty() || normalized.contains(['/', '\\']) {
					return Err(ConfigError::InvalidExtension {
						language: language.clone(),
						extension: ext.clone(),
					});
				}
				*ext = normalized;
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn test_empty_config_is_default() {
		assert_eq!(Config::from_toml("").unwrap(), Config::default());
	}

	#[test]
	fn test_extensions_are_normalized() {
		let config = Config::from_toml(
			r#"
			[languages.shell]
			extensions = [".BATS", "command"]
			"#,
		)
		.unwrap();
		assert_eq!(config.language("shell").unwrap().extensions, ["bats", "command"]);
	}

	#[test]
	fn test_language_min_len_overrides_global() {
		let config = Config::from_toml(
			r#"
			[suggestions]
			min_word_len = 4

			[languages.sql]
			min_word_len = 1
			"#,
		)
		.unwrap();
		assert_eq!(config.word_rule("sql", WordRule::IDENTIFIER).min_len, 1);
		assert_eq!(config.word_rule("json", WordRule::IDENTIFIER).min_len, 4);
		assert!(!config.word_rule("json", WordRule::IDENTIFIER).unicode);
	}

	#[test]
	fn test_rejects_bad_values() {
		assert!(matches!(
			Config::from_toml("[languages.json]\nextensions = [\".\"]"),
			Err(ConfigError::InvalidExtension { .. })
		));
		assert!(matches!(
			Config::from_toml("[suggestions]\nmin_word_len = 0"),
			Err(ConfigError::InvalidWordLength)
		));
		assert!(matches!(Config::from_toml("[colors]\nx = 1"), Err(ConfigError::Parse(_))));
	}
}
