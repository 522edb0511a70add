use quill_language::{Config, ConfigError, PlainText, base_name, shebang_interpreter};

use crate::bundle::{AnyLanguage, LanguageBundle};

/// Ordered table of languages with a plain-text fallback.
///
/// Resolution tries exact file names first, then extensions, each in
/// registration order; the first hit wins. Nothing here is global: the
/// caller builds a registry once and shares it (it is `Send + Sync`).
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
	languages: Vec<LanguageBundle>,
	fallback: LanguageBundle,
}

impl Default for LanguageRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl LanguageRegistry {
	/// Registry of the built-in languages: json, shell, sql.
	pub fn new() -> Self {
		Self {
			languages: AnyLanguage::BUILTIN.into_iter().map(LanguageBundle::new).collect(),
			fallback: LanguageBundle::new(AnyLanguage::PlainText(PlainText)),
		}
	}

	/// Built-in registry with user associations and word lengths applied.
	pub fn with_config(config: &Config) -> Result<Self, ConfigError> {
		let mut registry = Self::new();
		for (name, entry) in &config.languages {
			if registry.fallback.name().eq_ignore_ascii_case(name) {
				if !entry.extensions.is_empty() || !entry.filenames.is_empty() {
					return Err(ConfigError::FallbackAssociations(name.clone()));
				}
				continue;
			}
			let bundle = registry
				.bundle_mut(name)
				.ok_or_else(|| ConfigError::UnknownLanguage(name.clone()))?;
			bundle.add_associations(&entry.extensions, &entry.filenames);
		}
		for bundle in registry.languages.iter_mut().chain(std::iter::once(&mut registry.fallback)) {
			let rule = config.word_rule(bundle.name(), bundle.language().word_rule());
			bundle.set_word_rule(rule);
		}
		tracing::debug!(overrides = config.languages.len(), "built language registry from config");
		Ok(registry)
	}

	/// Language for `file_name`, or the fallback when nothing matches.
	pub fn resolve(&self, file_name: &str) -> &LanguageBundle {
		match self.lookup(file_name) {
			Some(bundle) => bundle,
			None => {
				tracing::debug!(file_name, fallback = self.fallback.name(), "no language matched");
				&self.fallback
			}
		}
	}

	/// Like [`resolve`](Self::resolve), but consults a `#!` first line before
	/// giving up on an unrecognised name.
	pub fn resolve_with_content(&self, file_name: &str, first_line: &str) -> &LanguageBundle {
		if let Some(bundle) = self.lookup(file_name) {
			return bundle;
		}
		if let Some(bundle) = self.lookup_shebang(first_line) {
			tracing::debug!(file_name, language = bundle.name(), "resolved language from shebang");
			return bundle;
		}
		tracing::debug!(file_name, fallback = self.fallback.name(), "no language matched");
		&self.fallback
	}

	fn lookup(&self, file_name: &str) -> Option<&LanguageBundle> {
		let base = base_name(file_name);
		let bundle = self
			.languages
			.iter()
			.find(|bundle| bundle.matches_filename(base))
			.or_else(|| self.languages.iter().find(|bundle| bundle.matches_extension(base)))?;
		tracing::debug!(file_name, language = bundle.name(), "resolved language");
		Some(bundle)
	}

	fn lookup_shebang(&self, first_line: &str) -> Option<&LanguageBundle> {
		let interpreter = shebang_interpreter(first_line)?;
		// `bash5.2` resolves like `bash`.
		let unversioned = interpreter.trim_end_matches(|c: char| c.is_ascii_digit() || c == '.');
		self.languages
			.iter()
			.find(|bundle| bundle.matches_interpreter(interpreter) || bundle.matches_interpreter(unversioned))
	}

	/// Registered language or fallback with the given name, ignoring case.
	pub fn by_name(&self, name: &str) -> Option<&LanguageBundle> {
		self.languages
			.iter()
			.chain(std::iter::once(&self.fallback))
			.find(|bundle| bundle.name().eq_ignore_ascii_case(name))
	}

	fn bundle_mut(&mut self, name: &str) -> Option<&mut LanguageBundle> {
		self.languages
			.iter_mut()
			.find(|bundle| bundle.name().eq_ignore_ascii_case(name))
	}

	/// Registered languages in priority order, excluding the fallback.
	pub fn languages(&self) -> impl Iterator<Item = &LanguageBundle> {
		self.languages.iter()
	}

	pub fn fallback(&self) -> &LanguageBundle {
		&self.fallback
	}
}
