#![allow(unused_crate_dependencies)]

use pretty_assertions::assert_eq;
use quill_language::{Config, ConfigError, ParseOutcome, UNSUPPORTED_MESSAGE};
use quill_languages::{AnyTokenKind, LanguageRegistry};

fn resolved(registry: &LanguageRegistry, file_name: &str) -> &'static str {
	registry.resolve(file_name).name()
}

#[test]
fn test_unknown_extension_falls_back_to_plain_text() {
	let registry = LanguageRegistry::new();
	let bundle = registry.resolve("notes.xyz");
	assert_eq!(bundle.name(), "plaintext");
	assert_eq!(bundle.validate("notes.xyz", "{{{ not json"), ParseOutcome::Ok);
	assert!(bundle.style_source("if x then fi").is_empty());

	let tokens: Vec<_> = bundle.tokenize("any text\nat all").collect();
	assert_eq!(tokens.len(), 2);
	assert_eq!(tokens[0].lexeme, "any text\nat all");
	assert!(tokens[1].kind.is_eof());
}

#[test]
fn test_extensions_ignore_case() {
	let registry = LanguageRegistry::new();
	assert_eq!(resolved(&registry, "Data.JSON"), "json");
	assert_eq!(resolved(&registry, "scripts/build.Sh"), "shell");
	assert_eq!(resolved(&registry, "C:\\db\\dump.SQL"), "sql");
	assert_eq!(resolved(&registry, "archive.tar.zsh"), "shell");
	assert_eq!(resolved(&registry, "json"), "plaintext");
	assert_eq!(resolved(&registry, "file.jsonx"), "plaintext");
}

#[test]
fn test_exact_file_names() {
	let registry = LanguageRegistry::new();
	assert_eq!(resolved(&registry, "/home/u/.bashrc"), "shell");
	assert_eq!(resolved(&registry, ".ZSHRC"), "shell");
	assert_eq!(resolved(&registry, "app/composer.lock"), "json");
	assert_eq!(resolved(&registry, "bashrc"), "plaintext");
}

#[test]
fn test_registration_order() {
	let registry = LanguageRegistry::new();
	let names: Vec<_> = registry.languages().map(|b| b.name()).collect();
	assert_eq!(names, ["json", "shell", "sql"]);
	assert_eq!(registry.fallback().name(), "plaintext");
}

#[test]
fn test_configured_extensions_keep_priority_order() {
	let config = Config::from_toml(
		r#"
		[languages.sql]
		extensions = [".JSON", "psql"]

		[languages.shell]
		filenames = ["PKGBUILD"]
		extensions = ["bats"]
		"#,
	)
	.unwrap();
	let registry = LanguageRegistry::with_config(&config).unwrap();

	// json is registered before sql, so it keeps `.json`.
	assert_eq!(resolved(&registry, "x.json"), "json");
	assert_eq!(resolved(&registry, "x.PSQL"), "sql");
	assert_eq!(resolved(&registry, "test.bats"), "shell");
	assert_eq!(resolved(&registry, "pkg/PKGBUILD"), "shell");
}

#[test]
fn test_file_name_beats_extension() {
	let config = Config::from_toml("[languages.sql]\nfilenames = [\"schema.json\"]").unwrap();
	let registry = LanguageRegistry::with_config(&config).unwrap();
	assert_eq!(resolved(&registry, "db/schema.json"), "sql");
	assert_eq!(resolved(&registry, "db/other.json"), "json");
}

#[test]
fn test_unknown_language_in_config() {
	let config = Config::from_toml("[languages.cobol]\nextensions = [\"cbl\"]").unwrap();
	let err = LanguageRegistry::with_config(&config).unwrap_err();
	assert!(matches!(err, ConfigError::UnknownLanguage(ref name) if name == "cobol"));
	assert_eq!(err.to_string(), "unknown language: cobol");
}

#[test]
fn test_fallback_takes_no_associations() {
	let config = Config::from_toml("[languages.plaintext]\nextensions = [\"txt\"]").unwrap();
	let err = LanguageRegistry::with_config(&config).unwrap_err();
	assert!(matches!(err, ConfigError::FallbackAssociations(ref name) if name == "plaintext"));

	// A word length alone is fine.
	let config = Config::from_toml("[languages.plaintext]\nmin_word_len = 5").unwrap();
	let registry = LanguageRegistry::with_config(&config).unwrap();
	assert_eq!(registry.fallback().word_rule().min_len, 5);
	assert_eq!(resolved(&registry, "notes.txt"), "plaintext");
}

#[test]
fn test_configured_word_lengths() {
	let config = Config::from_toml(
		r#"
		[suggestions]
		min_word_len = 4

		[languages.shell]
		min_word_len = 3
		"#,
	)
	.unwrap();
	let registry = LanguageRegistry::with_config(&config).unwrap();

	let json = registry.by_name("json").unwrap();
	assert_eq!(json.word_rule().min_len, 4);
	assert_eq!(json.suggestion_index().rule().min_len, 4);
	assert_eq!(registry.by_name("shell").unwrap().word_rule().min_len, 3);

	let text = registry.fallback().word_rule();
	assert_eq!(text.min_len, 4);
	assert!(text.unicode);

	// Defaults are untouched without config.
	assert_eq!(LanguageRegistry::new().resolve("a.sh").word_rule().min_len, 2);
}

#[test]
fn test_shebang_detection() {
	let registry = LanguageRegistry::new();
	assert_eq!(registry.resolve_with_content("deploy", "#!/usr/bin/env bash").name(), "shell");
	assert_eq!(registry.resolve_with_content("run", "#!/bin/bash5.2 -e").name(), "shell");
	assert_eq!(registry.resolve_with_content("run", "#!/bin/zsh").name(), "shell");
	// The file name wins over the first line.
	assert_eq!(registry.resolve_with_content("notes.json", "#!/bin/sh").name(), "json");
	assert_eq!(registry.resolve_with_content("run", "#!/usr/bin/python3").name(), "plaintext");
	assert_eq!(registry.resolve_with_content("run", "echo hi").name(), "plaintext");
}

#[test]
fn test_by_name() {
	let registry = LanguageRegistry::new();
	assert_eq!(registry.by_name("JSON").map(|b| b.name()), Some("json"));
	assert_eq!(registry.by_name("plaintext").map(|b| b.name()), Some("plaintext"));
	assert!(registry.by_name("cobol").is_none());
}

#[test]
fn test_sql_reports_unsupported_through_registry() {
	let registry = LanguageRegistry::new();
	let outcome = registry.resolve("x.sql").validate("x.sql", "SELECT 1");
	assert!(outcome.is_unsupported());
	let fault = outcome.fault().unwrap();
	assert_eq!(fault.message, UNSUPPORTED_MESSAGE);
	assert_eq!((fault.line, fault.column), (0, 0));

	// A real grammar never reports the unsupported fault.
	let json = registry.resolve("x.json").validate("x.json", "{");
	assert!(!json.is_unsupported());
	assert!(!json.is_ok());
}

#[test]
fn test_tokens_are_tagged_by_language() {
	let registry = LanguageRegistry::new();
	let first = registry.resolve("a.json").tokenize("null").next().unwrap();
	assert!(matches!(first.kind, AnyTokenKind::Json(_)));
	assert!(first.kind.json().is_some());
	assert!(first.kind.shell().is_none());
}
