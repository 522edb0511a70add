#![allow(unused_crate_dependencies)]

//! Document lifecycle as the editor drives it: resolve once, feed lines to
//! the suggestion index, and validate/style on demand.

use std::collections::{BTreeMap, BTreeSet};

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use quill_languages::{LanguageBundle, LanguageRegistry};

const SAMPLES: &[(&str, &str)] = &[
	("settings.json", "{\n  \"tab_size\": 4, // spaces\n  \"themes\": [\"dark\", null]\n}\n"),
	(
		"deploy.sh",
		"#!/bin/sh\nfor host in a b; do\n  if ping -c 1 \"$host\"; then echo ok; fi\ndone\n",
	),
	("query.sql", "SELECT name, COUNT(*) FROM users -- all\nWHERE age >= 18;\n"),
	("README", "Plain words, nothing styled."),
];

fn words(index: &quill_language::SuggestionIndex) -> BTreeSet<String> {
	index.get_all().into_iter().map(|s| s.into_string()).collect()
}

fn set(words: &[&str]) -> BTreeSet<String> {
	words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn test_suggestion_union_survives_line_deletion() {
	let registry = LanguageRegistry::new();
	let mut index = registry.resolve("a.sh").suggestion_index();

	index.process_line(1, "foo bar");
	index.process_line(2, "foo baz");
	assert_eq!(words(&index), set(&["foo", "bar", "baz"]));

	index.delete_line(1);
	assert_eq!(words(&index), set(&["foo", "baz"]));

	index.clear_lines();
	assert!(index.get_all().is_empty());
}

#[test]
fn test_open_edit_close_document() {
	let registry = LanguageRegistry::new();
	let (name, text) = SAMPLES[1];
	let bundle = registry.resolve(name);
	assert_eq!(bundle.name(), "shell");

	let mut index = bundle.suggestion_index();
	for (line, content) in text.lines().enumerate() {
		index.process_line(line, content);
	}
	assert!(index.contains("host"));
	assert!(index.contains("ping"));
	assert!(bundle.validate(name, text).is_ok());

	// Edit line 2: `ping` disappears, `curl` appears; `host` is still on line 1.
	index.process_line(2, "  if curl \"$host\"; then echo ok; fi");
	assert!(!index.contains("ping"));
	assert!(index.contains("curl"));
	assert!(index.contains("host"));

	let completions: Vec<_> = index.complete("c").into_iter().map(|s| s.as_str()).collect();
	assert_eq!(completions, ["curl"]);

	// Reload.
	index.clear_lines();
	assert!(index.is_empty());
	assert_eq!(index.line_count(), 0);
}

#[test]
fn test_indexes_are_independent_per_document() {
	let registry = LanguageRegistry::new();
	let bundle = registry.resolve("a.json");
	let mut first = bundle.suggestion_index();
	let mut second = bundle.suggestion_index();
	first.process_line(0, "alpha");
	second.process_line(0, "beta");
	assert_eq!(words(&first), set(&["alpha"]));
	assert_eq!(words(&second), set(&["beta"]));
}

#[test]
fn test_samples_validate() {
	let registry = LanguageRegistry::new();
	for &(name, text) in SAMPLES {
		let outcome = registry.resolve(name).validate(name, text);
		match registry.resolve(name).name() {
			"sql" => assert!(outcome.is_unsupported(), "{name}"),
			_ => assert!(outcome.is_ok(), "{name}: {outcome:?}"),
		}
	}
}

#[test]
fn test_style_of_tokens_matches_single_pass() {
	let registry = LanguageRegistry::new();
	for &(name, text) in SAMPLES {
		let bundle = registry.resolve(name);
		assert_eq!(bundle.style(bundle.tokenize(text)), bundle.style_source(text), "{name}");
	}
}

#[test]
fn test_style_ignores_foreign_tokens() {
	let registry = LanguageRegistry::new();
	let shell = registry.resolve("a.sh");
	let json = registry.resolve("a.json");
	assert!(json.style(shell.tokenize("if true; then echo 1; fi")).is_empty());
}

#[test]
fn test_tokenizing_can_stop_early() {
	let registry = LanguageRegistry::new();
	let big = "[1, 2, 3], ".repeat(10_000);
	let first: Vec<_> = registry.resolve("big.json").tokenize(&big).take(3).map(|t| t.lexeme).collect();
	assert_eq!(first, ["[", "1", ","]);
}

#[test]
fn test_registry_is_shareable_across_threads() {
	fn assert_send_sync<T: Send + Sync>() {}
	assert_send_sync::<LanguageRegistry>();
	assert_send_sync::<LanguageBundle>();

	let registry = LanguageRegistry::new();
	std::thread::scope(|scope| {
		for &(name, text) in SAMPLES {
			let registry = &registry;
			scope.spawn(move || {
				let bundle = registry.resolve(name);
				let spans = bundle.style_source(text);
				assert!(spans.windows(2).all(|w| w[0].end <= w[1].start));
			});
		}
	});
}

#[derive(Debug, Clone)]
enum Edit {
	Process(usize, String),
	Delete(usize),
	Clear,
}

fn edit() -> impl Strategy<Value = Edit> {
	prop_oneof![
		6 => (0usize..6, "[a-c_ ]{0,10}").prop_map(|(line, text)| Edit::Process(line, text)),
		3 => (0usize..6).prop_map(Edit::Delete),
		1 => Just(Edit::Clear),
	]
}

proptest! {
	#[test]
	fn prop_index_matches_full_rescan(edits in prop::collection::vec(edit(), 0..40)) {
		let registry = LanguageRegistry::new();
		let bundle = registry.resolve("doc.sh");
		let mut index = bundle.suggestion_index();
		let mut lines: BTreeMap<usize, String> = BTreeMap::new();

		for edit in edits {
			match edit {
				Edit::Process(line, text) => {
					index.process_line(line, &text);
					lines.insert(line, text);
				}
				Edit::Delete(line) => {
					index.delete_line(line);
					lines.remove(&line);
				}
				Edit::Clear => {
					index.clear_lines();
					lines.clear();
				}
			}
		}

		let rule = bundle.word_rule();
		let expected: BTreeSet<String> = lines.values().flat_map(|text| rule.words(text)).map(str::to_string).collect();
		prop_assert_eq!(words(&index), expected);
	}

	#[test]
	fn prop_every_bundle_partitions_input(src in "\\PC*") {
		let registry = LanguageRegistry::new();
		for bundle in registry.languages().chain([registry.fallback()]) {
			let tokens: Vec<_> = bundle.tokenize(&src).collect();
			let rebuilt: String = tokens.iter().map(|t| t.lexeme).collect();
			prop_assert_eq!(&rebuilt, &src);
			prop_assert!(tokens.last().is_some_and(|t| t.kind.is_eof()));
			for pair in tokens.windows(2) {
				prop_assert_eq!(pair[0].end, pair[1].start);
			}
		}
	}
}
