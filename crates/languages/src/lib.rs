//! The editor's built-in languages and file-name resolution.
//!
//! [`LanguageRegistry`] maps a file name to a [`LanguageBundle`], a closed
//! tagged variant over every built-in [`Language`](quill_language::Language)
//! implementation. Unrecognised files resolve to plain text.
//!
//! ```
//! use quill_languages::LanguageRegistry;
//!
//! let registry = LanguageRegistry::new();
//! let bundle = registry.resolve("deploy.sh");
//! assert_eq!(bundle.name(), "shell");
//!
//! let mut index = bundle.suggestion_index();
//! index.process_line(0, "deploy_target=prod");
//! assert!(index.contains("deploy_target"));
//! ```

mod bundle;
mod kind;
mod registry;

pub use bundle::{AnyLanguage, AnyTokens, LanguageBundle};
pub use kind::AnyTokenKind;
pub use registry::LanguageRegistry;
