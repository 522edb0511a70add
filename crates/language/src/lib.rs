//! Language framework for the editor's lexical services.
//!
//! Each supported language provides a tokenizer, a syntax validator and a
//! styler, bundled behind the [`Language`] trait, plus a word rule for its
//! per-document [`SuggestionIndex`].
//!
//! # Architecture
//!
//! * [`token`]: Token and 1-based position types
//! * [`lexer`]: Character scanner and the lazy tokenizer driver
//! * [`parse`]: Parse outcomes, the validator trait and a token stream for recursive descent
//! * [`style`]: Style categories and span construction
//! * [`suggest`]: Incremental, line-keyed suggestion index
//! * [`language`]: The language bundle trait and file-name matching
//! * [`plaintext`]: Fallback language for unrecognised files
//! * [`config`]: User configuration (extra file associations, word lengths)
//!
//! Tokenizers, validators and stylers are stateless values and may be used
//! from any thread. A `SuggestionIndex` belongs to one document and is only
//! mutated through `&mut self`.

pub mod config;
pub mod language;
pub mod lexer;
pub mod parse;
pub mod plaintext;
pub mod style;
pub mod suggest;
pub mod token;

pub use config::{Config, ConfigError, LanguageOverride};
pub use language::{FileTypes, Language, base_name, has_extension, shebang_interpreter};
pub use lexer::{Scanner, Tokenizer, Tokens};
pub use parse::{AcceptAll, FaultKind, ParseOutcome, SyntaxFault, TokenStream, UNSUPPORTED_MESSAGE, Unsupported, Validator};
pub use plaintext::{PlainText, TextToken};
pub use style::{SpanBuilder, StyleCategory, StyleSpan, Styler};
pub use suggest::{Suggestion, SuggestionIndex, WordRule, Words};
pub use token::{Position, Token, TokenKind};
