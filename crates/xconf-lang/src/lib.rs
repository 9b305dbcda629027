//! # xconf-lang: the expression sub-language of xconf
//!
//! Values in a source document may embed a small postfix (reverse-Polish)
//! expression between `@{` and `}` markers. This crate provides the
//! tokenized-expression evaluator, the [`Number`] scalar it computes with,
//! and the [`ConstantsTable`] that named constants accumulate into while a
//! document is serialized.
//!
//! ## Quick Start
//!
//! ```rust
//! use xconf_lang::{ConstantsTable, Number, evaluate, extract_expression};
//!
//! let mut constants = ConstantsTable::default();
//! constants.insert("a".to_string(), Number::Int(2));
//! constants.insert("b".to_string(), Number::Int(5));
//!
//! let tokens = extract_expression("@{ a b + }").unwrap();
//! let result = evaluate(&tokens, &constants).unwrap();
//! assert_eq!(result.to_string(), "7");
//! ```
//!
//! Evaluation is pure: the constants table is only read, never written.
//! Whoever owns the table decides when a constant becomes visible, so
//! declaration order is entirely in the caller's hands.
mod error;
mod eval;
mod number;

pub use error::EvalError;
pub use eval::{ConstantsTable, Operator, evaluate, extract_expression};
pub use number::Number;
