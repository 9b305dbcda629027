//! # xconf-gen: configuration-language serializer for xconf
//!
//! Walks a typed [`xconf_xml::Node`] tree depth-first and renders the
//! xconf configuration text: `key = value` assignments, `dict(...)`
//! blocks for nesting, `[[...]]` string literals, and `-->` declarations
//! for named constants. Embedded postfix expressions are evaluated on the
//! way down against the constants declared earlier in the document.
//!
//! ## Quick Start
//!
//! ```rust
//! use xconf_gen::Generator;
//! use xconf_xml::{Element, Node};
//!
//! let source = "<catalog>\
//!     <constant name=\"a\">10</constant>\
//!     <constant name=\"b\">20</constant>\
//!     <calc>@{ a b + }</calc>\
//! </catalog>";
//!
//! let root: Element = source.parse().unwrap();
//! let config = Generator::default().generate(&Node::build(&root)).unwrap();
//!
//! assert_eq!(
//!     config,
//!     "catalog = dict(\n    constant --> 10,\n    constant --> 20,\n    calc = 30\n)"
//! );
//! ```
//!
//! The constants table lives for exactly one [`Generator::generate`] call,
//! so conversions never leak state into each other.
mod error;
mod generator;

pub use error::RenderError;
pub use generator::{Generator, GeneratorConfig};
