//! # xconf-xml: XML loading and typed node trees for xconf
//!
//! This crate covers the input half of the xconf pipeline: parsing an XML
//! document into an [`Element`] tree that keeps comment nodes as
//! first-class siblings, and converting that tree into the typed [`Node`]
//! representation the serializer consumes.
//!
//! ## Quick Start
//!
//! ```rust
//! use xconf_xml::{Element, Node, Value};
//!
//! let root: Element = "<catalog><count>10</count></catalog>".parse().unwrap();
//! let node = Node::build(&root);
//!
//! assert_eq!(node.tag, "catalog");
//! assert_eq!(node.content.len(), 1);
//! ```
//!
//! Scalar text content is coerced while building the node tree: digit-only
//! text becomes an integer, other numeric text a float, and everything
//! else stays a (trimmed) string.
//!
//! ```rust
//! use xconf_xml::Value;
//!
//! assert_eq!(Value::coerce("10"), Value::Int(10));
//! assert_eq!(Value::coerce("2.5"), Value::Float(2.5));
//! assert_eq!(Value::coerce("  plain  "), Value::String("plain".to_string()));
//! assert_eq!(Value::coerce("   "), Value::Empty);
//! ```
mod element;
mod error;
mod node;

pub use element::{Element, ElementChild};
pub use error::XmlError;
pub use node::{Comment, Node, NodeContent, Value};
