use crate::element::{Element, ElementChild};

/// One source element after typed-value coercion.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub value: Value,
    pub content: Vec<NodeContent>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeContent {
    Node(Node),
    Comment(Comment),
}

/// A comment carried alongside the elements it sits between. The block
/// as a whole is trimmed; interior lines stay verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub text: String,
}

/// The typed scalar of a node, derived from its direct text content.
///
/// The enum is closed and matched exhaustively wherever values are
/// consumed, so an unsupported value type cannot reach the serializer.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Empty,
    Int(i64),
    Float(f64),
    String(String),
}

impl Value {
    /// Coerces trimmed text content: digit-only text is an integer,
    /// other numeric text a float, anything else a string. Whitespace-only
    /// text is the empty value, which is suppressed from output.
    pub fn coerce(text: &str) -> Value {
        let trimmed = text.trim();

        if trimmed.is_empty() {
            return Value::Empty;
        }

        if trimmed.bytes().all(|b| b.is_ascii_digit()) {
            // Digit runs too long for an i64 fall through to the float parse.
            if let Ok(value) = trimmed.parse::<i64>() {
                return Value::Int(value);
            }
        }

        if let Ok(value) = trimmed.parse::<f64>() {
            return Value::Float(value);
        }

        Value::String(trimmed.to_string())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }
}

impl Node {
    /// Converts a loaded element tree into its typed form. Total over any
    /// tree the loader can produce; tag names are copied, never inspected.
    pub fn build(element: &Element) -> Node {
        let content = element
            .children
            .iter()
            .map(|child| match child {
                ElementChild::Element(child) => NodeContent::Node(Node::build(child)),
                ElementChild::Comment(text) => NodeContent::Comment(Comment {
                    text: text.trim().to_string(),
                }),
            })
            .collect();

        Node {
            tag: element.tag.clone(),
            attributes: element.attributes.clone(),
            value: Value::coerce(&element.text),
            content,
        }
    }

    /// Looks up an attribute value by key.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::digits("10", Value::Int(10))]
    #[case::padded_digits(" 42 ", Value::Int(42))]
    #[case::leading_zeros("007", Value::Int(7))]
    #[case::float("3.25", Value::Float(3.25))]
    #[case::negative("-5", Value::Float(-5.0))]
    #[case::exponent("1e3", Value::Float(1000.0))]
    #[case::explicit_plus("+10", Value::Float(10.0))]
    #[case::huge_digit_run(
        "99999999999999999999999999",
        Value::Float(1e26)
    )]
    #[case::text("hello", Value::String("hello".to_string()))]
    #[case::padded_text("  padded  ", Value::String("padded".to_string()))]
    #[case::mixed("12 monkeys", Value::String("12 monkeys".to_string()))]
    #[case::empty("", Value::Empty)]
    #[case::whitespace("   \n\t", Value::Empty)]
    fn test_coerce(#[case] text: &str, #[case] expected: Value) {
        assert_eq!(Value::coerce(text), expected);
    }

    #[test]
    fn test_build_copies_attributes_in_order() {
        let root: Element = r#"<constant name="a" unit="ms">10</constant>"#.parse().unwrap();
        let node = Node::build(&root);

        assert_eq!(node.tag, "constant");
        assert_eq!(node.value, Value::Int(10));
        assert_eq!(node.attribute("name"), Some("a"));
        assert_eq!(node.attribute("unit"), Some("ms"));
        assert_eq!(node.attribute("missing"), None);
    }

    #[test]
    fn test_build_preserves_mixed_child_order() {
        let root: Element = "<root><!-- lead --><a>1</a><!-- mid --><b>2</b></root>"
            .parse()
            .unwrap();
        let node = Node::build(&root);

        assert_eq!(node.content.len(), 4);
        assert!(matches!(
            &node.content[0],
            NodeContent::Comment(comment) if comment.text == "lead"
        ));
        assert!(matches!(
            &node.content[1],
            NodeContent::Node(child) if child.tag == "a"
        ));
        assert!(matches!(
            &node.content[2],
            NodeContent::Comment(comment) if comment.text == "mid"
        ));
        assert!(matches!(
            &node.content[3],
            NodeContent::Node(child) if child.tag == "b"
        ));
    }

    #[test]
    fn test_build_trims_comment_block_keeps_interior_lines() {
        let root: Element = "<root><!--\n  first line\n  second line\n--><a>1</a></root>"
            .parse()
            .unwrap();
        let node = Node::build(&root);

        let NodeContent::Comment(comment) = &node.content[0] else {
            panic!("expected a comment entry");
        };
        assert_eq!(comment.text, "first line\n  second line");
    }

    #[test]
    fn test_build_recurses_into_children() {
        let root: Element = "<catalog><group><item>2.5</item></group></catalog>"
            .parse()
            .unwrap();
        let node = Node::build(&root);

        let NodeContent::Node(group) = &node.content[0] else {
            panic!("expected an element entry");
        };
        let NodeContent::Node(item) = &group.content[0] else {
            panic!("expected an element entry");
        };
        assert_eq!(item.value, Value::Float(2.5));
        assert!(node.value.is_empty());
    }
}
