use itertools::Itertools;
use xconf_lang::{ConstantsTable, Number, Operator, evaluate, extract_expression};
use xconf_xml::{Comment, Node, NodeContent, Value};

use crate::error::RenderError;

/// Tag whose numeric value is registered in the constants table.
const CONSTANT_TAG: &str = "constant";

#[derive(Clone, Debug, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub indent_width: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { indent_width: 4 }
    }
}

impl Generator {
    pub fn new(config: Option<GeneratorConfig>) -> Self {
        Self {
            config: config.unwrap_or_default(),
        }
    }

    /// Renders the node tree as configuration text, depth-first in
    /// document order. The constants table is created here and dropped on
    /// return; expression visibility is exactly traversal order.
    ///
    /// No trailing newline is appended.
    pub fn generate(&self, node: &Node) -> Result<String, RenderError> {
        let mut constants = ConstantsTable::default();

        Ok(self
            .render_node(node, 0, &mut constants)?
            .unwrap_or_default())
    }

    fn render_node(
        &self,
        node: &Node,
        indent_level: usize,
        constants: &mut ConstantsTable,
    ) -> Result<Option<String>, RenderError> {
        let indent = self.indent(indent_level);
        let mut lines = Vec::new();

        match &node.value {
            Value::Empty => {}
            Value::Int(value) => {
                lines.push(self.assignment(node, Number::Int(*value), &indent, constants)?);
            }
            Value::Float(value) => {
                lines.push(self.assignment(node, Number::Float(*value), &indent, constants)?);
            }
            Value::String(value) => match extract_expression(value) {
                None => lines.push(format!("{indent}{} = [[{}]]", node.tag, value)),
                Some(tokens) => {
                    // Embedded text not ending in an operator is dropped
                    // rather than rendered, see the generate tests.
                    if tokens
                        .last()
                        .copied()
                        .and_then(Operator::from_token)
                        .is_some()
                    {
                        let result =
                            evaluate(&tokens, constants).map_err(|source| RenderError::Eval {
                                tag: node.tag.clone(),
                                source,
                            })?;
                        lines.push(format!("{indent}{} = {}", node.tag, result));
                    }
                }
            },
        }

        if !node.content.is_empty() {
            let mut entries = Vec::new();

            for child in &node.content {
                match child {
                    NodeContent::Comment(comment) => {
                        entries.push(self.render_comment(comment, indent_level + 1));
                    }
                    NodeContent::Node(child) => {
                        if let Some(rendered) =
                            self.render_node(child, indent_level + 1, constants)?
                        {
                            entries.push(rendered);
                        }
                    }
                }
            }

            if entries.is_empty() {
                lines.push(format!("{indent}{} = dict()", node.tag));
            } else {
                lines.push(format!(
                    "{indent}{} = dict(\n{}\n{indent})",
                    node.tag,
                    entries.iter().join(",\n"),
                ));
            }
        }

        if lines.is_empty() {
            Ok(None)
        } else {
            Ok(Some(lines.join("\n")))
        }
    }

    /// A numeric assignment line. A `constant` element is registered in
    /// the table at this moment, which is what makes it visible to every
    /// expression rendered after it, and declared with `-->` instead of
    /// the plain `=`.
    fn assignment(
        &self,
        node: &Node,
        number: Number,
        indent: &str,
        constants: &mut ConstantsTable,
    ) -> Result<String, RenderError> {
        if node.tag == CONSTANT_TAG {
            let name = node
                .attribute("name")
                .ok_or_else(|| RenderError::MissingConstantName {
                    tag: node.tag.clone(),
                })?;
            constants.insert(name.to_string(), number);

            Ok(format!("{indent}{} --> {}", node.tag, number))
        } else {
            Ok(format!("{indent}{} = {}", node.tag, number))
        }
    }

    fn render_comment(&self, comment: &Comment, indent_level: usize) -> String {
        let indent = self.indent(indent_level);

        if comment.text.contains('\n') {
            let mut lines = vec![format!("{indent}<!--")];
            lines.extend(comment.text.lines().map(|line| format!("{indent}{line}")));
            lines.push(format!("{indent}-->"));

            lines.join("\n")
        } else {
            format!("{indent}|| {}", comment.text)
        }
    }

    fn indent(&self, level: usize) -> String {
        " ".repeat(self.config.indent_width * level)
    }
}
