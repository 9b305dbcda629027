use std::fs;
use std::path::Path;
use std::str::FromStr;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::XmlError;

/// One element of the source document, before any value typing.
///
/// `text` holds the direct text content, the text between the start tag
/// and the first child node. Text after a child (tail text) never
/// contributes to an element's own value and is discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    /// Attributes in source order; keys are unique in well-formed XML.
    pub attributes: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<ElementChild>,
}

/// A child of an element in document order: a nested element or a
/// comment, both first-class.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementChild {
    Element(Element),
    Comment(String),
}

impl Element {
    /// Reads and parses the document at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Element, XmlError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| XmlError::Io {
            path: path.display().to_string(),
            source,
        })?;

        content.parse()
    }

    fn from_start(start: &BytesStart, input: &str, position: u64) -> Result<Element, XmlError> {
        let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut attributes = Vec::new();

        for attribute in start.attributes() {
            let attribute =
                attribute.map_err(|err| XmlError::parse(input, position, err))?;
            let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
            let value = attribute
                .unescape_value()
                .map_err(|err| XmlError::parse(input, position, err))?
                .into_owned();
            attributes.push((key, value));
        }

        Ok(Element {
            tag,
            attributes,
            text: String::new(),
            children: Vec::new(),
        })
    }
}

impl FromStr for Element {
    type Err = XmlError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse_document(input)
    }
}

fn parse_document(input: &str) -> Result<Element, XmlError> {
    let mut reader = Reader::from_str(input);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                let position = reader.buffer_position();
                ensure_single_root(&root, &stack, input, position)?;
                stack.push(Element::from_start(&start, input, position)?);
            }
            Ok(Event::Empty(start)) => {
                let position = reader.buffer_position();
                ensure_single_root(&root, &stack, input, position)?;
                let element = Element::from_start(&start, input, position)?;
                attach(&mut stack, &mut root, element);
            }
            Ok(Event::End(_)) => {
                // Mismatched tag names are already rejected by the reader.
                match stack.pop() {
                    Some(element) => attach(&mut stack, &mut root, element),
                    None => {
                        return Err(XmlError::parse(
                            input,
                            reader.buffer_position(),
                            "unexpected closing tag",
                        ));
                    }
                }
            }
            Ok(Event::Text(text)) => {
                let position = reader.buffer_position();
                let text = text
                    .xml_content()
                    .map_err(|err| XmlError::parse(input, position, err))?;
                append_text(&mut stack, &text, input, position)?;
            }
            Ok(Event::CData(cdata)) => {
                let position = reader.buffer_position();
                let text = String::from_utf8_lossy(&cdata.into_inner()).into_owned();
                append_text(&mut stack, &text, input, position)?;
            }
            Ok(Event::GeneralRef(entity)) => {
                let position = reader.buffer_position();
                let name = String::from_utf8_lossy(&entity).into_owned();
                match resolve_entity(&name) {
                    Some(text) => append_text(&mut stack, &text, input, position)?,
                    None => {
                        return Err(XmlError::parse(
                            input,
                            position,
                            format!("undefined entity \"&{};\"", name),
                        ));
                    }
                }
            }
            Ok(Event::Comment(comment)) => {
                let text = String::from_utf8_lossy(&comment.into_inner()).into_owned();
                // Comments outside the root have no parent to belong to.
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(ElementChild::Comment(text));
                }
            }
            Ok(Event::Decl(_) | Event::PI(_) | Event::DocType(_)) => {}
            Ok(Event::Eof) => break,
            Err(err) => {
                return Err(XmlError::parse(input, reader.error_position(), err));
            }
        }
    }

    if let Some(unclosed) = stack.last() {
        return Err(XmlError::parse(
            input,
            reader.buffer_position(),
            format!("unclosed element \"{}\"", unclosed.tag),
        ));
    }

    root.ok_or_else(|| XmlError::parse(input, reader.buffer_position(), "no root element found"))
}

fn ensure_single_root(
    root: &Option<Element>,
    stack: &[Element],
    input: &str,
    position: u64,
) -> Result<(), XmlError> {
    if root.is_some() && stack.is_empty() {
        return Err(XmlError::parse(
            input,
            position,
            "document has more than one root element",
        ));
    }

    Ok(())
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(ElementChild::Element(element)),
        None => *root = Some(element),
    }
}

fn append_text(
    stack: &mut [Element],
    text: &str,
    input: &str,
    position: u64,
) -> Result<(), XmlError> {
    match stack.last_mut() {
        // Only text before the first child is an element's direct content.
        Some(parent) if parent.children.is_empty() => parent.text.push_str(text),
        Some(_) => {}
        None if text.trim().is_empty() => {}
        None => {
            return Err(XmlError::parse(
                input,
                position,
                "text outside of the root element",
            ));
        }
    }

    Ok(())
}

/// Resolves the predefined XML entities and numeric character references.
fn resolve_entity(name: &str) -> Option<String> {
    let resolved = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        _ => {
            let reference = name.strip_prefix('#')?;
            let code = match reference.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => reference.parse::<u32>().ok()?,
            };
            char::from_u32(code)?
        }
    };

    Some(resolved.to_string())
}
