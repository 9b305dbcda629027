use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum XmlError {
    #[error("XML parsing error: {message}")]
    #[diagnostic(
        code(xconf_xml::parse),
        help("The input document could not be parsed at the indicated span.")
    )]
    Parse {
        message: String,
        #[source_code]
        src: String,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("failed to read \"{path}\"")]
    #[diagnostic(code(xconf_xml::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl XmlError {
    pub(crate) fn parse(src: &str, position: u64, message: impl std::fmt::Display) -> Self {
        let offset = (position as usize).min(src.len());
        let length = usize::from(offset < src.len());

        XmlError::Parse {
            message: message.to_string(),
            src: src.to_string(),
            span: (offset, length).into(),
        }
    }
}
