use miette::Diagnostic;
use thiserror::Error;
use xconf_lang::EvalError;

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum RenderError {
    #[error("failed to evaluate the expression of \"{tag}\"")]
    #[diagnostic(code(xconf_gen::eval))]
    Eval {
        tag: String,
        #[source]
        #[diagnostic_source]
        source: EvalError,
    },

    #[error("constant element \"{tag}\" is missing a \"name\" attribute")]
    #[diagnostic(
        code(xconf_gen::missing_constant_name),
        help("A constant is registered under its \"name\" attribute; add one.")
    )]
    MissingConstantName { tag: String },
}
