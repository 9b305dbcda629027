use miette::Diagnostic;
use thiserror::Error;

type ConstantName = String;
type ExpressionText = String;

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum EvalError {
    #[error("\"{operator}\" needs two operands in \"{expression}\"")]
    #[diagnostic(
        code(xconf_lang::stack_underflow),
        help("A binary operator pops two values; push its operands before it.")
    )]
    StackUnderflow {
        operator: String,
        expression: ExpressionText,
    },

    #[error("\"max\" applied to an empty stack in \"{expression}\"")]
    #[diagnostic(
        code(xconf_lang::empty_stack),
        help("\"max\" reduces everything pushed so far; push at least one value first.")
    )]
    EmptyStack { expression: ExpressionText },

    #[error("{count} values left on the stack after evaluating \"{expression}\"")]
    #[diagnostic(
        code(xconf_lang::unbalanced_stack),
        help("A well-formed postfix expression leaves exactly one value.")
    )]
    UnbalancedStack {
        count: usize,
        expression: ExpressionText,
    },

    #[error("\"{token}\" is not a number, constant or operator in \"{expression}\"")]
    #[diagnostic(code(xconf_lang::invalid_token))]
    InvalidToken {
        token: String,
        expression: ExpressionText,
    },

    #[error("constant \"{name}\" is not defined at this point in the document")]
    #[diagnostic(
        code(xconf_lang::undefined_constant),
        help("Constants become visible in document order; declare \"{name}\" before referencing it.")
    )]
    UndefinedConstant {
        name: ConstantName,
        expression: ExpressionText,
    },

    #[error("modulo by zero in \"{expression}\"")]
    #[diagnostic(code(xconf_lang::zero_division))]
    ZeroDivision { expression: ExpressionText },
}
