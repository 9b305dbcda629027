use rustc_hash::FxHashMap;

use crate::error::EvalError;
use crate::number::Number;

/// Named constants visible to an expression, keyed by declaration name.
///
/// The table is owned by whoever walks the document; constants declared
/// later in the document are simply absent when earlier expressions run.
pub type ConstantsTable = FxHashMap<String, Number>;

/// Marker opening an embedded expression inside a value string.
pub const EXPRESSION_OPEN: &str = "@{";
/// Marker closing an embedded expression.
pub const EXPRESSION_CLOSE: char = '}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Mod,
    /// N-ary: reduces the entire operand stack to its maximum.
    Max,
}

impl Operator {
    pub fn from_token(token: &str) -> Option<Operator> {
        match token {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "mod" => Some(Operator::Mod),
            "max" => Some(Operator::Max),
            _ => None,
        }
    }

    fn apply(self, lhs: Number, rhs: Number) -> Number {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
            Operator::Mul => lhs * rhs,
            Operator::Mod => lhs % rhs,
            // `Max` is handled by the stack loop before `apply` is reached;
            // as a binary operator it degenerates to a two-value maximum.
            Operator::Max => lhs.max(rhs),
        }
    }
}

/// Extracts the whitespace-split token sequence embedded between the
/// `@{` and `}` markers of a value string, or `None` when the string
/// contains no opening marker at all.
pub fn extract_expression(value: &str) -> Option<Vec<&str>> {
    let start = value.find(EXPRESSION_OPEN)?;
    let rest = &value[start + EXPRESSION_OPEN.len()..];
    let inner = match rest.rfind(EXPRESSION_CLOSE) {
        Some(end) => &rest[..end],
        None => rest,
    };

    Some(inner.split_whitespace().collect())
}

/// Evaluates a postfix token sequence against the constants table.
///
/// Tokens are processed left to right on a single operand stack: a token
/// naming a constant pushes its value, an operator pops and applies, and
/// anything else must parse as a floating-point literal. The sole value
/// left on the stack is the result.
pub fn evaluate(tokens: &[&str], constants: &ConstantsTable) -> Result<Number, EvalError> {
    let mut stack: Vec<Number> = Vec::with_capacity(tokens.len());

    for token in tokens {
        if let Some(value) = constants.get(*token) {
            stack.push(*value);
        } else if let Some(operator) = Operator::from_token(token) {
            if operator == Operator::Max {
                match stack.drain(..).max() {
                    Some(max) => stack.push(max),
                    None => {
                        return Err(EvalError::EmptyStack {
                            expression: tokens.join(" "),
                        });
                    }
                }
            } else {
                let operands = stack.pop().zip(stack.pop());
                let Some((rhs, lhs)) = operands else {
                    return Err(EvalError::StackUnderflow {
                        operator: token.to_string(),
                        expression: tokens.join(" "),
                    });
                };

                if operator == Operator::Mod && rhs.is_zero() {
                    return Err(EvalError::ZeroDivision {
                        expression: tokens.join(" "),
                    });
                }

                stack.push(operator.apply(lhs, rhs));
            }
        } else if let Ok(literal) = token.parse::<f64>() {
            stack.push(Number::Float(literal));
        } else if is_identifier(token) {
            return Err(EvalError::UndefinedConstant {
                name: token.to_string(),
                expression: tokens.join(" "),
            });
        } else {
            return Err(EvalError::InvalidToken {
                token: token.to_string(),
                expression: tokens.join(" "),
            });
        }
    }

    match stack.as_slice() {
        [result] => Ok(*result),
        _ => Err(EvalError::UnbalancedStack {
            count: stack.len(),
            expression: tokens.join(" "),
        }),
    }
}

/// An identifier-shaped token is a reference to a (possibly undeclared)
/// constant rather than a malformed literal.
fn is_identifier(token: &str) -> bool {
    token
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
}
