use crate::{calculator::{lexer::{Token, TokenValue},
                         operator::{Arity, Op},
                         value::Number},
            error::EvalError};

/// Evaluates a postfix token sequence to a single number.
///
/// Numbers push onto a value stack; each operator pops as many operands as
/// its arity requires (right before left, which matters for the
/// non-commutative operators) and pushes the result back. Exactly one value
/// must remain once the sequence is exhausted.
///
/// # Errors
/// - [`EvalError::InsufficientOperands`] when an operator finds too few
///   values on the stack, at the operator's position.
/// - [`EvalError::Arithmetic`] for domain violations inside an operator,
///   also at the operator's position.
/// - [`EvalError::UnknownOperator`] for a bracket token that bypassed the
///   postfix conversion; brackets have no operator table entry to apply.
/// - [`EvalError::TooManyOperands`] when the final stack holds anything
///   other than exactly one value.
pub fn evaluate(rpn: &[Token]) -> Result<Number, EvalError> {
    let mut stack: Vec<Number> = Vec::new();

    for token in rpn {
        match token.value {
            TokenValue::Number(number) => stack.push(number),

            TokenValue::Operator(op) => {
                let result = match op.arity() {
                    Arity::Unary => {
                        let Some(operand) = stack.pop() else {
                            return Err(EvalError::InsufficientOperands { operator: op,
                                                                        position: token.position });
                        };
                        apply_unary(op, operand)
                    },
                    Arity::Binary => {
                        let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                            return Err(EvalError::InsufficientOperands { operator: op,
                                                                        position: token.position });
                        };
                        apply_binary(op, left, right, token.position)?
                    },
                };
                stack.push(result);
            },

            TokenValue::OpenParen | TokenValue::CloseParen => {
                return Err(EvalError::UnknownOperator { symbol: token.value.to_string(),
                                                        position: token.position });
            },
        }
    }

    match (stack.pop(), stack.pop()) {
        (Some(result), None) => Ok(result),
        _ => Err(EvalError::TooManyOperands),
    }
}

fn apply_unary(op: Op, operand: Number) -> Number {
    match op {
        Op::Neg => -operand,
        // `$` only absorbs an explicit leading plus.
        _ => operand,
    }
}

fn apply_binary(op: Op, left: Number, right: Number, position: usize) -> Result<Number, EvalError> {
    match op {
        Op::Add => Ok(left + right),
        Op::Sub => Ok(left - right),
        Op::Mul => Ok(left * right),
        Op::Div => left.try_div(right, position),
        Op::FloorDiv => left.floor_div(right, position),
        Op::Mod => left.modulo(right, position),
        Op::Pow => left.pow(right, position),
        Op::Neg | Op::Ident => unreachable!("unary operator dispatched as binary"),
    }
}
