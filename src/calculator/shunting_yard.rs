use crate::{calculator::{lexer::{Token, TokenValue},
                         operator::Assoc},
            error::EvalError};

/// Converts infix tokens into postfix (RPN) order.
///
/// This is the standard shunting-yard parse: numbers pass straight through
/// to the output, operators wait on an auxiliary stack until an operator of
/// lower binding strength arrives, and parentheses bracket a fresh
/// precedence scope. A left-associative operator yields to a stack top of
/// equal or greater precedence, a right-associative one only to strictly
/// greater — the tie-break that makes `2 ** 2 ** 3` parse as
/// `2 ** (2 ** 3)`.
///
/// Every token keeps the source position it was created with, so the
/// evaluator can still point at the original text.
///
/// # Errors
/// Returns [`EvalError::UnbalancedBrackets`] for a `)` without a matching
/// `(` (at the `)`'s position) or a `(` that never closes (at the `(`'s
/// position).
pub fn to_postfix(tokens: Vec<Token>) -> Result<Vec<Token>, EvalError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token.value {
            TokenValue::Number(_) => output.push(token),

            TokenValue::OpenParen => stack.push(token),

            TokenValue::CloseParen => loop {
                match stack.pop() {
                    Some(top) if top.value == TokenValue::OpenParen => break,
                    Some(top) => output.push(top),
                    None => {
                        return Err(EvalError::UnbalancedBrackets { bracket: ")",
                                                                   position: token.position });
                    },
                }
            },

            TokenValue::Operator(op) => {
                while let Some(top) = stack.last() {
                    let TokenValue::Operator(top_op) = top.value else {
                        break;
                    };
                    let yields = match op.associativity() {
                        Assoc::Left => op.precedence() <= top_op.precedence(),
                        Assoc::Right => op.precedence() < top_op.precedence(),
                    };
                    if !yields {
                        break;
                    }
                    output.push(*top);
                    stack.pop();
                }
                stack.push(token);
            },
        }
    }

    while let Some(top) = stack.pop() {
        if top.value == TokenValue::OpenParen {
            return Err(EvalError::UnbalancedBrackets { bracket: "(",
                                                       position: top.position });
        }
        output.push(top);
    }

    Ok(output)
}
