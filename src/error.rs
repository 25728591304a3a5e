use crate::calculator::operator::{Arity, Op};

/// Represents every failure that can occur while evaluating an expression.
///
/// There is one variant per error category; all three pipeline stages share
/// this type, and a failure in any of them aborts the current `calculate`
/// call. The rendered form follows the convention
/// `"<category> error: <message> at position <n>"`, omitting the position
/// clause when no source position applies.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// A numeric literal contained a misplaced decimal point, as in `2.` or
    /// `2..2`.
    InvalidNumber {
        /// The offset of the offending character.
        position: usize,
    },
    /// A numeric literal was longer than
    /// [`MAX_NUMBER_LEN`](crate::calculator::lexer::MAX_NUMBER_LEN)
    /// characters.
    NumberTooLong {
        /// The offset where the literal starts.
        position: usize,
    },
    /// The input contained a character outside the expression grammar.
    UnknownSymbol {
        /// The character encountered.
        symbol: String,
        /// The offset of the character.
        position: usize,
    },
    /// A `+` or `-` appeared directly after another operator.
    OperatorSequence {
        /// The symbol of the operator already emitted.
        previous: &'static str,
        /// The symbol that followed it.
        found: &'static str,
        /// The offset of the second operator.
        position: usize,
    },
    /// Parentheses did not pair up.
    UnbalancedBrackets {
        /// The bracket left without a partner.
        bracket: &'static str,
        /// The offset of that bracket.
        position: usize,
    },
    /// A token reached the evaluator with no entry in the operator table.
    UnknownOperator {
        /// The symbol of the token.
        symbol: String,
        /// The offset of the token.
        position: usize,
    },
    /// An operator found fewer operands on the stack than its arity needs.
    InsufficientOperands {
        /// The starved operator.
        operator: Op,
        /// The offset of the operator.
        position: usize,
    },
    /// An operator was applied to operands outside its numeric domain.
    Arithmetic {
        /// What went wrong, e.g. `Division by zero`.
        details: String,
        /// The offset of the operator that was being applied.
        position: usize,
    },
    /// More than one value remained after the whole postfix sequence ran.
    TooManyOperands,
    /// The expression contained no tokens at all.
    EmptyExpression,
}

impl EvalError {
    /// Returns the category label used when rendering the error.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::InvalidNumber { .. } | Self::NumberTooLong { .. } => "Invalid number format",
            Self::UnknownSymbol { .. } => "Unknown symbol",
            Self::OperatorSequence { .. } => "Parsing",
            Self::UnbalancedBrackets { .. } => "Unbalanced brackets",
            Self::UnknownOperator { .. } => "Unknown operator",
            Self::InsufficientOperands { .. } | Self::Arithmetic { .. } => "Calculation",
            Self::TooManyOperands | Self::EmptyExpression => "Invalid expression",
        }
    }

    /// Returns the source offset the error points at, if it has one.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::InvalidNumber { position }
            | Self::NumberTooLong { position }
            | Self::UnknownSymbol { position, .. }
            | Self::OperatorSequence { position, .. }
            | Self::UnbalancedBrackets { position, .. }
            | Self::UnknownOperator { position, .. }
            | Self::InsufficientOperands { position, .. }
            | Self::Arithmetic { position, .. } => Some(*position),
            Self::EmptyExpression => Some(0),
            Self::TooManyOperands => None,
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNumber { position } => {
                write!(f, "Invalid number format error: Invalid number format at position {position}")
            },

            Self::NumberTooLong { position } => write!(f,
                                                       "Invalid number format error: Number has more than 10 digits at position {position}"),

            Self::UnknownSymbol { symbol, position } => {
                write!(f, "Unknown symbol error: {symbol} at position {position}")
            },

            Self::OperatorSequence { previous, found, position } => write!(f,
                                                                           "Parsing error: Incorrect operator sequence '{previous}' followed by '{found}' at position {position}"),

            Self::UnbalancedBrackets { bracket, position } => {
                write!(f, "Unbalanced brackets error: {bracket} at position {position}")
            },

            Self::UnknownOperator { symbol, position } => {
                write!(f, "Unknown operator error: {symbol} at position {position}")
            },

            Self::InsufficientOperands { operator, position } => {
                let arity = match operator.arity() {
                    Arity::Unary => "unary",
                    Arity::Binary => "binary",
                };
                write!(f,
                       "Calculation error: Not enough operands for a {arity} operator {} at position {position}",
                       operator.symbol())
            },

            Self::Arithmetic { details, position } => {
                write!(f, "Calculation error: {details} at position {position}")
            },

            Self::TooManyOperands => write!(f, "Invalid expression error: Too many operands"),

            Self::EmptyExpression => {
                write!(f, "Invalid expression error: Empty expression at position 0")
            },
        }
    }
}

impl std::error::Error for EvalError {}
