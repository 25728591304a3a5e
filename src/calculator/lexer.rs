use logos::Logos;

use crate::{calculator::{operator::Op, value::Number},
            error::EvalError};

/// Longest numeric literal accepted, counted in characters including the
/// decimal point.
pub const MAX_NUMBER_LEN: usize = 10;

/// What a single token holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenValue {
    /// A numeric literal.
    Number(Number),
    /// An operator, including the synthesized unary `~` and `$`.
    Operator(Op),
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
}

/// A token paired with its byte offset into the original expression.
///
/// The position is set once here in the lexer and carried read-only through
/// the conversion and evaluation stages for error reporting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    /// The token payload.
    pub value: TokenValue,
    /// Byte offset of the token's first character in the source text.
    pub position: usize,
}

impl std::fmt::Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::OpenParen => write!(f, "("),
            Self::CloseParen => write!(f, ")"),
        }
    }
}

/// Failure raised while scanning a single lexeme.
///
/// Positions are attached where the scanner knows them; an unmatched
/// character carries none because logos reports it through the token span
/// instead.
#[derive(Debug, Clone, Default, PartialEq)]
enum LexError {
    /// A literal contained a misplaced decimal point.
    InvalidNumber { position: usize },
    /// A literal ran past [`MAX_NUMBER_LEN`] characters.
    NumberTooLong { position: usize },
    /// No pattern matched at all.
    #[default]
    UnknownSymbol,
}

/// Raw lexemes recognized by the scanner, before sign disambiguation.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    /// A digit, or a `.` immediately followed by a digit, starts a literal;
    /// the greedy run is validated in [`scan_number`].
    #[regex(r"[0-9][0-9.]*", scan_number)]
    #[regex(r"\.[0-9][0-9.]*", scan_number)]
    Number(Number),
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `//`
    #[token("//")]
    DoubleSlash,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Validates and parses a numeric literal from the current token slice.
///
/// The regex consumes the whole digit/dot run greedily; this callback
/// rejects a second decimal point and a point with no digit after it (at the
/// offending point's offset), enforces the length cap, and picks the integer
/// or float representation by whether a point was consumed.
fn scan_number(lex: &mut logos::Lexer<RawToken>) -> Result<Number, LexError> {
    let slice = lex.slice();
    let start = lex.span().start;
    let bytes = slice.as_bytes();

    let mut has_dot = false;
    for (index, &byte) in bytes.iter().enumerate() {
        if byte != b'.' {
            continue;
        }
        let followed_by_digit = bytes.get(index + 1).is_some_and(u8::is_ascii_digit);
        if has_dot || !followed_by_digit {
            return Err(LexError::InvalidNumber { position: start + index });
        }
        has_dot = true;
    }

    if slice.len() > MAX_NUMBER_LEN {
        return Err(LexError::NumberTooLong { position: start });
    }

    if has_dot {
        slice.parse().map(Number::Float)
             .map_err(|_| LexError::InvalidNumber { position: start })
    } else {
        slice.parse().map(Number::Int)
             .map_err(|_| LexError::InvalidNumber { position: start })
    }
}

/// Tokenizes an infix expression into a sequence of positioned tokens.
///
/// Whitespace is skipped. `**` and `//` are consumed as single tokens. A `+`
/// or `-` at the start of the expression or directly after `(` becomes the
/// unary `$` or `~`; directly after another operator it is rejected as an
/// incorrect operator sequence. A blank expression yields an empty sequence,
/// which the caller is responsible for rejecting.
///
/// # Errors
/// Returns an [`EvalError`] for malformed or oversized numbers, unknown
/// characters, and invalid operator sequences, each pointing at the
/// offending offset.
pub fn tokenize(expression: &str) -> Result<Vec<Token>, EvalError> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut lexer = RawToken::lexer(expression);

    while let Some(raw) = lexer.next() {
        let position = lexer.span().start;
        let raw = match raw {
            Ok(raw) => raw,
            Err(LexError::InvalidNumber { position }) => {
                return Err(EvalError::InvalidNumber { position });
            },
            Err(LexError::NumberTooLong { position }) => {
                return Err(EvalError::NumberTooLong { position });
            },
            Err(LexError::UnknownSymbol) => {
                return Err(EvalError::UnknownSymbol { symbol: lexer.slice().to_string(),
                                                      position });
            },
        };

        let value = match raw {
            RawToken::Number(number) => TokenValue::Number(number),
            RawToken::DoubleStar => TokenValue::Operator(Op::Pow),
            RawToken::DoubleSlash => TokenValue::Operator(Op::FloorDiv),
            RawToken::Plus => sign_operator(&tokens, Op::Add, Op::Ident, position)?,
            RawToken::Minus => sign_operator(&tokens, Op::Sub, Op::Neg, position)?,
            RawToken::Star => TokenValue::Operator(Op::Mul),
            RawToken::Slash => TokenValue::Operator(Op::Div),
            RawToken::Percent => TokenValue::Operator(Op::Mod),
            RawToken::LParen => TokenValue::OpenParen,
            RawToken::RParen => TokenValue::CloseParen,
        };

        tokens.push(Token { value, position });
    }

    Ok(tokens)
}

/// Decides whether a `+` or `-` acts as a binary operator or a unary sign.
fn sign_operator(tokens: &[Token],
                 binary: Op,
                 unary: Op,
                 position: usize)
                 -> Result<TokenValue, EvalError> {
    match tokens.last().map(|token| token.value) {
        None | Some(TokenValue::OpenParen) => Ok(TokenValue::Operator(unary)),
        Some(TokenValue::Operator(previous)) => {
            Err(EvalError::OperatorSequence { previous: previous.symbol(),
                                              found: binary.symbol(),
                                              position })
        },
        Some(_) => Ok(TokenValue::Operator(binary)),
    }
}
