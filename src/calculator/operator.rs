/// The number of operands an operator consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// One operand.
    Unary,
    /// Two operands.
    Binary,
}

/// Grouping direction for repeated operators of equal precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    /// Groups left to right, e.g. `8 - 3 - 2` is `(8 - 3) - 2`.
    Left,
    /// Groups right to left, e.g. `2 ** 2 ** 3` is `2 ** (2 ** 3)`.
    Right,
}

/// Highest exponent `**` accepts before refusing to compute.
pub const MAX_POWER: f64 = 999.0;

/// Every operator the calculator understands.
///
/// The set is closed: an operator token can only ever hold one of these
/// variants, so precedence, associativity, and application are all total
/// functions dispatched by `match`, with no closures stored in a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// `+` addition.
    Add,
    /// `-` subtraction.
    Sub,
    /// `*` multiplication.
    Mul,
    /// `/` true division; the result is always a float.
    Div,
    /// `//` floor division; both operands must be exact integers.
    FloorDiv,
    /// `%` modulo; both operands must be exact integers.
    Mod,
    /// `**` exponentiation, the only right-associative operator.
    Pow,
    /// `~` unary negation, synthesized by the lexer from a leading `-`.
    Neg,
    /// `$` unary identity, synthesized by the lexer from a leading `+`.
    Ident,
}

impl Op {
    /// Returns the surface symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::FloorDiv => "//",
            Self::Mod => "%",
            Self::Pow => "**",
            Self::Neg => "~",
            Self::Ident => "$",
        }
    }

    /// Returns how many operands the operator consumes.
    #[must_use]
    pub const fn arity(self) -> Arity {
        match self {
            Self::Neg | Self::Ident => Arity::Unary,
            _ => Arity::Binary,
        }
    }

    /// Returns the binding strength used by the shunting-yard comparison.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div | Self::FloorDiv | Self::Mod => 2,
            Self::Pow => 4,
            Self::Neg | Self::Ident => 5,
        }
    }

    /// Returns the grouping direction for equal-precedence ties.
    #[must_use]
    pub const fn associativity(self) -> Assoc {
        match self {
            Self::Pow => Assoc::Right,
            _ => Assoc::Left,
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
