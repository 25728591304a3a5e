/// The evaluator module computes the final value of a postfix sequence.
///
/// The evaluator walks the token sequence produced by the shunting-yard
/// conversion, pushes numbers onto a value stack, and applies each operator's
/// numeric policy to the values it pops. It is the last stage of the
/// pipeline.
///
/// # Responsibilities
/// - Evaluates a postfix token sequence to a single number.
/// - Reports starved operators and arithmetic failures with the operator's
///   source position.
pub mod evaluator;
/// The lexer module tokenizes an expression for further conversion.
///
/// The lexer reads the raw expression text and produces a stream of tokens
/// for numbers, operators, and brackets, each carrying its byte offset into
/// the source. It also decides whether a `+` or `-` is a binary operator or
/// a unary sign. This is the first stage of the pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Validates numeric literals and operator sequencing.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The operator table: symbols, arity, precedence, and associativity.
///
/// Defines the closed set of operators the calculator understands, together
/// with the metadata the shunting-yard conversion and the evaluator consult.
/// Everything here is constant data; there is no dynamic dispatch.
///
/// # Responsibilities
/// - Enumerates every operator and its surface symbol.
/// - Provides the precedence and associativity ordering.
pub mod operator;
/// The shunting-yard module reorders infix tokens into postfix order.
///
/// Consumes the token stream produced by the lexer and emits an equivalent
/// Reverse Polish Notation sequence, resolving precedence and associativity
/// with an auxiliary operator stack and matching parentheses along the way.
///
/// # Responsibilities
/// - Produces the postfix token sequence for the evaluator.
/// - Detects unbalanced brackets, reporting the offending token's position.
pub mod shunting_yard;
/// The value module defines the numeric type flowing through the pipeline.
///
/// Declares the two-variant `Number` type and the arithmetic each operator
/// applies to it, including the promotion rules between exact integers and
/// floating-point values.
///
/// # Responsibilities
/// - Preserves integer vs. float identity from literal to result.
/// - Implements the arithmetic policy of every operator, with positioned
///   errors for domain violations.
pub mod value;
