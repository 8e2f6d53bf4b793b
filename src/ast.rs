/// Represents a literal numeric value in the language.
///
/// `LiteralValue` covers the two numeric representations a literal can take:
/// exact 64-bit integers and 64-bit floating-point reals. The scanner decides
/// which one a literal is (a decimal point or an exponent makes it real), and
/// the evaluator promotes integers to reals when an operation mixes the two.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers every construct the language can express in one input line:
/// literals, variable references, history references, unary negation, binary
/// arithmetic, assignment, and function calls. Each node exclusively owns its
/// children; the tree is built bottom-up by the parser and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal numeric value.
    Literal {
        /// The constant value.
        value: LiteralValue,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// Reference to a previously computed result, written `$n`.
    HistoryRef {
        /// The 1-based index into the result history.
        index: usize,
    },
    /// Arithmetic negation of an operand.
    UnaryMinus {
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// Assignment of a value to a named variable.
    ///
    /// Assignment is an expression: it yields the assigned value, so forms
    /// like `y = x = 5` nest naturally.
    Assignment {
        /// The name of the variable being assigned.
        name:  String,
        /// The expression whose value is stored.
        value: Box<Self>,
    },
    /// Function call expression (e.g. `sin(x)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function, in source order.
        arguments: Vec<Self>,
    },
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Remainder (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};

        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Pow => "^",
        };
        write!(f, "{operator}")
    }
}
