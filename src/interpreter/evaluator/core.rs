use std::collections::HashMap;

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{evaluator::function::core::call_builtin, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Built-in constants seeded into every new context.
///
/// These names are protected: assigning to them is a hard evaluation error,
/// so `pi` and `e` always resolve to their mathematical values.
pub const PROTECTED_CONSTANTS: &[(&str, f64)] =
    &[("pi", std::f64::consts::PI), ("e", std::f64::consts::E)];

/// Stores the mutable session state consulted during evaluation.
///
/// A `Context` owns the variable bindings (pre-seeded with the protected
/// constants) and the append-only history of results computed so far. It is
/// created once per session and threaded by mutable reference through every
/// evaluation; it is never global, so independent sessions can coexist.
///
/// The context is built for single-threaded use. Sharing one across
/// concurrent evaluations requires external synchronization.
pub struct Context {
    variables: HashMap<String, Value>,
    history:   Vec<Value>,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context holding only the built-in constants
    /// and an empty history.
    #[must_use]
    pub fn new() -> Self {
        let variables = PROTECTED_CONSTANTS.iter()
                                           .map(|(name, value)| {
                                               ((*name).to_string(), Value::Real(*value))
                                           })
                                           .collect();
        Self { variables,
               history: Vec::new() }
    }

    /// Evaluates an expression tree and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation: a single
    /// depth-first pass with an exhaustive match over every node kind. The
    /// tree is never mutated; only the context changes, and only through
    /// assignment nodes. Operands evaluate left before right, so a nested
    /// assignment in the left operand commits before the right operand
    /// runs, and stays committed even if the right operand later fails.
    ///
    /// Evaluating an expression does **not** record its result in history;
    /// recording is the caller's decision (see
    /// [`evaluate_line`](crate::evaluate_line)), so nested evaluation never
    /// double-records.
    ///
    /// # Parameters
    /// - `expr`: Expression tree to evaluate.
    ///
    /// # Returns
    /// The computed numeric value.
    ///
    /// # Errors
    /// Any `EvalError` raised by the expression: unknown names, arithmetic
    /// failures, domain violations, or out-of-range history references.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value } => Ok((*value).into()),
            Expr::Variable { name } => self.eval_variable(name),
            Expr::HistoryRef { index } => self.eval_history_ref(*index),
            Expr::UnaryMinus { expr } => {
                let value = self.eval(expr)?;
                Self::eval_negate(&value)
            },
            Expr::BinaryOp { left, op, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right)
            },
            Expr::Assignment { name, value } => self.eval_assignment(name, value),
            Expr::FunctionCall { name, arguments } => {
                let mut args = Vec::with_capacity(arguments.len());
                for argument in arguments {
                    args.push(self.eval(argument)?);
                }
                call_builtin(name, &args)
            },
        }
    }

    /// Resolves a variable reference.
    fn eval_variable(&self, name: &str) -> EvalResult<Value> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| EvalError::UnknownVariable { name: name.to_string() })
    }

    /// Resolves a `$n` reference against the current history.
    ///
    /// Indices are 1-based; 0 and anything past the current length are out
    /// of range, and the error names the valid range.
    fn eval_history_ref(&self, index: usize) -> EvalResult<Value> {
        if index == 0 || index > self.history.len() {
            return Err(EvalError::HistoryOutOfRange { index,
                                                      len: self.history.len() });
        }
        Ok(self.history[index - 1])
    }

    /// Evaluates an assignment and stores the result.
    ///
    /// The protected-constant check runs before the value expression is
    /// evaluated, so `pi = 1/0` reports the constant violation, not the
    /// division. The stored value is also the expression's result, which is
    /// what makes chained forms like `y = x = 5` work.
    fn eval_assignment(&mut self, name: &str, value: &Expr) -> EvalResult<Value> {
        if PROTECTED_CONSTANTS.iter().any(|(constant, _)| *constant == name) {
            return Err(EvalError::ProtectedConstant { name: name.to_string() });
        }

        let value = self.eval(value)?;
        self.variables.insert(name.to_string(), value);
        Ok(value)
    }

    /// Appends a computed result to the history.
    ///
    /// Called once per successful top-level evaluation, including for
    /// assignments, whose recorded value is the assigned value.
    pub fn record(&mut self, value: Value) {
        self.history.push(value);
    }

    /// Returns the ordered sequence of previously computed results.
    ///
    /// `$k` resolves to `history()[k - 1]`.
    #[must_use]
    pub fn history(&self) -> &[Value] {
        &self.history
    }

    /// Discards all recorded results.
    ///
    /// Variables are unaffected; only `$n` references become invalid.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Returns a read-only view of the variable bindings, constants
    /// included.
    #[must_use]
    pub const fn variables(&self) -> &HashMap<String, Value> {
        &self.variables
    }
}
