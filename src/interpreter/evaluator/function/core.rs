use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            function::{builtin, log, min_max, sqrt},
        },
        value::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values, already checked
/// against the declared arity, and returns the computed value.
type BuiltinFn = fn(&[Value]) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `AtLeast(n)` means the builtin is variadic with a minimum of `n`.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    AtLeast(usize),
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"   => { arity: Arity::Exact(1), func: builtin::sin },
    "cos"   => { arity: Arity::Exact(1), func: builtin::cos },
    "tan"   => { arity: Arity::Exact(1), func: builtin::tan },
    "sqrt"  => { arity: Arity::Exact(1), func: sqrt::sqrt },
    "log"   => { arity: Arity::Exact(1), func: log::log },
    "log10" => { arity: Arity::Exact(1), func: log::log10 },
    "abs"   => { arity: Arity::Exact(1), func: builtin::abs },
    "ceil"  => { arity: Arity::Exact(1), func: |args| builtin::unary_round("ceil", args) },
    "floor" => { arity: Arity::Exact(1), func: |args| builtin::unary_round("floor", args) },
    "min"   => { arity: Arity::AtLeast(2), func: |args| min_max::min_max("min", args) },
    "max"   => { arity: Arity::AtLeast(2), func: |args| min_max::min_max("max", args) },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity
    /// constraint.
    const fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::AtLeast(m) => n >= *m,
        }
    }

    /// Describes the accepted count for arity-mismatch messages.
    fn describe(&self) -> String {
        match self {
            Self::Exact(m) => m.to_string(),
            Self::AtLeast(m) => format!("at least {m}"),
        }
    }
}

/// Dispatches a function call to its builtin implementation.
///
/// The name is looked up in the builtin table, the argument count is
/// verified against the declared arity, and the implementation runs on the
/// already-evaluated arguments.
///
/// # Parameters
/// - `name`: Function name as written in the source.
/// - `args`: Evaluated argument values, in source order.
///
/// # Errors
/// - `EvalError::UnknownFunction` if the name is not in the table.
/// - `EvalError::ArgumentCountMismatch` stating expected vs. actual count.
/// - Whatever the builtin itself raises (domain violations).
pub(crate) fn call_builtin(name: &str, args: &[Value]) -> EvalResult<Value> {
    let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == name) else {
        return Err(EvalError::UnknownFunction { name: name.to_string() });
    };

    if !builtin.arity.check(args.len()) {
        return Err(EvalError::ArgumentCountMismatch { name:     name.to_string(),
                                                      expected: builtin.arity.describe(),
                                                      found:    args.len(), });
    }

    (builtin.func)(args)
}
