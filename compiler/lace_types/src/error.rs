//! Inference error types.

use crate::{Type, TypeVar};
use lace_ir::Name;
use std::fmt;

/// Error from type inference.
///
/// Every error aborts the inference call that raised it; there is no
/// partial or best-effort typing. Callers correct the expression and
/// re-invoke.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TypeError {
    /// A variable reference has no binding in the current environment.
    UnboundVariable {
        /// The unresolved name.
        name: Name,
    },

    /// Two types could not be made equal.
    Mismatch {
        /// The type demanded by context.
        expected: Type,
        /// The type found.
        found: Type,
    },

    /// Infinite/recursive type detected (occurs check failed).
    ///
    /// Example: unifying `a` with `a -> Int` would make `a` infinite.
    InfiniteType {
        /// The variable that would recurse.
        var: TypeVar,
        /// The type that contains the variable.
        ty: Type,
    },
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundVariable { .. } => {
                write!(f, "unbound variable")
            }
            Self::Mismatch { .. } => {
                write!(f, "type mismatch")
            }
            Self::InfiniteType { var, .. } => {
                write!(f, "infinite type: variable {var} occurs in its own definition")
            }
        }
    }
}

impl std::error::Error for TypeError {}
