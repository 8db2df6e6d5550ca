//! Type system for Lace.
//!
//! Implements Hindley-Milner inference (classic Algorithm W) over
//! caller-built expression trees:
//! - [`Type`], [`TypeScheme`], [`TypeVar`] - the type model
//! - [`VarSupply`] - session-scoped fresh-variable generation
//! - [`Subst`] - finite variable-to-type mappings with proper composition
//! - [`unify`] - syntactic most-general unification with occurs check
//! - [`InferEngine`] - the W recursion, instantiation and generalization
//!
//! The engine is pure computation: no I/O, no global state. Each
//! [`InferEngine`] owns its own variable supply, so concurrent inference
//! sessions are isolated by construction.

mod env;
mod error;
mod infer;
mod stack;
mod subst;
mod ty;
mod unify;

pub use env::TypeEnv;
pub use error::TypeError;
pub use infer::{generalize, InferEngine};
pub use stack::ensure_sufficient_stack;
pub use subst::Subst;
pub use ty::{Type, TypeScheme, TypeVar, VarSupply};
pub use unify::unify;

// Size assertions to prevent accidental regressions.
// Type is cloned throughout substitution application.
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Type, TypeVar};
    // Type enum: largest variant is Func with two boxes (16 bytes) + discriminant
    lace_ir::static_assert_size!(Type, 24);
    // TypeVar is just a u32 wrapper
    lace_ir::static_assert_size!(TypeVar, 4);
}
