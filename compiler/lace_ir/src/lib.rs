//! Lace IR - expression-side data structures.
//!
//! This crate contains everything the inference engine consumes:
//! - Names for interned identifiers
//! - AST nodes (`ExprKind`) and arena allocation for expressions
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: Strings → `Name(u32)`
//! - **Flatten Everything**: No `Box<Expr>`, use `ExprId(u32)` indices
//!
//! Expression trees are built directly by the caller through the
//! [`ExprArena`] builder methods; there is no parser in front of them.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod interner;
mod name;

pub use ast::{ExprArena, ExprId, ExprKind};
pub use interner::StringInterner;
pub use name::Name;

// Size assertions to prevent accidental regressions.
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{ExprId, Name};
    // Both are bare u32 wrappers
    static_assert_size!(Name, 4);
    static_assert_size!(ExprId, 4);
}
