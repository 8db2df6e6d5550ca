//! Syntactic unification.
//!
//! Computes most general unifiers as explicit substitutions.
//! Deterministic, no backtracking; the occurs check rejects infinite
//! types.

use crate::{Subst, Type, TypeError, TypeVar};

/// Unify two types, returning their most general unifier.
///
/// The returned substitution makes both inputs syntactically equal:
/// `s.apply(t1) == s.apply(t2)`. Any other unifier of the pair is an
/// instance of it.
///
/// # Errors
///
/// [`TypeError::Mismatch`] when the shapes cannot be reconciled, and
/// [`TypeError::InfiniteType`] when unification would require a variable
/// to contain itself.
pub fn unify(t1: &Type, t2: &Type) -> Result<Subst, TypeError> {
    match (t1, t2) {
        (Type::Base(a), Type::Base(b)) => {
            if a == b {
                Ok(Subst::empty())
            } else {
                Err(mismatch(t1, t2))
            }
        }

        // Variable on either side binds to the other type.
        (Type::Var(v), _) => bind_var(*v, t2),
        (_, Type::Var(v)) => bind_var(*v, t1),

        (Type::Func(arg1, result1), Type::Func(arg2, result2)) => {
            let s1 = unify(arg1, arg2)?;
            // Constraints learned from the arguments feed the results.
            let s2 = unify(&s1.apply(result1), &s1.apply(result2))?;
            Ok(s1.compose(&s2))
        }

        _ => Err(mismatch(t1, t2)),
    }
}

/// Bind a variable to a type, producing a singleton substitution.
///
/// Unifying a variable with itself needs no mapping at all. The occurs
/// check runs before binding: a variable unified with a type containing
/// it would denote an infinite type.
fn bind_var(var: TypeVar, ty: &Type) -> Result<Subst, TypeError> {
    if let Type::Var(other) = ty {
        if *other == var {
            return Ok(Subst::empty());
        }
    }
    if ty.occurs(var) {
        return Err(TypeError::InfiniteType {
            var,
            ty: ty.clone(),
        });
    }
    Ok(Subst::singleton(var, ty.clone()))
}

fn mismatch(expected: &Type, found: &Type) -> TypeError {
    TypeError::Mismatch {
        expected: expected.clone(),
        found: found.clone(),
    }
}
