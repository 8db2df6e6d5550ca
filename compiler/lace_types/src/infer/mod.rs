//! Algorithm W inference engine.
//!
//! Walks caller-built expression trees and computes most general types,
//! threading explicit substitutions through the classic W recursion:
//! every step returns the substitution it learned together with the type
//! it inferred, and callers compose substitutions in discovery order.
//!
//! # Component Structure
//!
//! ```text
//! InferEngine
//! ├── ExprArena (borrowed; the trees under inference)
//! └── VarSupply (owned; session-scoped fresh variables)
//! ```
//!
//! Inference fails fast: the first unbound variable or unification
//! failure aborts the whole call with no partial result.


use lace_ir::{ExprArena, ExprId, ExprKind};

use crate::stack::ensure_sufficient_stack;
use crate::{unify, Subst, Type, TypeEnv, TypeError, TypeScheme, TypeVar, VarSupply};

/// Generalize a type against an environment.
///
/// Quantifies exactly over the variables free in `ty` but not free in
/// `env`: a variable still free in the environment is constrained by an
/// enclosing binding and is not actually polymorphic, so quantifying
/// over it would be unsound.
pub fn generalize(env: &TypeEnv, ty: &Type) -> TypeScheme {
    let env_vars = env.free_vars();
    let vars: Vec<TypeVar> = ty
        .free_vars()
        .into_iter()
        .filter(|v| !env_vars.contains(v))
        .collect();
    TypeScheme::new(vars, ty.clone())
}

/// The inference engine.
///
/// Owns the session's fresh-variable supply and borrows the expression
/// arena; one engine is one inference session, so concurrent sessions
/// never share counter state.
pub struct InferEngine<'a> {
    /// The expression arena holding the trees under inference.
    arena: &'a ExprArena,
    /// Fresh-variable supply, scoped to this session.
    supply: VarSupply,
}

impl<'a> InferEngine<'a> {
    /// Create an engine over an arena.
    pub fn new(arena: &'a ExprArena) -> Self {
        Self {
            arena,
            supply: VarSupply::new(),
        }
    }

    /// Create a fresh type variable.
    fn fresh(&mut self) -> Type {
        Type::Var(self.supply.fresh())
    }

    /// Instantiate a scheme with fresh variables.
    ///
    /// Each call replaces the quantified variables with its own fresh
    /// ones, so every use site of a polymorphic binding gets an
    /// independent instance - the mechanism behind let-polymorphism.
    pub fn instantiate(&mut self, scheme: &TypeScheme) -> Type {
        if scheme.is_mono() {
            return scheme.body().clone();
        }
        let subst: Subst = scheme.vars().iter().map(|&v| (v, self.fresh())).collect();
        subst.apply(scheme.body())
    }

    /// Infer the most general type of `expr` under an empty environment.
    ///
    /// # Errors
    /// Fails fast on the first unbound variable or unification failure.
    pub fn infer(&mut self, expr: ExprId) -> Result<TypeScheme, TypeError> {
        self.infer_in(&TypeEnv::new(), expr)
    }

    /// Infer the most general type of `expr` under a seeded environment.
    ///
    /// The result is generalized against `env`, so variables the seed
    /// bindings still constrain stay monomorphic.
    ///
    /// # Errors
    /// Fails fast on the first unbound variable or unification failure.
    pub fn infer_in(&mut self, env: &TypeEnv, expr: ExprId) -> Result<TypeScheme, TypeError> {
        tracing::debug!(expr = expr.raw(), "inferring expression type");
        let (_, ty) = self.infer_expr(env, expr)?;
        Ok(generalize(env, &ty))
    }

    /// The W recursion: returns the learned substitution and the type.
    ///
    /// # Errors
    /// [`TypeError::UnboundVariable`] for a reference with no binding,
    /// [`TypeError::Mismatch`] / [`TypeError::InfiniteType`] out of
    /// unification.
    #[tracing::instrument(level = "trace", skip(self, env))]
    pub fn infer_expr(
        &mut self,
        env: &TypeEnv,
        expr: ExprId,
    ) -> Result<(Subst, Type), TypeError> {
        ensure_sufficient_stack(|| self.infer_expr_inner(env, expr))
    }

    fn infer_expr_inner(
        &mut self,
        env: &TypeEnv,
        expr: ExprId,
    ) -> Result<(Subst, Type), TypeError> {
        match self.arena.kind(expr) {
            ExprKind::Int(_) => Ok((Subst::empty(), Type::INT)),
            ExprKind::Bool(_) => Ok((Subst::empty(), Type::BOOL)),
            ExprKind::Str(_) => Ok((Subst::empty(), Type::STR)),

            ExprKind::Ident(name) => match env.lookup(name) {
                Some(scheme) => {
                    let instance = self.instantiate(scheme);
                    Ok((Subst::empty(), instance))
                }
                None => Err(TypeError::UnboundVariable { name }),
            },

            ExprKind::Lambda { param, body } => {
                let param_ty = self.fresh();
                let mut body_env = env.clone();
                body_env.bind(param, TypeScheme::mono(param_ty.clone()));
                let (s, body_ty) = self.infer_expr(&body_env, body)?;
                // Inferring the body may have constrained the parameter.
                let param_ty = s.apply(&param_ty);
                Ok((s, Type::func(param_ty, body_ty)))
            }

            ExprKind::Call { func, arg } => {
                let (s1, func_ty) = self.infer_expr(env, func)?;
                // Constraints discovered while typing `func` must be in
                // force before the argument is inferred.
                let (s2, arg_ty) = self.infer_expr(&env.apply(&s1), arg)?;
                let result_ty = self.fresh();
                let s3 = unify(&s2.apply(&func_ty), &Type::func(arg_ty, result_ty.clone()))?;
                let result_ty = s3.apply(&result_ty);
                Ok((s1.compose(&s2).compose(&s3), result_ty))
            }

            ExprKind::Let { name, value, body } => {
                // The placeholder ties the binding to its value type once
                // inferred; the binding is not recursive.
                let placeholder = self.fresh();
                let mut value_env = env.clone();
                value_env.bind(name, TypeScheme::mono(placeholder.clone()));
                let (s1, value_ty) = self.infer_expr(&value_env, value)?;
                let s2 = unify(&value_ty, &s1.apply(&placeholder))?;
                let s12 = s1.compose(&s2);

                let mut body_env = env.apply(&s12);
                let scheme = generalize(&body_env, &s12.apply(&value_ty));
                body_env.bind(name, scheme);

                let (s3, body_ty) = self.infer_expr(&body_env, body)?;
                Ok((s12.compose(&s3), body_ty))
            }
        }
    }
}
