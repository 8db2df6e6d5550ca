//! Substitutions: finite mappings from type variables to types.

use crate::{Type, TypeScheme, TypeVar};
use rustc_hash::FxHashMap;

/// A finite mapping from type variables to types.
///
/// Substitutions are never mutated once built; every operation returns a
/// new substitution, so they can be shared freely across the inference
/// recursion.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Subst(FxHashMap<TypeVar, Type>);

impl Subst {
    /// The empty substitution.
    pub fn empty() -> Self {
        Self(FxHashMap::default())
    }

    /// The substitution mapping a single variable.
    pub fn singleton(var: TypeVar, ty: Type) -> Self {
        let mut map = FxHashMap::default();
        map.insert(var, ty);
        Self(map)
    }

    /// Check if no variables are mapped.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of mapped variables.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Look up the mapping for a variable.
    pub fn get(&self, var: TypeVar) -> Option<&Type> {
        self.0.get(&var)
    }

    /// Apply to a type.
    ///
    /// Base types pass through, mapped variables are replaced, function
    /// types recurse into argument and result. The input is not mutated.
    pub fn apply(&self, ty: &Type) -> Type {
        match ty {
            Type::Base(_) => ty.clone(),
            Type::Var(v) => self.0.get(v).cloned().unwrap_or_else(|| ty.clone()),
            Type::Func(arg, result) => Type::func(self.apply(arg), self.apply(result)),
        }
    }

    /// Apply to a scheme.
    ///
    /// Mappings for the scheme's bound variables are dropped before
    /// descending into the body: a quantified variable is local to the
    /// scheme and must not be substituted through.
    pub fn apply_scheme(&self, scheme: &TypeScheme) -> TypeScheme {
        let filtered: Subst = self
            .0
            .iter()
            .filter(|(v, _)| !scheme.vars().contains(v))
            .map(|(v, t)| (*v, t.clone()))
            .collect();
        TypeScheme::new(scheme.vars().to_vec(), filtered.apply(scheme.body()))
    }

    /// Compose with a later substitution: `self` first, then `later`.
    ///
    /// `later` is applied to every type in `self`'s range before `later`'s
    /// own mappings are merged in for variables `self` does not cover.
    /// A key-level merge of the two maps is not equivalent once they share
    /// variables; `apply` of the result always equals applying `self` then
    /// `later` in sequence.
    #[must_use]
    pub fn compose(&self, later: &Subst) -> Subst {
        let mut map: FxHashMap<TypeVar, Type> = self
            .0
            .iter()
            .map(|(v, t)| (*v, later.apply(t)))
            .collect();
        for (v, t) in &later.0 {
            map.entry(*v).or_insert_with(|| t.clone());
        }
        Subst(map)
    }
}

impl FromIterator<(TypeVar, Type)> for Subst {
    fn from_iter<I: IntoIterator<Item = (TypeVar, Type)>>(iter: I) -> Self {
        Subst(iter.into_iter().collect())
    }
}
