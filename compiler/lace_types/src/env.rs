//! Type environment: name to type-scheme bindings.

use crate::{Subst, TypeScheme, TypeVar};
use lace_ir::Name;
use rustc_hash::{FxHashMap, FxHashSet};

/// Type environment.
///
/// Maps names to type schemes. Inference extends environments by cloning
/// as it descends into sub-expressions; an environment is scoped to one
/// inference call and never shared-mutated.
#[derive(Clone, Debug, Default)]
pub struct TypeEnv {
    bindings: FxHashMap<Name, TypeScheme>,
}

impl TypeEnv {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self {
            bindings: FxHashMap::default(),
        }
    }

    /// Bind a name to a scheme, shadowing any previous binding.
    pub fn bind(&mut self, name: Name, scheme: TypeScheme) {
        self.bindings.insert(name, scheme);
    }

    /// Look up a name.
    pub fn lookup(&self, name: Name) -> Option<&TypeScheme> {
        self.bindings.get(&name)
    }

    /// Check whether a name is bound.
    pub fn contains(&self, name: Name) -> bool {
        self.bindings.contains_key(&name)
    }

    /// Apply a substitution to every bound scheme, producing a new
    /// environment.
    #[must_use]
    pub fn apply(&self, subst: &Subst) -> TypeEnv {
        TypeEnv {
            bindings: self
                .bindings
                .iter()
                .map(|(name, scheme)| (*name, subst.apply_scheme(scheme)))
                .collect(),
        }
    }

    /// Free variables: union over all bound schemes.
    pub fn free_vars(&self) -> FxHashSet<TypeVar> {
        let mut vars = FxHashSet::default();
        for scheme in self.bindings.values() {
            vars.extend(scheme.free_vars());
        }
        vars
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Type;
    use pretty_assertions::assert_eq;

    #[test]
    fn bind_lookup_and_shadow() {
        let x = Name::from_raw(10);
        let mut env = TypeEnv::new();
        assert!(!env.contains(x));

        env.bind(x, TypeScheme::mono(Type::INT));
        assert_eq!(env.lookup(x), Some(&TypeScheme::mono(Type::INT)));

        env.bind(x, TypeScheme::mono(Type::BOOL));
        assert_eq!(env.lookup(x), Some(&TypeScheme::mono(Type::BOOL)));
    }

    #[test]
    fn extension_by_clone_leaves_parent_untouched() {
        let x = Name::from_raw(10);
        let y = Name::from_raw(11);

        let mut outer = TypeEnv::new();
        outer.bind(x, TypeScheme::mono(Type::INT));

        let mut inner = outer.clone();
        inner.bind(y, TypeScheme::mono(Type::BOOL));

        assert!(inner.contains(x) && inner.contains(y));
        assert!(!outer.contains(y));
    }

    #[test]
    fn apply_maps_over_every_binding() {
        let a = TypeVar::new(0);
        let x = Name::from_raw(10);

        let mut env = TypeEnv::new();
        env.bind(x, TypeScheme::mono(Type::Var(a)));

        let applied = env.apply(&Subst::singleton(a, Type::STR));
        assert_eq!(applied.lookup(x), Some(&TypeScheme::mono(Type::STR)));
        // The original environment is unchanged.
        assert_eq!(env.lookup(x), Some(&TypeScheme::mono(Type::Var(a))));
    }

    #[test]
    fn free_vars_exclude_quantified() {
        let a = TypeVar::new(0);
        let b = TypeVar::new(1);
        let x = Name::from_raw(10);
        let y = Name::from_raw(11);

        let mut env = TypeEnv::new();
        env.bind(x, TypeScheme::mono(Type::Var(a)));
        env.bind(
            y,
            TypeScheme::new(vec![b], Type::func(Type::Var(b), Type::Var(b))),
        );

        let free = env.free_vars();
        assert!(free.contains(&a));
        assert!(!free.contains(&b));
    }
}
