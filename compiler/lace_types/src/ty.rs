//! Core type representation: types, schemes, and the variable supply.

use lace_ir::Name;
use rustc_hash::FxHashSet;
use std::fmt;

/// Type variable for inference.
///
/// Ids are unique within one inference session (see [`VarSupply`]), so
/// independent inference steps never capture each other's variables.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(transparent)]
pub struct TypeVar(u32);

impl TypeVar {
    /// Create a type variable with the given id.
    #[inline]
    pub const fn new(id: u32) -> Self {
        TypeVar(id)
    }

    /// Get the raw id.
    #[inline]
    pub const fn id(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TypeVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

/// Session-scoped supply of fresh type variables.
///
/// Each inference session owns its own supply; there is no process-wide
/// counter, so concurrent or repeated runs produce the same ids and never
/// contaminate each other.
#[derive(Clone, Debug, Default)]
pub struct VarSupply {
    next: u32,
}

impl VarSupply {
    /// Create a supply starting at id 0.
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Return a strictly increasing, previously unused variable.
    pub fn fresh(&mut self) -> TypeVar {
        let var = TypeVar(self.next);
        self.next += 1;
        var
    }
}

/// A Lace type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Type {
    /// Base type, compared by name: `Int`, `Bool`, `Str`.
    Base(Name),

    /// Inference variable.
    Var(TypeVar),

    /// Single-argument function type: `argument -> result`.
    Func(Box<Type>, Box<Type>),
}

impl Type {
    /// The `Int` base type.
    pub const INT: Type = Type::Base(Name::INT);

    /// The `Bool` base type.
    pub const BOOL: Type = Type::Base(Name::BOOL);

    /// The `Str` base type.
    pub const STR: Type = Type::Base(Name::STR);

    /// Build a function type.
    pub fn func(arg: Type, result: Type) -> Type {
        Type::Func(Box::new(arg), Box::new(result))
    }

    /// Check if this is a type variable.
    pub fn is_var(&self) -> bool {
        matches!(self, Type::Var(_))
    }

    /// Check if `var` occurs free in this type.
    ///
    /// Cheaper than materializing the free-variable set when only one
    /// variable is of interest (the unifier's occurs check).
    pub fn occurs(&self, var: TypeVar) -> bool {
        match self {
            Type::Base(_) => false,
            Type::Var(v) => *v == var,
            Type::Func(arg, result) => arg.occurs(var) || result.occurs(var),
        }
    }

    /// Collect the free type variables.
    pub fn free_vars(&self) -> FxHashSet<TypeVar> {
        let mut vars = FxHashSet::default();
        self.collect_free_vars(&mut vars);
        vars
    }

    fn collect_free_vars(&self, vars: &mut FxHashSet<TypeVar>) {
        match self {
            Type::Base(_) => {}
            Type::Var(v) => {
                vars.insert(*v);
            }
            Type::Func(arg, result) => {
                arg.collect_free_vars(vars);
                result.collect_free_vars(vars);
            }
        }
    }
}

/// A universally quantified type: `forall vars. body`.
///
/// Bound ids that do not occur in the body are vacuous but harmless.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeScheme {
    /// Quantified variables, sorted and deduped.
    vars: Vec<TypeVar>,
    /// The quantified type.
    body: Type,
}

impl TypeScheme {
    /// Quantify `body` over `vars`.
    ///
    /// The variable list is sorted and deduped on construction so scheme
    /// shapes are deterministic regardless of collection order.
    pub fn new(mut vars: Vec<TypeVar>, body: Type) -> Self {
        vars.sort_unstable();
        vars.dedup();
        Self { vars, body }
    }

    /// A monomorphic scheme quantifying over nothing.
    pub fn mono(body: Type) -> Self {
        Self {
            vars: Vec::new(),
            body,
        }
    }

    /// The quantified variables.
    pub fn vars(&self) -> &[TypeVar] {
        &self.vars
    }

    /// The quantified type.
    pub fn body(&self) -> &Type {
        &self.body
    }

    /// Check whether the scheme quantifies over any variables.
    pub fn is_mono(&self) -> bool {
        self.vars.is_empty()
    }

    /// Free variables: free in the body minus the bound set.
    pub fn free_vars(&self) -> FxHashSet<TypeVar> {
        let mut vars = self.body.free_vars();
        for v in &self.vars {
            vars.remove(v);
        }
        vars
    }
}
