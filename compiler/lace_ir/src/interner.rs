//! String interner for identifier storage.
//!
//! Provides O(1) interning and lookup. Interned strings are leaked to get
//! a `'static` lifetime; an interner lives for the whole session, so the
//! leak is bounded by the set of distinct identifiers.

use crate::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Storage behind the lock.
struct InternerInner {
    /// Map from string content to index.
    map: FxHashMap<&'static str, u32>,
    /// Storage for string contents, indexed by `Name::raw()`.
    strings: Vec<&'static str>,
}

/// String interner.
///
/// # Thread Safety
///
/// Uses an `RwLock` for concurrent access: lookups and hits on
/// already-interned strings take the read lock only.
pub struct StringInterner {
    inner: RwLock<InternerInner>,
}

impl StringInterner {
    /// Create a new interner with the base type names pre-interned.
    ///
    /// The pre-interned strings occupy fixed indices backing the `Name`
    /// constants: `""`, `"Int"`, `"Bool"`, `"Str"`.
    pub fn new() -> Self {
        let mut inner = InternerInner {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(64),
        };
        for s in ["", "Int", "Bool", "Str"] {
            let idx = u32::try_from(inner.strings.len())
                .unwrap_or_else(|_| panic!("interner exceeded u32 capacity"));
            inner.strings.push(s);
            inner.map.insert(s, idx);
        }
        Self {
            inner: RwLock::new(inner),
        }
    }

    /// Intern a string, returning its Name.
    ///
    /// Returns the existing Name if the string was interned before.
    ///
    /// # Panics
    /// Panics if the interner exceeds `u32` capacity.
    pub fn intern(&self, s: &str) -> Name {
        // Fast path: already interned
        {
            let guard = self.inner.read();
            if let Some(&idx) = guard.map.get(s) {
                return Name::from_raw(idx);
            }
        }

        let mut guard = self.inner.write();

        // Double-check after acquiring the write lock
        if let Some(&idx) = guard.map.get(s) {
            return Name::from_raw(idx);
        }

        // Leak the string to get 'static lifetime
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let idx = u32::try_from(guard.strings.len())
            .unwrap_or_else(|_| panic!("interner exceeded u32 capacity"));
        guard.strings.push(leaked);
        guard.map.insert(leaked, idx);
        Name::from_raw(idx)
    }

    /// Look up the string for a Name.
    ///
    /// # Panics
    /// Panics if the Name was produced by a different interner and its
    /// index is out of range here.
    pub fn lookup(&self, name: Name) -> &'static str {
        let guard = self.inner.read();
        guard.strings[name.raw() as usize]
    }

    /// Get the number of interned strings.
    pub fn len(&self) -> usize {
        self.inner.read().strings.len()
    }

    /// Check if the interner holds only the pre-interned names.
    pub fn is_empty(&self) -> bool {
        self.len() <= 4
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
