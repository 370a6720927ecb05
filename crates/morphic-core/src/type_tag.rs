//! Runtime type identity for accessors and constructor parameters.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Exact runtime type of a mapped value.
///
/// Two tags are equal only when their `TypeId`s are equal. There is no
/// subtyping or coercion: `u32` and `u64`, or `String` and `&'static str`,
/// never match each other.
#[derive(Clone, Copy)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    /// Tag for `T`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    #[inline]
    pub fn id(self) -> TypeId {
        self.id
    }

    /// Fully qualified type name as reported by the compiler.
    #[inline]
    pub fn name(self) -> &'static str {
        self.name
    }

    /// Whether this tag describes `T`.
    #[inline]
    pub fn is<T: ?Sized + 'static>(self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// Type name with module paths stripped from every segment.
    ///
    /// `core::option::Option<alloc::string::String>` becomes `Option<String>`.
    pub fn short_name(self) -> String {
        fn last_segment(path: &str) -> &str {
            path.rsplit("::").next().unwrap_or(path)
        }

        let mut out = String::with_capacity(self.name.len());
        let mut path = String::new();
        for c in self.name.chars() {
            if c.is_alphanumeric() || c == '_' || c == ':' {
                path.push(c);
                continue;
            }
            out.push_str(last_segment(&path));
            path.clear();
            out.push(c);
        }
        out.push_str(last_segment(&path));
        out
    }
}

impl PartialEq for TypeTag {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

impl Hash for TypeTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeTag({})", self.name)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_name())
    }
}
