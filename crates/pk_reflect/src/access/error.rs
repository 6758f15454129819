use thiserror::Error;

use crate::value::Kind;

// -----------------------------------------------------------------------------
// Error

/// Why a path operation degraded to its empty result.
///
/// Only the `try_*` methods of [`PathAccessor`] surface this;
/// the plain methods swallow it.
///
/// [`PathAccessor`]: crate::access::PathAccessor
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccessError<'a> {
    #[error("Access path is empty")]
    EmptyPath,

    #[error("Cannot access `{path}` on a {kind} target")]
    NullTarget { path: &'a str, kind: Kind },

    #[error("No own member `{segment}` while accessing `{path}`")]
    MissingMember { path: &'a str, segment: &'a str },

    #[error("Cannot access member `{segment}` of a {kind} while accessing `{path}`")]
    NotComposite {
        path: &'a str,
        segment: &'a str,
        kind: Kind,
    },

    #[error("`{segment}` is not an array index while accessing `{path}`")]
    InvalidIndex { path: &'a str, segment: &'a str },

    #[error("Index {index} is out of bounds for an array of length {len} while accessing `{path}`")]
    IndexOutOfBounds {
        path: &'a str,
        index: usize,
        len: usize,
    },

    #[error("`{path}` resolves to a {kind}, which is not callable")]
    NotCallable { path: &'a str, kind: Kind },
}

impl AccessError<'_> {
    /// Returns the path that the error occurred in, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::EmptyPath => None,
            Self::NullTarget { path, .. }
            | Self::MissingMember { path, .. }
            | Self::NotComposite { path, .. }
            | Self::InvalidIndex { path, .. }
            | Self::IndexOutOfBounds { path, .. }
            | Self::NotCallable { path, .. } => Some(*path),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::AccessError;
    use crate::value::Kind;

    #[test]
    fn display() {
        let err = AccessError::NotComposite {
            path: "a.b",
            segment: "b",
            kind: Kind::Number,
        };
        assert_eq!(
            err.to_string(),
            "Cannot access member `b` of a Number while accessing `a.b`"
        );
        assert_eq!(err.path(), Some("a.b"));
        assert_eq!(AccessError::EmptyPath.path(), None);
    }
}
