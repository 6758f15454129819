use core::fmt;

// -----------------------------------------------------------------------------
// Kind

/// The intrinsic runtime kind of a [`Value`], named by its canonical type name.
///
/// The kind is decided by the value's variant, never by its shape:
/// an [`Object`] holding only numeric keys is still an `Object`,
/// and a `NaN` is still a `Number`.
///
/// [`Opaque`](Kind::Opaque) carries the name declared by the host value,
/// which extends the closed set of built-in names.
///
/// # Examples
///
/// ```
/// use pk_reflect::value::{Kind, Value};
///
/// assert_eq!(Value::from(f64::NAN).kind(), Kind::Number);
/// assert_eq!(Kind::Boolean.name(), "Boolean");
/// ```
///
/// [`Value`]: crate::value::Value
/// [`Object`]: crate::value::Object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Array,
    Boolean,
    Date,
    Function,
    Null,
    Number,
    Object,
    RegExp,
    String,
    Undefined,
    Opaque(&'static str),
}

impl Kind {
    /// Returns the canonical type name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Array => "Array",
            Self::Boolean => "Boolean",
            Self::Date => "Date",
            Self::Function => "Function",
            Self::Null => "Null",
            Self::Number => "Number",
            Self::Object => "Object",
            Self::RegExp => "RegExp",
            Self::String => "String",
            Self::Undefined => "Undefined",
            Self::Opaque(name) => *name,
        }
    }

    /// Returns `true` for `Null` and `Undefined`.
    #[inline]
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Self::Null | Self::Undefined)
    }

    /// Returns `true` for kinds that own members, `Object` and `Array`.
    #[inline]
    pub const fn is_composite(&self) -> bool {
        matches!(self, Self::Object | Self::Array)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::Kind;

    #[test]
    fn display_pads() {
        assert_eq!(format!("{}", Kind::RegExp), "RegExp");
        assert_eq!(format!("{:>8}", Kind::Null), "    Null");
        assert_eq!(format!("{}", Kind::Opaque("Error")), "Error");
    }

    #[test]
    fn classification() {
        assert!(Kind::Null.is_nullish());
        assert!(Kind::Undefined.is_nullish());
        assert!(!Kind::Number.is_nullish());
        assert!(Kind::Array.is_composite());
        assert!(!Kind::Function.is_composite());
    }
}
