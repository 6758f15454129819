//! The dynamic value model that [`PathAccessor`] introspects.
//!
//! ## Menu
//!
//! - [`Value`]: any wrapped subject, scalar or reference.
//! - [`Kind`]: the intrinsic runtime kind and its canonical type name.
//! - [`Object`]: shared, ordered string-keyed members.
//! - [`Array`]: shared sequence, keyed by canonical indices.
//! - [`Function`]: shared callable, invoked with a `this` context.
//! - [`Date`], [`RegExp`]: immutable scalar values.
//! - [`Opaque`]: host value with a declared type name.
//!
//! Reference values (`Object`, `Array`, `Function`, `Opaque`) follow handle
//! semantics: [`Clone`] copies the handle, never the contents.
//!
//! [`PathAccessor`]: crate::access::PathAccessor

// -----------------------------------------------------------------------------
// Modules

mod array;
mod function;
mod kind;
mod object;
mod opaque;
mod scalar;

// -----------------------------------------------------------------------------
// Exports

pub use array::Array;
pub use function::{Function, NativeFn};
pub use kind::Kind;
pub use object::Object;
pub use opaque::Opaque;
pub use scalar::{Date, RegExp};

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

// -----------------------------------------------------------------------------
// Value

/// A dynamically-typed value.
///
/// `PartialEq` is strict equality (see [`strict_eq`](Value::strict_eq)),
/// so it is not reflexive for `NaN`.
///
/// # Examples
///
/// ```
/// use pk_reflect::value::{Object, Value};
///
/// let object = Object::new();
/// let a = Value::from(object.clone());
/// let b = Value::from(object);
/// assert_eq!(a, b);
///
/// // same shape, different identity
/// assert_ne!(Value::from(Object::new()), Value::from(Object::new()));
/// ```
#[derive(Clone, Default)]
pub enum Value {
    /// The "no value provided" sentinel.
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(Rc<str>),
    Date(Date),
    RegExp(RegExp),
    Array(Array),
    Object(Object),
    Function(Function),
    Opaque(Opaque),
}

impl Value {
    /// Returns the intrinsic kind, decided by the variant only.
    pub fn kind(&self) -> Kind {
        match self {
            Self::Undefined => Kind::Undefined,
            Self::Null => Kind::Null,
            Self::Bool(_) => Kind::Boolean,
            Self::Number(_) => Kind::Number,
            Self::String(_) => Kind::String,
            Self::Date(_) => Kind::Date,
            Self::RegExp(_) => Kind::RegExp,
            Self::Array(_) => Kind::Array,
            Self::Object(_) => Kind::Object,
            Self::Function(_) => Kind::Function,
            Self::Opaque(opaque) => Kind::Opaque(opaque.type_name()),
        }
    }

    /// Returns the canonical type name, e.g. `"Array"` or `"Undefined"`.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    #[inline]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for `Null` and `Undefined`.
    #[inline]
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Self::Null | Self::Undefined)
    }

    #[inline]
    pub const fn is_callable(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    /// Truthiness: `Undefined`, `Null`, `false`, `0`, `NaN` and `""` are falsy,
    /// everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::String(s) => !s.is_empty(),
            _ => true,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    #[inline]
    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Strict equality.
    ///
    /// Reference values are equal only when they are the same handle.
    /// Scalars compare by value, and `NaN` is never equal to anything.
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::RegExp(a), Self::RegExp(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a.ptr_eq(b),
            (Self::Object(a), Self::Object(b)) => a.ptr_eq(b),
            (Self::Function(a), Self::Function(b)) => a.ptr_eq(b),
            (Self::Opaque(a), Self::Opaque(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl PartialEq for Value {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.strict_eq(other)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Bool(b) => fmt::Display::fmt(b, f),
            Self::Number(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Self::Number(n) => fmt::Display::fmt(n, f),
            Self::String(s) => fmt::Debug::fmt(&**s, f),
            Self::Date(date) => write!(f, "Date({})", date.millis()),
            Self::RegExp(re) => fmt::Display::fmt(re, f),
            Self::Array(array) => fmt::Debug::fmt(array, f),
            Self::Object(object) => fmt::Debug::fmt(object, f),
            Self::Function(function) => fmt::Debug::fmt(function, f),
            Self::Opaque(opaque) => fmt::Debug::fmt(opaque, f),
        }
    }
}

// -----------------------------------------------------------------------------
// Conversions

macro_rules! impl_from {
    ($($ty:ty => |$v:ident| $expr:expr;)*) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from($v: $ty) -> Self {
                    $expr
                }
            }
        )*
    };
}

impl_from! {
    bool => |v| Value::Bool(v);
    f64 => |v| Value::Number(v);
    f32 => |v| Value::Number(v.into());
    i32 => |v| Value::Number(v.into());
    u32 => |v| Value::Number(v.into());
    &str => |v| Value::String(Rc::from(v));
    String => |v| Value::String(Rc::from(v));
    Rc<str> => |v| Value::String(v);
    Date => |v| Value::Date(v);
    RegExp => |v| Value::RegExp(v);
    Array => |v| Value::Array(v);
    Object => |v| Value::Object(v);
    Function => |v| Value::Function(v);
    Opaque => |v| Value::Opaque(v);
    Vec<Value> => |v| Value::Array(Array::from(v));
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::vec;

    use super::{Array, Date, Function, Kind, Object, Opaque, RegExp, Value};

    #[test]
    fn canonical_type_names() {
        let cases = [
            (Value::from(Array::new()), "Array"),
            (Value::from(true), "Boolean"),
            (Value::from(Date::from_millis(0.0)), "Date"),
            (Value::from(Function::new(|_, _| Value::Undefined)), "Function"),
            (Value::Null, "Null"),
            (Value::from(f64::NAN), "Number"),
            (Value::from(0), "Number"),
            (Value::from(Object::new()), "Object"),
            (Value::from(RegExp::new("a", "")), "RegExp"),
            (Value::from(""), "String"),
            (Value::Undefined, "Undefined"),
            (Value::from(Opaque::new("Error", ())), "Error"),
        ];
        for (value, name) in cases {
            assert_eq!(value.type_name(), name, "{value:?}");
        }
    }

    #[test]
    fn kind_ignores_shape() {
        let object: Object = [("0", 1), ("1", 2)].into_iter().collect();
        assert_eq!(Value::from(object).kind(), Kind::Object);
    }

    #[test]
    fn strict_equality() {
        assert_ne!(Value::from(f64::NAN), Value::from(f64::NAN));
        assert_eq!(Value::from(1), Value::from(1.0));
        assert_eq!(Value::from("a"), Value::from(alloc::string::String::from("a")));
        assert_ne!(Value::Null, Value::Undefined);
        assert_ne!(Value::from(0), Value::from(false));

        let array = Array::new();
        assert_eq!(Value::from(array.clone()), Value::from(array.clone()));
        assert_ne!(Value::from(array.clone()), Value::from(array.shallow_copy()));
    }

    #[test]
    fn truthiness() {
        let falsy = [
            Value::Undefined,
            Value::Null,
            Value::from(false),
            Value::from(0),
            Value::from(f64::NAN),
            Value::from(""),
        ];
        for value in falsy {
            assert!(!value.is_truthy(), "{value:?}");
        }
        assert!(Value::from("0").is_truthy());
        assert!(Value::from(Object::new()).is_truthy());
        assert!(Value::from(Array::new()).is_truthy());
    }

    #[test]
    fn debug_literal() {
        let object: Object = [
            ("n", Value::from(1)),
            ("s", Value::from("x")),
            ("l", Value::from(vec![Value::Null, Value::from(f64::INFINITY)])),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            format!("{:?}", Value::from(object)),
            r#"{"n": 1, "s": "x", "l": [null, Infinity]}"#
        );
    }
}
