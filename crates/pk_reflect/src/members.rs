use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::access::parse_index;
use crate::value::{Array, Kind, Object, Value};

// -----------------------------------------------------------------------------
// Members

/// The introspection capability the path operations are written against.
///
/// Only **own** members are visible: keys stored directly on a container.
/// Scalars, `Null`, `Undefined`, functions and opaque values own nothing.
///
/// # Examples
///
/// ```
/// use pk_reflect::Members;
/// use pk_reflect::value::{Object, Value};
///
/// let object: Object = [("a", Value::from(1)), ("u", Value::Undefined)]
///     .into_iter()
///     .collect();
///
/// assert_eq!(object.own_keys(), ["a", "u"]);
/// assert!(object.is_own("u"));
/// assert_eq!(object.own_member("u"), None);
/// assert_eq!(object.raw_member("u"), Some(Value::Undefined));
/// ```
pub trait Members {
    /// Returns the own enumerable keys, in enumeration order.
    fn own_keys(&self) -> Vec<String>;

    /// Returns the own member stored under `key`, `Undefined` included.
    fn raw_member(&self, key: &str) -> Option<Value>;

    /// Returns the intrinsic kind.
    fn kind(&self) -> Kind;

    /// Returns `true` if `key` is stored directly on `self`.
    #[inline]
    fn is_own(&self, key: &str) -> bool {
        self.raw_member(key).is_some()
    }

    /// Returns the own member stored under `key`.
    ///
    /// A member holding `Undefined` is reported as missing.
    #[inline]
    fn own_member(&self, key: &str) -> Option<Value> {
        self.raw_member(key).filter(|value| !value.is_undefined())
    }
}

impl Members for Object {
    #[inline]
    fn own_keys(&self) -> Vec<String> {
        self.keys()
    }

    #[inline]
    fn raw_member(&self, key: &str) -> Option<Value> {
        self.get(key)
    }

    #[inline]
    fn kind(&self) -> Kind {
        Kind::Object
    }

    #[inline]
    fn is_own(&self, key: &str) -> bool {
        self.contains_key(key)
    }
}

impl Members for Array {
    fn own_keys(&self) -> Vec<String> {
        (0..self.len()).map(|index| index.to_string()).collect()
    }

    fn raw_member(&self, key: &str) -> Option<Value> {
        self.get(parse_index(key)?)
    }

    #[inline]
    fn kind(&self) -> Kind {
        Kind::Array
    }
}

impl Members for Value {
    fn own_keys(&self) -> Vec<String> {
        match self {
            Self::Object(object) => object.own_keys(),
            Self::Array(array) => array.own_keys(),
            _ => Vec::new(),
        }
    }

    fn raw_member(&self, key: &str) -> Option<Value> {
        match self {
            Self::Object(object) => object.raw_member(key),
            Self::Array(array) => array.raw_member(key),
            _ => None,
        }
    }

    #[inline]
    fn kind(&self) -> Kind {
        Value::kind(self)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::Members;
    use crate::value::{Array, Function, Value};

    #[test]
    fn array_keys_are_indices() {
        let array: Array = ["a", "b"].into_iter().collect();
        assert_eq!(array.own_keys(), vec!["0", "1"]);
        assert_eq!(array.own_member("1"), Some(Value::from("b")));
        assert!(array.is_own("0"));
        assert!(!array.is_own("2"));
        assert!(!array.is_own("01"));
        assert!(!array.is_own("length"));
    }

    #[test]
    fn scalars_own_nothing() {
        let values = [
            Value::from(0),
            Value::from("abc"),
            Value::Null,
            Value::Undefined,
            Value::from(Function::new(|_, _| Value::Null)),
        ];
        for value in values {
            assert_eq!(value.own_keys(), Vec::<alloc::string::String>::new());
            assert!(!value.is_own("0"), "{value:?}");
            assert_eq!(value.own_member("length"), None);
        }
    }

    #[test]
    fn undefined_element() {
        let array = Array::from(vec![Value::Undefined]);
        assert!(array.is_own("0"));
        assert_eq!(array.own_member("0"), None);
    }
}
