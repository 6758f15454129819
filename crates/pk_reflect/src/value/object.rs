use alloc::borrow::Cow;
use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use pk_utils::hash::{FixedHashState, HashMap};

use crate::value::Value;

// -----------------------------------------------------------------------------
// Object

#[derive(Clone, Default)]
struct ObjectData {
    values: Vec<Value>,
    names: Vec<Cow<'static, str>>,
    indices: HashMap<Cow<'static, str>, usize>,
}

/// A shared, ordered mapping from string keys to [`Value`]s.
///
/// `Object` is a reference: cloning it yields another handle to the
/// same members, and a write through any handle is visible through all of
/// them. Use [`shallow_copy`] to detach a new container.
///
/// Members enumerate in insertion order. Overwriting an existing key keeps
/// its position.
///
/// # Examples
///
/// ```
/// use pk_reflect::value::{Object, Value};
///
/// let object = Object::new();
/// let alias = object.clone();
///
/// alias.insert("a", 1);
/// assert_eq!(object.get("a"), Some(Value::from(1)));
/// assert!(object.ptr_eq(&alias));
/// ```
///
/// [`shallow_copy`]: Object::shallow_copy
#[derive(Clone, Default)]
pub struct Object(Rc<RefCell<ObjectData>>);

impl Object {
    /// Creates an empty `Object`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty `Object` with room for at least `capacity` members.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Rc::new(RefCell::new(ObjectData {
            values: Vec::with_capacity(capacity),
            names: Vec::with_capacity(capacity),
            indices: HashMap::with_capacity_and_hasher(capacity, FixedHashState),
        })))
    }

    /// Returns the number of own members.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.borrow().values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `key` is an own member, even if its value is `Undefined`.
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.borrow().indices.contains_key(key)
    }

    /// Returns the member stored under `key`.
    ///
    /// Reference values are returned as new handles to the same data.
    pub fn get(&self, key: &str) -> Option<Value> {
        let data = self.0.borrow();
        let index = *data.indices.get(key)?;
        Some(data.values[index].clone())
    }

    /// Stores `value` under `key`, returning the previous member if any.
    ///
    /// A new key is appended to the end of the enumeration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use pk_reflect::value::{Object, Value};
    ///
    /// let object = Object::new();
    /// assert!(object.insert("a", 1).is_none());
    /// assert_eq!(object.insert("a", 2), Some(Value::from(1)));
    /// ```
    pub fn insert(
        &self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Value>,
    ) -> Option<Value> {
        let key: Cow<'static, str> = key.into();
        let value: Value = value.into();
        let mut data = self.0.borrow_mut();
        if let Some(&index) = data.indices.get(&key) {
            Some(core::mem::replace(&mut data.values[index], value))
        } else {
            let index = data.values.len();
            data.values.push(value);
            data.indices.insert(key.clone(), index);
            data.names.push(key);
            None
        }
    }

    /// Removes `key`, keeping the relative order of the remaining members.
    pub fn remove(&self, key: &str) -> Option<Value> {
        let mut data = self.0.borrow_mut();
        let index = data.indices.remove(key)?;
        data.names.remove(index);
        for slot in data.indices.values_mut() {
            if *slot > index {
                *slot -= 1;
            }
        }
        Some(data.values.remove(index))
    }

    /// Returns the own keys in enumeration order.
    pub fn keys(&self) -> Vec<String> {
        self.0.borrow().names.iter().map(|name| name.to_string()).collect()
    }

    /// Returns the own members in enumeration order.
    pub fn entries(&self) -> Vec<(String, Value)> {
        let data = self.0.borrow();
        data.names
            .iter()
            .zip(&data.values)
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    /// Copies every own member into a new, detached `Object`.
    ///
    /// Top-level writes on the copy do not reach `self`, but nested
    /// reference values are shared.
    ///
    /// # Examples
    ///
    /// ```
    /// use pk_reflect::value::{Object, Value};
    ///
    /// let inner = Object::new();
    /// let object: Object = [("a", Value::from(1)), ("c", Value::from(inner.clone()))]
    ///     .into_iter()
    ///     .collect();
    ///
    /// let copy = object.shallow_copy();
    /// copy.insert("a", 2);
    /// assert_eq!(object.get("a"), Some(Value::from(1)));
    ///
    /// copy.get("c").unwrap().as_object().unwrap().insert("x", true);
    /// assert!(inner.contains_key("x"));
    /// ```
    pub fn shallow_copy(&self) -> Self {
        Self(Rc::new(RefCell::new(self.0.borrow().clone())))
    }

    /// Returns `true` if both handles refer to the same container.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<K, V> FromIterator<(K, V)> for Object
where
    K: Into<Cow<'static, str>>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(members: T) -> Self {
        let object = Object::new();
        for (key, value) in members {
            object.insert(key, value);
        }
        object
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0.borrow();
        f.debug_map()
            .entries(data.names.iter().zip(&data.values))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::Object;
    use crate::value::Value;

    #[test]
    fn insertion_order() {
        let object = Object::new();
        object.insert("b", 1);
        object.insert("a", 2);
        object.insert("c", 3);
        object.insert("a", 4);
        assert_eq!(object.keys(), vec!["b", "a", "c"]);
        assert_eq!(object.get("a"), Some(Value::from(4)));
    }

    #[test]
    fn remove_keeps_order() {
        let object: Object = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
        assert_eq!(object.remove("a"), Some(Value::from(1)));
        assert_eq!(object.remove("a"), None);
        assert_eq!(object.keys(), vec!["b", "c"]);
        assert_eq!(object.get("c"), Some(Value::from(3)));

        object.insert("a", 5);
        assert_eq!(object.keys(), vec!["b", "c", "a"]);
        assert_eq!(object.get("b"), Some(Value::from(2)));
    }

    #[test]
    fn undefined_member_is_still_a_key() {
        let object = Object::new();
        object.insert("u", Value::Undefined);
        assert!(object.contains_key("u"));
        assert_eq!(object.get("u"), Some(Value::Undefined));
        assert_eq!(object.len(), 1);
    }

    #[test]
    fn shallow_copy_detaches() {
        let object: Object = [("a", "a")].into_iter().collect();
        let copy = object.shallow_copy();
        assert!(!copy.ptr_eq(&object));

        copy.insert("a", "b");
        copy.insert("z", 0);
        assert_eq!(object.get("a"), Some(Value::from("a")));
        assert!(!object.contains_key("z"));
        assert_eq!(copy.get("a"), Some(Value::from("b")));
    }
}
