use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use crate::value::Value;

// -----------------------------------------------------------------------------
// Array

/// A shared, growable sequence of [`Value`]s.
///
/// Like [`Object`](crate::value::Object), an `Array` is a reference:
/// clones share the same elements.
///
/// Its own keys are the canonical decimal indices `"0"` to `"len - 1"`.
///
/// # Examples
///
/// ```
/// use pk_reflect::value::{Array, Value};
///
/// let array: Array = [1, 2, 3].into_iter().collect();
/// assert_eq!(array.len(), 3);
/// assert_eq!(array.get(1), Some(Value::from(2)));
/// ```
#[derive(Clone, Default)]
pub struct Array(Rc<RefCell<Vec<Value>>>);

impl Array {
    /// Creates an empty `Array`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Returns the element at `index`, if it exists.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.borrow().get(index).cloned()
    }

    /// Stores `value` at `index`, returning the previous element.
    ///
    /// `index == len` appends.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pk_reflect::value::{Array, Value};
    ///
    /// let array = Array::new();
    /// assert_eq!(array.set(0, "a"), None);
    /// assert_eq!(array.set(0, "b"), Some(Value::from("a")));
    /// assert_eq!(array.len(), 1);
    /// ```
    pub fn set(&self, index: usize, value: impl Into<Value>) -> Option<Value> {
        let mut items = self.0.borrow_mut();
        let len = items.len();
        assert!(index <= len, "index {index} out of bounds for array of length {len}");
        if index == len {
            items.push(value.into());
            None
        } else {
            Some(core::mem::replace(&mut items[index], value.into()))
        }
    }

    #[inline]
    pub fn push(&self, value: impl Into<Value>) {
        self.0.borrow_mut().push(value.into());
    }

    /// Returns a snapshot of the elements.
    #[inline]
    pub fn to_vec(&self) -> Vec<Value> {
        self.0.borrow().clone()
    }

    /// Copies every element into a new, detached `Array`.
    #[inline]
    pub fn shallow_copy(&self) -> Self {
        Self(Rc::new(RefCell::new(self.to_vec())))
    }

    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Vec<Value>> for Array {
    #[inline]
    fn from(items: Vec<Value>) -> Self {
        Self(Rc::new(RefCell::new(items)))
    }
}

impl<V: Into<Value>> FromIterator<V> for Array {
    fn from_iter<T: IntoIterator<Item = V>>(items: T) -> Self {
        Self::from(items.into_iter().map(Into::into).collect::<Vec<_>>())
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.borrow().iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Array;
    use crate::value::Value;

    #[test]
    fn set_appends_at_len() {
        let array = Array::new();
        array.set(0, 1);
        array.set(1, 2);
        array.set(0, 3);
        assert_eq!(array.to_vec(), [Value::from(3), Value::from(2)]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn set_past_len_panics() {
        Array::new().set(1, 1);
    }

    #[test]
    fn shallow_copy_detaches() {
        let array: Array = [1, 2].into_iter().collect();
        let copy = array.shallow_copy();
        copy.push(3);
        assert_eq!(array.len(), 2);
        assert_eq!(copy.len(), 3);
        assert!(!array.ptr_eq(&copy));
    }
}
