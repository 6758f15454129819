use alloc::boxed::Box;
use alloc::rc::Rc;
use core::any::Any;
use core::fmt;

struct OpaqueData {
    type_name: &'static str,
    payload: Box<dyn Any>,
}

/// A host value the model does not look into.
///
/// It owns no members; its kind is reported under the declared `type_name`,
/// so hosts can extend the built-in set of type names (`"Error"`, `"Map"`, ...).
///
/// # Examples
///
/// ```
/// use pk_reflect::value::{Kind, Opaque, Value};
///
/// let value = Value::from(Opaque::new("Error", "boom"));
/// assert_eq!(value.kind(), Kind::Opaque("Error"));
/// assert_eq!(value.type_name(), "Error");
/// ```
#[derive(Clone)]
pub struct Opaque(Rc<OpaqueData>);

impl Opaque {
    pub fn new<T: Any>(type_name: &'static str, payload: T) -> Self {
        Self(Rc::new(OpaqueData {
            type_name,
            payload: Box::new(payload),
        }))
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.0.type_name
    }

    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.payload.downcast_ref()
    }

    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::Opaque;

    #[test]
    fn downcast() {
        let opaque = Opaque::new("Error", 42_u32);
        assert_eq!(opaque.downcast_ref::<u32>(), Some(&42));
        assert_eq!(opaque.downcast_ref::<i32>(), None);
        assert!(opaque.ptr_eq(&opaque.clone()));
    }
}
