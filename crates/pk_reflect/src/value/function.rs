use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::rc::Rc;
use core::fmt;

use crate::value::Value;

// -----------------------------------------------------------------------------
// Function

/// Signature of a native callable: `(this, args) -> result`.
pub type NativeFn = dyn Fn(&Value, &[Value]) -> Value;

struct FunctionData {
    name: Cow<'static, str>,
    body: Box<NativeFn>,
}

/// A shared callable member.
///
/// The first argument of the body is the invocation context (`this`),
/// usually the container that owns the function.
///
/// # Examples
///
/// ```
/// use pk_reflect::value::{Function, Value};
///
/// let add = Function::named("add", |_this, args| {
///     let x = args.first().and_then(Value::as_number).unwrap_or(f64::NAN);
///     let y = args.get(1).and_then(Value::as_number).unwrap_or(f64::NAN);
///     Value::from(x + y)
/// });
///
/// assert_eq!(add.name(), "add");
/// let args = [Value::from(1), Value::from(2)];
/// assert_eq!(add.invoke(&Value::Undefined, &args), Value::from(3));
/// ```
#[derive(Clone)]
pub struct Function(Rc<FunctionData>);

impl Function {
    /// Creates an anonymous function.
    pub fn new<F>(body: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Value + 'static,
    {
        Self::named("", body)
    }

    /// Creates a function with a display name.
    pub fn named<F>(name: impl Into<Cow<'static, str>>, body: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Value + 'static,
    {
        Self(Rc::new(FunctionData {
            name: name.into(),
            body: Box::new(body),
        }))
    }

    /// Returns the display name, empty for anonymous functions.
    #[inline]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Calls the function with `this` as its context.
    #[inline]
    pub fn invoke(&self, this: &Value, args: &[Value]) -> Value {
        (self.0.body)(this, args)
    }

    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            "" => f.write_str("[Function (anonymous)]"),
            name => write!(f, "[Function: {name}]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::Function;
    use crate::value::Value;

    #[test]
    fn receives_this() {
        let get_this = Function::new(|this, _| this.clone());
        let this = Value::from("ctx");
        assert_eq!(get_this.invoke(&this, &[]), this);
    }

    #[test]
    fn identity() {
        let a = Function::new(|_, _| Value::Undefined);
        let b = Function::new(|_, _| Value::Undefined);
        assert!(a.ptr_eq(&a.clone()));
        assert!(!a.ptr_eq(&b));
    }

    #[test]
    fn debug_names() {
        assert_eq!(
            format!("{:?}", Function::new(|_, _| Value::Null)),
            "[Function (anonymous)]"
        );
        assert_eq!(
            format!("{:?}", Function::named("cool", |_, _| Value::Null)),
            "[Function: cool]"
        );
    }
}
