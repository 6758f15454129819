//! Provide the path accessor over a wrapped value.

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;

use crate::Members;
use crate::access::{AccessError, Path, parse_index};
use crate::value::{Kind, Object, Value};

// -----------------------------------------------------------------------------
// PathAccessor

/// A thin view over one target [`Value`], exposing dotted-path access,
/// member enumeration, invocation and shallow cloning.
///
/// The accessor holds a handle to the target, never a copy: writes through
/// the accessor are visible through every other handle to the same target.
/// The target's [`Kind`] is computed once, at construction.
///
/// None of the plain methods fail. A `Null`/`Undefined` target, an empty path,
/// or a path that leaves the member tree all degrade to the method's empty
/// result (`None`, `false`, an empty list, or no effect). The `try_*`
/// methods report the reason as an [`AccessError`] instead.
///
/// A member that holds `Undefined` is treated exactly like a missing member.
///
/// # Examples
///
/// ```
/// use pk_reflect::access::PathAccessor;
/// use pk_reflect::value::{Object, Value};
///
/// let target = Object::new();
/// let accessor = PathAccessor::new(target.clone());
///
/// accessor.set("a.b.c", 1);
/// assert_eq!(accessor.get("a.b.c"), Some(Value::from(1)));
/// assert!(accessor.owns("a.b"));
/// assert!(!accessor.owns("a.b.z"));
///
/// // the wrapped target was mutated in place
/// assert!(target.contains_key("a"));
/// assert_eq!(accessor.type_name(), "Object");
/// ```
#[derive(Debug, Clone)]
pub struct PathAccessor {
    target: Value,
    kind: Kind,
}

impl PathAccessor {
    /// Wraps `target`.
    pub fn new(target: impl Into<Value>) -> Self {
        let target = target.into();
        let kind = target.kind();
        log::trace!("wrapping a {kind} target");
        Self { target, kind }
    }

    /// Returns the wrapped target.
    #[inline]
    pub fn target(&self) -> &Value {
        &self.target
    }

    #[inline]
    pub fn into_inner(self) -> Value {
        self.target
    }

    /// Returns the target's kind, fixed at construction.
    #[inline]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the target's canonical type name, fixed at construction.
    ///
    /// # Examples
    ///
    /// ```
    /// use pk_reflect::access::PathAccessor;
    /// use pk_reflect::value::{Array, RegExp, Value};
    ///
    /// assert_eq!(PathAccessor::new(Array::new()).type_name(), "Array");
    /// assert_eq!(PathAccessor::new(RegExp::new("abc", "")).type_name(), "RegExp");
    /// assert_eq!(PathAccessor::new(f64::NAN).type_name(), "Number");
    /// assert_eq!(PathAccessor::new(Value::Undefined).type_name(), "Undefined");
    /// ```
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.kind.name()
    }

    // -------------------------------------------------------------------------
    // Path resolution

    /// Walks `path` and returns `(owner, member)`, where `owner` directly
    /// owns the final segment.
    fn resolve<'a>(&self, path: &'a str) -> Result<(Value, Value), AccessError<'a>> {
        let parsed = self.checked_path(path)?;
        let (parents, last) = parsed.split_last();

        let mut owner = self.target.clone();
        for segment in parents {
            owner = descend(&owner, path, segment)?;
        }
        let member = descend(&owner, path, last)?;
        Ok((owner, member))
    }

    fn checked_path<'a>(&self, path: &'a str) -> Result<Path<'a>, AccessError<'a>> {
        let parsed = Path::parse(path).ok_or(AccessError::EmptyPath)?;
        if self.kind.is_nullish() {
            return Err(AccessError::NullTarget {
                path,
                kind: self.kind,
            });
        }
        Ok(parsed)
    }

    /// Returns the member at `path`, or the reason it is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use pk_reflect::access::{AccessError, PathAccessor};
    /// use pk_reflect::value::{Object, Value};
    ///
    /// let accessor = PathAccessor::new(Object::from_iter([("a", 1)]));
    ///
    /// assert_eq!(accessor.try_get("a"), Ok(Value::from(1)));
    /// assert_eq!(
    ///     accessor.try_get("z"),
    ///     Err(AccessError::MissingMember { path: "z", segment: "z" }),
    /// );
    /// ```
    #[inline]
    pub fn try_get<'a>(&self, path: &'a str) -> Result<Value, AccessError<'a>> {
        self.resolve(path).map(|(_, member)| member)
    }

    /// Returns the member at `path`.
    ///
    /// Reference values come back as handles to the same data, so
    /// a returned `Object` can be mutated in place.
    #[inline]
    pub fn get(&self, path: &str) -> Option<Value> {
        self.try_get(path).ok()
    }

    /// Returns `true` if `path` resolves to a member that is not `Undefined`.
    #[inline]
    pub fn owns(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    // -------------------------------------------------------------------------
    // Assignment

    /// Assigns `value` at `path`, creating empty objects for every missing
    /// intermediate segment.
    ///
    /// Intermediate objects created before a failing segment are kept.
    pub fn try_set<'a>(
        &self,
        path: &'a str,
        value: impl Into<Value>,
    ) -> Result<(), AccessError<'a>> {
        let parsed = self.checked_path(path)?;
        let (parents, last) = parsed.split_last();

        let mut container = self.target.clone();
        for segment in parents {
            container = match container.own_member(segment) {
                Some(next) => next,
                None => {
                    let created = Value::Object(Object::new());
                    assign(&container, path, segment, created.clone())?;
                    created
                }
            };
        }
        assign(&container, path, last, value.into())
    }

    /// Assigns `value` at `path`; see [`try_set`](Self::try_set).
    ///
    /// # Examples
    ///
    /// ```
    /// use pk_reflect::access::PathAccessor;
    /// use pk_reflect::value::{Object, Value};
    ///
    /// let accessor = PathAccessor::new(Object::new());
    /// accessor.set("d.a.b", "deep");
    /// assert_eq!(accessor.get("d.a.b"), Some(Value::from("deep")));
    ///
    /// // no effect on a null target
    /// let null = PathAccessor::new(Value::Null);
    /// null.set("hello", "world");
    /// assert!(!null.owns("hello"));
    /// ```
    pub fn set(&self, path: &str, value: impl Into<Value>) {
        if let Err(err) = self.try_set(path, value) {
            log::debug!("set skipped: {err}");
        }
    }

    // -------------------------------------------------------------------------
    // Invocation

    /// Invokes the function at `name` with `args`.
    ///
    /// The function receives the direct owner of its final segment as `this`;
    /// for a single-segment name that is the target itself.
    pub fn try_call<'a>(&self, name: &'a str, args: &[Value]) -> Result<Value, AccessError<'a>> {
        let (owner, member) = self.resolve(name)?;
        match member {
            Value::Function(function) => Ok(function.invoke(&owner, args)),
            other => Err(AccessError::NotCallable {
                path: name,
                kind: other.kind(),
            }),
        }
    }

    /// Invokes the function at `name` with `args`, returning its result
    /// unchanged.
    ///
    /// Returns `None`, without invoking anything, when `name` does not
    /// resolve to a function.
    ///
    /// # Examples
    ///
    /// ```
    /// use pk_reflect::access::PathAccessor;
    /// use pk_reflect::value::{Function, Object, Value};
    ///
    /// let add = Function::new(|_, args| {
    ///     let sum = args.iter().filter_map(Value::as_number).sum::<f64>();
    ///     Value::from(sum)
    /// });
    /// let accessor = PathAccessor::new(Object::from_iter([("b", add)]));
    ///
    /// let args = [Value::from(1), Value::from(2)];
    /// assert_eq!(accessor.call("b", &args), Some(Value::from(3)));
    /// assert_eq!(accessor.call("a", &[]), None);
    /// ```
    pub fn call(&self, name: &str, args: &[Value]) -> Option<Value> {
        match self.try_call(name, args) {
            Ok(result) => Some(result),
            Err(err) => {
                log::debug!("call skipped: {err}");
                None
            }
        }
    }

    // -------------------------------------------------------------------------
    // Cloning

    /// Copies the target's own members into a new, detached container.
    ///
    /// Reassigning a top-level member of the copy leaves the target
    /// untouched; nested reference values stay shared. A `Null` or
    /// `Undefined` target yields `Null`. Scalars are immutable and come
    /// back as themselves; functions and opaque values come back as the
    /// same handle.
    ///
    /// # Examples
    ///
    /// ```
    /// use pk_reflect::access::PathAccessor;
    /// use pk_reflect::value::{Object, Value};
    ///
    /// let target = Object::from_iter([("a", "a")]);
    /// let copy = PathAccessor::new(PathAccessor::new(target.clone()).shallow_clone());
    ///
    /// copy.set("a", "b");
    /// assert_eq!(target.get("a"), Some(Value::from("a")));
    /// assert_eq!(copy.get("a"), Some(Value::from("b")));
    ///
    /// assert_eq!(PathAccessor::new(Value::Null).shallow_clone(), Value::Null);
    /// ```
    pub fn shallow_clone(&self) -> Value {
        match &self.target {
            Value::Undefined | Value::Null => Value::Null,
            Value::Object(object) => Value::Object(object.shallow_copy()),
            Value::Array(array) => Value::Array(array.shallow_copy()),
            other => other.clone(),
        }
    }

    // -------------------------------------------------------------------------
    // Enumeration

    /// Returns the own member names whose value is callable, in enumeration order.
    #[inline]
    pub fn methods(&self) -> Vec<String> {
        self.keys_where(Value::is_callable)
    }

    /// Returns the own member names whose value is not callable, in
    /// enumeration order. Members holding `Undefined` are listed here.
    #[inline]
    pub fn properties(&self) -> Vec<String> {
        self.keys_where(|value| !value.is_callable())
    }

    fn keys_where(&self, keep: impl Fn(&Value) -> bool) -> Vec<String> {
        self.target
            .own_keys()
            .into_iter()
            .filter(|key| self.target.raw_member(key).is_some_and(|value| keep(&value)))
            .collect()
    }
}

impl From<Value> for PathAccessor {
    #[inline]
    fn from(target: Value) -> Self {
        Self::new(target)
    }
}

// -----------------------------------------------------------------------------
// Single layer access

/// Steps from `container` into its own member `segment`.
fn descend<'a>(
    container: &Value,
    path: &'a str,
    segment: &'a str,
) -> Result<Value, AccessError<'a>> {
    container.own_member(segment).ok_or_else(|| {
        let kind = container.kind();
        if kind.is_composite() {
            AccessError::MissingMember { path, segment }
        } else {
            AccessError::NotComposite {
                path,
                segment,
                kind,
            }
        }
    })
}

/// Stores `value` as the own member `segment` of `container`.
fn assign<'a>(
    container: &Value,
    path: &'a str,
    segment: &'a str,
    value: Value,
) -> Result<(), AccessError<'a>> {
    match container {
        Value::Object(object) => {
            object.insert(segment.to_owned(), value);
            Ok(())
        }
        Value::Array(array) => {
            let index = parse_index(segment).ok_or(AccessError::InvalidIndex { path, segment })?;
            let len = array.len();
            if index > len {
                return Err(AccessError::IndexOutOfBounds { path, index, len });
            }
            array.set(index, value);
            Ok(())
        }
        other => Err(AccessError::NotComposite {
            path,
            segment,
            kind: other.kind(),
        }),
    }
}

// -----------------------------------------------------------------------------
// Tests
