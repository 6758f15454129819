//! Provide dotted-path access helpers for dynamic values.
//!
//! [`PathAccessor`] wraps one target [`Value`] and exposes:
//!
//! - [`get`] / [`owns`]: read a (possibly nested) own member.
//! - [`set`]: write a member, creating missing intermediate objects.
//! - [`call`]: invoke a function member with its owner as `this`.
//! - [`shallow_clone`]: detach a copy of the top-level container.
//! - [`methods`] / [`properties`]: enumerate callable and data members.
//! - [`type_name`]: the target's canonical type name.
//!
//! # Syntax
//!
//! A path is a non-empty string of `.`-separated segments, e.g. `c.a.a`.
//! Each segment is a member key; on an [`Array`] it must be a canonical
//! index such as `0` or `12`. See [`Path`].
//!
//! # Examples
//!
//! ```
//! use pk_reflect::access::PathAccessor;
//! use pk_reflect::value::{Function, Object, Value};
//!
//! let target = Object::new();
//! let accessor = PathAccessor::new(target);
//!
//! accessor.set("greeting.text", "hello");
//! accessor.set(
//!     "greeting.say",
//!     Function::new(|this, _| {
//!         this.as_object().and_then(|o| o.get("text")).unwrap_or_default()
//!     }),
//! );
//!
//! assert_eq!(accessor.call("greeting.say", &[]), Some(Value::from("hello")));
//! assert_eq!(accessor.properties(), ["greeting"]);
//! ```
//!
//! [`Value`]: crate::value::Value
//! [`Array`]: crate::value::Array
//! [`get`]: PathAccessor::get
//! [`owns`]: PathAccessor::owns
//! [`set`]: PathAccessor::set
//! [`call`]: PathAccessor::call
//! [`shallow_clone`]: PathAccessor::shallow_clone
//! [`methods`]: PathAccessor::methods
//! [`properties`]: PathAccessor::properties
//! [`type_name`]: PathAccessor::type_name

// -----------------------------------------------------------------------------
// Modules

mod accessor;
mod error;
mod path;

// -----------------------------------------------------------------------------
// Exports

pub use accessor::PathAccessor;
pub use error::AccessError;
pub use path::{Path, parse_index};
