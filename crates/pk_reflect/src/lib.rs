#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod members;

pub mod access;
pub mod value;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use access::PathAccessor;
pub use members::Members;
pub use value::{Kind, Value};
