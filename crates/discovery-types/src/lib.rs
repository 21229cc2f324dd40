//! Core type definitions for discovery sources.
//!
//! Everything a source hands back to the framework is described here: the
//! [`Item`] with its [`Attributes`], the tagged [`AttributeValue`], the
//! [`QueryMethod`] a caller asks for, and the [`Cx`] query context threaded
//! through every call.

pub mod attributes;
pub mod cx;
pub mod item;
pub mod method;
pub mod value;

pub use attributes::Attributes;
pub use cx::{Cancelled, Cx};
pub use item::{Item, validate_item, validate_items};
pub use method::{ParseQueryMethodError, QueryMethod};
pub use value::AttributeValue;
