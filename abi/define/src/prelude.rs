//! Convenient re-exports for working with ABI descriptions.
//!
//! ## Examples
//!
//! ```
//! use abi_define::prelude::*;
//!
//! let entry = Entry::new(EntryKind::Event, "Transfer")
//!     .with_input(Parameter::new("to", "address"));
//!
//! assert_eq!(entry.inputs.len(), 1);
//! ```

pub use crate::description::{Description, DroppedEntry};
pub use crate::error::DefineError;
pub use crate::types::{Entry, EntryKind, Parameter};
