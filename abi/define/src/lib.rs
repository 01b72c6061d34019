//! ABI Definition Library
//!
//! This crate provides the typed model of a contract ABI description. The
//! model is consumed by `abi-gen` to generate typed client bindings.
//!
//! ## Core Types
//!
//! - [`Description`] - A parsed ABI with its name, address, and categorized entries
//! - [`Entry`] - A single constructor, function, or event
//! - [`EntryKind`] - The recognized entry kinds
//! - [`Parameter`] - A named, typed input or output value
//! - [`DroppedEntry`] - An element whose kind was not recognized
//! - [`DefineError`] - Errors raised while parsing
//!
//! ## Examples
//!
//! ```
//! use abi_define::{Description, EntryKind};
//!
//! let abi = r#"[
//!     {"type":"function","name":"Balance","inputs":[{"name":"who","type":"address"}],"outputs":[{"type":"uint256"}]}
//! ]"#;
//!
//! let description = Description::from_json_str("Token", "0x1234", abi).unwrap();
//!
//! assert_eq!(description.name, "Token");
//! assert_eq!(description.methods[0].kind, EntryKind::Function);
//! assert!(description.constructor.is_none());
//! ```

pub mod description;
pub mod error;
pub mod prelude;
pub mod types;

// Re-export main types at crate root
pub use description::{Description, DroppedEntry};
pub use error::DefineError;
pub use types::{Entry, EntryKind, Parameter};
