//! Core types for contract ABI descriptions.
//!
//! This module provides the typed view of a single ABI element:
//!
//! - [`Entry`] - A constructor, function, or event
//! - [`Parameter`] - A named, typed value in an entry's inputs or outputs
//! - [`EntryKind`] - The recognized entry kinds

use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// The kinds of ABI entries the generator understands.
///
/// Any other `type` value (for example `fallback` or `receive`) never becomes
/// an [`Entry`]; it is recorded as a [`DroppedEntry`](crate::DroppedEntry)
/// instead.
///
/// ## Examples
///
/// Parse from the raw `type` string:
///
/// ```
/// use std::str::FromStr;
/// use abi_define::EntryKind;
///
/// assert_eq!(EntryKind::from_str("function").unwrap(), EntryKind::Function);
/// assert!(EntryKind::from_str("fallback").is_err());
/// ```
///
/// Display as the role label used in generated documentation:
///
/// ```
/// use abi_define::EntryKind;
///
/// assert_eq!(EntryKind::Event.to_string(), "event");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EntryKind {
    /// The contract constructor (at most one per description)
    Constructor,
    /// A callable method
    Function,
    /// A subscribable event
    Event,
}

/// A named, typed value inside an entry's `inputs` or `outputs`.
///
/// The `type` is a domain primitive name such as `uint256` or `address`,
/// optionally followed by one or more `[]` array markers.
///
/// ## Examples
///
/// ```
/// use abi_define::Parameter;
///
/// let param: Parameter = serde_json::from_str(r#"{"name":"who","type":"address"}"#).unwrap();
/// assert_eq!(param.name, "who");
/// assert_eq!(param.ty, "address");
///
/// // Output parameters frequently omit the name
/// let unnamed: Parameter = serde_json::from_str(r#"{"type":"uint256"}"#).unwrap();
/// assert!(unnamed.name.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name (may be empty).
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Domain type name, e.g. `uint8`, `address[]`.
    #[serde(rename = "type")]
    pub ty: String,
}

impl Parameter {
    /// Creates a parameter from a name and a domain type.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// Creates a parameter without a name.
    pub fn unnamed(ty: impl Into<String>) -> Self {
        Self::new("", ty)
    }

    /// Returns true if the parameter carries a non-empty name.
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }
}

/// One recognized element of an ABI description.
///
/// Keys the generator has no use for (`constant`, `payable`,
/// `stateMutability`, `anonymous`, ...) are ignored here; the untouched raw
/// JSON is kept on the [`Description`](crate::Description).
///
/// ## Examples
///
/// ```
/// use abi_define::{Entry, EntryKind, Parameter};
///
/// let entry: Entry = serde_json::from_str(
///     r#"{"type":"function","name":"Balance","inputs":[{"name":"who","type":"address"}],"outputs":[{"type":"uint256"}]}"#,
/// ).unwrap();
///
/// assert_eq!(entry.kind, EntryKind::Function);
/// assert_eq!(entry.name(), "Balance");
/// assert_eq!(entry.inputs, vec![Parameter::new("who", "address")]);
/// assert!(entry.has_outputs());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// The entry kind, serialized as the ABI `type` key.
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Entry name; usually absent for the constructor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Ordered input parameters.
    #[serde(default, deserialize_with = "null_as_default")]
    pub inputs: Vec<Parameter>,
    /// Ordered output parameters (empty for constructors and most events).
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub outputs: Vec<Parameter>,
}

impl Entry {
    /// Creates an entry of the given kind with no parameters.
    pub fn new(kind: EntryKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: Some(name.into()),
            inputs: vec![],
            outputs: vec![],
        }
    }

    /// The zero-argument constructor used when a description declares none.
    pub fn empty_constructor() -> Self {
        Self {
            kind: EntryKind::Constructor,
            name: None,
            inputs: vec![],
            outputs: vec![],
        }
    }

    /// Adds an input parameter (builder style).
    pub fn with_input(mut self, param: Parameter) -> Self {
        self.inputs.push(param);
        self
    }

    /// Adds an output parameter (builder style).
    pub fn with_output(mut self, param: Parameter) -> Self {
        self.outputs.push(param);
        self
    }

    /// Returns the entry name, or an empty string when absent.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Returns true if the entry declares at least one output.
    pub fn has_outputs(&self) -> bool {
        !self.outputs.is_empty()
    }
}

/// Reads an explicit JSON `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
