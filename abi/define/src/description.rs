//! The parsed, categorized ABI description.
//!
//! A [`Description`] is built once from a raw JSON entry list and never
//! mutated afterwards. Entries are sorted into three buckets (constructor,
//! methods, events); anything else is dropped and logged.

use std::str::FromStr;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::DefineError;
use crate::types::{Entry, EntryKind};

/// A raw ABI element that was not recognized as a constructor, function,
/// or event.
#[derive(Debug, Clone, PartialEq)]
pub struct DroppedEntry {
    /// Position of the element in the raw list.
    pub index: usize,
    /// The element's `type` value, if it had a string one.
    pub kind: Option<String>,
    /// The untouched element.
    pub raw: Value,
}

/// A complete contract description ready for code generation.
///
/// ## Examples
///
/// ```
/// use abi_define::Description;
///
/// let abi = r#"[
///     {"type":"constructor","inputs":[]},
///     {"type":"function","name":"Balance","inputs":[{"name":"who","type":"address"}],"outputs":[{"type":"uint256"}]},
///     {"type":"event","name":"Transfer","inputs":[{"name":"to","type":"address"}]},
///     {"type":"fallback"}
/// ]"#;
///
/// let description = Description::from_json_str("Token", "0x0", abi).unwrap();
///
/// assert!(description.constructor.is_some());
/// assert_eq!(description.methods.len(), 1);
/// assert_eq!(description.events.len(), 1);
/// assert_eq!(description.dropped.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Description {
    /// Contract name; becomes the generated class name.
    pub name: String,
    /// Contract address, emitted verbatim.
    pub address: String,
    /// The constructor entry, if one was declared.
    pub constructor: Option<Entry>,
    /// Function entries in declaration order.
    pub methods: Vec<Entry>,
    /// Event entries in declaration order.
    pub events: Vec<Entry>,
    /// Elements that were not recognized.
    pub dropped: Vec<DroppedEntry>,
    raw: Vec<Value>,
}

impl Description {
    /// Parses ABI JSON text and builds a description.
    ///
    /// ## Errors
    ///
    /// Returns [`DefineError::Json`] if the text is not JSON, and the errors of
    /// [`Description::parse`] otherwise.
    pub fn from_json_str(
        name: impl Into<String>,
        address: impl Into<String>,
        abi: &str,
    ) -> Result<Self, DefineError> {
        let value: Value = serde_json::from_str(abi)?;
        Self::parse(name, address, &value)
    }

    /// Builds a description from an already parsed JSON value.
    ///
    /// The value is deep-copied, so the caller's data is never touched.
    ///
    /// ## Errors
    ///
    /// - [`DefineError::MalformedInput`] if `abi` is not a JSON array
    /// - [`DefineError::MalformedEntry`] if a constructor, function, or event
    ///   element has fields of the wrong shape
    pub fn parse(
        name: impl Into<String>,
        address: impl Into<String>,
        abi: &Value,
    ) -> Result<Self, DefineError> {
        let raw = abi
            .as_array()
            .ok_or_else(|| DefineError::MalformedInput {
                reason: format!("expected a JSON array of entries, found {}", json_kind(abi)),
            })?
            .clone();

        let mut description = Self {
            name: name.into(),
            address: address.into(),
            constructor: None,
            methods: Vec::new(),
            events: Vec::new(),
            dropped: Vec::new(),
            raw: Vec::new(),
        };

        for (index, element) in raw.iter().enumerate() {
            let type_name = element.get("type").and_then(Value::as_str);

            let Some(kind) = type_name.and_then(|t| EntryKind::from_str(t).ok()) else {
                warn!(index, element = %element, "ABI element lost");
                description.dropped.push(DroppedEntry {
                    index,
                    kind: type_name.map(str::to_string),
                    raw: element.clone(),
                });
                continue;
            };

            let entry: Entry = serde_json::from_value(element.clone())
                .map_err(|source| DefineError::MalformedEntry { index, source })?;

            match kind {
                EntryKind::Constructor => {
                    if let Some(previous) = description.constructor.replace(entry) {
                        warn!(
                            index,
                            replaced = ?previous.inputs,
                            "duplicate constructor, keeping the last one"
                        );
                    }
                }
                EntryKind::Function => description.methods.push(entry),
                EntryKind::Event => description.events.push(entry),
            }
        }

        description.raw = raw;

        debug!(
            name = %description.name,
            constructor = description.constructor.is_some(),
            methods = description.methods.len(),
            events = description.events.len(),
            dropped = description.dropped.len(),
            "parsed ABI description"
        );

        Ok(description)
    }

    /// The raw entry list exactly as supplied.
    pub fn raw_entries(&self) -> &[Value] {
        &self.raw
    }

    /// Serializes the raw entry list as compact JSON, preserving key order.
    pub fn raw_json(&self) -> String {
        // Serializing a Vec<Value> cannot fail.
        serde_json::to_string(&self.raw).unwrap_or_default()
    }

    /// Returns the constructor entry, or an empty one if none was declared.
    pub fn constructor_or_default(&self) -> Entry {
        self.constructor
            .clone()
            .unwrap_or_else(Entry::empty_constructor)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
