//! Shared test utilities for abi-gen tests.
//!
//! Helpers for building raw ABI elements and parsed descriptions so unit
//! tests stay focused on the generated text.

use abi_define::Description;
use serde_json::{Value, json};

/// Builds a raw parameter list from `(name, type)` pairs.
///
/// An empty name omits the `name` key, matching how ABIs usually encode
/// unnamed outputs.
pub fn params(pairs: &[(&str, &str)]) -> Value {
    Value::Array(
        pairs
            .iter()
            .map(|(name, ty)| {
                if name.is_empty() {
                    json!({ "type": ty })
                } else {
                    json!({ "name": name, "type": ty })
                }
            })
            .collect(),
    )
}

/// Builds a raw `function` element.
pub fn function(name: &str, inputs: &[(&str, &str)], outputs: &[(&str, &str)]) -> Value {
    json!({
        "type": "function",
        "name": name,
        "inputs": params(inputs),
        "outputs": params(outputs),
    })
}

/// Builds a raw `event` element.
pub fn event(name: &str, inputs: &[(&str, &str)]) -> Value {
    json!({
        "type": "event",
        "name": name,
        "inputs": params(inputs),
    })
}

/// Parses raw elements into a description.
///
/// ## Panics
///
/// Panics if the elements are malformed; tests only pass well-formed input.
pub fn make_description(name: &str, address: &str, entries: Vec<Value>) -> Description {
    Description::parse(name, address, &Value::Array(entries))
        .expect("test ABI should be well-formed")
}
