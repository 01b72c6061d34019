//! Naming transforms for generated bindings.
//!
//! Binding names are derived from ABI names with minimal first-character case
//! changes; the rest of the name is kept verbatim. Only ASCII letters change
//! case, everything else passes through.
//!
//! ## Examples
//!
//! ```
//! use abi_gen::naming::{event_name, method_name};
//!
//! assert_eq!(method_name("Balance"), "balance");
//! assert_eq!(method_name("getURL"), "getURL");
//! assert_eq!(event_name("Transfer"), "onTransfer");
//! assert_eq!(event_name("approval"), "onApproval");
//! ```

/// Prefix of generated event subscription methods.
pub const EVENT_PREFIX: &str = "on";

/// Lower-cases the first character and keeps the remainder.
pub fn lower_first(name: &str) -> String {
    map_first(name, |c| c.to_ascii_lowercase())
}

/// Upper-cases the first character and keeps the remainder.
pub fn upper_first(name: &str) -> String {
    map_first(name, |c| c.to_ascii_uppercase())
}

/// Binding name for a function entry.
pub fn method_name(name: &str) -> String {
    lower_first(name)
}

/// Binding name for an event entry: `on` + the name with its first character
/// upper-cased.
pub fn event_name(name: &str) -> String {
    format!("{EVENT_PREFIX}{}", upper_first(name))
}

fn map_first(name: &str, f: impl FnOnce(char) -> char) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(name.len());
            out.push(f(first));
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}
