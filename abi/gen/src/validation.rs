//! Pre-generation checks for CLI input.
//!
//! The generator itself is purely syntactic and accepts any description.
//! These checks run in the command-line front end before generation:
//!
//! - **Contract name**: must be usable as a class name and a file name
//! - **Binding collisions**: overloaded or case-variant ABI names that map to
//!   the same binding name are reported as warnings
//!
//! ## Examples
//!
//! ```
//! use abi_gen::validation::validate_contract_name;
//!
//! assert!(validate_contract_name("Token").is_ok());
//! assert!(validate_contract_name("My Token").is_err());
//! ```

use std::collections::BTreeMap;

use abi_define::Description;
use tracing::warn;

use crate::errors::GeneratorError;
use crate::naming::{event_name, method_name};

/// Validates that a contract name is a TypeScript identifier.
///
/// ## Errors
///
/// Returns [`GeneratorError::InvalidContractName`] if the name is empty,
/// starts with a digit, or contains characters other than ASCII letters,
/// digits, `_`, and `$`.
pub fn validate_contract_name(name: &str) -> Result<(), GeneratorError> {
    let invalid = |reason: &str| GeneratorError::InvalidContractName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    let Some(first) = name.chars().next() else {
        return Err(invalid("name cannot be empty"));
    };

    if first.is_ascii_digit() {
        return Err(invalid("name cannot start with a digit"));
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
    {
        return Err(invalid(
            "name must contain only ASCII letters, digits, '_' or '$'",
        ));
    }

    Ok(())
}

/// Returns binding names produced by more than one ABI entry, with the
/// original names that collide on each.
///
/// Every collision is also logged at `warn` level.
pub fn binding_collisions(description: &Description) -> BTreeMap<String, Vec<String>> {
    let mut seen: BTreeMap<String, Vec<String>> = BTreeMap::new();

    let methods = description
        .methods
        .iter()
        .map(|m| (method_name(m.name()), m.name()));
    let events = description
        .events
        .iter()
        .map(|e| (event_name(e.name()), e.name()));

    for (binding, original) in methods.chain(events) {
        seen.entry(binding).or_default().push(original.to_string());
    }

    seen.retain(|_, originals| originals.len() > 1);

    for (binding, originals) in &seen {
        warn!(binding = %binding, ?originals, "several ABI entries map to the same binding name");
    }

    seen
}
