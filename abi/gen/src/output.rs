//! Output assembly and file writing for generated bindings.
//!
//! This module handles the final phase of code generation: looking up the
//! requested format, running its generator, and handing the result to the
//! caller as a [`GeneratedFile`] or writing it to disk atomically.
//!
//! ## Safety Guarantees
//!
//! - **All or nothing**: nothing is written unless generation succeeded
//! - **Atomic writes**: uses temp file + rename so a previous file is replaced
//!   in one step and no partial file is ever visible

use std::fs;
use std::path::Path;

use abi_define::Description;
use tracing::{debug, info};

use crate::errors::GeneratorError;
use crate::registry::FormatRegistry;

/// A generated binding ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// The generated source text.
    pub text: String,
    /// Suggested file name, `<contract>.<extension>`.
    pub file_name: String,
    /// Content type of the text.
    pub content_type: &'static str,
}

/// Generates a binding for `description` in the requested format.
///
/// ## Examples
///
/// ```
/// use abi_define::Description;
/// use abi_gen::output::generate;
/// use abi_gen::registry::FormatRegistry;
///
/// let registry = FormatRegistry::new();
/// let description = Description::from_json_str("Token", "0x0", "[]").unwrap();
///
/// let file = generate(&description, &registry, "ts").unwrap();
/// assert_eq!(file.file_name, "Token.ts");
/// assert_eq!(file.content_type, "text/typescript");
/// ```
///
/// ## Errors
///
/// Returns [`GeneratorError::UnknownFormat`] if `format` is not registered.
pub fn generate(
    description: &Description,
    registry: &FormatRegistry,
    format: &str,
) -> Result<GeneratedFile, GeneratorError> {
    let spec = registry.lookup(format)?;
    let generator = spec.bind(description);
    let text = generator.run().to_string();

    debug!(
        format = spec.id,
        bytes = text.len(),
        "generated binding for {}", description.name
    );

    Ok(GeneratedFile {
        text,
        file_name: format!("{}.{}", description.name, spec.extension),
        content_type: spec.content_type,
    })
}

/// Stores a binding's text at `path`, staging it in a sibling `.tmp` file.
///
/// A binding regenerated over an older one is swapped in by rename, so
/// `path` holds either the old text or the full new text.
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` naming the path that failed: the
/// output directory, the staging file, or the final binding path.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::WriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| GeneratorError::WriteError {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| GeneratorError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// Generates a binding and writes it to `output_dir`.
///
/// ## Arguments
///
/// * `description` - The parsed ABI description
/// * `registry` - Registered output formats
/// * `format` - Format identifier (e.g. `ts`)
/// * `output_dir` - Directory the file is written to
/// * `dry_run` - If true, print the text to stdout instead of writing
///
/// ## Errors
///
/// Returns an error if the format is unknown or the file cannot be written.
pub fn generate_and_write(
    description: &Description,
    registry: &FormatRegistry,
    format: &str,
    output_dir: &Path,
    dry_run: bool,
) -> Result<GeneratedFile, GeneratorError> {
    let file = generate(description, registry, format)?;

    if dry_run {
        print!("{}", file.text);
    } else {
        let path = output_dir.join(&file.file_name);
        write_atomic(&path, &file.text)?;
        info!(path = %path.display(), content_type = file.content_type, "wrote binding");
    }

    Ok(file)
}
