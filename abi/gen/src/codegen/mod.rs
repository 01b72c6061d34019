//! Code generation for ABI bindings.
//!
//! Each output format implements [`Generator`]; the
//! [`FormatRegistry`](crate::registry::FormatRegistry) binds a format
//! identifier to its generator factory and type table.
//!
//! ## Submodules
//!
//! - [`typescript`] - Injectable TypeScript contract classes with `Observable` returns
//!
//! ## Generation Flow
//!
//! 1. A [`Description`] is parsed from the raw ABI
//! 2. The registry's [`GeneratorFactory`] binds a generator to the description
//!    and the format's [`TypeMapper`]
//! 3. [`Generator::run`] emits the text once and caches it

use abi_define::Description;

use crate::type_map::TypeMapper;

pub mod typescript;

pub use typescript::TypeScriptGenerator;

/// A format-specific binding generator.
///
/// Generation runs at most once per instance: the first [`run`](Self::run)
/// emits and caches the text, later calls return the cached text.
pub trait Generator {
    /// Identifier of the format this generator emits (e.g. `ts`).
    fn format_id(&self) -> &'static str;

    /// Returns the generated text, emitting it on the first call.
    fn run(&self) -> &str;

    /// Returns true once the text has been generated.
    fn is_done(&self) -> bool;
}

/// Constructs a generator bound to a description and a type table.
pub type GeneratorFactory =
    for<'a> fn(&'a Description, &'a TypeMapper) -> Box<dyn Generator + 'a>;
