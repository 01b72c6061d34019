//! Output format registry.
//!
//! A [`FormatRegistry`] is built once at startup and passed explicitly to
//! [`generate`](crate::output::generate). Each [`FormatSpec`] bundles the
//! content type, the file extension, the type table, and the generator
//! factory for one output format.
//!
//! ## Examples
//!
//! ```
//! use abi_gen::registry::FormatRegistry;
//!
//! let registry = FormatRegistry::new();
//!
//! let ts = registry.lookup("ts").unwrap();
//! assert_eq!(ts.content_type, "text/typescript");
//!
//! assert!(registry.lookup("py").is_err());
//! ```

use std::collections::BTreeMap;

use abi_define::Description;

use crate::codegen::{Generator, GeneratorFactory, typescript};
use crate::errors::GeneratorError;
use crate::type_map::TypeMapper;

/// Everything needed to generate one output format.
#[derive(Debug, Clone)]
pub struct FormatSpec {
    /// Format identifier (e.g. `ts`).
    pub id: &'static str,
    /// Content type of the generated file.
    pub content_type: &'static str,
    /// Extension of the generated file, without the dot.
    pub extension: &'static str,
    /// Domain type to output type mapping.
    pub type_table: TypeMapper,
    /// Constructs a generator bound to a description.
    pub factory: GeneratorFactory,
}

impl FormatSpec {
    /// The TypeScript format.
    pub fn typescript() -> Self {
        Self {
            id: typescript::FORMAT_ID,
            content_type: typescript::CONTENT_TYPE,
            extension: typescript::EXTENSION,
            type_table: typescript::type_table(),
            factory: typescript::factory,
        }
    }

    /// Binds this format's generator to a description.
    pub fn bind<'a>(&'a self, description: &'a Description) -> Box<dyn Generator + 'a> {
        (self.factory)(description, &self.type_table)
    }
}

/// Immutable mapping from format identifier to [`FormatSpec`].
#[derive(Debug, Clone)]
pub struct FormatRegistry {
    formats: BTreeMap<&'static str, FormatSpec>,
}

impl FormatRegistry {
    /// Creates the registry with every built-in format.
    pub fn new() -> Self {
        Self::empty().with(FormatSpec::typescript())
    }

    /// Creates a registry with no formats.
    pub fn empty() -> Self {
        Self {
            formats: BTreeMap::new(),
        }
    }

    /// Adds a format, replacing any format with the same identifier.
    pub fn with(mut self, spec: FormatSpec) -> Self {
        self.formats.insert(spec.id, spec);
        self
    }

    /// Looks up a format by identifier.
    ///
    /// ## Errors
    ///
    /// Returns [`GeneratorError::UnknownFormat`] if no format is registered
    /// under `id`.
    pub fn lookup(&self, id: &str) -> Result<&FormatSpec, GeneratorError> {
        self.formats
            .get(id)
            .ok_or_else(|| GeneratorError::UnknownFormat {
                format: id.to_string(),
                available: self.ids().collect::<Vec<_>>().join(", "),
            })
    }

    /// Registered identifiers in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.formats.keys().copied()
    }

    /// Registered formats in identifier order.
    pub fn formats(&self) -> impl Iterator<Item = &FormatSpec> {
        self.formats.values()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}
