//! Domain type to target type mapping.
//!
//! Each output format owns a [`TypeMapper`] table translating ABI primitive
//! names (`bool`, `address`, `uint256`, ...) into target-language type names.
//! Array markers are stripped before the lookup and reattached afterwards, and
//! names missing from the table pass through unchanged so custom types still
//! appear in the output literally.

use std::collections::BTreeMap;

use abi_define::Parameter;

/// The ABI array marker.
pub const ARRAY_MARKER: &str = "[]";

/// Bit widths of the sized integer types (`int8`..`int256`, `uint8`..`uint256`).
pub fn integer_widths() -> impl Iterator<Item = u16> {
    (8..=256).step_by(8)
}

/// Splits a domain type into its bare name and its trailing `[]` markers.
///
/// ## Examples
///
/// ```
/// use abi_gen::type_map::split_array_suffix;
///
/// assert_eq!(split_array_suffix("uint8"), ("uint8", ""));
/// assert_eq!(split_array_suffix("address[]"), ("address", "[]"));
/// assert_eq!(split_array_suffix("bool[][]"), ("bool", "[][]"));
/// ```
pub fn split_array_suffix(ty: &str) -> (&str, &str) {
    let mut bare = ty;
    while let Some(stripped) = bare.strip_suffix(ARRAY_MARKER) {
        bare = stripped;
    }
    (bare, &ty[bare.len()..])
}

/// A static mapping from domain type names to output type names.
///
/// ## Examples
///
/// ```
/// use abi_define::Parameter;
/// use abi_gen::type_map::TypeMapper;
///
/// let types = TypeMapper::new()
///     .with("bool", "boolean")
///     .with("uint256", "number");
///
/// assert_eq!(types.resolve(&Parameter::new("ok", "bool")), "boolean");
/// assert_eq!(types.resolve_type("uint256[]"), "number[]");
/// assert_eq!(types.resolve_type("MyStruct"), "MyStruct");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeMapper {
    table: BTreeMap<String, String>,
}

impl TypeMapper {
    /// Creates an empty table; every type passes through unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a mapping (builder style).
    pub fn with(mut self, domain: impl Into<String>, target: impl Into<String>) -> Self {
        self.insert(domain, target);
        self
    }

    /// Adds or replaces a mapping.
    pub fn insert(&mut self, domain: impl Into<String>, target: impl Into<String>) {
        self.table.insert(domain.into(), target.into());
    }

    /// Looks up a bare domain name.
    pub fn get(&self, domain: &str) -> Option<&str> {
        self.table.get(domain).map(String::as_str)
    }

    /// Number of mapped domain names.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if the table maps nothing.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Iterates `(domain, target)` pairs in domain-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.table.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Resolves a parameter's domain type to the output type.
    pub fn resolve(&self, param: &Parameter) -> String {
        self.resolve_type(&param.ty)
    }

    /// Resolves a domain type name to the output type.
    pub fn resolve_type(&self, ty: &str) -> String {
        let (bare, suffix) = split_array_suffix(ty);
        let mapped = self.get(bare).unwrap_or(bare);
        format!("{mapped}{suffix}")
    }
}

impl<K, V> FromIterator<(K, V)> for TypeMapper
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            table: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_widths_cover_8_to_256() {
        let widths: Vec<_> = integer_widths().collect();
        assert_eq!(widths.len(), 32);
        assert_eq!(widths.first(), Some(&8));
        assert_eq!(widths.last(), Some(&256));
        assert!(widths.iter().all(|w| w % 8 == 0));
    }

    #[test]
    fn split_without_marker() {
        assert_eq!(split_array_suffix("string"), ("string", ""));
        assert_eq!(split_array_suffix(""), ("", ""));
    }

    #[test]
    fn split_only_strips_trailing_markers() {
        assert_eq!(split_array_suffix("uint8[3]"), ("uint8[3]", ""));
        assert_eq!(split_array_suffix("a[]b"), ("a[]b", ""));
    }

    #[test]
    fn empty_table_passes_everything_through() {
        let types = TypeMapper::new();
        assert!(types.is_empty());
        assert_eq!(types.resolve_type("uint256"), "uint256");
        assert_eq!(types.resolve_type("uint256[]"), "uint256[]");
    }

    #[test]
    fn nested_arrays_keep_every_marker() {
        let types = TypeMapper::new().with("address", "string");
        assert_eq!(types.resolve_type("address[][]"), "string[][]");
    }

    #[test]
    fn unknown_type_with_marker_is_unchanged() {
        let types = TypeMapper::new().with("bool", "boolean");
        assert_eq!(types.resolve_type("Custom[]"), "Custom[]");
    }

    #[test]
    fn insert_replaces_existing_mapping() {
        let mut types = TypeMapper::new().with("int", "number");
        types.insert("int", "bigint");
        assert_eq!(types.get("int"), Some("bigint"));
        assert_eq!(types.len(), 1);
    }

    #[test]
    fn collect_from_pairs() {
        let types: TypeMapper = [("bool", "boolean"), ("string", "string")]
            .into_iter()
            .collect();
        let pairs: Vec<_> = types.iter().collect();
        assert_eq!(pairs, vec![("bool", "boolean"), ("string", "string")]);
    }

    #[test]
    fn resolve_is_stable() {
        let types = TypeMapper::new().with("uint8", "number");
        let param = Parameter::new("x", "uint8[]");
        assert_eq!(types.resolve(&param), types.resolve(&param));
        assert_eq!(param.ty, "uint8[]");
    }
}
