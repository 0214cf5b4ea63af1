//! Static curve registry
//!
//! Maps curve identifiers to validated [`DomainParameterSet`] records. The
//! table is fixed at compile time; lookups never parse descriptor strings.

use crate::error::{Error, Result};
use crate::{DomainParameterSet, SECP256R1};

static REGISTRY: &[(&[&str], &DomainParameterSet)] = &[(
    &["secp256r1", "P-256", "prime256v1"],
    &SECP256R1,
)];

/// Look up explicit domain parameters by curve identifier
///
/// Identifiers are matched case-insensitively against the known aliases of
/// each registered curve. Fails with [`Error::UnknownCurve`] when the
/// identifier is absent; no cryptographic operation is attempted in that
/// case.
pub fn load(name: &str) -> Result<&'static DomainParameterSet> {
    REGISTRY
        .iter()
        .find(|(aliases, _)| aliases.iter().any(|a| a.eq_ignore_ascii_case(name)))
        .map(|(_, params)| *params)
        .ok_or_else(|| Error::UnknownCurve {
            name: name.to_string(),
        })
}

/// Primary identifiers of every registered curve
pub fn names() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|(aliases, _)| aliases[0])
}
