use serde::de::DeserializeOwned;

use crate::types::TemplateId;

/// A contract payload type known at compile time.
///
/// Pairs a value type with the ledger identifier its create-arguments records
/// carry. One impl per supported template; a dispatcher descriptor built from
/// a `Template` type is guaranteed well-formed at compile time.
pub trait Template: DeserializeOwned {
    /// The ledger identifier for this template.
    fn template_id() -> TemplateId;
}
