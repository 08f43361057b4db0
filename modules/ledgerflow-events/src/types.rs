//! Core types for contract events. Domain-agnostic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Structural identifier of a contract template on the ledger.
///
/// Two identifiers name the same template iff package, module, and entity all
/// match — comparison is by value, never by provenance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateId {
    pub package_id: String,
    pub module_name: String,
    pub entity_name: String,
}

impl TemplateId {
    pub fn new(
        package_id: impl Into<String>,
        module_name: impl Into<String>,
        entity_name: impl Into<String>,
    ) -> Self {
        Self {
            package_id: package_id.into(),
            module_name: module_name.into(),
            entity_name: entity_name.into(),
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.package_id, self.module_name, self.entity_name
        )
    }
}

/// A "contract created" occurrence as delivered by the ledger feed.
///
/// The `create_arguments` record is opaque here — its shape is only
/// interpretable relative to a template matching `template_id`. Consumed
/// exactly once by a dispatcher; never retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedEvent {
    pub template_id: TemplateId,
    pub contract_id: String,
    pub create_arguments: serde_json::Value,
    pub workflow_id: Option<String>,
    pub effective_at: Option<DateTime<Utc>>,
}

impl CreatedEvent {
    /// Create an event from the identifier, contract id, and raw arguments.
    /// Ledger context is attached via the `with_*` builders.
    pub fn new(
        template_id: TemplateId,
        contract_id: impl Into<String>,
        create_arguments: serde_json::Value,
    ) -> Self {
        Self {
            template_id,
            contract_id: contract_id.into(),
            create_arguments,
            workflow_id: None,
            effective_at: None,
        }
    }

    pub fn with_workflow_id(mut self, workflow_id: impl Into<String>) -> Self {
        self.workflow_id = Some(workflow_id.into());
        self
    }

    pub fn with_effective_at(mut self, at: DateTime<Utc>) -> Self {
        self.effective_at = Some(at);
        self
    }
}
