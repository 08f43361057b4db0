use ledgerflow_events::TemplateId;
use thiserror::Error;

/// Failure of a single dispatch call. Never fatal to the process — the caller
/// decides whether to retry, skip, or abort.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The event's template identifier matched no registered descriptor.
    /// No decode function was invoked.
    #[error("unknown contract type {template_id}")]
    UnknownTemplate { template_id: TemplateId },

    /// A descriptor matched, but decoding the create-arguments record into
    /// its value type failed. Carries the matched identifier so the failure
    /// is attributable to that template's decode logic.
    #[error("failed to decode create arguments as {template_id}")]
    Decode {
        template_id: TemplateId,
        #[source]
        source: serde_json::Error,
    },
}

impl DispatchError {
    /// The identifier the failure is about: the unmatched one for
    /// [`UnknownTemplate`](Self::UnknownTemplate), the matched one for
    /// [`Decode`](Self::Decode).
    pub fn template_id(&self) -> &TemplateId {
        match self {
            DispatchError::UnknownTemplate { template_id } => template_id,
            DispatchError::Decode { template_id, .. } => template_id,
        }
    }
}
