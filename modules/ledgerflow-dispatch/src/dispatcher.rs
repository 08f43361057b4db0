//! ContractDispatcher — classify created events into a caller-chosen union.
//!
//! Each event is matched against the registry by template identifier and
//! decoded by the first descriptor that matches, or rejected. The scan is
//! linear over a short, caller-supplied list; order is significant.

use tracing::{debug, warn};

use ledgerflow_events::{CreatedEvent, TemplateId};

use crate::descriptor::TemplateDescriptor;
use crate::error::DispatchError;

/// Ordered registry of template descriptors.
///
/// Holds no mutable state after construction; one instance may be shared
/// across any number of threads (`Send + Sync` when `T` is).
pub struct ContractDispatcher<T> {
    descriptors: Vec<TemplateDescriptor<T>>,
}

impl<T> ContractDispatcher<T> {
    /// Build a dispatcher over `descriptors`. No uniqueness validation:
    /// duplicate identifiers are legal and the earlier one wins.
    pub fn new(descriptors: Vec<TemplateDescriptor<T>>) -> Self {
        Self { descriptors }
    }

    /// Decode `event` as the first descriptor whose identifier matches.
    ///
    /// Short-circuits on the first match: later descriptors are never
    /// examined, and a failed decode is surfaced as-is rather than retried
    /// against a later duplicate.
    pub fn dispatch(&self, event: &CreatedEvent) -> Result<T, DispatchError> {
        for descriptor in &self.descriptors {
            if *descriptor.template_id() != event.template_id {
                continue;
            }
            return match descriptor.decode(&event.create_arguments) {
                Ok(value) => {
                    debug!(
                        template_id = %event.template_id,
                        contract_id = %event.contract_id,
                        "Dispatched created contract"
                    );
                    Ok(value)
                }
                Err(e) => {
                    warn!(
                        template_id = %event.template_id,
                        contract_id = %event.contract_id,
                        error = %e,
                        "Failed to decode create arguments"
                    );
                    Err(DispatchError::Decode {
                        template_id: event.template_id.clone(),
                        source: e,
                    })
                }
            };
        }

        debug!(template_id = %event.template_id, "No descriptor for template");
        Err(DispatchError::UnknownTemplate {
            template_id: event.template_id.clone(),
        })
    }

    /// Consume the dispatcher into a plain transform function, for handing to
    /// an event-subscription wiring point that wants a closure.
    pub fn transform(self) -> impl Fn(&CreatedEvent) -> Result<T, DispatchError> {
        move |event| self.dispatch(event)
    }

    /// Registered identifiers in registry order. Duplicates included.
    pub fn template_ids(&self) -> impl Iterator<Item = &TemplateId> {
        self.descriptors.iter().map(|d| d.template_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn id(entity: &str) -> TemplateId {
        TemplateId::new("pkg-test", "Billing", entity)
    }

    fn event(entity: &str) -> CreatedEvent {
        CreatedEvent::new(id(entity), "#1:0", json!({}))
    }

    #[test]
    fn first_match_wins_on_duplicate_identifiers() {
        let dispatcher = ContractDispatcher::new(vec![
            TemplateDescriptor::new(id("Invoice"), |_| Ok("first")),
            TemplateDescriptor::new(id("Invoice"), |_| Ok("second")),
        ]);

        // Deterministic across repeated calls.
        for _ in 0..3 {
            assert_eq!(dispatcher.dispatch(&event("Invoice")).unwrap(), "first");
        }
    }

    #[test]
    fn match_short_circuits_past_failing_duplicate() {
        // A failed decode on the matched descriptor is surfaced, not retried
        // against the later duplicate.
        let dispatcher = ContractDispatcher::new(vec![
            TemplateDescriptor::new(id("Invoice"), |_| {
                Err(serde_json::from_value::<i64>(json!("not a number")).unwrap_err())
            }),
            TemplateDescriptor::new(id("Invoice"), |_| Ok("second")),
        ]);

        let err = dispatcher.dispatch(&event("Invoice")).unwrap_err();
        assert!(matches!(err, DispatchError::Decode { .. }));
    }

    #[test]
    fn empty_registry_rejects_everything() {
        let dispatcher: ContractDispatcher<()> = ContractDispatcher::new(vec![]);

        let err = dispatcher.dispatch(&event("Invoice")).unwrap_err();
        match err {
            DispatchError::UnknownTemplate { template_id } => {
                assert_eq!(template_id, id("Invoice"));
            }
            other => panic!("expected UnknownTemplate, got {other:?}"),
        }
    }

    #[test]
    fn template_ids_preserve_registry_order() {
        let dispatcher = ContractDispatcher::new(vec![
            TemplateDescriptor::new(id("Invoice"), |_| Ok(())),
            TemplateDescriptor::new(id("PaymentRequest"), |_| Ok(())),
            TemplateDescriptor::new(id("Invoice"), |_| Ok(())),
        ]);

        let ids: Vec<_> = dispatcher.template_ids().cloned().collect();
        assert_eq!(ids, vec![id("Invoice"), id("PaymentRequest"), id("Invoice")]);
    }
}
