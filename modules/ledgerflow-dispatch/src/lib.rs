//! Typed dispatch of ledger "contract created" events.
//!
//! An explicit ordered registry replaces reflective template lookup: each
//! [`TemplateDescriptor`] pairs a [`TemplateId`](ledgerflow_events::TemplateId)
//! with the decode logic for that template, and
//! [`ContractDispatcher::dispatch`] scans the registry in supplied order.
//! First match wins; a failed decode on the matched descriptor is reported as
//! [`DispatchError::Decode`], never retried against later descriptors.

pub mod descriptor;
pub mod dispatcher;
pub mod error;

pub use descriptor::TemplateDescriptor;
pub use dispatcher::ContractDispatcher;
pub use error::DispatchError;
