//! Event-side types for ledger contract dispatch.
//!
//! Zero knowledge of any concrete contract domain. Create-arguments records
//! travel as `serde_json::Value`; consumers bring their own payload types and
//! implement [`Template`] for each one they care about.

pub mod template;
pub mod types;

pub use template::Template;
pub use types::{CreatedEvent, TemplateId};
