//! TemplateDescriptor — one entry in the dispatcher's registry.

use ledgerflow_events::{Template, TemplateId};

type DecodeFn<T> =
    Box<dyn Fn(&serde_json::Value) -> Result<T, serde_json::Error> + Send + Sync>;

/// Pairs a template identifier with the logic to decode a matching
/// create-arguments record into the caller's union type `T`.
///
/// Descriptors are immutable once built. The dispatcher never inspects the
/// decode function beyond invoking it on a matched record.
pub struct TemplateDescriptor<T> {
    id: TemplateId,
    decode: DecodeFn<T>,
}

impl<T> TemplateDescriptor<T> {
    /// Descriptor from raw parts.
    pub fn new(
        id: TemplateId,
        decode: impl Fn(&serde_json::Value) -> Result<T, serde_json::Error> + Send + Sync + 'static,
    ) -> Self {
        Self {
            id,
            decode: Box::new(decode),
        }
    }

    /// Descriptor for a [`Template`] type, wrapped into the caller's union
    /// via `wrap` — typically an enum variant constructor.
    ///
    /// The identifier comes from `C::template_id()` and decoding is plain
    /// serde, so a descriptor built this way cannot be malformed.
    pub fn of<C>(wrap: fn(C) -> T) -> Self
    where
        C: Template + 'static,
        T: 'static,
    {
        Self::new(C::template_id(), move |args| {
            serde_json::from_value::<C>(args.clone()).map(wrap)
        })
    }

    /// The identifier this descriptor answers for.
    pub fn template_id(&self) -> &TemplateId {
        &self.id
    }

    pub(crate) fn decode(&self, args: &serde_json::Value) -> Result<T, serde_json::Error> {
        (self.decode)(args)
    }
}

impl<T> std::fmt::Debug for TemplateDescriptor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateDescriptor")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}
