use std::sync::Arc;

/// The Rust type backing the synthetic `Query` root object.
///
/// Fields registered through [`SchemaBuilder::query`](crate::schema::SchemaBuilder::query)
/// receive a `QueryRoot` as their source.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct QueryRoot;

/// The Rust type backing the synthetic `Mutation` root object.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MutationRoot;

/// The Rust type backing the synthetic `Subscription` root object: the event
/// currently being dispatched to a subscription.
///
/// A subscription dispatcher executes the subscription query once per event,
/// passing the event as the root value.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SubscriptionEvent {
    payload: Arc<[u8]>,
}
impl SubscriptionEvent {
    pub fn new(payload: impl Into<Arc<[u8]>>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}
