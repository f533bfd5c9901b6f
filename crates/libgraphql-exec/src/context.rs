use crate::error::ErrorCode;
use crate::error::ExecutionError;
use std::any::Any;
use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use std::time::Instant;
use tokio_util::sync::CancellationToken;

type DataMap = HashMap<TypeId, Arc<dyn Any + Send + Sync>>;

/// The ambient context of a single query execution.
///
/// A `Context` is handed to every resolver that asks for one and is checked
/// at the top of every recursive evaluation step: once its
/// [`CancellationToken`] is cancelled or its deadline has passed, execution
/// stops and the corresponding error becomes the query's error.
///
/// Resolvers that start background work for a
/// [`Deferred`](crate::schema::Deferred) value should observe the same token;
/// the executor never cancels such work itself.
#[derive(Clone)]
pub struct Context {
    cancellation: CancellationToken,
    data: Arc<DataMap>,
    deadline: Option<Instant>,
}
impl Context {
    pub fn new() -> Self {
        Self {
            cancellation: CancellationToken::new(),
            data: Arc::new(HashMap::new()),
            deadline: None,
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Attach a piece of request data, keyed by its type. A later call with
    /// the same type replaces the earlier value.
    pub fn with_data<T: Any + Send + Sync>(mut self, data: T) -> Self {
        Arc::make_mut(&mut self.data).insert(TypeId::of::<T>(), Arc::new(data));
        self
    }

    /// Look up request data previously attached with [`Context::with_data`].
    pub fn data<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.data
            .get(&TypeId::of::<T>())
            .and_then(|data| data.downcast_ref::<T>())
    }

    pub fn cancel(&self) {
        self.cancellation.cancel();
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancellation
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fails with a `Cancelled` or `DeadlineExceeded` error once this context
    /// is done.
    pub(crate) fn check(&self) -> Result<(), ExecutionError> {
        if self.cancellation.is_cancelled() {
            return Err(ExecutionError::new(
                "context canceled",
                ErrorCode::Cancelled,
            ));
        }

        if let Some(deadline) = self.deadline
            && Instant::now() >= deadline {
            return Err(ExecutionError::new(
                "context deadline exceeded",
                ErrorCode::DeadlineExceeded,
            ));
        }

        Ok(())
    }
}
impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("cancelled", &self.cancellation.is_cancelled())
            .field("deadline", &self.deadline)
            .field("data_entries", &self.data.len())
            .finish()
    }
}
