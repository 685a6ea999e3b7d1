use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use screenwatch::exec::{ExecOutcome, ExecutorBackend};
use screenwatch::types::CommandInvocation;

/// Wraps another executor and keeps every outcome it reports, in order.
///
/// Lets tests drive a real backend through the runtime and still see what
/// each dispatch ended with.
pub struct RecordingExecutor<E> {
    inner: E,
    outcomes: Arc<Mutex<Vec<ExecOutcome>>>,
}

impl<E: ExecutorBackend> RecordingExecutor<E> {
    pub fn new(inner: E, outcomes: Arc<Mutex<Vec<ExecOutcome>>>) -> Self {
        Self { inner, outcomes }
    }
}

impl<E: ExecutorBackend> ExecutorBackend for RecordingExecutor<E> {
    fn execute(
        &mut self,
        invocation: CommandInvocation,
    ) -> Pin<Box<dyn Future<Output = ExecOutcome> + Send + '_>> {
        let outcomes = Arc::clone(&self.outcomes);

        Box::pin(async move {
            let outcome = self.inner.execute(invocation).await;
            outcomes.lock().unwrap().push(outcome.clone());
            outcome
        })
    }
}
