use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use screenwatch::exec::{ExecOutcome, ExecutorBackend};
use screenwatch::types::CommandInvocation;

/// One call observed by [`FakeExecutor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Started(Vec<String>),
    Finished(Vec<String>),
}

/// A fake executor that:
/// - records when each invocation starts and finishes
/// - optionally sleeps to simulate a slow command
/// - reports a clean exit without spawning anything.
pub struct FakeExecutor {
    records: Arc<Mutex<Vec<Record>>>,
    delay: Duration,
}

impl FakeExecutor {
    pub fn new(records: Arc<Mutex<Vec<Record>>>) -> Self {
        Self {
            records,
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Argument vectors of all started invocations, in order.
pub fn started(records: &Arc<Mutex<Vec<Record>>>) -> Vec<Vec<String>> {
    records
        .lock()
        .unwrap()
        .iter()
        .filter_map(|r| match r {
            Record::Started(argv) => Some(argv.clone()),
            Record::Finished(_) => None,
        })
        .collect()
}

impl ExecutorBackend for FakeExecutor {
    fn execute(
        &mut self,
        invocation: CommandInvocation,
    ) -> Pin<Box<dyn Future<Output = ExecOutcome> + Send + '_>> {
        let records = Arc::clone(&self.records);
        let delay = self.delay;

        Box::pin(async move {
            let argv = invocation.argv().to_vec();
            records.lock().unwrap().push(Record::Started(argv.clone()));

            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            records.lock().unwrap().push(Record::Finished(argv));

            if invocation.is_empty() {
                ExecOutcome::NoCommand
            } else {
                ExecOutcome::Exited {
                    resolved: invocation.program().map(str::to_string),
                    code: Some(0),
                }
            }
        })
    }
}
