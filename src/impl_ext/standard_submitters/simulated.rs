use std::{
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{
    Attachment, ExpenseRecord, ExpenseSubmitter, DEFAULT_SUBMIT_LATENCY_MS,
};

/// Stand-in for a real network client: waits a fixed latency, then accepts the
/// record. It cannot fail.
#[derive(Debug)]
pub struct SimulatedSubmitter {
    latency: Duration,
    calls: AtomicUsize,
}

impl SimulatedSubmitter {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of records received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_SUBMIT_LATENCY_MS))
    }
}

#[async_trait]
impl ExpenseSubmitter for SimulatedSubmitter {
    async fn submit(
        &self,
        record: &ExpenseRecord,
        attachment: Option<&Attachment>,
    ) -> Result<(), ServerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(
            vendor = %record.vendor,
            bill_ref = %record.bill_ref,
            attachment = attachment.map(|a| a.name.as_str()),
            latency_ms = self.latency.as_millis() as u64,
            "simulating expense submission"
        );
        tokio::time::sleep(self.latency).await;
        Ok(())
    }
}
