use micro_body::format::{AttemptId, FormatTask, Settled};
use micro_body::protocol::{ContentType, FormatError};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::{trace, warn};

/// Runs format tasks on a tokio runtime and collects their results.
///
/// Every spawned task reports exactly one [`Settled`]. A formatter that panics, or a
/// task dropped because its runtime shut down, settles as [`FormatError::Aborted`].
/// Results arrive in completion order, which may differ from spawn order.
#[derive(Debug)]
pub struct FormatRunner {
    handle: Handle,
    sender: UnboundedSender<Settled>,
    receiver: UnboundedReceiver<Settled>,
    in_flight: usize,
}

// reports an abort for its attempt unless a result was sent first
#[derive(Debug)]
struct SettleGuard {
    id: AttemptId,
    content_type: ContentType,
    sender: Option<UnboundedSender<Settled>>,
}

impl SettleGuard {
    fn send(mut self, settled: Settled) {
        if let Some(sender) = self.sender.take() {
            if sender.send(settled).is_err() {
                trace!(attempt = %self.id, "runner dropped before format settled");
            }
        }
    }
}

impl Drop for SettleGuard {
    fn drop(&mut self) {
        if let Some(sender) = self.sender.take() {
            warn!(attempt = %self.id, content_type = %self.content_type, "format task dropped before settling");
            let settled = Settled::rejected(self.id, FormatError::aborted("format task cancelled"));
            if sender.send(settled).is_err() {
                trace!(attempt = %self.id, "runner dropped before format settled");
            }
        }
    }
}

impl FormatRunner {
    pub fn new(handle: Handle) -> Self {
        let (sender, receiver) = unbounded_channel();
        Self { handle, sender, receiver, in_flight: 0 }
    }

    pub fn spawn(&mut self, task: FormatTask) {
        let guard = SettleGuard { id: task.id(), content_type: task.content_type(), sender: Some(self.sender.clone()) };
        let handle = self.handle.clone();
        self.in_flight += 1;

        self.handle.spawn(async move {
            let settled = match handle.spawn(task.run()).await {
                Ok(settled) => settled,
                Err(e) => {
                    warn!(attempt = %guard.id, content_type = %guard.content_type, cause = %e, "format task aborted");
                    Settled::rejected(guard.id, FormatError::aborted(e))
                }
            };
            guard.send(settled);
        });
    }

    /// Number of spawned tasks whose result has not been taken yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Takes a result which is already available, without waiting.
    pub fn try_next(&mut self) -> Option<Settled> {
        let settled = self.receiver.try_recv().ok()?;
        self.in_flight -= 1;
        Some(settled)
    }

    /// Waits for the next result, or returns `None` when nothing is in flight.
    pub async fn next(&mut self) -> Option<Settled> {
        if self.in_flight == 0 {
            return None;
        }
        let settled = self.receiver.recv().await?;
        self.in_flight -= 1;
        Some(settled)
    }
}
