use super::sink::ClipboardSink;
use super::writer::ClipboardWriter;
use crate::payload::ClipboardPayload;
use crate::{CopyError, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, debug, error, info, warn};

struct CopyJob {
    payload: ClipboardPayload,
    delay: Duration,
    done: oneshot::Sender<Result<()>>,
}

/// Completion handle for a queued copy
///
/// Dropping the ticket leaves the copy running.
#[derive(Debug)]
pub struct CopyTicket {
    done: oneshot::Receiver<Result<()>>,
}

impl CopyTicket {
    /// Waits for the copy to finish
    pub async fn wait(self) -> Result<()> {
        self.done.await.unwrap_or(Err(CopyError::Cancelled))
    }
}

/// FIFO work queue for clipboard writes
///
/// A single worker task sleeps for each job's delay, then performs the
/// blocking write on the blocking pool. Jobs run in submission order, so the
/// last copy submitted is the one left on the clipboard.
pub struct CopyQueue {
    sender: mpsc::UnboundedSender<CopyJob>,
    cancel: CancellationToken,
    worker: JoinHandle<()>,
}

impl CopyQueue {
    /// Spawns the worker on the current tokio runtime
    pub fn start<S>(writer: Arc<ClipboardWriter<S>>) -> Self
    where
        S: ClipboardSink + 'static,
    {
        let (sender, receiver) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let span = tracing::info_span!("copy_queue");
        let worker = tokio::spawn(Self::run(writer, receiver, cancel.clone()).instrument(span));

        Self {
            sender,
            cancel,
            worker,
        }
    }

    /// Queues a payload, to be written after `delay`
    pub fn submit(&self, payload: ClipboardPayload, delay: Duration) -> Result<CopyTicket> {
        let (done, ticket) = oneshot::channel();
        let bytes = payload.len();
        self.sender
            .send(CopyJob {
                payload,
                delay,
                done,
            })
            .map_err(|_| CopyError::QueueClosed)?;

        debug!(bytes, delay_ms = delay.as_millis() as u64, "Queued copy");
        Ok(CopyTicket { done: ticket })
    }

    /// Stops the worker
    ///
    /// A job waiting out its delay and every job still queued resolve with
    /// `CopyError::Cancelled`. A write already in progress completes.
    pub async fn shutdown(self) {
        self.cancel.cancel();
        if let Err(e) = self.worker.await {
            error!(error = %e, "Copy queue worker failed");
        }
    }

    async fn run<S>(
        writer: Arc<ClipboardWriter<S>>,
        mut receiver: mpsc::UnboundedReceiver<CopyJob>,
        cancel: CancellationToken,
    ) where
        S: ClipboardSink + 'static,
    {
        info!("Copy queue started");

        loop {
            let job = tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                job = receiver.recv() => match job {
                    Some(job) => job,
                    None => break,
                },
            };

            let result = Self::process(&writer, job.payload, job.delay, &cancel).await;
            if let Err(e) = &result {
                warn!(error = %e, "Copy failed");
            }
            // The submitter may have dropped its ticket
            let _ = job.done.send(result);
        }

        receiver.close();
        let mut dropped = 0usize;
        while let Ok(job) = receiver.try_recv() {
            let _ = job.done.send(Err(CopyError::Cancelled));
            dropped += 1;
        }

        info!(dropped, "Copy queue stopped");
    }

    async fn process<S>(
        writer: &Arc<ClipboardWriter<S>>,
        payload: ClipboardPayload,
        delay: Duration,
        cancel: &CancellationToken,
    ) -> Result<()>
    where
        S: ClipboardSink + 'static,
    {
        if !delay.is_zero() {
            debug!(delay_ms = delay.as_millis() as u64, "Delaying copy");
            tokio::select! {
                _ = cancel.cancelled() => return Err(CopyError::Cancelled),
                _ = tokio::time::sleep(delay) => {}
            }
        }

        let writer = Arc::clone(writer);
        tokio::task::spawn_blocking(move || writer.write(&payload))
            .await
            .map_err(|e| CopyError::Worker(e.to_string()))?
    }
}
