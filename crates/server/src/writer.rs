// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Background snapshot writer.
//!
//! Handlers hand their flush requests to a single writer task and return
//! without waiting for the database. The writer works through requests in
//! the order they were submitted, so a later snapshot never lands before an
//! earlier one.

use practice_roster_api::{FlushRequest, FlushStatus, flush};
use practice_roster_persistence::Persistence;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard, mpsc, oneshot};
use tracing::{debug, error, warn};

/// A unit of work for the writer task.
enum WriteJob {
    /// Write and move on.
    Flush(FlushRequest),
    /// Write and report the result back.
    FlushAndReport(FlushRequest, oneshot::Sender<FlushStatus>),
    /// Signal once every earlier job has been written.
    Barrier(oneshot::Sender<()>),
}

/// Handle for submitting snapshots to the writer task.
#[derive(Clone)]
pub struct SnapshotWriter {
    sender: mpsc::UnboundedSender<WriteJob>,
}

impl SnapshotWriter {
    /// Spawns the writer task on the current runtime.
    #[must_use]
    pub fn spawn(persistence: Arc<Mutex<Persistence>>) -> Self {
        let (sender, receiver): (
            mpsc::UnboundedSender<WriteJob>,
            mpsc::UnboundedReceiver<WriteJob>,
        ) = mpsc::unbounded_channel();
        tokio::spawn(run_writer(persistence, receiver));
        Self { sender }
    }

    /// Queues a flush without waiting for it.
    pub fn submit(&self, request: FlushRequest) {
        let owner_key: String = request.owner_key.value().to_string();
        if self.sender.send(WriteJob::Flush(request)).is_err() {
            warn!(owner_key = %owner_key, "Snapshot writer is gone, change not flushed");
        }
    }

    /// Queues a flush and waits until it has been written.
    pub async fn flush_now(&self, request: FlushRequest) -> FlushStatus {
        let (reply, response): (oneshot::Sender<FlushStatus>, oneshot::Receiver<FlushStatus>) =
            oneshot::channel();
        if self
            .sender
            .send(WriteJob::FlushAndReport(request, reply))
            .is_err()
        {
            return writer_gone();
        }
        response.await.unwrap_or_else(|_| writer_gone())
    }

    /// Waits until every flush submitted so far has been written.
    pub async fn settle(&self) {
        let (reply, response): (oneshot::Sender<()>, oneshot::Receiver<()>) = oneshot::channel();
        if self.sender.send(WriteJob::Barrier(reply)).is_ok() {
            let _ = response.await;
        }
    }
}

fn writer_gone() -> FlushStatus {
    FlushStatus::Failed {
        reason: String::from("Snapshot writer is not running"),
    }
}

async fn run_writer(
    persistence: Arc<Mutex<Persistence>>,
    mut receiver: mpsc::UnboundedReceiver<WriteJob>,
) {
    while let Some(job) = receiver.recv().await {
        match job {
            WriteJob::Flush(request) => {
                write(&persistence, request).await;
            }
            WriteJob::FlushAndReport(request, reply) => {
                let status: FlushStatus = write(&persistence, request).await;
                let _ = reply.send(status);
            }
            WriteJob::Barrier(reply) => {
                let _ = reply.send(());
            }
        }
    }
    debug!("Snapshot writer stopped");
}

async fn write(persistence: &Arc<Mutex<Persistence>>, request: FlushRequest) -> FlushStatus {
    let persistence: Arc<Mutex<Persistence>> = Arc::clone(persistence);
    let result: Result<FlushStatus, tokio::task::JoinError> =
        tokio::task::spawn_blocking(move || {
            let mut guard: MutexGuard<'_, Persistence> = persistence.blocking_lock();
            flush(&mut *guard, &request)
        })
        .await;

    match result {
        Ok(status) => status,
        Err(e) => {
            error!(error = %e, "Snapshot write task failed");
            FlushStatus::Failed {
                reason: e.to_string(),
            }
        }
    }
}
