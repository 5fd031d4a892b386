//! Sync bridge between `ExerciseStore` and a `DurableStore`
//!
//! Startup runs once per bridge: initialize the durable store, load it, and
//! replace the in-memory state when durable storage holds anything. Afterwards
//! every store notification is written through on a detached task.
//!
//! Saves may finish out of order. Each one carries a generation number and
//! saves serialize on an async mutex holding the newest generation written,
//! so a stale snapshot never overwrites a newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use gymtrack_core::errors::ExError;
use gymtrack_core::model::Snapshot;
use gymtrack_core::observer::Subscription;
use gymtrack_core::{log_op_end, log_op_error, log_op_start, ExerciseStore};
use gymtrack_store::DurableStore;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Startup outcome exposed to front ends
///
/// `error` is set when durable storage could not be initialized or loaded;
/// the session then keeps working on the fallback store alone.
#[derive(Debug, Clone, Default)]
pub struct SyncStatus {
    pub ready: bool,
    pub error: Option<ExError>,
}

impl SyncStatus {
    /// Durable storage is unavailable for this session
    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}

struct WriteThrough {
    durable: Arc<dyn DurableStore>,
    runtime: Handle,
    next_generation: AtomicU64,
    /// Newest generation handed to `save_all`
    written: tokio::sync::Mutex<u64>,
    in_flight: Mutex<Vec<JoinHandle<()>>>,
}

impl WriteThrough {
    fn schedule(self: &Arc<Self>, snapshot: Snapshot) {
        let generation = self.next_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let this = Arc::clone(self);
        let handle = self
            .runtime
            .spawn(async move { this.save(generation, snapshot).await });

        if let Ok(mut in_flight) = self.in_flight.lock() {
            in_flight.retain(|h| !h.is_finished());
            in_flight.push(handle);
        }
    }

    async fn save(&self, generation: u64, snapshot: Snapshot) {
        let mut written = self.written.lock().await;
        if generation <= *written {
            tracing::debug!(generation, written = *written, "skipping superseded save");
            return;
        }

        let started = Instant::now();
        log_op_start!(
            "save_all",
            generation = generation,
            exercise_count = snapshot.exercises.len()
        );
        // a failed save still claims its generation so older snapshots stay out
        *written = generation;
        match self.durable.save_all(snapshot).await {
            Ok(()) => {
                log_op_end!(
                    "save_all",
                    duration_ms = started.elapsed().as_millis() as u64,
                    generation = generation
                );
            }
            Err(err) => {
                log_op_error!(
                    "save_all",
                    err,
                    duration_ms = started.elapsed().as_millis() as u64,
                    generation = generation
                );
            }
        }
    }

    async fn flush(&self) {
        loop {
            let pending: Vec<JoinHandle<()>> = match self.in_flight.lock() {
                Ok(mut in_flight) => in_flight.drain(..).collect(),
                Err(_) => return,
            };
            if pending.is_empty() {
                return;
            }
            for handle in pending {
                if let Err(err) = handle.await {
                    tracing::warn!(error = %err, "save task did not complete");
                }
            }
        }
    }
}

/// Keeps a durable store in step with one `ExerciseStore`
pub struct SyncBridge {
    status: SyncStatus,
    write_through: Option<Arc<WriteThrough>>,
    _subscription: Option<Subscription>,
}

impl SyncBridge {
    /// Run the startup protocol against `store` and install write-through
    ///
    /// Never fails: storage errors are recorded in [`SyncStatus`] and the
    /// bridge stays passive, leaving the fallback store as the only
    /// persistence. Must be called from within a tokio runtime.
    pub async fn start(store: &mut ExerciseStore, durable: Arc<dyn DurableStore>) -> Self {
        let started = Instant::now();
        log_op_start!("sync_startup");

        if let Err(err) = durable.initialize().await {
            log_op_error!(
                "sync_startup",
                err.clone(),
                duration_ms = started.elapsed().as_millis() as u64
            );
            return Self::passive(err);
        }

        // a failed load leaves write-through off so unread rows survive
        match durable.load_all().await {
            Ok(snapshot) if !snapshot.is_empty() => {
                tracing::debug!(
                    exercise_count = snapshot.exercises.len(),
                    "replacing in-memory state with durable contents"
                );
                store.replace(snapshot);
            }
            Ok(_) => {}
            Err(err) => {
                log_op_error!(
                    "load_all",
                    err.clone(),
                    duration_ms = started.elapsed().as_millis() as u64
                );
                return Self::passive(err);
            }
        }

        let write_through = Arc::new(WriteThrough {
            durable,
            runtime: Handle::current(),
            next_generation: AtomicU64::new(0),
            written: tokio::sync::Mutex::new(0),
            in_flight: Mutex::new(Vec::new()),
        });
        let observer = Arc::clone(&write_through);
        let subscription = store.subscribe(move |snapshot| observer.schedule(snapshot.clone()));

        log_op_end!(
            "sync_startup",
            duration_ms = started.elapsed().as_millis() as u64
        );

        Self {
            status: SyncStatus {
                ready: true,
                error: None,
            },
            write_through: Some(write_through),
            _subscription: Some(subscription),
        }
    }

    fn passive(err: ExError) -> Self {
        Self {
            status: SyncStatus {
                ready: true,
                error: Some(err),
            },
            write_through: None,
            _subscription: None,
        }
    }

    pub fn status(&self) -> &SyncStatus {
        &self.status
    }

    /// True when mutations are being written through to durable storage
    pub fn is_active(&self) -> bool {
        self.write_through.is_some()
    }

    /// Wait until every save scheduled so far has resolved
    pub async fn flush(&self) {
        if let Some(write_through) = &self.write_through {
            write_through.flush().await;
        }
    }
}

impl std::fmt::Debug for SyncBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncBridge")
            .field("status", &self.status)
            .field("active", &self.is_active())
            .finish()
    }
}
