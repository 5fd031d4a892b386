use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use gymtrack_core::errors::{ExError, ExErrorKind};
use gymtrack_core::model::Snapshot;
use gymtrack_store::DurableStore;

/// In-memory `DurableStore` with switchable failures
#[derive(Default)]
pub struct FakeDurableStore {
    fail_initialize: bool,
    fail_load: bool,
    /// Sleep before writing, to force overlapping saves
    save_delay: Option<Duration>,
    contents: Mutex<Snapshot>,
    saves: AtomicUsize,
}

#[allow(dead_code)]
impl FakeDurableStore {
    pub fn with_contents(snapshot: Snapshot) -> Self {
        Self {
            contents: Mutex::new(snapshot),
            ..Self::default()
        }
    }

    pub fn failing_initialize() -> Self {
        Self {
            fail_initialize: true,
            ..Self::default()
        }
    }

    pub fn failing_load(self) -> Self {
        Self {
            fail_load: true,
            ..self
        }
    }

    pub fn with_save_delay(self, delay: Duration) -> Self {
        Self {
            save_delay: Some(delay),
            ..self
        }
    }

    pub fn contents(&self) -> Snapshot {
        self.contents.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DurableStore for FakeDurableStore {
    async fn initialize(&self) -> gymtrack_store::Result<()> {
        if self.fail_initialize {
            return Err(ExError::new(ExErrorKind::Initialization)
                .with_op("initialize")
                .with_message("structured storage unsupported"));
        }
        Ok(())
    }

    async fn load_all(&self) -> gymtrack_store::Result<Snapshot> {
        if self.fail_load {
            return Err(ExError::new(ExErrorKind::Transaction)
                .with_op("load_all")
                .with_message("read failed"));
        }
        Ok(self.contents())
    }

    async fn save_all(&self, snapshot: Snapshot) -> gymtrack_store::Result<()> {
        if let Some(delay) = self.save_delay {
            tokio::time::sleep(delay).await;
        }
        *self.contents.lock().unwrap() = snapshot;
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
