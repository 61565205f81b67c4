//! Loading and ordered background saving.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use super::snapshot::Snapshot;
use super::Storage;
use crate::seed::SeedProvider;
use crate::vfs::VirtualFs;

/// Load the filesystem stored under `key`, or the seed.
///
/// Never fails: a missing key, a storage error, unparsable JSON and a
/// structurally corrupt tree all fall back to a fresh seed and are logged.
#[tracing::instrument(level = "debug", skip(storage, seed))]
pub async fn load(storage: &dyn Storage, key: &str, seed: &dyn SeedProvider) -> VirtualFs {
    let fresh = seed.seed();

    let blob = match storage.get(key).await {
        Ok(Some(blob)) => blob,
        Ok(None) => {
            debug!("no stored filesystem, using seed");
            return fresh;
        }
        Err(e) => {
            warn!(error = %e, "failed to read stored filesystem, using seed");
            return fresh;
        }
    };

    let restored = Snapshot::from_json(&blob).and_then(|s| s.restore(fresh.home().to_vec()));
    match restored {
        Ok(fs) => {
            debug!(cwd = %fs.current_path(), "restored filesystem");
            fs
        }
        Err(e) => {
            warn!(error = %e, "stored filesystem is unusable, using seed");
            fresh
        }
    }
}

enum Command {
    Save(String),
    Flush(oneshot::Sender<()>),
}

/// Queues snapshots for a single writer task.
///
/// Saves are applied strictly in submission order. Dropping the persister
/// closes the queue; the writer finishes what is already queued and exits.
#[derive(Debug, Clone)]
pub struct Persister {
    sender: mpsc::UnboundedSender<Command>,
}

impl Persister {
    /// Start the writer task. Must be called from within a tokio runtime.
    pub fn spawn(storage: Arc<dyn Storage>, key: impl Into<String>) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        tokio::spawn(run_writer(storage, key.into(), receiver));
        Self { sender }
    }

    /// Serialize `fs` now and queue it for writing.
    pub fn save(&self, fs: &VirtualFs) {
        let blob = match Snapshot::from(fs).to_json() {
            Ok(blob) => blob,
            Err(e) => {
                warn!(error = %e, "failed to serialize filesystem, save dropped");
                return;
            }
        };
        if self.sender.send(Command::Save(blob)).is_err() {
            warn!("persistence writer has stopped, save dropped");
        }
    }

    /// Wait until every save queued before this call has been applied.
    pub async fn flush(&self) {
        let (done, wait) = oneshot::channel();
        if self.sender.send(Command::Flush(done)).is_ok() {
            let _ = wait.await;
        }
    }
}

async fn run_writer(
    storage: Arc<dyn Storage>,
    key: String,
    mut receiver: mpsc::UnboundedReceiver<Command>,
) {
    while let Some(command) = receiver.recv().await {
        match command {
            Command::Save(blob) => {
                if let Err(e) = storage.set(&key, &blob).await {
                    warn!(error = %e, key = %key, "failed to persist filesystem");
                }
            }
            Command::Flush(done) => {
                let _ = done.send(());
            }
        }
    }
    debug!("persistence writer stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::DefaultSeed;
    use crate::state::{MemoryStorage, StorageError, StorageResult};
    use async_trait::async_trait;

    const KEY: &str = "vfsh-filesystem";

    #[tokio::test]
    async fn load_without_state_uses_seed() {
        let storage = MemoryStorage::new();
        let fs = load(&storage, KEY, &DefaultSeed::default()).await;
        assert_eq!(fs.current_path(), "/home/user");
        assert!(fs.exists("README.md"));
    }

    #[tokio::test]
    async fn load_garbage_uses_seed() {
        let storage = MemoryStorage::with_entry(KEY, "{not json");
        let fs = load(&storage, KEY, &DefaultSeed::default()).await;
        assert!(fs.exists("/home/user/welcome.txt"));
    }

    #[tokio::test]
    async fn saves_apply_in_order() {
        let storage = Arc::new(MemoryStorage::new());
        let persister = Persister::spawn(storage.clone(), KEY);

        let mut fs = DefaultSeed::default().seed();
        for i in 0..10 {
            fs.create_file(&format!("f{i}.txt"), i.to_string()).unwrap();
            persister.save(&fs);
        }
        persister.flush().await;

        let reloaded = load(storage.as_ref(), KEY, &DefaultSeed::default()).await;
        assert_eq!(reloaded.root(), fs.root());
    }

    struct BrokenStorage;

    #[async_trait]
    impl Storage for BrokenStorage {
        async fn get(&self, key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::InvalidKey(key.to_string()))
        }
        async fn set(&self, key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::InvalidKey(key.to_string()))
        }
        async fn remove(&self, _key: &str) -> StorageResult<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn storage_failures_are_swallowed() {
        let storage = Arc::new(BrokenStorage);
        let fs = load(storage.as_ref(), KEY, &DefaultSeed::default()).await;
        let persister = Persister::spawn(storage, KEY);
        persister.save(&fs);
        persister.flush().await;
    }
}
