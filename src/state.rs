use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::{storage::KeyValueStorage, store::MarketStore};

/// Handle to the single page session. Commands hold the session for their
/// whole run, so each one completes before the next is observed.
#[derive(Clone)]
pub struct AppState {
    session: Arc<Mutex<MarketStore>>,
}

impl AppState {
    pub fn new(store: MarketStore) -> Self {
        Self {
            session: Arc::new(Mutex::new(store)),
        }
    }

    pub fn open(storage: impl KeyValueStorage + 'static) -> Self {
        Self::new(MarketStore::open(storage))
    }

    pub async fn session(&self) -> MutexGuard<'_, MarketStore> {
        self.session.lock().await
    }
}
