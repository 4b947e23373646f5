// SPDX-License-Identifier: Apache-2.0

use super::{DocumentStore, StoreError};
use async_trait::async_trait;
use folio_model::{ContactMessage, PortfolioProfile};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

/// In-memory store for tests. Liveness is a flippable flag, so connected
/// and disconnected states are simulated deterministically; reads and
/// writes can be made to fail or stall on demand.
pub struct FakeStore {
    pub live: AtomicBool,
    pub profiles: Mutex<Vec<PortfolioProfile>>,
    pub contacts: Mutex<Vec<ContactMessage>>,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
    pub insert_calls: AtomicU64,
    pub slow_read: bool,
    pub slow_read_delay: Duration,
}

impl Default for FakeStore {
    fn default() -> Self {
        Self {
            live: AtomicBool::new(true),
            profiles: Mutex::new(Vec::new()),
            contacts: Mutex::new(Vec::new()),
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
            insert_calls: AtomicU64::new(0),
            slow_read: false,
            slow_read_delay: Duration::from_millis(0),
        }
    }
}

impl FakeStore {
    #[must_use]
    pub fn disconnected() -> Self {
        Self {
            live: AtomicBool::new(false),
            ..Self::default()
        }
    }

    pub fn set_live(&self, live: bool) {
        self.live.store(live, Ordering::Relaxed);
    }

    async fn stall(&self) {
        if self.slow_read {
            let delay = if self.slow_read_delay.is_zero() {
                Duration::from_millis(200)
            } else {
                self.slow_read_delay
            };
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl DocumentStore for FakeStore {
    fn backend_tag(&self) -> &'static str {
        "fake"
    }

    async fn is_live(&self) -> bool {
        self.live.load(Ordering::Relaxed)
    }

    async fn latest_profile(&self) -> Result<Option<PortfolioProfile>, StoreError> {
        self.stall().await;
        if self.fail_reads.load(Ordering::Relaxed) {
            return Err(StoreError::Backend("injected read failure".to_string()));
        }
        Ok(self.profiles.lock().await.last().cloned())
    }

    async fn insert_contact(&self, contact: &ContactMessage) -> Result<(), StoreError> {
        self.insert_calls.fetch_add(1, Ordering::Relaxed);
        if self.fail_writes.load(Ordering::Relaxed) {
            return Err(StoreError::Backend("injected write failure".to_string()));
        }
        self.contacts.lock().await.push(contact.clone());
        Ok(())
    }

    async fn recent_contacts(&self, limit: usize) -> Result<Vec<ContactMessage>, StoreError> {
        self.stall().await;
        if self.fail_reads.load(Ordering::Relaxed) {
            return Err(StoreError::Backend("injected read failure".to_string()));
        }
        let contacts = self.contacts.lock().await;
        Ok(contacts.iter().rev().take(limit).cloned().collect())
    }
}
