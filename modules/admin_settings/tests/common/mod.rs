//! Common test utilities: mock repository, recording notifier, fixtures
#![allow(dead_code)]

use admin_settings::api::native::NativeClient;
use admin_settings::domain::{Notification, Notifier, Service, SettingsRepository};
use admin_settings::SettingsApi;
use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{Notify, Semaphore};

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

/// In-memory repository with failure injection and a write gate
#[derive(Default)]
pub struct MockSettingsRepo {
    data: RwLock<HashMap<String, Value>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
    gate: Mutex<Option<Arc<Semaphore>>>,
    write_started: Arc<Notify>,
}

impl MockSettingsRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Raw stored value, bypassing defaults
    pub fn stored(&self, key: &str) -> Option<Value> {
        self.data.read().get(key).cloned()
    }

    /// Seed a value without going through validation
    pub fn seed(&self, key: &str, value: Value) {
        self.data.write().insert(key.to_string(), value);
    }

    /// Park every following write until a permit is released on the returned semaphore
    pub fn hold_writes(&self) -> Arc<Semaphore> {
        let gate = Arc::new(Semaphore::new(0));
        *self.gate.lock() = Some(gate.clone());
        gate
    }

    /// Resolves once a write has reached the repository
    pub async fn wait_for_write(&self) {
        self.write_started.notified().await;
    }
}

#[async_trait]
impl SettingsRepository for MockSettingsRepo {
    async fn read(&self, key: &str) -> anyhow::Result<Option<Value>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            anyhow::bail!("storage unavailable");
        }
        Ok(self.data.read().get(key).cloned())
    }

    async fn write(&self, key: &str, value: &Value) -> anyhow::Result<()> {
        self.write_started.notify_one();

        let gate = self.gate.lock().clone();
        if let Some(gate) = gate {
            gate.acquire().await?.forget();
        }

        if self.fail_writes.load(Ordering::SeqCst) {
            anyhow::bail!("quota exceeded");
        }
        self.data.write().insert(key.to_string(), value.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Notifier that keeps every notification for inspection
#[derive(Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<Notification> {
        self.seen.lock().clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.seen.lock().last().cloned()
    }

    pub fn destructive(&self) -> Vec<Notification> {
        self.seen
            .lock()
            .iter()
            .filter(|n| n.is_destructive())
            .cloned()
            .collect()
    }

    pub fn clear(&self) {
        self.seen.lock().clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().push(notification);
    }
}

pub struct Harness {
    pub service: Arc<Service>,
    pub client: Arc<dyn SettingsApi>,
    pub repo: Arc<MockSettingsRepo>,
    pub notifier: Arc<RecordingNotifier>,
}

pub fn create_harness() -> Harness {
    let repo = Arc::new(MockSettingsRepo::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let service = Arc::new(Service::new(repo.clone(), notifier.clone()));
    let client: Arc<dyn SettingsApi> = Arc::new(NativeClient::new(service.clone()));
    Harness {
        service,
        client,
        repo,
        notifier,
    }
}
