use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::entities::AnonymousSessionGrant;
use crate::domain::ports::{AnonymousSessionApi, Clock, KeyValueStore};

pub(crate) type SlotTable = Arc<Mutex<HashMap<String, String>>>;

// Shared fixed time source for deterministic use-case tests.
pub(crate) struct FixedClock(pub(crate) u64);

impl Clock for FixedClock {
    fn now_epoch_millis(&self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub get: bool,
    pub set: bool,
    pub remove: bool,
}

#[derive(Clone)]
pub(crate) struct RecordingStorage {
    slots: SlotTable,
    failures: FailureFlags,
}

impl RecordingStorage {
    pub(crate) fn new() -> Self {
        Self {
            slots: Arc::new(Mutex::new(HashMap::new())),
            failures: FailureFlags::default(),
        }
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn insert_test_value(&self, key: impl Into<String>, value: impl Into<String>) {
        let mut guard = self.slots.lock().expect("slots mutex poisoned");
        guard.insert(key.into(), value.into());
    }

    pub(crate) fn get_test_value(&self, key: &str) -> Option<String> {
        let guard = self.slots.lock().expect("slots mutex poisoned");
        guard.get(key).cloned()
    }
}

impl KeyValueStore for RecordingStorage {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        if self.failures.get {
            return Err("get failed".to_string());
        }

        let guard = self.slots.lock().expect("slots mutex poisoned");
        Ok(guard.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        if self.failures.set {
            return Err("set failed".to_string());
        }

        let mut guard = self.slots.lock().expect("slots mutex poisoned");
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        if self.failures.remove {
            return Err("remove failed".to_string());
        }

        let mut guard = self.slots.lock().expect("slots mutex poisoned");
        guard.remove(key);
        Ok(())
    }
}

// Backend double that replays one canned answer and records each call's
// `force_new` flag.
#[derive(Clone)]
pub(crate) struct ScriptedApi {
    response: Result<AnonymousSessionGrant, String>,
    calls: Arc<Mutex<Vec<bool>>>,
}

impl ScriptedApi {
    pub(crate) fn answering(grant: AnonymousSessionGrant) -> Self {
        Self {
            response: Ok(grant),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn failing(message: impl Into<String>) -> Self {
        Self {
            response: Err(message.into()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn recorded_calls(&self) -> Vec<bool> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }
}

#[async_trait]
impl AnonymousSessionApi for ScriptedApi {
    async fn request_anonymous_session(
        &self,
        force_new: bool,
    ) -> Result<AnonymousSessionGrant, Box<dyn std::error::Error + Send + Sync>> {
        self.calls
            .lock()
            .expect("calls mutex poisoned")
            .push(force_new);

        match &self.response {
            Ok(grant) => Ok(grant.clone()),
            Err(message) => Err(message.clone().into()),
        }
    }
}
