//! In-memory profile directory for testing.
//!
//! Stores profiles directly and optionally scripts per-actor failure
//! sequences, so resolver tests can exercise retry classification and
//! coalescing without a real backend. Every fetch is counted, which is how
//! tests assert the "exactly one fetch for N concurrent callers" and
//! "fresh fetch per sequential call" guarantees.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::identity::Profile;
use crate::ports::{DirectoryError, ProfileDirectory};

/// A single scripted fetch outcome.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// The fetch succeeds with this profile.
    Success(Profile),
    /// The actor is valid but has no profile row.
    NoRow,
    /// The fetch times out (transient).
    Timeout,
    /// The directory is unreachable (transient).
    Unavailable(String),
    /// The directory refuses the request (terminal).
    Rejected(String),
}

/// Shared per-actor fetch counter, cloneable out of the directory so tests
/// keep counting after handing the adapter to a resolver.
#[derive(Debug, Clone, Default)]
pub struct FetchCounter {
    counts: Arc<Mutex<HashMap<String, usize>>>,
}

impl FetchCounter {
    /// Number of fetches observed for an actor.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn count(&self, actor_id: &str) -> usize {
        self.counts
            .lock()
            .expect("FetchCounter: lock poisoned")
            .get(actor_id)
            .copied()
            .unwrap_or(0)
    }

    fn record(&self, actor_id: &str) {
        *self
            .counts
            .lock()
            .expect("FetchCounter: lock poisoned")
            .entry(actor_id.to_string())
            .or_insert(0) += 1;
    }
}

/// In-memory implementation of `ProfileDirectory`.
#[derive(Default)]
pub struct InMemoryDirectory {
    profiles: Mutex<HashMap<String, Profile>>,
    scripts: Mutex<HashMap<String, VecDeque<FetchOutcome>>>,
    counter: FetchCounter,
    /// Artificial latency before answering; lets tests hold a fetch in
    /// flight long enough to issue concurrent coalescing calls.
    delay: Duration,
}

impl InMemoryDirectory {
    /// Creates an empty directory (every fetch returns no row).
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a profile that every fetch for its actor returns.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn with_profile(self, profile: Profile) -> Self {
        self.profiles
            .lock()
            .expect("InMemoryDirectory: profiles lock poisoned")
            .insert(profile.user_id.as_str().to_string(), profile);
        self
    }

    /// Scripts a sequence of outcomes for an actor, consumed one per
    /// fetch. When the script runs out, fetches fall back to the stored
    /// profile (or no row).
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn with_script(self, actor_id: impl Into<String>, outcomes: Vec<FetchOutcome>) -> Self {
        self.scripts
            .lock()
            .expect("InMemoryDirectory: scripts lock poisoned")
            .insert(actor_id.into(), outcomes.into());
        self
    }

    /// Adds artificial latency to every fetch.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns a handle to the fetch counter.
    pub fn fetch_counter(&self) -> FetchCounter {
        self.counter.clone()
    }

    fn next_outcome(&self, actor_id: &str) -> FetchOutcome {
        let mut scripts = self
            .scripts
            .lock()
            .expect("InMemoryDirectory: scripts lock poisoned");
        if let Some(script) = scripts.get_mut(actor_id) {
            if let Some(outcome) = script.pop_front() {
                return outcome;
            }
        }
        drop(scripts);

        let profiles = self
            .profiles
            .lock()
            .expect("InMemoryDirectory: profiles lock poisoned");
        match profiles.get(actor_id) {
            Some(profile) => FetchOutcome::Success(profile.clone()),
            None => FetchOutcome::NoRow,
        }
    }
}

#[async_trait]
impl ProfileDirectory for InMemoryDirectory {
    async fn fetch_profile(&self, actor_id: &str) -> Result<Option<Profile>, DirectoryError> {
        self.counter.record(actor_id);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        match self.next_outcome(actor_id) {
            FetchOutcome::Success(profile) => Ok(Some(profile)),
            FetchOutcome::NoRow => Ok(None),
            FetchOutcome::Timeout => Err(DirectoryError::Timeout),
            FetchOutcome::Unavailable(reason) => Err(DirectoryError::Unavailable(reason)),
            FetchOutcome::Rejected(reason) => Err(DirectoryError::Rejected(reason)),
        }
    }
}
