//! SessionResolver - coalesced, retrying resolution of actor profiles.
//!
//! Maps an opaque actor identity to a resolved `Profile` under concurrent
//! callers:
//!
//! - **Coalescing**: all callers that ask for the same actor while a
//!   resolution is in flight await the same shared future; the directory
//!   observes at most one outstanding fetch per actor at any instant.
//! - **Bounded retry**: transient directory failures are retried once
//!   (configurable); only the exhausted budget unwinds to the caller as
//!   `NetworkError`.
//! - **No result caching**: the in-flight marker is cleared in the same
//!   critical section that publishes the outcome, so a sequential second
//!   call always performs a fresh fetch.
//! - **Live updates**: out-of-band pushes land on a per-actor watch
//!   channel. A push is not ordered against an in-flight fetch; whichever
//!   write lands last defines the observed state, and subscribers must
//!   treat it as best known state, not a strictly ordered log.
//!
//! The in-flight cache is owned by the resolver instance, not a module
//! global, so independent resolvers (one per test, one per process) never
//! cross-contaminate.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt, Shared};
use thiserror::Error;
use tokio::sync::watch;

use crate::domain::identity::Profile;
use crate::ports::ProfileDirectory;

/// Default number of internal retries for transient directory failures.
const DEFAULT_RETRY_BUDGET: u32 = 1;

/// Default pause before a retry attempt.
const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(100);

/// Terminal outcomes of a failed resolution.
///
/// These are distinguished values, not exceptions: `NotFound` tells the
/// caller to invalidate the actor's session entirely (never silently
/// retry), while `NetworkError` is recoverable and the caller may prompt
/// for a retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The actor's identity is valid but no profile row exists.
    #[error("No profile exists for this actor")]
    NotFound,

    /// The directory stayed unreachable after exhausting the retry budget.
    #[error("Profile directory unreachable after retrying")]
    NetworkError,
}

type Resolution = Result<Profile, SessionError>;
type SharedResolution = Shared<BoxFuture<'static, Resolution>>;

/// Per-actor shared state: the in-flight fetch (if any) and the channel
/// carrying best-known profile state.
struct ActorEntry {
    in_flight: Option<SharedResolution>,
    state: watch::Sender<Option<Profile>>,
}

impl ActorEntry {
    fn new() -> Self {
        let (state, _) = watch::channel(None);
        Self {
            in_flight: None,
            state,
        }
    }
}

/// Resolves actor identities to profiles through the directory port.
pub struct SessionResolver {
    directory: Arc<dyn ProfileDirectory>,
    actors: Arc<Mutex<HashMap<String, ActorEntry>>>,
    retry_budget: u32,
    retry_delay: Duration,
}

impl SessionResolver {
    /// Creates a resolver with the default retry policy (1 retry, 100ms
    /// pause).
    pub fn new(directory: Arc<dyn ProfileDirectory>) -> Self {
        Self::with_retry_policy(directory, DEFAULT_RETRY_BUDGET, DEFAULT_RETRY_DELAY)
    }

    /// Creates a resolver with an explicit retry policy.
    pub fn with_retry_policy(
        directory: Arc<dyn ProfileDirectory>,
        retry_budget: u32,
        retry_delay: Duration,
    ) -> Self {
        Self {
            directory,
            actors: Arc::new(Mutex::new(HashMap::new())),
            retry_budget,
            retry_delay,
        }
    }

    /// Resolves the profile for an actor.
    ///
    /// If a resolution for this exact actor is already in flight, the call
    /// awaits that same pending result instead of starting a second fetch.
    /// For N concurrent calls issued while nothing is in flight, the
    /// directory is invoked exactly once and all N callers observe the
    /// same outcome.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub async fn resolve(&self, actor_id: &str) -> Resolution {
        if actor_id.is_empty() {
            tracing::warn!("resolve called with empty actor id");
            return Err(SessionError::NotFound);
        }

        let resolution = {
            let mut actors = self
                .actors
                .lock()
                .expect("SessionResolver: actors lock poisoned");
            let entry = actors
                .entry(actor_id.to_string())
                .or_insert_with(ActorEntry::new);

            if let Some(in_flight) = &entry.in_flight {
                tracing::debug!("Coalescing into in-flight resolution for {}", actor_id);
                in_flight.clone()
            } else {
                let fetch = Self::run_fetch(
                    Arc::clone(&self.directory),
                    Arc::clone(&self.actors),
                    actor_id.to_string(),
                    self.retry_budget,
                    self.retry_delay,
                )
                .boxed()
                .shared();
                entry.in_flight = Some(fetch.clone());
                fetch
            }
        };

        resolution.await
    }

    /// Applies an out-of-band profile update (e.g. a pub/sub push).
    ///
    /// The push is not ordered against any in-flight fetch for the same
    /// actor: whichever write reaches the state channel last wins. Callers
    /// already awaiting `resolve` still receive the fetch outcome.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn apply_push(&self, profile: Profile) {
        let mut actors = self
            .actors
            .lock()
            .expect("SessionResolver: actors lock poisoned");
        let entry = actors
            .entry(profile.user_id.as_str().to_string())
            .or_insert_with(ActorEntry::new);
        tracing::debug!("Applying live profile update for {}", profile.user_id);
        entry.state.send_replace(Some(profile));
    }

    /// Discards the published state for an actor (token invalidation).
    ///
    /// The next `resolve` performs a fresh fetch; there is no stale-cache
    /// serve to invalidate beyond the state channel.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn invalidate(&self, actor_id: &str) {
        let mut actors = self
            .actors
            .lock()
            .expect("SessionResolver: actors lock poisoned");
        if let Some(entry) = actors.get_mut(actor_id) {
            entry.state.send_replace(None);
        }
    }

    /// Subscribes to live best-known profile state for an actor.
    ///
    /// The channel carries `None` until a resolution succeeds, and is
    /// reset to `None` when the actor turns out to have no profile row.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn subscribe(&self, actor_id: &str) -> watch::Receiver<Option<Profile>> {
        let mut actors = self
            .actors
            .lock()
            .expect("SessionResolver: actors lock poisoned");
        let entry = actors
            .entry(actor_id.to_string())
            .or_insert_with(ActorEntry::new);
        entry.state.subscribe()
    }

    /// Returns the current best-known profile state for an actor.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn best_known(&self, actor_id: &str) -> Option<Profile> {
        let actors = self
            .actors
            .lock()
            .expect("SessionResolver: actors lock poisoned");
        actors
            .get(actor_id)
            .and_then(|entry| entry.state.borrow().clone())
    }

    /// Performs the directory fetch with bounded retry, then clears the
    /// in-flight marker and publishes the outcome in a single critical
    /// section. A completed fetch can therefore never coalesce a later
    /// call into an already-resolved result.
    async fn run_fetch(
        directory: Arc<dyn ProfileDirectory>,
        actors: Arc<Mutex<HashMap<String, ActorEntry>>>,
        actor_id: String,
        retry_budget: u32,
        retry_delay: Duration,
    ) -> Resolution {
        let mut attempts_left = retry_budget + 1;
        let outcome = loop {
            attempts_left -= 1;
            match directory.fetch_profile(&actor_id).await {
                Ok(Some(profile)) => break Ok(profile),
                Ok(None) => {
                    tracing::warn!("No profile row for actor {}, session must end", actor_id);
                    break Err(SessionError::NotFound);
                }
                Err(err) if err.is_transient() && attempts_left > 0 => {
                    tracing::debug!("Transient directory failure for {}: {}", actor_id, err);
                    if !retry_delay.is_zero() {
                        tokio::time::sleep(retry_delay).await;
                    }
                }
                Err(err) => {
                    tracing::warn!("Directory fetch failed for {}: {}", actor_id, err);
                    break Err(SessionError::NetworkError);
                }
            }
        };

        let mut actors = actors
            .lock()
            .expect("SessionResolver: actors lock poisoned");
        if let Some(entry) = actors.get_mut(&actor_id) {
            entry.in_flight = None;
            match &outcome {
                Ok(profile) => {
                    entry.state.send_replace(Some(profile.clone()));
                }
                // An orphaned account forces re-authentication; never leave
                // stale state behind.
                Err(SessionError::NotFound) => {
                    entry.state.send_replace(None);
                }
                // A network failure says nothing about the profile itself.
                Err(SessionError::NetworkError) => {}
            }
        }

        outcome
    }
}
