//! Redis pub/sub listener for live profile updates.
//!
//! When account data changes out-of-band (an admin renames a user, a role
//! changes), the identity service publishes the full updated profile row
//! on a Redis channel. This listener deserializes each payload and pushes
//! it into the session resolver, whose state channel applies last-write-
//! wins against any in-flight fetch for the same actor.
//!
//! Malformed payloads are logged and skipped; one bad message must not
//! stop live updates for everyone else.

use std::sync::Arc;

use futures::StreamExt;

use crate::application::SessionResolver;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::identity::Profile;

/// Default channel the identity service publishes profile updates on.
pub const PROFILE_UPDATES_CHANNEL: &str = "profile-updates";

/// Subscribes to profile updates and feeds them into a resolver.
pub struct ProfileUpdateListener {
    client: redis::Client,
    channel: String,
    resolver: Arc<SessionResolver>,
}

impl ProfileUpdateListener {
    /// Creates a listener on the default channel.
    pub fn new(client: redis::Client, resolver: Arc<SessionResolver>) -> Self {
        Self::with_channel(client, PROFILE_UPDATES_CHANNEL, resolver)
    }

    /// Creates a listener on a custom channel.
    pub fn with_channel(
        client: redis::Client,
        channel: impl Into<String>,
        resolver: Arc<SessionResolver>,
    ) -> Self {
        Self {
            client,
            channel: channel.into(),
            resolver,
        }
    }

    /// Runs the subscription loop until the connection drops.
    ///
    /// Callers typically spawn this on a background task and restart it
    /// with their own backoff when it returns.
    pub async fn run(self) -> Result<(), DomainError> {
        let conn = self
            .client
            .get_async_connection()
            .await
            .map_err(|e| pubsub_error("Failed to connect for pub/sub", e))?;
        let mut pubsub = conn.into_pubsub();
        pubsub
            .subscribe(&self.channel)
            .await
            .map_err(|e| pubsub_error("Failed to subscribe", e))?;

        tracing::info!("Listening for profile updates on '{}'", self.channel);
        let mut messages = pubsub.on_message();
        while let Some(message) = messages.next().await {
            let payload: String = match message.get_payload() {
                Ok(payload) => payload,
                Err(e) => {
                    tracing::warn!("Unreadable profile update payload: {}", e);
                    continue;
                }
            };
            match serde_json::from_str::<Profile>(&payload) {
                Ok(profile) => {
                    tracing::debug!("Live profile update for {}", profile.user_id);
                    self.resolver.apply_push(profile);
                }
                Err(e) => {
                    tracing::warn!("Malformed profile update payload: {}", e);
                }
            }
        }

        tracing::warn!("Profile update subscription on '{}' ended", self.channel);
        Ok(())
    }
}

fn pubsub_error(context: &str, e: redis::RedisError) -> DomainError {
    DomainError::new(ErrorCode::PubSubError, format!("{}: {}", context, e))
}
