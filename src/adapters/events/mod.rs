//! Event adapters for out-of-band profile updates.

mod profile_listener;

pub use profile_listener::{ProfileUpdateListener, PROFILE_UPDATES_CHANNEL};
