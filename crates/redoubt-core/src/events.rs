//! Events emitted by the simulation for the audio collaborator.

use serde::{Deserialize, Serialize};

/// Audio events, forwarded fire-and-forget the moment they occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A volley left the crossbow.
    Fire,
    /// A bolt struck a raider, or a raider struck the gate.
    Hit,
    /// A raider died.
    Death,
    /// A run started or a pickup was collected.
    Start,
}
