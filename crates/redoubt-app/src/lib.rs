//! REDOUBT shell.
//!
//! Wires the headless simulation to its external collaborators: the frame
//! driver thread, render and audio sinks, the high-score store, and the
//! command channel any input frontend can feed.

pub mod collaborators;
pub mod game_loop;
pub mod highscore;
pub mod state;

pub use redoubt_core as core;
