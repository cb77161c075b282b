//! Server synchronization domain.
//!
//! - [`remote::RemotePost`]: one item of the remote batch
//! - [`state::SyncState`]: the Idle/Syncing state machine
//! - [`state::SyncReport`]: the outcome of a completed sync

pub mod remote;
pub mod state;
