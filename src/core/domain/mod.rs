//! Domain types.
//!
//! Typed values passed between the resolver, the secret store and the
//! file writer.

mod payload;
mod sync;

pub use payload::Payload;
pub use sync::{SyncConfig, SyncReport};
