//! Print document model, transformer and contract validator
//!
//! The pipeline is: domain record -> [`transform`] -> [`validate`] ->
//! dispatch (in `comanda-client`). Documents are built on demand when a
//! print action fires, sent once, and discarded. They are never stored.

pub mod document;
pub mod transform;
pub mod validate;
