//! Entity module — identifiers that components attach to.
//!
//! An entity is only a key. Components (cameras, ...) live in their own
//! managers and are looked up by entity.

mod entity_manager;

pub use entity_manager::{Entity, EntityManager};
