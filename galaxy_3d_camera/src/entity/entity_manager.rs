/// Entity allocation.
///
/// Uses a SlotMap for O(1) create/destroy with versioned keys: a destroyed
/// entity's key never aliases a later one.

use slotmap::{new_key_type, Key, SlotMap};

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable identifier of an entity.
    ///
    /// Keys remain valid until their own entity is destroyed.
    /// `Entity::null()` never refers to a live entity.
    pub struct Entity;
}

/// Creates and destroys entities.
pub struct EntityManager {
    entities: SlotMap<Entity, ()>,
}

impl EntityManager {
    /// Create a new empty entity manager
    pub fn new() -> Self {
        Self {
            entities: SlotMap::with_key(),
        }
    }

    /// Create a new entity
    pub fn create(&mut self) -> Entity {
        self.entities.insert(())
    }

    /// Create `count` entities at once
    pub fn create_many(&mut self, count: usize) -> Vec<Entity> {
        (0..count).map(|_| self.create()).collect()
    }

    /// Destroy an entity. Returns false if it was not alive.
    ///
    /// Components attached to the entity are not touched and keep
    /// resolving through the old key. Remove them with
    /// `CameraManager::destroy_camera` or `CameraManager::retain_alive`.
    pub fn destroy(&mut self, entity: Entity) -> bool {
        self.entities.remove(entity).is_some()
    }

    /// Whether the entity is alive (never true for `Entity::null()`)
    pub fn is_alive(&self, entity: Entity) -> bool {
        !entity.is_null() && self.entities.contains_key(entity)
    }

    /// Number of live entities
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Iterate over all live entities
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.keys()
    }
}

impl Default for EntityManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "entity_manager_tests.rs"]
mod tests;
