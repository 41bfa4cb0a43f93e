/// Camera manager — per-entity camera storage.
///
/// Cameras are components: at most one per entity, stored in a slotmap
/// SecondaryMap keyed by `Entity`. The SecondaryMap does not know which
/// entities are alive: a destroyed entity keeps its camera until
/// `destroy_camera` or `retain_alive` removes it.

use slotmap::{Key, SecondaryMap};
use crate::entity::{Entity, EntityManager};
use crate::error::{Error, Result};
use super::camera::Camera;
use super::projection::Fov;

/// Lookup of the live camera attached to an entity.
///
/// Implemented by `CameraManager`; `CameraComponent` forwards every call
/// through this trait so it can be backed by any camera store.
pub trait CameraResolver {
    /// Camera attached to `entity`, if any
    fn resolve(&self, entity: Entity) -> Option<&Camera>;

    /// Mutable camera attached to `entity`, if any
    fn resolve_mut(&mut self, entity: Entity) -> Option<&mut Camera>;
}

/// Initial state of a newly created camera.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    /// Field of view in degrees
    pub fov_in_degrees: f64,
    /// Axis the field of view is measured along
    pub fov_direction: Fov,
    /// Width / height
    pub aspect: f64,
    /// Near plane distance
    pub near: f64,
    /// Far plane distance (culling)
    pub far: f64,
    /// Aperture in f-stops
    pub aperture: f32,
    /// Shutter speed in seconds
    pub shutter_speed: f32,
    /// Sensitivity in ISO
    pub sensitivity: f32,
    /// Focus distance in world units
    pub focus_distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_in_degrees: 45.0,
            fov_direction: Fov::Vertical,
            aspect: 1.0,
            near: 0.1,
            far: 100.0,
            aperture: 16.0,
            shutter_speed: 1.0 / 125.0,
            sensitivity: 100.0,
            focus_distance: Camera::DEFAULT_FOCUS_DISTANCE,
        }
    }
}

impl CameraConfig {
    fn build(&self) -> Camera {
        let mut camera = Camera::new();
        camera.set_projection_fov(self.fov_in_degrees, self.aspect, self.near, self.far, self.fov_direction);
        camera.set_exposure(self.aperture, self.shutter_speed, self.sensitivity);
        camera.set_focus_distance(self.focus_distance);
        camera
    }
}

/// Owns every camera component.
pub struct CameraManager {
    cameras: SecondaryMap<Entity, Camera>,
}

impl CameraManager {
    /// Create a new empty camera manager
    pub fn new() -> Self {
        Self {
            cameras: SecondaryMap::new(),
        }
    }

    /// Attach a camera with the default configuration to `entity`
    ///
    /// # Errors
    ///
    /// - `InvalidEntity` if the entity is null or its key is stale
    /// - `ComponentAlreadyExists` if the entity already has a camera
    pub fn create_camera(&mut self, entity: Entity) -> Result<&mut Camera> {
        self.create_camera_with_config(entity, &CameraConfig::default())
    }

    /// Attach a camera built from `config` to `entity`
    pub fn create_camera_with_config(&mut self, entity: Entity, config: &CameraConfig) -> Result<&mut Camera> {
        if entity.is_null() {
            crate::engine_error!("galaxy3d::CameraManager", "Cannot attach a camera to the null entity");
            return Err(Error::InvalidEntity("null entity".to_string()));
        }
        if self.cameras.contains_key(entity) {
            crate::engine_error!("galaxy3d::CameraManager", "Entity {:?} already has a camera", entity);
            return Err(Error::ComponentAlreadyExists(format!("camera on entity {:?}", entity)));
        }

        self.cameras.insert(entity, config.build());

        // SecondaryMap ignores keys older than the slot's current version
        match self.cameras.get_mut(entity) {
            Some(camera) => {
                crate::engine_debug!("galaxy3d::CameraManager", "Camera created for entity {:?}", entity);
                Ok(camera)
            }
            None => {
                crate::engine_error!("galaxy3d::CameraManager", "Entity {:?} is stale", entity);
                Err(Error::InvalidEntity(format!("stale entity {:?}", entity)))
            }
        }
    }

    /// Detach and return the camera of `entity`
    pub fn destroy_camera(&mut self, entity: Entity) -> Option<Camera> {
        let removed = self.cameras.remove(entity);
        if removed.is_some() {
            crate::engine_debug!("galaxy3d::CameraManager", "Camera destroyed for entity {:?}", entity);
        }
        removed
    }

    /// Drop the cameras of entities no longer alive in `entities`.
    ///
    /// Call after destroying entities. Returns the number of cameras removed.
    pub fn retain_alive(&mut self, entities: &EntityManager) -> usize {
        let before = self.cameras.len();
        self.cameras.retain(|entity, _| entities.is_alive(entity));
        let removed = before - self.cameras.len();
        if removed > 0 {
            crate::engine_debug!("galaxy3d::CameraManager", "Removed {} camera(s) of destroyed entities", removed);
        }
        removed
    }

    /// Whether `entity` has a camera
    pub fn has_camera(&self, entity: Entity) -> bool {
        self.cameras.contains_key(entity)
    }

    /// Camera of `entity`
    ///
    /// # Errors
    ///
    /// `ComponentNotFound` if the entity has no camera
    pub fn camera(&self, entity: Entity) -> Result<&Camera> {
        self.cameras.get(entity)
            .ok_or_else(|| Error::ComponentNotFound(format!("no camera on entity {:?}", entity)))
    }

    /// Mutable camera of `entity`
    pub fn camera_mut(&mut self, entity: Entity) -> Result<&mut Camera> {
        self.cameras.get_mut(entity)
            .ok_or_else(|| Error::ComponentNotFound(format!("no camera on entity {:?}", entity)))
    }

    /// Number of cameras
    pub fn camera_count(&self) -> usize {
        self.cameras.len()
    }

    /// Entities that have a camera
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.cameras.keys()
    }

    /// Remove all cameras
    pub fn clear(&mut self) {
        self.cameras.clear();
    }
}

impl Default for CameraManager {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraResolver for CameraManager {
    fn resolve(&self, entity: Entity) -> Option<&Camera> {
        self.cameras.get(entity)
    }

    fn resolve_mut(&mut self, entity: Entity) -> Option<&mut Camera> {
        self.cameras.get_mut(entity)
    }
}

#[cfg(test)]
#[path = "camera_manager_tests.rs"]
mod tests;
