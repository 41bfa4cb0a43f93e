/// Galaxy3D Engine - Singleton context for the camera subsystem
///
/// Holds the process-wide logger and the camera manager that camera
/// components resolve their entities against. Storage is thread-safe
/// (OnceLock + RwLock); camera access itself goes through a Mutex.

use std::sync::{OnceLock, RwLock, Arc, Mutex};
use std::time::SystemTime;
use crate::camera::CameraManager;
use crate::error::{Result, Error};
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Global engine state storage
static ENGINE_STATE: OnceLock<EngineState> = OnceLock::new();

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Internal state structure holding all engine singletons
struct EngineState {
    /// Camera manager singleton
    camera_manager: RwLock<Option<Arc<Mutex<CameraManager>>>>,
}

impl EngineState {
    fn new() -> Self {
        Self {
            camera_manager: RwLock::new(None),
        }
    }
}

fn logger() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger::default())))
}

// ===== PUBLIC API =====

/// Main engine singleton manager
///
/// # Example
///
/// ```no_run
/// use galaxy_3d_camera::galaxy3d::{Engine, CameraComponent, EntityManager};
///
/// Engine::initialize()?;
/// Engine::create_camera_manager()?;
///
/// let mut entities = EntityManager::new();
/// let entity = entities.create();
///
/// let manager = Engine::camera_manager()?;
/// let mut cameras = manager.lock().unwrap();
/// cameras.create_camera(entity)?;
///
/// let camera = CameraComponent::new(entity);
/// camera.set_projection_fov(&mut *cameras, 45.0, 16.0 / 9.0, 0.1, 100.0, Default::default());
///
/// Engine::shutdown();
/// # Ok::<(), galaxy_3d_camera::galaxy3d::Error>(())
/// ```
pub struct Engine;

impl Engine {
    /// Log errors before returning them (internal use)
    fn log_and_return_error(error: Error) -> Error {
        match &error {
            Error::InitializationFailed(msg) => {
                crate::engine_error!("galaxy3d::Engine", "Initialization failed: {}", msg);
            }
            _ => {
                crate::engine_error!("galaxy3d::Engine", "Engine error: {}", error);
            }
        }
        error
    }

    fn state() -> Result<&'static EngineState> {
        ENGINE_STATE.get()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("Engine not initialized. Call Engine::initialize() first.".to_string())
            ))
    }

    /// Initialize the engine
    ///
    /// Idempotent. Must be called before creating the camera manager.
    pub fn initialize() -> Result<()> {
        ENGINE_STATE.get_or_init(EngineState::new);
        Ok(())
    }

    /// Destroy all singletons
    ///
    /// The engine stays initialized; a new camera manager can be created
    /// afterwards. Outstanding `Arc`s to the old manager remain valid.
    pub fn shutdown() {
        if let Some(state) = ENGINE_STATE.get() {
            if let Ok(mut cm) = state.camera_manager.write() {
                *cm = None;
            }
        }
    }

    // ===== CAMERA MANAGER API =====

    /// Create and register the camera manager singleton
    ///
    /// # Errors
    ///
    /// - The engine is not initialized
    /// - A camera manager already exists
    /// - The lock is poisoned
    pub fn create_camera_manager() -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.camera_manager.write()
            .map_err(|_| crate::engine_err!("galaxy3d::Engine", "CameraManager lock poisoned"))?;

        if lock.is_some() {
            return Err(Self::log_and_return_error(
                Error::InitializationFailed("CameraManager already exists. Call Engine::destroy_camera_manager() first.".to_string())
            ));
        }

        *lock = Some(Arc::new(Mutex::new(CameraManager::new())));

        crate::engine_info!("galaxy3d::Engine", "CameraManager singleton created successfully");

        Ok(())
    }

    /// Get the camera manager singleton
    ///
    /// # Errors
    ///
    /// - The engine is not initialized
    /// - The camera manager has not been created
    pub fn camera_manager() -> Result<Arc<Mutex<CameraManager>>> {
        let state = Self::state()?;

        let lock = state.camera_manager.read()
            .map_err(|_| crate::engine_err!("galaxy3d::Engine", "CameraManager lock poisoned"))?;

        lock.clone()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("CameraManager not created. Call Engine::create_camera_manager() first.".to_string())
            ))
    }

    /// Destroy the camera manager singleton
    ///
    /// # Errors
    ///
    /// Returns an error if the engine is not initialized
    pub fn destroy_camera_manager() -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.camera_manager.write()
            .map_err(|_| crate::engine_err!("galaxy3d::Engine", "CameraManager lock poisoned"))?;

        *lock = None;

        crate::engine_info!("galaxy3d::Engine", "CameraManager singleton destroyed");

        Ok(())
    }

    // ===== LOGGING API =====

    /// Replace the logger (file logger, test capture, etc.)
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = self::logger().write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset the logger to `DefaultLogger::default()`
    pub fn reset_logger() {
        if let Ok(mut lock) = logger().write() {
            *lock = Box::new(DefaultLogger::default());
        }
    }

    /// Log a message without file:line (used by engine_* macros)
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        if let Ok(lock) = logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Log a message with file:line (used by engine_error!)
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        if let Ok(lock) = logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
