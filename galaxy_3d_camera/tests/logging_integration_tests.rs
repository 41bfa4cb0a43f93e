//! Integration tests for Engine logging system
//!
//! These tests verify the logging system functionality, including the
//! messages emitted by camera operations.
//!
//! Run with: cargo test --test logging_integration_tests

use galaxy_3d_camera::galaxy3d::{Engine, CameraComponent, CameraManager, EntityManager, Projection};
use galaxy_3d_camera::galaxy3d::log::{Logger, LogEntry, LogSeverity, DefaultLogger, format_entry};
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_custom_logger() {
    // Create test logger
    let (test_logger, entries) = TestLogger::new();

    // Set custom logger
    Engine::set_logger(test_logger);

    // Log some messages
    Engine::log(LogSeverity::Info, "test::module", "Test info message".to_string());
    Engine::log(LogSeverity::Warn, "test::module", "Test warning message".to_string());
    Engine::log(LogSeverity::Error, "test::module", "Test error message".to_string());

    // Verify logs were captured
    let captured_entries = entries.lock().unwrap();
    assert_eq!(captured_entries.len(), 3);

    // Verify first log (Info)
    assert_eq!(captured_entries[0].severity, LogSeverity::Info);
    assert_eq!(captured_entries[0].source, "test::module");
    assert_eq!(captured_entries[0].message, "Test info message");

    // Verify second log (Warn)
    assert_eq!(captured_entries[1].severity, LogSeverity::Warn);
    assert_eq!(captured_entries[1].source, "test::module");
    assert_eq!(captured_entries[1].message, "Test warning message");

    // Verify third log (Error)
    assert_eq!(captured_entries[2].severity, LogSeverity::Error);
    assert_eq!(captured_entries[2].source, "test::module");
    assert_eq!(captured_entries[2].message, "Test error message");

    // Reset to default logger
    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_error_logging_with_location() {
    // Create test logger
    let (test_logger, entries) = TestLogger::new();

    // Set custom logger
    Engine::set_logger(test_logger);

    // Log error with file and line information
    Engine::log_detailed(
        LogSeverity::Error,
        "test::error",
        "Critical error occurred".to_string(),
        "test_file.rs",
        42,
    );

    // Verify log was captured with location
    let captured_entries = entries.lock().unwrap();
    assert_eq!(captured_entries.len(), 1);

    let entry = &captured_entries[0];
    assert_eq!(entry.severity, LogSeverity::Error);
    assert_eq!(entry.source, "test::error");
    assert_eq!(entry.message, "Critical error occurred");
    assert_eq!(entry.file, Some("test_file.rs"));
    assert_eq!(entry.line, Some(42));

    // Reset to default logger
    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_logger_reset() {
    // Create test logger
    let (test_logger, entries) = TestLogger::new();

    // Set custom logger
    Engine::set_logger(test_logger);

    // Log a message
    Engine::log(LogSeverity::Info, "test", "Message 1".to_string());

    // Verify log was captured
    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
    }

    // Reset to default logger
    Engine::reset_logger();

    // Log another message (will go to default logger, not captured)
    Engine::log(LogSeverity::Info, "test", "Message 2".to_string());

    // Verify no new logs in test logger
    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 1); // Still only one message
}

#[test]
#[serial]
fn test_integration_logging_different_severities() {
    // Create test logger
    let (test_logger, entries) = TestLogger::new();

    // Set custom logger
    Engine::set_logger(test_logger);

    // Log messages with all severity levels
    Engine::log(LogSeverity::Trace, "test", "Trace message".to_string());
    Engine::log(LogSeverity::Debug, "test", "Debug message".to_string());
    Engine::log(LogSeverity::Info, "test", "Info message".to_string());
    Engine::log(LogSeverity::Warn, "test", "Warn message".to_string());
    Engine::log(LogSeverity::Error, "test", "Error message".to_string());

    // Verify all severities were captured
    let captured_entries = entries.lock().unwrap();
    assert_eq!(captured_entries.len(), 5);

    assert_eq!(captured_entries[0].severity, LogSeverity::Trace);
    assert_eq!(captured_entries[1].severity, LogSeverity::Debug);
    assert_eq!(captured_entries[2].severity, LogSeverity::Info);
    assert_eq!(captured_entries[3].severity, LogSeverity::Warn);
    assert_eq!(captured_entries[4].severity, LogSeverity::Error);

    // Reset to default logger
    Engine::reset_logger();
}

// ============================================================================
// CAMERA LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_corrected_projection_logs_warning() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    let mut entities = EntityManager::new();
    let mut cameras = CameraManager::new();
    let entity = entities.create();
    cameras.create_camera(entity).unwrap();
    let camera = CameraComponent::new(entity);

    // far <= near is invalid for a perspective projection
    camera.set_projection(&mut cameras, Projection::Perspective, -1.0, 1.0, -1.0, 1.0, 10.0, 5.0);

    let captured = entries.lock().unwrap();
    let warning = captured.iter()
        .find(|e| e.severity == LogSeverity::Warn)
        .expect("a warning should be logged");
    assert_eq!(warning.source, "galaxy3d::Camera");
    drop(captured);

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_duplicate_camera_logs_error_with_location() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    let mut entities = EntityManager::new();
    let mut cameras = CameraManager::new();
    let entity = entities.create();
    cameras.create_camera(entity).unwrap();
    assert!(cameras.create_camera(entity).is_err());

    let captured = entries.lock().unwrap();
    let error = captured.iter()
        .find(|e| e.severity == LogSeverity::Error)
        .expect("an error should be logged");
    assert_eq!(error.source, "galaxy3d::CameraManager");
    assert!(error.file.is_some());
    assert!(error.line.is_some());
    drop(captured);

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_component_updates_are_traced() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    let mut entities = EntityManager::new();
    let mut cameras = CameraManager::new();
    let entity = entities.create();
    cameras.create_camera(entity).unwrap();
    let camera = CameraComponent::new(entity);

    camera.set_focus_distance(&mut cameras, 4.0);
    let _ = camera.focus_distance(&cameras);

    let captured = entries.lock().unwrap();
    let traces = captured.iter()
        .filter(|e| e.severity == LogSeverity::Trace && e.source == "galaxy3d::CameraComponent")
        .count();
    assert_eq!(traces, 1);
    drop(captured);

    Engine::reset_logger();
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_integration_default_logger_filters_by_severity() {
    let logger = DefaultLogger::new(LogSeverity::Warn);

    assert_eq!(logger.min_severity(), LogSeverity::Warn);
    assert!(!logger.accepts(LogSeverity::Info));
    assert!(logger.accepts(LogSeverity::Warn));
    assert!(logger.accepts(LogSeverity::Error));
    assert!(DefaultLogger::default().accepts(LogSeverity::Debug));
    assert!(!DefaultLogger::default().accepts(LogSeverity::Trace));
}

#[test]
fn test_integration_format_entry_with_location() {
    let entry = LogEntry {
        severity: LogSeverity::Error,
        timestamp: std::time::SystemTime::now(),
        source: "galaxy3d::CameraComponent".to_string(),
        message: "Entity has no camera".to_string(),
        file: Some("camera_component.rs"),
        line: Some(12),
    };

    let line = format_entry(&entry);
    assert!(line.contains("[ERROR] [galaxy3d::CameraComponent] Entity has no camera (camera_component.rs:12)"));
}
