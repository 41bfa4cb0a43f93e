/// Exposure — physically based camera exposure settings.
///
/// Exposure is described by the three photographic parameters of a real
/// camera. Each is clamped independently to the range a physical camera
/// could plausibly reach.

/// Minimum aperture, in f-stops
pub const MIN_APERTURE: f32 = 0.5;
/// Maximum aperture, in f-stops
pub const MAX_APERTURE: f32 = 64.0;
/// Minimum shutter speed, in seconds
pub const MIN_SHUTTER_SPEED: f32 = 1.0 / 25000.0;
/// Maximum shutter speed, in seconds
pub const MAX_SHUTTER_SPEED: f32 = 60.0;
/// Minimum sensitivity, in ISO
pub const MIN_SENSITIVITY: f32 = 10.0;
/// Maximum sensitivity, in ISO
pub const MAX_SENSITIVITY: f32 = 204800.0;

/// Default aperture (sunny 16 rule)
pub const DEFAULT_APERTURE: f32 = 16.0;
/// Default shutter speed
pub const DEFAULT_SHUTTER_SPEED: f32 = 1.0 / 125.0;
/// Default sensitivity
pub const DEFAULT_SENSITIVITY: f32 = 100.0;

/// Aperture, shutter speed and sensitivity, always within range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exposure {
    aperture: f32,
    shutter_speed: f32,
    sensitivity: f32,
}

impl Exposure {
    /// Create exposure settings, clamping each parameter to its range.
    ///
    /// # Arguments
    ///
    /// * `aperture` - f-stops, clamped to [0.5, 64]
    /// * `shutter_speed` - seconds, clamped to [1/25000, 60]
    /// * `sensitivity` - ISO, clamped to [10, 204800]
    pub fn new(aperture: f32, shutter_speed: f32, sensitivity: f32) -> Self {
        Self {
            aperture: aperture.clamp(MIN_APERTURE, MAX_APERTURE),
            shutter_speed: shutter_speed.clamp(MIN_SHUTTER_SPEED, MAX_SHUTTER_SPEED),
            sensitivity: sensitivity.clamp(MIN_SENSITIVITY, MAX_SENSITIVITY),
        }
    }

    /// Exposure settings producing the given unit-less exposure.
    ///
    /// Uses aperture f/1.0 and a 1.2s shutter; the sensitivity carries the
    /// requested value (an exposure of 1.0 is ISO 100). Representable
    /// exposures are limited to [0.1, 2048] by the sensitivity range.
    pub fn from_exposure_value(exposure: f32) -> Self {
        Self::new(1.0, 1.2, 100.0 * exposure)
    }

    /// Aperture in f-stops
    pub fn aperture(&self) -> f32 {
        self.aperture
    }

    /// Shutter speed in seconds
    pub fn shutter_speed(&self) -> f32 {
        self.shutter_speed
    }

    /// Sensitivity in ISO
    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Exposure value at ISO 100: `log2((N² / t) * (100 / S))`
    pub fn ev100(&self) -> f32 {
        ((self.aperture * self.aperture) / self.shutter_speed * 100.0 / self.sensitivity).log2()
    }

    /// Photometric exposure normalization factor: `1 / (1.2 * 2^ev100)`
    pub fn exposure(&self) -> f32 {
        1.0 / (1.2 * self.ev100().exp2())
    }

    /// Average scene luminance (cd/m²) that maps to middle gray.
    pub fn luminance(&self) -> f32 {
        (self.ev100() - 3.0).exp2()
    }
}

impl Default for Exposure {
    fn default() -> Self {
        Self {
            aperture: DEFAULT_APERTURE,
            shutter_speed: DEFAULT_SHUTTER_SPEED,
            sensitivity: DEFAULT_SENSITIVITY,
        }
    }
}

#[cfg(test)]
#[path = "exposure_tests.rs"]
mod tests;
