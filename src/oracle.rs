//! Face-center detection seam and axis resolution.
//!
//! Face detection is a heavyweight external model, so it sits behind the
//! [`FaceCenterOracle`] trait: the rest of the crate only ever sees a
//! normalized horizontal fraction or a failure. That keeps the geometry
//! testable with canned oracles and keeps detector flakiness (no face,
//! multiple faces, model faults) out of the transform code.
//!
//! [`resolve_axis`] implements the three-way axis policy: a literal fraction
//! is returned untouched, the default axis is the image midpoint, and `auto`
//! asks the oracle — falling back to the midpoint when no face is found.

use crate::command::AxisSpec;
use image::DynamicImage;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DetectError {
    /// The detector ran but found no usable face. Recovered locally by
    /// [`resolve_axis`]; never surfaced to callers.
    #[error("no face detected in the image")]
    NoFaceDetected,
    /// The detector itself failed. Fatal for this invocation; propagated.
    #[error("face detection failed: {0}")]
    DetectorFailed(String),
}

/// Capability interface for face-center detection.
///
/// Contract: return the normalized horizontal position, in `[0, 1]`, of the
/// detected reference feature — the mean x of the nose-bridge landmarks of
/// the first detected face, divided by image width. Report
/// [`DetectError::NoFaceDetected`] when no face is found.
///
/// `Sync` so one oracle can serve concurrent transforms.
pub trait FaceCenterOracle: Sync {
    fn detect(&self, image: &DynamicImage) -> Result<f64, DetectError>;
}

/// Oracle for hosts with no detector wired in: every image is face-free,
/// so `auto` behaves like the default axis.
pub struct NoDetection;

impl FaceCenterOracle for NoDetection {
    fn detect(&self, _image: &DynamicImage) -> Result<f64, DetectError> {
        Err(DetectError::NoFaceDetected)
    }
}

/// Oracle returning a canned fraction — for centers detected out of band
/// (e.g. by an external tool) and for tests.
pub struct FixedCenter(pub f64);

impl FaceCenterOracle for FixedCenter {
    fn detect(&self, _image: &DynamicImage) -> Result<f64, DetectError> {
        Ok(self.0)
    }
}

/// Resolve an [`AxisSpec`] to a concrete axis fraction.
///
/// Literal fractions are not clamped, even outside `[0, 1)` — the geometry
/// layer owns the degenerate-axis behavior. A `NoFaceDetected` from the
/// oracle falls back to `0.5`; any other detector failure propagates.
pub fn resolve_axis(
    axis: AxisSpec,
    image: &DynamicImage,
    oracle: &dyn FaceCenterOracle,
) -> Result<f64, DetectError> {
    match axis {
        AxisSpec::Literal(fraction) => Ok(fraction),
        AxisSpec::Default => Ok(0.5),
        AxisSpec::Auto => match oracle.detect(image) {
            Ok(fraction) => {
                log::info!("recognized face center: {fraction}");
                Ok(fraction)
            }
            Err(DetectError::NoFaceDetected) => {
                log::info!("no face detected, mirroring at the midpoint");
                Ok(0.5)
            }
            Err(err) => Err(err),
        },
    }
}
