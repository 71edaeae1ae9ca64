//! The full transform for one parsed command.
//!
//! Thin composition layer: resolve the command's axis against the image
//! (consulting the oracle for `auto`), then apply the mirror. Hosts that
//! need the pieces separately — e.g. to resolve once and mirror many — can
//! call [`resolve_axis`](crate::oracle::resolve_axis) and
//! [`mirror_dynamic`](crate::transform::mirror_dynamic) themselves.

use crate::command::MirrorCommand;
use crate::oracle::{DetectError, FaceCenterOracle, resolve_axis};
use crate::transform::{MirrorError, mirror_dynamic};
use image::DynamicImage;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    #[error("axis resolution failed: {0}")]
    Detect(#[from] DetectError),
    #[error(transparent)]
    Mirror(#[from] MirrorError),
}

/// Run one mirror transform: resolve the axis, then rebuild the bitmap.
///
/// The output keeps the source's pixel mode. `command.is_chat_scope` is the
/// host's concern (it selects *which* image to pass in) and is ignored here.
pub fn apply_command(
    command: &MirrorCommand,
    image: &DynamicImage,
    oracle: &dyn FaceCenterOracle,
) -> Result<DynamicImage, PipelineError> {
    let fraction = resolve_axis(command.axis, image, oracle)?;
    log::debug!(
        "mirroring {} of {}x{} at axis fraction {fraction}",
        if command.mirror_left { "left" } else { "right" },
        image.width(),
        image.height(),
    );
    Ok(mirror_dynamic(image, command.mirror_left, fraction)?)
}
