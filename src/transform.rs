//! Applying a mirror mapping to pixel buffers.
//!
//! [`mirror_image`] is generic over any [`GenericImageView`]: it allocates a
//! fresh output buffer of the mirror's dimensions and copies each mapped
//! source column into both of its destination columns, row by row. No
//! blending, no interpolation; source columns outside the kept side are
//! dropped, so the output is narrower than the source unless the axis sits
//! at 50%. The source is never mutated.
//!
//! [`mirror_dynamic`] wraps it for [`DynamicImage`] so the output keeps the
//! source's pixel mode (Luma8 in, Luma8 out).
//!
//! Degenerate axis fractions (outside `[0, 1)`) produce mappings that refer
//! to columns the source doesn't have. Those are rejected with
//! [`MirrorError::ColumnOutOfBounds`] before any allocation — an error local
//! to the one invocation, never a panic and never a silent clamp.

use crate::geometry::{Pos, mirror_indices, mirror_width};
use image::{DynamicImage, GenericImageView, ImageBuffer, Pixel};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MirrorError {
    /// The axis fraction maps a source column outside the image. Only
    /// reachable with fractions outside `[0, 1)`.
    #[error("axis fraction {fraction} maps source column {column} outside image width {width}")]
    ColumnOutOfBounds {
        fraction: f64,
        column: i64,
        width: u32,
    },
}

/// Mirror one half of `source` across the axis, producing a new buffer.
///
/// The output is `mirror_width × height` in the source's pixel type. An axis
/// at the near edge of the kept side yields a legal zero-width output.
pub fn mirror_image<I: GenericImageView>(
    source: &I,
    mirror_left: bool,
    axis_fraction: f64,
) -> Result<ImageBuffer<I::Pixel, Vec<<I::Pixel as Pixel>::Subpixel>>, MirrorError>
where
    I::Pixel: 'static,
{
    let (width, height) = source.dimensions();

    // Reject degenerate axes from the center position alone, before the
    // mapping is materialized: the mapping's length scales with the axis
    // percentage, not the image, so a huge literal (`l100000`, or a digit
    // run long enough to parse as infinity) must not reach the collect.
    // The reported column is the first one the mapping would have visited.
    let pos = Pos::of(width, axis_fraction);
    let out_of_bounds = if !axis_fraction.is_finite() {
        // Saturating: the center itself saturated during the float cast.
        Some(if mirror_left {
            pos.center.saturating_sub(1)
        } else {
            pos.center
        })
    } else if mirror_left && pos.center > pos.right {
        Some(pos.center - 1)
    } else if !mirror_left && pos.center < pos.left {
        Some(pos.center)
    } else {
        None
    };
    if let Some(column) = out_of_bounds {
        return Err(MirrorError::ColumnOutOfBounds {
            fraction: axis_fraction,
            column,
            width,
        });
    }

    // With the center inside [0, width] on the kept side, every source
    // column is in bounds and the mapping is at most `width` pairs.
    let indices = mirror_indices(width, mirror_left, axis_fraction);

    let out_width = mirror_width(width, mirror_left, axis_fraction).max(0) as u32;
    let mut mirror = ImageBuffer::new(out_width, height);

    for pair in &indices {
        let source_x = pair.source_x as u32;
        let (left_x, right_x) = (pair.left_x as u32, pair.right_x as u32);
        for y in 0..height {
            let pixel = source.get_pixel(source_x, y);
            mirror.put_pixel(left_x, y, pixel);
            mirror.put_pixel(right_x, y, pixel);
        }
    }

    Ok(mirror)
}

/// [`mirror_image`] for a [`DynamicImage`], preserving its pixel mode.
pub fn mirror_dynamic(
    source: &DynamicImage,
    mirror_left: bool,
    axis_fraction: f64,
) -> Result<DynamicImage, MirrorError> {
    Ok(match source {
        DynamicImage::ImageLuma8(buf) => mirror_image(buf, mirror_left, axis_fraction)?.into(),
        DynamicImage::ImageLumaA8(buf) => mirror_image(buf, mirror_left, axis_fraction)?.into(),
        DynamicImage::ImageRgb8(buf) => mirror_image(buf, mirror_left, axis_fraction)?.into(),
        DynamicImage::ImageRgba8(buf) => mirror_image(buf, mirror_left, axis_fraction)?.into(),
        DynamicImage::ImageLuma16(buf) => mirror_image(buf, mirror_left, axis_fraction)?.into(),
        DynamicImage::ImageLumaA16(buf) => mirror_image(buf, mirror_left, axis_fraction)?.into(),
        DynamicImage::ImageRgb16(buf) => mirror_image(buf, mirror_left, axis_fraction)?.into(),
        DynamicImage::ImageRgba16(buf) => mirror_image(buf, mirror_left, axis_fraction)?.into(),
        DynamicImage::ImageRgb32F(buf) => mirror_image(buf, mirror_left, axis_fraction)?.into(),
        DynamicImage::ImageRgba32F(buf) => mirror_image(buf, mirror_left, axis_fraction)?.into(),
        // DynamicImage is non-exhaustive; unknown modes go through RGBA8.
        other => mirror_image(&other.to_rgba8(), mirror_left, axis_fraction)?.into(),
    })
}
