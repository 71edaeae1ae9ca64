//! Pure mirror-index geometry.
//!
//! Everything here is integer math over column indices — no pixels, no I/O —
//! so the whole module is testable without constructing an image.
//!
//! Given an image width, a side to keep, and an axis fraction, the generator
//! produces one [`IndexPair`] per kept source column: the column's position
//! plus the two output columns its pixels land in. Pairs are ordered nearest
//! the axis first, so the `i`-th pair sits at distance `i` from the new
//! center and spans `2 * i + 1` output columns.
//!
//! Arithmetic is signed throughout. Axis fractions outside `[0, 1)` are not
//! clamped: they produce centers outside the image and therefore mappings
//! with out-of-range source columns (or empty mappings), which the transform
//! layer rejects or treats as zero work. See the crate docs for why this is
//! deliberate.

/// Per-call column bookkeeping for one image: `[left, right)` with the
/// mirror axis at `center = floor(width * fraction)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pos {
    pub left: i64,
    pub right: i64,
    pub center: i64,
}

impl Pos {
    pub fn of(width: u32, axis_fraction: f64) -> Self {
        Self {
            left: 0,
            right: i64::from(width),
            center: (f64::from(width) * axis_fraction).floor() as i64,
        }
    }
}

/// One source column mapped to its two destination columns in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexPair {
    /// Column in the source image.
    pub source_x: i64,
    /// Destination column left of the new center.
    pub left_x: i64,
    /// Destination column right of the new center.
    pub right_x: i64,
}

/// Width of the output bitmap for the given mirror.
///
/// Twice the kept side's column count. Negative for degenerate fractions
/// (axis past the far edge of the kept side); callers clamp at zero when
/// allocating.
pub fn mirror_width(width: u32, mirror_left: bool, axis_fraction: f64) -> i64 {
    let pos = Pos::of(width, axis_fraction);
    if mirror_left {
        pos.center * 2
    } else {
        (pos.right - pos.center) * 2
    }
}

/// Generate the full column mapping for one mirror transform.
///
/// Keeping the left half mirrors columns `[0, center)`; keeping the right
/// half mirrors `[center, width)`. Either way columns are visited nearest
/// the axis first, and the `i`-th visited column maps to output columns
/// `new_center - i - 1` and `new_center + i`, where `new_center` is `center`
/// in left mode and `width - center` in right mode.
///
/// An axis at the kept side's near edge (`center == 0` in left mode,
/// `center == width` in right mode) yields an empty mapping — a legal
/// zero-work result. At the far edge the whole image is kept and the output
/// is `2 * width` wide.
pub fn mirror_indices(width: u32, mirror_left: bool, axis_fraction: f64) -> Vec<IndexPair> {
    let pos = Pos::of(width, axis_fraction);

    let (source_range, new_center) = if mirror_left {
        // Nearest-axis first: center-1 down to 0.
        (either_rev(pos.left..pos.center, true), pos.center)
    } else {
        // Nearest-axis first: center up to width-1.
        (either_rev(pos.center..pos.right, false), pos.right - pos.center)
    };

    source_range
        .enumerate()
        .map(|(i, source_x)| {
            let i = i as i64;
            IndexPair {
                source_x,
                left_x: new_center - i - 1,
                right_x: new_center + i,
            }
        })
        .collect()
}

/// A range iterated forward or in reverse, as one concrete type.
fn either_rev(
    range: std::ops::Range<i64>,
    reversed: bool,
) -> Box<dyn Iterator<Item = i64>> {
    if reversed {
        Box::new(range.rev())
    } else {
        Box::new(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(seq: &[(i64, (i64, i64))]) -> Vec<IndexPair> {
        seq.iter()
            .map(|&(source_x, (left_x, right_x))| IndexPair {
                source_x,
                left_x,
                right_x,
            })
            .collect()
    }

    // =========================================================================
    // mirror_indices — exact sequences
    // =========================================================================

    #[test]
    fn default_axis_left_mode() {
        // width 10, axis at column 5: columns 4..0 mirrored outward.
        assert_eq!(
            mirror_indices(10, true, 0.5),
            pairs(&[(4, (4, 5)), (3, (3, 6)), (2, (2, 7)), (1, (1, 8)), (0, (0, 9))])
        );
    }

    #[test]
    fn default_axis_right_mode() {
        assert_eq!(
            mirror_indices(10, false, 0.5),
            pairs(&[(5, (4, 5)), (6, (3, 6)), (7, (2, 7)), (8, (1, 8)), (9, (0, 9))])
        );
    }

    #[test]
    fn off_center_axis_left_mode() {
        // width 10, fraction 0.6: center 6, output width 12.
        assert_eq!(
            mirror_indices(10, true, 0.6),
            pairs(&[
                (5, (5, 6)),
                (4, (4, 7)),
                (3, (3, 8)),
                (2, (2, 9)),
                (1, (1, 10)),
                (0, (0, 11)),
            ])
        );
        assert_eq!(mirror_width(10, true, 0.6), 12);
    }

    #[test]
    fn off_center_axis_right_mode() {
        // width 10, fraction 0.6: kept side is columns 6..9, new center 4.
        assert_eq!(
            mirror_indices(10, false, 0.6),
            pairs(&[(6, (3, 4)), (7, (2, 5)), (8, (1, 6)), (9, (0, 7))])
        );
        assert_eq!(mirror_width(10, false, 0.6), 8);
    }

    #[test]
    fn odd_width_splits_asymmetrically() {
        // width 9, fraction 0.5: center 4 — left keeps 4 columns, right 5.
        assert_eq!(mirror_indices(9, true, 0.5).len(), 4);
        assert_eq!(mirror_indices(9, false, 0.5).len(), 5);
    }

    // =========================================================================
    // Edge axes
    // =========================================================================

    #[test]
    fn axis_at_left_edge() {
        assert!(mirror_indices(10, true, 0.0).is_empty());
        assert_eq!(mirror_width(10, true, 0.0), 0);
        // Right mode at the same axis keeps the entire image.
        assert_eq!(mirror_indices(10, false, 0.0).len(), 10);
        assert_eq!(mirror_width(10, false, 0.0), 20);
    }

    #[test]
    fn axis_at_right_edge() {
        assert_eq!(mirror_indices(10, true, 1.0).len(), 10);
        assert_eq!(mirror_width(10, true, 1.0), 20);
        assert!(mirror_indices(10, false, 1.0).is_empty());
        assert_eq!(mirror_width(10, false, 1.0), 0);
    }

    #[test]
    fn single_column_image() {
        assert!(mirror_indices(1, true, 0.5).is_empty());
        assert_eq!(
            mirror_indices(1, false, 0.5),
            pairs(&[(0, (0, 1))])
        );
    }

    // =========================================================================
    // Degenerate fractions — passed through, never clamped
    // =========================================================================

    #[test]
    fn fraction_over_one_left_mode_runs_past_source() {
        // "left150" on a 10-wide image: center 15, sources 14..0 — columns
        // 10..14 don't exist. The generator reports them anyway; rejecting
        // the mapping is the applier's job.
        let seq = mirror_indices(10, true, 1.5);
        assert_eq!(seq.len(), 15);
        assert_eq!(seq[0].source_x, 14);
        assert_eq!(seq[14].source_x, 0);
        assert_eq!(mirror_width(10, true, 1.5), 30);
    }

    #[test]
    fn fraction_over_one_right_mode_is_empty() {
        assert!(mirror_indices(10, false, 1.5).is_empty());
        assert!(mirror_width(10, false, 1.5) < 0);
    }

    #[test]
    fn negative_fraction() {
        assert!(mirror_indices(10, true, -0.25).is_empty());
        // Right mode starts at a negative center: sources -3..9.
        let seq = mirror_indices(10, false, -0.25);
        assert_eq!(seq.len(), 13);
        assert_eq!(seq[0].source_x, -3);
    }

    // =========================================================================
    // Structural properties
    // =========================================================================

    #[test]
    fn pair_spacing_is_odd_and_grows_from_one() {
        for width in 1u32..=24 {
            for &fraction in &[0.1, 0.25, 0.5, 0.51, 0.75, 0.9] {
                for &mirror_left in &[true, false] {
                    let seq = mirror_indices(width, mirror_left, fraction);
                    let pos = Pos::of(width, fraction);
                    let expected_len = if mirror_left {
                        pos.center.max(0)
                    } else {
                        (pos.right - pos.center).max(0)
                    };
                    assert_eq!(seq.len() as i64, expected_len);

                    for (i, pair) in seq.iter().enumerate() {
                        assert_eq!(
                            pair.right_x - pair.left_x,
                            2 * i as i64 + 1,
                            "width {width} fraction {fraction} left {mirror_left}"
                        );
                    }
                    if let Some(nearest) = seq.first() {
                        assert_eq!(nearest.right_x - nearest.left_x, 1);
                    }
                }
            }
        }
    }

    #[test]
    fn destinations_tile_the_output_exactly_once() {
        let seq = mirror_indices(11, false, 0.3);
        let out_width = mirror_width(11, false, 0.3);
        let mut seen = vec![false; out_width as usize];
        for pair in &seq {
            for x in [pair.left_x, pair.right_x] {
                assert!(x >= 0 && x < out_width);
                assert!(!seen[x as usize], "column {x} written twice");
                seen[x as usize] = true;
            }
        }
        assert!(seen.iter().all(|&v| v));
    }

    #[test]
    fn each_call_recomputes_fresh() {
        assert_eq!(mirror_indices(10, true, 0.5), mirror_indices(10, true, 0.5));
    }
}
