//! # halfmirror
//!
//! Mirror one half of an image across a vertical axis. Given a bitmap and a
//! short text command, halfmirror rebuilds a new bitmap in which the chosen
//! half of the source is reflected across the axis — the other half is
//! discarded and replaced by the mirror copy.
//!
//! The axis can be:
//! - **literal**: an integer percentage of the width (`left40`),
//! - **default**: the image midpoint (`left`),
//! - **auto**: the horizontal position of a detected face (`leftauto`),
//!   falling back to the midpoint when no face is found.
//!
//! # Architecture: Four-Stage Pipeline
//!
//! ```text
//! 1. Parse     text      →  MirrorCommand     (scope, side, axis spec)
//! 2. Resolve   axis spec →  axis fraction     (may consult the face oracle)
//! 3. Generate  geometry  →  Vec<IndexPair>    (pure column arithmetic)
//! 4. Apply     mapping   →  output bitmap     (per-pixel copy, new buffer)
//! ```
//!
//! Stages 1 and 3 are pure functions; stage 2's only effect is one call into
//! the [`oracle::FaceCenterOracle`] capability; stage 4 allocates exactly one
//! buffer. Nothing is shared between invocations, so independent transforms
//! can run concurrently without locking.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`command`] | Hand-written scanner for the `[c] (l/left/r/right) [NN/a/auto]` grammar |
//! | [`geometry`] | Pure index math: axis fraction → ordered source→destination column pairs |
//! | [`oracle`] | `FaceCenterOracle` trait, stub implementations, and the axis-resolution policy |
//! | [`transform`] | Buffer-level application: generic over `GenericImageView`, mode-preserving for `DynamicImage` |
//! | [`pipeline`] | Resolve + apply behind one call, with one aggregated error type |
//!
//! # Design Decisions
//!
//! ## Hand-Written Scanner, No Regex
//!
//! The command grammar is four tokens; a scanner over `strip_prefix` is
//! shorter than the regex it replaces, gives anchored whole-string semantics
//! for free, and keeps the error cases (`NoMatch` vs. `InvalidSide`)
//! explicit.
//!
//! ## Detection Behind a Trait
//!
//! Face detection means a heavyweight model. The core only needs one number
//! from it — a normalized face-center fraction — so that is the whole trait.
//! Hosts wire in a real detector; tests and the CLI use the shipped
//! [`oracle::FixedCenter`] / [`oracle::NoDetection`] stubs, so nothing in
//! this crate's test suite loads a model.
//!
//! ## Degenerate Axes Are Errors, Not Clamps
//!
//! `left150` parses to an axis fraction of 1.5 — past the right edge. The
//! geometry reports the resulting out-of-range mapping as-is and the
//! transform rejects it with [`transform::MirrorError::ColumnOutOfBounds`].
//! Clamping would silently mirror at a different axis than the user named;
//! an error per invocation is recoverable by the host and changes nothing
//! globally.
//!
//! ## Host Owns All I/O
//!
//! The library never opens files, never decodes or encodes, and never talks
//! to a network. The CLI in `main.rs` is one example host: it decodes with
//! the `image` crate, runs the pipeline, and encodes next to the input.

pub mod command;
pub mod geometry;
pub mod oracle;
pub mod pipeline;
pub mod transform;

pub use command::{AxisSpec, MirrorCommand, ParseError, parse_command};
pub use geometry::{IndexPair, Pos, mirror_indices, mirror_width};
pub use oracle::{DetectError, FaceCenterOracle, FixedCenter, NoDetection, resolve_axis};
pub use pipeline::{PipelineError, apply_command};
pub use transform::{MirrorError, mirror_dynamic, mirror_image};
