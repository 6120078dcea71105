//! # boxlap
//!
//! Pairwise overlap geometry for axis-aligned boxes in any dimension.
//!
//! Computes dense pairwise matrices (intersection volume, IoU, directional
//! inclusion) between two collections of n-dimensional axis-aligned boxes.
//! Built for cross-referencing bounding boxes produced by independent
//! detectors, e.g. assigning OCR characters to lines or layout regions,
//! where a clustering or thresholding step downstream consumes the matrix.
//!
//! ## Operations
//!
//! | Operation | Output | Range |
//! |-----------|--------|-------|
//! | [`area`] | `(m,)` vector | `>= 0`, degenerate boxes are 0 |
//! | [`intersection`] | `(m0, m1)` matrix | `>= 0` |
//! | [`iou`] | `(m0, m1)` matrix | `[0, 1]`, 0 when the union is empty |
//! | [`inclusion`] | `(m0, m1)` matrix | `[0, 1]`, fraction of A inside B |
//! | [`overlaps`] | `(m0, m1)` bool matrix | strictly positive overlap |
//!
//! ## Quick Start
//!
//! ```rust
//! use boxlap::{iou, inclusion, BoxSet};
//!
//! // A character box and two candidate line boxes.
//! let chars = BoxSet::from_bounds(&[(vec![1.0, 1.0], vec![2.0, 2.0])]).unwrap();
//! let lines = BoxSet::from_bounds(&[
//!     (vec![0.0, 0.0], vec![10.0, 3.0]),
//!     (vec![0.0, 5.0], vec![10.0, 8.0]),
//! ]).unwrap();
//!
//! // The character lies entirely inside the first line.
//! let frac = inclusion(&chars, &lines).unwrap();
//! assert_eq!(frac[[0, 0]], 1.0);
//! assert_eq!(frac[[0, 1]], 0.0);
//!
//! // IoU matrices are shaped (len(A), len(B)).
//! assert_eq!(iou(&chars, &lines).unwrap().dim(), (1, 2));
//! ```
//!
//! ## Design Philosophy
//!
//! - **Degeneracy is data, not an error**: a box with `lower > upper` on an
//!   axis has zero extent there and zero volume overall. Only shape
//!   mismatches fail, and they fail before any computation.
//! - **Explicit guards**: zero-union and zero-area divisions return 0.0
//!   through an explicit branch, never through NaN propagation and masking.
//! - **Caller-owned layout**: box sets round-trip the `(m, 2, n)` corner
//!   buffer convention used by detector pipelines
//!   ([`BoxSet::from_corners`] / [`BoxSet::to_corners`]).
//! - **Pure functions**: no mutation of inputs, no shared state, no I/O.
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! boxlap = "0.1"                                    # sequential kernels
//! boxlap = { version = "0.1", features = ["parallel"] } # rayon row fill
//! ```
//!
//! The `parallel` feature changes throughput only; every pair is
//! independent, so results are identical with and without it.

#![warn(missing_docs)]

mod boxes;
mod error;
pub mod overlap;

pub use boxes::BoxSet;
pub use error::{Error, Result};
pub use overlap::{area, inclusion, intersection, iou, overlaps};

/// Commonly used imports.
pub mod prelude {
    pub use crate::boxes::BoxSet;
    pub use crate::error::{Error, Result};
    pub use crate::overlap::{area, inclusion, intersection, iou, overlaps};
}
