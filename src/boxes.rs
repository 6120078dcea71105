//! Box set storage and validation.
//!
//! A [`BoxSet`] is the canonical in-memory layout for a collection of
//! axis-aligned boxes sharing one dimensionality: two `(m, n)` arrays of
//! per-axis lower and upper bounds. All shape validation happens at
//! construction, so the kernels in [`crate::overlap`] only have to check
//! that two sets agree on dimensionality.
//!
//! Detector pipelines commonly hand boxes around as a dense `(m, 2, n)`
//! corner buffer, where index 0 of the middle axis is the lower corner and
//! index 1 the upper. [`BoxSet::from_corners`] and [`BoxSet::to_corners`]
//! round-trip that layout exactly.

use ndarray::{Array2, Array3, ArrayView1, ArrayView2, ArrayView3, Axis};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An ordered collection of axis-aligned boxes sharing dimensionality `n`.
///
/// There is no requirement that `lower[d] <= upper[d]`: a box violating it
/// on some axis is *degenerate* and has zero extent on that axis for all
/// area and intersection purposes. Degeneracy is data, not an error.
///
/// # Example
///
/// ```rust
/// use boxlap::BoxSet;
///
/// // Two 2D boxes: the unit square and a degenerate (zero-width) box.
/// let boxes = BoxSet::from_bounds(&[
///     (vec![0.0, 0.0], vec![1.0, 1.0]),
///     (vec![2.0, 0.0], vec![2.0, 1.0]),
/// ]).unwrap();
///
/// assert_eq!(boxes.len(), 2);
/// assert_eq!(boxes.ndim(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSet {
    lowers: Array2<f64>,
    uppers: Array2<f64>,
}

impl BoxSet {
    /// Create a box set from `(m, n)` arrays of lower and upper bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLayout`] if the two arrays disagree in
    /// shape, and [`Error::EmptyDimension`] if `n == 0`. An empty set
    /// (`m == 0`) is valid.
    pub fn new(lowers: Array2<f64>, uppers: Array2<f64>) -> Result<Self> {
        if lowers.dim() != uppers.dim() {
            return Err(Error::invalid_layout(format!(
                "lower bounds have shape {:?} but upper bounds have shape {:?}",
                lowers.dim(),
                uppers.dim()
            )));
        }
        if lowers.ncols() == 0 {
            return Err(Error::EmptyDimension);
        }
        Ok(Self { lowers, uppers })
    }

    /// Create a box set from a dense `(m, 2, n)` corner buffer.
    ///
    /// Index 0 of the middle axis is the lower corner, index 1 the upper.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLayout`] if the middle axis is not 2, and
    /// [`Error::EmptyDimension`] if `n == 0`.
    pub fn from_corners(corners: ArrayView3<'_, f64>) -> Result<Self> {
        let (_, bounds, n) = corners.dim();
        if bounds != 2 {
            return Err(Error::invalid_layout(format!(
                "corner buffer must have shape (m, 2, n), got middle axis {bounds}"
            )));
        }
        if n == 0 {
            return Err(Error::EmptyDimension);
        }
        let lowers = corners.index_axis(Axis(1), 0).to_owned();
        let uppers = corners.index_axis(Axis(1), 1).to_owned();
        Ok(Self { lowers, uppers })
    }

    /// Create a box set from per-box `(lower, upper)` coordinate pairs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLayout`] if the list is empty (the
    /// dimensionality cannot be inferred; use [`BoxSet::new`] with
    /// explicitly shaped empty arrays instead) or if any coordinate
    /// vector disagrees in length with the first box.
    pub fn from_bounds<L, U>(boxes: &[(L, U)]) -> Result<Self>
    where
        L: AsRef<[f64]>,
        U: AsRef<[f64]>,
    {
        let Some((first_lower, _)) = boxes.first() else {
            return Err(Error::invalid_layout(
                "cannot infer dimensionality from an empty box list",
            ));
        };
        let n = first_lower.as_ref().len();
        if n == 0 {
            return Err(Error::EmptyDimension);
        }

        let mut lowers = Vec::with_capacity(boxes.len() * n);
        let mut uppers = Vec::with_capacity(boxes.len() * n);
        for (i, (lower, upper)) in boxes.iter().enumerate() {
            let (lower, upper) = (lower.as_ref(), upper.as_ref());
            if lower.len() != n || upper.len() != n {
                return Err(Error::invalid_layout(format!(
                    "box {i} has bounds of length ({}, {}), expected {n}",
                    lower.len(),
                    upper.len()
                )));
            }
            lowers.extend_from_slice(lower);
            uppers.extend_from_slice(upper);
        }

        let m = boxes.len();
        let lowers = Array2::from_shape_vec((m, n), lowers)
            .map_err(|e| Error::invalid_layout(format!("lower bounds: {e}")))?;
        let uppers = Array2::from_shape_vec((m, n), uppers)
            .map_err(|e| Error::invalid_layout(format!("upper bounds: {e}")))?;
        Self::new(lowers, uppers)
    }

    /// Number of boxes in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lowers.nrows()
    }

    /// Whether the set contains no boxes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Spatial dimensionality `n` shared by every box in the set.
    #[must_use]
    pub fn ndim(&self) -> usize {
        self.lowers.ncols()
    }

    /// Lower bounds of box `i`, one value per axis.
    #[must_use]
    pub fn lower(&self, i: usize) -> ArrayView1<'_, f64> {
        self.lowers.row(i)
    }

    /// Upper bounds of box `i`, one value per axis.
    #[must_use]
    pub fn upper(&self, i: usize) -> ArrayView1<'_, f64> {
        self.uppers.row(i)
    }

    /// View of all lower bounds, shape `(m, n)`.
    #[must_use]
    pub fn lowers(&self) -> ArrayView2<'_, f64> {
        self.lowers.view()
    }

    /// View of all upper bounds, shape `(m, n)`.
    #[must_use]
    pub fn uppers(&self) -> ArrayView2<'_, f64> {
        self.uppers.view()
    }

    /// Export the set as a dense `(m, 2, n)` corner buffer.
    ///
    /// Inverse of [`BoxSet::from_corners`]: index 0 of the middle axis is
    /// the lower corner, index 1 the upper.
    #[must_use]
    pub fn to_corners(&self) -> Array3<f64> {
        let (m, n) = self.lowers.dim();
        let mut corners = Array3::zeros((m, 2, n));
        corners.index_axis_mut(Axis(1), 0).assign(&self.lowers);
        corners.index_axis_mut(Axis(1), 1).assign(&self.uppers);
        corners
    }
}
