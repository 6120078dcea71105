//! Pairwise overlap kernels for box sets.
//!
//! Four operations layered on one shared primitive: the clamped per-axis
//! extent product. [`intersection`] is the leaf used by [`iou`] and
//! [`inclusion`]; [`area`] is an independent leaf over a single set.
//!
//! All kernels are pure: inputs are never mutated or retained, results are
//! freshly allocated arrays owned by the caller, and identical inputs give
//! identical outputs. Shape validation happens before any allocation, so a
//! failed call produces no partial result.
//!
//! Cost is O(m0 · m1 · n) for the pairwise kernels and O(m · n) for
//! [`area`], with no per-pair heap allocation. Every pair is independent;
//! with the `parallel` feature the matrix fill is spread across rayon
//! tasks, one result row per task, with no effect on the output.

use ndarray::{Array1, Array2, ArrayView1, ArrayViewMut1, Axis};

use crate::boxes::BoxSet;
use crate::error::{Error, Result};

/// Compute the volume of every box in a set.
///
/// Each entry is the product over axes of `max(0, upper[d] - lower[d])`.
/// A box that is degenerate on any single axis has zero total volume.
///
/// # Example
///
/// ```rust
/// use boxlap::{area, BoxSet};
///
/// let boxes = BoxSet::from_bounds(&[
///     (vec![0.0, 0.0], vec![2.0, 2.0]),
///     (vec![1.0, 1.0], vec![1.0, 5.0]), // zero width, zero volume
/// ]).unwrap();
///
/// let volumes = area(&boxes);
/// assert_eq!(volumes.to_vec(), vec![4.0, 0.0]);
/// ```
#[must_use]
pub fn area(boxes: &BoxSet) -> Array1<f64> {
    let mut out = Array1::zeros(boxes.len());
    for (i, volume) in out.iter_mut().enumerate() {
        *volume = extent_product(boxes.lower(i), boxes.upper(i));
    }
    out
}

/// Compute the pairwise intersection volume matrix of two box sets.
///
/// Entry `(i, j)` is the n-dimensional volume of the intersection of
/// `a[i]` and `b[j]`: the product over axes of
/// `max(0, min(a.upper[i,d], b.upper[j,d]) - max(a.lower[i,d], b.lower[j,d]))`.
/// Pairs that are disjoint (or degenerate) on any axis contribute an
/// explicit zero. Output shape is `(a.len(), b.len())`.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if the sets disagree on
/// dimensionality.
pub fn intersection(a: &BoxSet, b: &BoxSet) -> Result<Array2<f64>> {
    check_same_ndim(a, b)?;
    let mut out = Array2::zeros((a.len(), b.len()));
    fill_pairwise(&mut out, a, b, |volume, _, _| volume);
    Ok(out)
}

/// Compute the pairwise intersection-over-union matrix of two box sets.
///
/// Entry `(i, j)` is `inter / (area(a[i]) + area(b[j]) - inter)` when the
/// union is positive, else 0.0. The zero-union case (two zero-volume boxes,
/// hence zero intersection) is an explicit branch: the conventional answer
/// is 0, and no NaN is ever produced. Entries lie in `[0, 1]`.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if the sets disagree on
/// dimensionality.
///
/// # Example
///
/// ```rust
/// use boxlap::{iou, BoxSet};
///
/// let a = BoxSet::from_bounds(&[(vec![0.0], vec![2.0])]).unwrap();
/// let b = BoxSet::from_bounds(&[(vec![1.0], vec![3.0])]).unwrap();
///
/// let m = iou(&a, &b).unwrap();
/// assert!((m[[0, 0]] - 1.0 / 3.0).abs() < 1e-9);
/// ```
pub fn iou(a: &BoxSet, b: &BoxSet) -> Result<Array2<f64>> {
    check_same_ndim(a, b)?;
    let area_a = area(a);
    let area_b = area(b);
    let mut out = Array2::zeros((a.len(), b.len()));
    fill_pairwise(&mut out, a, b, |volume, i, j| {
        let union = area_a[i] + area_b[j] - volume;
        if union > 0.0 {
            volume / union
        } else {
            0.0
        }
    });
    Ok(out)
}

/// Compute the pairwise inclusion matrix of two box sets.
///
/// Entry `(i, j)` is the fraction of `a[i]`'s volume lying inside `b[j]`:
/// `inter / area(a[i])` when `area(a[i]) > 0`, else 0.0. Asymmetric by
/// construction; `b`'s volumes are never consulted, only `a`'s degeneracy
/// matters for the guard. Entries lie in `[0, 1]`.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if the sets disagree on
/// dimensionality.
pub fn inclusion(a: &BoxSet, b: &BoxSet) -> Result<Array2<f64>> {
    check_same_ndim(a, b)?;
    let area_a = area(a);
    let mut out = Array2::zeros((a.len(), b.len()));
    fill_pairwise(&mut out, a, b, |volume, i, _| {
        if area_a[i] > 0.0 {
            volume / area_a[i]
        } else {
            0.0
        }
    });
    Ok(out)
}

/// Compute the pairwise boolean overlap matrix of two box sets.
///
/// Entry `(i, j)` is `true` when `a[i]` and `b[j]` share strictly positive
/// intersection volume. Boxes touching exactly on an axis edge do not
/// overlap.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if the sets disagree on
/// dimensionality.
pub fn overlaps(a: &BoxSet, b: &BoxSet) -> Result<Array2<bool>> {
    check_same_ndim(a, b)?;
    let mut out = Array2::from_elem((a.len(), b.len()), false);
    for i in 0..a.len() {
        let (lower_a, upper_a) = (a.lower(i), a.upper(i));
        for j in 0..b.len() {
            out[[i, j]] =
                pair_intersection(lower_a, upper_a, b.lower(j), b.upper(j)) > 0.0;
        }
    }
    Ok(out)
}

fn check_same_ndim(a: &BoxSet, b: &BoxSet) -> Result<()> {
    if a.ndim() != b.ndim() {
        return Err(Error::DimensionMismatch {
            left: a.ndim(),
            right: b.ndim(),
        });
    }
    Ok(())
}

/// Clamped extent product of a single box.
fn extent_product(lower: ArrayView1<'_, f64>, upper: ArrayView1<'_, f64>) -> f64 {
    let mut volume = 1.0;
    for (lo, up) in lower.iter().zip(upper.iter()) {
        let extent = up - lo;
        if extent <= 0.0 {
            return 0.0;
        }
        volume *= extent;
    }
    volume
}

/// Intersection volume of a single pair. Zero overlap on any axis zeroes
/// the product, so the remaining axes can be skipped.
fn pair_intersection(
    lower_a: ArrayView1<'_, f64>,
    upper_a: ArrayView1<'_, f64>,
    lower_b: ArrayView1<'_, f64>,
    upper_b: ArrayView1<'_, f64>,
) -> f64 {
    let mut volume = 1.0;
    for d in 0..lower_a.len() {
        let overlap = upper_a[d].min(upper_b[d]) - lower_a[d].max(lower_b[d]);
        if overlap <= 0.0 {
            return 0.0;
        }
        volume *= overlap;
    }
    volume
}

/// Fill a pairwise result matrix row by row. `f` maps the raw intersection
/// volume of pair `(i, j)` to the stored entry.
fn fill_pairwise<F>(out: &mut Array2<f64>, a: &BoxSet, b: &BoxSet, f: F)
where
    F: Fn(f64, usize, usize) -> f64 + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use ndarray::parallel::prelude::*;

        out.axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(i, mut row)| fill_row(&mut row, a, b, i, &f));
    }

    #[cfg(not(feature = "parallel"))]
    for (i, mut row) in out.axis_iter_mut(Axis(0)).enumerate() {
        fill_row(&mut row, a, b, i, &f);
    }
}

fn fill_row<F>(
    row: &mut ArrayViewMut1<'_, f64>,
    a: &BoxSet,
    b: &BoxSet,
    i: usize,
    f: &F,
) where
    F: Fn(f64, usize, usize) -> f64,
{
    let (lower_a, upper_a) = (a.lower(i), a.upper(i));
    for j in 0..b.len() {
        let volume = pair_intersection(lower_a, upper_a, b.lower(j), b.upper(j));
        row[j] = f(volume, i, j);
    }
}
