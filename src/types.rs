//! Point and working-set types shared by every estimator.
//!
//! Input points are integer pixel coordinates taken from a binary edge mask.
//! The working set is the collection of points not yet explained by an
//! accepted primitive; it only ever shrinks, and never holds a coordinate
//! twice.

use std::collections::HashSet;

use log::warn;
use nalgebra::Point2;

use crate::error::FitError;

/// Integer pixel coordinate `(x, y)`, i.e. `(column, row)`.
pub type Point = Point2<i32>;

/// De-duplicated set of edge points under consideration.
///
/// Points keep their insertion order so that seeded runs are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Build a working set from arbitrary points, dropping repeated coordinates.
    ///
    /// The first occurrence of each coordinate is kept.
    pub fn new<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        let mut seen = HashSet::new();
        let mut unique = Vec::new();
        let mut dropped = 0usize;
        for p in points {
            if seen.insert(p) {
                unique.push(p);
            } else {
                dropped += 1;
            }
        }
        if dropped > 0 {
            warn!("PointSet: dropped {dropped} duplicate coordinate(s)");
        }
        Self { points: unique }
    }

    /// Convenience constructor from `(x, y)` tuples.
    pub fn from_points(coords: &[(i32, i32)]) -> Self {
        Self::new(coords.iter().map(|&(x, y)| Point::new(x, y)))
    }

    /// Collect every non-zero pixel of a row-major binary mask.
    ///
    /// Pixel `(row, col)` becomes the point `(col, row)`. Points are emitted
    /// in raster order.
    pub fn from_mask(width: usize, height: usize, mask: &[u8]) -> Result<Self, FitError> {
        let expected = width
            .checked_mul(height)
            .ok_or(FitError::MaskSizeMismatch {
                expected: usize::MAX,
                actual: mask.len(),
            })?;
        if mask.len() != expected {
            return Err(FitError::MaskSizeMismatch {
                expected,
                actual: mask.len(),
            });
        }

        let points = mask
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != 0)
            .map(|(idx, _)| Point::new((idx % width) as i32, (idx / width) as i32))
            .collect();
        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Return the set with every coordinate in `removed` excluded.
    ///
    /// Builds a new set instead of erasing in place; each excluded coordinate
    /// disappears exactly once because the set holds no duplicates.
    pub fn without(&self, removed: &[Point]) -> Self {
        let lookup: HashSet<&Point> = removed.iter().collect();
        let points = self
            .points
            .iter()
            .filter(|p| !lookup.contains(p))
            .copied()
            .collect();
        Self { points }
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
