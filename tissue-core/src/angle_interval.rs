//! Bookkeeping of which parts of a circle have already been claimed.
//!
//! Angles are in radians. Every stored sub-interval lies inside
//! `[-π, π]`; an arc crossing the `±π` seam is stored as two pieces.

use std::f64::consts::{PI, TAU};

/// Absolute tolerance used when deciding that the circle is fully claimed.
pub const COMPLETE_TOLERANCE: f64 = 1e-9;

/// Maps any finite angle into `[-π, π)`.
pub fn canonical_angle(angle: f64) -> f64 {
    let mut shifted = (angle + PI).rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if shifted >= TAU {
        shifted -= TAU;
    }
    shifted - PI
}

/// Claimed angular territory for a single force-application pass.
///
/// The claimed set only ever grows. A fresh instance is created for every
/// pass; nothing is carried between simulation steps.
#[derive(Clone, Debug, Default)]
pub struct AngleInterval {
    /// Disjoint, sorted `(start, end)` pairs with `start < end`.
    claimed: Vec<(f64, f64)>,
    measure: f64,
}

impl AngleInterval {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the arc running anticlockwise from `bottom` to `top` and
    /// returns how much of it was not claimed before.
    ///
    /// `top - bottom` is the arc width. Neither bound needs to be
    /// canonical: the arc is canonicalised and split at the seam here.
    /// A width of zero or less claims nothing; a width of at least `2π`
    /// claims the whole circle.
    ///
    /// ### Returns
    /// The newly claimed measure in radians, in `[0, 2π]`.
    pub fn get_unvisited_angle(&mut self, bottom: f64, top: f64) -> f64 {
        let width = top - bottom;
        if !(width > 0.0) {
            return 0.0;
        }
        if width >= TAU {
            return self.claim_segment(-PI, PI);
        }

        let start = canonical_angle(bottom);
        let end = start + width;
        if end <= PI {
            self.claim_segment(start, end)
        } else {
            self.claim_segment(start, PI) + self.claim_segment(-PI, end - TAU)
        }
    }

    /// Claims `[start, end]`, where `-π <= start <= end <= π`.
    fn claim_segment(&mut self, start: f64, end: f64) -> f64 {
        if end <= start {
            return 0.0;
        }

        let overlap: f64 = self
            .claimed
            .iter()
            .map(|&(s, e)| (end.min(e) - start.max(s)).max(0.0))
            .sum();
        let gained = ((end - start) - overlap).max(0.0);

        // Merge every stored piece touching [start, end] into one.
        let mut lo = start;
        let mut hi = end;
        self.claimed.retain(|&(s, e)| {
            if s <= hi && e >= lo {
                lo = lo.min(s);
                hi = hi.max(e);
                false
            } else {
                true
            }
        });
        let at = self.claimed.partition_point(|&(s, _)| s < lo);
        self.claimed.insert(at, (lo, hi));

        self.measure = self.claimed.iter().map(|&(s, e)| e - s).sum();
        gained
    }

    /// Total measure claimed so far, in radians.
    #[inline]
    pub fn claimed_measure(&self) -> f64 {
        self.measure
    }

    /// The claimed sub-intervals, sorted and disjoint.
    #[inline]
    pub fn claimed_intervals(&self) -> &[(f64, f64)] {
        &self.claimed
    }

    /// `true` once the claimed measure reaches `2π` within
    /// [`COMPLETE_TOLERANCE`].
    #[inline]
    pub fn is_circle_complete(&self) -> bool {
        self.measure >= TAU - COMPLETE_TOLERANCE
    }
}
