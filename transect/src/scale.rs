//! Affine mapping between fixed data domains and pixel ranges.

/// Maps a value from a fixed data domain onto a fixed output range.
///
/// Domains are hardcoded per chart rather than derived from data so that
/// multiple charts stay visually comparable. Output is not clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Affine-interpolates `value` from the domain into the range.
    ///
    /// A degenerate domain (min == max) maps every value to the midpoint
    /// of the range.
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d0 == d1 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) * (r1 - r0) / (d1 - d0)
    }

    /// Maps an output-range position back into the data domain.
    ///
    /// Inverse of [`scale`](Self::scale) for non-degenerate domains; a
    /// degenerate range maps back to the domain midpoint.
    pub fn invert(&self, position: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if r0 == r1 {
            return (d0 + d1) / 2.0;
        }
        d0 + (position - r0) * (d1 - d0) / (r1 - r0)
    }
}
