/// Inverse golden ratio `φ⁻¹ = φ - 1 = (√5 - 1) / 2`.
pub(super) const INV_PHI: f64 = 1.618_033_988_749_895 - 1.0;

/// End of the bracket that moves inward on a shrink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Side {
    Left,
    Right,
}

/// Outer bounds `[left, right]` and the two golden interior points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct GoldenBracket {
    pub(super) left: f64,
    pub(super) right: f64,

    /// `right - φ⁻¹ (right - left)`
    pub(super) inner_left: f64,

    /// `left + φ⁻¹ (right - left)`
    pub(super) inner_right: f64,
}

impl GoldenBracket {
    /// Places the interior points inside `bounds`, given in either order.
    pub(super) fn new(bounds: [f64; 2]) -> Self {
        let [left, right] = if bounds[0] <= bounds[1] {
            bounds
        } else {
            [bounds[1], bounds[0]]
        };
        let width = right - left;

        Self {
            left,
            right,
            inner_left: right - INV_PHI * width,
            inner_right: left + INV_PHI * width,
        }
    }

    pub(super) fn width(&self) -> f64 {
        self.right - self.left
    }

    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    pub(super) fn bounds(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the bracket after moving `side` onto its nearer interior point.
    ///
    /// The opposite interior point is carried over unchanged and takes the
    /// place of the one that became a bound; only one new interior point is
    /// computed.
    pub(super) fn shrunk(&self, side: Side) -> Self {
        match side {
            Side::Left => {
                let left = self.inner_left;
                Self {
                    left,
                    right: self.right,
                    inner_left: self.inner_right,
                    inner_right: left + INV_PHI * (self.right - left),
                }
            }
            Side::Right => {
                let right = self.inner_right;
                Self {
                    left: self.left,
                    right,
                    inner_left: right - INV_PHI * (right - self.left),
                    inner_right: self.inner_left,
                }
            }
        }
    }

    /// The interior point introduced by the shrink that produced `self`.
    pub(super) fn fresh_point(&self, side: Side) -> f64 {
        match side {
            Side::Left => self.inner_right,
            Side::Right => self.inner_left,
        }
    }
}
