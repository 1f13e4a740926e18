use super::{
    Config, Point,
    bracket::{GoldenBracket, Side},
};

/// One planned shrink: the next bracket, the interior point that survives
/// into it, and the fresh point still to be evaluated.
#[derive(Debug, Clone, Copy)]
pub(super) struct Step {
    pub(super) bracket: GoldenBracket,
    pub(super) survivor: Point,
    side: Side,
}

impl Step {
    /// Where the next evaluation happens.
    pub(super) fn x(&self) -> f64 {
        self.bracket.fresh_point(self.side)
    }
}

/// Bracket plus the evaluated interior points.
#[derive(Debug, Clone, Copy)]
pub(super) struct State {
    bracket: GoldenBracket,
    left: Point,
    right: Point,
}

impl State {
    pub(super) fn new(bracket: GoldenBracket, left: Point, right: Point) -> Self {
        Self {
            bracket,
            left,
            right,
        }
    }

    pub(super) fn bracket(&self) -> &GoldenBracket {
        &self.bracket
    }

    #[cfg(test)]
    pub(super) fn left(&self) -> Point {
        self.left
    }

    #[cfg(test)]
    pub(super) fn right(&self) -> Point {
        self.right
    }

    /// Plans the next shrink without changing the state.
    ///
    /// The left bound moves only when the left objective is strictly larger.
    /// Ties and NaN comparisons move the right bound.
    pub(super) fn step(&self) -> Step {
        let (side, survivor) = if self.left.objective > self.right.objective {
            (Side::Left, self.right)
        } else {
            (Side::Right, self.left)
        };

        Step {
            bracket: self.bracket.shrunk(side),
            survivor,
            side,
        }
    }

    /// Commits `step`, with `point` evaluated at `step.x()`.
    pub(super) fn advance(&mut self, step: Step, point: Point) {
        self.bracket = step.bracket;
        (self.left, self.right) = match step.side {
            Side::Left => (step.survivor, point),
            Side::Right => (point, step.survivor),
        };
    }

    pub(super) fn is_converged(&self, config: &Config) -> bool {
        self.bracket.width() <= config.width_tol(self.bracket.midpoint())
    }
}
