use std::fmt;

use ocp_profile::Profile;
use ocp_solvers::optimization::golden_section::Status;

/// Outcome of a verification run.
///
/// The `Display` impl renders the human-readable summary printed by the
/// `ocp-verify` binary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    /// Initial search bracket `[pL, pU]`.
    pub interval: [f64; 2],

    /// Number of golden section shrink iterations.
    pub iterations: usize,

    pub status: Status,

    /// Midpoint of the final bracket.
    pub p_star: f64,

    /// Coefficients and cost at `p_star`.
    pub profile: Profile,

    pub reference: f64,

    /// `p_star - reference`.
    pub difference: f64,

    /// Richardson estimate of the Simpson error in `profile.cost`.
    pub quadrature_error: f64,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [left, right] = self.interval;
        writeln!(f, "search interval: [{left:.15}, {right:.15}]")?;
        writeln!(f, "iterations: {}", self.iterations)?;
        writeln!(f, "p* = {:.17}", self.p_star)?;
        writeln!(f, "J(p*) = {:.12}", self.profile.cost)?;
        writeln!(f, "A = {}", Scientific(self.profile.coefficients.a, 12))?;
        writeln!(f, "B = {}", Scientific(self.profile.coefficients.b, 12))?;
        write!(
            f,
            "difference to reference: {}",
            Scientific(self.difference, 17)
        )
    }
}

/// Exponential notation with a signed, at least two-digit exponent
/// (`1.5e+00`, `3.2e-62`).
struct Scientific(f64, usize);

impl fmt::Display for Scientific {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(value, precision) = *self;
        let formatted = format!("{value:.precision$e}");

        match formatted.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                write!(f, "{mantissa}e{sign}{digits:0>2}")
            }
            None => f.write_str(&formatted),
        }
    }
}
