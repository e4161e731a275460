//! Fuzzy membership library
//!
//! Triangular and trapezoidal membership functions over the 0-10 severity
//! scale, grouped into low/medium/high triples. Symptoms fall into one of
//! three parameter groups: the standard breakpoints, a fever group with a
//! stricter high threshold, and a pain group with a lower ceiling on the low
//! set. All tables are compile-time constants and shared read-only.

use serde::Serialize;

/// Membership function shapes over the severity scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MembershipFunction {
    /// Triangular: rises from `a`, peaks at `b`, falls to zero at `c`
    Triangular { a: f64, b: f64, c: f64 },
    /// Trapezoidal: rises from `a`, plateau on `[b, c]`, falls to zero at `d`
    Trapezoidal { a: f64, b: f64, c: f64, d: f64 },
}

impl MembershipFunction {
    /// Compute the degree of membership for a severity reading
    ///
    /// The peak/plateau test runs before the support-bound test, so a plateau
    /// touching an edge of the scale keeps full membership there (a low set
    /// with breakpoints `(0, 0, c, d)` is 1 at severity 0, and a high set
    /// ending in `(.., 10, 10)` is 1 at severity 10). Degenerate shapes where
    /// two breakpoints of an edge coincide evaluate to 0 on that edge rather
    /// than dividing by zero. The result is always within [0, 1].
    #[must_use]
    pub fn degree(&self, x: f64) -> f64 {
        match *self {
            Self::Triangular { a, b, c } => {
                if x == b {
                    1.0
                } else if x <= a || x >= c {
                    0.0
                } else if x < b {
                    if b == a { 0.0 } else { (x - a) / (b - a) }
                } else if c == b {
                    0.0
                } else {
                    (c - x) / (c - b)
                }
            }
            Self::Trapezoidal { a, b, c, d } => {
                if x >= b && x <= c {
                    1.0
                } else if x <= a || x >= d {
                    0.0
                } else if x < b {
                    if b == a { 0.0 } else { (x - a) / (b - a) }
                } else if d == c {
                    0.0
                } else {
                    (d - x) / (d - c)
                }
            }
        }
    }
}

/// The three fuzzy severity bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Low,
    Medium,
    High,
}

impl Band {
    /// Get the band name as used in rule notes and traces
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Invert this band's consequent function, Tsukamoto style
    ///
    /// Maps a weighted firing strength to a crisp severity claim on the
    /// 0-100 scale. Weighted strengths can exceed 1.0 (weights above 1 are
    /// allowed) and are clamped here, inside the inversion, not at the call
    /// site.
    #[must_use]
    pub fn crisp_value(self, weighted_strength: f64) -> f64 {
        let w = weighted_strength.clamp(0.0, 1.0);
        match self {
            Self::High => 100.0 * w,
            Self::Low => 100.0 * (1.0 - w),
            Self::Medium => 50.0 + 50.0 * w,
        }
    }
}

/// A low/medium/high triple of membership functions
#[derive(Debug, Clone, Copy)]
pub struct SetTriple {
    pub low: MembershipFunction,
    pub medium: MembershipFunction,
    pub high: MembershipFunction,
}

impl SetTriple {
    /// Get the membership function for one band
    #[must_use]
    pub const fn band(&self, band: Band) -> MembershipFunction {
        match band {
            Band::Low => self.low,
            Band::Medium => self.medium,
            Band::High => self.high,
        }
    }
}

const STANDARD_SETS: SetTriple = SetTriple {
    low: MembershipFunction::Trapezoidal { a: 0.0, b: 0.0, c: 2.0, d: 4.5 },
    medium: MembershipFunction::Triangular { a: 2.0, b: 5.0, c: 8.0 },
    high: MembershipFunction::Trapezoidal { a: 5.5, b: 7.5, c: 10.0, d: 10.0 },
};

// Fever tolerates more before leaving "low" but needs 8.0 for full "high".
const FEVER_SETS: SetTriple = SetTriple {
    low: MembershipFunction::Trapezoidal { a: 0.0, b: 0.0, c: 2.5, d: 4.0 },
    medium: MembershipFunction::Triangular { a: 2.5, b: 5.5, c: 7.5 },
    high: MembershipFunction::Trapezoidal { a: 6.0, b: 8.0, c: 10.0, d: 10.0 },
};

// Pain-type symptoms leave "low" earlier than the standard group.
const PAIN_SETS: SetTriple = SetTriple {
    low: MembershipFunction::Trapezoidal { a: 0.0, b: 0.0, c: 1.5, d: 3.5 },
    medium: MembershipFunction::Triangular { a: 2.0, b: 4.5, c: 7.0 },
    high: MembershipFunction::Trapezoidal { a: 5.0, b: 7.0, c: 10.0, d: 10.0 },
};

/// Breakpoint parameter groups for the per-symptom membership sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipGroup {
    Standard,
    Fever,
    Pain,
}

impl MembershipGroup {
    /// Get the membership set triple for this group
    #[must_use]
    pub const fn sets(self) -> &'static SetTriple {
        match self {
            Self::Standard => &STANDARD_SETS,
            Self::Fever => &FEVER_SETS,
            Self::Pain => &PAIN_SETS,
        }
    }

    /// Degree of membership of a severity reading in one band of this group
    #[must_use]
    pub fn degree(self, band: Band, severity: f64) -> f64 {
        self.sets().band(band).degree(severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trapezoid_plateau_covers_scale_edges() {
        let low = STANDARD_SETS.low;
        assert_eq!(low.degree(0.0), 1.0);
        assert_eq!(low.degree(2.0), 1.0);
        assert_eq!(low.degree(4.5), 0.0);

        let high = STANDARD_SETS.high;
        assert_eq!(high.degree(10.0), 1.0);
        assert_eq!(high.degree(7.5), 1.0);
        assert_eq!(high.degree(5.5), 0.0);
    }

    #[test]
    fn test_triangle_peak_and_edges() {
        let medium = STANDARD_SETS.medium;
        assert_eq!(medium.degree(5.0), 1.0);
        assert_eq!(medium.degree(2.0), 0.0);
        assert_eq!(medium.degree(8.0), 0.0);
        assert!((medium.degree(3.5) - 0.5).abs() < 1e-12);
        assert!((medium.degree(6.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_edges_do_not_divide_by_zero() {
        let spike = MembershipFunction::Triangular { a: 5.0, b: 5.0, c: 5.0 };
        assert_eq!(spike.degree(5.0), 1.0);
        assert_eq!(spike.degree(4.9), 0.0);

        let step = MembershipFunction::Trapezoidal { a: 3.0, b: 3.0, c: 10.0, d: 10.0 };
        assert_eq!(step.degree(3.0), 1.0);
        assert_eq!(step.degree(2.0), 0.0);
    }

    #[test]
    fn test_crisp_inversion_clamps_weighted_strength() {
        assert_eq!(Band::High.crisp_value(1.425), 100.0);
        assert_eq!(Band::High.crisp_value(0.5), 50.0);
        assert_eq!(Band::Low.crisp_value(1.2), 0.0);
        assert_eq!(Band::Low.crisp_value(0.0), 100.0);
        assert_eq!(Band::Medium.crisp_value(0.5), 75.0);
    }

    #[test]
    fn test_fever_high_is_stricter_than_standard() {
        let x = 7.5;
        assert_eq!(MembershipGroup::Standard.degree(Band::High, x), 1.0);
        assert!(MembershipGroup::Fever.degree(Band::High, x) < 1.0);
    }
}
