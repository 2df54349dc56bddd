use std::fmt;

/// Lowest optics power considered a lit laser, dBm.
pub const MIN_OPTICS_POWER: f64 = -30.0;
/// Highest optics power a healthy transceiver reports, dBm.
pub const MAX_OPTICS_POWER: f64 = 10.0;

/// Inclusive power range. The lower bound is optional.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerBounds {
    pub min: Option<f64>,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Violation {
    AboveMax { sample: f64, max: f64 },
    BelowMin { sample: f64, min: f64 },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::AboveMax { sample, max } => write!(f, "got {sample:.2}, want < {max:.6}"),
            Violation::BelowMin { sample, min } => write!(f, "got {sample:.2}, want > {min:.6}"),
        }
    }
}

impl PowerBounds {
    pub const fn within(min: f64, max: f64) -> Self {
        Self { min: Some(min), max }
    }

    pub const fn at_most(max: f64) -> Self {
        Self { min: None, max }
    }

    /// Normal operating range of a lit laser.
    pub const fn nominal() -> Self {
        Self::within(MIN_OPTICS_POWER, MAX_OPTICS_POWER)
    }

    pub fn contains(&self, sample: f64) -> bool {
        self.violations(sample).is_empty()
    }

    /// Every bound `sample` breaks. Both can only break together on an inverted range.
    pub fn violations(&self, sample: f64) -> Vec<Violation> {
        let mut found = Vec::new();
        if sample > self.max {
            found.push(Violation::AboveMax { sample, max: self.max });
        }
        if let Some(min) = self.min
            && sample < min
        {
            found.push(Violation::BelowMin { sample, min });
        }
        found
    }
}

impl fmt::Display for PowerBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.min {
            Some(min) => write!(f, "[{min:.6}, {:.6}]", self.max),
            None => write!(f, "<= {:.6}", self.max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nominal_range_is_inclusive() {
        let bounds = PowerBounds::nominal();
        assert!(bounds.contains(MIN_OPTICS_POWER));
        assert!(bounds.contains(MAX_OPTICS_POWER));
        assert!(bounds.contains(-2.5));
        assert!(!bounds.contains(10.01));
        assert!(!bounds.contains(-30.01));
    }

    #[test]
    fn upper_only_bound_ignores_low_samples() {
        let bounds = PowerBounds::at_most(MIN_OPTICS_POWER);
        assert!(bounds.contains(-40.0));
        assert!(bounds.contains(-30.0));
        assert_eq!(
            bounds.violations(-1.5),
            vec![Violation::AboveMax { sample: -1.5, max: -30.0 }]
        );
    }

    #[test]
    fn violation_messages() {
        let above = Violation::AboveMax { sample: 12.5, max: 10.0 };
        assert_eq!(above.to_string(), "got 12.50, want < 10.000000");
        let below = Violation::BelowMin { sample: -35.0, min: -30.0 };
        assert_eq!(below.to_string(), "got -35.00, want > -30.000000");
    }
}
