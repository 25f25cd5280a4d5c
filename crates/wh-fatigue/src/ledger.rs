//! Work/rest accumulators with derived fatigue.

use crate::HumanFactors;

/// Cumulative work and rest hours of one agent.
///
/// `fatigue` is derived, never stored independently: every call that changes
/// `work_time_h` or `rest_time_h` recomputes it before returning.  The fields
/// are private so nothing else can break that.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WorkLedger {
    work_time_h: f64,
    rest_time_h: f64,
    fatigue:     f64,
}

impl WorkLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accrue `hours` of work.  Negative or non-finite input is ignored.
    pub fn add_work(&mut self, hours: f64, factors: &HumanFactors) {
        if hours.is_finite() && hours > 0.0 {
            self.work_time_h += hours;
        }
        self.refresh(factors);
    }

    /// Accrue `hours` of rest.  Negative or non-finite input is ignored.
    pub fn add_rest(&mut self, hours: f64, factors: &HumanFactors) {
        if hours.is_finite() && hours > 0.0 {
            self.rest_time_h += hours;
        }
        self.refresh(factors);
    }

    fn refresh(&mut self, factors: &HumanFactors) {
        self.fatigue = factors.fatigue(self.work_time_h, self.rest_time_h);
    }

    #[inline]
    pub fn work_time_h(&self) -> f64 {
        self.work_time_h
    }

    #[inline]
    pub fn rest_time_h(&self) -> f64 {
        self.rest_time_h
    }

    #[inline]
    pub fn fatigue(&self) -> f64 {
        self.fatigue
    }
}
