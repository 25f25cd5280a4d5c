//! Fatigue and learning-curve equations.

/// Lower bound on `w + B` before it is raised to a negative power.
const MIN_PRACTICE_HOURS: f64 = 0.001;

/// Calibration constants of the human-factors model.
///
/// All methods are pure; hours in, dimensionless factors out.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HumanFactors {
    /// Task intensity `d`: fatigue buildup rate per work hour.
    pub intensity: f64,
    /// Rest quality `r`: recovery rate per rest hour.
    pub rest_quality: f64,
    /// Binding factor `α`: how strongly fatigue slows tasks.
    pub binding: f64,
    /// Learning rate `LR`: fraction of task time kept each time practice
    /// doubles.
    pub learning_rate: f64,
    /// Automation floor `M`; 0 means fully manual.
    pub automation_floor: f64,
}

impl Default for HumanFactors {
    fn default() -> Self {
        Self {
            intensity:        0.20,
            rest_quality:     0.25,
            binding:          0.40,
            learning_rate:    0.90,
            automation_floor: 0.0,
        }
    }
}

impl HumanFactors {
    /// Fatigue buildup `I(w) = 1 − e^(−d·w)`, in `[0, 1)` for `w ≥ 0`.
    #[inline]
    pub fn buildup(&self, work_h: f64) -> f64 {
        1.0 - (-self.intensity * work_h).exp()
    }

    /// Recovery `R(x) = e^(−r·x) − 1`, in `(−1, 0]` for `x ≥ 0`.
    #[inline]
    pub fn recovery(&self, rest_h: f64) -> f64 {
        (-self.rest_quality * rest_h).exp() - 1.0
    }

    /// Fatigue `F = clamp(I(w) + R(x), 0, 1)`.
    #[inline]
    pub fn fatigue(&self, work_h: f64, rest_h: f64) -> f64 {
        (self.buildup(work_h) + self.recovery(rest_h)).clamp(0.0, 1.0)
    }

    /// Learning exponent `b = −ln(LR) / ln 2`.
    #[inline]
    pub fn learning_exponent(&self) -> f64 {
        -self.learning_rate.ln() / std::f64::consts::LN_2
    }

    /// Experience factor `E(w, B) = M + (1 − M)·(w + B)^(−b)`.
    ///
    /// Below 1 means faster than the nominal task time; tends to `M` as
    /// practice grows.
    pub fn experience_factor(&self, work_h: f64, prior_h: f64) -> f64 {
        let practice = (work_h + prior_h).max(MIN_PRACTICE_HOURS);
        let m = self.automation_floor;
        m + (1.0 - m) * practice.powf(-self.learning_exponent())
    }

    /// Adjusted pickup dwell `Da = max(1, round((1 + α·F)·E·Do))`.
    ///
    /// Halfway values round to even.
    pub fn adjusted_pickup_ticks(&self, fatigue: f64, experience: f64, nominal_ticks: u32) -> u32 {
        let da = (1.0 + self.binding * fatigue) * experience * nominal_ticks as f64;
        let rounded = da.round_ties_even();
        if rounded < 1.0 {
            1
        } else if rounded >= u32::MAX as f64 {
            u32::MAX
        } else {
            rounded as u32
        }
    }

    /// Per-tick probability that a walking agent pauses: `α·F / 2`.
    #[inline]
    pub fn pause_probability(&self, fatigue: f64) -> f64 {
        self.binding * fatigue / 2.0
    }
}
