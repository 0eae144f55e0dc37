//! Domain of the slider that drives the primary charge magnitude.

use serde::{Deserialize, Serialize};

use crate::constants::{SLIDER_DEFAULT, SLIDER_MAX, SLIDER_MIN, SLIDER_STEP};
use crate::math::Scalar;

const STEP_TOLERANCE: Scalar = 1.0e-9;

/// Errors raised when an input falls outside the slider's domain.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ControlError {
    /// Bounds reversed or not finite, or step not a positive finite number.
    #[error("invalid slider domain [{min}, {max}] with step {step}")]
    InvalidDomain {
        /// Lower bound.
        min: Scalar,
        /// Upper bound.
        max: Scalar,
        /// Increment.
        step: Scalar,
    },
    /// Value outside `[min, max]` or not finite.
    #[error("value {value} is outside [{min}, {max}]")]
    OutOfRange {
        /// Rejected value.
        value: Scalar,
        /// Lower bound.
        min: Scalar,
        /// Upper bound.
        max: Scalar,
    },
    /// Value not on a step boundary.
    #[error("value {value} is not a multiple of {step} from {min}")]
    OffStep {
        /// Rejected value.
        value: Scalar,
        /// Slider origin.
        min: Scalar,
        /// Increment.
        step: Scalar,
    },
}

/// Tick shown under the slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderMark {
    /// Position of the tick.
    pub value: Scalar,
    /// Text of the tick, one decimal place.
    pub label: String,
}

/// Closed, stepped interval of admissible magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChargeSlider {
    /// Lower bound.
    pub min: Scalar,
    /// Upper bound.
    pub max: Scalar,
    /// Increment.
    pub step: Scalar,
    /// Initial position.
    pub default: Scalar,
}

impl Default for ChargeSlider {
    fn default() -> Self {
        Self { min: SLIDER_MIN, max: SLIDER_MAX, step: SLIDER_STEP, default: SLIDER_DEFAULT }
    }
}

impl ChargeSlider {
    /// Creates a slider, rejecting a degenerate domain or an off-domain default.
    pub fn new(min: Scalar, max: Scalar, step: Scalar, default: Scalar) -> Result<Self, ControlError> {
        let slider = Self { min, max, step, default };
        slider.check()?;
        slider.validate(default)?;
        Ok(slider)
    }

    /// Checks bounds and step; needed for sliders built field by field or deserialized.
    pub fn check(&self) -> Result<(), ControlError> {
        let bounds_ok = self.min.is_finite() && self.max.is_finite() && self.min <= self.max;
        let step_ok = self.step.is_finite() && self.step > 0.0;
        if bounds_ok && step_ok {
            Ok(())
        } else {
            Err(ControlError::InvalidDomain { min: self.min, max: self.max, step: self.step })
        }
    }

    /// Number of discrete positions; a degenerate domain collapses to its minimum.
    #[must_use]
    pub fn len(&self) -> usize {
        if self.check().is_err() {
            return 1;
        }
        let steps = ((self.max - self.min) / self.step + STEP_TOLERANCE).floor();
        (steps as usize).saturating_add(1)
    }

    /// Always false; a slider has at least its minimum position.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Every admissible position, computed from integer step indices.
    #[must_use]
    pub fn positions(&self) -> Vec<Scalar> {
        if self.check().is_err() {
            return vec![self.min];
        }
        (0..self.len()).map(|i| self.min + self.step * i as Scalar).collect()
    }

    /// Ticks for every position.
    #[must_use]
    pub fn marks(&self) -> Vec<SliderMark> {
        self.positions()
            .into_iter()
            .map(|value| SliderMark { value, label: format!("{value:.1}") })
            .collect()
    }

    /// Checks `value` against range and step.
    pub fn validate(&self, value: Scalar) -> Result<Scalar, ControlError> {
        self.check()?;
        let in_range = value.is_finite()
            && value >= self.min - STEP_TOLERANCE
            && value <= self.max + STEP_TOLERANCE;
        if !in_range {
            return Err(ControlError::OutOfRange { value, min: self.min, max: self.max });
        }
        let steps = (value - self.min) / self.step;
        if (steps - steps.round()).abs() > STEP_TOLERANCE * steps.abs().max(1.0) {
            return Err(ControlError::OffStep { value, min: self.min, step: self.step });
        }
        Ok(value)
    }
}
