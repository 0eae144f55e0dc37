//! Entry points invoked by the surrounding UI layer when the slider moves.
//!
//! [`PotentialDemo`] owns the field context and the immutable grid. The two
//! callbacks are independent: the label depends only on the raw input, the
//! scene only on the input plus the grid.

use log::debug;

use crate::control::ChargeSlider;
use crate::errors::PotentialError;
use crate::grid::{Grid, GridSpec};
use crate::math::Scalar;
use crate::model::FieldModel;
use crate::scene::{evaluate_scene, format_label, Scene, SceneStyle};

/// Field model, grid, styling and slider domain of the demo.
#[derive(Debug, Clone, Default)]
pub struct PotentialDemo {
    model: FieldModel,
    grid: Grid,
    style: SceneStyle,
    slider: ChargeSlider,
}

impl PotentialDemo {
    /// Creates a demo with the reference charges on a custom grid.
    pub fn with_grid(spec: &GridSpec) -> Result<Self, PotentialError> {
        Ok(Self { grid: Grid::new(spec)?, ..Self::default() })
    }

    /// Replaces the scene styling.
    #[must_use]
    pub fn with_style(mut self, style: SceneStyle) -> Self {
        self.style = style;
        self
    }

    /// Replaces the slider domain after checking its bounds and step.
    pub fn with_slider(mut self, slider: ChargeSlider) -> Result<Self, PotentialError> {
        slider.check()?;
        self.slider = slider;
        Ok(self)
    }

    /// Current field model.
    #[must_use]
    pub const fn model(&self) -> &FieldModel {
        &self.model
    }

    /// Sampling grid.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Slider domain.
    #[must_use]
    pub const fn slider(&self) -> &ChargeSlider {
        &self.slider
    }

    /// Sets the primary magnitude to `value` and rebuilds the scene from scratch.
    pub fn on_slider_change(&mut self, value: Scalar) -> Scene {
        debug!("slider moved to {value}");
        self.model.set_primary_magnitude(value);
        evaluate_scene(&self.grid, &self.model, &self.style)
    }

    /// Label for `value`; touches no state.
    #[must_use]
    pub fn on_slider_change_label(&self, value: Scalar) -> String {
        format_label(value)
    }

    /// Like [`Self::on_slider_change`], but rejects values outside the slider domain.
    pub fn try_slider_change(&mut self, value: Scalar) -> Result<Scene, PotentialError> {
        let value = self.slider.validate(value)?;
        Ok(self.on_slider_change(value))
    }

    /// Scene and label for every slider position, in slider order.
    pub fn precompute(&mut self) -> Vec<(Scalar, String, Scene)> {
        let positions = self.slider.positions();
        let frames = positions
            .into_iter()
            .map(|value| (value, self.on_slider_change_label(value), self.on_slider_change(value)))
            .collect();
        self.model.set_primary_magnitude(self.slider.default);
        frames
    }
}
