//! Convenience re-exports for driving the potential demo.

pub use crate::constants::*;
pub use crate::control::{ChargeSlider, ControlError, SliderMark};
pub use crate::demo::PotentialDemo;
pub use crate::errors::PotentialError;
pub use crate::fields::{
    checked_potential_from_point_charges, contribution, potential_from_point_charges, FieldError,
    PointCharge,
};
pub use crate::grid::{Grid, GridError, GridSpec, PotentialField};
pub use crate::io::{figure_json, write_field_csv, write_figure_json, write_html_page, Frame, Page};
pub use crate::math::{linspace, meshgrid, Grid2, Scalar, R3};
pub use crate::model::FieldModel;
pub use crate::scene::{
    build_scene, evaluate_scene, format_label, Layout, LineStyle, MarkerStyle, Scene, SceneStyle,
    Trace, TraceMode, TraceType,
};
