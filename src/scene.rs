//! Projection of a potential field into a Plotly-compatible 3D scene.
//!
//! The scene is pure data: one line trace per grid row, one per grid column,
//! and two marker traces for the charges. Serializing a [`Scene`] with
//! `serde_json` yields a `{"data": [...], "layout": {...}}` figure object.

use serde::{Deserialize, Serialize};

use crate::constants::{
    FIGURE_TITLE, FIXED_MARKER_SIZES, LABEL_PREFIX, LABEL_UNIT, PRIMARY_MARKER_SCALE, Z_AXIS_TITLE,
};
use crate::fields::PointCharge;
use crate::grid::{Grid, GridError, PotentialField};
use crate::math::Scalar;
use crate::model::FieldModel;

/// Visual parameters of a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneStyle {
    /// Colour of the row and column lines.
    pub line_color: String,
    /// Width of the row and column lines.
    pub line_width: Scalar,
    /// Colour of the primary markers.
    pub primary_color: String,
    /// Marker size per unit of primary charge.
    pub primary_size_scale: Scalar,
    /// Colour of the fixed markers.
    pub fixed_color: String,
    /// Literal sizes of the two fixed markers.
    pub fixed_sizes: [Scalar; 2],
    /// Figure width in pixels.
    pub width: u32,
    /// Figure height in pixels.
    pub height: u32,
    /// Figure title.
    pub title: String,
    /// Title of the potential axis.
    pub z_axis_title: String,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            line_color: "lightpink".to_owned(),
            line_width: 3.0,
            primary_color: "red".to_owned(),
            primary_size_scale: PRIMARY_MARKER_SCALE,
            fixed_color: "blue".to_owned(),
            fixed_sizes: FIXED_MARKER_SIZES,
            width: 1500,
            height: 1000,
            title: FIGURE_TITLE.to_owned(),
            z_axis_title: Z_AXIS_TITLE.to_owned(),
        }
    }
}

/// Plotly trace type; every trace here is a 3D scatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceType {
    /// `scatter3d`.
    Scatter3d,
}

/// Drawing mode of a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceMode {
    /// Connected polyline.
    Lines,
    /// Individual markers.
    Markers,
}

/// Line appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// CSS colour name.
    pub color: String,
    /// Width in pixels.
    pub width: Scalar,
}

/// Marker appearance, one size per point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    /// Per-point sizes.
    pub size: Vec<Scalar>,
    /// CSS colour name.
    pub color: String,
}

/// One renderable 3D trace. Non-finite coordinates serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    /// Plotly trace type.
    #[serde(rename = "type")]
    pub kind: TraceType,
    /// x coordinates.
    pub x: Vec<Scalar>,
    /// y coordinates.
    pub y: Vec<Scalar>,
    /// z coordinates (potential for line traces).
    pub z: Vec<Scalar>,
    /// Drawing mode.
    pub mode: TraceMode,
    /// Set for line traces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<LineStyle>,
    /// Set for marker traces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<MarkerStyle>,
}

impl Trace {
    fn lines(x: Vec<Scalar>, y: Vec<Scalar>, z: Vec<Scalar>, style: &SceneStyle) -> Self {
        Self {
            kind: TraceType::Scatter3d,
            x,
            y,
            z,
            mode: TraceMode::Lines,
            line: Some(LineStyle { color: style.line_color.clone(), width: style.line_width }),
            marker: None,
        }
    }

    fn markers(charges: &[PointCharge], size: Vec<Scalar>, color: &str) -> Self {
        Self {
            kind: TraceType::Scatter3d,
            x: charges.iter().map(|c| c.position.x).collect(),
            y: charges.iter().map(|c| c.position.y).collect(),
            z: charges.iter().map(|c| c.position.z).collect(),
            mode: TraceMode::Markers,
            line: None,
            marker: Some(MarkerStyle { size, color: color.to_owned() }),
        }
    }

    /// Number of points in the trace.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True if the trace has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Plotly title object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    /// Title text.
    pub text: String,
}

/// Single axis settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Axis {
    /// Axis title.
    pub title: Title,
}

/// 3D scene settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneAxes {
    /// Potential axis.
    pub zaxis: Axis,
}

/// Figure layout metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Height in pixels.
    pub height: u32,
    /// Width in pixels.
    pub width: u32,
    /// Legend visibility.
    pub showlegend: bool,
    /// Figure title.
    pub title: Title,
    /// 3D axes.
    pub scene: SceneAxes,
}

impl Layout {
    fn from_style(style: &SceneStyle) -> Self {
        Self {
            height: style.height,
            width: style.width,
            showlegend: false,
            title: Title { text: style.title.clone() },
            scene: SceneAxes { zaxis: Axis { title: Title { text: style.z_axis_title.clone() } } },
        }
    }
}

/// Complete render payload for one model state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Row traces, then column traces, then primary and fixed markers.
    pub data: Vec<Trace>,
    /// Layout metadata.
    pub layout: Layout,
}

impl Scene {
    /// Marker trace for the primary pair.
    #[must_use]
    pub fn primary_markers(&self) -> Option<&Trace> {
        self.data.iter().rev().nth(1)
    }

    /// Marker trace for the fixed pair.
    #[must_use]
    pub fn fixed_markers(&self) -> Option<&Trace> {
        self.data.last()
    }
}

/// Builds a scene from `field`, which must have the shape of `grid`.
pub fn build_scene(
    grid: &Grid,
    field: &PotentialField,
    model: &FieldModel,
    style: &SceneStyle,
) -> Result<Scene, GridError> {
    if field.shape() != grid.shape() {
        return Err(GridError::ShapeMismatch { grid: grid.shape(), field: field.shape() });
    }
    Ok(project(grid, field, model, style))
}

/// Evaluates `model` on `grid` and projects the result.
#[must_use]
pub fn evaluate_scene(grid: &Grid, model: &FieldModel, style: &SceneStyle) -> Scene {
    let field = model.evaluate(grid);
    project(grid, &field, model, style)
}

fn project(grid: &Grid, field: &PotentialField, model: &FieldModel, style: &SceneStyle) -> Scene {
    let (x, y, v) = (grid.x(), grid.y(), field.values());
    let mut data = Vec::with_capacity(grid.rows() + grid.cols() + 2);

    for i in 0..grid.rows() {
        data.push(Trace::lines(
            x.row(i).iter().copied().collect(),
            y.row(i).iter().copied().collect(),
            v.row(i).iter().copied().collect(),
            style,
        ));
    }
    // columns of the arrays are the rows of their transposes
    for j in 0..grid.cols() {
        data.push(Trace::lines(
            x.column(j).iter().copied().collect(),
            y.column(j).iter().copied().collect(),
            v.column(j).iter().copied().collect(),
            style,
        ));
    }

    let primary = model.primary();
    let primary_sizes = primary.iter().map(|c| style.primary_size_scale * c.charge).collect();
    data.push(Trace::markers(primary, primary_sizes, &style.primary_color));
    data.push(Trace::markers(model.fixed(), style.fixed_sizes.to_vec(), &style.fixed_color));

    Scene { data, layout: Layout::from_style(style) }
}

/// Human-readable label for a primary magnitude, one decimal place.
#[must_use]
pub fn format_label(value: Scalar) -> String {
    format!("{LABEL_PREFIX}{value:.1} {LABEL_UNIT}")
}
