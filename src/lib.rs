#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Reference constants: charge layout, grid bounds, scales and titles.
pub mod constants;
/// Shared numerical primitives (vectors, grid arrays, sampling).
pub mod math;
/// Electrostatic point-charge potentials.
pub mod fields;
/// The four-charge field model with its mutable primary pair.
pub mod model;
/// Sampling grid and evaluated potential fields.
pub mod grid;
/// Projection of a potential field into a renderable scene.
pub mod scene;
/// Slider domain for the primary charge magnitude.
pub mod control;
/// Entry points invoked by the surrounding UI layer.
pub mod demo;
/// Figure and page export.
pub mod io;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
