//! Electrostatic potential helpers for discrete point charges.

mod electrostatic;

pub use electrostatic::{
    PointCharge,
    FieldError,
    contribution,
    potential_from_point_charges,
    checked_potential_from_point_charges,
};
