//! Projection view model and its adjustment catalog

mod catalog;
mod model;

pub(crate) use catalog::{Adjustment, get_adjustments, resolve_adjustment};
pub(crate) use model::{
    DEFAULT_RANGE_SIZE, DEFAULT_SCALE_BASE, DataPoint, MAX_RANGE_SIZE, MAX_SCALE_BASE,
    MIN_RANGE_SIZE, MIN_SCALE_BASE, ProjectionModel,
};
