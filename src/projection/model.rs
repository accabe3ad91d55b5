//! Projection state and series derivation

use std::collections::BTreeSet;

use super::catalog::{Adjustment, get_adjustments};

pub(crate) const MIN_RANGE_SIZE: u32 = 1;
pub(crate) const MAX_RANGE_SIZE: u32 = 15;
pub(crate) const DEFAULT_RANGE_SIZE: u32 = 4;
const RANGE_STEP: u32 = 1;

pub(crate) const MIN_SCALE_BASE: u32 = 10;
pub(crate) const MAX_SCALE_BASE: u32 = 1000;
pub(crate) const DEFAULT_SCALE_BASE: u32 = 100;
const SCALE_STEP: u32 = 50;

/// Slope of the unadjusted series is SLOPE_BASE + n * SLOPE_PER_POINT
const SLOPE_BASE: f64 = 80.0;
const SLOPE_PER_POINT: f64 = 5.0;

/// One point of the derived series
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DataPoint {
    /// 1-based position within the range
    pub(crate) index: u32,
    pub(crate) value: f64,
}

/// Interactive projection state.
///
/// Fields are private; all mutation goes through the methods below, which
/// keep the selection inside the catalog and both counters within bounds.
#[derive(Clone)]
pub(crate) struct ProjectionModel {
    catalog: &'static [Adjustment],
    selected: BTreeSet<&'static str>,
    range_size: u32,
    scale_base: u32,
}

impl Default for ProjectionModel {
    fn default() -> Self {
        Self::new(get_adjustments())
    }
}

impl ProjectionModel {
    pub(crate) fn new(catalog: &'static [Adjustment]) -> Self {
        Self {
            catalog,
            selected: BTreeSet::new(),
            range_size: DEFAULT_RANGE_SIZE,
            scale_base: DEFAULT_SCALE_BASE,
        }
    }

    /// Start from a different range size (clamped to bounds)
    pub(crate) fn with_range_size(mut self, range_size: u32) -> Self {
        self.range_size = range_size.clamp(MIN_RANGE_SIZE, MAX_RANGE_SIZE);
        self
    }

    /// Start from a different scale base (clamped to bounds)
    pub(crate) fn with_scale_base(mut self, scale_base: u32) -> Self {
        self.scale_base = scale_base.clamp(MIN_SCALE_BASE, MAX_SCALE_BASE);
        self
    }

    pub(crate) fn catalog(&self) -> &'static [Adjustment] {
        self.catalog
    }

    pub(crate) fn range_size(&self) -> u32 {
        self.range_size
    }

    pub(crate) fn scale_base(&self) -> u32 {
        self.scale_base
    }

    pub(crate) fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Selected adjustments in catalog order
    pub(crate) fn selected(&self) -> Vec<&'static Adjustment> {
        self.catalog
            .iter()
            .filter(|a| self.selected.contains(a.id))
            .collect()
    }

    /// Flip an adjustment on or off. Returns false (and changes nothing)
    /// if the id is not in the catalog.
    pub(crate) fn toggle_adjustment(&mut self, id: &str) -> bool {
        let Some(known) = self.catalog.iter().find(|a| a.id == id) else {
            return false;
        };
        if !self.selected.remove(known.id) {
            self.selected.insert(known.id);
        }
        true
    }

    pub(crate) fn reset_adjustments(&mut self) {
        self.selected.clear();
    }

    pub(crate) fn increase_range(&mut self) {
        self.range_size = (self.range_size + RANGE_STEP).min(MAX_RANGE_SIZE);
    }

    pub(crate) fn decrease_range(&mut self) {
        self.range_size = self
            .range_size
            .saturating_sub(RANGE_STEP)
            .max(MIN_RANGE_SIZE);
    }

    pub(crate) fn increase_scale(&mut self) {
        self.scale_base = (self.scale_base + SCALE_STEP).min(MAX_SCALE_BASE);
    }

    pub(crate) fn decrease_scale(&mut self) {
        self.scale_base = self
            .scale_base
            .saturating_sub(SCALE_STEP)
            .max(MIN_SCALE_BASE);
    }

    /// Sum of effects of the selected adjustments (not clamped)
    pub(crate) fn total_adjustment(&self) -> f64 {
        self.selected
            .iter()
            .map(|id| {
                self.catalog
                    .iter()
                    .find(|a| a.id == *id)
                    .map_or(0.0, |a| a.effect)
            })
            .sum()
    }

    /// Unadjusted series: base + i * (80 + n * 5)
    pub(crate) fn base_series(&self) -> Vec<DataPoint> {
        let n = self.range_size;
        let slope = SLOPE_BASE + n as f64 * SLOPE_PER_POINT;
        (0..n)
            .map(|i| DataPoint {
                index: i + 1,
                value: self.scale_base as f64 + i as f64 * slope,
            })
            .collect()
    }

    /// Series with the total adjustment applied. Values may be zero or
    /// negative when the total reaches -100%.
    pub(crate) fn compute_series(&self) -> Vec<DataPoint> {
        let factor = 1.0 + self.total_adjustment();
        self.base_series()
            .into_iter()
            .map(|p| DataPoint {
                index: p.index,
                value: p.value * factor,
            })
            .collect()
    }
}
