//! Finger-joint generation runs.

use log::{debug, info};
use tabgen_core::Alias;
use tabgen_face::FaceMeasurement;
use tabgen_layout::{LayoutEngine, LayoutResult};
use tabgen_mirror::{ExpressionMirror, MirrorReport, ParameterStore};

use crate::error::TabGenError;
use crate::options::UserOptions;
use crate::placement::{Axis, NotchPlan, PlacementSink};

/// A computed finger joint for one face.
#[derive(Debug, Clone, PartialEq)]
pub struct FingerJoint {
    pub alias: Alias,
    pub layout: LayoutResult,
    /// Present when the run wrote parameters
    pub report: Option<MirrorReport>,
}

/// Runs the layout engine for a measured face and, for parametric runs,
/// mirrors the result into a parameter store.
#[derive(Debug, Clone, Default)]
pub struct TabGenerator {
    engine: LayoutEngine,
}

impl TabGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute a layout without touching any store.
    pub fn preview(&self, options: &UserOptions, measurement: &FaceMeasurement) -> Result<LayoutResult, TabGenError> {
        options.validate(measurement)?;
        Ok(self.engine.compute(&options.layout_inputs(measurement))?)
    }

    /// Compute a layout and, when the options ask for a parametric,
    /// non-preview run, materialize it as parameters in `store`.
    pub fn generate<S>(
        &self,
        options: &UserOptions,
        measurement: &FaceMeasurement,
        store: &mut S,
    ) -> Result<FingerJoint, TabGenError>
    where
        S: ParameterStore + ?Sized,
    {
        let layout = self.preview(options, measurement)?;

        let report = if options.writes_parameters() {
            let mut mirror = ExpressionMirror::new(measurement.alias.clone());
            for (property, parameter) in &options.linked_parameters {
                mirror.bind_external(property, parameter);
            }
            let report = mirror.materialize(&layout, store)?;
            debug!(
                target: "tabgen",
                "{}: {} parameters written, {} collisions",
                measurement.alias,
                report.parameters().len(),
                report.warnings().len()
            );
            Some(report)
        } else {
            None
        };

        info!(
            target: "tabgen",
            "{}: {} fingers of {:.3} {} ({})",
            measurement.alias,
            layout.fingers(),
            layout.finger_width(),
            layout.unit(),
            layout.policy()
        );

        Ok(FingerJoint {
            alias: measurement.alias.clone(),
            layout,
            report,
        })
    }

    /// Plan the notches of a joint along `axis` and hand the plan to `sink`.
    pub fn place<K>(&self, joint: &FingerJoint, axis: Option<Axis>, sink: &mut K) -> Result<NotchPlan, TabGenError>
    where
        K: PlacementSink + ?Sized,
    {
        let plan = NotchPlan::from_layout(&joint.layout, axis)?;
        sink.place(&plan)?;
        Ok(plan)
    }
}
