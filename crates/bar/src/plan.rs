use barpath_mesh::{TriangleMesh, Vector3};

use crate::{
    config::BarConfig,
    curve::{polyline_length, BarCurve},
    error::BarError,
    extrude::extrude_bar,
    measure::Length,
    order::{polar_sweep_order, x_order},
};

/// The shaped bar for one set of fiducials: the generation-ordered control
/// points plus both length measurements.
#[derive(Debug, Clone)]
pub struct BarPlan {
    control_points: Vec<Vector3>,
    markup_length: Length,
    generated_length: Length,
}

/// Shapes a bar through the marked fiducials.
///
/// The markup length is measured over the raw fiducials in ascending-x
/// order, while the curve and the solid use the polar sweep order. The two
/// orderings differ on purpose: the measurement describes the markup as
/// placed, generation needs the seam-free sweep. Feeding the x-sorted list
/// into the sweep keeps equal-angle ties in x order.
pub fn plan_bar(points: &[Vector3], config: &BarConfig) -> Result<BarPlan, BarError> {
    log::info!("shaping bar through {} fiducials", points.len());

    let marked = x_order(points)?;
    let markup_length = Length::millimeters(polyline_length(&marked));

    let control_points = polar_sweep_order(&marked)?;
    let curve = BarCurve::fit(&control_points)?;
    let generated_length = Length::millimeters(curve.length(config.curve_samples));

    log::debug!(
        "markup length {:.3} mm, generated length {:.3} mm",
        markup_length.value(),
        generated_length.value()
    );

    Ok(BarPlan {
        control_points,
        markup_length,
        generated_length,
    })
}

impl BarPlan {
    /// Control points in generation order.
    pub fn control_points(&self) -> &[Vector3] {
        self.control_points.as_slice()
    }

    /// Length of the markup polyline as placed, in millimeters.
    pub fn markup_length(&self) -> Length {
        self.markup_length
    }

    /// Arc length of the generated curve, in millimeters.
    pub fn generated_length(&self) -> Length {
        self.generated_length
    }

    /// Builds the printable solid for this plan.
    ///
    /// The solid is extruded from the control points themselves, not from
    /// curve samples, so its facet count stays proportional to the number
    /// of fiducials.
    pub fn solid<M: TriangleMesh>(&self, config: &BarConfig) -> Result<M, BarError> {
        log::info!(
            "extruding {} stations, width {} mm, depth {} mm",
            self.control_points.len(),
            config.width,
            config.depth
        );
        extrude_bar(&self.control_points, config.width, config.depth)
    }
}
