use std::path::Path;

use anyhow::Context;
use barpath::{plan_bar, BarConfig, BarPlan};
use barpath_mesh::DefaultMesh;
use barpath_obj::export_obj;

use crate::{args, fiducials};

pub fn measure_command(args: args::MeasureArgs) -> anyhow::Result<()> {
    let points = fiducials::read_fiducials(&args.fiducials)?;
    let plan = plan_bar(&points, &BarConfig::default())?;
    report_lengths(&plan);
    Ok(())
}

pub fn export_command(args: args::ExportArgs) -> anyhow::Result<()> {
    let points = fiducials::read_fiducials(&args.fiducials)?;

    let mut config = BarConfig::default();
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(depth) = args.depth {
        config.depth = depth;
    }

    let plan = plan_bar(&points, &config)?;
    let mesh: DefaultMesh = plan.solid(&config)?;
    export_obj(&mesh, Some(Path::new(&args.output)))
        .with_context(|| format!("writing {}", args.output))?;
    log::info!("wrote {}", args.output);

    report_lengths(&plan);
    Ok(())
}

// Lengths leave the core in millimeters; the inch conversion and the
// 4-digit rounding happen here, once, at the display boundary.
fn report_lengths(plan: &BarPlan) {
    println!(
        "markup length: {:.4} in",
        plan.markup_length().to_inches().value()
    );
    println!(
        "generated length: {:.4} in",
        plan.generated_length().to_inches().value()
    );
}
