use clap::{Parser, Subcommand};

#[derive(clap::Args, Debug)]
pub struct MeasureArgs {
    /// Fiducial file: one x y z triple per line, millimeters.
    pub fiducials: String,
}

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Fiducial file: one x y z triple per line, millimeters.
    pub fiducials: String,

    /// Output path for the OBJ solid.
    #[arg(short, long)]
    pub output: String,

    /// Cross-section half-width along z, in millimeters.
    #[arg(long)]
    pub width: Option<f32>,

    /// Cross-section half-depth along y, in millimeters.
    #[arg(long)]
    pub depth: Option<f32>,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Report the markup and generated bar lengths in inches.
    Measure(MeasureArgs),
    /// Generate the bar solid and write it as OBJ.
    Export(ExportArgs),
}
