use clap::Parser;

mod args;
mod commands;
mod fiducials;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = args::Args::parse();
    match args.command {
        args::Commands::Measure(measure_args) => commands::measure_command(measure_args),
        args::Commands::Export(export_args) => commands::export_command(export_args),
    }
}
