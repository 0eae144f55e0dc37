use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{debug, info};
use potential_surface::prelude::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the Plotly figure for a primary charge magnitude
    Figure {
        /// Magnitude of charges A and B (0.5 to 1.5, step 0.1)
        #[arg(long, default_value_t = SLIDER_DEFAULT)]
        charge: f64,
        /// Write to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Print the label shown under the graph
    Label {
        /// Magnitude of charges A and B (any value, not range-checked)
        #[arg(long, default_value_t = SLIDER_DEFAULT, allow_hyphen_values = true)]
        charge: f64,
    },
    /// Write a standalone HTML page with every slider position
    Page {
        /// Write to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Dump the potential grid as CSV
    Field {
        /// Magnitude of charges A and B
        #[arg(long, default_value_t = SLIDER_DEFAULT)]
        charge: f64,
        /// Write to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Evaluate the potential at a single point of the z = 0 plane
    Probe {
        /// x coordinate of the point
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        /// y coordinate of the point
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
        /// Magnitude of charges A and B (not range-checked)
        #[arg(long, default_value_t = SLIDER_DEFAULT, allow_hyphen_values = true)]
        charge: f64,
        /// Fail instead of printing a non-finite potential
        #[arg(long)]
        checked: bool,
    },
}

fn output(path: Option<&PathBuf>) -> io::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    })
}

fn run(command: Commands) -> Result<(), PotentialError> {
    let mut demo = PotentialDemo::default();
    match command {
        Commands::Figure { charge, out, pretty } => {
            let scene = demo.try_slider_change(charge)?;
            let mut w = output(out.as_ref())?;
            write_figure_json(&mut w, &scene, pretty)?;
            w.flush()?;
            if let Some(path) = out {
                info!("wrote figure for charge {charge} to {}", path.display());
            }
        }
        Commands::Label { charge } => {
            println!("{}", demo.on_slider_change_label(charge));
        }
        Commands::Page { out } => {
            let page = Page::from_demo(&mut demo);
            let mut w = output(out.as_ref())?;
            write_html_page(&mut w, &page)?;
            w.flush()?;
            if let Some(path) = out {
                info!("wrote {} frames to {}", page.frames.len(), path.display());
            }
        }
        Commands::Field { charge, out } => {
            let charge = demo.slider().validate(charge)?;
            let mut model = demo.model().clone();
            model.set_primary_magnitude(charge);
            let field = model.evaluate(demo.grid());
            let mut w = output(out.as_ref())?;
            write_field_csv(&mut w, demo.grid(), &field)?;
            w.flush()?;
        }
        Commands::Probe { x, y, charge, checked } => {
            let mut model = demo.model().clone();
            model.set_primary_magnitude(charge);
            let phi = if checked { model.checked_potential_at(x, y)? } else { model.potential_at(x, y) };
            println!("{phi}");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("{e:?}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn every_argument_has_help() {
        let cmd = Cli::command();
        cmd.clone().debug_assert();
        for sub in cmd.get_subcommands() {
            for arg in sub.get_arguments().filter(|a| a.get_id() != "help") {
                assert!(arg.get_help().is_some(), "{} --{} has no help", sub.get_name(), arg.get_id());
            }
        }
    }

    #[test]
    fn label_accepts_values_outside_the_slider() {
        let cli = Cli::try_parse_from(["potential-surface", "label", "--charge", "7.25"]).unwrap();
        assert!(run(cli.command).is_ok());
        let cli = Cli::try_parse_from(["potential-surface", "label", "--charge", "-2"]).unwrap();
        assert!(run(cli.command).is_ok());
    }

    #[test]
    fn figure_still_rejects_off_slider_values() {
        let cli = Cli::try_parse_from(["potential-surface", "figure", "--charge", "7.25"]).unwrap();
        assert!(matches!(run(cli.command), Err(PotentialError::Control(_))));
    }
}
