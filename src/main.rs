//! Module Detail - Entry Point

use clap::Parser;
use module_detail::model::ModuleVariant;
use module_detail::view::{CellScale, PreviewArgs};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// Module Detail - compose and preview the module detail screen
#[derive(Parser, Debug)]
#[command(name = "module-detail")]
#[command(version)]
#[command(about = "Compose the detail screen for a content module and preview it in the terminal")]
pub struct Args {
    /// Module to show: globe, orbit or solar
    #[arg(short, long)]
    pub module: Option<ModuleVariant>,

    /// Show the settings affordance
    #[arg(short, long)]
    pub settings: bool,

    /// Surface width in points; prints the composed scene instead of starting the preview
    #[arg(long, requires = "height", allow_negative_numbers = true)]
    pub width: Option<f64>,

    /// Surface height in points
    #[arg(long, requires = "width", allow_negative_numbers = true)]
    pub height: Option<f64>,

    /// Print the scene as JSON instead of an outline
    #[arg(long, requires = "width")]
    pub json: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Exiting with error");
            eprintln!("module-detail: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = module_detail::config::load_config_with_precedence(args.config.clone())?;
        let merged = module_detail::config::merge_config(config_file);
        let with_env = module_detail::config::apply_env_overrides(merged)?;

        // --settings is a plain switch: only an explicit `true` overrides
        let settings_override = if args.settings { Some(true) } else { None };
        module_detail::config::apply_cli_overrides(with_env, args.module, settings_override)
    };

    module_detail::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    if let (Some(width), Some(height)) = (args.width, args.height) {
        let scene = module_detail::compose(config.module, width, height, config.show_settings)?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&scene)?);
        } else {
            print!("{scene}");
        }
        return Ok(());
    }

    module_detail::view::run_preview(PreviewArgs::new(
        config.module,
        config.show_settings,
        CellScale::new(config.points_per_column, config.points_per_row),
        args.no_color,
    ))?;

    Ok(())
}
