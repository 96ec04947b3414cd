#![deny(clippy::all)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

use framecrop::config::{self, Config};
use framecrop::overlay::OverlayStyle;
use framecrop::preferences::{self, Preferences, PreferencesUpdate};
use framecrop::session::{self, parse_resolution, ReplayReport};
use framecrop::{AppError, CropFilter, PaneAppearance, Resolution};

#[derive(Parser)]
#[command(name = "framecrop", version, about = "Crop selection tools for video previews")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a recorded crop interaction and print the resulting filter
    Replay {
        /// JSON script with the preview geometry and interaction steps
        script: PathBuf,

        /// Resolution of the encoded stream (WIDTHxHEIGHT), overrides the script
        #[arg(long, value_parser = parse_resolution)]
        target: Option<Resolution>,

        /// Print the full replay report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a crop filter string, optionally against a frame size
    Check {
        /// Filter in the form crop=WIDTH:HEIGHT:X:Y
        filter: String,

        /// Frame the crop must fit inside (WIDTHxHEIGHT)
        #[arg(long, value_parser = parse_resolution)]
        target: Option<Resolution>,
    },

    /// Show or change the stored preferences
    Prefs {
        /// UI language code (en, no, da, fi, de)
        #[arg(long)]
        language: Option<String>,

        /// Dark (true) or light (false) button styling
        #[arg(long)]
        dark_mode: Option<bool>,

        /// Opacity of the overlay dimming layer, 0.0 to 0.9
        #[arg(long)]
        dim_opacity: Option<f64>,
    },
}

fn main() -> Result<()> {
    // Load configuration from embedded config.toml
    let config = config::load_config()?;

    // Initialize tracing for structured logging
    tracing_subscriber::fmt()
        .with_max_level(config.logging.level()?)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Replay {
            script,
            target,
            json,
        } => {
            let report = replay(&script, target, &config)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                match report.filter_string {
                    Some(filter) => println!("{}", filter),
                    None => println!("crop not configurable (missing selection, target, or video size)"),
                }
            }
        }

        Command::Check { filter, target } => {
            println!("{}", check_filter(&filter, target)?);
        }

        Command::Prefs {
            language,
            dark_mode,
            dim_opacity,
        } => {
            let update = PreferencesUpdate {
                language_code: language,
                is_dark_mode: dark_mode,
                overlay_dim_opacity: dim_opacity,
            };
            let prefs = update_prefs(&update)?;
            println!("{}", serde_json::to_string_pretty(&prefs)?);
        }
    }

    Ok(())
}

fn replay(
    script: &Path,
    target: Option<Resolution>,
    config: &Config,
) -> Result<ReplayReport, AppError> {
    let prefs = preferences::load_preferences();
    let overlay = OverlayStyle {
        config: config.overlay,
        ..OverlayStyle::default()
    };
    let appearance = PaneAppearance::from_preferences(&prefs, overlay);
    info!("Using language: {}", appearance.catalog.language());

    let script = session::load_script(script)?;
    Ok(session::replay(&script, target, appearance))
}

fn update_prefs(update: &PreferencesUpdate) -> Result<Preferences, AppError> {
    if update.is_empty() {
        return Ok(preferences::load_preferences());
    }
    Ok(preferences::update_preferences(update)?)
}

/// Parse `filter` and, with a `target`, require it to lie inside that frame
fn check_filter(filter: &str, target: Option<Resolution>) -> Result<CropFilter, AppError> {
    let parsed: CropFilter = filter.trim().parse()?;

    if let Some(frame) = target {
        if parsed.width == 0 || parsed.height == 0 {
            return Err(AppError::EmptyRegion(parsed));
        }
        let right = u64::from(parsed.x) + u64::from(parsed.width);
        let bottom = u64::from(parsed.y) + u64::from(parsed.height);
        if right > u64::from(frame.width) || bottom > u64::from(frame.height) {
            return Err(AppError::OutsideFrame {
                filter: parsed,
                frame,
            });
        }
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Resolution = Resolution::new(1920, 1080);

    #[test]
    fn test_check_filter_inside_frame() {
        let filter = check_filter("crop=70:100:1850:10", Some(FRAME)).unwrap();
        assert_eq!(filter.to_string(), "crop=70:100:1850:10");
    }

    #[test]
    fn test_check_filter_outside_frame() {
        let result = check_filter("crop=71:100:1850:10", Some(FRAME));
        assert!(matches!(result, Err(AppError::OutsideFrame { .. })));
    }

    #[test]
    fn test_check_filter_empty_region() {
        let result = check_filter("crop=0:100:0:0", Some(FRAME));
        assert!(matches!(result, Err(AppError::EmptyRegion(_))));
        assert!(check_filter("crop=0:100:0:0", None).is_ok());
    }

    #[test]
    fn test_check_filter_parse_error() {
        let result = check_filter("crop=1:2", None);
        assert!(matches!(result, Err(AppError::Filter(_))));
    }
}
