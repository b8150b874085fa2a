//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_export;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::html_dashboard::sections::{format_inr, format_pct};
use crate::adapters::html_dashboard::HtmlDashboardAdapter;
use crate::domain::config_validation::{
    build_dashboard_spec, configured_rng_seed, validate_dashboard_config,
};
use crate::domain::error::DashboardError;
use crate::domain::results::MODELS;
use crate::ports::config_port::ConfigPort;
use crate::ports::dashboard_port::DashboardPort;

use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser, Debug)]
#[command(name = "drlboard", about = "DRL trading results dashboard generator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the dashboard to a standalone HTML file
    Render {
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output path, defaults to dashboard.html
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Custom page template with {{NAME}} placeholders
        #[arg(short, long)]
        template: Option<PathBuf>,
        /// Pin the chart noise source for reproducible output
        #[arg(long)]
        rng_seed: Option<u64>,
    },
    /// Print the model comparison table to the console
    Summary,
    /// Export the synthesized chart series as CSV
    ExportSeries {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short, long)]
        output: PathBuf,
        /// Export the return distribution curves instead of trajectories
        #[arg(long)]
        distributions: bool,
        #[arg(long)]
        rng_seed: Option<u64>,
    },
    /// Validate a dashboard configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Render {
            config,
            output,
            template,
            rng_seed,
        } => run_render(config.as_ref(), output.as_ref(), template.as_ref(), rng_seed),
        Command::Summary => run_summary(),
        Command::ExportSeries {
            config,
            output,
            distributions,
            rng_seed,
        } => run_export_series(config.as_ref(), &output, distributions, rng_seed),
        Command::Validate { config } => run_validate(&config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = DashboardError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

/// Load the config file when one is given, otherwise run on defaults.
fn load_optional_config(path: Option<&PathBuf>) -> Result<FileConfigAdapter, ExitCode> {
    match path {
        Some(p) => load_config(p),
        None => Ok(FileConfigAdapter::empty()),
    }
}

fn run_render(
    config_path: Option<&PathBuf>,
    output_path: Option<&PathBuf>,
    template_path: Option<&PathBuf>,
    rng_seed: Option<u64>,
) -> ExitCode {
    let adapter = match load_optional_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_dashboard_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let spec = build_dashboard_spec(&adapter);
    let seed = rng_seed.or_else(|| configured_rng_seed(&adapter));

    // flag wins over config for both template and output
    let template = template_path
        .map(|p| p.display().to_string())
        .or_else(|| adapter.get_string("report", "template_path"));

    let dashboard = match template {
        Some(path) => {
            eprintln!("Loading template from {path}");
            match fs::read_to_string(&path) {
                Ok(content) => HtmlDashboardAdapter::with_template(content),
                Err(e) => {
                    let err = DashboardError::from(e);
                    eprintln!("error: {err}");
                    return (&err).into();
                }
            }
        }
        None => HtmlDashboardAdapter::new(),
    };

    let output = output_path
        .map(|p| p.display().to_string())
        .or_else(|| adapter.get_string("dashboard", "output"))
        .unwrap_or_else(|| "dashboard.html".to_string());

    eprintln!("Rendering dashboard ({} periods)", spec.periods);
    if let Err(e) = dashboard.write(&spec, seed, &output) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    println!("Dashboard written to {output}");
    ExitCode::SUCCESS
}

fn summary_lines() -> Vec<String> {
    let mut lines = vec![format!(
        "{:<6} {:<14} {:>14} {:>10} {:>12} {:>10} {:>14}",
        "Model", "Badge", "Final Value", "Return", "Volatility", "Win Rate", "Max Drawdown"
    )];
    for model in MODELS {
        lines.push(format!(
            "{:<6} {:<14} {:>14} {:>10} {:>12} {:>10} {:>14}",
            model.name,
            model.badge.text,
            format_inr(model.final_value),
            format_pct(model.annual_return_pct),
            format_pct(model.annual_volatility_pct),
            format_pct(model.win_rate_pct),
            format_inr(model.max_drawdown),
        ));
    }
    lines
}

fn run_summary() -> ExitCode {
    for line in summary_lines() {
        println!("{line}");
    }
    ExitCode::SUCCESS
}

fn run_export_series(
    config_path: Option<&PathBuf>,
    output: &PathBuf,
    distributions: bool,
    rng_seed: Option<u64>,
) -> ExitCode {
    let adapter = match load_optional_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_dashboard_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let spec = build_dashboard_spec(&adapter);

    let result = if distributions {
        csv_export::export_distributions(output)
    } else {
        let seed = rng_seed.or_else(|| configured_rng_seed(&adapter));
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        csv_export::export_trajectories(&spec, &mut rng, output)
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        return (&e).into();
    }

    println!("Series written to {}", output.display());
    ExitCode::SUCCESS
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_dashboard_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    println!("Configuration OK");
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn summary_covers_every_model() {
        let lines = summary_lines();
        assert_eq!(lines.len(), MODELS.len() + 1);
        assert!(lines[0].contains("Max Drawdown"));
        assert!(lines[1].contains("₹41,12,426"));
        assert!(lines.iter().any(|l| l.contains("Conservative")));
    }

    // ExitCode has no PartialEq; compare through Debug
    fn assert_exit(code: ExitCode, expected: u8) {
        assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::from(expected)));
    }

    #[test]
    fn render_with_unreadable_config_maps_to_config_exit_code() {
        let missing = PathBuf::from("/nonexistent/drlboard.ini");
        assert_exit(run_render(Some(&missing), None, None, None), 2);
    }

    #[test]
    fn validate_rejects_bad_config_file() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[series]\nperiods = 0\n").unwrap();
        assert_exit(run_validate(&file.path().to_path_buf()), 2);
    }

    #[test]
    fn render_honours_configured_output_and_template() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("page.html");
        let output = dir.path().join("out/board.html");
        std::fs::write(&template, "custom {{STATS_GRID}}").unwrap();

        let config = dir.path().join("drlboard.ini");
        std::fs::write(
            &config,
            format!(
                "[dashboard]\noutput = {}\n\n[report]\ntemplate_path = {}\n",
                output.display(),
                template.display()
            ),
        )
        .unwrap();

        assert_exit(run_render(Some(&config), None, None, Some(1)), 0);
        let html = std::fs::read_to_string(&output).unwrap();
        assert!(html.starts_with("custom "));
        assert!(html.contains("stat-card"));
    }

    #[test]
    fn validate_accepts_good_config_file() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[series]\nperiods = 21\nrng_seed = 7\n").unwrap();
        assert_exit(run_validate(&file.path().to_path_buf()), 0);
    }
}
