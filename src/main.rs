use anyhow::Result;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use geoform::app_logic::{self, ReportOptions};
use geoform::tunnel::InterfaceCondition;

fn common_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("config")
            .short('c')
            .long("config")
            .value_parser(value_parser!(PathBuf))
            .help("Scenario file (.yaml, .yml or .toml); defaults to the reference case"),
    )
    .arg(
        Arg::new("samples")
            .short('n')
            .long("samples")
            .value_parser(value_parser!(usize))
            .help("Number of samples along the sweep"),
    )
    .arg(
        Arg::new("output")
            .short('o')
            .long("output")
            .value_parser(value_parser!(PathBuf))
            .help("Destination of the result table"),
    )
    .arg(
        Arg::new("plot")
            .long("plot")
            .value_parser(value_parser!(PathBuf))
            .help("Directory receiving SVG figures"),
    )
    .arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print the summary as JSON"),
    )
}

fn cli() -> Command {
    Command::new("geoform")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Closed-form tunnel lining response and section capacity envelopes")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            common_args(Command::new("tunnel").about("Lined circular tunnel response over 0-90 degrees"))
                .arg(
                    Arg::new("slip")
                        .long("slip")
                        .value_parser(["no-slip", "full-slip"])
                        .help("Ground-lining interface condition"),
                )
                .arg(
                    Arg::new("lateral-ratio")
                        .short('k')
                        .long("lateral-ratio")
                        .value_parser(value_parser!(f64))
                        .help("Horizontal to vertical far-field stress ratio K"),
                ),
        )
        .subcommand(
            common_args(Command::new("capacity").about("Q-N and M-N interaction envelopes of a section"))
                .arg(
                    Arg::new("reference-qn")
                        .long("reference-qn")
                        .value_parser(value_parser!(PathBuf))
                        .help("Two-column comparison data for the Q-N plot"),
                )
                .arg(
                    Arg::new("reference-mn")
                        .long("reference-mn")
                        .value_parser(value_parser!(PathBuf))
                        .help("Two-column comparison data for the M-N plot"),
                ),
        )
        .after_help("Set RUST_LOG=debug to log every derived coefficient.")
}

fn report_options(matches: &ArgMatches) -> ReportOptions {
    ReportOptions {
        plot_dir: matches.get_one::<PathBuf>("plot").cloned(),
        json: matches.get_flag("json"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let matches = cli().get_matches();
    match matches.subcommand() {
        Some(("tunnel", sub)) => {
            let mut config = app_logic::load_scenario(sub.get_one::<PathBuf>("config").map(PathBuf::as_path))?.tunnel;
            if let Some(slip) = sub.get_one::<String>("slip") {
                config.interface = slip.parse::<InterfaceCondition>()?;
            }
            if let Some(k) = sub.get_one::<f64>("lateral-ratio") {
                config.load.lateral_ratio = *k;
            }
            if let Some(n) = sub.get_one::<usize>("samples") {
                config.samples = *n;
            }
            if let Some(output) = sub.get_one::<PathBuf>("output") {
                config.output = output.clone();
            }
            app_logic::run_tunnel(&config, &report_options(sub))?;
        }
        Some(("capacity", sub)) => {
            let mut config = app_logic::load_scenario(sub.get_one::<PathBuf>("config").map(PathBuf::as_path))?.capacity;
            if let Some(n) = sub.get_one::<usize>("samples") {
                config.samples = *n;
            }
            if let Some(output) = sub.get_one::<PathBuf>("output") {
                config.output = output.clone();
            }
            if let Some(path) = sub.get_one::<PathBuf>("reference-qn") {
                config.reference_qn = Some(path.clone());
            }
            if let Some(path) = sub.get_one::<PathBuf>("reference-mn") {
                config.reference_mn = Some(path.clone());
            }
            app_logic::run_capacity(&config, &report_options(sub))?;
        }
        _ => unreachable!("clap enforces a subcommand"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        cli().debug_assert();
    }

    #[test]
    fn test_tunnel_overrides_parse() {
        let matches = cli()
            .try_get_matches_from(["geoform", "tunnel", "--slip", "full-slip", "-k", "1.0", "-n", "50"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "tunnel");
        assert_eq!(sub.get_one::<String>("slip").unwrap(), "full-slip");
        assert_eq!(*sub.get_one::<f64>("lateral-ratio").unwrap(), 1.0);
        assert_eq!(*sub.get_one::<usize>("samples").unwrap(), 50);
        assert!(!sub.get_flag("json"));
    }

    #[test]
    fn test_rejects_unknown_interface() {
        assert!(cli().try_get_matches_from(["geoform", "tunnel", "--slip", "sticky"]).is_err());
    }
}
