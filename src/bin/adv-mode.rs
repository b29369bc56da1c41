//! Command-line interface for adv-mode
//! This binary annotates a script for ADV-mode rendering and writes the result.
//!
//! Usage:
//!   adv-mode `<input>` [-o `<output>`] [-c `<config.toml>`] [-f `<format>`] [--no-stamp]
//!   adv-mode --list-formats
//!
//! Set `RUST_LOG` (e.g. `RUST_LOG=adv_mode=debug`) or pass `--verbose` to see what the
//! passes did.

use adv_mode::adv::config::{AdvConfig, Loader};
use adv_mode::adv::processor::{convert_file, process_file, OutputFormat};
use adv_mode::adv::AdvError;
use clap::{Arg, ArgAction, ArgMatches, Command};

fn main() {
    let matches = Command::new("adv-mode")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Annotates visual novel scripts with pacing metadata for ADV-mode rendering")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Path to the script to annotate")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Where to write the result (default: stdout)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: script, token-simple, token-json, report-json"),
        )
        .arg(
            Arg::new("no-stamp")
                .long("no-stamp")
                .help("Keep wait markers as written instead of stamping annotations into them")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log pipeline stages to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_tracing(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    if let Err(e) = handle_convert_command(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Install the tracing subscriber. Nothing is logged unless `RUST_LOG` is set or
/// `verbose` is requested.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("adv_mode=debug")
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        return;
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .init();
}

fn load_config(matches: &ArgMatches) -> Result<AdvConfig, AdvError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        let format: OutputFormat = format.parse()?;
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if matches.get_flag("no-stamp") {
        loader = loader.set_override("render.stamp_wait_markers", false)?;
    }
    Ok(loader.build()?)
}

/// Handle the conversion
fn handle_convert_command(matches: &ArgMatches) -> Result<(), AdvError> {
    let config = load_config(matches)?;
    let input = matches
        .get_one::<String>("input")
        .expect("input is required unless listing formats");

    match matches.get_one::<String>("output") {
        Some(output) => convert_file(input, output, &config)?,
        None => print!("{}", process_file(input, &config, config.output.format)?),
    }
    Ok(())
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");
    for format in OutputFormat::available() {
        println!("  {}", format);
    }
}
