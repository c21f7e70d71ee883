use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the CLI from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
const SUBCOMMANDS: &[(&str, &str)] = &[
    ("load", "Run the load transition on a persisted payload"),
    ("serialize", "Run the save transition on authored content"),
    ("roundtrip", "Load a payload and serialize it back"),
];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("strata")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting structured content block payloads")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-block-types")
                .long("list-block-types")
                .help("List registered block types")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a strata.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("from-lightweight")
                .long("from-lightweight")
                .value_name("BOOL")
                .help("Override the load-time expansion toggle")
                .value_parser(clap::value_parser!(bool))
                .global(true),
        )
        .arg(
            Arg::new("to-lightweight")
                .long("to-lightweight")
                .value_name("BOOL")
                .help("Override the save-time compression toggle")
                .value_parser(clap::value_parser!(bool))
                .global(true),
        );

    for (name, about) in SUBCOMMANDS {
        cmd = cmd.subcommand(
            Command::new(*name)
                .about(*about)
                .arg(
                    Arg::new("input")
                        .help("Input payload file (JSON wire shape)")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        );
    }

    generate_to(Bash, &mut cmd, "strata", &outdir)?;
    generate_to(Zsh, &mut cmd, "strata", &outdir)?;
    generate_to(Fish, &mut cmd, "strata", &outdir)?;

    Ok(())
}
