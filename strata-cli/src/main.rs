// Command-line interface for strata
//
// This binary drives the block content conversion pipeline from the shell,
// standing in for the block editor during authoring-pipeline debugging and
// in batch migrations of persisted block payloads.
//
// Payloads travel in the JSON wire shape:
//   { "blockType": string, "text": string, "isHtml"?: boolean }
//
// Usage:
//  strata load <payload.json> [--output <file>]       - Run the load transition only
//  strata serialize <payload.json> [--output <file>]  - Run the save transition only
//  strata roundtrip <payload.json> [--output <file>]  - Load then serialize (the shell's save path)
//  strata --list-block-types                          - List registered block types
//
// The conversion toggles come from strata.toml (layered over the embedded
// defaults) and can be overridden per invocation:
//  strata roundtrip block.json --to-lightweight true

use clap::{Arg, ArgAction, Command, ValueHint};
use serde_json::json;
use strata_config::{Loader, StrataConfig};
use strata_convert::{AuthoredState, BlockPayload, ContentFormat, ConvertError, Pipeline};
use std::fs;

fn build_cli() -> Command {
    Command::new("strata")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting structured content block payloads")
        .long_about(
            "strata is a command-line tool for working with structured content\n\
            block payloads.\n\n\
            Commands:\n  \
            - load:      Run the load transition (persisted payload -> authored state)\n  \
            - serialize: Run the save transition (authored state -> persisted payload)\n  \
            - roundtrip: Load then serialize, as the editor shell would on save\n\n\
            Conversion toggles come from strata.toml and can be overridden with\n\
            --from-lightweight / --to-lightweight.\n\n\
            Examples:\n  \
            strata load block.json                        # Expand for authoring\n  \
            strata roundtrip block.json --to-lightweight true\n  \
            strata --list-block-types                     # Show registered block types",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
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
        )
        .subcommand(
            Command::new("load")
                .about("Run the load transition on a persisted payload")
                .long_about(
                    "Read a payload in the JSON wire shape and run the load\n\
                    transition, printing the resulting authored state.\n\n\
                    With from-lightweight enabled, lightweight content is expanded\n\
                    to the rich authoring syntax. Content already marked rich is\n\
                    never re-expanded.",
                )
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
        )
        .subcommand(
            Command::new("serialize")
                .about("Run the save transition on authored content")
                .long_about(
                    "Treat the input payload's text as the authored rich content\n\
                    and run the save transition, printing the final payload.\n\n\
                    With to-lightweight enabled, the content is compressed back to\n\
                    the lightweight dialect and marked isHtml=false; otherwise it\n\
                    is persisted as-is and marked isHtml=true.",
                )
                .arg(
                    Arg::new("input")
                        .help("Input payload file (text holds the authored content)")
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
        )
        .subcommand(
            Command::new("roundtrip")
                .about("Load a payload and serialize it back (default command)")
                .long_about(
                    "Run a full lifecycle with no intervening edits: load the\n\
                    payload into the authored state, then serialize it back to a\n\
                    fresh payload. Under a fixed configuration this is idempotent.",
                )
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
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "roundtrip"
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            // Check if this is a "missing subcommand" error by seeing if the
            // first arg looks like a file
            if args.len() > 1
                && !args[1].starts_with('-')
                && args[1] != "load"
                && args[1] != "serialize"
                && args[1] != "roundtrip"
                && args[1] != "help"
            {
                // Inject "roundtrip" as the subcommand
                let mut new_args = vec![args[0].clone(), "roundtrip".to_string()];
                new_args.extend_from_slice(&args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    if matches.get_flag("list-block-types") {
        handle_list_block_types();
        return;
    }

    let config = load_cli_config(&matches);
    let pipeline = Pipeline::with_defaults(config.convert.into());

    match matches.subcommand() {
        Some(("load", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_load_command(&pipeline, input, output);
        }
        Some(("serialize", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_serialize_command(&pipeline, input, output);
        }
        Some(("roundtrip", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_roundtrip_command(&pipeline, input, output);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Build the effective configuration: embedded defaults, then an optional
/// user file, then per-invocation flag overrides.
fn load_cli_config(matches: &clap::ArgMatches) -> StrataConfig {
    let mut loader = Loader::new();

    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    } else {
        loader = loader.with_optional_file("strata.toml");
    }

    if let Some(from) = matches.get_one::<bool>("from-lightweight") {
        loader = loader
            .set_override("convert.from_lightweight", *from)
            .unwrap_or_else(|e| {
                eprintln!("Error applying override: {e}");
                std::process::exit(1);
            });
    }
    if let Some(to) = matches.get_one::<bool>("to-lightweight") {
        loader = loader
            .set_override("convert.to_lightweight", *to)
            .unwrap_or_else(|e| {
                eprintln!("Error applying override: {e}");
                std::process::exit(1);
            });
    }

    loader.build().unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {e}");
        std::process::exit(1);
    })
}

fn handle_list_block_types() {
    let pipeline = Pipeline::with_defaults(Default::default());
    let registry = pipeline.registry();
    for block_type in registry.list_block_types() {
        match registry.get(&block_type) {
            Ok(rules) if !rules.description().is_empty() => {
                println!("{block_type}: {}", rules.description());
            }
            _ => println!("{block_type}"),
        }
    }
}

fn handle_load_command(pipeline: &Pipeline, input: &str, output: Option<&str>) {
    let payload = read_payload(input);

    let authored = pipeline.load(payload).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    // The authored state reuses the wire field names; isHtml reports the
    // format of the live authoring copy.
    let rendered = json!({
        "blockType": authored.block_type,
        "text": authored.content,
        "isHtml": authored.format.as_marker(),
    });
    write_output(output, &rendered.to_string());
}

fn handle_serialize_command(pipeline: &Pipeline, input: &str, output: Option<&str>) {
    let payload = read_payload(input);

    // The save transition starts from the authored state; the input's text
    // is the rich content as the editing surface holds it.
    let authored = AuthoredState::new(payload.block_type, payload.text, ContentFormat::Rich);

    let serialized = pipeline.serialize(authored).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    write_output(output, &render_payload(&serialized));
}

fn handle_roundtrip_command(pipeline: &Pipeline, input: &str, output: Option<&str>) {
    let payload = read_payload(input);

    let serialized = pipeline.roundtrip(payload).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    write_output(output, &render_payload(&serialized));
}

fn read_payload(path: &str) -> BlockPayload {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });

    serde_json::from_str(&source).unwrap_or_else(|e| {
        eprintln!("Error: {}", ConvertError::InvalidPayload(e.to_string()));
        std::process::exit(1);
    })
}

fn render_payload(payload: &BlockPayload) -> String {
    serde_json::to_string(payload).unwrap_or_else(|e| {
        eprintln!("Error rendering payload: {e}");
        std::process::exit(1);
    })
}

fn write_output(output: Option<&str>, content: &str) {
    match output {
        Some(path) => {
            fs::write(path, content).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => println!("{content}"),
    }
}
