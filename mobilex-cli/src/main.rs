// Command-line interface for mobilex
//
// This binary converts mobiledoc documents on disk into lexical editor JSON.
// The conversion itself lives in the mobilex-babel crate; this crate only deals with
// files, configuration and process exit codes.
//
// Converting:
//
// The source format is auto-detected from the file extension, while being overwrittable by an
// explicit --from flag. The target defaults to lexical.
// Usage:
//  mobilex <input> [--to <format>] [--from <format>] [--output <file>]          - Convert (default)
//  mobilex convert <input> [--to <format>] [--from <format>] [--output <file>]  - Same as above
//  mobilex --list-formats                                                       - List formats
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the target format.
// Example:
//  mobilex post.mobiledoc --extra-pretty true

use clap::{Arg, ArgAction, Command, ValueHint};
use mobilex_babel::formats::MobiledocFormat;
use mobilex_babel::{ConversionRules, Format, FormatRegistry, RootDirectionRule};
use mobilex_config::{Loader, MobilexConfig};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};

const SUBCOMMANDS: &[&str] = &["convert", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        if let Some(key) = arg.strip_prefix("--extra-") {
            let has_value = args.get(i + 1).is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("mobilex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert mobiledoc documents to lexical editor JSON")
        .long_about(
            "mobilex converts documents stored as mobiledoc into the JSON tree loaded by\n\
            the lexical editor.\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            mobilex post.mobiledoc                       # Convert to lexical (stdout)\n  \
            mobilex post.mobiledoc --pretty -o out.json  # Indented output to a file\n  \
            cat post.json | mobilex - --to lexical       # Read from stdin",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a mobilex.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log conversion diagnostics to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a document (default command)")
                .long_about(
                    "Convert a document between formats.\n\n\
                    Supported formats:\n  \
                    - mobiledoc: Mobiledoc JSON (.mobiledoc), input only\n  \
                    - lexical:   Lexical editor JSON (.lexical), output only\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Use '-' as the input to read mobiledoc from stdin.\n\
                    Output goes to stdout by default, or use -o to specify a file.",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path, or '-' for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format")
                        .default_value("lexical")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("pretty")
                        .long("pretty")
                        .help("Indent the JSON output")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("root-direction")
                        .long("root-direction")
                        .help("Which section decides the root text direction")
                        .value_parser(clap::builder::PossibleValuesParser::new([
                            "first-section",
                            "appended-section",
                        ])),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let (cleaned_args, extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A first argument that is not a flag or subcommand is an input path:
            // inject "convert" and try again.
            if cleaned_args.len() > 1
                && (cleaned_args[1] == "-" || !cleaned_args[1].starts_with('-'))
                && !SUBCOMMANDS.contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    let level = if matches.get_flag("verbose") {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let to = sub_matches
                .get_one::<String>("to")
                .expect("to has a default");

            if sub_matches.get_flag("pretty") {
                config.convert.pretty = true;
            }
            if let Some(rule) = sub_matches.get_one::<String>("root-direction") {
                config.convert.root_direction = parse_rule(rule);
            }

            let from = match sub_matches.get_one::<String>("from") {
                Some(f) => f.to_string(),
                None if input == "-" => "mobiledoc".to_string(),
                None => {
                    let registry = FormatRegistry::default();
                    match registry.detect_format_from_filename(input) {
                        Some(detected) => detected,
                        None => {
                            eprintln!("Error: Could not detect format from filename '{input}'");
                            eprintln!("Please specify --from explicitly");
                            std::process::exit(1);
                        }
                    }
                }
            };

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &from, to, output, &extra_params, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &MobilexConfig,
) {
    let mut registry = FormatRegistry::default();
    registry.register(MobiledocFormat::new(ConversionRules::from(&config.convert)));

    if let Err(e) = registry.get(from) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = read_input(input).unwrap_or_else(|e| {
        eprintln!("Error reading '{input}': {e}");
        std::process::exit(1);
    });

    log::debug!("converting '{input}' from {from} to {to}");

    let doc = registry.parse(&source, from).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });

    let mut format_options = HashMap::new();
    if to == "lexical" && config.convert.pretty {
        format_options.insert("pretty".to_string(), "true".to_string());
    }
    for (key, value) in extra_params {
        format_options.insert(key.clone(), value.clone());
    }

    let result = registry
        .serialize_with_options(&doc, to, &format_options)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, result).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => println!("{result}"),
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            let mut directions = Vec::new();
            if format.supports_parsing() {
                directions.push("from");
            }
            if format.supports_serialization() {
                directions.push("to");
            }
            println!(
                "  {name:<10} {:<28} [{}]",
                format.description(),
                directions.join(", ")
            );
        }
    }
}

fn read_input(input: &str) -> io::Result<String> {
    if input == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        fs::read_to_string(input)
    }
}

fn parse_rule(raw: &str) -> RootDirectionRule {
    raw.parse().unwrap_or_else(|e: String| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn load_cli_config(explicit_path: Option<&str>) -> MobilexConfig {
    let loader = Loader::new().with_optional_file("mobilex.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}
