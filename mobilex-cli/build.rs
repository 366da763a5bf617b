use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the CLI from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("mobilex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert mobiledoc documents to lexical editor JSON")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a document (default command)")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(Arg::new("from").long("from").value_hint(ValueHint::Other))
                .arg(Arg::new("to").long("to").value_hint(ValueHint::Other))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                )
                .arg(Arg::new("pretty").long("pretty").action(ArgAction::SetTrue))
                .arg(
                    Arg::new("root-direction")
                        .long("root-direction")
                        .value_parser(["first-section", "appended-section"]),
                ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "mobilex", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "mobilex", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "mobilex", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
