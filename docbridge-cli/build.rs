use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the command from src/main.rs.
// We need to duplicate this here since build scripts can't access src/ modules
fn cli() -> Command {
    Command::new("docbridge")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert structured document JSON exports to embeddable HTML fragments")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Path to the document JSON export")
                .required(true)
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write the fragment to a file instead of stdout")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration file layered over the built-in defaults")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("route")
                .long("route")
                .value_name("DOC_ID=PATH")
                .help("Map a document id to an internal route (repeatable)")
                .action(ArgAction::Append),
        )
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = cli();

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "docbridge", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "docbridge", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "docbridge", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
