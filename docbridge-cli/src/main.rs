// Command-line interface for docbridge
//
// This binary converts structured document JSON exports into embeddable
// HTML fragments. The conversion itself lives in the docbridge-html crate;
// this is the shell around it: argument parsing, file I/O, and
// configuration layering.
//
// Usage:
//  docbridge <input.json> [--output <file>] [--config <file>] [--route <docId>=<path>]...
//
// Configuration:
//
// Routes for cross-document links come from the layered configuration:
// embedded defaults, then docbridge.toml in the working directory (or the
// file named by --config, which must exist). Each --route flag adds one
// mapping on top of the file-provided ones; document ids given this way
// keep their exact case.

use clap::{Arg, ArgAction, Command, ValueHint};
use docbridge_config::{DocbridgeConfig, Loader};
use docbridge_html::{parse_document, render_html};
use std::fs;

fn build_command() -> Command {
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

fn main() {
    let matches = build_command().get_matches();

    let input = matches
        .get_one::<String>("input")
        .expect("input is required");
    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });
    let document = parse_document(&source).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let mut config = load_config(matches.get_one::<String>("config").map(String::as_str));
    if let Some(routes) = matches.get_many::<String>("route") {
        for route in routes {
            let Some((document_id, path)) = route.split_once('=') else {
                eprintln!("Error: invalid --route '{route}', expected <docId>=<path>");
                std::process::exit(1);
            };
            config
                .routes
                .insert(document_id.to_string(), path.to_string());
        }
    }

    let html = render_html(&document, &config.render_options());

    match matches.get_one::<String>("output") {
        Some(path) => fs::write(path, &html).unwrap_or_else(|e| {
            eprintln!("Error writing file '{path}': {e}");
            std::process::exit(1);
        }),
        None => println!("{html}"),
    }
}

/// Load the layered configuration. An explicit --config file must exist;
/// the implicit docbridge.toml is optional.
fn load_config(path: Option<&str>) -> DocbridgeConfig {
    let loader = match path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file("docbridge.toml"),
    };
    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        std::process::exit(1);
    })
}
