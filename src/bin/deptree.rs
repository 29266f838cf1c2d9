//! Command-line interface for deptree
//! Reads an ASCII dependency tree (as printed by the parser, diagnostics preamble and all)
//! and writes it out in one of the registered formats.
//!
//! Usage:
//!   deptree [`<path>`|-] [--format `<format>`] [--config `<file>`] [--set key=value]...
//!   deptree --list-formats
//!
//! A `deptree.toml` in the working directory is picked up automatically.

use clap::{Arg, ArgAction, Command};
use deptree::config::{DeptreeConfig, Loader};
use deptree::error::format_source_context;
use deptree::formats::treeviz::TreevizFormatter;
use deptree::formats::FormatRegistry;
use deptree::parsing::{strip_preamble, TreeParser};
use std::io::Read;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("deptree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert ASCII dependency-parse trees into arc diagrams")
        .arg(
            Arg::new("path")
                .help("Path to the parser output; '-' or nothing reads stdin")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default from config: arcs)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("set")
                .long("set")
                .value_name("KEY=VALUE")
                .help("Override one configuration key, e.g. parser.strict_depth=false")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log to stderr (-v debug, -vv trace)")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_tracing(matches.get_count("verbose"));

    let mut registry = FormatRegistry::with_defaults();
    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return;
    }

    let overrides: Vec<&String> = matches
        .get_many::<String>("set")
        .map(|values| values.collect())
        .unwrap_or_default();
    let config = load_config(matches.get_one::<String>("config"), &overrides);
    // Redraw in the configured layout so the output parses back under it.
    registry.register(TreevizFormatter::with_layout(config.parser.clone()));
    let format = matches
        .get_one::<String>("format")
        .cloned()
        .unwrap_or_else(|| config.output.format.clone());
    let path = matches.get_one::<String>("path").map(String::as_str);

    handle_convert_command(&registry, &config, path, &format);
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&String>, overrides: &[&String]) -> DeptreeConfig {
    let mut loader = Loader::new().with_optional_file("deptree.toml");
    if let Some(path) = path {
        loader = loader.with_file(path);
    }
    for entry in overrides {
        let Some((key, value)) = entry.split_once('=') else {
            eprintln!("Invalid override '{}', expected KEY=VALUE", entry);
            std::process::exit(2);
        };
        loader = loader.set_override(key, value).unwrap_or_else(|e| {
            eprintln!("Invalid override '{}': {}", entry, e);
            std::process::exit(2);
        });
    }
    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(2);
    })
}

fn read_input(path: Option<&str>) -> std::io::Result<String> {
    match path {
        None | Some("-") => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        Some(path) => std::fs::read_to_string(path),
    }
}

/// Handle the default convert command
fn handle_convert_command(
    registry: &FormatRegistry,
    config: &DeptreeConfig,
    path: Option<&str>,
    format: &str,
) {
    let raw = read_input(path).unwrap_or_else(|e| {
        eprintln!("Error reading input: {}", e);
        std::process::exit(1);
    });
    let source = strip_preamble(&raw, &config.parser);
    tracing::debug!(bytes = source.len(), format, "converting");

    let tree = TreeParser::new(config.parser.clone())
        .parse(source)
        .unwrap_or_else(|e| {
            eprintln!("Parse error: {}", e);
            if let Some(line_number) = e.line_number() {
                eprintln!();
                eprint!("{}", format_source_context(source, line_number));
            }
            std::process::exit(1);
        });

    let output = registry
        .serialize(&tree, format, &config.output.params())
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            eprintln!("Available formats: {}", registry.list_formats().join(", "));
            std::process::exit(1);
        });

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
}

/// Handle the list-formats command
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available output formats:\n");

    for name in registry.list_formats() {
        if let Ok(formatter) = registry.get(&name) {
            println!("  {}", name);
            println!("    {}", formatter.description());
            println!();
        }
    }
}
