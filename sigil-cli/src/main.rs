//! Sigil fingerprint runner
//!
//! Loads an environment snapshot (JSON file, or the built-in sample when
//! none is given), runs the probe-aggregation engine over the selected
//! registry variant, and prints the fingerprint result as JSON.

use std::sync::Arc;

use anyhow::Context;
use tracing::{debug, info};

use sigil_core::fingerprint;
use sigil_probes::{minimal_registry, standard_registry, Environment, STABLE_COMPONENTS};

const VERSION: &str = env!("CARGO_PKG_VERSION");

struct Options {
    env_path: Option<String>,
    variant: Variant,
    pretty: bool,
}

#[derive(Clone, Copy, PartialEq)]
enum Variant {
    Standard,
    Minimal,
}

fn print_help() {
    eprintln!("sigil {} - environment fingerprint runner", VERSION);
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    sigil [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -e, --env PATH        Environment snapshot JSON (default: built-in sample)");
    eprintln!("    -r, --registry NAME   Registry variant: standard | minimal");
    eprintln!("    -p, --pretty          Pretty-print the result");
    eprintln!("    -v, --version         Print version");
    eprintln!("    -h, --help            Print this help");
    eprintln!();
    eprintln!("ENVIRONMENT:");
    eprintln!("    SIGIL_LOG             Log level (trace, debug, info, warn, error)");
}

fn parse_args() -> Option<Options> {
    let args: Vec<String> = std::env::args().collect();
    let mut options = Options {
        env_path: None,
        variant: Variant::Standard,
        pretty: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return None;
            }
            "-v" | "--version" => {
                println!("sigil {}", VERSION);
                return None;
            }
            "-p" | "--pretty" => {
                options.pretty = true;
            }
            "-e" | "--env" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --env requires a path argument");
                    std::process::exit(1);
                }
                options.env_path = Some(args[i].clone());
            }
            "-r" | "--registry" => {
                i += 1;
                match args.get(i).map(String::as_str) {
                    Some("standard") => options.variant = Variant::Standard,
                    Some("minimal") => options.variant = Variant::Minimal,
                    other => {
                        eprintln!("Error: unknown registry variant {:?}", other);
                        std::process::exit(1);
                    }
                }
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    Some(options)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let options = match parse_args() {
        Some(options) => options,
        None => return Ok(()),
    };

    let log_level = std::env::var("SIGIL_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_env_filter(&log_level)
        .with_writer(std::io::stderr)
        .init();

    let env = match &options.env_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read environment snapshot {path}"))?;
            let env = Environment::from_json(&json)
                .with_context(|| format!("failed to parse environment snapshot {path}"))?;
            info!("loaded environment snapshot from {path}");
            env
        }
        None => {
            debug!("no snapshot given, using built-in sample environment");
            Environment::sample()
        }
    };

    let env = Arc::new(env);
    let registry = match options.variant {
        Variant::Standard => standard_registry(&env)?,
        Variant::Minimal => minimal_registry(&env)?,
    };
    debug!("registry holds {} probes", registry.len());

    let result = fingerprint(&registry, STABLE_COMPONENTS, None)
        .await
        .context("fingerprinting failed")?;

    let output = if options.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{output}");

    Ok(())
}
