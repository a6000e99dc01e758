use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use bt_discovery::config::loader::load_settings;
use bt_discovery::config::settings::{LogFormat, OutputConfig, OutputFormat};
use bt_discovery::env::SystemEnv;
use bt_discovery::utils::logging::{self, LogLevel};
use bt_discovery::{discover, DiscoveredToken, DiscoveryError, TokenSource};
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info};

const EXIT_NOT_FOUND: u8 = 1;
const EXIT_FAILURE: u8 = 2;

/// Print the bearer token found by the WLCG Bearer Token Discovery procedure
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "BT_DISCOVER_CONFIG")]
    config: Option<PathBuf>,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
    #[arg(long, env = "LOG_FORMAT", value_enum)]
    log_format: Option<LogFormat>,
    /// also print the file the token was read from
    #[arg(long)]
    show_path: bool,
    /// print a JSON object instead of the raw token
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    token: String,
    path: Option<String>,
    source: TokenSource,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("bt-discover: {:#}", err);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    // -------------------------------
    // 1. Settings and logging
    // -------------------------------

    let settings = load_settings(args.config.as_deref(), &SystemEnv)?;
    logging::init_logging(&logging::logging_config(&settings, args.log_level, args.log_format));

    let mut output = settings.output.clone();
    output.show_path |= args.show_path;
    if args.json {
        output.format = OutputFormat::Json;
    }
    debug!("output settings: {:?}", output);

    // -------------------------------
    // 2. Discover token
    // -------------------------------

    match discover() {
        Ok(found) => {
            info!("token found via {}", found.source);
            let mut stdout = std::io::stdout().lock();
            write_token(&mut stdout, &found, &output)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            let code = exit_code(&err);
            if err.is_not_found() {
                eprintln!("bt-discover: {}", err);
            } else {
                eprintln!("bt-discover: {:#}", anyhow::Error::from(err));
            }
            Ok(ExitCode::from(code))
        }
    }
}

/// `NotFound` means no credential is available, anything else means the lookup broke
fn exit_code(err: &DiscoveryError) -> u8 {
    if err.is_not_found() {
        EXIT_NOT_FOUND
    } else {
        EXIT_FAILURE
    }
}

fn write_token(out: &mut impl Write, found: &DiscoveredToken, output: &OutputConfig) -> Result<()> {
    match output.format {
        OutputFormat::Raw => {
            out.write_all(found.token.as_bytes())?;
            out.write_all(b"\n")?;
            if let (true, Some(path)) = (output.show_path, &found.path) {
                writeln!(out, "{}", path.display())?;
            }
        }
        OutputFormat::Json => {
            let report = Report {
                token: String::from_utf8_lossy(found.token.as_bytes()).into_owned(),
                path: found.path.as_ref().map(|path| path.display().to_string()),
                source: found.source,
            };
            serde_json::to_writer(&mut *out, &report).context("cannot encode report")?;
            out.write_all(b"\n")?;
        }
    }
    out.flush()?;
    Ok(())
}
