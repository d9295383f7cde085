//! CLI entry point for labelguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All policy logic lives in the `labelguard-app` crate.

mod logging;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use labelguard_app::{
    ExplainOutput, format_explanation, format_not_found, run_explain, serialize_response,
    validate, validate_settings,
};
use logging::LogFormat;
use serde_json::Value;
use std::io::{Read, Write};

/// Exit code for a rejected request or invalid settings.
const EXIT_REJECTED: i32 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "labelguard",
    version,
    about = "Admission policy that denies or constrains workload labels"
)]
struct Cli {
    /// Log level used when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Diagnostics format on stderr.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a validation request and print the response.
    Validate {
        /// Path to the validation request JSON (`-` for stdin).
        #[arg(long, default_value = "-")]
        request: Utf8PathBuf,

        /// Settings file replacing the request's `settings` member.
        #[arg(long, conflicts_with = "settings_json")]
        settings: Option<Utf8PathBuf>,

        /// Inline settings JSON replacing the request's `settings` member.
        #[arg(long)]
        settings_json: Option<String>,
    },

    /// Validate a settings document and print the response.
    ValidateSettings {
        /// Path to the settings JSON (`-` for stdin).
        #[arg(long, default_value = "-")]
        settings: Utf8PathBuf,
    },

    /// Explain an outcome code with remediation guidance.
    Explain {
        /// The code to explain (e.g. "label_denied").
        code: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level, cli.log_format)?;
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), command = ?cli.cmd, "starting");

    let code = match cli.cmd {
        Commands::Validate {
            request,
            settings,
            settings_json,
        } => cmd_validate(&request, settings.as_deref(), settings_json.as_deref())?,
        Commands::ValidateSettings { settings } => cmd_validate_settings(&settings)?,
        Commands::Explain { code } => cmd_explain(&code),
    };

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn cmd_validate(
    request_path: &Utf8Path,
    settings_path: Option<&Utf8Path>,
    settings_json: Option<&str>,
) -> anyhow::Result<i32> {
    let payload = read_input(request_path).context("read validation request")?;

    let settings_text = match (settings_path, settings_json) {
        (Some(path), _) => Some(read_input(path).context("read settings")?),
        (None, Some(json)) => Some(json.as_bytes().to_vec()),
        (None, None) => None,
    };

    let payload = match settings_text {
        Some(text) => with_settings(payload, &text)?,
        None => payload,
    };

    let response = validate(&payload);
    write_response(&serialize_response(&response).context("serialize response")?)?;

    Ok(if response.allowed { 0 } else { EXIT_REJECTED })
}

/// Replace the `settings` member of a request. Payloads that are not JSON objects are passed
/// through untouched so that the engine reports them as malformed.
fn with_settings(payload: Vec<u8>, settings: &[u8]) -> anyhow::Result<Vec<u8>> {
    let settings: Value = serde_json::from_slice(settings).context("parse settings JSON")?;

    let Ok(Value::Object(mut request)) = serde_json::from_slice::<Value>(&payload) else {
        return Ok(payload);
    };
    request.insert("settings".to_string(), settings);

    serde_json::to_vec(&Value::Object(request)).context("re-encode validation request")
}

fn cmd_validate_settings(settings_path: &Utf8Path) -> anyhow::Result<i32> {
    let payload = read_input(settings_path).context("read settings")?;

    let response = validate_settings(&payload);
    write_response(&serialize_response(&response).context("serialize response")?)?;

    Ok(if response.valid { 0 } else { EXIT_REJECTED })
}

fn cmd_explain(code: &str) -> i32 {
    match run_explain(code) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            0
        }
        ExplainOutput::NotFound {
            code,
            available_codes,
        } => {
            eprint!("{}", format_not_found(&code, available_codes));
            1
        }
    }
}

fn read_input(path: &Utf8Path) -> anyhow::Result<Vec<u8>> {
    if path.as_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("read stdin")?;
        return Ok(buf);
    }
    std::fs::read(path).with_context(|| format!("read {path}"))
}

fn write_response(bytes: &[u8]) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(bytes).context("write response")?;
    stdout.write_all(b"\n").context("write response")?;
    Ok(())
}
