// src/bin/post_crypt.rs
//! post-crypt CLI: encrypt or decrypt pasted text and files with a passphrase

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use post_crypt::consts::{DEFAULT_LOG_FILTER, ENV_PASSPHRASE};
use post_crypt::{
    decrypt_file, decrypt_text, describe_file, encrypt_file, encrypt_text, format_file_size,
    load_config, parse_passphrase, CoreError, ErrorKind, FileKind, Passphrase,
};
use rpassword::prompt_password;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

type FilterHandle = reload::Handle<EnvFilter, Registry>;

#[derive(Debug, Parser)]
#[command(name = "post-crypt", version, about = "Passphrase-keyed AES-256-CBC for text and files")]
struct Cli {
    /// Passphrase; prompted for when absent
    #[arg(
        short,
        long,
        env = ENV_PASSPHRASE,
        hide_env_values = true,
        global = true
    )]
    passphrase: Option<String>,

    /// Config file (default: $POST_CRYPT_CONFIG or ./post-crypt.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Encrypt a message and print it as base64
    EncryptText {
        /// Message to encrypt; read from stdin when absent
        #[arg(short, long)]
        text: Option<String>,
    },
    /// Decrypt a base64 message and print the plaintext
    DecryptText {
        /// Base64 blob; read from stdin when absent
        #[arg(short, long)]
        text: Option<String>,
    },
    /// Encrypt a file byte-for-byte
    EncryptFile { input: PathBuf, output: PathBuf },
    /// Decrypt a file written by encrypt-file
    DecryptFile { input: PathBuf, output: PathBuf },
    /// Show name, size and type of a file
    Info { path: PathBuf },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let (code, message) = describe_failure(&err);
            eprintln!("error: {message}");
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let reloadable = init_tracing(cli.verbose);
    let config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(handle) = reloadable {
        handle
            .reload(EnvFilter::new(&config.logging.filter))
            .context("Failed to apply configured log filter")?;
    }
    debug!(?config, "configuration loaded");

    match cli.command {
        Command::EncryptText { text } => {
            let passphrase = read_passphrase(cli.passphrase)?;
            let message = read_text(text)?;
            let encoded = encrypt_text(&message, &passphrase)?;
            println!("{encoded}");
        }
        Command::DecryptText { text } => {
            let passphrase = read_passphrase(cli.passphrase)?;
            let encoded = read_text(text)?;
            let message = decrypt_text(&encoded, &passphrase)?;
            println!("{message}");
        }
        Command::EncryptFile { input, output } => {
            let passphrase = read_passphrase(cli.passphrase)?;
            let written = encrypt_file(&input, &output, &passphrase, &config.limits)?;
            report_written("Encrypted", &input, &output, written);
        }
        Command::DecryptFile { input, output } => {
            let passphrase = read_passphrase(cli.passphrase)?;
            let written = decrypt_file(&input, &output, &passphrase, &config.limits)?;
            report_written("Decrypted", &input, &output, written);
        }
        Command::Info { path } => {
            let file = describe_file(&path)?;
            let kind = match file.kind {
                FileKind::Image => "image",
                FileKind::Video => "video",
                FileKind::Other => "other",
            };
            println!("Name: {}", file.name);
            println!("Size: {}", format_file_size(file.size));
            match file.extension {
                Some(ext) => println!("Type: {} ({kind})", ext.to_ascii_uppercase()),
                None => println!("Type: ({kind})"),
            }
            if file.size > config.limits.max_file_size {
                println!(
                    "Warning: exceeds the {} limit for encrypt-file/decrypt-file",
                    format_file_size(config.limits.max_file_size)
                );
            }
        }
    }

    Ok(())
}

/// Install the subscriber before the config is read
///
/// `-v` and `RUST_LOG` are final. Otherwise the default filter is a
/// placeholder and the returned handle swaps in the configured one.
fn init_tracing(verbose: bool) -> Option<FilterHandle> {
    let (filter, fixed) = startup_filter(verbose, EnvFilter::try_from_default_env().ok());
    let (filter, handle) = reload::Layer::new(filter);

    // stdout carries the command output
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    (!fixed).then_some(handle)
}

/// The filter in force while the config loads, and whether it is final
fn startup_filter(verbose: bool, from_env: Option<EnvFilter>) -> (EnvFilter, bool) {
    if verbose {
        return (EnvFilter::new("debug"), true);
    }
    match from_env {
        Some(filter) => (filter, true),
        None => (EnvFilter::new(DEFAULT_LOG_FILTER), false),
    }
}

fn read_passphrase(given: Option<String>) -> Result<Passphrase> {
    let raw = match given {
        Some(raw) => raw,
        None => prompt_password("Passphrase: ").context("Failed to read passphrase")?,
    };
    Ok(parse_passphrase(raw)?)
}

fn read_text(given: Option<String>) -> Result<String> {
    if let Some(text) = given {
        return Ok(text);
    }

    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read message from stdin")?;
    Ok(strip_line_ending(text))
}

/// Drop one trailing `\n` or `\r\n`, as left by `echo` or a terminal
fn strip_line_ending(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

fn report_written(verb: &str, input: &Path, output: &Path, written: u64) {
    info!(input = %input.display(), output = %output.display(), written, "{verb} file");
    println!(
        "{verb} {} → {} ({})",
        input.display(),
        output.display(),
        format_file_size(written)
    );
}

/// Map a failure to an exit code and the sentence shown to the user
fn describe_failure(err: &anyhow::Error) -> (u8, String) {
    let Some(core) = err.downcast_ref::<CoreError>() else {
        return (1, format!("{err:#}"));
    };

    match (core.kind(), core) {
        (ErrorKind::EmptyInput, CoreError::EmptyInput(field)) => {
            (2, format!("no {field} provided"))
        }
        (ErrorKind::MalformedInput, _) => (3, "input is not a valid encrypted message".into()),
        (ErrorKind::DecryptionFailure, _) => (
            4,
            "decryption failed: wrong passphrase or corrupted data".into(),
        ),
        (ErrorKind::InputTooLarge, CoreError::InputTooLarge { size, limit }) => (
            5,
            format!(
                "file is too large ({}); the maximum is {}",
                format_file_size(*size),
                format_file_size(*limit)
            ),
        ),
        _ => (1, format!("{err:#}")),
    }
}
