#![deny(missing_docs)]
//! A command-line interface for the rucrypt classical ciphers.

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{error, info};
use rucrypt_core::{Cipher, CipherKind, build_cipher};
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

mod demo;
mod interactive;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Encrypt with the Gronsfeld cipher\nrucrypt encrypt --key КЛЮЧ \"привет\"\n\n# Decrypt with the transposition cipher\nrucrypt decrypt --cipher transposition --key 3 ИТРЕПВ\n\n# Encrypt a file and print the result as JSON\nrucrypt --json encrypt --key КЛЮЧ --input ./letter.txt\n\n# Run the built-in demo scenarios\nrucrypt demo --cipher transposition\n\n# Start an interactive session\nrucrypt interactive --cipher gronsfeld"
)]
struct Cli {
    /// Print encrypt/decrypt results as a JSON document.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt open text
    Encrypt {
        #[command(flatten)]
        key: KeyArgs,
        #[command(flatten)]
        source: TextArgs,
    },
    /// Decrypt cipher text
    Decrypt {
        #[command(flatten)]
        key: KeyArgs,
        #[command(flatten)]
        source: TextArgs,
    },
    /// Encrypt and decrypt a text, printing every step. Without a text, runs the built-in scenarios.
    Demo {
        /// The cipher to demonstrate
        #[arg(short, long, value_enum, default_value_t = CipherChoice::Gronsfeld)]
        cipher: CipherChoice,

        /// The cipher key. Required when a text is given.
        #[arg(short, long, requires = "text")]
        key: Option<String>,

        /// The open text to run through the cipher
        #[arg()]
        text: Option<String>,

        /// Lowercase the first cipher text letter before decrypting
        #[arg(long, requires = "text")]
        corrupt: bool,
    },
    /// Prompt for a key, then encrypt and decrypt texts until `exit`
    Interactive {
        /// The cipher to use for the session
        #[arg(short, long, value_enum, default_value_t = CipherChoice::Gronsfeld)]
        cipher: CipherChoice,
    },
}

#[derive(Args)]
struct KeyArgs {
    /// The cipher to use
    #[arg(short, long, value_enum, default_value_t = CipherChoice::Gronsfeld)]
    cipher: CipherChoice,

    /// The key: a column count for transposition, a word for Gronsfeld
    #[arg(short, long, env = "RUCRYPT_KEY")]
    key: String,
}

#[derive(Args)]
struct TextArgs {
    /// The text to process. If omitted, --input or standard input is read.
    #[arg(conflicts_with = "input")]
    text: Option<String>,

    /// Read the text from this file
    #[arg(short, long, value_name = "INPUT_FILE")]
    input: Option<PathBuf>,

    /// Write the result to this file instead of standard output
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    output: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CipherChoice {
    /// Table route transposition, keyed by a column count
    Transposition,
    /// Gronsfeld additive cipher, keyed by a word
    Gronsfeld,
}

impl From<CipherChoice> for CipherKind {
    fn from(choice: CipherChoice) -> Self {
        match choice {
            CipherChoice::Transposition => Self::Transposition,
            CipherChoice::Gronsfeld => Self::Gronsfeld,
        }
    }
}

#[derive(Serialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum Operation {
    Encrypt,
    Decrypt,
}

/// Result document printed with `--json`.
#[derive(Serialize)]
struct Report<'a> {
    cipher: CipherKind,
    operation: Operation,
    input: &'a str,
    output: &'a str,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Encrypt { key, source } => transform(Operation::Encrypt, &key, &source, cli.json),
        Commands::Decrypt { key, source } => transform(Operation::Decrypt, &key, &source, cli.json),
        Commands::Demo {
            cipher,
            key,
            text,
            corrupt,
        } => {
            let result = match (key, text) {
                (Some(key), Some(text)) => demo::check(
                    &mut io::stdout(),
                    &mut io::stderr(),
                    &demo::Scenario::custom(cipher.into(), &key, &text, corrupt),
                ),
                (None, Some(_)) => exit_with("A --key is required to demonstrate a custom text."),
                _ => demo::run_builtin(&mut io::stdout(), &mut io::stderr(), cipher.into()),
            };
            if let Err(e) = result {
                exit_with(&format!("Failed to write demo output: {e}"));
            }
        }
        Commands::Interactive { cipher } => {
            let stdin = io::stdin();
            if let Err(e) = interactive::run_session(cipher.into(), stdin.lock(), io::stdout()) {
                exit_with(&format!("Interactive session failed: {e}"));
            }
        }
    }
}

fn transform(operation: Operation, key: &KeyArgs, source: &TextArgs, json: bool) {
    let kind = CipherKind::from(key.cipher);
    let cipher: Box<dyn Cipher> = build_cipher(kind, &key.key).unwrap_or_else(|e| exit_with(&e.to_string()));

    let input = read_text(source).unwrap_or_else(|e| exit_with(&format!("Failed to read input: {e}")));
    info!(
        "Running {kind} {} on {} chars of input.",
        match operation {
            Operation::Encrypt => "encryption",
            Operation::Decrypt => "decryption",
        },
        input.chars().count()
    );

    let result = match operation {
        Operation::Encrypt => cipher.encrypt(&input),
        Operation::Decrypt => cipher.decrypt(&input),
    };
    let output = result.unwrap_or_else(|e| exit_with(&e.to_string()));

    let rendered = if json {
        let report = Report {
            cipher: kind,
            operation,
            input: &input,
            output: &output,
        };
        serde_json::to_string_pretty(&report)
            .unwrap_or_else(|e| exit_with(&format!("Failed to serialize result: {e}")))
    } else {
        output
    };

    match &source.output {
        Some(path) => write_output(path, &rendered),
        None => println!("{rendered}"),
    }
}

/// Reads the text from the positional argument, the input file, or stdin.
///
/// Line endings at the end of a file or of stdin are not part of the text.
fn read_text(source: &TextArgs) -> io::Result<String> {
    if let Some(text) = &source.text {
        return Ok(text.clone());
    }
    let raw = match &source.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    Ok(raw.trim_end_matches(['\n', '\r']).to_string())
}

fn write_output(path: &Path, rendered: &str) {
    if let Err(e) = fs::write(path, format!("{rendered}\n")) {
        exit_with(&format!("Failed to write output file '{}': {e}", path.display()));
    }
    info!("Result written to '{}'.", path.display());
}

fn exit_with(message: &str) -> ! {
    error!("{message}");
    std::process::exit(1);
}
