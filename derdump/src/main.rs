use std::io::{Read, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dertree::{DecodeError, DecodeErrorKind};

#[derive(Parser)]
#[command(about = "Decode DER structures and print them as a tree", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode an input and print one line per element.
    Parse {
        /// Input encoding.
        #[arg(long, value_enum, default_value_t = Inform::Der)]
        inform: Inform,
        /// Tolerate bytes after the first top-level element.
        #[arg(long)]
        allow_trailing: bool,
        /// Input file, standard input when omitted.
        path: Option<PathBuf>,
    },
    /// Wrap raw DER bytes in PEM framing.
    Wrap {
        /// Label for the BEGIN and END lines.
        #[arg(long)]
        label: String,
        /// Input file, standard input when omitted.
        path: Option<PathBuf>,
    },
    /// Extract the raw DER payload of the first PEM block.
    Unwrap {
        /// Input file, standard input when omitted.
        path: Option<PathBuf>,
    },
}

#[derive(clap::ValueEnum, Copy, Clone, Debug)]
enum Inform {
    Der,
    Pem,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Parse {
            inform,
            allow_trailing,
            path,
        } => {
            let data = read_input(path)?;
            let der = match inform {
                Inform::Der => data,
                Inform::Pem => strip_text(&data)?.1,
            };
            let mut out = std::io::stdout().lock();
            if allow_trailing {
                let (tlv, _) = dertree::decode_partial(&der)?;
                derdump::render(&tlv, &mut out, 0)?;
            } else {
                let tlv = dertree::decode(&der)?;
                derdump::render(&tlv, &mut out, 0)?;
            }
        }
        Command::Wrap { label, path } => {
            let data = read_input(path)?;
            print!("{}", dertree::pem::wrap(&label, &data));
        }
        Command::Unwrap { path } => {
            let data = read_input(path)?;
            let (_, der) = strip_text(&data)?;
            std::io::stdout().lock().write_all(&der)?;
        }
    }
    Ok(())
}

fn read_input(path: Option<PathBuf>) -> std::io::Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path),
        None => {
            let mut buf = vec![];
            std::io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

// PEM framing operates on text. Non-UTF-8 input is malformed at the first
// invalid byte.
fn strip_text(data: &[u8]) -> Result<(String, Vec<u8>), DecodeError> {
    let text = std::str::from_utf8(data).map_err(|e| {
        DecodeError::new(DecodeErrorKind::MalformedPem, e.valid_up_to())
    })?;
    dertree::pem::strip(text)
}
