mod args;
mod input;
mod logging;

use std::process::ExitCode;

use anyhow::{Context, Result};
use xrpl_decode::Decoder;

use crate::args::Args;

fn main() -> ExitCode {
    let args = Args::parse_args();
    logging::init(args.log_level.as_deref());

    match run(&args) {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String> {
    let input = input::parse_hex(&args.hex)?;
    tracing::debug!(bytes = input.len(), "parsed hex input");

    let decoder = Decoder::with_options(args.decode_options());
    decoder
        .decode_to_text(&input)
        .context("could not deserialize")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn run_with(argv: &[&str]) -> Result<String> {
        let args = Args::try_parse_from(argv)?;
        run(&args)
    }

    #[test]
    fn test_decodes_sequence() {
        let text = run_with(&["xrpl-decode", "2400000007"]).unwrap();
        assert_eq!(text, "{\n\tSequence: 7\n}\n");
    }

    #[test]
    fn test_decode_error_is_one_line() {
        let err = run_with(&["xrpl-decode", "F1"]).unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.starts_with("could not deserialize: [E003]"));
        assert!(!msg.contains('\n'));
    }

    #[test]
    fn test_hex_error() {
        let err = run_with(&["xrpl-decode", "241"]).unwrap_err();
        assert_eq!(err.to_string(), "hex length must be even");
    }
}
