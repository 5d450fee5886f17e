use clap::Parser;
use xrpl_decode::limits::MAX_OUTPUT_LEN;
use xrpl_decode::{Alphabet, DecodeOptions, VlScheme};

#[derive(Parser, Debug)]
#[command(author, version, about = "Decode a hex-encoded XRPL binary object", long_about = None)]
pub struct Args {
    /// Serialized object as hex (case-insensitive, even length)
    #[arg(value_name = "HEX")]
    pub hex: String,

    /// Use the ledger's published variable-length prefix thresholds
    #[arg(long)]
    pub canonical_vl: bool,

    /// Encode addresses with the ledger's base58 alphabet
    #[arg(long)]
    pub ripple_alphabet: bool,

    /// Maximum size of the decoded text in bytes
    #[arg(long, value_name = "BYTES", default_value_t = MAX_OUTPUT_LEN)]
    pub max_output: usize,

    /// Log filter (e.g. debug, xrpl_decode=trace); RUST_LOG is used when unset
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Builds decoder options from the flags.
    pub fn decode_options(&self) -> DecodeOptions {
        let mut options = DecodeOptions::new().max_output_len(self.max_output);
        if self.canonical_vl {
            options = options.vl_scheme(VlScheme::Canonical);
        }
        if self.ripple_alphabet {
            options = options.alphabet(Alphabet::Ripple);
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["xrpl-decode", "2400000007"]).unwrap();
        assert_eq!(args.hex, "2400000007");
        assert_eq!(args.decode_options(), DecodeOptions::default());
        assert!(args.log_level.is_none());
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from([
            "xrpl-decode",
            "--canonical-vl",
            "--ripple-alphabet",
            "--max-output",
            "4096",
            "--log-level",
            "debug",
            "2400000007",
        ])
        .unwrap();
        let options = args.decode_options();
        assert_eq!(options.vl_scheme, VlScheme::Canonical);
        assert_eq!(options.alphabet, Alphabet::Ripple);
        assert_eq!(options.max_output_len, 4096);
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_hex_is_required() {
        assert!(Args::try_parse_from(["xrpl-decode"]).is_err());
    }
}
