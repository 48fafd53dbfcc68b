use argh::FromArgs;
use log::LevelFilter;

use crate::functions::Function;
use crate::tables::Table;
use crate::verify::verifier::DOMAIN_SIZE;

/// Fast single-precision exponential and logarithm, with an exhaustive ULP
/// verifier.
#[derive(FromArgs)]
pub struct Opts {
    /// logging level
    #[argh(option, long = "log", default = "LevelFilter::Warn")]
    pub log_level: LevelFilter,

    #[argh(subcommand)]
    pub command: Command,
}

impl Opts {
    /// Parse options from `env::args`.
    pub fn parse() -> Opts {
        argh::from_env()
    }
}

#[derive(FromArgs)]
#[argh(subcommand)]
pub enum Command {
    Verify(VerifyOpts),
    Bench(BenchOpts),
    ErrorScan(ErrorScanOpts),
    Tables(TablesOpts),
}

/// compare an approximation with its reference on every f32 input
#[derive(FromArgs)]
#[argh(subcommand, name = "verify")]
pub struct VerifyOpts {
    /// function to verify
    #[argh(positional)]
    pub function: Function,

    /// number of worker threads (default: available parallelism)
    #[argh(option, short = 'j')]
    pub threads: Option<usize>,

    /// first bit pattern to compare
    #[argh(option, default = "0", from_str_fn(parse_bits))]
    pub start: u64,

    /// bit pattern at which to stop, exclusive
    #[argh(option, default = "DOMAIN_SIZE", from_str_fn(parse_bits))]
    pub end: u64,
}

/// time the approximations against libm on random inputs
#[derive(FromArgs)]
#[argh(subcommand, name = "bench")]
pub struct BenchOpts {
    /// passes over the test vector
    #[argh(option, default = "10000")]
    pub iterations: usize,

    /// length of the test vector
    #[argh(option, default = "10000")]
    pub count: usize,

    /// seed for the test vector
    #[argh(option)]
    pub seed: Option<u64>,
}

/// report the error and monotonicity of the cubic logarithm
#[derive(FromArgs)]
#[argh(subcommand, name = "error-scan")]
pub struct ErrorScanOpts {
    /// upper end of the scanned interval
    #[argh(option, default = "20.0")]
    pub max_range: f64,

    /// number of grid points
    #[argh(option, default = "10000")]
    pub iterations: u32,

    /// number of additional random samples
    #[argh(option, default = "10000")]
    pub count: usize,

    /// seed for the random samples
    #[argh(option)]
    pub seed: Option<u64>,
}

/// print a regenerated lookup table as Rust source
#[derive(FromArgs)]
#[argh(subcommand, name = "tables")]
pub struct TablesOpts {
    /// table to print
    #[argh(positional)]
    pub table: Table,
}

/// Parses a bit pattern given in decimal or with a `0x` prefix.
fn parse_bits(value: &str) -> Result<u64, String> {
    let parsed = match value.strip_prefix("0x") {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => value.parse(),
    };

    parsed.map_err(|err| format!("invalid bit pattern `{value}`: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_patterns() {
        assert_eq!(parse_bits("0x7f800000"), Ok(0x7f800000));
        assert_eq!(parse_bits("4294967296"), Ok(DOMAIN_SIZE));
        assert!(parse_bits("0xzz").is_err());
    }

    #[test]
    fn verify_command() {
        let opts = Opts::from_args(
            &["fastmath"],
            &["--log", "info", "verify", "log-f64", "-j", "8", "--end", "0x100"],
        )
        .unwrap();

        assert_eq!(opts.log_level, LevelFilter::Info);

        let Command::Verify(verify) = opts.command else {
            panic!("expected the verify command");
        };

        assert_eq!(verify.function, Function::LogF64);
        assert_eq!(verify.threads, Some(8));
        assert_eq!(verify.start..verify.end, 0..0x100);
    }

    #[test]
    fn tables_command() {
        let opts =
            Opts::from_args(&["fastmath"], &["tables", "exp-frac"]).unwrap();

        assert!(matches!(
            opts.command,
            Command::Tables(TablesOpts {
                table: Table::ExpFrac
            })
        ));
        assert!(Opts::from_args(&["fastmath"], &["tables", "sine"]).is_err());
    }
}
