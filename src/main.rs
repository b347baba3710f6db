use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crc_engine::{all_algorithms, find_algorithm, AnyCrc};

const CHECK_INPUT: &[u8] = b"123456789";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the built-in CRC presets
    List {
        /// Only show presets of this width (8, 16 or 32)
        #[arg(long)]
        width: Option<u32>,
    },
    /// Compute a checksum
    Calc(CalcArgs),
    /// Verify every preset against its published check value
    Check {
        /// Use table-driven division
        #[arg(long)]
        table: bool,
    },
}

#[derive(Args, Debug)]
struct CalcArgs {
    /// Preset name, e.g. CRC-16/XMODEM (case-insensitive)
    #[arg(short, long, conflicts_with_all = ["width", "poly"])]
    algorithm: Option<String>,

    /// Register width for custom parameters
    #[arg(short, long, requires = "poly")]
    width: Option<u32>,

    /// Generator polynomial
    #[arg(long, value_parser = parse_number)]
    poly: Option<u32>,

    /// Initial register value
    #[arg(long, value_parser = parse_number, default_value = "0")]
    init: u32,

    /// Reflect input bytes
    #[arg(long)]
    refin: bool,

    /// Reflect the final register
    #[arg(long)]
    refout: bool,

    /// Final XOR mask
    #[arg(long, value_parser = parse_number, default_value = "0")]
    xorout: u32,

    /// Use table-driven division
    #[arg(short, long)]
    table: bool,

    /// Print the engine description before the checksum
    #[arg(short, long)]
    verbose: bool,

    #[command(flatten)]
    input: Input,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct Input {
    /// Checksum this text
    #[arg(long)]
    text: Option<String>,

    /// Checksum these hex-encoded bytes
    #[arg(long)]
    hex: Option<String>,

    /// Checksum the contents of this file
    #[arg(long)]
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Commands::List { width } => list(width),
        Commands::Calc(args) => calc(args),
        Commands::Check { table } => check(table),
    }
}

fn parse_number(value: &str) -> Result<u32, String> {
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(&hex.replace('_', ""), 16),
        None => value.replace('_', "").parse(),
    };
    parsed.map_err(|e| format!("invalid number '{}': {}", value, e))
}

fn list(width: Option<u32>) -> Result<()> {
    if let Some(width) = width {
        if ![8, 16, 32].contains(&width) {
            bail!("unsupported CRC width {}, expected 8, 16 or 32", width);
        }
    }

    for algorithm in all_algorithms().filter(|a| width.map_or(true, |w| a.width() == w)) {
        let crc = algorithm.engine(false);
        println!(
            "{:<20} {:>2}  check={}  {}",
            algorithm.name(),
            algorithm.width(),
            crc.format_value(algorithm.check()),
            crc
        );
    }
    Ok(())
}

fn build_engine(args: &CalcArgs) -> Result<AnyCrc> {
    if let Some(name) = &args.algorithm {
        return Ok(find_algorithm(name)?.engine(args.table));
    }

    let (Some(width), Some(poly)) = (args.width, args.poly) else {
        bail!("either --algorithm or both --width and --poly are required");
    };
    let crc = AnyCrc::custom(
        width,
        poly,
        args.init,
        args.refin,
        args.refout,
        args.xorout,
        args.table,
    )?;
    Ok(crc)
}

fn read_input(input: &Input) -> Result<Vec<u8>> {
    if let Some(text) = &input.text {
        Ok(text.as_bytes().to_vec())
    } else if let Some(encoded) = &input.hex {
        let cleaned: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
        hex::decode(&cleaned).with_context(|| format!("Failed to decode hex input '{}'", encoded))
    } else if let Some(path) = &input.file {
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
    } else {
        bail!("no input given");
    }
}

fn calc(args: CalcArgs) -> Result<()> {
    let crc = build_engine(&args)?;
    let data = read_input(&args.input)?;
    debug!(len = data.len(), table = crc.use_table(), "computing checksum");

    if args.verbose {
        println!("{}", crc);
    }
    println!("{}", crc.format_value(crc.calculate(&data)));
    Ok(())
}

fn check(table: bool) -> Result<()> {
    info!("Checking {} presets (table: {})", all_algorithms().count(), table);

    let mut failures = 0;
    for algorithm in all_algorithms() {
        let crc = algorithm.engine(table);
        let value = crc.calculate(CHECK_INPUT);
        let ok = value == algorithm.check();
        if !ok {
            failures += 1;
        }
        println!(
            "{:<20} {}  expected {}  {}",
            algorithm.name(),
            crc.format_value(value),
            crc.format_value(algorithm.check()),
            if ok { "OK" } else { "FAIL" }
        );
    }

    if failures > 0 {
        bail!("{} preset(s) did not match their check value", failures);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("0x1021"), Ok(0x1021));
        assert_eq!(parse_number("0XFFFF_FFFF"), Ok(0xFFFF_FFFF));
        assert_eq!(parse_number("255"), Ok(255));
        assert!(parse_number("0xZZ").is_err());
        assert!(parse_number("").is_err());
    }

    #[test]
    fn test_calc_with_preset() {
        let cli = Cli::try_parse_from([
            "crcsum", "calc", "--algorithm", "crc-32", "--text", "123456789", "--table",
        ])
        .unwrap();
        let Commands::Calc(args) = cli.command else {
            panic!("expected calc");
        };
        let crc = build_engine(&args).unwrap();
        let data = read_input(&args.input).unwrap();
        assert_eq!(crc.calculate(&data), 0xCBF4_3926);
    }

    #[test]
    fn test_calc_with_custom_params() {
        let cli = Cli::try_parse_from([
            "crcsum", "calc", "--width", "16", "--poly", "0x1021", "--init", "0xFFFF", "--hex",
            "31 32 33 34 35 36 37 38 39",
        ])
        .unwrap();
        let Commands::Calc(args) = cli.command else {
            panic!("expected calc");
        };
        let crc = build_engine(&args).unwrap();
        let data = read_input(&args.input).unwrap();
        assert_eq!(crc.format_value(crc.calculate(&data)), "0x29B1");
    }

    #[test]
    fn test_calc_requires_one_input() {
        assert!(Cli::try_parse_from(["crcsum", "calc", "--algorithm", "CRC-8"]).is_err());
        assert!(Cli::try_parse_from([
            "crcsum", "calc", "--algorithm", "CRC-8", "--text", "a", "--hex", "61",
        ])
        .is_err());
    }

    #[test]
    fn test_check_all_presets() {
        check(false).unwrap();
        check(true).unwrap();
    }
}
