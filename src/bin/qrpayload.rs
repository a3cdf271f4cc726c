use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use rust_qr_payload::decoder::modes::kanji;
use rust_qr_payload::tools::{BatchSummary, decode_batch, read_streams};
use rust_qr_payload::{
    BitReader, DecodeError, DecoderConfig, Payload, SegmentDecoder, TrailingWidth, Version,
};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "qrpayload", version, about = "Decode QR code payload bitstreams")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a single payload
    Decode {
        /// Payload bits (0/1 or x/.); read from stdin when omitted
        bits: Option<String>,
        /// Read the payload from a file instead
        #[arg(long)]
        file: Option<PathBuf>,
        /// Input is packed codewords in hex
        #[arg(long)]
        hex: bool,
        /// Print the text decoded before a fault
        #[arg(long)]
        partial: bool,
        /// Print one line per segment
        #[arg(long)]
        segments: bool,
        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Decode one payload per line of a file, in parallel
    Batch {
        #[arg(long)]
        file: PathBuf,
        /// Worker threads (0 = one per core)
        #[arg(long, default_value_t = 0)]
        threads: usize,
        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Show the Shift JIS code and character for 13-bit kanji values
    Kanji {
        #[arg(required = true)]
        values: Vec<u16>,
    },
}

#[derive(Args)]
struct ConfigArgs {
    /// Symbol version (1-40), selects character count widths
    #[arg(long = "symbol-version")]
    symbol_version: Option<u8>,
    /// Read a trailing alphanumeric character in 6 bits instead of 11
    #[arg(long)]
    standard_trailing: bool,
    /// Decode numeric segments (mode 0001)
    #[arg(long)]
    numeric: bool,
}

impl ConfigArgs {
    fn resolve(&self) -> Result<DecoderConfig, DecodeError> {
        let mut config = DecoderConfig::from_env();
        if let Some(number) = self.symbol_version {
            config = config.with_version(Version::new(number)?);
        }
        if self.standard_trailing {
            config = config.with_trailing(TrailingWidth::Standard);
        }
        if self.numeric {
            config = config.with_numeric(true);
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    let default_filter = if std::env::var("QR_DEBUG").is_ok() {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let cli = Cli::parse();

    match cli.command {
        Command::Decode {
            bits,
            file,
            hex,
            partial,
            segments,
            config,
        } => decode_cmd(bits, file.as_deref(), hex, partial, segments, &config),
        Command::Batch {
            file,
            threads,
            config,
        } => batch_cmd(&file, threads, &config),
        Command::Kanji { values } => kanji_cmd(&values),
    }
}

fn read_input(bits: Option<String>, file: Option<&Path>) -> io::Result<String> {
    match (bits, file) {
        (Some(bits), _) => Ok(bits),
        (None, Some(path)) => std::fs::read_to_string(path),
        (None, None) => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

fn decode_cmd(
    bits: Option<String>,
    file: Option<&Path>,
    hex: bool,
    partial: bool,
    segments: bool,
    args: &ConfigArgs,
) -> ExitCode {
    let config = match args.resolve() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Invalid configuration: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let input = match read_input(bits, file) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("Failed to read input: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let reader = if hex {
        let compact: String = input.split_whitespace().collect();
        match hex::decode(&compact) {
            Ok(codewords) => BitReader::from_codewords(&codewords),
            Err(err) => {
                eprintln!("Invalid hex input: {}", err);
                return ExitCode::FAILURE;
            }
        }
    } else {
        match BitReader::parse(&input) {
            Ok(reader) => reader,
            Err(err) => {
                eprintln!("Invalid bit string: {}", err);
                return ExitCode::FAILURE;
            }
        }
    };

    let (payload, fault) = SegmentDecoder::new(reader, config).decode_partial();
    if fault.is_none() || partial {
        print_payload(&payload, segments);
    }
    match fault {
        None => ExitCode::SUCCESS,
        Some(err) => {
            eprintln!(
                "Decode failed after {} bits ({} segment(s) complete): {}",
                payload.bits_consumed,
                payload.segments.len(),
                err
            );
            ExitCode::FAILURE
        }
    }
}

fn print_payload(payload: &Payload, segments: bool) {
    if segments {
        for (i, segment) in payload.segments.iter().enumerate() {
            println!(
                "  Segment {}: mode={}, offset={}, count={}, text={:?}",
                i, segment.mode, segment.bit_offset, segment.count, segment.text
            );
        }
    }
    println!("{}", payload.text);
}

fn batch_cmd(file: &Path, threads: usize, args: &ConfigArgs) -> ExitCode {
    let config = match args.resolve() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Invalid configuration: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let streams = match read_streams(file) {
        Ok(streams) => streams,
        Err(err) => {
            eprintln!("Failed to read {}: {}", file.display(), err);
            return ExitCode::FAILURE;
        }
    };

    if threads > 0 {
        if let Err(err) = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
        {
            eprintln!("Failed to configure thread pool: {}", err);
        }
    }

    let results = decode_batch(&streams, &config);
    for (i, result) in results.iter().enumerate() {
        match result {
            Ok(payload) => println!("{}: {}", i, payload.text),
            Err(err) => println!("{}: error: {}", i, err),
        }
    }

    let summary = BatchSummary::from_results(&results);
    println!(
        "Decoded {}/{} payloads ({:.1}%), {} failed",
        summary.decoded,
        summary.total,
        summary.success_rate() * 100.0,
        summary.failed
    );
    if summary.failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn kanji_cmd(values: &[u16]) -> ExitCode {
    let mut status = ExitCode::SUCCESS;
    for &value in values {
        if value > 0x1FFF {
            eprintln!("{}: not a 13-bit value", value);
            status = ExitCode::FAILURE;
            continue;
        }
        let code = kanji::code_point(value);
        match kanji::to_char(code) {
            Ok(ch) => println!("{:#06X} -> {:#06X} {}", value, code, ch),
            Err(err) => {
                println!("{:#06X} -> {:#06X} ({})", value, code, err);
                status = ExitCode::FAILURE;
            }
        }
    }
    status
}
