//! num-inspect CLI: shows how a literal is stored as a single or double.

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use float_inspect::{inspect_literal_with, ByteOrder, Error, InspectOptions, WidthSelector};

const EXIT_HELP: u8 = 1;
const EXIT_NO_REPORT: u8 = 2;
const EXIT_PARSE: u8 = 253;
const EXIT_UNSUPPORTED_TYPE: u8 = 254;
const EXIT_USAGE: u8 = 255;

#[derive(Parser)]
#[command(name = "num-inspect")]
#[command(about = "number inspector")]
#[command(version)]
struct Cli {
    /// The value to inspect
    value: String,

    /// The type of value: float, double or [deduce]
    #[arg(default_value = "[deduce]")]
    r#type: String,

    /// Significant digits used to print values
    #[arg(short, long, default_value_t = InspectOptions::DEFAULT_PRECISION)]
    precision: usize,

    /// Print bits in sign, exponent, mantissa order regardless of host byte order
    #[arg(long)]
    canonical: bool,

    /// Reject characters after the number
    #[arg(long)]
    strict: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                    EXIT_HELP
                }
                ErrorKind::DisplayVersion => 0,
                _ => EXIT_USAGE,
            };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    let byte_order = if cli.canonical {
        ByteOrder::Big
    } else {
        ByteOrder::Native
    };
    let options = InspectOptions::new()
        .with_precision(cli.precision)
        .with_byte_order(byte_order)
        .with_strict(cli.strict);

    match run(&cli.value, &cli.r#type, &options) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(exit_code(&e))
        }
    }
}

fn run(value: &str, type_name: &str, options: &InspectOptions) -> Result<u8, Error> {
    let selector: WidthSelector = type_name.parse()?;
    match inspect_literal_with(value, selector, options)? {
        Some(report) => {
            println!();
            print!("{report}");
            Ok(0)
        }
        None => Ok(EXIT_NO_REPORT),
    }
}

fn exit_code(e: &Error) -> u8 {
    match e {
        Error::UnsupportedType(_) => EXIT_UNSUPPORTED_TYPE,
        Error::Parse(_) | Error::TrailingCharacters { .. } => EXIT_PARSE,
    }
}
