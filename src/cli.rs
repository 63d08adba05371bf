// Command-line front end for the Base88 decoder.
//
// Subcommands decode encoded strings, dump their chunk structure, and print
// build configuration. Encoded strings come from an argument, a file, or
// stdin (one per line).

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, ValueHint};

use crate::base88::{BASE88, DecodeError, Decoder};

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// Base88 character-list decoder.
#[derive(Parser, Debug)]
#[command(
    name = "charpack88",
    version,
    about = "Base88 character-list decoder",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    /// Quiet mode (suppress non-error output).
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose mode (use multiple times for more detail).
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Output stats as JSON to stderr.
    #[arg(long = "json", global = true)]
    json_output: bool,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Decode encoded strings into characters.
    Decode(DecodeArgs),
    /// Print the chunks of an encoded string.
    Inspect(InspectArgs),
    /// Print build/configuration details.
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Decoded characters, concatenated.
    Text,
    /// Space-separated `U+XXXX` code points.
    CodePoints,
    /// JSON array of one-character strings.
    Json,
}

#[derive(Args, Debug)]
struct DecodeArgs {
    /// Encoded string (default: read lines from --input or stdin).
    #[arg(conflicts_with = "input")]
    encoded: Option<String>,

    /// File with one encoded string per line.
    #[arg(long, short = 'i', value_hint = ValueHint::FilePath)]
    input: Option<PathBuf>,

    /// Output format.
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Args, Debug)]
struct InspectArgs {
    /// Encoded string.
    encoded: String,
}

// ---------------------------------------------------------------------------
// Decode command
// ---------------------------------------------------------------------------

fn read_lines(args: &DecodeArgs) -> io::Result<Vec<String>> {
    if let Some(s) = &args.encoded {
        return Ok(vec![s.clone()]);
    }
    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}

/// Render one encoded string in the requested format.
fn render(
    decoder: Decoder<'_>,
    encoded: &str,
    format: OutputFormat,
) -> Result<(String, usize), DecodeError> {
    match format {
        OutputFormat::Text => {
            let chars = decoder.decode(encoded)?;
            Ok((chars.concat(), chars.len()))
        }
        OutputFormat::CodePoints => {
            let cps = decoder.decode_code_points(encoded)?;
            let line = cps
                .iter()
                .map(|cp| format!("U+{cp:04X}"))
                .collect::<Vec<_>>()
                .join(" ");
            Ok((line, cps.len()))
        }
        OutputFormat::Json => {
            let chars = decoder.decode(encoded)?;
            let count = chars.len();
            Ok((serde_json::Value::from(chars).to_string(), count))
        }
    }
}

fn cmd_decode(cli: &Cli, args: &DecodeArgs) -> i32 {
    let lines = match read_lines(args) {
        Ok(lines) => lines,
        Err(e) => {
            eprintln!("charpack88: {e}");
            return 1;
        }
    };

    let decoder = Decoder::default();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut characters = 0usize;

    for (n, encoded) in lines.iter().enumerate() {
        match render(decoder, encoded, args.format) {
            Ok((line, count)) => {
                characters += count;
                if let Err(e) = writeln!(out, "{line}") {
                    eprintln!("charpack88: {e}");
                    return 1;
                }
            }
            Err(e) => {
                let _ = out.flush();
                eprintln!("charpack88: line {}: {e}", n + 1);
                return 1;
            }
        }
    }
    if let Err(e) = out.flush() {
        eprintln!("charpack88: {e}");
        return 1;
    }

    log::info!("decoded {} lines, {characters} characters", lines.len());
    if cli.json_output {
        let json = serde_json::json!({
            "command": "decode",
            "lines": lines.len(),
            "characters": characters,
        });
        eprintln!("{json}");
    }
    0
}

// ---------------------------------------------------------------------------
// Inspect command
// ---------------------------------------------------------------------------

fn format_cursor(cursor: i64) -> String {
    if cursor < 0 {
        cursor.to_string()
    } else {
        format!("U+{cursor:04X}")
    }
}

fn cmd_inspect(cli: &Cli, args: &InspectArgs) -> i32 {
    let decoder = Decoder::default();
    let mut cursor = 0i64;
    let mut chunks = 0usize;

    if !cli.quiet {
        println!("  OFFSET  LEN  KIND    VALUE  CURSOR");
    }
    for chunk in decoder.chunks(&args.encoded) {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(e) => {
                eprintln!("charpack88: {e}");
                return 1;
            }
        };
        cursor = chunk.apply(cursor);
        chunks += 1;
        println!(
            "  {:>6}  {:>3}  {:<6}  {:>5}  {}",
            chunk.offset,
            chunk.len,
            chunk.kind,
            chunk.value,
            format_cursor(cursor)
        );
    }

    if cli.json_output {
        let json = serde_json::json!({
            "command": "inspect",
            "chunks": chunks,
            "cursor": cursor,
        });
        eprintln!("{json}");
    }
    0
}

// ---------------------------------------------------------------------------
// Config command
// ---------------------------------------------------------------------------

fn cmd_config() -> i32 {
    let version = env!("CARGO_PKG_VERSION");
    println!("charpack88 version {version} (Rust)");
    println!("PARALLEL={}", cfg!(feature = "parallel") as u8);
    println!("ALPHABET={}", BASE88.symbols());
    0
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn default_log_filter(cli: &Cli) -> &'static str {
    if cli.quiet {
        return "error";
    }
    match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Main CLI entry point. Parses arguments via clap, dispatches commands.
pub fn run() -> ! {
    let cli = Cli::parse();

    let env = env_logger::Env::default().default_filter_or(default_log_filter(&cli));
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .init();

    let exit_code = match &cli.command {
        Cmd::Decode(args) => cmd_decode(&cli, args),
        Cmd::Inspect(args) => cmd_inspect(&cli, args),
        Cmd::Config => cmd_config(),
    };

    process::exit(exit_code);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
