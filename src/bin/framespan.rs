use anyhow::Context as _;
use clap::{Parser, Subcommand};
use framespan::{DiagnosticFlags, FramespanError, analyze_frame_ranges, rangelet_tokens, validate_rangelet};

#[derive(Parser, Debug)]
#[command(name = "framespan", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Normalize a frame-range expression to its canonical form.
    Normalize(NormalizeArgs),
    /// Report which rangelets of an expression would be accepted or dropped.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct NormalizeArgs {
    /// Frame-range expression, e.g. "1,5-10,-3--1,7".
    ranges: String,

    /// Emit the canonical string and the merged spans as JSON.
    #[arg(long)]
    json: bool,

    /// Log how each rangelet was adjusted.
    #[arg(short, long)]
    verbose: bool,

    /// Log which rangelets were dropped and why.
    #[arg(long)]
    debug: bool,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Frame-range expression to check.
    ranges: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Normalize(args) => cmd_normalize(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn init_tracing(flags: DiagnosticFlags) {
    let level = if flags.debug || flags.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_normalize(args: NormalizeArgs) -> anyhow::Result<()> {
    let flags = DiagnosticFlags {
        verbose: args.verbose,
        debug: args.debug,
    };
    init_tracing(flags);

    let ranges = analyze_frame_ranges(&args.ranges, flags);
    if ranges.is_empty() {
        return Err(FramespanError::validation(format!(
            "no valid frame ranges in '{}'",
            args.ranges
        ))
        .into());
    }

    if args.json {
        let out = serde_json::to_string_pretty(&ranges).context("serialize normalized ranges")?;
        println!("{out}");
    } else {
        println!("{}", ranges.canonical);
    }

    if flags.verbose {
        eprintln!(
            "{} span(s), {} frame(s)",
            ranges.spans.len(),
            ranges.total_frames()
        );
    }
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let mut dropped = 0usize;
    for token in rangelet_tokens(&args.ranges) {
        match validate_rangelet(&token) {
            Some(_) => println!("ok       {token}"),
            None => {
                dropped += 1;
                println!("dropped  {token}");
            }
        }
    }
    if dropped > 0 {
        anyhow::bail!("{dropped} invalid rangelet(s)");
    }
    Ok(())
}
