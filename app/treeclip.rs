//! Command-line interface for treeclip.
//!
//! Exports the text files below a directory to the system clipboard, a file
//! or stdout, asking first when the export is large.

use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::exit;
use treeclip::report::{self, ReportFormat};
use treeclip::{
    BinaryDetection, BinaryMarker, ClipboardSink, ExportOptions, ExportOptionsBuilder,
    ExportOutcome, FileNode, FileSink, FsNode, SystemClipboard, TerminalNotifier, TreeclipError,
    WriterSink, collect_stats, run_export,
};

/// treeclip: copy the text files of a directory to the clipboard
#[derive(Parser)]
#[command(name = "treeclip", version, about, long_about = None)]
struct Cli {
    /// Directory to export (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Base path stripped from file headers (default current dir)
    #[arg(long)]
    base: Option<PathBuf>,

    /// Export large trees without asking
    #[arg(short, long)]
    yes: bool,

    /// Ask before exporting more files than this
    #[arg(long, default_value_t = 100)]
    max_files: u64,

    /// Ask before exporting more kilobytes than this
    #[arg(long, default_value_t = 1000.0)]
    max_kb: f64,

    /// Binary detection strategy
    #[arg(long, default_value = "control-bytes", value_parser = parse_binary_detection)]
    binary_detection: BinaryDetection,

    /// What to write in place of a binary file
    #[arg(long, value_enum, default_value_t = Marker::ReadError)]
    binary_marker: Marker,

    /// Write the export to this file instead of the clipboard
    #[arg(short, long, conflicts_with = "stdout")]
    output: Option<PathBuf>,

    /// Write the export to stdout instead of the clipboard
    #[arg(long)]
    stdout: bool,

    /// Only count the files that would be exported
    #[arg(long)]
    stats_only: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Marker {
    ReadError,
    Distinct,
    Omit,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Parse string into BinaryDetection enum.
fn parse_binary_detection(s: &str) -> Result<BinaryDetection, String> {
    match s {
        "control-bytes" => Ok(BinaryDetection::ControlBytes),
        "inspector" => Ok(BinaryDetection::Inspector),
        "none" => Ok(BinaryDetection::None),
        _ => Err(format!("invalid binary detection method: {}", s)),
    }
}

impl Cli {
    fn options(&self) -> ExportOptions {
        let marker = match self.binary_marker {
            Marker::ReadError => BinaryMarker::ReadError,
            Marker::Distinct => BinaryMarker::Distinct,
            Marker::Omit => BinaryMarker::Omit,
        };
        ExportOptionsBuilder::new()
            .binary_detection(self.binary_detection)
            .binary_marker(marker)
            .max_files(self.max_files)
            .max_kb(self.max_kb)
            .build()
    }

    fn report_format(&self) -> ReportFormat {
        match self.format {
            Format::Text => ReportFormat::Text,
            Format::Json => ReportFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

#[cfg(feature = "logging")]
fn init_logging(verbose: bool) {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::{EnvFilter, Layer};

    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(stderr_layer).init();
}

fn run(cli: Cli) -> Result<(), TreeclipError> {
    let options = cli.options();
    let format = cli.report_format();

    let root = FsNode::open(&cli.root)?;
    let base = FsNode::open(cli.base.as_deref().unwrap_or(Path::new(".")))?;
    let base_path = base
        .path()
        .to_str()
        .ok_or_else(|| {
            TreeclipError::InvalidPath(format!("{} is not valid UTF-8", base.path().display()))
        })?
        .to_string();

    if cli.stats_only {
        let stats = collect_stats(&root, &options);
        println!(
            "{}",
            report::format_report(&stats, "preview", None, format)?
        );
        return Ok(());
    }

    let mut sink: Box<dyn ClipboardSink> = if let Some(path) = cli.output {
        Box::new(FileSink::new(path))
    } else if cli.stdout {
        Box::new(WriterSink::stdout())
    } else {
        Box::new(SystemClipboard::detect()?)
    };
    let mut notifier = TerminalNotifier::stdio(format, cli.yes);

    match run_export(&root, &base_path, &options, &mut notifier, sink.as_mut())? {
        ExportOutcome::Exported(_) => {}
        ExportOutcome::Declined(preview) => {
            eprintln!("{}", report::declined_report(&preview, format)?)
        }
    }
    Ok(())
}
