//! docdown - convert exported HTML documents to Markdown

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use docdown::DocdownService;

#[derive(Parser)]
#[command(name = "docdown")]
#[command(version, about = "Convert exported HTML documents to Markdown", long_about = None)]
#[command(after_help = "EXAMPLES:
    docdown notes.html              Write converted output to notes.md
    docdown notes.html out/doc.md   Write converted output to out/doc.md")]
struct Cli {
    /// Source HTML file
    #[arg(value_name = "SRC")]
    src: PathBuf,

    /// Destination Markdown file (defaults to SRC with a .md extension)
    #[arg(value_name = "DST")]
    dst: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let dst = cli.dst.unwrap_or_else(|| default_destination(&cli.src));

    match convert(&cli.src, &dst) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Replace the source's last extension with `.md`, or append it when the
/// source has none.
fn default_destination(src: &Path) -> PathBuf {
    src.with_extension("md")
}

fn convert(src: &Path, dst: &Path) -> Result<(), String> {
    let html = std::fs::read_to_string(src)
        .map_err(|e| format!("cannot read {}: {e}", src.display()))?;

    let file =
        File::create(dst).map_err(|e| format!("cannot create {}: {e}", dst.display()))?;
    let mut sink = BufWriter::new(file);

    DocdownService::new()
        .convert_to_writer(&html, &mut sink)
        .map_err(|e| e.to_string())?;

    sink.flush()
        .map_err(|e| format!("cannot write {}: {e}", dst.display()))?;

    Ok(())
}
