mod emit;
mod parser;
mod source;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::{debug, warn};

#[derive(Parser)]
#[command(name = "labdir", about = "Structured record extraction from OCR'd laboratory directories")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse OCR text dumps into per-file CSVs
    Parse {
        /// A .txt file or a directory of .txt files
        input: PathBuf,
        /// Directory for the CSVs (default: next to each input file)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Directory year override (default: from the filename, e.g. "1975-a1.txt")
        #[arg(short, long)]
        year: Option<String>,
        /// Max files to parse
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Parse without writing and report extraction coverage
    Check {
        /// A .txt file or a directory of .txt files
        input: PathBuf,
        /// Directory year override
        #[arg(short, long)]
        year: Option<String>,
        /// Max files to check
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            input,
            output,
            year,
            limit,
        } => {
            let mut files = source::discover(&input)?;
            if let Some(n) = limit {
                files.truncate(n);
            }
            if files.is_empty() {
                println!("No .txt files found under {}", input.display());
                return Ok(());
            }
            if let Some(dir) = &output {
                fs::create_dir_all(dir)?;
            }

            println!("Parsing {} files...", files.len());
            let stats = run_batch(&files, year.as_deref(), output.as_deref())?;
            println!(
                "Done: {} files ({} ok, {} errors), {} records.",
                stats.total, stats.ok, stats.errors, stats.records
            );
            Ok(())
        }
        Commands::Check { input, year, limit } => {
            let mut files = source::discover(&input)?;
            if let Some(n) = limit {
                files.truncate(n);
            }
            if files.is_empty() {
                println!("No .txt files found under {}", input.display());
                return Ok(());
            }

            let mut coverage = Coverage::default();
            for path in &files {
                let doc = source::load(path, year.as_deref())?;
                let records = parser::parse_document(&doc.text, &doc.year);
                coverage.files += 1;
                for record in &records {
                    coverage.tally(record);
                }
            }
            coverage.print();
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

struct BatchStats {
    total: usize,
    ok: usize,
    errors: usize,
    records: usize,
}

/// Parse every file, one rayon worker and one fresh parse run per file, and
/// write its CSV. A file that fails to read or write is logged and counted,
/// never aborts the batch.
fn run_batch(files: &[PathBuf], year: Option<&str>, output: Option<&Path>) -> Result<BatchStats> {
    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta})")?
            .progress_chars("=> "),
    );

    let results: Vec<(&PathBuf, Result<usize>)> = files
        .par_iter()
        .map(|path| {
            let result = parse_one(path, year, output);
            pb.inc(1);
            (path, result)
        })
        .collect();
    pb.finish_and_clear();

    let mut stats = BatchStats {
        total: files.len(),
        ok: 0,
        errors: 0,
        records: 0,
    };
    for (path, result) in results {
        match result {
            Ok(count) => {
                stats.ok += 1;
                stats.records += count;
            }
            Err(e) => {
                warn!("Failed on {}: {:#}", path.display(), e);
                stats.errors += 1;
            }
        }
    }
    Ok(stats)
}

fn parse_one(path: &Path, year: Option<&str>, output: Option<&Path>) -> Result<usize> {
    let doc = source::load(path, year)?;
    let records = parser::parse_document(&doc.text, &doc.year);
    debug!("{}: {} records (year {})", doc.path.display(), records.len(), doc.year);
    emit::write_csv(&csv_path_for(path, output), &records)?;
    Ok(records.len())
}

fn csv_path_for(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    match output_dir {
        Some(dir) => {
            let mut name = input
                .file_stem()
                .map(|stem| stem.to_os_string())
                .unwrap_or_else(|| "out".into());
            name.push(".csv");
            dir.join(name)
        }
        None => input.with_extension("csv"),
    }
}

#[derive(Default)]
struct Coverage {
    files: usize,
    entries: usize,
    coded: usize,
    sub_entries: usize,
    pointers: usize,
    with_address: usize,
    with_phone: usize,
    with_staff: usize,
    with_leftover: usize,
}

impl Coverage {
    fn tally(&mut self, record: &emit::Record) {
        self.entries += 1;
        if !record.code.is_empty() {
            self.coded += 1;
            if record.code.contains('.') {
                self.sub_entries += 1;
            }
        }
        if record.code.is_empty() && !record.note.is_empty() {
            self.pointers += 1;
        }
        if !record.street.is_empty() {
            self.with_address += 1;
        }
        if !record.phone.is_empty() {
            self.with_phone += 1;
        }
        if !record.staff.is_empty() {
            self.with_staff += 1;
        }
        if !record.leftover.trim().is_empty() {
            self.with_leftover += 1;
        }
    }

    fn print(&self) {
        let pct = |n: usize| {
            if self.entries == 0 {
                0.0
            } else {
                100.0 * n as f64 / self.entries as f64
            }
        };
        println!("Files:         {}", self.files);
        println!("Entries:       {}", self.entries);
        println!("  coded:       {} ({:.0}%)", self.coded, pct(self.coded));
        println!("  sub-entries: {}", self.sub_entries);
        println!("  pointers:    {}", self.pointers);
        println!("  w/ address:  {} ({:.0}%)", self.with_address, pct(self.with_address));
        println!("  w/ phone:    {} ({:.0}%)", self.with_phone, pct(self.with_phone));
        println!("  w/ staff:    {} ({:.0}%)", self.with_staff, pct(self.with_staff));
        println!("  w/ leftover: {} ({:.0}%)", self.with_leftover, pct(self.with_leftover));
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
