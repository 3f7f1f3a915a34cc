//! Output writers for simulation results.
//!
//! One run writes `euchre_sim_<timestamp>.jsonl` (one `GameMetrics` object per
//! line, optionally gzipped) and always a `_summary.csv` next to it.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::metrics::{CsvSummaryRow, GameMetrics};
use crate::types::OutputFormat;

type DynError = Box<dyn std::error::Error>;

pub struct OutputWriter {
    jsonl_writer: Option<Box<dyn Write + Send>>,
    csv_writer: csv::Writer<BufWriter<File>>,
    jsonl_path: Option<PathBuf>,
    csv_path: PathBuf,
    games_written: u32,
}

fn open_truncated(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
}

fn run_stem() -> String {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Iso8601::DEFAULT)
        .unwrap_or_else(|_| "unknown".to_string())
        .replace(':', "-");
    format!("euchre_sim_{timestamp}")
}

impl OutputWriter {
    pub fn new(output_dir: &str, format: OutputFormat, compress: bool) -> Result<Self, DynError> {
        let dir = Path::new(output_dir);
        std::fs::create_dir_all(dir)?;
        let stem = run_stem();

        let (jsonl_writer, jsonl_path) = match format {
            OutputFormat::Jsonl if compress => {
                let path = dir.join(format!("{stem}.jsonl.gz"));
                let encoder = GzEncoder::new(open_truncated(&path)?, Compression::default());
                let writer: Box<dyn Write + Send> = Box::new(BufWriter::new(encoder));
                (Some(writer), Some(path))
            }
            OutputFormat::Jsonl => {
                let path = dir.join(format!("{stem}.jsonl"));
                let writer: Box<dyn Write + Send> =
                    Box::new(BufWriter::new(open_truncated(&path)?));
                (Some(writer), Some(path))
            }
            OutputFormat::Csv => (None, None),
        };

        // Header row comes from `CsvSummaryRow`'s field names on first write.
        let csv_path = dir.join(format!("{stem}_summary.csv"));
        let csv_writer = csv::Writer::from_writer(BufWriter::new(open_truncated(&csv_path)?));

        Ok(Self {
            jsonl_writer,
            csv_writer,
            jsonl_path,
            csv_path,
            games_written: 0,
        })
    }

    pub fn write_game(&mut self, metrics: &GameMetrics) -> Result<(), DynError> {
        if let Some(ref mut writer) = self.jsonl_writer {
            let json = serde_json::to_string(metrics)?;
            writeln!(writer, "{json}")?;
        }

        let row = CsvSummaryRow::from(metrics);
        self.csv_writer.serialize(&row)?;
        self.games_written += 1;
        Ok(())
    }

    pub fn games_written(&self) -> u32 {
        self.games_written
    }

    /// Flush both files. A gzip stream is only complete once this returns.
    pub fn finish(mut self) -> Result<(), DynError> {
        if let Some(ref mut writer) = self.jsonl_writer {
            writer.flush()?;
        }
        self.csv_writer.flush()?;
        Ok(())
    }

    pub fn output_paths(&self) -> (Option<&PathBuf>, &PathBuf) {
        (self.jsonl_path.as_ref(), &self.csv_path)
    }
}
