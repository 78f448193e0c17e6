//! Batch command implementation
//!
//! Processes one render job per line of a JSONL file. A bad line is
//! reported and skipped; the command fails if any job did.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use fontdrawer::prelude::*;

use super::render::{parse_color, RenderJob};
use crate::cli::BatchArgs;

/// JSONL job specification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BatchJob {
    pub text: String,
    pub font: PathBuf,
    /// Output file, relative to the output directory unless absolute
    pub output: PathBuf,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub dpi: Option<f32>,
    /// none, vertical or full
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub hinting: Option<String>,
    /// RRGGBB or RRGGBBAA
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub color: Option<String>,
    /// png, ppm or pgm; taken from the output extension when omitted
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub y: Option<f32>,
}

fn default_width() -> u32 {
    96
}

fn default_height() -> u32 {
    64
}

impl BatchJob {
    /// Resolve every optional field into a concrete render job
    pub fn resolve(&self, output_dir: &Path) -> Result<RenderJob> {
        let hinting = match &self.hinting {
            Some(name) => name.parse::<Hinting>().map_err(DrawerError::ConfigError)?,
            None => FaceParams::DEFAULT.hinting,
        };
        let color = match &self.color {
            Some(hex) => parse_color(hex)?,
            None => FaceParams::DEFAULT.color,
        };
        let format = match (&self.format, self.output.extension()) {
            (Some(name), _) => name.parse::<ExportFormat>()?,
            (None, Some(ext)) => ext.to_string_lossy().parse::<ExportFormat>()?,
            (None, None) => ExportFormat::default(),
        };

        Ok(RenderJob {
            text: self.text.clone(),
            font: self.font.clone(),
            width: self.width,
            height: self.height,
            size: self.size,
            dpi: self.dpi.unwrap_or(FaceParams::DEFAULT.dpi),
            hinting,
            color,
            format,
            output: output_dir.join(&self.output),
            x: self.x,
            y: self.y,
        })
    }
}

pub fn run(args: &BatchArgs) -> Result<()> {
    let reader = BufReader::new(File::open(&args.input)?);

    if !args.output_dir.exists() {
        fs::create_dir_all(&args.output_dir)?;
    }

    let mut job_count = 0;
    let mut error_count = 0;

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        job_count += 1;

        match run_line(&line, &args.output_dir) {
            Ok(output) => {
                log::debug!("line {}: wrote {}", line_num + 1, output.display());
            },
            Err(e) => {
                eprintln!("line {}: {}", line_num + 1, e);
                error_count += 1;
            },
        }
    }

    eprintln!(
        "Batch complete: {} jobs, {} ok, {} failed",
        job_count,
        job_count - error_count,
        error_count
    );

    if error_count > 0 {
        Err(DrawerError::ConfigError(format!("{} of {} jobs failed", error_count, job_count)))
    } else {
        Ok(())
    }
}

fn run_line(line: &str, output_dir: &Path) -> Result<PathBuf> {
    let job: BatchJob = serde_json::from_str(line)
        .map_err(|e| DrawerError::ConfigError(format!("bad job: {}", e)))?;
    let job = job.resolve(output_dir)?;
    job.run()?;
    Ok(job.output)
}
