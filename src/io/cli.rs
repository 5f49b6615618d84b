//! Command-line interface for batch processing shape text files

use crate::io::configuration::{CELL_CAPACITY, OUTPUT_SUFFIX, SHAPE_FILE_EXTENSION};
use crate::io::error::{Result, file_system_error, invalid_parameter, io_error};
use crate::io::progress::ProgressManager;
use crate::shape::GridShape;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gridshape")]
#[command(author, version, about = "Inspect and extrude grid shape text files")]
/// Command-line arguments for the shape processing tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Shape text file or directory of shape files to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Cells to grow left and right of every active cell
    #[arg(short = 'x', long, default_value_t = 0)]
    pub extrude_x: usize,

    /// Cells to grow above and below every active cell
    #[arg(short = 'y', long, default_value_t = 0)]
    pub extrude_y: usize,

    /// Log active positions of each result
    #[arg(short, long)]
    pub list: bool,

    /// Report positions with y counted from the top row
    #[arg(short, long)]
    pub invert_y: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check if any extrusion was requested
    pub const fn extrudes(&self) -> bool {
        self.extrude_x > 0 || self.extrude_y > 0
    }
}

/// Summary of one processed shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeReport {
    /// Input file
    pub input: PathBuf,
    /// Written result file
    pub output: PathBuf,
    /// Resulting shape
    pub shape: GridShape,
}

/// Orchestrates batch processing of shape files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if argument or target validation fails, or if any
    /// file cannot be read, parsed or written
    pub fn process(&mut self) -> Result<Vec<ShapeReport>> {
        self.validate_margins()?;
        let files = self.collect_files()?;

        if files.is_empty() {
            log::info!("No shapes to process in {}", self.cli.target.display());
            return Ok(Vec::new());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut reports = Vec::with_capacity(files.len());
        for file in &files {
            reports.push(self.process_file(file)?);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(reports)
    }

    fn validate_margins(&self) -> Result<()> {
        for (parameter, margin) in [
            ("extrude-x", self.cli.extrude_x),
            ("extrude-y", self.cli.extrude_y),
        ] {
            if margin > CELL_CAPACITY {
                return Err(invalid_parameter(
                    parameter,
                    &margin,
                    &format!("margin cannot exceed {CELL_CAPACITY} cells"),
                ));
            }
        }
        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if is_shape_file(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(io_error("Target file must be a .txt shape file"))
            }
        } else if self.cli.target.is_dir() {
            let entries = std::fs::read_dir(&self.cli.target)
                .map_err(|e| file_system_error(&self.cli.target, "read directory", e))?;
            let mut files = Vec::new();
            for entry in entries {
                let path = entry?.path();
                if is_shape_file(&path)
                    && !is_output_file(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(io_error("Target must be a shape file or directory"))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            log::warn!("Skipping: {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(&self, input_path: &Path) -> Result<ShapeReport> {
        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let text = std::fs::read_to_string(input_path)
            .map_err(|e| file_system_error(input_path, "read shape", e))?;
        let mut shape = GridShape::from_text(&text)?;

        if self.cli.extrudes() {
            shape = shape.extrude(self.cli.extrude_x, self.cli.extrude_y);
        }

        let output_path = Self::get_output_path(input_path);
        std::fs::write(&output_path, shape.to_text())
            .map_err(|e| file_system_error(&output_path, "write shape", e))?;

        match shape.valid_rect() {
            Some(rect) => log::info!(
                "{}: {}x{}, {} active, bounds {rect}",
                input_path.display(),
                shape.width(),
                shape.height(),
                shape.active_count()
            ),
            None => log::info!(
                "{}: {}x{}, no active cells",
                input_path.display(),
                shape.width(),
                shape.height()
            ),
        }

        if self.cli.list {
            for position in shape.valid_positions(self.cli.invert_y) {
                log::info!("  {position}");
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(ShapeReport {
            input: input_path.to_path_buf(),
            output: output_path,
            shape,
        })
    }

    /// Result path written for an input shape file
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            SHAPE_FILE_EXTENSION
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn is_shape_file(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(SHAPE_FILE_EXTENSION)
}

fn is_output_file(path: &Path) -> bool {
    path.file_stem()
        .is_some_and(|stem| stem.to_string_lossy().ends_with(OUTPUT_SUFFIX))
}
