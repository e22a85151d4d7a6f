// src/cli/mod.rs
// Headless access to the export and matrix operations

pub mod closed_form;
pub mod export;
pub mod inverse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use thiserror::Error;

use crate::grid::ExportError;
use crate::matrix::{CodecError, MatrixError, MAX_EXPANSION_SIZE};

#[derive(Parser)]
#[command(name = "matrixpad")]
#[command(about = "MatrixPad - 3x3 grid editor with text export and matrix inverse tools", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export nine cell values (row-major) to my-new-file.txt
    Export {
        /// Cell values a11 a12 a13 a21 ... a33. Put `--` before them when a
        /// value starts with '-' and is not a number, e.g. `export --out dir -- -x 2 3 ...`
        #[arg(allow_negative_numbers = true)]
        cells: Vec<String>,
        /// Folder to write into (defaults to the current directory)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Print the inverse of an encoded matrix, e.g. "1,2,\n,3,4,\n," (at most 8x8)
    Inverse {
        /// Encoded matrix; a literal backslash-n counts as a row break
        #[arg(allow_hyphen_values = true)]
        matrix: String,
    },

    /// Print the determinant of an encoded matrix (at most 8x8)
    Determinant {
        /// Encoded matrix; a literal backslash-n counts as a row break
        #[arg(allow_hyphen_values = true)]
        matrix: String,
    },

    /// Print closed-form formulas for an n x n matrix (at most 8x8)
    ClosedForm {
        /// Matrix dimension
        dimension: usize,
        /// Print the adjugate formulas instead of the determinant
        #[arg(long)]
        inverse: bool,
    },
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Expected 9 cell values, got {0}.")]
    CellCount(usize),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// Cofactor expansion grows factorially, so refuse sizes it cannot finish.
pub(crate) fn check_expansion_size(size: usize) -> Result<(), CliError> {
    if size > MAX_EXPANSION_SIZE {
        return Err(MatrixError::TooLarge { size, max: MAX_EXPANSION_SIZE }.into());
    }
    Ok(())
}

/// Shells rarely pass a real newline, so accept the escaped form too.
pub(crate) fn unescape_row_breaks(raw: &str) -> String {
    raw.replace("\\n", "\n")
}

/// Runs a subcommand and returns the process exit code.
pub fn run(command: Commands) -> i32 {
    let result = match command {
        Commands::Export { cells, out } => export::run(cells, out),
        Commands::Inverse { matrix } => inverse::run_inverse(&matrix),
        Commands::Determinant { matrix } => inverse::run_determinant(&matrix),
        Commands::ClosedForm { dimension, inverse } => closed_form::run(dimension, inverse),
    };
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}
