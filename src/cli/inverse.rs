// src/cli/inverse.rs
use super::{check_expansion_size, unescape_row_breaks, CliError};
use crate::matrix::{codec, determinant, inverse};

pub fn run_inverse(encoded: &str) -> Result<(), CliError> {
    let matrix = codec::decode(&unescape_row_breaks(encoded))?;
    check_expansion_size(matrix.size())?;
    let inv = inverse(&matrix)?;
    print!("{}", codec::encode(&inv));
    Ok(())
}

pub fn run_determinant(encoded: &str) -> Result<(), CliError> {
    let matrix = codec::decode(&unescape_row_breaks(encoded))?;
    check_expansion_size(matrix.size())?;
    println!("{:.6}", determinant(&matrix));
    Ok(())
}
