// src/cli/closed_form.rs
use super::{check_expansion_size, CliError};
use crate::matrix::{closed_form, codec};

pub fn run(dimension: usize, adjugate: bool) -> Result<(), CliError> {
    check_expansion_size(dimension)?;
    if adjugate {
        let formulas = closed_form::inverse(dimension)?;
        print!("{}", codec::encode_formulas(&formulas));
        println!("Divide each entry by:");
    }
    println!("{}", closed_form::determinant(dimension)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::MatrixError;

    #[test]
    fn test_sizes() {
        assert!(run(3, true).is_ok());
        assert!(run(2, false).is_ok());
        assert!(matches!(
            run(2, true),
            Err(CliError::Matrix(MatrixError::TooSmall { size: 2, min: 3 }))
        ));
        assert!(matches!(
            run(12, false),
            Err(CliError::Matrix(MatrixError::TooLarge { size: 12, max: 8 }))
        ));
    }
}
