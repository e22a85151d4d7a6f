// src/matrix/closed_form.rs
//
// Symbolic formulas over entry names (a11, a12, ...). Formulas grow
// factorially with the size, so callers keep n small.

use super::error::MatrixError;
use super::square::SquareMatrix;

/// Determinant formula of a matrix whose entries are already expressions.
pub fn determinant_of(m: &SquareMatrix<String>) -> String {
    match m.size() {
        0 => String::from("1"),
        1 => m[(0, 0)].clone(),
        2 => format!("({}*{} - {}*{})", m[(0, 0)], m[(1, 1)], m[(0, 1)], m[(1, 0)]),
        n => {
            let mut formula = String::from("(");
            for col in 0..n {
                let entry = &m[(0, col)];
                if col % 2 == 1 {
                    formula.push_str(&format!(" - ({})", entry));
                } else {
                    if col != 0 {
                        formula.push_str(" + ");
                    }
                    formula.push_str(&format!("({})", entry));
                }
                formula.push_str(&determinant_of(&m.minor(0, col)));
            }
            formula.push(')');
            formula
        }
    }
}

/// Closed-form determinant of an n x n matrix, n >= 2.
pub fn determinant(size: usize) -> Result<String, MatrixError> {
    if size < 2 {
        return Err(MatrixError::TooSmall { size, min: 2 });
    }
    Ok(determinant_of(&SquareMatrix::symbolic(size)))
}

/// Adjugate formulas of an n x n matrix, n >= 3. Entry (i, j) is the signed
/// minor determinant at (j, i); divide each by `determinant(size)` to get
/// the inverse.
pub fn inverse(size: usize) -> Result<SquareMatrix<String>, MatrixError> {
    if size < 3 {
        return Err(MatrixError::TooSmall { size, min: 3 });
    }
    let symbolic = SquareMatrix::symbolic(size);
    Ok(SquareMatrix::from_fn(size, |row, col| {
        let minor_formula = determinant_of(&symbolic.minor(col, row));
        if (row + col) % 2 == 1 {
            format!("(-1){}", minor_formula)
        } else {
            minor_formula
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_by_two_determinant() {
        assert_eq!(determinant(2).unwrap(), "(a11*a22 - a12*a21)");
    }

    #[test]
    fn test_three_by_three_determinant() {
        assert_eq!(
            determinant(3).unwrap(),
            "((a11)(a22*a33 - a23*a32) - (a12)(a21*a33 - a23*a31) + (a13)(a21*a32 - a22*a31))"
        );
    }

    #[test]
    fn test_four_by_four_nests_three_by_three() {
        let formula = determinant(4).unwrap();
        assert!(formula.starts_with("((a11)((a22)(a33*a44 - a34*a43)"));
        assert_eq!(formula.matches(" - (a1").count(), 2);
        assert_eq!(formula.matches('(').count(), formula.matches(')').count());
    }

    #[test]
    fn test_too_small() {
        assert_eq!(determinant(1), Err(MatrixError::TooSmall { size: 1, min: 2 }));
        assert_eq!(inverse(2), Err(MatrixError::TooSmall { size: 2, min: 3 }));
    }

    #[test]
    fn test_three_by_three_inverse_is_transposed_and_signed() {
        let adj = inverse(3).unwrap();
        assert_eq!(adj[(0, 0)], "(a22*a33 - a23*a32)");
        // (0, 1) comes from the minor at (1, 0) and carries a sign.
        assert_eq!(adj[(0, 1)], "(-1)(a12*a33 - a13*a32)");
        assert_eq!(adj[(1, 0)], "(-1)(a21*a33 - a23*a31)");
        assert_eq!(adj[(2, 2)], "(a11*a22 - a12*a21)");
    }
}
