// src/matrix/numeric.rs

use super::error::MatrixError;
use super::square::SquareMatrix;

/// Determinant by cofactor expansion along the first row.
pub fn determinant(m: &SquareMatrix<f64>) -> f64 {
    match m.size() {
        0 => 1.0,
        1 => m[(0, 0)],
        2 => m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)],
        n => (0..n)
            .map(|col| sign(0, col) * m[(0, col)] * determinant(&m.minor(0, col)))
            .sum(),
    }
}

fn sign(row: usize, col: usize) -> f64 {
    if (row + col) % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

pub fn cofactor(m: &SquareMatrix<f64>, row: usize, col: usize) -> f64 {
    sign(row, col) * determinant(&m.minor(row, col))
}

/// Largest size the cofactor expansion handles in reasonable time.
pub const MAX_EXPANSION_SIZE: usize = 8;

/// Inverse via the adjugate: the transposed cofactor matrix over the determinant.
pub fn inverse(m: &SquareMatrix<f64>) -> Result<SquareMatrix<f64>, MatrixError> {
    if m.size() == 0 {
        return Err(MatrixError::Empty);
    }
    let det = determinant(m);
    if det == 0.0 || !det.is_finite() {
        return Err(MatrixError::Singular);
    }
    let cofactors = SquareMatrix::from_fn(m.size(), |row, col| cofactor(m, row, col) / det);
    Ok(cofactors.transpose())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: Vec<Vec<f64>>) -> SquareMatrix<f64> {
        SquareMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_determinant_small() {
        assert_eq!(determinant(&matrix(vec![vec![7.0]])), 7.0);
        assert_eq!(determinant(&matrix(vec![vec![1.0, 2.0], vec![3.0, 4.0]])), -2.0);
    }

    #[test]
    fn test_determinant_three_by_three() {
        let m = matrix(vec![
            vec![2.0, -3.0, 1.0],
            vec![2.0, 0.0, -1.0],
            vec![1.0, 4.0, 5.0],
        ]);
        assert_eq!(determinant(&m), 49.0);
    }

    #[test]
    fn test_determinant_four_by_four() {
        let m = matrix(vec![
            vec![1.0, 0.0, 2.0, -1.0],
            vec![3.0, 0.0, 0.0, 5.0],
            vec![2.0, 1.0, 4.0, -3.0],
            vec![1.0, 0.0, 5.0, 0.0],
        ]);
        assert_eq!(determinant(&m), 30.0);
    }

    #[test]
    fn test_inverse_times_matrix_is_identity() {
        let m = matrix(vec![
            vec![1.1, 1.0, 0.0, 1.0],
            vec![0.0, 0.0, 2.0, 3.0],
            vec![1.0, 0.0, 1.0, 0.5],
            vec![3.1, 1.1, 0.5, 0.0],
        ]);
        let inv = inverse(&m).unwrap();
        let product = inv.multiply(&m).unwrap();
        assert!(product.approx_eq(&SquareMatrix::identity(4), 1e-9));
    }

    #[test]
    fn test_inverse_known_values() {
        let m = matrix(vec![
            vec![1.0, 2.0, 3.0],
            vec![0.0, 1.0, 4.0],
            vec![5.0, 6.0, 0.0],
        ]);
        let expected = matrix(vec![
            vec![-24.0, 18.0, 5.0],
            vec![20.0, -15.0, -4.0],
            vec![-5.0, 4.0, 1.0],
        ]);
        assert!(inverse(&m).unwrap().approx_eq(&expected, 1e-12));
    }

    #[test]
    fn test_inverse_of_non_symmetric_matrix_is_transposed_adjugate() {
        // [[4, 7], [2, 6]]^-1 = [[0.6, -0.7], [-0.2, 0.4]]
        let inv = inverse(&matrix(vec![vec![4.0, 7.0], vec![2.0, 6.0]])).unwrap();
        let expected = matrix(vec![vec![0.6, -0.7], vec![-0.2, 0.4]]);
        assert!(inv.approx_eq(&expected, 1e-12));
    }

    #[test]
    fn test_inverse_one_by_one() {
        let inv = inverse(&matrix(vec![vec![4.0]])).unwrap();
        assert_eq!(inv[(0, 0)], 0.25);
    }

    #[test]
    fn test_singular_matrix_has_no_inverse() {
        let m = matrix(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ]);
        assert_eq!(determinant(&m), 0.0);
        assert_eq!(inverse(&m), Err(MatrixError::Singular));
    }
}
