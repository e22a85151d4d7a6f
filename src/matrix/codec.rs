// src/matrix/codec.rs
//
// Flat text form of a matrix: every entry followed by ',', every row
// followed by "\n,". The 3x3 matrix (1,2,3),(4,5,6),(7,8,9) encodes as
// "1,2,3,\n,4,5,6,\n,7,8,9,\n,".

use super::error::CodecError;
use super::square::SquareMatrix;

const DELIMITER: char = ',';
const ROW_BREAK: &str = "\n";

fn encode_with<T>(m: &SquareMatrix<T>, mut fmt_entry: impl FnMut(&T) -> String) -> String {
    let mut out = String::new();
    for row in m.rows() {
        for value in row {
            out.push_str(&fmt_entry(value));
            out.push(DELIMITER);
        }
        out.push_str(ROW_BREAK);
        out.push(DELIMITER);
    }
    out
}

/// Numbers are written with six decimal places.
pub fn encode(m: &SquareMatrix<f64>) -> String {
    encode_with(m, |v| format!("{:.6}", v))
}

pub fn encode_formulas(m: &SquareMatrix<String>) -> String {
    encode_with(m, String::clone)
}

/// The final row break is optional; a missing trailing delimiter is not.
pub fn decode(input: &str) -> Result<SquareMatrix<f64>, CodecError> {
    if input.is_empty() {
        return Err(CodecError::Empty);
    }
    let Some(body) = input.strip_suffix(DELIMITER) else {
        return Err(CodecError::Delimiter);
    };

    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut current: Vec<f64> = Vec::new();
    for (position, token) in body.split(DELIMITER).enumerate() {
        if token == ROW_BREAK || token == "\r\n" {
            rows.push(std::mem::take(&mut current));
            continue;
        }
        let value = token
            .trim()
            .parse::<f64>()
            .map_err(|_| CodecError::InvalidNumber {
                token: token.to_string(),
                position,
            })?;
        current.push(value);
    }
    if !current.is_empty() {
        rows.push(current);
    }

    SquareMatrix::from_rows(rows).map_err(CodecError::NotSquare)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::error::MatrixError;

    #[test]
    fn test_encode() {
        let m = SquareMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.5, -4.0]]).unwrap();
        assert_eq!(encode(&m), "1.000000,2.000000,\n,3.500000,-4.000000,\n,");
    }

    #[test]
    fn test_encode_formulas() {
        let m = SquareMatrix::symbolic(2);
        assert_eq!(encode_formulas(&m), "a11,a12,\n,a21,a22,\n,");
    }

    #[test]
    fn test_decode_with_and_without_final_row_break() {
        let expected =
            SquareMatrix::from_rows(vec![vec![1.1, 1.0], vec![0.0, 0.5]]).unwrap();
        assert_eq!(decode("1.1,1,\n,0,.5,\n,").unwrap(), expected);
        assert_eq!(decode("1.1,1,\n,0,.5,").unwrap(), expected);
    }

    #[test]
    fn test_decode_reads_back_encoded_inverse_shape() {
        let m = SquareMatrix::from_rows(vec![
            vec![3.0, 3.0, 3.0],
            vec![1.0, 2.0, 3.0],
            vec![1.0, 2.0, 4.0],
        ])
        .unwrap();
        assert_eq!(decode(&encode(&m)).unwrap(), m);
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(decode(""), Err(CodecError::Empty));
        assert_eq!(decode("1,2,\n,3,4"), Err(CodecError::Delimiter));
        assert_eq!(
            decode("1,x,\n,3,4,"),
            Err(CodecError::InvalidNumber { token: "x".into(), position: 1 })
        );
        assert_eq!(
            decode("1,,\n,3,4,"),
            Err(CodecError::InvalidNumber { token: "".into(), position: 1 })
        );
        assert_eq!(
            decode("1,2,\n,3,"),
            Err(CodecError::NotSquare(MatrixError::NotSquare { size: 2, row: 1, len: 1 }))
        );
        assert_eq!(decode("\n,"), Err(CodecError::NotSquare(MatrixError::NotSquare { size: 1, row: 0, len: 0 })));
    }
}
