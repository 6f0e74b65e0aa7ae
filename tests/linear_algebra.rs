use litearray::core::linear_algebra::{determinant, identity_matrix, matrix_multiply, transpose};
use litearray::core::advanced_linear_algebra::inverse;
use litearray::MathError;

fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

fn assert_identity(m: &[Vec<f64>], eps: f64) {
    let id = identity_matrix(m.len());
    for (row, expected) in m.iter().zip(&id) {
        for (v, e) in row.iter().zip(expected) {
            assert!(approx_eq(*v, *e, eps), "not identity: {m:?}");
        }
    }
}

#[test]
fn transpose_2x3() {
    let m = vec![vec![1.1, 2.2, 3.3], vec![4.4, 5.5, 6.6]];
    let t = transpose(&m, 2).expect("transpose ok");
    assert_eq!(t, vec![vec![1.1, 4.4], vec![2.2, 5.5], vec![3.3, 6.6]]);
}

#[test]
fn transpose_is_an_involution() {
    let m = vec![vec![1.5, -2.0, 3.25, 0.0], vec![4.0, 5.125, -6.5, 7.0]];
    assert_eq!(transpose(&transpose(&m, -1).unwrap(), -1).unwrap(), m);
}

#[test]
fn transpose_invalid_inputs() {
    assert_eq!(transpose(&[], 2), Err(MathError::Empty { what: "matrix" }));
    assert_eq!(transpose(&[], 2).unwrap_err().to_string(), "matrix cannot be empty");
    assert!(matches!(
        transpose(&[vec![1.0, 2.0], vec![3.0]], 2),
        Err(MathError::Ragged { row: 1, .. })
    ));
    assert_eq!(
        transpose(&[vec![1.0, 2.0], vec![3.0, 4.0]], 11),
        Err(MathError::PrecisionRange(11))
    );
}

#[test]
fn determinant_3x3_exact() {
    let m = vec![vec![2.0, 3.0, 1.0], vec![4.0, 5.0, 6.0], vec![7.0, 8.0, 9.0]];
    assert_eq!(determinant(&m).unwrap(), 9.0);
}

#[test]
fn determinant_empty_and_non_square() {
    assert_eq!(
        determinant(&[]).unwrap_err().to_string(),
        "matrix must be square and non-empty"
    );
    assert_eq!(
        determinant(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]),
        Err(MathError::NotSquare { rows: 2, cols: 3 })
    );
}

#[test]
fn determinant_of_transpose_matches() {
    let cases = vec![
        vec![vec![4.0, 6.0], vec![3.0, 8.0]],
        vec![vec![2.0, 3.0, 1.0], vec![4.0, 5.0, 6.0], vec![7.0, 8.0, 9.0]],
        vec![
            vec![0.5, -1.25, 2.0, 3.0],
            vec![1.0, 0.0, -2.5, 4.0],
            vec![3.5, 2.0, 1.0, -1.0],
            vec![-2.0, 1.5, 0.25, 2.0],
        ],
    ];
    for m in cases {
        let d = determinant(&m).unwrap();
        let dt = determinant(&transpose(&m, -1).unwrap()).unwrap();
        assert!(approx_eq(d, dt, 1e-9), "{d} vs {dt}");
    }
}

#[test]
fn inverse_2x2() {
    let inv = inverse(&[vec![2.0, 3.0], vec![4.0, 5.0]]).unwrap();
    assert_eq!(inv, vec![vec![-2.5, 1.5], vec![2.0, -1.0]]);
}

#[test]
fn inverse_times_matrix_is_identity() {
    let cases = vec![
        vec![vec![2.0, 3.0], vec![4.0, 5.0]],
        vec![vec![4.0, 2.0, 1.0], vec![1.0, 3.0, 2.0], vec![2.0, 1.0, 5.0]],
        vec![
            vec![0.5, -1.25, 2.0, 3.0],
            vec![1.0, 0.0, -2.5, 4.0],
            vec![3.5, 2.0, 1.0, -1.0],
            vec![-2.0, 1.5, 0.25, 2.0],
        ],
    ];
    for m in cases {
        let inv = inverse(&m).expect("invertible");
        assert_eq!(inv.len(), m.len());
        assert_identity(&matrix_multiply(&m, &inv).unwrap(), 1e-6);
        assert_identity(&matrix_multiply(&inv, &m).unwrap(), 1e-6);
    }
}

#[test]
fn inverse_singular_and_invalid() {
    assert_eq!(inverse(&[vec![1.0, 2.0], vec![2.0, 4.0]]), Err(MathError::Singular));
    let rank_two = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0], vec![7.0, 8.0, 9.0]];
    assert_eq!(inverse(&rank_two), Err(MathError::Singular));
    assert_eq!(
        inverse(&[]).unwrap_err().to_string(),
        "matrix must be square and non-empty"
    );
}

#[test]
fn inputs_are_not_mutated() {
    let m = vec![vec![4.0, 2.0, 1.0], vec![1.0, 3.0, 2.0], vec![2.0, 1.0, 5.0]];
    let copy = m.clone();
    let _ = transpose(&m, 3);
    let _ = determinant(&m);
    let _ = inverse(&m);
    assert_eq!(m, copy);
}

#[test]
fn non_finite_entries_are_rejected() {
    let m = vec![vec![1.0, f64::NAN], vec![3.0, 4.0]];
    assert_eq!(determinant(&m), Err(MathError::NonFinite { row: 0, col: 1 }));
    assert_eq!(inverse(&m), Err(MathError::NonFinite { row: 0, col: 1 }));
    assert!(transpose(&m, -1).unwrap()[1][0].is_nan());
}
