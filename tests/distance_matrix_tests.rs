use graph_solvers::graph::DistanceMatrix;
use graph_solvers::Weight;

#[test]
fn test_fresh_matrix_layout() {
    let inf = <i64 as Weight>::infinity();
    let matrix: DistanceMatrix<i64> = DistanceMatrix::with_capacity(4, inf);

    for i in 0..4 {
        for j in 0..4 {
            let expected = if i == j { 0 } else { inf };
            assert_eq!(matrix.get(i, j), expected);
        }
    }
}

#[test]
fn test_resize_preserves_top_left_block() {
    let inf = <i64 as Weight>::infinity();
    let mut matrix: DistanceMatrix<i64> = DistanceMatrix::with_capacity(3, inf);
    matrix.set(0, 1, 7);
    matrix.set(2, 0, 9);

    matrix.resize(6);
    assert_eq!(matrix.size(), 6);

    // Old cells survive at the same coordinates
    assert_eq!(matrix.get(0, 1), 7);
    assert_eq!(matrix.get(2, 0), 9);
    assert_eq!(matrix.get(1, 1), 0);

    // New rows and columns are unreachable except on the diagonal
    for i in 0..6 {
        for j in 0..6 {
            if i < 3 && j < 3 {
                continue;
            }
            let expected = if i == j { 0 } else { inf };
            assert_eq!(matrix.get(i, j), expected, "cell ({}, {})", i, j);
        }
    }
}

#[test]
fn test_resize_to_smaller_or_equal_is_noop() {
    let inf = <i64 as Weight>::infinity();
    let mut matrix: DistanceMatrix<i64> = DistanceMatrix::with_capacity(4, inf);
    matrix.set(1, 2, 5);

    matrix.resize(4);
    matrix.resize(2);
    assert_eq!(matrix.size(), 4);
    assert_eq!(matrix.get(1, 2), 5);
}

#[test]
fn test_push_directed_grows_on_demand() {
    let inf = <i64 as Weight>::infinity();
    let mut matrix: DistanceMatrix<i64> = DistanceMatrix::with_capacity(2, inf);

    matrix.push_directed(0, 5, 3);
    assert_eq!(matrix.size(), 6);
    assert_eq!(matrix.get(0, 5), 3);
    assert_eq!(matrix.get(5, 5), 0);
    assert_eq!(matrix.vertex_count(), 2);

    // Parallel arc overwrites the cell: last write wins
    matrix.push_directed(0, 5, 11);
    assert_eq!(matrix.get(0, 5), 11);
}
