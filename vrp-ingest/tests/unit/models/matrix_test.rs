use super::*;

#[test]
fn can_set_and_get_costs() {
    let mut matrix = CostMatrix::new(2);

    matrix.set(0, 1, 7);
    matrix.set(1, 0, 9);

    assert_eq!(matrix.size(), 2);
    assert_eq!(matrix.get(0, 1), 7);
    assert_eq!(matrix.get(1, 0), 9);
    assert_eq!(matrix.get(0, 0), 0);
}

#[test]
fn can_index_rows() {
    let mut matrix = CostMatrix::new(3);
    matrix.set(1, 2, 5);

    assert_eq!(matrix[1], [0, 0, 5]);
    assert_eq!(matrix[0], [0, 0, 0]);
}
