use lilib::{Element, Matrix, MatrixError, Random};
use proptest::prelude::*;

fn hand_computed<T: Element + From<i8>>() {
    let v = |x: i8| T::from(x);
    let a = Matrix::from_rows(vec![vec![v(1), v(2)], vec![v(3), v(4)]]).unwrap();
    let b = Matrix::from_rows(vec![vec![v(5), v(6)], vec![v(7), v(8)]]).unwrap();
    let c = a.multiply(&b).unwrap();
    assert_eq!(c.shape(), (2, 2));
    assert_eq!(c.as_slice(), &[v(19), v(22), v(43), v(50)]);
}

fn mismatch<T: Element>() {
    let a = Matrix::<T>::alloc(2, 3).unwrap();
    let b = Matrix::<T>::alloc(2, 2).unwrap();
    let err = a.multiply(&b).unwrap_err();
    assert_eq!(
        err,
        MatrixError::DimensionMismatch {
            left: (2, 3),
            right: (2, 2)
        }
    );
}

#[test]
fn product_matches_hand_computation_for_every_kind() {
    hand_computed::<i32>();
    hand_computed::<i64>();
    hand_computed::<f64>();
    hand_computed::<f32>();
}

#[test]
fn mismatch_for_every_kind() {
    mismatch::<i32>();
    mismatch::<i64>();
    mismatch::<f64>();
    mismatch::<f32>();
}

#[test]
fn three_by_three_product() {
    let a = Matrix::from_rows(vec![vec![2, 0, 1], vec![1, 3, 2], vec![1, 1, 1]]).unwrap();
    let b = Matrix::from_rows(vec![vec![1, 2, 1], vec![2, 1, 0], vec![0, 1, 4]]).unwrap();
    let c = a.multiply(&b).unwrap();
    assert_eq!(
        c,
        Matrix::from_rows(vec![vec![2, 5, 6], vec![7, 7, 9], vec![3, 4, 5]]).unwrap()
    );
}

#[test]
fn empty_matrix_is_releasable_and_printable() {
    let mut m = Matrix::<f32>::alloc(0, 0).unwrap();
    assert_eq!(m.render_plain(), "");
    assert_eq!(m.render_pretty(), "");
    m.release();
    m.release();
    assert_eq!(m.shape(), (0, 0));
}

#[test]
fn random_handle_drives_fill() {
    let mut rng = Random::seeded(5);
    let mut m = Matrix::<f64>::alloc(4, 4).unwrap();
    m.fill_random(&mut rng, -2.0, 2.0).unwrap();
    assert!(m.as_slice().iter().all(|v| (-2.0..=2.0).contains(v)));
}

fn span_up_to_max_is_rejected<T: Element + From<i8>>(max: T) {
    let four = T::from(4);
    let mut m = Matrix::<T>::alloc(3, 2).unwrap();
    m.fill(four);
    let result = m.fill_random(&mut Random::seeded(1), T::zero(), max);
    assert_eq!(result, Err(MatrixError::InvalidRange));
    assert!(m.as_slice().iter().all(|&v| v == four));
}

#[test]
fn float_fill_up_to_max_is_invalid_range() {
    span_up_to_max_is_rejected(f64::MAX);
    span_up_to_max_is_rejected(f32::MAX);
}

proptest! {
    #[test]
    fn alloc_then_release_twice(rows in 0usize..32, cols in 0usize..32) {
        let mut m = Matrix::<i32>::alloc(rows, cols).unwrap();
        prop_assert_eq!(m.shape(), (rows, cols));
        prop_assert_eq!(m.as_slice().len(), rows * cols);
        m.release();
        m.release();
        prop_assert_eq!(m.shape(), (0, 0));
        prop_assert!(!m.is_allocated());
    }

    #[test]
    fn int_fill_respects_bounds(seed in any::<u64>(), lo in -1000i32..1000, span in 0i32..1000) {
        let hi = lo + span;
        let mut rng = Random::seeded(seed);
        let mut m = Matrix::<i32>::alloc(6, 5).unwrap();
        m.fill_random(&mut rng, lo, hi).unwrap();
        prop_assert!(m.as_slice().iter().all(|&v| lo <= v && v <= hi));
    }

    #[test]
    fn float_fill_respects_bounds(seed in any::<u64>(), lo in -1.0e6f64..1.0e6, span in 0.0f64..1.0e6) {
        let hi = lo + span;
        let mut rng = Random::seeded(seed);
        let mut m = Matrix::<f64>::alloc(5, 6).unwrap();
        m.fill_random(&mut rng, lo, hi).unwrap();
        prop_assert!(m.as_slice().iter().all(|&v| lo <= v && v <= hi));
    }

    #[test]
    fn f32_fill_respects_bounds(seed in any::<u64>(), lo in -100.0f32..100.0, span in 0.0f32..100.0) {
        let hi = lo + span;
        let mut rng = Random::seeded(seed);
        let mut m = Matrix::<f32>::alloc(3, 3).unwrap();
        m.fill_random(&mut rng, lo, hi).unwrap();
        prop_assert!(m.as_slice().iter().all(|&v| lo <= v && v <= hi));
    }

    #[test]
    fn product_cell_is_dot_product(
        m in 1usize..5,
        k in 0usize..5,
        n in 1usize..5,
        seed in any::<u64>(),
    ) {
        let mut rng = Random::seeded(seed);
        let mut a = Matrix::<i64>::alloc(m, k).unwrap();
        let mut b = Matrix::<i64>::alloc(k, n).unwrap();
        a.fill_random(&mut rng, -50, 50).unwrap();
        b.fill_random(&mut rng, -50, 50).unwrap();

        let c = a.multiply(&b).unwrap();
        prop_assert_eq!(c.shape(), (m, n));
        for i in 0..m {
            for j in 0..n {
                let expected: i64 = (0..k).map(|p| a[(i, p)] * b[(p, j)]).sum();
                prop_assert_eq!(c[(i, j)], expected);
            }
        }
    }

    #[test]
    fn mismatched_shapes_never_multiply(r1 in 0usize..6, c1 in 0usize..6, r2 in 0usize..6, c2 in 0usize..6) {
        prop_assume!(c1 != r2);
        let a = Matrix::<f64>::alloc(r1, c1).unwrap();
        let b = Matrix::<f64>::alloc(r2, c2).unwrap();
        let is_mismatch = matches!(a.multiply(&b), Err(MatrixError::DimensionMismatch { .. }));
        prop_assert!(is_mismatch);
    }

    #[test]
    fn printing_is_idempotent(seed in any::<u64>(), rows in 0usize..5, cols in 0usize..5) {
        let mut rng = Random::seeded(seed);
        let mut m = Matrix::<f32>::alloc(rows, cols).unwrap();
        m.fill_random(&mut rng, -10.0, 10.0).unwrap();
        prop_assert_eq!(m.render_plain(), m.render_plain());
        prop_assert_eq!(m.render_pretty(), m.render_pretty());
        prop_assert_eq!(m.render_pretty().lines().count(), rows);
    }
}
