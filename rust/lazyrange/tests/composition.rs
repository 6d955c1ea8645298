use itertools::Itertools;
use lazyrange::{
    IntRange, RangeAdaptorsExt, enumerate, product, product_range, range, slice, stride,
    to_vec, transform, zip,
};
use lazyrange_chunk::{chunk_range, chunk_ranges};

fn vec1() -> Vec<i32> {
    vec![1, 2, 3, 4, 5, 6]
}

fn vec2() -> Vec<i32> {
    vec![0, 1, 2, 3, 4]
}

#[test]
fn test_zip_transform_with_enumerate() {
    let v = vec1();
    let mut n = 0usize;
    let imitation = transform(&v, move |x| {
        let pair = (n, *x);
        n += 1;
        pair
    });
    let mut count = 0;
    for (x1, (i, x)) in zip((imitation, enumerate(&v))) {
        assert_eq!(x1, (i, *x));
        count += 1;
    }
    assert_eq!(count, v.len());
}

#[test]
fn test_enumerate_transformed_range() {
    let v = vec1();
    let mut n = 0usize;
    let imitation = transform(&v, move |x| {
        let pair = (n, *x);
        n += 1;
        pair
    });
    for (i, (j, x)) in enumerate(imitation) {
        assert_eq!(i, j);
        assert_eq!(x, v[i]);
    }
}

#[test]
fn test_transform_product() {
    let v = vec1();
    let total: i32 = transform(product((&v, &v)), |(a, b)| a + b)
        .into_iter()
        .sum();
    assert_eq!(total, 252);
}

#[test]
fn test_slice_zipped_range() {
    let v = vec1();
    let pairs = to_vec(slice(zip((&v, &v)), 0, 4));
    assert_eq!(pairs.len(), 4);
    for (x1, x2) in pairs {
        assert_eq!(x1, x2);
    }
}

#[test]
fn test_product_of_transformed_and_integer_range() {
    let times_ten = transform(range(10), |i| 10 * i);
    let total: i64 = product((times_ten, range(10)))
        .into_iter()
        .map(|(a, b)| a + b)
        .sum();
    assert_eq!(total, 99 * 100 / 2);
}

#[test]
fn test_stride_through_product() {
    let v = vec2();
    let n = v.len();
    for s in 1..6 {
        let mut idx = 0;
        let mut count = 0;
        for (x1, x2) in stride(product((&v, &v)), s).unwrap() {
            let i = idx / n;
            let j = idx - i * n;
            assert_eq!(*x1 as usize, i);
            assert_eq!(*x2 as usize, j);
            idx += s as usize;
            count += 1;
        }
        assert_eq!(count, (n * n).div_ceil(s as usize));
    }
}

#[test]
fn test_zip_two_strided_ranges() {
    let v = vec2();
    for s in 1..6 {
        let mut i = 0;
        for (x1, x2) in zip((stride(&v, s).unwrap(), stride(&v, s).unwrap())) {
            assert_eq!(*x1, i);
            assert_eq!(*x2, i);
            i += s as i32;
        }
    }
}

#[test]
fn test_product_range_matches_iproduct() {
    let ours = to_vec(product_range!(3, 2, 4));
    let expected: Vec<(i64, i64, i64)> = itertools::iproduct!(0..3, 0..2, 0..4).collect();
    assert_eq!(ours, expected);

    let arrays = to_vec(product_range([3, 2, 4]));
    let flattened: Vec<(i64, i64, i64)> = arrays.into_iter().map(|[a, b, c]| (a, b, c)).collect();
    assert_eq!(flattened, expected);
}

#[test]
fn test_random_pipelines_match_std_adaptors() {
    let mut rng = fastrand::Rng::with_seed(2024);
    for _ in 0..300 {
        let len = rng.usize(0..40);
        let v: Vec<i64> = (0..len).map(|_| rng.i64(-100..100)).collect();
        let start = rng.usize(0..45);
        let end = rng.usize(0..45);
        let step = rng.i64(1..7);

        let ours = (&v)
            .sliced(start, end)
            .strided(step)
            .unwrap()
            .transformed(|x| x * 3)
            .enumerated()
            .materialized();
        let stop = end.min(len);
        let expected: Vec<(usize, i64)> = v
            .iter()
            .skip(start)
            .take(stop.saturating_sub(start))
            .step_by(step as usize)
            .map(|x| x * 3)
            .enumerate()
            .collect();
        assert_eq!(ours, expected, "len={len} start={start} end={end} step={step}");
    }
}

#[test]
fn test_mutation_through_nested_adaptors() {
    let mut a = vec![0; 10];
    let mut b = vec![0; 10];
    for (i, (x, y)) in enumerate(zip((slice(&mut a, 2, 8), stride(&mut b, 2).unwrap()))) {
        *x = i as i32 + 1;
        *y = -(i as i32 + 1);
    }
    assert_eq!(a, vec![0, 0, 1, 2, 3, 4, 5, 0, 0, 0]);
    assert_eq!(b, vec![-1, 0, -2, 0, -3, 0, -4, 0, -5, 0]);
}

#[test]
fn test_chunks_partition_integer_range() {
    let span = IntRange::new(-7, 93);
    let expected: i64 = span.into_iter().sum();
    for n_chunks in 1..=16 {
        let partial_sums = (0..n_chunks)
            .map(|rank| {
                let (first, last) = chunk_range(span.first(), span.last(), n_chunks, rank);
                IntRange::new(first, last).into_iter().sum::<i64>()
            })
            .collect_vec();
        assert_eq!(partial_sums.iter().sum::<i64>(), expected);

        let sizes = chunk_ranges(span.first(), span.last(), n_chunks)
            .map(|r| IntRange::from(r).size())
            .collect_vec();
        assert_eq!(sizes.iter().sum::<usize>(), span.size());
        assert!(sizes.iter().max().unwrap() - sizes.iter().min().unwrap() <= 1);
    }
}
