use crate::rng::Rng;

#[test]
fn same_seed_gives_same_stream() {
    let mut a = Rng::from_seed(42);
    let mut b = Rng::from_seed(42);
    for _ in 0..100 {
        assert_eq!(a.exponential(0.01), b.exponential(0.01));
        assert_eq!(a.uniform_int(0, 100), b.uniform_int(0, 100));
    }

    let mut c = Rng::from_seed(43);
    let xs: Vec<u32> = (0..16).map(|_| a.uniform_int(0, 1_000_000)).collect();
    let ys: Vec<u32> = (0..16).map(|_| c.uniform_int(0, 1_000_000)).collect();
    assert_ne!(xs, ys);
}

#[test]
fn child_streams_do_not_depend_on_sibling_usage() {
    let mut root1 = Rng::from_seed(7);
    let mut a1 = root1.create_child();
    let mut b1 = root1.create_child();

    let mut root2 = Rng::from_seed(7);
    let mut a2 = root2.create_child();
    let mut b2 = root2.create_child();

    // 消耗 a1 不影响 b1
    for _ in 0..1_000 {
        a1.exponential(1.0);
    }
    let from_b1: Vec<u32> = (0..8).map(|_| b1.uniform_int(0, 1 << 20)).collect();
    let from_b2: Vec<u32> = (0..8).map(|_| b2.uniform_int(0, 1 << 20)).collect();
    assert_eq!(from_b1, from_b2);

    let from_a2: Vec<u32> = (0..8).map(|_| a2.uniform_int(0, 1 << 20)).collect();
    assert_ne!(from_a2, from_b2);
}

#[test]
fn uniform_int_stays_in_half_open_range() {
    let mut rng = Rng::from_seed(1);
    let mut seen = [false; 5];
    for _ in 0..1_000 {
        let v = rng.uniform_int(0, 5);
        assert!(v < 5);
        seen[v as usize] = true;
    }
    assert!(seen.iter().all(|s| *s));
}

#[test]
fn exponential_sample_mean_is_close_to_requested_mean() {
    let mut rng = Rng::from_seed(99);
    let n = 100_000;
    let mean = 0.01;
    let sum: f64 = (0..n).map(|_| rng.exponential(mean)).sum();
    let got = sum / n as f64;
    // 标准误差 mean/sqrt(n) ≈ 3.2e-5，容差取约 6 倍
    assert!((got - mean).abs() < 2e-4, "sample mean {got}");
    assert!(got > 0.0);
}

#[test]
#[should_panic(expected = "empty range")]
fn uniform_int_rejects_empty_range() {
    Rng::from_seed(0).uniform_int(3, 3);
}
