use crate::core::szekeres::*;
use approx::{assert_abs_diff_eq, assert_relative_eq};

#[test]
fn 계수표_구조_테스트() {
    assert_eq!(SZEKERES_POLYS.len(), SERIES_ORDER + 1);
    assert_eq!(SZEKERES_POLYS[0], &[0.0]);
    assert_eq!(SZEKERES_POLYS[1], &[1.0]);
    // 2행부터 k행은 k개의 계수를 가짐
    for (k, row) in SZEKERES_POLYS.iter().enumerate().skip(1) {
        assert_eq!(row.len(), k, "{}행의 길이가 잘못됨", k);
    }
}

#[test]
fn horner_기본_테스트() {
    // 1 + 2t + 3t² at t = 2 → 17
    assert_eq!(horner(&[1.0, 2.0, 3.0], 2.0), 17.0);
    assert_eq!(horner(&[], 5.0), 0.0);
    assert_eq!(horner(&[4.0], 123.0), 4.0);
}

#[test]
fn 차수_0은_항등_급수() {
    let coefficients = evaluate_table(0.0);
    assert_eq!(coefficients, [0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);

    // 항등 급수는 반올림 없이 x를 그대로 돌려줘야 함
    for &x in &[-0.3, -1e-9, 0.0, 0.12345, 0.4] {
        assert_eq!(evaluate_series(&coefficients, x), x);
        assert_eq!(gsmall(0.0, x), x);
    }
}

#[test]
fn 차수_1은_expm1_테일러_계수() {
    let coefficients = evaluate_table(1.0);
    let expected = [0.0, 1.0, 1.0 / 2.0, 1.0 / 6.0, 1.0 / 24.0, 1.0 / 120.0, 1.0 / 720.0];
    for (k, (&got, &want)) in coefficients.iter().zip(expected.iter()).enumerate() {
        assert_relative_eq!(got, want, epsilon = 1e-15, max_relative = 1e-12);
        println!("  x^{} 계수: {:.17}", k, got);
    }
}

#[test]
fn 차수_마이너스1은_log1p_테일러_계수() {
    let coefficients = evaluate_table(-1.0);
    let expected = [0.0, 1.0, -1.0 / 2.0, 1.0 / 3.0, -1.0 / 4.0, 1.0 / 5.0, -1.0 / 6.0];
    for (&got, &want) in coefficients.iter().zip(expected.iter()) {
        assert_relative_eq!(got, want, epsilon = 1e-15, max_relative = 1e-12);
    }
}

#[test]
fn gsmall_정수_차수_근사_테스트() {
    for &x in &[-0.1, -0.05, 0.01, 0.05, 0.1] {
        let forward = gsmall(1.0, x);
        assert_abs_diff_eq!(forward, x.exp_m1(), epsilon = 1e-10);

        let backward = gsmall(-1.0, x);
        assert_abs_diff_eq!(backward, x.ln_1p(), epsilon = 1e-7);
    }
}

#[test]
fn gsmall_반복_합성_테스트() {
    let x = 0.05;
    let whole = gsmall(1.0, x);

    let halves = gsmall(0.5, gsmall(0.5, x));
    assert_abs_diff_eq!(halves, whole, epsilon = 1e-10);

    let quarters = (0..4).fold(x, |acc, _| gsmall(0.25, acc));
    assert_abs_diff_eq!(quarters, whole, epsilon = 1e-10);

    // 역방향 반복으로 원래 값 복원
    let restored = gsmall(-1.0, whole);
    assert_abs_diff_eq!(restored, x, epsilon = 1e-8);
}

#[test]
fn 비유한_입력_전파_테스트() {
    // 상수 행도 누적기와 곱해지므로 NaN이 된다
    let coefficients = evaluate_table(f64::NAN);
    assert!(coefficients.iter().all(|c| c.is_nan()));
    assert!(gsmall(0.25, f64::NAN).is_nan());
}
