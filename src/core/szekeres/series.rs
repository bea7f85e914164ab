use super::polys::{SERIES_ORDER, SZEKERES_POLYS};

/// x에 대한 멱급수 계수 (x^0 ~ x^6)
pub type SeriesCoefficients = [f64; SERIES_ORDER + 1];

/// Horner 방식 다항식 평가
///
/// 최고차 계수부터 `acc = c + t * acc` 로 누적한다. 누적기는 0에서 시작한다.
#[inline]
pub fn horner(coefficients: &[f64], t: f64) -> f64 {
    coefficients
        .iter()
        .rev()
        .fold(0.0, |acc, &c| c + t * acc)
}

/// 분수 차수 `u_frac`에서 Szekeres 다항식 표를 평가
///
/// 결과의 k번째 원소는 g_u(x) 근사 급수의 x^k 계수이다.
/// 의도된 범위는 [-0.5, 0.5]이지만 강제하지 않는다 (범위를 벗어나면 정확도만 떨어진다).
pub fn evaluate_table(u_frac: f64) -> SeriesCoefficients {
    let mut coefficients = [0.0; SERIES_ORDER + 1];
    for (slot, row) in coefficients.iter_mut().zip(SZEKERES_POLYS.iter()) {
        *slot = horner(row, u_frac);
    }
    coefficients
}

/// 계수 열로 만든 멱급수를 x에서 평가
#[inline]
pub fn evaluate_series(coefficients: &[f64], x: f64) -> f64 {
    horner(coefficients, x)
}

/// u와 x가 모두 작을 때의 분수 반복 g_u(x)
///
/// 권장 범위: -0.5 < u < 0.5, -0.1 < x < 0.1.
/// u를 두 번 나누어 적용하면 (예: `gsmall(u/2, gsmall(u/2, x))`) 범위를 넓힐 수 있다.
pub fn gsmall(u: f64, x: f64) -> f64 {
    evaluate_series(&evaluate_table(u), x)
}
