//! 정수 차수 반복 - 기준 사상 g, g⁻¹, exp, log

/// g(x) = exp(x) - 1
#[inline]
pub fn g(x: f64) -> f64 {
    libm::exp(x) - 1.0
}

/// g⁻¹(x) = log(1 + x)
#[inline]
pub fn g_inverse(x: f64) -> f64 {
    libm::log(1.0 + x)
}

/// g를 n번 적용 (n < 0이면 g⁻¹을 |n|번)
///
/// 역방향 단계에서 1 + x ≤ 0이면 NaN.
pub fn g_iterate(n: i64, x: f64) -> f64 {
    if n >= 0 {
        repeat(n.unsigned_abs(), x, |y| Some(g(y)))
    } else {
        repeat(n.unsigned_abs(), x, |y| (1.0 + y > 0.0).then(|| g_inverse(y)))
    }
}

/// exp를 n번 적용 (n < 0이면 log를 |n|번)
///
/// 역방향 단계에서 양수가 아닌 값을 만나면 NaN.
pub fn exp_iterate(n: i64, x: f64) -> f64 {
    if n >= 0 {
        repeat(n.unsigned_abs(), x, |y| Some(libm::exp(y)))
    } else {
        repeat(n.unsigned_abs(), x, |y| (y > 0.0).then(|| libm::log(y)))
    }
}

/// 부동점에 도달하면 남은 반복을 생략한다
fn repeat(times: u64, x: f64, step: impl Fn(f64) -> Option<f64>) -> f64 {
    let mut y = x;
    for _ in 0..times {
        let next = match step(y) {
            Some(next) => next,
            None => return f64::NAN,
        };
        if next == y || next.is_nan() {
            return next;
        }
        y = next;
    }
    y
}
