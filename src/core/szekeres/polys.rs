//! Szekeres 다항식 표 - 컴파일 타임 상수

/// 급수의 최고 차수 (x^6 까지)
pub const SERIES_ORDER: usize = 6;

/// Szekeres 다항식 계수 표
///
/// k번째 행은 x^k 계수를 반복 차수 u의 다항식으로 나타낸 것이며,
/// 계수는 u^0, u^1, ... 순서로 저장된다. 0행은 `[0]`, 1행은 `[1]`.
pub const SZEKERES_POLYS: [&[f64]; SERIES_ORDER + 1] = [
    &[0.0],
    &[1.0],
    &[0.0, 1.0 / 2.0],
    &[0.0, -1.0 / 12.0, 1.0 / 4.0],
    &[0.0, 1.0 / 48.0, -5.0 / 48.0, 1.0 / 8.0],
    &[0.0, -1.0 / 180.0, 1.0 / 24.0, -13.0 / 144.0, 1.0 / 16.0],
    &[0.0, 11.0 / 8640.0, -91.0 / 5760.0, 89.0 / 1728.0, -77.0 / 1152.0, 1.0 / 32.0],
];
