//! fritexp - 분수 반복 지수 함수 라이브러리
//!
//! Szekeres 급수로 g(x) = exp(x) - 1 의 작은 인자 분수 반복을 근사하고,
//! exp / log 범위 축소로 임의의 실수 인자까지 확장한다.

pub mod core;

// 핵심 모듈들 재수출
pub use crate::core::{
    // 계수 엔진
    evaluate_series, evaluate_table, gsmall, SeriesCoefficients, SERIES_ORDER, SZEKERES_POLYS,
    // 범위 축소 드라이버
    compute, compute_with_config, make_evaluator, try_compute, FritexpEvaluator, Reduction,
    // 구성
    FritexpConfig,
};
