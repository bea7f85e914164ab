//! # 분수 반복 지수 함수 (fritexp)
//!
//! 작은 인자에서만 유효한 Szekeres 급수를 exp / log 범위 축소로 임의의 실수 x까지 확장한다.
//!
//! 축소 루프는 다섯 단계로 진행된다:
//! Ascend → Descend → FractionalStep → ReAscend → Realize.
//! Realize 단계에서 양수가 아닌 값에 log가 필요하면 NaN을 돌려준다.

pub mod config;
pub mod order;
pub mod iterate;
pub mod driver;
pub mod batch;

// 테스트 모듈
#[cfg(test)]
mod __tests__;

// 재수출
pub use config::*;
pub use order::{split_order, SplitOrder};
pub use iterate::*;
pub use driver::*;
