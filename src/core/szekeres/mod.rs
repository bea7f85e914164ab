//! # Szekeres 계수 엔진
//!
//! g(x) = exp(x) - 1 의 분수 반복 g_u(x)를 0 근처에서 근사하는 멱급수의 계수를 만든다.
//! 계수 표는 컴파일 타임 상수이며 모든 스레드에서 잠금 없이 읽을 수 있다.

pub mod polys;
pub mod series;

// 테스트 모듈
#[cfg(test)]
mod __tests__;

// 재수출
pub use polys::*;
pub use series::*;
