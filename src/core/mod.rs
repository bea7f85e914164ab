//! # fritexp 핵심 모듈
//!
//! 계수 엔진(szekeres)과 범위 축소 드라이버(fritexp)

pub mod szekeres;
pub mod fritexp;

// 주요 타입들 재수출
pub use szekeres::*;
pub use fritexp::*;
