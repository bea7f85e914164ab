use anyhow::{bail, Result};
use log::{debug, trace, warn};

use super::config::FritexpConfig;
use super::order::{split_order, SplitOrder};
use crate::core::szekeres::{evaluate_series, evaluate_table, SeriesCoefficients};

/// 축소 루프 한 번의 결과
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reduction {
    /// 목표 반복 횟수에 도달한 값
    Value(f64),
    /// 양수가 아닌 값에 log가 필요했음
    DomainFailure {
        /// 남아 있던 log 단계 수
        remaining: i64,
        /// log를 적용할 수 없었던 값
        y: f64,
    },
}

impl Reduction {
    /// 결과 값, 실패면 NaN
    pub fn value(self) -> f64 {
        match self {
            Reduction::Value(y) => y,
            Reduction::DomainFailure { .. } => f64::NAN,
        }
    }

    /// 정의역 실패 여부
    pub fn is_domain_failure(&self) -> bool {
        matches!(self, Reduction::DomainFailure { .. })
    }
}

/// 범위 축소 루프
///
/// `whole`은 u의 정수부, `coefficients`는 분수부에서 평가한 Szekeres 급수 계수이다.
/// `count`는 지금까지 적용한 exp/log 단계의 부호 있는 개수를 추적한다.
pub fn reduce(
    whole: i64,
    coefficients: &SeriesCoefficients,
    x: f64,
    config: &FritexpConfig,
) -> Reduction {
    // +∞는 모든 단계 사상의 부동점
    if x == f64::INFINITY {
        return Reduction::Value(x);
    }

    let FritexpConfig { big, small } = *config;
    let mut count: i64 = 0;
    let mut x = x;

    // Ascend
    while x < big {
        x = libm::exp(x);
        count += 1;
    }
    let ascended = count;

    // Descend
    while x > small {
        x = libm::log(1.0 + x);
        count -= 1;
    }
    trace!(
        "축소: ascend {}회, descend {}회, 급수 인자 {}",
        ascended,
        ascended - count,
        x
    );

    // FractionalStep
    let mut y = evaluate_series(coefficients, x);

    // 0 이하의 값은 g 반복으로 big에 도달하지 못함
    if y <= 0.0 {
        return Reduction::DomainFailure { remaining: count.saturating_sub(whole), y };
    }

    // ReAscend
    while y < big {
        y = libm::exp(y) - 1.0;
        count += 1;
    }

    // Realize
    while count > whole {
        if y > 0.0 {
            y = libm::log(y);
            count -= 1;
        } else {
            trace!("Realize 실패: count={}, 목표={}, y={}", count, whole, y);
            return Reduction::DomainFailure { remaining: count.saturating_sub(whole), y };
        }
    }

    Reduction::Value(y)
}

/// 고정된 차수 u에 대해 재사용하는 평가기
///
/// 정수부와 급수 계수를 한 번만 계산한다. `evaluate(x)`는 `compute(u, x)`와 같은 경로를 탄다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FritexpEvaluator {
    order: f64,
    split: SplitOrder,
    coefficients: SeriesCoefficients,
    config: FritexpConfig,
}

impl FritexpEvaluator {
    /// 기본 임계값으로 평가기 생성
    pub fn new(u: f64) -> Self {
        Self::build(u, FritexpConfig::default())
    }

    /// 사용자 임계값으로 평가기 생성
    pub fn with_config(u: f64, config: FritexpConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(u, config))
    }

    fn build(u: f64, config: FritexpConfig) -> Self {
        let split = split_order(u);
        let coefficients = evaluate_table(split.frac);
        debug!(
            "fritexp 평가기: u={} (정수부 {}, 분수부 {}), big={}, small={}",
            u, split.whole, split.frac, config.big, config.small
        );
        Self {
            order: u,
            split,
            coefficients,
            config,
        }
    }

    /// x에서의 u차 분수 반복, 정의역을 벗어나면 NaN
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.reduce(x).value()
    }

    /// 정의역 실패를 오류로 돌려주는 평가
    pub fn try_evaluate(&self, x: f64) -> Result<f64> {
        match self.reduce(x) {
            Reduction::Value(y) => Ok(y),
            Reduction::DomainFailure { remaining, y } => {
                warn!("fritexp 정의역 실패: u={}, x={}", self.order, x);
                bail!(
                    "fritexp(u={}, x={}) 정의역 실패: 남은 log 단계 {}에서 양수가 아닌 값 {}",
                    self.order,
                    x,
                    remaining,
                    y
                )
            }
        }
    }

    /// 축소 루프 결과를 그대로 반환
    pub fn reduce(&self, x: f64) -> Reduction {
        reduce(self.split.whole, &self.coefficients, x, &self.config)
    }

    /// 요청한 차수 u
    pub fn order(&self) -> f64 {
        self.order
    }

    /// u의 정수부와 분수부
    pub fn split(&self) -> SplitOrder {
        self.split
    }

    /// 분수부에서 평가한 급수 계수
    pub fn coefficients(&self) -> &SeriesCoefficients {
        &self.coefficients
    }

    /// 범위 축소 임계값
    pub fn config(&self) -> &FritexpConfig {
        &self.config
    }
}

/// 차수 u에 고정된 평가기 생성
pub fn make_evaluator(u: f64) -> FritexpEvaluator {
    FritexpEvaluator::new(u)
}

/// u차 분수 반복을 x에서 한 번 계산 (정의역 실패 시 NaN)
pub fn compute(u: f64, x: f64) -> f64 {
    FritexpEvaluator::new(u).evaluate(x)
}

/// 사용자 임계값으로 한 번 계산
///
/// 구성이 잘못된 경우에만 오류를 돌려준다. 정의역 실패는 여전히 NaN이다.
pub fn compute_with_config(u: f64, x: f64, config: &FritexpConfig) -> Result<f64> {
    Ok(FritexpEvaluator::with_config(u, *config)?.evaluate(x))
}

/// 정의역 실패를 오류로 돌려주는 한 번 계산
pub fn try_compute(u: f64, x: f64) -> Result<f64> {
    FritexpEvaluator::new(u).try_evaluate(x)
}
