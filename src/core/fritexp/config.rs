use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// exp가 넘치지 않는 최대 인자 ln(f64::MAX)
pub const MAX_EXP_ARG: f64 = 709.782_712_893_384;
/// Ascend 상한 기본값
pub const DEFAULT_BIG: f64 = 709.7;
/// 급수가 유효한 구간의 상한 기본값
pub const DEFAULT_SMALL: f64 = 0.4;
/// small 임계값의 하한
///
/// x가 ε 근처로 내려가면 log(1 + x)와 exp(x) - 1이 부동점을 가져 루프가 끝나지 않고,
/// 그 위에서도 Descend / ReAscend 단계 수는 대략 2 / small 이다.
pub const MIN_SMALL: f64 = 1e-3;

/// 범위 축소 임계값 구성
///
/// `big`을 낮추면 Ascend 단계가 일찍 멈추고, `small`을 낮추면 급수 오차가 줄어드는 대신
/// Descend / ReAscend 단계가 길어진다. 두 단계는 log(1 + x), exp(y) - 1 을 그대로 계산하므로
/// small이 작을수록 1 + x의 반올림 오차가 상대적으로 커져 정수 차수 결과의 정밀도가 떨어진다
/// (small = 1e-3에서 상대 오차 약 1e-9). `small`은 [`MIN_SMALL`] 이상이어야 한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FritexpConfig {
    /// 이 값보다 작을 때만 exp를 적용 (넘침 방지)
    pub big: f64,
    /// 이 값 이하에서 Szekeres 급수를 적용
    pub small: f64,
}

impl Default for FritexpConfig {
    fn default() -> Self {
        Self {
            big: DEFAULT_BIG,
            small: DEFAULT_SMALL,
        }
    }
}

impl FritexpConfig {
    /// 새 구성 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// Ascend 상한 설정
    pub fn with_big(mut self, big: f64) -> Self {
        self.big = big;
        self
    }

    /// 급수 구간 상한 설정
    pub fn with_small(mut self, small: f64) -> Self {
        self.small = small;
        self
    }

    /// 임계값 검증
    ///
    /// 조건을 벗어나면 축소 루프가 끝나지 않을 수 있다.
    pub fn validate(&self) -> Result<()> {
        if !self.big.is_finite() || self.big > MAX_EXP_ARG {
            bail!(
                "big 임계값은 유한하고 {} 이하여야 함: {}",
                MAX_EXP_ARG,
                self.big
            );
        }
        if !self.small.is_finite() || self.small < MIN_SMALL {
            bail!(
                "small 임계값은 {} 이상의 유한값이어야 함: {}",
                MIN_SMALL,
                self.small
            );
        }
        if self.small >= self.big {
            bail!(
                "small({})은 big({})보다 작아야 함",
                self.small,
                self.big
            );
        }
        Ok(())
    }

    /// JSON 문자열에서 구성 로드 (빠진 필드는 기본값)
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).context("fritexp 구성 JSON 파싱 실패")?;
        config.validate()?;
        Ok(config)
    }

    /// JSON 문자열로 직렬화
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("fritexp 구성 직렬화 실패")
    }
}
