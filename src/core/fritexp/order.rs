/// 반복 차수 u의 정수부와 분수부
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitOrder {
    /// 가장 가까운 정수 (범위를 벗어나면 포화, NaN이면 0)
    pub whole: i64,
    /// u - whole, [-0.5, 0.5) 구간
    pub frac: f64,
}

/// u를 가장 가까운 정수와 나머지로 분해
///
/// 정확히 반이면 +∞ 방향으로 올린다: 0.5 → 1, -0.5 → 0, -2.5 → -2.
pub fn split_order(u: f64) -> SplitOrder {
    let floor = u.floor();
    // 유한한 u에 대해 u - floor는 정확히 계산됨
    let nearest = if u - floor >= 0.5 { floor + 1.0 } else { floor };
    SplitOrder {
        whole: nearest as i64,
        frac: u - nearest,
    }
}
