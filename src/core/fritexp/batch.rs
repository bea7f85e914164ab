//! 배치 평가 - 하나의 평가기를 여러 x에 병렬 적용

use ndarray::{Array, ArrayBase, Data, Dimension};
use rayon::prelude::*;

use super::driver::FritexpEvaluator;

impl FritexpEvaluator {
    /// 슬라이스의 각 원소에서 평가
    pub fn evaluate_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.par_iter().map(|&x| self.evaluate(x)).collect()
    }

    /// 배열의 각 원소에서 평가 (차원 유지)
    pub fn evaluate_array<S, D>(&self, xs: &ArrayBase<S, D>) -> Array<f64, D>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        let mut values = xs.to_owned();
        values.par_mapv_inplace(|x| self.evaluate(x));
        values
    }
}
