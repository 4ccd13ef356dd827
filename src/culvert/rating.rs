use super::error::CulvertError;
use super::model::{evaluate, CulvertResult};
use super::params::CulvertParameters;

/// 수위차 하나에 대한 평가 결과.
#[derive(Debug, Clone)]
pub struct RatingPoint {
    /// 수위차 [m]
    pub head: f64,
    pub result: Result<CulvertResult, CulvertError>,
}

/// 하류 수위를 고정하고 상류 수위를 바꿔가며 수위차-유량 곡선을 만든다.
///
/// 각 점은 독립적으로 평가되므로 한 점의 실패가 나머지에 영향을 주지 않는다.
pub fn rating_curve(base: &CulvertParameters, heads: &[f64]) -> Vec<RatingPoint> {
    heads
        .iter()
        .map(|&head| {
            let p = base.with_levels(base.downstream_level + head, base.downstream_level);
            RatingPoint {
                head,
                result: evaluate(&p),
            }
        })
        .collect()
}

/// 0부터 `max_head`까지 `steps`개 구간으로 나눈 수위차 목록.
pub fn head_steps(max_head: f64, steps: usize) -> Vec<f64> {
    if steps == 0 {
        return vec![max_head];
    }
    (0..=steps)
        .map(|i| max_head * i as f64 / steps as f64)
        .collect()
}
