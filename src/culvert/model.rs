use tracing::{debug, warn};

use super::error::CulvertError;
use super::geometry::{submerged_area, wetted_flow_area};
use super::params::CulvertParameters;
use super::resistance::resistance_breakdown;
use super::G;

/// 암거 수리 계산 결과. 평가가 모두 성공했을 때만 만들어진다.
#[derive(Debug, Clone, PartialEq)]
pub struct CulvertResult {
    /// 퇴적 토사 단면적 [m2]
    pub submerged_area: f64,
    /// 통수 단면적 [m2]
    pub wetted_flow_area: f64,
    /// Chezy 계수 [m^1/2/s]
    pub chezy_coefficient: f64,
    /// 유입 손실 Ei [-]
    pub entrance_loss: f64,
    /// 유출 손실 E0 [-]
    pub exit_loss: f64,
    /// 마찰 손실 Ef [-]
    pub friction_loss: f64,
    /// 종합 저항계수 mu [-]
    pub resistance_coefficient: f64,
    /// 상하류 수위차 [m]
    pub head_differential: f64,
    /// 유량 [m3/s]
    pub discharge: f64,
    /// 관 내 유속 [m/s]
    pub velocity: f64,
    /// 계산은 가능하지만 확인이 필요한 경우의 메시지
    pub warnings: Vec<String>,
}

/// 상하류 수위차 [m]. 하류 수위가 더 높으면 역류가 아니라 잘못된 입력으로 본다.
pub fn head_differential(p: &CulvertParameters) -> Result<f64, CulvertError> {
    let head = p.upstream_level - p.downstream_level;
    if !head.is_finite() {
        return Err(CulvertError::InvalidParameter(format!(
            "수위차가 유한하지 않습니다: 상류 {} m, 하류 {} m",
            p.upstream_level, p.downstream_level
        )));
    }
    if head < 0.0 {
        return Err(CulvertError::InvalidHead {
            upstream: p.upstream_level,
            downstream: p.downstream_level,
        });
    }
    Ok(head)
}

/// 유량 [m3/s] = mu · A · sqrt(2·g·Δh).
pub fn discharge(p: &CulvertParameters) -> Result<f64, CulvertError> {
    evaluate(p).map(|r| r.discharge)
}

/// 관 내 평균 유속 [m/s] = Q / A.
pub fn velocity(p: &CulvertParameters) -> Result<f64, CulvertError> {
    evaluate(p).map(|r| r.velocity)
}

/// 기하 → 저항 → 수위차 → 유량 → 유속 순서로 암거를 평가한다.
///
/// 어느 단계에서든 실패하면 부분 결과 없이 오류를 반환한다.
pub fn evaluate(p: &CulvertParameters) -> Result<CulvertResult, CulvertError> {
    p.validate()?;

    let submerged = submerged_area(p)?;
    let wetted = wetted_flow_area(p)?;
    let resistance = resistance_breakdown(p, wetted)?;
    let head = head_differential(p)?;

    let discharge = resistance.mu * wetted * (2.0 * G * head).sqrt();
    let velocity = discharge / wetted;
    if !discharge.is_finite() || !velocity.is_finite() {
        return Err(CulvertError::InvalidParameter(format!(
            "유량이 유한하지 않습니다: 수위차 {head} m"
        )));
    }
    debug!(submerged, wetted, head, discharge, velocity, "culvert evaluated");

    let mut warnings = Vec::new();
    if wetted > p.downstream_wet_area {
        let msg = format!(
            "암거 통수 단면({wetted:.3} m2)이 하류 수로 단면({:.3} m2)보다 큽니다. 유출 손실 식의 적용 범위를 확인하세요.",
            p.downstream_wet_area
        );
        warn!("{msg}");
        warnings.push(msg);
    }

    Ok(CulvertResult {
        submerged_area: submerged,
        wetted_flow_area: wetted,
        chezy_coefficient: resistance.chezy,
        entrance_loss: resistance.entrance_loss,
        exit_loss: resistance.exit_loss,
        friction_loss: resistance.friction_loss,
        resistance_coefficient: resistance.mu,
        head_differential: head,
        discharge,
        velocity,
        warnings,
    })
}
