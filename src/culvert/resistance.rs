//! 유입·유출·마찰 손실을 합친 저항계수(mu) 계산.

use std::f64::consts::PI;

use tracing::debug;

use super::error::CulvertError;
use super::geometry::wetted_flow_area;
use super::params::CulvertParameters;
use super::G;

/// 손실 항목별 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResistanceBreakdown {
    /// Chezy 계수 [m^1/2/s]
    pub chezy: f64,
    /// 유입 손실 Ei [-]
    pub entrance_loss: f64,
    /// 유출 손실 E0 [-]
    pub exit_loss: f64,
    /// 마찰 손실 Ef [-]
    pub friction_loss: f64,
    /// 종합 저항계수 mu = (Ei + E0 + Ef)^-0.5
    pub mu: f64,
}

/// Chezy 계수 = 조도계수 · (통수 단면적 / 원주)^(1/6).
///
/// 전체 관 단면이 아니라 통수 단면적을 사용해야 한다.
pub fn chezy_coefficient(p: &CulvertParameters, wetted: f64) -> Result<f64, CulvertError> {
    let perimeter = 2.0 * PI * p.radius();
    if perimeter <= 0.0 {
        return Err(CulvertError::Division(format!(
            "원주가 0 이하입니다: {perimeter} m"
        )));
    }
    Ok(p.manning_coefficient * (wetted / perimeter).powf(1.0 / 6.0))
}

/// 유출 손실 E0 = 유출계수 · (1 - A / A_하류)².
pub fn exit_loss(p: &CulvertParameters, wetted: f64) -> Result<f64, CulvertError> {
    if p.downstream_wet_area <= 0.0 {
        return Err(CulvertError::Division(format!(
            "하류 통수 단면적은 0보다 커야 합니다: {} m2",
            p.downstream_wet_area
        )));
    }
    let expansion = 1.0 - wetted / p.downstream_wet_area;
    Ok(p.exit_loss_coefficient * expansion * expansion)
}

/// 마찰 손실 Ef = 2·g·L / (C² · D/4).
pub fn friction_loss(p: &CulvertParameters, chezy: f64) -> Result<f64, CulvertError> {
    let denom = chezy * chezy * (p.diameter / 4.0);
    if chezy <= 0.0 || denom <= 0.0 {
        return Err(CulvertError::Division(format!(
            "Chezy 계수가 0 이하입니다: {chezy}"
        )));
    }
    Ok(2.0 * G * p.length / denom)
}

/// 주어진 통수 단면적에서 손실 항목과 mu를 계산한다.
pub fn resistance_breakdown(
    p: &CulvertParameters,
    wetted: f64,
) -> Result<ResistanceBreakdown, CulvertError> {
    let chezy = chezy_coefficient(p, wetted)?;
    let entrance_loss = p.entrance_loss_coefficient;
    let exit_loss = exit_loss(p, wetted)?;
    let friction_loss = friction_loss(p, chezy)?;

    let total = entrance_loss + exit_loss + friction_loss;
    if !total.is_finite() || total <= 0.0 {
        return Err(CulvertError::Resistance(format!(
            "손실계수 합이 0 이하입니다: Ei={entrance_loss}, E0={exit_loss}, Ef={friction_loss}"
        )));
    }
    let mu = total.powf(-0.5);
    debug!(chezy, entrance_loss, exit_loss, friction_loss, mu, "resistance");

    Ok(ResistanceBreakdown {
        chezy,
        entrance_loss,
        exit_loss,
        friction_loss,
        mu,
    })
}

/// 종합 저항계수 mu를 계산한다.
pub fn resistance_coefficient(p: &CulvertParameters) -> Result<f64, CulvertError> {
    let wetted = wetted_flow_area(p)?;
    Ok(resistance_breakdown(p, wetted)?.mu)
}
