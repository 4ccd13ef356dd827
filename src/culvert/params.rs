use serde::{Deserialize, Serialize};

use super::error::CulvertError;

/// 암거 수리 계산 입력값. 한 번의 평가 동안 변경되지 않는 값 객체이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CulvertParameters {
    /// 내경 [m]
    pub diameter: f64,
    /// 암거 길이 [m]
    pub length: f64,
    /// 퇴적 토사 높이 / 내경 비율 (0 = 깨끗한 관)
    pub silt_fraction: f64,
    /// 유입 손실계수 Ei [-] (통상 0.2~1.0)
    pub entrance_loss_coefficient: f64,
    /// 유출 손실계수 [-] (통상 0.5~1.5)
    pub exit_loss_coefficient: f64,
    /// 하류 수로의 통수 단면적 [m2]
    pub downstream_wet_area: f64,
    /// Manning(Strickler) 조도계수 [s·m^-1/3]
    pub manning_coefficient: f64,
    /// 상류 수위 [m, 임의 기준면]
    pub upstream_level: f64,
    /// 하류 수위 [m, 동일 기준면]
    pub downstream_level: f64,
}

impl CulvertParameters {
    /// 반지름 [m]
    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    /// 퇴적이 없을 때의 전체 원 단면적 [m2]
    pub fn full_area(&self) -> f64 {
        std::f64::consts::PI * self.radius() * self.radius()
    }

    /// 수위만 바꾼 사본을 만든다.
    pub fn with_levels(&self, upstream_level: f64, downstream_level: f64) -> Self {
        Self {
            upstream_level,
            downstream_level,
            ..*self
        }
    }

    /// 스칼라 입력의 범위를 검사한다. 수위차 검사는 모델 평가 단계에서 한다.
    pub fn validate(&self) -> Result<(), CulvertError> {
        let fields = [
            ("diameter", self.diameter),
            ("length", self.length),
            ("silt_fraction", self.silt_fraction),
            ("entrance_loss_coefficient", self.entrance_loss_coefficient),
            ("exit_loss_coefficient", self.exit_loss_coefficient),
            ("downstream_wet_area", self.downstream_wet_area),
            ("manning_coefficient", self.manning_coefficient),
            ("upstream_level", self.upstream_level),
            ("downstream_level", self.downstream_level),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(CulvertError::InvalidParameter(format!(
                "{name} 값이 유한하지 않습니다: {value}"
            )));
        }
        if self.diameter <= 0.0 {
            return Err(CulvertError::Geometry(format!(
                "내경은 0보다 커야 합니다: {} m",
                self.diameter
            )));
        }
        if !(0.0..1.0).contains(&self.silt_fraction) {
            return Err(CulvertError::Geometry(format!(
                "퇴적 비율은 0 이상 1 미만이어야 합니다: {}",
                self.silt_fraction
            )));
        }
        if self.length <= 0.0 {
            return Err(CulvertError::InvalidParameter(format!(
                "암거 길이는 0보다 커야 합니다: {} m",
                self.length
            )));
        }
        if self.entrance_loss_coefficient < 0.0 || self.exit_loss_coefficient < 0.0 {
            return Err(CulvertError::InvalidParameter(
                "유입/유출 손실계수는 음수일 수 없습니다.".to_string(),
            ));
        }
        if self.downstream_wet_area <= 0.0 {
            return Err(CulvertError::Division(format!(
                "하류 통수 단면적은 0보다 커야 합니다: {} m2",
                self.downstream_wet_area
            )));
        }
        if self.manning_coefficient <= 0.0 {
            return Err(CulvertError::Division(format!(
                "조도계수는 0보다 커야 합니다: {}",
                self.manning_coefficient
            )));
        }
        Ok(())
    }
}
