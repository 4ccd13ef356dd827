//! 사용자 입력 방식(퇴적층: % 또는 cm, 수위: 절대 수위 또는 낙차 cm)을
//! 모델 입력값으로 환산한다.

use serde::{Deserialize, Serialize};

use super::error::CulvertError;
use super::params::CulvertParameters;
use crate::units::{convert_length, LengthUnit};

/// 퇴적층 입력 방식.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiltLayer {
    /// 내경 대비 퇴적 높이 [%]
    Percent(f64),
    /// 퇴적층 두께 [cm]
    ThicknessCm(f64),
}

impl SiltLayer {
    /// 퇴적 비율 방식일 때의 값 [%]
    pub fn percent(&self) -> Option<f64> {
        match *self {
            SiltLayer::Percent(pct) => Some(pct),
            SiltLayer::ThicknessCm(_) => None,
        }
    }

    /// 두께 방식일 때의 값 [cm]
    pub fn thickness_cm(&self) -> Option<f64> {
        match *self {
            SiltLayer::ThicknessCm(cm) => Some(cm),
            SiltLayer::Percent(_) => None,
        }
    }

    /// 내경 [m]에 대한 퇴적 비율(0~1)로 환산한다.
    pub fn fraction(&self, diameter: f64) -> Result<f64, CulvertError> {
        match *self {
            SiltLayer::Percent(pct) => {
                if !pct.is_finite() || !(0.0..100.0).contains(&pct) {
                    return Err(CulvertError::Geometry(format!(
                        "퇴적 비율은 0% 이상 100% 미만이어야 합니다: {pct}%"
                    )));
                }
                Ok(pct / 100.0)
            }
            SiltLayer::ThicknessCm(cm) => {
                if !diameter.is_finite() || diameter <= 0.0 {
                    return Err(CulvertError::Geometry(format!(
                        "내경은 0보다 커야 합니다: {diameter} m"
                    )));
                }
                let thickness_m = convert_length(cm, LengthUnit::Centimeter, LengthUnit::Meter);
                if !thickness_m.is_finite() || thickness_m < 0.0 || thickness_m >= diameter {
                    return Err(CulvertError::Geometry(format!(
                        "퇴적층 두께는 0 cm 이상, 내경({:.0} cm) 미만이어야 합니다: {cm} cm",
                        diameter * 100.0
                    )));
                }
                Ok(thickness_m / diameter)
            }
        }
    }
}

/// 수위 입력 방식.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterLevels {
    /// 절대 수위 [m +NAP]
    Levels { upstream: f64, downstream: f64 },
    /// 암거 전후 낙차 [cm]. 하류 수위를 0으로 둔다.
    DropCm(f64),
}

impl WaterLevels {
    /// 낙차 방식일 때의 값 [cm]
    pub fn drop_cm(&self) -> Option<f64> {
        match *self {
            WaterLevels::DropCm(cm) => Some(cm),
            WaterLevels::Levels { .. } => None,
        }
    }

    /// 절대 수위 방식일 때의 (상류, 하류) [m]
    pub fn levels(&self) -> Option<(f64, f64)> {
        match *self {
            WaterLevels::Levels {
                upstream,
                downstream,
            } => Some((upstream, downstream)),
            WaterLevels::DropCm(_) => None,
        }
    }

    /// (상류 수위, 하류 수위) [m]
    pub fn resolve(&self) -> (f64, f64) {
        match *self {
            WaterLevels::Levels {
                upstream,
                downstream,
            } => (upstream, downstream),
            WaterLevels::DropCm(cm) => (
                convert_length(cm, LengthUnit::Centimeter, LengthUnit::Meter),
                0.0,
            ),
        }
    }
}

/// 입력 화면/설정 파일에서 받는 암거 입력 묶음.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CulvertInput {
    pub diameter: f64,
    pub length: f64,
    pub silt: SiltLayer,
    pub entrance_loss_coefficient: f64,
    pub exit_loss_coefficient: f64,
    pub downstream_wet_area: f64,
    pub manning_coefficient: f64,
    pub levels: WaterLevels,
}

impl Default for CulvertInput {
    fn default() -> Self {
        Self {
            diameter: 0.50,
            length: 21.00,
            silt: SiltLayer::Percent(10.0),
            entrance_loss_coefficient: 0.40,
            exit_loss_coefficient: 1.00,
            downstream_wet_area: 5.00,
            manning_coefficient: 75.0,
            levels: WaterLevels::DropCm(5.0),
        }
    }
}

impl CulvertInput {
    /// 모델 입력값으로 환산하고 범위를 검사한다.
    pub fn resolve(&self) -> Result<CulvertParameters, CulvertError> {
        let silt_fraction = self.silt.fraction(self.diameter)?;
        let (upstream_level, downstream_level) = self.levels.resolve();
        let params = CulvertParameters {
            diameter: self.diameter,
            length: self.length,
            silt_fraction,
            entrance_loss_coefficient: self.entrance_loss_coefficient,
            exit_loss_coefficient: self.exit_loss_coefficient,
            downstream_wet_area: self.downstream_wet_area,
            manning_coefficient: self.manning_coefficient,
            upstream_level,
            downstream_level,
        };
        params.validate()?;
        Ok(params)
    }
}
