//! 명령행 인자 정의. 생략된 값은 설정 파일의 기본 입력값으로 채운다.

use clap::{Args, ValueEnum};
use tracing::Level;

use crate::culvert::{CulvertInput, SiltLayer, WaterLevels};

/// 암거 입력 인자.
#[derive(Debug, Clone, Default, Args)]
pub struct CulvertArgs {
    /// 내경 [m]
    #[arg(long)]
    pub diameter: Option<f64>,
    /// 암거 길이 [m]
    #[arg(long)]
    pub length: Option<f64>,
    /// 퇴적 비율 [%]
    #[arg(long, conflicts_with = "silt_cm")]
    pub silt_percent: Option<f64>,
    /// 퇴적층 두께 [cm]
    #[arg(long)]
    pub silt_cm: Option<f64>,
    /// 유입 손실계수 [-]
    #[arg(long)]
    pub entrance_loss: Option<f64>,
    /// 유출 손실계수 [-]
    #[arg(long)]
    pub exit_loss: Option<f64>,
    /// 하류 수로 통수 단면적 [m2]
    #[arg(long)]
    pub downstream_area: Option<f64>,
    /// Manning 조도계수 [s·m^-1/3]
    #[arg(long)]
    pub manning: Option<f64>,
    /// 낙차 [cm]
    #[arg(long, conflicts_with_all = ["upstream", "downstream"])]
    pub drop_cm: Option<f64>,
    /// 상류 수위 [m +NAP]
    #[arg(long, requires = "downstream")]
    pub upstream: Option<f64>,
    /// 하류 수위 [m +NAP]
    #[arg(long, requires = "upstream")]
    pub downstream: Option<f64>,
}

impl CulvertArgs {
    /// 지정된 인자로 기본값을 덮어쓴 입력을 만든다.
    pub fn merge(&self, defaults: &CulvertInput) -> CulvertInput {
        let silt = match (self.silt_percent, self.silt_cm) {
            (Some(pct), _) => SiltLayer::Percent(pct),
            (None, Some(cm)) => SiltLayer::ThicknessCm(cm),
            (None, None) => defaults.silt,
        };
        let levels = match (self.drop_cm, self.upstream, self.downstream) {
            (Some(cm), _, _) => WaterLevels::DropCm(cm),
            (None, Some(upstream), Some(downstream)) => WaterLevels::Levels {
                upstream,
                downstream,
            },
            _ => defaults.levels,
        };
        CulvertInput {
            diameter: self.diameter.unwrap_or(defaults.diameter),
            length: self.length.unwrap_or(defaults.length),
            silt,
            entrance_loss_coefficient: self
                .entrance_loss
                .unwrap_or(defaults.entrance_loss_coefficient),
            exit_loss_coefficient: self.exit_loss.unwrap_or(defaults.exit_loss_coefficient),
            downstream_wet_area: self.downstream_area.unwrap_or(defaults.downstream_wet_area),
            manning_coefficient: self.manning.unwrap_or(defaults.manning_coefficient),
            levels,
        }
    }
}

/// 결과 표시 단위 인자.
#[derive(Debug, Clone, Default, Args)]
pub struct DisplayArgs {
    /// 유량 표시 단위 (m3/s, m3/h, l/s)
    #[arg(long)]
    pub flow_unit: Option<String>,
    /// 유속 표시 단위 (m/s, ft/s, km/h)
    #[arg(long)]
    pub velocity_unit: Option<String>,
}

/// 로그 레벨 인자. 알 수 없는 값은 인자 해석 단계에서 거부된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}
