use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::args::{CulvertArgs, DisplayArgs};
use crate::config::{Config, DisplayUnits};
use crate::conversion;
use crate::culvert::{self, rating};
use crate::quantity::QuantityKind;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일/콘솔 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] crate::config::ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] conversion::ConversionError),
    /// 암거 계산 오류
    #[error("암거 계산 오류: {0}")]
    Culvert(#[from] culvert::CulvertError),
}

/// 명령행에서 지정한 표시 단위로 설정값을 덮어쓴다.
pub fn display_units(cfg: &Config, args: &DisplayArgs) -> Result<DisplayUnits, AppError> {
    let mut units = cfg.display_units;
    if let Some(flow) = &args.flow_unit {
        units.flow = conversion::parse_flow_unit(flow)?;
    }
    if let Some(velocity) = &args.velocity_unit {
        units.velocity = conversion::parse_velocity_unit(velocity)?;
    }
    Ok(units)
}

/// 한 번의 암거 계산을 수행하고 결과를 출력한다.
pub fn run_evaluate(
    cfg: &Config,
    args: &CulvertArgs,
    display: &DisplayArgs,
) -> Result<(), AppError> {
    let units = display_units(cfg, display)?;
    let params = args.merge(&cfg.defaults).resolve()?;
    info!(?params, "evaluate");
    let result = culvert::evaluate(&params)?;
    ui_cli::print_result(&result, &units);
    Ok(())
}

/// 0부터 `max_head_cm`까지 수위차-유량 표를 출력한다.
pub fn run_rating(
    cfg: &Config,
    args: &CulvertArgs,
    display: &DisplayArgs,
    max_head_cm: f64,
    steps: usize,
) -> Result<(), AppError> {
    let units = display_units(cfg, display)?;
    let params = args.merge(&cfg.defaults).resolve()?;
    let heads = rating::head_steps(max_head_cm / 100.0, steps);
    info!(points = heads.len(), "rating curve");
    let points = culvert::rating_curve(&params, &heads);
    ui_cli::print_rating(&points, &units);
    Ok(())
}

/// 단일 값 단위 변환 결과를 출력한다.
pub fn run_convert(kind: QuantityKind, value: f64, from: &str, to: &str) -> Result<(), AppError> {
    let result = conversion::convert(kind, value, from, to)?;
    println!("{value} {from} = {result} {to}");
    Ok(())
}

/// 대화형 CLI의 메인 루프를 실행한다.
///
/// 계산 오류는 메시지만 출력하고 루프를 계속한다.
pub fn run_interactive(config: &mut Config, config_path: &Path) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::Culvert => {
                let input = ui_cli::prompt_culvert_input(&config.defaults)?;
                match input.resolve().and_then(|p| culvert::evaluate(&p)) {
                    Ok(result) => ui_cli::print_result(&result, &config.display_units),
                    Err(e) => println!("오류: {e}"),
                }
            }
            MenuChoice::UnitConversion => {
                if let Err(e) = ui_cli::handle_unit_conversion() {
                    println!("오류: {e}");
                }
            }
            MenuChoice::Settings => {
                ui_cli::handle_settings(config)?;
                config.save(config_path)?;
            }
            MenuChoice::Exit => {
                config.save(config_path)?;
                println!("프로그램을 종료합니다.");
                break;
            }
        }
    }
    Ok(())
}
