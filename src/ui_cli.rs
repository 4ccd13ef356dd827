use std::io::{self, Write};

use crate::app::AppError;
use crate::config::{Config, DisplayUnits};
use crate::conversion;
use crate::culvert::{CulvertInput, CulvertResult, RatingPoint, SiltLayer, WaterLevels};
use crate::quantity::QuantityKind;
use crate::units::*;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Culvert,
    UnitConversion,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Culvert Toolbox ===");
    println!("1) 암거 유량 계산");
    println!("2) 단위 변환기");
    println!("3) 설정");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Culvert),
            "2" => return Ok(MenuChoice::UnitConversion),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 암거 입력값을 하나씩 묻는다. 빈 입력은 기본값을 사용한다.
pub fn prompt_culvert_input(defaults: &CulvertInput) -> Result<CulvertInput, AppError> {
    println!("\n-- 암거 유량 계산 -- (엔터: 기본값)");
    let diameter = read_f64_or("내경 [m]", defaults.diameter)?;
    let length = read_f64_or("길이 [m]", defaults.length)?;

    println!("퇴적층 입력: 1) 퇴적 비율 [%]  2) 퇴적층 두께 [cm]");
    let silt = match read_line("선택: ")?.trim() {
        "2" => SiltLayer::ThicknessCm(read_f64_or(
            "퇴적층 두께 [cm]",
            defaults.silt.thickness_cm().unwrap_or(0.0),
        )?),
        "1" => SiltLayer::Percent(read_f64_or(
            "퇴적 비율 [%]",
            defaults.silt.percent().unwrap_or(10.0),
        )?),
        _ => defaults.silt,
    };

    println!("유입 손실계수 기본값 0.4, 유출 손실계수 기본값 1.0");
    let entrance = read_f64_or("유입 손실계수 [-]", defaults.entrance_loss_coefficient)?;
    let exit = read_f64_or("유출 손실계수 [-]", defaults.exit_loss_coefficient)?;
    println!("하류 통수 단면적은 수로 단면과 수위로 추정합니다.");
    let downstream_area = read_f64_or("하류 통수 단면적 [m2]", defaults.downstream_wet_area)?;
    let manning = read_f64_or("Manning 조도계수 [s·m^-1/3]", defaults.manning_coefficient)?;

    println!("수위 입력: 1) 낙차 [cm]  2) 상하류 수위 [m +NAP]");
    let levels = match read_line("선택: ")?.trim() {
        "1" => WaterLevels::DropCm(read_f64_or(
            "낙차 [cm]",
            defaults.levels.drop_cm().unwrap_or(5.0),
        )?),
        "2" => {
            let (up, down) = defaults.levels.levels().unwrap_or((0.05, 0.0));
            WaterLevels::Levels {
                upstream: read_f64_or("상류 수위 [m +NAP]", up)?,
                downstream: read_f64_or("하류 수위 [m +NAP]", down)?,
            }
        }
        _ => defaults.levels,
    };

    Ok(CulvertInput {
        diameter,
        length,
        silt,
        entrance_loss_coefficient: entrance,
        exit_loss_coefficient: exit,
        downstream_wet_area: downstream_area,
        manning_coefficient: manning,
        levels,
    })
}

/// 계산 결과를 표시 단위로 출력한다.
pub fn print_result(result: &CulvertResult, units: &DisplayUnits) {
    let q = convert_flow(
        result.discharge,
        FlowUnit::CubicMeterPerSecond,
        units.flow,
    );
    let v = convert_velocity(result.velocity, VelocityUnit::MeterPerSecond, units.velocity);
    let head = convert_length(result.head_differential, LengthUnit::Meter, units.level);
    println!("\n-- 결과 --");
    println!("유량: {q:.3} [{}]", units.flow.symbol());
    println!("유속: {v:.2} [{}]", units.velocity.symbol());
    println!("수위차: {head:.2} [{}]", units.level.symbol());
    println!("종합 저항계수 mu: {:.3}", result.resistance_coefficient);
    println!(
        "통수 단면적: {:.4} m2 (퇴적 단면 {:.4} m2)",
        result.wetted_flow_area, result.submerged_area
    );
    println!(
        "Chezy: {:.2}, Ei={:.3}, E0={:.3}, Ef={:.3}",
        result.chezy_coefficient, result.entrance_loss, result.exit_loss, result.friction_loss
    );
    for w in &result.warnings {
        println!("주의: {w}");
    }
}

/// 수위차-유량 표를 출력한다.
pub fn print_rating(points: &[RatingPoint], units: &DisplayUnits) {
    println!(
        "{:>12} {:>14} {:>12}",
        format!("수위차[{}]", units.level.symbol()),
        format!("유량[{}]", units.flow.symbol()),
        format!("유속[{}]", units.velocity.symbol())
    );
    for point in points {
        let head = convert_length(point.head, LengthUnit::Meter, units.level);
        match &point.result {
            Ok(r) => {
                let q = convert_flow(r.discharge, FlowUnit::CubicMeterPerSecond, units.flow);
                let v = convert_velocity(r.velocity, VelocityUnit::MeterPerSecond, units.velocity);
                println!("{head:>12.3} {q:>14.4} {v:>12.3}");
            }
            Err(e) => println!("{head:>12.3} {e}"),
        }
    }
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion() -> Result<(), AppError> {
    println!("\n-- 단위 변환 --");
    println!("1) 유량  2) 유속  3) 길이");
    let kind = loop {
        let sel = read_line("항목 번호를 입력: ")?;
        match sel.trim() {
            "1" => break QuantityKind::Flow,
            "2" => break QuantityKind::Velocity,
            "3" => break QuantityKind::Length,
            _ => println!("지원하지 않는 번호입니다."),
        }
    };
    let value = read_f64("값 입력: ")?;
    let from_unit = read_line("입력 단위(ex: m3/s, m/s, cm): ")?;
    let to_unit = read_line("변환 단위(ex: l/s, km/h, m): ")?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!("변환 결과: {result} {}", to_unit.trim());
    Ok(())
}

/// 설정 메뉴를 처리한다. 각 항목에서 엔터를 누르면 현재 단위를 유지한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    let units = &mut cfg.display_units;
    println!(
        "현재 표시 단위: 유량 {}, 유속 {}, 수위 {}",
        units.flow.symbol(),
        units.velocity.symbol(),
        units.level.symbol()
    );

    println!("유량 단위: 1) m3/s  2) m3/h  3) l/s");
    if let Some(unit) = read_choice(flow_unit_choice)? {
        units.flow = unit;
    }
    println!("유속 단위: 1) m/s  2) ft/s  3) km/h");
    if let Some(unit) = read_choice(velocity_unit_choice)? {
        units.velocity = unit;
    }
    println!("수위 단위: 1) m  2) cm  3) mm  4) ft");
    if let Some(unit) = read_choice(level_unit_choice)? {
        units.level = unit;
    }

    println!(
        "표시 단위가 유량 {}, 유속 {}, 수위 {} 로 설정되었습니다.",
        units.flow.symbol(),
        units.velocity.symbol(),
        units.level.symbol()
    );
    Ok(())
}

/// 설정 메뉴의 유량 단위 번호.
pub fn flow_unit_choice(sel: &str) -> Option<FlowUnit> {
    match sel.trim() {
        "1" => Some(FlowUnit::CubicMeterPerSecond),
        "2" => Some(FlowUnit::CubicMeterPerHour),
        "3" => Some(FlowUnit::LiterPerSecond),
        _ => None,
    }
}

/// 설정 메뉴의 유속 단위 번호.
pub fn velocity_unit_choice(sel: &str) -> Option<VelocityUnit> {
    match sel.trim() {
        "1" => Some(VelocityUnit::MeterPerSecond),
        "2" => Some(VelocityUnit::FootPerSecond),
        "3" => Some(VelocityUnit::KilometerPerHour),
        _ => None,
    }
}

/// 설정 메뉴의 수위 단위 번호.
pub fn level_unit_choice(sel: &str) -> Option<LengthUnit> {
    match sel.trim() {
        "1" => Some(LengthUnit::Meter),
        "2" => Some(LengthUnit::Centimeter),
        "3" => Some(LengthUnit::Millimeter),
        "4" => Some(LengthUnit::Foot),
        _ => None,
    }
}

fn read_choice<T>(parse: fn(&str) -> Option<T>) -> Result<Option<T>, AppError> {
    let sel = read_line("변경할 번호(유지하려면 엔터): ")?;
    if sel.trim().is_empty() {
        return Ok(None);
    }
    let choice = parse(&sel);
    if choice.is_none() {
        println!("잘못된 입력이므로 변경하지 않습니다.");
    }
    Ok(choice)
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}

fn read_f64_or(label: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{label} ({default}): "))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.replace(',', ".").parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_choices_cover_every_display_unit() {
        assert_eq!(flow_unit_choice("3\n"), Some(FlowUnit::LiterPerSecond));
        assert_eq!(velocity_unit_choice(" 3 "), Some(VelocityUnit::KilometerPerHour));
        assert_eq!(level_unit_choice("2"), Some(LengthUnit::Centimeter));
        assert_eq!(level_unit_choice("4"), Some(LengthUnit::Foot));
        assert_eq!(velocity_unit_choice("9"), None);
        assert_eq!(flow_unit_choice(""), None);
    }
}
