//! 퇴적된 원형 단면의 기하 계산.

use std::f64::consts::PI;

use super::error::CulvertError;
use super::params::CulvertParameters;

/// 전체 원 단면적 대비 최소 통수 단면 비율. 이보다 작으면 관이 막힌 것으로 본다.
pub const MIN_OPEN_AREA_RATIO: f64 = 1.0e-3;

/// 퇴적선 아래 원호 세그먼트(토사가 차지한 단면)의 면적 [m2]을 구한다.
///
/// 중심에서 퇴적선(현)까지의 부호 있는 거리 d = r - D·s, 현의 길이 k = 2·sqrt(r² - d²)로
/// 두고 면적 = r²·θ - 0.5·k·d 로 계산한다. θ는 현이 만드는 반각이며 퇴적선이
/// 중심 위로 올라가면(d < 0) 중심 반대편 각을 사용한다.
pub fn submerged_area(p: &CulvertParameters) -> Result<f64, CulvertError> {
    if !(0.0..1.0).contains(&p.silt_fraction) {
        return Err(CulvertError::Geometry(format!(
            "퇴적 비율이 [0, 1) 범위를 벗어났습니다: {}",
            p.silt_fraction
        )));
    }
    let r = p.radius();
    let d = r - p.diameter * p.silt_fraction;
    let chord = 2.0 * (r * r - d * d).max(0.0).sqrt();
    let half_angle = chord_half_angle(chord / 2.0 / r, d);
    let area = r * r * half_angle - 0.5 * chord * d;
    if !area.is_finite() {
        return Err(CulvertError::Geometry(format!(
            "퇴적 단면적을 계산할 수 없습니다: 내경 {} m",
            p.diameter
        )));
    }
    Ok(area)
}

/// 반현/반지름 비율과 현의 위치로부터 반각 [rad]을 구한다.
/// 부동소수 반올림으로 비율이 ±1을 살짝 넘는 경우를 막기 위해 먼저 clamp 한다.
fn chord_half_angle(ratio: f64, offset: f64) -> f64 {
    let principal = ratio.clamp(-1.0, 1.0).asin();
    if offset >= 0.0 {
        principal
    } else {
        PI - principal
    }
}

/// 실제 물이 흐르는 통수 단면적 [m2] = π·r² - 퇴적 단면적.
pub fn wetted_flow_area(p: &CulvertParameters) -> Result<f64, CulvertError> {
    let full = p.full_area();
    if !full.is_finite() {
        return Err(CulvertError::Geometry(format!(
            "전체 단면적이 유한하지 않습니다: 내경 {} m",
            p.diameter
        )));
    }
    let wetted = full - submerged_area(p)?;
    if wetted.is_nan() || wetted <= 0.0 {
        return Err(CulvertError::Geometry(format!(
            "통수 단면적이 0 이하입니다: {wetted:.6} m2 (퇴적 비율 {})",
            p.silt_fraction
        )));
    }
    if wetted / full < MIN_OPEN_AREA_RATIO {
        return Err(CulvertError::Geometry(format!(
            "관이 토사로 거의 막혔습니다: 통수 단면 {:.4}% (퇴적 비율 {})",
            wetted / full * 100.0,
            p.silt_fraction
        )));
    }
    Ok(wetted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipe(diameter: f64, silt_fraction: f64) -> CulvertParameters {
        CulvertParameters {
            diameter,
            length: 10.0,
            silt_fraction,
            entrance_loss_coefficient: 0.4,
            exit_loss_coefficient: 1.0,
            downstream_wet_area: 5.0,
            manning_coefficient: 75.0,
            upstream_level: 0.05,
            downstream_level: 0.0,
        }
    }

    #[test]
    fn half_angle_clamps_rounding_overshoot() {
        assert!((chord_half_angle(1.0 + 1e-15, 0.0) - PI / 2.0).abs() < 1e-12);
        assert!(chord_half_angle(1.0 + 1e-15, 0.0).is_finite());
    }

    #[test]
    fn half_silted_pipe_is_half_area() {
        let p = pipe(1.0, 0.5);
        let seg = submerged_area(&p).unwrap();
        assert!((seg - p.full_area() / 2.0).abs() < 1e-12);
    }

    #[test]
    fn segment_is_symmetric_about_centre() {
        let low = pipe(0.8, 0.3);
        let high = pipe(0.8, 0.7);
        let a_low = submerged_area(&low).unwrap();
        let a_high = submerged_area(&high).unwrap();
        assert!((a_low + a_high - low.full_area()).abs() < 1e-12);
    }

    #[test]
    fn submerged_area_grows_with_silt() {
        let mut prev = 0.0;
        for i in 1..100 {
            let a = submerged_area(&pipe(0.5, i as f64 / 100.0)).unwrap();
            assert!(a > prev, "silt {i}%: {a} <= {prev}");
            prev = a;
        }
    }
}
