//! 암거 수리 모델 회귀 테스트. 기준 시나리오는 원래 계산표의 기본 입력값이다.
use culvert_toolbox::culvert::model::{discharge, head_differential, velocity};
use culvert_toolbox::culvert::geometry::{submerged_area, wetted_flow_area};
use culvert_toolbox::culvert::resistance::{resistance_breakdown, resistance_coefficient};
use culvert_toolbox::culvert::{evaluate, rating_curve, CulvertError, CulvertParameters};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1e-12);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.9} got {actual:.9} (diff {diff:.3e}, tol {rel_tol})"
    );
}

fn reference() -> CulvertParameters {
    CulvertParameters {
        diameter: 0.50,
        length: 21.00,
        silt_fraction: 0.10,
        entrance_loss_coefficient: 0.40,
        exit_loss_coefficient: 1.00,
        downstream_wet_area: 5.00,
        manning_coefficient: 75.0,
        upstream_level: 0.05,
        downstream_level: 0.00,
    }
}

#[test]
fn reference_scenario_baseline() {
    let r = evaluate(&reference()).expect("reference scenario");
    assert_close("submerged", r.submerged_area, 0.010_218_819_299_580_27, 1e-9);
    assert_close("wetted", r.wetted_flow_area, 0.186_130_721_549_781_8, 1e-9);
    assert_close("chezy", r.chezy_coefficient, 52.562_695_370_273_744, 1e-9);
    assert_close("E0", r.exit_loss, 0.926_933_497_200_272_8, 1e-9);
    assert_close("Ef", r.friction_loss, 1.193_034_575_006_849, 1e-9);
    assert_close("mu", r.resistance_coefficient, 0.629_944_778_985_643_5, 1e-9);
    assert_close("head", r.head_differential, 0.05, 1e-12);
    assert_close("Q", r.discharge, 0.116_132_839_655_364_44, 1e-9);
    assert_close("v", r.velocity, 0.623_931_604_027_570_5, 1e-9);
    assert!(r.warnings.is_empty(), "{:?}", r.warnings);
}

#[test]
fn single_output_functions_match_evaluate() {
    let p = reference();
    let r = evaluate(&p).unwrap();
    assert_eq!(discharge(&p).unwrap(), r.discharge);
    assert_eq!(velocity(&p).unwrap(), r.velocity);
    assert_eq!(resistance_coefficient(&p).unwrap(), r.resistance_coefficient);
    assert_eq!(head_differential(&p).unwrap(), r.head_differential);
    assert_eq!(submerged_area(&p).unwrap(), r.submerged_area);
}

#[test]
fn clean_pipe_uses_full_circle() {
    let p = CulvertParameters {
        silt_fraction: 0.0,
        ..reference()
    };
    let wetted = wetted_flow_area(&p).unwrap();
    assert_close("wetted", wetted, std::f64::consts::PI * 0.25 * 0.25, 1e-12);
}

#[test]
fn nearly_filled_pipe_is_rejected() {
    let p = CulvertParameters {
        silt_fraction: 0.999,
        ..reference()
    };
    assert!(matches!(evaluate(&p), Err(CulvertError::Geometry(_))));
    assert!(matches!(wetted_flow_area(&p), Err(CulvertError::Geometry(_))));
}

#[test]
fn silt_fraction_of_one_is_rejected() {
    for silt in [1.0, 1.2, -0.1] {
        let p = CulvertParameters {
            silt_fraction: silt,
            ..reference()
        };
        assert!(
            matches!(evaluate(&p), Err(CulvertError::Geometry(_))),
            "silt {silt}"
        );
    }
}

#[test]
fn wetted_area_shrinks_towards_full_silt() {
    let mut prev = f64::INFINITY;
    for pct in [0.0, 0.2, 0.5, 0.7, 0.9, 0.98] {
        let p = CulvertParameters {
            silt_fraction: pct,
            ..reference()
        };
        let wetted = wetted_flow_area(&p).unwrap();
        assert!(wetted < prev, "silt {pct}: {wetted} >= {prev}");
        prev = wetted;
    }
}

#[test]
fn zero_head_gives_zero_discharge() {
    let p = reference().with_levels(1.25, 1.25);
    let r = evaluate(&p).expect("zero head is valid");
    assert_eq!(r.head_differential, 0.0);
    assert_eq!(r.discharge, 0.0);
    assert_eq!(r.velocity, 0.0);
}

#[test]
fn negative_head_is_rejected() {
    let variants = [
        reference(),
        CulvertParameters {
            silt_fraction: 0.0,
            ..reference()
        },
        CulvertParameters {
            diameter: 1.2,
            length: 5.0,
            silt_fraction: 0.6,
            ..reference()
        },
        CulvertParameters {
            downstream_wet_area: 0.05,
            ..reference()
        },
    ];
    for base in variants {
        let p = base.with_levels(0.0, 0.01);
        match evaluate(&p) {
            Err(CulvertError::InvalidHead {
                upstream,
                downstream,
            }) => {
                assert_eq!(upstream, 0.0);
                assert_eq!(downstream, 0.01);
            }
            other => panic!("expected InvalidHead, got {other:?}"),
        }
    }
}

#[test]
fn discharge_grows_with_head() {
    let heads: Vec<f64> = (0..=50).map(|i| i as f64 * 0.01).collect();
    let points = rating_curve(&reference(), &heads);
    assert_eq!(points.len(), heads.len());
    let mut prev = -1.0;
    for point in &points {
        let r = point.result.as_ref().expect("rating point");
        assert!(r.discharge >= prev, "head {}: {} < {prev}", point.head, r.discharge);
        prev = r.discharge;
    }
}

#[test]
fn velocity_times_area_is_discharge() {
    for (silt, head) in [(0.0, 0.1), (0.1, 0.05), (0.45, 0.3), (0.8, 1.0)] {
        let p = CulvertParameters {
            silt_fraction: silt,
            ..reference()
        }
        .with_levels(head, 0.0);
        let r = evaluate(&p).unwrap();
        assert_close("Q", r.velocity * r.wetted_flow_area, r.discharge, 1e-12);
    }
}

#[test]
fn rating_curve_keeps_failed_points_separate() {
    let points = rating_curve(&reference(), &[-0.05, 0.05]);
    assert!(matches!(
        points[0].result,
        Err(CulvertError::InvalidHead { .. })
    ));
    let ok = points[1].result.as_ref().unwrap();
    assert_close("Q", ok.discharge, 0.116_132_839_655_364_44, 1e-9);
}

#[test]
fn oversized_culvert_is_a_warning_not_an_error() {
    let p = CulvertParameters {
        downstream_wet_area: 0.10,
        ..reference()
    };
    let r = evaluate(&p).expect("oversized culvert still evaluates");
    assert_eq!(r.warnings.len(), 1);
    assert!(r.discharge > 0.0);
}

#[test]
fn non_positive_divisors_are_division_errors() {
    let no_channel = CulvertParameters {
        downstream_wet_area: 0.0,
        ..reference()
    };
    assert!(matches!(evaluate(&no_channel), Err(CulvertError::Division(_))));

    let no_roughness = CulvertParameters {
        manning_coefficient: 0.0,
        ..reference()
    };
    assert!(matches!(evaluate(&no_roughness), Err(CulvertError::Division(_))));
}

#[test]
fn zero_loss_sum_is_resistance_error() {
    // 저항 단계는 입력 검증을 다시 하지 않으므로 직접 호출해야 손실 합 0에 도달한다.
    let p = CulvertParameters {
        length: 0.0,
        entrance_loss_coefficient: 0.0,
        exit_loss_coefficient: 0.0,
        ..reference()
    };
    let wetted = wetted_flow_area(&p).unwrap();
    assert!(matches!(
        resistance_breakdown(&p, wetted),
        Err(CulvertError::Resistance(_))
    ));
    assert!(matches!(evaluate(&p), Err(CulvertError::InvalidParameter(_))));
}

#[test]
fn non_finite_inputs_are_rejected() {
    let p = CulvertParameters {
        upstream_level: f64::NAN,
        ..reference()
    };
    assert!(matches!(evaluate(&p), Err(CulvertError::InvalidParameter(_))));

    let p = CulvertParameters {
        entrance_loss_coefficient: -0.1,
        ..reference()
    };
    assert!(matches!(evaluate(&p), Err(CulvertError::InvalidParameter(_))));
}

#[test]
fn parallel_evaluations_agree() {
    let p = reference();
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || evaluate(&p).unwrap().discharge))
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), evaluate(&p).unwrap().discharge);
    }
}

#[test]
fn overflowing_diameter_is_geometry_error() {
    let p = CulvertParameters {
        diameter: 1e200,
        ..reference()
    };
    assert!(matches!(wetted_flow_area(&p), Err(CulvertError::Geometry(_))));
    assert!(matches!(evaluate(&p), Err(CulvertError::Geometry(_))));
}

#[test]
fn overflowing_head_is_rejected() {
    let spread = reference().with_levels(1e308, -1e308);
    assert!(matches!(
        head_differential(&spread),
        Err(CulvertError::InvalidParameter(_))
    ));
    assert!(matches!(evaluate(&spread), Err(CulvertError::InvalidParameter(_))));

    // 수위차 자체는 유한해도 2·g·Δh 가 넘치면 유량이 무한대가 된다.
    let tall = reference().with_levels(1e308, 0.0);
    assert!(matches!(evaluate(&tall), Err(CulvertError::InvalidParameter(_))));
}
