use super::*;
use std::f64::consts::{FRAC_PI_2, PI};

fn assert_close(a: DVec3, b: DVec3) {
    assert!(a.abs_diff_eq(b, 1e-9), "{a} != {b}");
}

#[test]
fn zero_axis_is_rejected() {
    let err = AxisRotation::new(DVec3::ZERO, DVec3::ZERO).unwrap_err();
    assert!(matches!(err, TurntableError::DegenerateAxis(_)));

    let err = AxisRotation::new(DVec3::splat(1e-14), DVec3::ZERO).unwrap_err();
    assert!(matches!(err, TurntableError::DegenerateAxis(_)));

    let err = AxisRotation::new(DVec3::new(f64::NAN, 0.0, 1.0), DVec3::ZERO).unwrap_err();
    assert!(matches!(err, TurntableError::DegenerateAxis(_)));
}

#[test]
fn quarter_turn_about_z_is_right_handed() {
    let rot = AxisRotation::new(DVec3::Z, DVec3::ZERO).unwrap();
    let p = transform_point(&rot.at(FRAC_PI_2), DVec3::X);
    assert_close(p, DVec3::Y);
}

#[test]
fn rotation_happens_about_the_pivot() {
    let pivot = DVec3::new(1.0, 2.0, 3.0);
    let rot = AxisRotation::new(DVec3::new(0.0, 0.0, 5.0), pivot).unwrap();
    assert_eq!(rot.pivot(), pivot);
    assert_close(rot.axis(), DVec3::Z);

    assert_close(transform_point(&rot.at(1.234), pivot), pivot);
    let p = transform_point(&rot.at(PI), pivot + DVec3::X);
    assert_close(p, pivot - DVec3::X);
}

#[test]
fn matches_glam_axis_angle() {
    let axis = DVec3::new(3.0, 4.0, 5.0);
    let rot = AxisRotation::new(axis, DVec3::ZERO).unwrap();
    let reference = DMat4::from_axis_angle(axis.normalize(), 0.7);
    let p = DVec3::new(-2.0, 0.5, 9.0);
    assert_close(
        transform_point(&rot.at(0.7), p),
        reference.transform_point3(p),
    );
}

#[test]
fn transform_point_divides_by_w() {
    let m = DMat4::from_scale(DVec3::splat(2.0)) * 0.5;
    // w ends up at 0.5.
    let p = transform_point(&m, DVec3::new(1.0, 2.0, 3.0));
    assert_close(p, DVec3::new(2.0, 4.0, 6.0));
}
