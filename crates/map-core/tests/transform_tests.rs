// Host-side tests for CSS transform building.

use map_core::*;

#[test]
fn builders_format_axis_in_upper_case() {
    assert_eq!(translate_css(12.0, "x").unwrap(), "translateX(12px)");
    assert_eq!(translate_css(-3.5, "Y").unwrap(), "translateY(-3.5px)");
    assert_eq!(rotate_css(40.0, "y").unwrap(), "rotateY(40deg)");
    assert_eq!(rotate_css(-25.0, "z").unwrap(), "rotateZ(-25deg)");
}

#[test]
fn builders_fail_fast_without_axis() {
    assert_eq!(
        translate_css(1.0, ""),
        Err(TransformError::MissingAxis("translate"))
    );
    assert_eq!(rotate_css(1.0, "  "), Err(TransformError::MissingAxis("rotate")));
    assert_eq!(
        rotate_css(1.0, "w"),
        Err(TransformError::UnknownAxis("w".to_string()))
    );
}

#[test]
fn css_numbers_are_trimmed_and_never_negative_zero() {
    assert_eq!(fmt_css_number(0.0), "0");
    assert_eq!(fmt_css_number(-0.0), "0");
    assert_eq!(fmt_css_number(-0.00001), "0");
    assert_eq!(fmt_css_number(46.791111376), "46.7911");
    assert_eq!(fmt_css_number(70.2), "70.2");
    assert_eq!(fmt_css_number(100.0), "100");
}

#[test]
fn transform_keeps_every_operation_in_order() {
    let t = Transform::new()
        .translate(Axis::X, 70.2)
        .rotate(Axis::Y, 0.0)
        .rotate(Axis::Z, 0.0)
        .rotate(Axis::X, 25.0);
    assert_eq!(t.ops().len(), 4);
    assert_eq!(
        t.to_css(),
        "translateX(70.2px) rotateY(0deg) rotateZ(0deg) rotateX(25deg)"
    );
}

#[test]
fn identity_serializes_to_empty_string() {
    let t = Transform::new();
    assert!(t.is_identity());
    assert_eq!(t.to_css(), "");
}

#[test]
fn translation_sums_only_the_requested_axis() {
    let t = Transform::new()
        .translate(Axis::X, 10.0)
        .rotate(Axis::X, 30.0)
        .translate(Axis::Y, 4.0)
        .translate(Axis::X, -2.5);
    assert_eq!(t.translation(Axis::X), 7.5);
    assert_eq!(t.translation(Axis::Y), 4.0);
    assert_eq!(t.translation(Axis::Z), 0.0);
}
