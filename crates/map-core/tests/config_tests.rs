// Host-side tests for configuration defaults, merging and validation.

use map_core::style::{half_style, shadow_style, to_inline};
use map_core::*;

fn options(json: &str) -> PaperOptions {
    serde_json::from_str(json).expect("valid options json")
}

#[test]
fn defaults_are_documented_values() {
    let c = PaperConfig::default();
    assert_eq!(c.map.fold_angle, 40.0);
    assert_eq!(c.map.rotation, Rotation { x: 25.0, y: 0.0, z: 0.0 });
    assert_eq!(c.pieces.amount, 3);
    assert_eq!(c.pieces.width, 100.0);
    assert_eq!(c.pieces.ratio, 4.0);
    assert_eq!(c.pieces.aspect.background, "#FFF");
    assert_eq!(c.pieces.aspect.seams, "#FFFFFA");
    assert_eq!(c.pieces.aspect.shadow, "#000000");
    assert!(c.validate().is_ok());
}

#[test]
fn merge_only_touches_present_fields() {
    let mut c = PaperConfig::default();
    c.merge(&options(
        r##"{"map":{"rotation":{"y":15}},"pieces":{"amount":5,"aspect":{"shadow":"#222"}}}"##,
    ));
    assert_eq!(c.map.rotation, Rotation { x: 25.0, y: 15.0, z: 0.0 });
    assert_eq!(c.map.fold_angle, 40.0);
    assert_eq!(c.pieces.amount, 5);
    assert_eq!(c.pieces.width, 100.0);
    assert_eq!(c.pieces.aspect.shadow, "#222");
    assert_eq!(c.pieces.aspect.background, "#FFF");
}

#[test]
fn merged_builds_on_current_configuration() {
    let first = PaperConfig::from_options(Some(&options(r#"{"pieces":{"width":80}}"#))).unwrap();
    let second = first
        .merged(&options(r#"{"map":{"foldAngle":20}}"#))
        .unwrap();
    assert_eq!(second.pieces.width, 80.0);
    assert_eq!(second.map.fold_angle, 20.0);
}

#[test]
fn merged_leaves_original_untouched_on_error() {
    let current = PaperConfig::default();
    let err = current
        .merged(&options(r#"{"pieces":{"amount":0}}"#))
        .unwrap_err();
    assert_eq!(err, ConfigError::NoPieces);
    assert_eq!(current, PaperConfig::default());
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(serde_json::from_str::<PaperOptions>(r#"{"pieces":{"amout":2}}"#).is_err());
    assert!(serde_json::from_str::<PaperOptions>(r#"{"maps":{}}"#).is_err());
    assert!(serde_json::from_str::<PaperOptions>(r#"{"pieces":{"amount":-1}}"#).is_err());
}

#[test]
fn validation_rejects_bad_numbers() {
    let bad = [
        (r#"{"pieces":{"width":0}}"#, "width"),
        (r#"{"pieces":{"width":-4}}"#, "width"),
        (r#"{"pieces":{"ratio":0}}"#, "ratio"),
    ];
    for (json, field) in bad {
        match PaperConfig::from_options(Some(&options(json))) {
            Err(ConfigError::NotPositive { field: f, .. }) => assert_eq!(f, field),
            other => panic!("{json}: unexpected {other:?}"),
        }
    }
}

#[test]
fn validation_bounds_fold_angle() {
    for angle in [90.0, -90.0, 120.0] {
        let mut c = PaperConfig::default();
        c.map.fold_angle = angle;
        assert_eq!(c.validate(), Err(ConfigError::FoldAngleOutOfRange(angle)));
    }
    let mut c = PaperConfig::default();
    c.map.fold_angle = -89.5;
    assert!(c.validate().is_ok());
}

#[test]
fn validation_checks_hex_colors() {
    for good in ["#fff", "#FFFA", "#00ff00", "#00ff0080", "white", "rgb(0, 0, 0)"] {
        let mut c = PaperConfig::default();
        c.pieces.aspect.background = good.to_string();
        assert!(c.validate().is_ok(), "{good}");
    }
    for bad in ["#ggg", "#12345", "", "red; display:none"] {
        let mut c = PaperConfig::default();
        c.pieces.aspect.seams = bad.to_string();
        assert!(
            matches!(c.validate(), Err(ConfigError::BadColor { field: "seams", .. })),
            "{bad}"
        );
    }
}

#[test]
fn supplied_derived_fields_do_not_survive_geometry() {
    let mut c = PaperConfig::from_options(Some(&options(
        r#"{"map":{"offset":3},"pieces":{"height":12,"width":50,"ratio":2}}"#,
    )))
    .unwrap();
    assert_eq!(c.pieces.height, 12.0);
    c.apply_geometry();
    assert_eq!(c.pieces.height, 100.0);
    assert!(c.map.offset != 3.0);
}

#[test]
fn config_serializes_in_camel_case() {
    let json = serde_json::to_value(PaperConfig::default()).unwrap();
    assert_eq!(json["map"]["foldAngle"], 40.0);
    assert_eq!(json["pieces"]["aspect"]["seams"], "#FFFFFA");
}

#[test]
fn styles_carry_aspect_and_size() {
    let mut c = PaperConfig::default();
    c.apply_geometry();
    assert_eq!(
        to_inline(&half_style(&c.pieces)),
        "background-color: #FFF; box-shadow: inset 0 0 45px #FFFFFA; width: 100px; height: 400px;"
    );
    assert_eq!(
        shadow_style(&c.pieces),
        vec![("background-color", "#000000".to_string())]
    );
}

#[test]
fn colors_cannot_break_out_of_markup() {
    for bad in [
        "x\" onmouseover=\"alert(1)",
        "red</style>",
        "<b>",
        "blue\\22",
    ] {
        let result = PaperConfig::from_options(Some(&PaperOptions {
            pieces: Some(PiecesOptions {
                aspect: Some(AspectOptions {
                    background: Some(bad.to_string()),
                    ..AspectOptions::default()
                }),
                ..PiecesOptions::default()
            }),
            ..PaperOptions::default()
        }));
        assert!(
            matches!(result, Err(ConfigError::BadColor { field: "background", .. })),
            "{bad}"
        );
    }
}

#[test]
fn amount_is_capped() {
    let mut c = PaperConfig::default();
    c.pieces.amount = constants::MAX_AMOUNT;
    assert!(c.validate().is_ok());
    c.pieces.amount = 1_000_000_000;
    assert_eq!(
        c.validate(),
        Err(ConfigError::TooManyPieces {
            amount: 1_000_000_000,
            max: constants::MAX_AMOUNT
        })
    );
}

#[test]
fn sizes_are_bounded() {
    let huge_width = PaperConfig::from_options(Some(&options(r#"{"pieces":{"width":1e308}}"#)));
    assert!(matches!(
        huge_width,
        Err(ConfigError::TooLarge { field: "width", .. })
    ));

    // Width alone is fine, the derived height is not.
    let tall = PaperConfig::from_options(Some(&options(
        r#"{"pieces":{"width":50000,"ratio":4}}"#,
    )));
    assert!(matches!(tall, Err(ConfigError::TooLarge { field: "height", .. })));

    let ok = PaperConfig::from_options(Some(&options(r#"{"pieces":{"width":2500,"ratio":40}}"#)));
    assert!(ok.is_ok());
}
