use super::*;

#[test]
fn defaults_match_documented_values() {
    let c = HeatmapConfig::default();
    assert_eq!((c.start_year, c.end_year), (2013, 2016));
    assert_eq!((c.width, c.height), (950.0, 475.0));
    assert_eq!(c.color_range_start.to_hex(), "#fae9e9");
    assert_eq!(c.color_range_end.to_hex(), "#d62728");
    assert_eq!(c.margin, Margin::DEFAULT);
    assert_eq!(c.usable_width(), 900.0);
    assert_eq!(c.usable_height(), 435.0);
    assert_eq!(c.year_range(), vec![2013, 2014, 2015]);
    c.validate().unwrap();
}

#[test]
fn partial_json_fills_defaults() {
    let c = HeatmapConfig::from_json_str(
        r##"{ "start_year": 2020, "end_year": 2021, "color_range_end": "#00f" }"##,
    )
    .unwrap();
    assert_eq!(c.start_year, 2020);
    assert_eq!(c.width, 950.0);
    assert_eq!(c.color_range_end, Rgb8::new(0, 0, 255));
}

#[test]
fn unknown_fields_and_bad_colors_are_rejected() {
    assert!(matches!(
        HeatmapConfig::from_json_str(r#"{ "colour": "red" }"#),
        Err(CalheatError::Serde(_))
    ));
    assert!(HeatmapConfig::from_json_str(r#"{ "color_range_start": "red" }"#).is_err());
}

#[test]
fn missing_file_reports_path() {
    let err = HeatmapConfig::from_path("does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}

#[test]
fn validate_rejects_inverted_years_and_bad_sizes() {
    let inverted = HeatmapConfig {
        start_year: 2020,
        end_year: 2020,
        ..HeatmapConfig::default()
    };
    assert!(matches!(inverted.validate(), Err(CalheatError::Config(_))));
    assert!(inverted.year_range().is_empty());

    let zero = HeatmapConfig {
        width: 0.0,
        ..HeatmapConfig::default()
    };
    assert!(zero.validate().is_err());

    let cramped = HeatmapConfig {
        width: 40.0,
        ..HeatmapConfig::default()
    };
    assert!(cramped.validate().is_err());

    let nan = HeatmapConfig {
        height: f64::NAN,
        ..HeatmapConfig::default()
    };
    assert!(nan.validate().is_err());
}
