use super::*;

#[test]
fn defaults_match_the_video_backdrop() {
    let s = RenderSettings::default();
    assert_eq!(s.clear_rgba, Some([5, 13, 24, 255]));
    assert!(s.text_placeholders);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    assert_eq!(RenderSettings::from_json("{}").unwrap(), RenderSettings::default());

    let s = RenderSettings::from_json(r#"{"text_placeholders": false}"#).unwrap();
    assert_eq!(s.clear_rgba, Some([5, 13, 24, 255]));
    assert!(!s.text_placeholders);

    let s = RenderSettings::from_json(r#"{"clear_rgba": null}"#).unwrap();
    assert_eq!(s.clear_rgba, None);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = RenderSettings::from_json(r#"{"clear": [0, 0, 0, 255]}"#).unwrap_err();
    assert!(matches!(err, FramecastError::Serde(_)));
}

#[test]
fn missing_file_reports_the_path() {
    let err = RenderSettings::from_path("does/not/exist.json").unwrap_err();
    assert!(matches!(err, FramecastError::Other(_)));
    assert!(format!("{err:#}").contains("does/not/exist.json"));
}

#[test]
fn to_straight_unpremultiplies() {
    let frame = FrameRGBA {
        width: 3,
        height: 1,
        data: vec![128, 0, 64, 128, 0, 0, 0, 0, 10, 20, 30, 255],
        premultiplied: true,
    };
    assert_eq!(
        frame.to_straight(),
        vec![255, 0, 128, 128, 0, 0, 0, 0, 10, 20, 30, 255]
    );

    let straight = FrameRGBA {
        premultiplied: false,
        ..frame.clone()
    };
    assert_eq!(straight.to_straight(), straight.data);
}
