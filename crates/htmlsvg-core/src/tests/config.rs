use crate::*;
use serde_json::json;

#[test]
fn options_deserialize_from_camel_case_json() {
    let options =
        RenderOptions::from_json(r#"{"width": 42, "height": 4711, "zoom": 2, "hover": ".mySpan"}"#)
            .unwrap();
    assert_eq!(
        options,
        RenderOptions::new()
            .with_width(42.0)
            .with_height(4711.0)
            .with_zoom(2.0)
            .with_hover(".mySpan")
    );
    assert_eq!(options.active, None);
    assert_eq!(options.clip, None);
}

#[test]
fn absent_options_are_not_serialized() {
    let options = RenderOptions::new().with_clip(".mySpan");
    assert_eq!(options.to_value().unwrap(), json!({"clip": ".mySpan"}));
}

#[test]
fn overrides_are_layered_on_top() {
    let base = RenderOptions::new().with_width(100.0).with_hover("a");
    let merged = base
        .with_overrides(&json!({"width": 200, "hover": null, "zoom": 3}))
        .unwrap();
    assert_eq!(merged, RenderOptions::new().with_width(200.0).with_zoom(3.0));
}

#[test]
fn invalid_options_are_reported() {
    let err = RenderOptions::from_json(r#"{"width": "wide"}"#).unwrap_err();
    assert!(matches!(err, Error::Options(_)));
}

#[test]
fn size_request_carries_exactly_the_supplied_keys() {
    let options = RenderOptions::new().with_width(42.0).with_height(4711.0);
    let request = SizeRequest::from(&options);
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"width": 42.0, "height": 4711.0})
    );

    let options = RenderOptions::new().with_zoom(42.0).with_clip(".mySpan").with_hover("a");
    let request = SizeRequest::from(&options);
    assert_eq!(request.zoom, Some(42.0));
    assert_eq!(request.clip.as_deref(), Some(".mySpan"));
    assert_eq!(request.width, None);
}

#[test]
fn zoom_factor_only_skips_scaling_for_zero_and_absent() {
    assert_eq!(ZoomFactor::NONE.scale(), None);
    assert_eq!(ZoomFactor::new(0.0).scale(), None);
    assert_eq!(ZoomFactor::new(1.0).scale(), Some(1.0));
    assert_eq!(ZoomFactor::new(10.0).scale(), Some(10.0));

    assert_eq!(ZoomFactor::new(-2.0).scale(), None);
    assert!(ZoomFactor::new(-2.0).is_invalid());
    assert!(ZoomFactor::new(f64::NAN).is_invalid());
    assert!(!ZoomFactor::new(0.0).is_invalid());
    assert_eq!(ZoomFactor::new(0.0).divisor(), 1.0);
}

#[test]
fn size_descriptor_defaults_offsets_when_deserialized() {
    let size: SizeDescriptor = serde_json::from_value(json!({
        "width": 123, "height": 987, "viewportWidth": 200, "viewportHeight": 1000
    }))
    .unwrap();
    assert_eq!(size, SizeDescriptor::new(123.0, 987.0).with_viewport(200.0, 1000.0));
}
