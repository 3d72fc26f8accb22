use gpui::px;
use gpui_axis::style::{
    parse_hex_color, resolve_style, AxisStyle, AxisStyleOverride, LineStyleOverride,
    TextStyleOverride,
};

#[test]
fn test_partial_overrides_keep_the_rest_of_the_bucket() {
    let defaults = AxisStyle::default();
    let overrides = AxisStyleOverride {
        values: TextStyleOverride {
            fill: Some(gpui::red()),
            ..Default::default()
        },
        ..Default::default()
    };
    let resolved = resolve_style(&defaults, &overrides);

    assert_eq!(resolved.values.fill, gpui::red());
    assert_eq!(resolved.values.font_size, defaults.values.font_size);
    // Untouched buckets come through unchanged.
    assert_eq!(resolved.label, defaults.label);
    assert_eq!(resolved.tick, defaults.tick);
    assert_eq!(resolved.axis, defaults.axis);
}

#[test]
fn test_resolution_does_not_mutate_the_defaults() {
    let defaults = AxisStyle::default();
    let overrides = AxisStyleOverride {
        axis: LineStyleOverride {
            stroke_width: Some(px(3.0)),
            ..Default::default()
        },
        ..Default::default()
    };
    let first = resolve_style(&defaults, &overrides);
    let second = resolve_style(&defaults, &AxisStyleOverride::default());

    assert_eq!(first.axis.stroke_width, px(3.0));
    // A later resolution sees pristine defaults, not the first override.
    assert_eq!(second.axis.stroke_width, defaults.axis.stroke_width);
}

#[test]
fn test_hex_colors_parse_in_short_and_long_form() {
    let long = parse_hex_color("#ff0000").unwrap();
    let short = parse_hex_color("#f00").unwrap();
    assert_eq!(long, short);

    assert!(parse_hex_color("#ff0000cc").is_ok());
    assert!(parse_hex_color("not-a-color").is_err());
    assert!(parse_hex_color("#12345").is_err());
}
