use std::rc::Rc;
use std::sync::Arc;

use gpui::px;
use gpui_axis::style::{AxisStyleOverride, TextStyleOverride};
use gpui_axis::{AxisAlign, AxisConfig, AxisError, AxisScale, AxisView, TickFormat};

fn linear_config(min: f64, max: f64, height: f32) -> AxisConfig {
    AxisConfig::new("yaxis")
        .with_domain(min, max)
        .with_height(px(height))
}

#[test]
fn test_explicit_tick_count_is_uniform_and_inclusive() {
    let view = AxisView::build(linear_config(0.0, 100.0, 600.0).with_tick_count(5)).unwrap();
    let scene = view.scene();

    let values: Vec<f64> = scene.ticks.iter().map(|t| t.value).collect();
    assert_eq!(values.len(), 5);
    for (i, value) in values.iter().enumerate() {
        assert!((value - i as f64 * 25.0).abs() < 1e-9, "tick {i} = {value}");
    }

    let labels: Vec<&str> = scene.ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["0.0", "25", "50", "75", "100"]);

    // Not an inner axis, no grid: short stubs, no outer ticks.
    assert_eq!(scene.tick_len, px(5.0));
    assert_eq!(scene.outer_tick_len, px(0.0));
}

#[test]
fn test_explicit_tick_count_survives_floating_point_drift() {
    let view = AxisView::build(linear_config(0.0, 0.3, 600.0).with_tick_count(4)).unwrap();
    let values: Vec<f64> = view.scene().ticks.iter().map(|t| t.value).collect();
    assert_eq!(values.len(), 4);
    assert!((values[3] - 0.3).abs() < 1e-9);
}

#[test]
fn test_explicit_tick_count_includes_negative_endpoint() {
    let view = AxisView::build(linear_config(-100.0, -10.0, 600.0).with_tick_count(4)).unwrap();
    let values: Vec<f64> = view.scene().ticks.iter().map(|t| t.value).collect();
    assert_eq!(values.len(), 4);
    assert!((values[3] + 10.0).abs() < 1e-9);
}

#[test]
fn test_short_rows_request_four_ticks() {
    // (0, 1) with a target of 4 snaps to a 0.2 step: 6 ticks.
    let view = AxisView::build(linear_config(0.0, 1.0, 150.0)).unwrap();
    assert_eq!(view.scene().ticks.len(), 6);

    // Taller rows let the generator pick: 0.1 step, 11 ticks.
    let view = AxisView::build(linear_config(0.0, 1.0, 600.0)).unwrap();
    assert_eq!(view.scene().ticks.len(), 11);
}

#[test]
fn test_log_domain_straddling_zero_is_rejected() {
    let config = AxisConfig::new("yaxis")
        .with_scale(AxisScale::new_log((-10.0, 10.0), (600.0, 0.0)))
        .with_domain(-10.0, 10.0);
    let err = match AxisView::build(config) {
        Ok(_) => panic!("log domain straddling zero must be rejected"),
        Err(err) => err,
    };
    assert_eq!(
        err,
        AxisError::InvalidLogDomain {
            min: -10.0,
            max: 10.0
        }
    );
}

#[test]
fn test_log_domain_on_one_side_of_zero_renders() {
    let config = AxisConfig::new("yaxis")
        .with_scale(AxisScale::new_log((1.0, 1000.0), (600.0, 0.0)))
        .with_domain(1.0, 1000.0);
    let view = AxisView::build(config).unwrap();
    let count = view.scene().ticks.len();
    assert!((5..=15).contains(&count), "expected ~10 ticks, got {count}");

    let config = AxisConfig::new("yaxis")
        .with_scale(AxisScale::new_log((-1000.0, -1.0), (600.0, 0.0)))
        .with_domain(-1000.0, -1.0);
    let view = AxisView::build(config).unwrap();
    assert!(!view.scene().ticks.is_empty());
}

#[test]
fn test_log_axes_ignore_the_configured_format() {
    let config = AxisConfig::new("yaxis")
        .with_scale(AxisScale::new_log((1.0, 1000.0), (600.0, 0.0)))
        .with_domain(1.0, 1000.0)
        .with_format(TickFormat::Custom(Arc::new(|_| "X".to_string())));
    let view = AxisView::build(config).unwrap();
    assert!(view.scene().ticks.iter().all(|t| t.label != "X"));
}

#[test]
fn test_absolute_formats_the_magnitude() {
    let config = linear_config(-1.0, 1.0, 600.0)
        .with_tick_count(3)
        .with_absolute(true);
    let view = AxisView::build(config).unwrap();
    let labels: Vec<&str> = view.scene().ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["1.0", "0.0", "1.0"]);

    let config = linear_config(-1.0, 1.0, 600.0).with_tick_count(3);
    let view = AxisView::build(config).unwrap();
    assert_eq!(view.scene().ticks[0].label, "-1.0");
}

#[test]
fn test_alignment_places_the_axis_line() {
    let view = AxisView::build(linear_config(0.0, 1.0, 600.0).with_width(px(80.0))).unwrap();
    assert_eq!(view.scene().origin_x, px(80.0));

    let view = AxisView::build(
        linear_config(0.0, 1.0, 600.0)
            .with_width(px(80.0))
            .with_align(AxisAlign::Right),
    )
    .unwrap();
    assert_eq!(view.scene().origin_x, px(0.0));
}

#[test]
fn test_baseline_follows_hide_axis_line() {
    let view = AxisView::build(linear_config(0.0, 1.0, 600.0)).unwrap();
    assert_eq!(view.scene().baseline_len, Some(px(600.0)));

    let view = AxisView::build(linear_config(0.0, 1.0, 600.0).with_hide_axis_line(true)).unwrap();
    assert_eq!(view.scene().baseline_len, None);
}

#[test]
fn test_inner_axes_extend_ticks_across_the_plot() {
    let config = linear_config(0.0, 1.0, 600.0)
        .with_grid(true, true)
        .with_chart_extent(px(640.0));
    let view = AxisView::build(config).unwrap();
    assert_eq!(view.scene().tick_len, px(640.0));

    // Grid requested but not an inner axis: stub length.
    let config = linear_config(0.0, 1.0, 600.0)
        .with_grid(true, false)
        .with_chart_extent(px(640.0));
    let view = AxisView::build(config).unwrap();
    assert_eq!(view.scene().tick_len, px(5.0));
}

#[test]
fn test_title_offset_clears_the_label_column() {
    let view = AxisView::build(linear_config(0.0, 1.0, 600.0).with_label("voltage")).unwrap();
    let title = view.scene().title.clone().unwrap();
    assert_eq!(title.offset, px(-50.0));
    assert_eq!(title.rotation_degrees, -90.0);
    assert_eq!(title.baseline_shift_em, 0.71);

    let view = AxisView::build(
        linear_config(0.0, 1.0, 600.0)
            .with_label("voltage")
            .with_align(AxisAlign::Right)
            .with_label_offset(px(10.0)),
    )
    .unwrap();
    assert_eq!(view.scene().title.clone().unwrap().offset, px(50.0));
}

#[test]
fn test_invisible_axes_produce_an_empty_scene() {
    let config = linear_config(0.0, 1.0, 600.0)
        .with_label("voltage")
        .with_visible(false);
    let view = AxisView::build(config).unwrap();
    let scene = view.scene();
    assert!(scene.ticks.is_empty());
    assert_eq!(scene.baseline_len, None);
    assert!(scene.title.is_none());
}

#[test]
fn test_updates_without_visual_change_keep_the_scene() {
    let config = linear_config(0.0, 100.0, 600.0);
    let mut view = AxisView::build(config.clone()).unwrap();
    let before = view.scene().clone();

    // Same scale, align, width, kind and chart extent; label and style
    // differ, which rides along without a rebuild.
    let next = config
        .clone()
        .with_label("current")
        .with_style(AxisStyleOverride {
            values: TextStyleOverride {
                fill: Some(gpui::red()),
                ..Default::default()
            },
            ..Default::default()
        });
    assert!(!view.set_config(next).unwrap());
    assert!(Rc::ptr_eq(&before, view.scene()));
    assert_eq!(view.config().label, "current");
}

#[test]
fn test_updates_that_change_the_key_rebuild_the_scene() {
    let config = linear_config(0.0, 100.0, 600.0);

    let mut view = AxisView::build(config.clone()).unwrap();
    let before = view.scene().clone();
    assert!(view.set_config(config.clone().with_width(px(60.0))).unwrap());
    assert!(!Rc::ptr_eq(&before, view.scene()));

    let mut view = AxisView::build(config.clone()).unwrap();
    let before = view.scene().clone();
    assert!(view
        .set_config(config.clone().with_domain(0.0, 200.0))
        .unwrap());
    assert!(!Rc::ptr_eq(&before, view.scene()));

    let mut view = AxisView::build(config.clone()).unwrap();
    let before = view.scene().clone();
    assert!(view
        .set_config(config.clone().with_align(AxisAlign::Right))
        .unwrap());
    assert!(!Rc::ptr_eq(&before, view.scene()));
}

#[test]
fn test_power_scales_place_ticks_nonlinearly() {
    let config = AxisConfig::new("yaxis")
        .with_scale(AxisScale::new_power((0.0, 100.0), (600.0, 0.0), 2.0))
        .with_domain(0.0, 100.0)
        .with_tick_count(5);
    let view = AxisView::build(config).unwrap();
    let scene = view.scene();
    assert_eq!(scene.ticks.len(), 5);
    // 25 on a square-law scale sits at 1/16th of the range.
    assert!((f64::from(scene.ticks[1].offset) - 562.5).abs() < 1e-3);
}
