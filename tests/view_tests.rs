use std::rc::Rc;

use gpui::{px, AppContext, TestAppContext};
use gpui_axis::{AxisConfig, AxisView};

fn base_config() -> AxisConfig {
    AxisConfig::new("yaxis")
        .with_domain(0.0, 100.0)
        .with_height(px(600.0))
}

#[gpui::test]
fn test_entity_absorbs_update_without_visual_change(cx: &mut TestAppContext) {
    let axis = cx.update(|cx| cx.new(|_| AxisView::build(base_config()).unwrap()));

    let before = axis.read_with(cx, |view, _| view.scene().clone());

    cx.update(|cx| {
        axis.update(cx, |view, cx| {
            view.update_config(base_config().with_label("current"), cx)
                .unwrap();
        });
    });

    axis.read_with(cx, |view, _| {
        assert!(Rc::ptr_eq(&before, view.scene()));
        assert_eq!(view.config().label, "current");
    });
}

#[gpui::test]
fn test_entity_rebuilds_on_width_change(cx: &mut TestAppContext) {
    let axis = cx.update(|cx| cx.new(|_| AxisView::build(base_config()).unwrap()));

    let before = axis.read_with(cx, |view, _| view.scene().clone());

    cx.update(|cx| {
        axis.update(cx, |view, cx| {
            view.update_config(base_config().with_width(px(60.0)), cx)
                .unwrap();
        });
    });

    axis.read_with(cx, |view, _| {
        assert!(!Rc::ptr_eq(&before, view.scene()));
        assert_eq!(view.scene().origin_x, px(60.0));
    });
}
