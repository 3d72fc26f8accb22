use gpui::prelude::*;
use gpui::*;
use gpui_axis::style::{AxisStyleOverride, LineStyleOverride};
use gpui_axis::{parse_hex_color, AxisAlign, AxisConfig, AxisScale, AxisView, TickFormat};

const ROW_HEIGHT: f32 = 480.0;
const PLOT_WIDTH: f32 = 640.0;

struct DemoApp {
    outer_left: Entity<AxisView>,
    inner_left: Entity<AxisView>,
    right: Entity<AxisView>,
}

impl DemoApp {
    fn new(cx: &mut Context<Self>) -> Self {
        let outer_left = cx.new(|_| {
            AxisView::build(
                AxisConfig::new("pressure")
                    .with_domain(0.0, 100_000.0)
                    .with_height(px(ROW_HEIGHT))
                    .with_label("pressure (Pa)")
                    .with_tick_count(5),
            )
            .expect("valid axis config")
        });

        // Inner axis: gridlines span the plot area.
        let inner_left = cx.new(|_| {
            AxisView::build(
                AxisConfig::new("voltage")
                    .with_domain(0.0, 5.0)
                    .with_height(px(ROW_HEIGHT))
                    .with_width(px(60.0))
                    .with_label("voltage (V)")
                    .with_format(TickFormat::Spec(".1f".to_string()))
                    .with_grid(true, true)
                    .with_chart_extent(px(PLOT_WIDTH))
                    .with_style(accent_style()),
            )
            .expect("valid axis config")
        });

        let right = cx.new(|_| {
            AxisView::build(
                AxisConfig::new("gain")
                    .with_scale(AxisScale::new_log((1.0, 10_000.0), (ROW_HEIGHT, 0.0)))
                    .with_domain(1.0, 10_000.0)
                    .with_height(px(ROW_HEIGHT))
                    .with_align(AxisAlign::Right)
                    .with_width(px(60.0))
                    .with_label("gain"),
            )
            .expect("valid axis config")
        });

        Self {
            outer_left,
            inner_left,
            right,
        }
    }
}

fn accent_style() -> AxisStyleOverride {
    let accent = parse_hex_color("#44a0ff").expect("valid hex color");
    AxisStyleOverride {
        tick: LineStyleOverride {
            stroke: Some(accent.alpha(0.15)),
            ..Default::default()
        },
        axis: LineStyleOverride {
            stroke: Some(accent),
            ..Default::default()
        },
        ..Default::default()
    }
}

impl Render for DemoApp {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .bg(gpui::black())
            .flex()
            .flex_row()
            .items_start()
            .child(self.outer_left.clone())
            .child(self.inner_left.clone())
            .child(div().w(px(PLOT_WIDTH)).h(px(ROW_HEIGHT)))
            .child(self.right.clone())
    }
}

fn main() {
    Application::new().run(|cx: &mut App| {
        cx.open_window(WindowOptions::default(), |_window, cx| {
            cx.new(|cx| DemoApp::new(cx))
        })
        .expect("failed to open window");
    });
}
