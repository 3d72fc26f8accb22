use std::rc::Rc;

use gpui::*;
use tracing::{debug, info};

use crate::config::{AxisConfig, RenderKey};
use crate::error::AxisError;
use crate::scene::{self, AxisScene};

/// Distance between the axis line and the near edge of a tick label.
const LABEL_PAD: f32 = 8.0;

trait PixelsExt {
    fn as_f32(&self) -> f32;
}

impl PixelsExt for Pixels {
    fn as_f32(&self) -> f32 {
        f32::from(*self)
    }
}

/// One vertical axis beside a chart row.
///
/// The view owns its scene exclusively: every visual update throws the
/// previous scene away and builds a fresh one. Prop updates that leave
/// the scale, alignment, width, scale type and chart extent untouched
/// are absorbed without a rebuild or repaint.
pub struct AxisView {
    config: AxisConfig,
    render_key: RenderKey,
    scene: Rc<AxisScene>,
}

impl AxisView {
    /// Build the view and render once from the given props.
    pub fn build(config: AxisConfig) -> Result<Self, AxisError> {
        let scene = Rc::new(scene::build(&config)?);
        info!("axis {} mounted", config.id);
        Ok(Self {
            render_key: RenderKey::of(&config),
            scene,
            config,
        })
    }

    pub fn config(&self) -> &AxisConfig {
        &self.config
    }

    pub fn scene(&self) -> &Rc<AxisScene> {
        &self.scene
    }

    /// Apply new props. Returns `true` when the scene was rebuilt,
    /// `false` when the update was absorbed without visual change.
    pub fn set_config(&mut self, next: AxisConfig) -> Result<bool, AxisError> {
        let key = RenderKey::of(&next);
        if key == self.render_key {
            debug!("axis {}: props unchanged, skipping rebuild", next.id);
            self.config = next;
            return Ok(false);
        }
        self.scene = Rc::new(scene::build(&next)?);
        self.render_key = key;
        self.config = next;
        debug!("axis {}: scene rebuilt", self.config.id);
        Ok(true)
    }

    /// Entity variant of [`set_config`](Self::set_config): requests a
    /// repaint only when the scene actually changed.
    pub fn update_config(
        &mut self,
        next: AxisConfig,
        cx: &mut Context<Self>,
    ) -> Result<(), AxisError> {
        if self.set_config(next)? {
            cx.notify();
        }
        Ok(())
    }
}

impl Render for AxisView {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let scene = self.scene.clone();
        div()
            .id(SharedString::from(format!("y-axis-{}", self.config.id)))
            .w(self.config.width)
            .h(self.config.height)
            .child(
                canvas(
                    |_, _, _| {},
                    move |bounds, (), window: &mut Window, cx| {
                        paint_scene(&scene, bounds, window, cx);
                    },
                )
                .size_full(),
            )
    }
}

fn paint_scene(scene: &AxisScene, bounds: Bounds<Pixels>, window: &mut Window, cx: &mut App) {
    let axis_x = bounds.origin.x + scene.origin_x;

    // 1. Tick/grid lines
    if !scene.ticks.is_empty() && scene.tick_len > px(0.0) {
        let mut builder = PathBuilder::stroke(scene.style.tick.stroke_width);
        let reach = px(scene.tick_len.as_f32() * scene.tick_dir);
        for tick in &scene.ticks {
            let y = bounds.origin.y + px(tick.offset);
            builder.move_to(point(axis_x, y));
            builder.line_to(point(axis_x + reach, y));
        }
        if let Ok(path) = builder.build() {
            window.paint_path(path, scene.style.tick.stroke);
        }
    }

    // 2. Baseline
    if let Some(len) = scene.baseline_len {
        let mut builder = PathBuilder::stroke(scene.style.axis.stroke_width);
        builder.move_to(point(axis_x, bounds.origin.y));
        builder.line_to(point(axis_x, bounds.origin.y + len));
        if let Ok(path) = builder.build() {
            window.paint_path(path, scene.style.axis.stroke);
        }
    }

    // 3. Tick labels
    let font_size = scene.style.values.font_size;
    let font = TextStyle::default().font();
    for tick in &scene.ticks {
        let run = TextRun {
            len: tick.label.len(),
            font: font.clone(),
            color: scene.style.values.fill,
            background_color: None,
            underline: None,
            strikethrough: None,
        };
        if let Ok(lines) =
            window
                .text_system()
                .shape_text(tick.label.clone().into(), font_size, &[run], None, None)
        {
            for line in lines {
                let y = bounds.origin.y + px(tick.offset) - font_size / 2.0;
                let x = if scene.label_dir < 0.0 {
                    axis_x - px(LABEL_PAD) - line.width()
                } else {
                    axis_x + px(LABEL_PAD)
                };
                let _ =
                    line.paint(point(x, y), font_size, TextAlign::Left, Some(bounds), window, cx);
            }
        }
    }

    // 4. Axis title
    if let Some(title) = &scene.title {
        let title_size = scene.style.label.font_size;
        let run = TextRun {
            len: title.text.len(),
            font: font.clone(),
            color: scene.style.label.fill,
            background_color: None,
            underline: None,
            strikethrough: None,
        };
        if let Ok(lines) = window.text_system().shape_text(
            title.text.clone().into(),
            title_size,
            &[run],
            None,
            None,
        ) {
            // The scene describes a -90 degree rotation; the painter places
            // the title centered along the row at the computed offset column.
            let x = axis_x + title.offset;
            let y = bounds.origin.y + bounds.size.height / 2.0 - title_size / 2.0;
            for line in lines {
                let _ = line.paint(
                    point(x - line.width() / 2.0, y),
                    title_size,
                    TextAlign::Left,
                    Some(bounds),
                    window,
                    cx,
                );
            }
        }
    }
}
