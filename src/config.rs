use std::time::Duration;

use gpui::{px, Pixels};
use serde::{Deserialize, Serialize};

use crate::format::TickFormat;
use crate::scales::{AxisScale, ScaleKind};
use crate::style::AxisStyleOverride;

/// Which side of the chart row the axis sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisAlign {
    Left,
    Right,
}

impl Default for AxisAlign {
    fn default() -> Self {
        Self::Left
    }
}

/// Props for one vertical axis. Supplied fresh by the parent row on every
/// update; the view decides whether anything visual actually changed.
#[derive(Clone, Debug)]
pub struct AxisConfig {
    /// Identifier sibling chart components use to bind series to this axis.
    pub id: String,
    pub align: AxisAlign,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
    /// Domain -> pixel mapping, supplied by the parent layout.
    pub scale: AxisScale,
    /// Format the absolute value of each tick.
    pub absolute: bool,
    pub format: TickFormat,
    /// Extra offset applied to the rotated axis title.
    pub label_offset: Pixels,
    /// Accepted for API compatibility; the canvas painter redraws
    /// immediately.
    pub transition: Duration,
    pub width: Pixels,
    pub height: Pixels,
    pub style: AxisStyleOverride,
    /// Explicit tick count; `None`, `0` and `1` fall through to auto
    /// selection.
    pub tick_count: Option<usize>,
    /// Plot content width, used as gridline length for inner axes.
    pub chart_extent: Pixels,
    pub show_grid: bool,
    pub is_inner_axis: bool,
    pub hide_axis_line: bool,
    pub visible: bool,
    /// Axis title; empty means no title.
    pub label: String,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            id: "yaxis".to_string(),
            align: AxisAlign::Left,
            min: 0.0,
            max: 1.0,
            kind: ScaleKind::Linear,
            scale: AxisScale::default(),
            absolute: false,
            format: TickFormat::default(),
            label_offset: px(0.0),
            transition: Duration::from_millis(100),
            width: px(80.0),
            height: px(100.0),
            style: AxisStyleOverride::default(),
            tick_count: None,
            chart_extent: px(0.0),
            show_grid: false,
            is_inner_axis: false,
            hide_axis_line: false,
            visible: true,
            label: String::new(),
        }
    }
}

impl AxisConfig {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_align(mut self, align: AxisAlign) -> Self {
        self.align = align;
        self
    }

    /// Set `min`/`max` and keep the scale's domain in sync.
    pub fn with_domain(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self.scale.update_domain(min, max);
        self
    }

    /// Replace the scale; `kind` follows the new scale.
    pub fn with_scale(mut self, scale: AxisScale) -> Self {
        self.kind = scale.kind();
        self.scale = scale;
        self
    }

    pub fn with_absolute(mut self, absolute: bool) -> Self {
        self.absolute = absolute;
        self
    }

    pub fn with_format(mut self, format: TickFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_label_offset(mut self, offset: Pixels) -> Self {
        self.label_offset = offset;
        self
    }

    pub fn with_width(mut self, width: Pixels) -> Self {
        self.width = width;
        self
    }

    /// Set the row height and keep the scale's pixel range (`height`..0,
    /// y grows downward) in sync.
    pub fn with_height(mut self, height: Pixels) -> Self {
        self.height = height;
        self.scale.update_range(f32::from(height), 0.0);
        self
    }

    pub fn with_style(mut self, style: AxisStyleOverride) -> Self {
        self.style = style;
        self
    }

    pub fn with_tick_count(mut self, count: usize) -> Self {
        self.tick_count = Some(count);
        self
    }

    pub fn with_grid(mut self, show_grid: bool, is_inner_axis: bool) -> Self {
        self.show_grid = show_grid;
        self.is_inner_axis = is_inner_axis;
        self
    }

    pub fn with_chart_extent(mut self, extent: Pixels) -> Self {
        self.chart_extent = extent;
        self
    }

    pub fn with_hide_axis_line(mut self, hide: bool) -> Self {
        self.hide_axis_line = hide;
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

/// The props that decide whether a rebuild is needed. Everything else
/// (title, styles, formatter) rides along with the next rebuild.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderKey {
    pub scale: String,
    pub align: AxisAlign,
    pub width: Pixels,
    pub kind: ScaleKind,
    pub chart_extent: Pixels,
}

impl RenderKey {
    pub fn of(config: &AxisConfig) -> Self {
        Self {
            scale: config.scale.descriptor().canonical(),
            align: config.align,
            width: config.width,
            kind: config.kind,
            chart_extent: config.chart_extent,
        }
    }
}
