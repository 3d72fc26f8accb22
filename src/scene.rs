use gpui::{px, Pixels};

use crate::config::{AxisAlign, AxisConfig};
use crate::error::AxisError;
use crate::format::TickFormatter;
use crate::scales::ScaleKind;
use crate::style::AxisStyle;

/// Tick/grid stub length when gridlines are not extended across the plot.
const TICK_STUB: f32 = 5.0;

/// One labeled reference mark, at a scale-mapped pixel offset.
#[derive(Clone, Debug, PartialEq)]
pub struct TickMark {
    pub value: f64,
    pub offset: f32,
    pub label: String,
}

/// The rotated axis title.
#[derive(Clone, Debug, PartialEq)]
pub struct TitleLabel {
    pub text: String,
    /// Horizontal offset from the axis line, compensating for the tick
    /// label column.
    pub offset: Pixels,
    pub rotation_degrees: f32,
    pub baseline_shift_em: f32,
}

/// Everything the painter draws for one axis. Owned exclusively by the
/// view and replaced wholesale on every rebuild; never patched in place.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisScene {
    /// Horizontal position of the axis line inside the widget's box.
    pub origin_x: Pixels,
    /// Direction tick/grid lines extend from the axis line, toward the
    /// plot interior (+1 right, -1 left).
    pub tick_dir: f32,
    /// Direction tick labels sit, away from the plot.
    pub label_dir: f32,
    pub ticks: Vec<TickMark>,
    pub tick_len: Pixels,
    pub outer_tick_len: Pixels,
    /// Baseline segment length from the top of the row, when drawn.
    pub baseline_len: Option<Pixels>,
    pub title: Option<TitleLabel>,
    pub style: AxisStyle,
}

/// Build the scene for the given props. The only failure is a log axis
/// whose domain straddles zero.
pub fn build(config: &AxisConfig) -> Result<AxisScene, AxisError> {
    let style = config.style.resolve();
    let (origin_x, tick_dir, label_dir) = match config.align {
        AxisAlign::Left => (config.width, 1.0, -1.0),
        AxisAlign::Right => (px(0.0), -1.0, 1.0),
    };

    if !config.visible {
        return Ok(AxisScene {
            origin_x,
            tick_dir,
            label_dir,
            ticks: Vec::new(),
            tick_len: px(0.0),
            outer_tick_len: px(0.0),
            baseline_len: None,
            title: None,
            style,
        });
    }

    let values = tick_values(config)?;
    let formatter = match config.kind {
        ScaleKind::Log => TickFormatter::si(2),
        _ => config.format.formatter(),
    };
    let ticks = values
        .into_iter()
        .map(|value| {
            let shown = if config.absolute { value.abs() } else { value };
            TickMark {
                value,
                offset: config.scale.map(value),
                label: formatter.format(shown),
            }
        })
        .collect();

    let tick_len = if config.show_grid && config.is_inner_axis {
        config.chart_extent
    } else {
        px(TICK_STUB)
    };

    let title = (!config.label.is_empty()).then(|| TitleLabel {
        text: config.label.clone(),
        offset: match config.align {
            AxisAlign::Left => config.label_offset - px(50.0),
            AxisAlign::Right => px(40.0) + config.label_offset,
        },
        rotation_degrees: -90.0,
        baseline_shift_em: 0.71,
    });

    Ok(AxisScene {
        origin_x,
        tick_dir,
        label_dir,
        ticks,
        tick_len,
        outer_tick_len: px(0.0),
        baseline_len: (!config.hide_axis_line).then_some(config.height),
        title,
        style,
    })
}

/// Pick tick values for the configured scale type.
fn tick_values(config: &AxisConfig) -> Result<Vec<f64>, AxisError> {
    match config.kind {
        ScaleKind::Linear | ScaleKind::Power => {
            if let Some(count) = config.tick_count.filter(|&count| count > 1) {
                Ok(uniform_ticks(config.min, config.max, count))
            } else if config.height <= px(200.0) {
                Ok(config.scale.ticks(4))
            } else {
                Ok(config.scale.ticks(10))
            }
        }
        ScaleKind::Log => {
            if config.min < 0.0 && config.max > 0.0 {
                return Err(AxisError::InvalidLogDomain {
                    min: config.min,
                    max: config.max,
                });
            }
            Ok(config.scale.ticks(10))
        }
    }
}

/// Exactly `count` evenly spaced values from `min` to `max` inclusive.
/// The epsilon guards accumulated floating-point drift at the endpoint.
fn uniform_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    let step = (max - min) / (count - 1) as f64;
    if !(step > 0.0) {
        return vec![min];
    }
    let epsilon = max.abs() / 10_000.0;
    let mut ticks = Vec::with_capacity(count);
    let mut value = min;
    while value <= max + epsilon {
        ticks.push(value);
        value += step;
    }
    ticks
}
