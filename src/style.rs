use eyre::{bail, Result};
use gpui::{px, Hsla, Pixels};

/// Text styling for the axis title and tick labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyleProps {
    pub fill: Hsla,
    pub font_size: Pixels,
}

/// Line styling for tick/grid lines and the baseline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyleProps {
    pub stroke: Hsla,
    pub stroke_width: Pixels,
}

/// The four style buckets of an axis: `label` (axis title), `values`
/// (tick text), `tick` (tick/grid lines), `axis` (baseline).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisStyle {
    pub label: TextStyleProps,
    pub values: TextStyleProps,
    pub tick: LineStyleProps,
    pub axis: LineStyleProps,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            label: TextStyleProps {
                fill: gpui::white().alpha(0.8),
                font_size: px(12.0),
            },
            values: TextStyleProps {
                fill: gpui::white().alpha(0.8),
                font_size: px(11.0),
            },
            tick: LineStyleProps {
                stroke: gpui::white().alpha(0.1),
                stroke_width: px(1.0),
            },
            axis: LineStyleProps {
                stroke: gpui::white().alpha(0.2),
                stroke_width: px(1.0),
            },
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextStyleOverride {
    pub fill: Option<Hsla>,
    pub font_size: Option<Pixels>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LineStyleOverride {
    pub stroke: Option<Hsla>,
    pub stroke_width: Option<Pixels>,
}

/// Caller overrides, one optional slot per bucket property. Anything left
/// `None` keeps the documented default.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisStyleOverride {
    pub label: TextStyleOverride,
    pub values: TextStyleOverride,
    pub tick: LineStyleOverride,
    pub axis: LineStyleOverride,
}

/// Merge overrides over defaults, property by property. Pure: neither
/// input is mutated and no shared default instance exists.
pub fn resolve_style(defaults: &AxisStyle, overrides: &AxisStyleOverride) -> AxisStyle {
    AxisStyle {
        label: merge_text(defaults.label, overrides.label),
        values: merge_text(defaults.values, overrides.values),
        tick: merge_line(defaults.tick, overrides.tick),
        axis: merge_line(defaults.axis, overrides.axis),
    }
}

impl AxisStyleOverride {
    pub fn resolve(&self) -> AxisStyle {
        resolve_style(&AxisStyle::default(), self)
    }
}

fn merge_text(default: TextStyleProps, over: TextStyleOverride) -> TextStyleProps {
    TextStyleProps {
        fill: over.fill.unwrap_or(default.fill),
        font_size: over.font_size.unwrap_or(default.font_size),
    }
}

fn merge_line(default: LineStyleProps, over: LineStyleOverride) -> LineStyleProps {
    LineStyleProps {
        stroke: over.stroke.unwrap_or(default.stroke),
        stroke_width: over.stroke_width.unwrap_or(default.stroke_width),
    }
}

/// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` into an [`Hsla`].
pub fn parse_hex_color(hex: &str) -> Result<Hsla> {
    let raw = hex.trim().trim_start_matches('#');
    let expanded = match raw.len() {
        3 => {
            let mut s: String = raw.chars().flat_map(|c| [c, c]).collect();
            s.push_str("ff");
            s
        }
        6 => format!("{raw}ff"),
        8 => raw.to_string(),
        _ => bail!("invalid hex color {hex:?}"),
    };
    let value = u32::from_str_radix(&expanded, 16)?;
    Ok(gpui::rgba(value).into())
}
