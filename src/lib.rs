//! gpui_axis crate: a vertical axis widget for GPUI chart rows

pub mod axis_renderer;
pub mod config;
pub mod error;
pub mod format;
pub mod scales;
pub mod scene;
pub mod style;

pub use axis_renderer::AxisView;
pub use config::{AxisAlign, AxisConfig, RenderKey};
pub use error::AxisError;
pub use format::{TickFormat, TickFormatter};
pub use scales::{AxisScale, ScaleDescriptor, ScaleKind};
pub use scene::{AxisScene, TickMark, TitleLabel};
pub use style::{parse_hex_color, resolve_style, AxisStyle, AxisStyleOverride};
