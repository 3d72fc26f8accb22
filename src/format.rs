use std::fmt;
use std::sync::Arc;

const SI_PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

/// How tick values are turned into label text.
///
/// A `Spec` string is compiled into a formatting function when the axis is
/// built; anything that fails to compile falls back to plain numeric output.
#[derive(Clone)]
pub enum TickFormat {
    /// d3-style format specifier, e.g. `".2s"`, `".1f"`, `".0%"`, `"d"`.
    Spec(String),
    /// Custom formatter callback.
    Custom(Arc<dyn Fn(f64) -> String + Send + Sync>),
    /// Plain numeric fallback.
    Plain,
}

impl Default for TickFormat {
    fn default() -> Self {
        Self::Spec(".2s".to_string())
    }
}

impl fmt::Debug for TickFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spec(spec) => write!(f, "TickFormat::Spec({:?})", spec),
            Self::Custom(_) => write!(f, "TickFormat::Custom(..)"),
            Self::Plain => write!(f, "TickFormat::Plain"),
        }
    }
}

impl TickFormat {
    /// Compile into a reusable formatter.
    pub fn formatter(&self) -> TickFormatter {
        match self {
            Self::Spec(spec) => TickFormatter(Kind::Compiled(
                parse_spec(spec).unwrap_or(CompiledFormat::Plain),
            )),
            Self::Custom(callback) => TickFormatter(Kind::Custom(callback.clone())),
            Self::Plain => TickFormatter(Kind::Compiled(CompiledFormat::Plain)),
        }
    }
}

/// A compiled tick label formatter.
#[derive(Clone)]
pub struct TickFormatter(Kind);

#[derive(Clone)]
enum Kind {
    Compiled(CompiledFormat),
    Custom(Arc<dyn Fn(f64) -> String + Send + Sync>),
}

impl TickFormatter {
    /// SI-prefix notation with the given number of significant digits.
    pub fn si(significant: usize) -> Self {
        Self(Kind::Compiled(CompiledFormat::Si { significant }))
    }

    pub fn format(&self, value: f64) -> String {
        match &self.0 {
            Kind::Compiled(compiled) => compiled.apply(value),
            Kind::Custom(callback) => callback(value),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum CompiledFormat {
    Si { significant: usize },
    Fixed { decimals: usize },
    Exponent { decimals: usize },
    Percent { decimals: usize },
    Integer,
    Plain,
}

impl CompiledFormat {
    fn apply(self, value: f64) -> String {
        match self {
            Self::Si { significant } => format_si(value, significant),
            Self::Fixed { decimals } => format!("{:.*}", decimals, value),
            Self::Exponent { decimals } => format!("{:.*e}", decimals, value),
            Self::Percent { decimals } => format!("{:.*}%", decimals, value * 100.0),
            Self::Integer => format!("{}", value.round() as i64),
            Self::Plain => format_plain(value),
        }
    }
}

/// Parse a `[.precision]type` specifier. Returns `None` for anything the
/// compiler does not understand.
fn parse_spec(spec: &str) -> Option<CompiledFormat> {
    let spec = spec.trim();
    if spec.is_empty() {
        return None;
    }

    let (precision, ty) = match spec.strip_prefix('.') {
        Some(rest) => {
            let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
            if digits.is_empty() {
                return None;
            }
            let ty = &rest[digits.len()..];
            (Some(digits.parse::<usize>().ok()?), ty)
        }
        None => (None, spec),
    };

    match ty {
        "s" => Some(CompiledFormat::Si {
            significant: precision.unwrap_or(6).max(1),
        }),
        "f" => Some(CompiledFormat::Fixed {
            decimals: precision.unwrap_or(6),
        }),
        "e" => Some(CompiledFormat::Exponent {
            decimals: precision.unwrap_or(6),
        }),
        "%" => Some(CompiledFormat::Percent {
            decimals: precision.unwrap_or(6),
        }),
        "d" => {
            if precision.is_some() {
                return None;
            }
            Some(CompiledFormat::Integer)
        }
        _ => None,
    }
}

fn ilog10(value: f64) -> i32 {
    value.abs().log10().floor() as i32
}

/// SI-prefix formatting: scale into the nearest power-of-1000 band and keep
/// the requested number of significant digits.
fn format_si(value: f64, significant: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let significant = significant.max(1) as i32;
    if value == 0.0 {
        return format!("{:.*}", (significant - 1) as usize, 0.0);
    }

    let mut exp3 = (value.abs().log10() / 3.0).floor() as i32;
    exp3 = exp3.clamp(-8, 8);
    let mut scaled = value / 10f64.powi(exp3 * 3);

    let mut decimals = significant - 1 - ilog10(scaled);
    let factor = 10f64.powi(decimals);
    scaled = (scaled * factor).round() / factor;

    // Rounding can carry into the next band (999.7 -> 1000). The tolerant
    // threshold absorbs division noise from negative-decimals rounding.
    if scaled.abs() >= 1000.0 * (1.0 - 1e-9) && exp3 < 8 {
        exp3 += 1;
        scaled /= 1000.0;
        decimals = significant - 1 - ilog10(scaled);
    }

    format!(
        "{:.*}{}",
        decimals.max(0) as usize,
        scaled,
        SI_PREFIXES[(exp3 + 8) as usize]
    )
}

/// Fallback used when no usable specifier or callback is configured.
fn format_plain(value: f64) -> String {
    if value.abs() < 0.001 && value.abs() > 0.0 {
        format!("{:.4}", value)
    } else if value.abs() > 1000.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}
