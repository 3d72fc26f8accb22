use serde::{Deserialize, Serialize};

const LOG_EPS: f64 = 1e-20;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleKind {
    Linear,
    Power,
    Log,
}

impl Default for ScaleKind {
    fn default() -> Self {
        Self::Linear
    }
}

/// Domain -> pixel mapping for one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AxisScale {
    Linear {
        domain: (f64, f64),
        range: (f32, f32),
    },
    Power {
        domain: (f64, f64),
        range: (f32, f32),
        exponent: f64,
    },
    Log {
        domain: (f64, f64),
        range: (f32, f32),
    },
}

impl AxisScale {
    pub fn new_linear(domain: (f64, f64), range: (f32, f32)) -> Self {
        Self::Linear {
            domain: widen_degenerate(domain),
            range,
        }
    }

    pub fn new_power(domain: (f64, f64), range: (f32, f32), exponent: f64) -> Self {
        Self::Power {
            domain: widen_degenerate(domain),
            range,
            exponent: if exponent.is_finite() && exponent != 0.0 {
                exponent
            } else {
                1.0
            },
        }
    }

    pub fn new_log(domain: (f64, f64), range: (f32, f32)) -> Self {
        Self::Log {
            domain: widen_degenerate(domain),
            range,
        }
    }

    pub fn kind(&self) -> ScaleKind {
        match self {
            Self::Linear { .. } => ScaleKind::Linear,
            Self::Power { .. } => ScaleKind::Power,
            Self::Log { .. } => ScaleKind::Log,
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        match self {
            Self::Linear { domain, .. } | Self::Power { domain, .. } | Self::Log { domain, .. } => {
                *domain
            }
        }
    }

    pub fn range(&self) -> (f32, f32) {
        match self {
            Self::Linear { range, .. } | Self::Power { range, .. } | Self::Log { range, .. } => {
                *range
            }
        }
    }

    pub fn update_domain(&mut self, min: f64, max: f64) {
        let widened = widen_degenerate((min, max));
        match self {
            Self::Linear { domain, .. } | Self::Power { domain, .. } | Self::Log { domain, .. } => {
                *domain = widened;
            }
        }
    }

    pub fn update_range(&mut self, min: f32, max: f32) {
        match self {
            Self::Linear { range, .. } | Self::Power { range, .. } | Self::Log { range, .. } => {
                *range = (min, max);
            }
        }
    }

    pub fn map(&self, value: f64) -> f32 {
        let (d_min, d_max) = self.domain();
        let (r_min, r_max) = self.range();
        let t0 = self.transform(d_min);
        let t1 = self.transform(d_max);
        let frac = (self.transform(value) - t0) / (t1 - t0);
        let res = (r_min as f64 + frac * (r_max - r_min) as f64) as f32;
        if res.is_nan() || res.is_infinite() {
            0.0
        } else {
            res
        }
    }

    pub fn invert(&self, pixel: f32) -> f64 {
        let (d_min, d_max) = self.domain();
        let (r_min, r_max) = self.range();
        let frac = ((pixel - r_min) / (r_max - r_min)) as f64;
        let t0 = self.transform(d_min);
        let t1 = self.transform(d_max);
        let res = self.untransform(t0 + frac * (t1 - t0));
        if res.is_finite() {
            res
        } else {
            0.0
        }
    }

    /// Auto-selected tick values for this scale, targeting `count` ticks.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d_min, d_max) = self.domain();
        match self {
            Self::Linear { .. } | Self::Power { .. } => linear_ticks(d_min, d_max, count),
            Self::Log { .. } => log_ticks(d_min, d_max),
        }
    }

    pub fn descriptor(&self) -> ScaleDescriptor {
        let exponent = match self {
            Self::Power { exponent, .. } => Some(*exponent),
            _ => None,
        };
        ScaleDescriptor {
            kind: self.kind(),
            domain: self.domain(),
            range: self.range(),
            exponent,
        }
    }

    fn transform(&self, value: f64) -> f64 {
        match self {
            Self::Linear { .. } => value,
            Self::Power { exponent, .. } => value.signum() * value.abs().powf(*exponent),
            Self::Log { .. } => {
                if value >= 0.0 {
                    value.max(LOG_EPS).ln()
                } else {
                    -(-value).max(LOG_EPS).ln()
                }
            }
        }
    }

    fn untransform(&self, t: f64) -> f64 {
        match self {
            Self::Linear { .. } => t,
            Self::Power { exponent, .. } => t.signum() * t.abs().powf(1.0 / *exponent),
            Self::Log { domain, .. } => {
                if domain.0 >= 0.0 {
                    t.exp()
                } else {
                    -(-t).exp()
                }
            }
        }
    }
}

impl Default for AxisScale {
    fn default() -> Self {
        Self::new_linear((0.0, 1.0), (100.0, 0.0))
    }
}

/// Serializable canonical form of a scale, used to decide whether two
/// scales are the same mapping.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScaleDescriptor {
    pub kind: ScaleKind,
    pub domain: (f64, f64),
    pub range: (f32, f32),
    pub exponent: Option<f64>,
}

impl ScaleDescriptor {
    pub fn canonical(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

fn widen_degenerate(domain: (f64, f64)) -> (f64, f64) {
    let (mut min, mut max) = domain;
    if (max - min).abs() < f64::EPSILON {
        min -= 0.5;
        max += 0.5;
    }
    (min, max)
}

/// Tick spacing expressed either as a direct step or as an inverse
/// divisor. Sub-unit steps use the inverse form so endpoint values come
/// out exact (`i / 5` instead of `i * 0.2`).
#[derive(Clone, Copy, Debug)]
enum TickIncrement {
    Step(f64),
    Inverse(f64),
}

fn tick_increment(lo: f64, hi: f64, count: usize) -> Option<TickIncrement> {
    let step = (hi - lo) / count.max(1) as f64;
    if !step.is_finite() || step <= 0.0 {
        return None;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        Some(TickIncrement::Step(factor * 10f64.powf(power)))
    } else {
        Some(TickIncrement::Inverse(10f64.powf(-power) / factor))
    }
}

/// Step size for roughly `count` ticks over `[lo, hi]`, snapped to a
/// 1/2/5 decade multiple.
pub fn tick_step(lo: f64, hi: f64, count: usize) -> f64 {
    match tick_increment(lo, hi, count) {
        Some(TickIncrement::Step(step)) => step,
        Some(TickIncrement::Inverse(inverse)) => 1.0 / inverse,
        None => 0.0,
    }
}

/// Nice tick values inside `[start, stop]`, targeting `count` ticks.
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let (lo, hi, flipped) = if stop < start {
        (stop, start, true)
    } else {
        (start, stop, false)
    };
    let mut ticks: Vec<f64> = match tick_increment(lo, hi, count) {
        Some(TickIncrement::Step(step)) => {
            let first = (lo / step).ceil() as i64;
            let last = (hi / step).floor() as i64;
            (first..=last).map(|i| i as f64 * step).collect()
        }
        Some(TickIncrement::Inverse(inverse)) => {
            let first = (lo * inverse).ceil() as i64;
            let last = (hi * inverse).floor() as i64;
            (first..=last).map(|i| i as f64 / inverse).collect()
        }
        None => Vec::new(),
    };
    if flipped {
        ticks.reverse();
    }
    ticks
}

/// Tick values for a logarithmic domain that does not straddle zero.
///
/// Decade ticks, with mantissa fill when only a few decades are visible
/// so the result stays near the requested count. A zero endpoint is
/// clamped to a millionth of the far endpoint.
pub fn log_ticks(min: f64, max: f64) -> Vec<f64> {
    const TARGET: usize = 10;
    if max <= 0.0 {
        let mut ticks = log_ticks_positive(-max, -min, TARGET);
        for tick in &mut ticks {
            *tick = -*tick;
        }
        ticks.reverse();
        return ticks;
    }
    log_ticks_positive(min, max, TARGET)
}

fn log_ticks_positive(min: f64, max: f64, target: usize) -> Vec<f64> {
    if max <= 0.0 || !max.is_finite() {
        return Vec::new();
    }
    let lo = if min > 0.0 { min } else { max * 1e-6 };
    let lo_exp = lo.log10().floor() as i32;
    let hi_exp = max.log10().ceil() as i32;
    let span = (hi_exp - lo_exp).max(1);

    let in_domain = |v: f64| v >= lo * (1.0 - 1e-9) && v <= max * (1.0 + 1e-9);
    let mut ticks = Vec::new();
    if span <= 3 {
        // Few decades visible: fill with mantissa ticks, thinned to 1/2/5
        // over wider spans so the count stays near the target.
        let mantissas: &[i32] = if span <= 1 {
            &[1, 2, 3, 4, 5, 6, 7, 8, 9]
        } else {
            &[1, 2, 5]
        };
        for exp in lo_exp..=hi_exp {
            for &mantissa in mantissas {
                let v = mantissa as f64 * 10f64.powi(exp);
                if in_domain(v) {
                    ticks.push(v);
                }
            }
        }
    } else {
        let stride = ((span as usize + target - 1) / target).max(1) as i32;
        let mut exp = lo_exp;
        while exp <= hi_exp {
            let v = 10f64.powi(exp);
            if in_domain(v) {
                ticks.push(v);
            }
            exp += stride;
        }
    }
    ticks
}
