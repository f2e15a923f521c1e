//! Band and linear scales for the histogram axes.

/// Approximate number of ticks requested from a linear scale.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Maps an ordered set of category labels onto evenly spaced pixel bands.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// Builds a centered band scale with equal inner and outer padding.
    pub fn new(domain: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        let (r0, r1) = range;
        let n = domain.len() as f64;
        let padding = padding.clamp(0.0, 1.0);

        let step = (r1 - r0) / (n - padding + padding * 2.0).max(1.0);
        let start = r0 + (r1 - r0 - step * (n - padding)) * 0.5;
        let bandwidth = step * (1.0 - padding);

        Self {
            domain,
            start,
            step,
            bandwidth,
        }
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    /// Left edge of the band at `index`
    pub fn position_at(&self, index: usize) -> f64 {
        self.start + self.step * index as f64
    }

    /// Left edge of the band for `key`, if it is part of the domain
    pub fn position(&self, key: &str) -> Option<f64> {
        self.domain
            .iter()
            .position(|k| k == key)
            .map(|i| self.position_at(i))
    }

    /// Center of the band at `index`, where axis ticks sit
    pub fn center_at(&self, index: usize) -> f64 {
        self.position_at(index) + self.bandwidth / 2.0
    }
}

/// Continuous linear mapping from a value domain to a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }

    /// Extends the domain outward so both ends land on tick boundaries.
    pub fn nice(mut self, count: usize) -> Self {
        let (mut start, mut stop) = self.domain;
        let reversed = stop < start;
        if reversed {
            std::mem::swap(&mut start, &mut stop);
        }

        let mut previous: Option<f64> = None;
        for _ in 0..10 {
            let step = tick_increment(start, stop, count);
            if previous == Some(step) {
                break;
            }
            if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            previous = Some(step);
        }

        self.domain = if reversed { (stop, start) } else { (start, stop) };
        self
    }

    /// Round tick values covering the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (mut start, mut stop) = self.domain;
        if stop < start {
            std::mem::swap(&mut start, &mut stop);
        }
        if start == stop || count == 0 {
            return vec![start];
        }

        let step = tick_increment(start, stop, count);
        if !step.is_finite() || step == 0.0 {
            return Vec::new();
        }

        if step > 0.0 {
            let first = (start / step).ceil() as i64;
            let last = (stop / step).floor() as i64;
            (first..=last).map(|i| i as f64 * step).collect()
        } else {
            let inverse = -step;
            let first = (start * inverse).ceil() as i64;
            let last = (stop * inverse).floor() as i64;
            (first..=last).map(|i| i as f64 / inverse).collect()
        }
    }

    /// Tick spacing, positive for whole steps and the reciprocal of the
    /// negated step for fractional ones.
    pub fn tick_step(&self, count: usize) -> f64 {
        let (a, b) = self.domain;
        tick_increment(a.min(b), a.max(b), count)
    }
}

/// Power-of-ten tick spacing snapped to 1, 2, 5 or 10.
///
/// Fractional spacings are returned as `-1/step` so integer arithmetic stays
/// exact when generating ticks.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let e10 = 50f64.sqrt();
    let e5 = 10f64.sqrt();
    let e2 = 2f64.sqrt();

    let step = (stop - start) / count.max(1) as f64;
    if step <= 0.0 || !step.is_finite() {
        return 0.0;
    }

    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= e10 {
        10.0
    } else if error >= e5 {
        5.0
    } else if error >= e2 {
        2.0
    } else {
        1.0
    };

    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}

/// Formats a tick value with as many decimals as the spacing needs and
/// thousands separators on the integer part.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step < 0.0 {
        (-step).log10().ceil().max(0.0) as usize
    } else {
        0
    };

    let formatted = format!("{:.*}", decimals, value);
    let (sign, digits) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer, fraction) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match fraction {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}
