// File: crates/scatter-core/src/grid.rs
// Summary: Tick layout helpers ("nice" steps and labels).

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Upper bound on the number of ticks a caller may request.
pub const MAX_TICK_COUNT: usize = 1_000;

/// Step from {1, 2, 5} x 10^k closest to splitting `[start, stop]` into `count` parts.
///
/// Returns `None` when the span or the count is degenerate, or when the step
/// is too small for its reciprocal to be finite. `count` is capped at
/// [`MAX_TICK_COUNT`].
pub fn tick_step(start: f64, stop: f64, count: usize) -> Option<f64> {
    let span = (stop - start).abs();
    if count == 0 || !span.is_finite() || span == 0.0 {
        return None;
    }
    let raw = span / count.min(MAX_TICK_COUNT) as f64;
    let power = raw.log10().floor();
    let error = raw / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    let step = factor * 10f64.powf(power);
    (step.is_finite() && step > 0.0 && (1.0 / step).is_finite()).then_some(step)
}

/// Multiples of [`tick_step`] within `[start, stop]`, ascending.
///
/// A zero-width interval, or one too narrow for a representable step, yields
/// its lower bound; `count == 0` yields nothing.
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    let (lo, hi) = if start <= stop { (start, stop) } else { (stop, start) };
    let Some(step) = tick_step(lo, hi, count) else { return vec![lo] };

    // Dividing by the inverse keeps sub-unit steps like 0.1 exact.
    let inv = if step < 1.0 { (1.0 / step).round() } else { 0.0 };
    let (f0, f1) = if inv > 0.0 {
        ((lo * inv).ceil(), (hi * inv).floor())
    } else {
        ((lo / step).ceil(), (hi / step).floor())
    };
    // A usable step gives about `count` ticks.
    let limit = (count.min(MAX_TICK_COUNT) * 10) as f64;
    if !(f0.is_finite() && f1.is_finite()) || f1 - f0 > limit {
        return vec![lo];
    }
    let (i0, i1) = (f0 as i64, f1 as i64);
    if inv > 0.0 {
        (i0..=i1).map(|i| i as f64 / inv).collect()
    } else {
        (i0..=i1).map(|i| i as f64 * step).collect()
    }
}

/// Format a tick value with the decimals its step needs and thousands separators.
pub fn format_tick(value: f64, step: Option<f64>) -> String {
    let decimals = match step {
        Some(s) if s < 1.0 => (-s.log10().floor()).max(0.0) as usize,
        _ => 0,
    };
    let text = format!("{:.*}", decimals, value);
    let (sign, body) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match body.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (body, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    // "-0" reads badly on an axis.
    let sign = if grouped.chars().all(|c| c == '0' || c == ',') && frac_part.map_or(true, |f| f.chars().all(|c| c == '0')) {
        ""
    } else {
        sign
    };
    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}
