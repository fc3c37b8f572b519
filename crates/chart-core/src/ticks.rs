// File: crates/chart-core/src/ticks.rs
// Summary: Human-round tick steps, tick values and label precision for linear scales.

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Integer tick span `[i1, i2]` and signed increment.
/// A negative increment means "divide by |inc|" (sub-unit steps), which keeps
/// values like 0.1 exact.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 { 10.0 } else if error >= E5 { 5.0 } else if error >= E2 { 2.0 } else { 1.0 };
    let (i1, i2, inc) = if power < 0.0 {
        let m = 10f64.powf(-power) / factor;
        let mut i1 = (start * m).round();
        let mut i2 = (stop * m).round();
        if i1 / m < start { i1 += 1.0; }
        if i2 / m > stop { i2 -= 1.0; }
        (i1, i2, -m)
    } else {
        let m = 10f64.powf(power) * factor;
        let mut i1 = (start / m).round();
        let mut i2 = (stop / m).round();
        if i1 * m < start { i1 += 1.0; }
        if i2 * m > stop { i2 -= 1.0; }
        (i1, i2, m)
    };
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Signed tick increment for `[start, stop]` split into about `count` steps.
/// Positive values are the step itself; negative values are `-1 / step`.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    tick_spec(start, stop, count as f64).2
}

/// Absolute tick step for `[start, stop]` (order-insensitive).
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let inc = tick_increment(lo, hi, count);
    if inc < 0.0 { -1.0 / inc } else { inc }
}

/// About `count` round values inside `[start, stop]`, in the same direction
/// as the input.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || start.is_nan() || stop.is_nan() { return Vec::new(); }
    if start == stop { return vec![start]; }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_spec(lo, hi, count as f64);
    if !(i2 >= i1) { return Vec::new(); }
    let n = (i2 - i1) as usize + 1;
    let mut out: Vec<f64> = (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect();
    if reverse { out.reverse(); }
    out
}

/// Decimal places needed to print multiples of `step` exactly.
pub fn precision_fixed(step: f64) -> usize {
    let step = step.abs();
    if step == 0.0 || !step.is_finite() { return 0; }
    (-step.log10().floor()).max(0.0) as usize
}

/// Format `value` with fixed `precision`, normalising negative zero.
pub fn format_fixed(value: f64, precision: usize) -> String {
    let v = if value == 0.0 { 0.0 } else { value };
    format!("{:.*}", precision, v)
}
