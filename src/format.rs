//! # Value Formatting
//!
//! Text shown to the user for delay times, offsets and pan positions. The
//! same helpers feed the host's parameter display (through the
//! `value_to_string` / `string_to_value` hooks in [`crate::params`]) and
//! the visualizer's delay labels, so the two never disagree.

use std::sync::Arc;

/// Format `value` rounded to `figures` significant figures.
///
/// The number of digits before the decimal point is taken as
/// `ceil(log10(|value|))`, the value is rounded at that precision and then
/// printed with as many decimals as the rounding kept:
///
/// ```text
/// 1234.0 → "1200"     12.34 → "12"     1.234 → "1.2"     0.0123 → "0.012"
/// ```
///
/// Exact powers of ten land one digit short in the `log10` estimate, so
/// `1.0` prints as `"1.00"`.
///
/// Zero has no leading digit to count from and prints as a bare `"0"`, with
/// no padding decimals. Non-finite values and a request for zero figures
/// print the same.
pub fn significant_figures(value: f32, figures: u32) -> String {
    if value == 0.0 || !value.is_finite() || figures == 0 {
        return "0".to_owned();
    }

    let value = f64::from(value);
    let digits_before_point = value.abs().log10().ceil() as i32;
    let shift = figures as i32 - digits_before_point;
    let factor = 10f64.powi(shift);
    let rounded = (value * factor).round() / factor;

    format!("{:.*}", shift.max(0) as usize, rounded)
}

/// A delay time in milliseconds as the visualizer labels show it: two
/// significant figures with no space before the unit.
pub fn delay_label(delay_ms: f32) -> String {
    format!("{}ms", significant_figures(delay_ms, 2))
}

/// Display offsets within this distance of the centre as "C".
const CENTRE_EPSILON: f32 = 0.005;

/// `0.0..=1.0` offset → `"L 100%"` … `"C"` … `"R 100%"`.
///
/// The percentage is how much longer that side's delay is than the base
/// delay time.
pub fn v2s_offset() -> Arc<dyn Fn(f32) -> String + Send + Sync> {
    Arc::new(|value| {
        if (value - 0.5).abs() < CENTRE_EPSILON {
            "C".to_owned()
        } else if value < 0.5 {
            format!("L {:.0}%", (1.0 - value * 2.0) * 100.0)
        } else {
            format!("R {:.0}%", (value - 0.5) * 200.0)
        }
    })
}

/// Parse the output of [`v2s_offset()`] back into `0.0..=1.0`.
pub fn s2v_offset() -> Arc<dyn Fn(&str) -> Option<f32> + Send + Sync> {
    Arc::new(|string| {
        let (side, amount) = parse_side(string)?;
        let amount = (amount / 100.0).clamp(0.0, 1.0);
        Some(match side {
            Side::Centre => 0.5,
            Side::Left => 0.5 - amount / 2.0,
            Side::Right => 0.5 + amount / 2.0,
        })
    })
}

/// `0.0..=1.0` pan → `"L 50"` … `"C"` … `"R 50"`.
pub fn v2s_pan() -> Arc<dyn Fn(f32) -> String + Send + Sync> {
    Arc::new(|value| {
        let position = (value - 0.5) * 100.0;
        if position.abs() < CENTRE_EPSILON * 100.0 {
            "C".to_owned()
        } else if position < 0.0 {
            format!("L {:.0}", -position)
        } else {
            format!("R {:.0}", position)
        }
    })
}

/// Parse the output of [`v2s_pan()`] back into `0.0..=1.0`.
pub fn s2v_pan() -> Arc<dyn Fn(&str) -> Option<f32> + Send + Sync> {
    Arc::new(|string| {
        let (side, amount) = parse_side(string)?;
        let amount = amount.clamp(0.0, 50.0) / 100.0;
        Some(match side {
            Side::Centre => 0.5,
            Side::Left => 0.5 - amount,
            Side::Right => 0.5 + amount,
        })
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Centre,
    Right,
}

/// Split `"L 40%"`-style input into a side and a magnitude. A trailing `%`
/// is ignored.
fn parse_side(string: &str) -> Option<(Side, f32)> {
    let string = string.trim();
    if ["c", "centre", "center"]
        .iter()
        .any(|word| string.eq_ignore_ascii_case(word))
    {
        return Some((Side::Centre, 0.0));
    }

    let mut chars = string.chars();
    let side = match chars.next()?.to_ascii_uppercase() {
        'L' => Side::Left,
        'R' => Side::Right,
        _ => return None,
    };
    let amount = chars.as_str().trim().trim_end_matches('%').trim();
    let amount: f32 = amount.parse().ok()?;

    Some((side, amount))
}
