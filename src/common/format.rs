//! Number rendering and text cleanup shared by the response builders and the
//! geo lookup key.

/// Conversion factor from kilometers to statute miles.
const KM_TO_MILES: f64 = 0.621_371;

/// Retitled water body names, applied in order. The plain `PACIFIC OCEAN` and
/// `ATLANTIC OCEAN` entries must stay behind their `NORTH`/`SOUTH` variants.
const WATER_NAME_CLEANUP: [(&str, &str); 11] = [
    ("ARCTIC OCEAN", "Arctic Ocean"),
    ("SOUTHERN OCEAN", "Southern Ocean"),
    ("NORTH ATLANTIC OCEAN", "North Atlantic Ocean"),
    ("NORTH PACIFIC OCEAN", "North Pacific Ocean"),
    ("SOUTH PACIFIC OCEAN", "South Pacific Ocean"),
    ("INDIAN OCEAN", "Indian Ocean"),
    ("SOUTH ATLANTIC OCEAN", "South Atlantic Ocean"),
    ("PACIFIC OCEAN", "Pacific Ocean"),
    ("ATLANTIC OCEAN", "Atlantic Ocean"),
    ("Caribbean  Sea", "Caribbean Sea"),
    ("Tasman  Sea", "Tasman Sea"),
];

/// Converts a distance (or a per-hour speed) from kilometers to miles.
pub fn kilometers_to_miles(kilometers: f64) -> f64 { kilometers * KM_TO_MILES }

/// Rounds half away from zero to `decimals` places. Negative zero collapses to `0.0`.
/// Used for lookup keys.
#[allow(clippy::cast_possible_wrap)]
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Rounds half up (toward positive infinity) to `decimals` places, the rule
/// used for every figure in spoken text. `-41.5` rounds to `-41`.
#[allow(clippy::cast_possible_wrap)]
pub fn round_half_up(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale + 0.5).floor() / scale;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// [`round_half_up`] to a whole number.
#[allow(clippy::cast_possible_truncation)]
pub fn round_whole(value: f64) -> i64 { round_half_up(value, 0) as i64 }

/// Rounds half up to a whole number and inserts `,` thousands separators.
///
/// # Examples
/// `1_234_567.4` renders as `"1,234,567"`, `-1234.0` as `"-1,234"`.
pub fn format_number(value: f64) -> String {
    let rounded = round_whole(value);
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Retitles all-caps or double-spaced water body names. Names not in the
/// cleanup table are returned unchanged.
pub fn clean_water(name: &str) -> String {
    WATER_NAME_CLEANUP
        .iter()
        .fold(name.to_string(), |text, (raw, clean)| text.replacen(raw, clean, 1))
}
