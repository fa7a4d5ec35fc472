//! Signal quality classification.

/// A threshold table. Limits must be in descending order.
pub type Rules = [(i64, &'static str); 4];

pub const EXCELLENT: &'static str = "EXCELLENT";
pub const VERY_GOOD: &'static str = "VERY GOOD";
pub const GOOD: &'static str = "GOOD";
pub const FAIR: &'static str = "FAIR";
pub const POOR: &'static str = "POOR";

pub const SIGNAL: Rules = [(90, EXCELLENT), (75, VERY_GOOD), (60, GOOD), (40, FAIR)];
pub const SINR: Rules = [(20, EXCELLENT), (13, VERY_GOOD), (7, GOOD), (0, FAIR)];
pub const RSRQ: Rules = [(10, EXCELLENT), (8, VERY_GOOD), (6, GOOD), (4, FAIR)];
pub const RSSI: Rules = [(70, EXCELLENT), (60, VERY_GOOD), (50, GOOD), (40, FAIR)];
pub const CQI: Rules = [(13, EXCELLENT), (11, VERY_GOOD), (8, GOOD), (6, FAIR)];

/// Returns the label of the first rule whose limit is less than or equal to the value.
///
/// Values that are not integers or below every limit are [`POOR`].
pub fn quality(value: &str, rules: &[(i64, &'static str)]) -> &'static str {
    let value = match value.trim().parse::<i64>() {
        Err(_) => return POOR,
        Ok(value) => value,
    };
    for (limit, label) in rules {
        if value >= *limit {
            return *label;
        }
    }
    POOR
}
