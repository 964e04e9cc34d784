pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Weighted mean, or `None` when the weights do not sum to a positive finite value.
pub fn weighted_mean(values: &[f64], weights: &[f64]) -> Option<f64> {
    if values.is_empty() || values.len() != weights.len() {
        return None;
    }
    let total_weight: f64 = weights.iter().sum();
    if !total_weight.is_finite() || total_weight <= 0.0 {
        return None;
    }
    let weighted: f64 = values
        .iter()
        .zip(weights)
        .map(|(value, weight)| value * weight)
        .sum();
    Some(weighted / total_weight)
}

/// Truncates toward zero into an unsigned quantity. Negative and NaN inputs
/// saturate to zero.
pub fn truncate_quantity(value: f64) -> u64 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.trunc() as u64
}

/// `min(100, floor(100 * part / max(1, whole)))`.
pub fn capped_percentage(part: u64, whole: u64) -> u8 {
    let pct = part.saturating_mul(100) / whole.max(1);
    pct.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_mean_rejects_zero_weights() {
        assert_eq!(weighted_mean(&[1.0, 2.0], &[0.0, 0.0]), None);
        assert_eq!(weighted_mean(&[1.0, 2.0], &[1.0]), None);
    }

    #[test]
    fn weighted_mean_favours_heavier_entries() {
        let value = weighted_mean(&[100.0, 200.0], &[1.0, 3.0]).unwrap_or_default();
        assert!((value - 175.0).abs() < 1e-9);
    }

    #[test]
    fn truncation_saturates_negatives() {
        assert_eq!(truncate_quantity(-4.2), 0);
        assert_eq!(truncate_quantity(f64::NAN), 0);
        assert_eq!(truncate_quantity(12.9), 12);
    }

    #[test]
    fn truncation_never_rounds_up() {
        assert_eq!(truncate_quantity(5999.9999995), 5999);
        assert_eq!(truncate_quantity(0.9999995), 0);
        assert_eq!(truncate_quantity(6000.0), 6000);
    }

    #[test]
    fn percentage_is_capped() {
        assert_eq!(capped_percentage(500, 100), 100);
        assert_eq!(capped_percentage(1, 3), 33);
        assert_eq!(capped_percentage(0, 0), 0);
    }
}
