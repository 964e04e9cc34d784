use reliefcore::severity::{classify, severity_tier, SeverityTier};

#[test]
fn tier_boundaries_are_closed_on_lower_edge() {
    assert_eq!(severity_tier(3.999), SeverityTier::Low);
    assert_eq!(severity_tier(4.0), SeverityTier::Moderate);
    assert_eq!(severity_tier(5.499), SeverityTier::Moderate);
    assert_eq!(severity_tier(5.5), SeverityTier::High);
    assert_eq!(severity_tier(6.999), SeverityTier::High);
    assert_eq!(severity_tier(7.0), SeverityTier::Extreme);
}

#[test]
fn absurd_magnitudes_still_classify() {
    assert_eq!(severity_tier(-3.0), SeverityTier::Low);
    assert_eq!(severity_tier(f64::NEG_INFINITY), SeverityTier::Low);
    assert_eq!(severity_tier(42.0), SeverityTier::Extreme);
    assert_eq!(severity_tier(f64::INFINITY), SeverityTier::Extreme);
}

#[test]
fn classify_pairs_tier_with_weight() {
    let (tier, weight) = classify(6.2);
    assert_eq!(tier, SeverityTier::High);
    assert_eq!(weight, 0.8);

    let (tier, weight) = classify(1.0);
    assert_eq!(tier, SeverityTier::Low);
    assert_eq!(weight, 0.2);
}

#[test]
fn weight_grows_with_tier() {
    let weights: Vec<f64> = [2.0, 4.5, 6.0, 8.0].iter().map(|m| classify(*m).1).collect();
    assert!(weights.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn multipliers_follow_tier_table() {
    assert_eq!(SeverityTier::Low.shelter_multiplier(), 0.3);
    assert_eq!(SeverityTier::Moderate.shelter_multiplier(), 0.6);
    assert_eq!(SeverityTier::Extreme.shelter_multiplier(), 1.0);
    assert_eq!(SeverityTier::High.ambulance_multiplier(), 0.8);
    assert_eq!(SeverityTier::Extreme.drone_multiplier(), 0.8);
    assert_eq!(SeverityTier::Moderate.drone_multiplier(), 0.5);
}
