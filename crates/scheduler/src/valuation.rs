//! Discounted lifetime energy of a deployed plant.

use crate::EconomicConfig;

/// Present value, in MWh, of one plant deployed in `deployment_year`.
///
/// The deployment year is truncated to a calendar year. Only operating
/// years strictly after `current_year` count, each discounted back to
/// `current_year`. A plant that is never deployed (non-finite year) is
/// worth nothing.
pub fn discounted_mwh(deployment_year: f64, economics: &EconomicConfig) -> f64 {
    if !deployment_year.is_finite() {
        return 0.0;
    }

    let annual = economics.annual_output_mwh();
    let growth = 1.0 + economics.discount_rate;
    let now = i64::from(economics.current_year);
    let start = deployment_year.trunc() as i64;

    (0..i64::from(economics.years_of_operation))
        .map(|i| start + i)
        .filter(|&year| year > now)
        .map(|year| annual / growth.powf((year - now) as f64))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_deployed_is_worthless() {
        let economics = EconomicConfig::new(2030);
        assert_eq!(discounted_mwh(f64::INFINITY, &economics), 0.0);
        assert_eq!(discounted_mwh(f64::NAN, &economics), 0.0);
    }

    #[test]
    fn test_later_deployment_is_worth_less() {
        let economics = EconomicConfig::new(2030);
        let early = discounted_mwh(2035.0, &economics);
        let later = discounted_mwh(2040.0, &economics);
        assert!(early > later);
        assert!(later > 0.0);
    }

    #[test]
    fn test_fractional_year_is_truncated() {
        let economics = EconomicConfig::new(2030);
        assert_eq!(
            discounted_mwh(2035.9, &economics),
            discounted_mwh(2035.0, &economics)
        );
    }

    #[test]
    fn test_only_future_years_count() {
        let economics = EconomicConfig::new(2030).with_years_of_operation(1);
        assert_eq!(discounted_mwh(2030.0, &economics), 0.0);

        let next_year = discounted_mwh(2031.0, &economics);
        assert!((next_year - 7_884_000.0 / 1.05).abs() < 1e-6);
    }
}
