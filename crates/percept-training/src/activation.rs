use crate::dataset::Bipolar;

/// Bipolar step function.
///
/// `net == 0` classifies as `+1`; the tie-break is asymmetric on purpose so
/// the all-zero weight vector answers `+1` for every example.
pub fn bipolar_step(net: f64) -> Bipolar {
    if net >= 0.0 { Bipolar::Positive } else { Bipolar::Negative }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_net_is_positive() {
        assert_eq!(bipolar_step(0.0), Bipolar::Positive);
        assert_eq!(bipolar_step(-0.0), Bipolar::Positive);
    }

    #[test]
    fn test_sign_of_net() {
        assert_eq!(bipolar_step(0.2), Bipolar::Positive);
        assert_eq!(bipolar_step(-1e-12), Bipolar::Negative);
        assert_eq!(bipolar_step(-3.0), Bipolar::Negative);
    }
}
