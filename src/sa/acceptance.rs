//! Metropolis acceptance criterion.

/// Probability of moving from a solution of `current_cost` to one of `new_cost`.
///
/// Strict improvements are always taken (probability 1). Otherwise the
/// probability is `exp((current_cost - new_cost) / temperature)`, which is 1
/// for equal costs and decays with the cost increase and with falling
/// temperature. Underflow and non-finite intermediate values clamp to 0.
///
/// # Examples
///
/// ```
/// use u_binpack::sa::acceptance_probability;
///
/// assert_eq!(acceptance_probability(5.0, 4.0, 10.0), 1.0);
/// assert_eq!(acceptance_probability(5.0, 5.0, 10.0), 1.0);
/// assert!(acceptance_probability(5.0, 6.0, 10.0) < 1.0);
/// ```
///
/// # Reference
///
/// Metropolis et al. (1953), "Equation of State Calculations by Fast
/// Computing Machines"
pub fn acceptance_probability(current_cost: f64, new_cost: f64, temperature: f64) -> f64 {
    if new_cost < current_cost {
        return 1.0;
    }
    let probability = ((current_cost - new_cost) / temperature).exp();
    if probability.is_finite() {
        probability.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
