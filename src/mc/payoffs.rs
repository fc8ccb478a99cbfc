//! Option Payoff Functions
//!
//! A European call pays `max(S_T - K, 0)` at maturity: the right, not the
//! obligation, to buy at strike K. Only the terminal price matters, so the
//! payoff is defined on a single price.

/// European call option: max(S_T - K, 0)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EuropeanCall {
    pub k: f64,
}

impl EuropeanCall {
    pub fn new(k: f64) -> Self {
        EuropeanCall { k }
    }

    /// Payoff for a terminal price. Never negative.
    pub fn payoff(&self, s_t: f64) -> f64 {
        (s_t - self.k).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_payoff() {
        let call = EuropeanCall::new(105.0);
        assert_eq!(call.payoff(120.0), 15.0);
        assert_eq!(call.payoff(105.0), 0.0);
        assert_eq!(call.payoff(80.0), 0.0);
    }
}
