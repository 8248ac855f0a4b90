//! Log-probability to probability conversion.

use distill_core::models::{TokenDistribution, TokenLogprob};

/// Rescale to unit mass when the total strays from 1.0 by more than `tolerance`.
///
/// A distribution with no positive mass is returned unchanged.
pub fn normalize_distribution(dist: &mut TokenDistribution, tolerance: f64) {
    let total: f64 = dist.values().sum();
    if total > 0.0 && (total - 1.0).abs() > tolerance {
        for p in dist.values_mut() {
            *p /= total;
        }
    }
}

/// `exp(logprob)`, or `None` for NaN and positive infinity.
pub fn probability(logprob: f64) -> Option<f64> {
    let p = logprob.exp();
    p.is_finite().then_some(p)
}

/// Distribution at one position: the provider's alternatives when present,
/// otherwise the sampled token alone. Non-finite log-probabilities are ignored.
pub fn token_distribution(position: &TokenLogprob, tolerance: f64) -> TokenDistribution {
    let mut dist = TokenDistribution::new();
    for alt in &position.top_logprobs {
        if let Some(p) = probability(alt.logprob) {
            dist.entry(alt.token.clone()).or_insert(p);
        }
    }
    if !dist.contains_key(&position.token) {
        if let Some(p) = probability(position.logprob) {
            dist.insert(position.token.clone(), p);
        }
    }
    normalize_distribution(&mut dist, tolerance);
    dist
}

#[cfg(test)]
mod tests {
    use super::*;
    use distill_core::models::TopLogprob;

    fn alt(token: &str, p: f64) -> TopLogprob {
        TopLogprob {
            token: token.to_string(),
            logprob: p.ln(),
        }
    }

    #[test]
    fn closed_alternative_set_is_kept() {
        let pos = TokenLogprob {
            token: "yes".into(),
            logprob: 0.7f64.ln(),
            top_logprobs: vec![alt("yes", 0.7), alt("no", 0.3)],
        };
        let d = token_distribution(&pos, 1e-3);
        assert!((d["yes"] - 0.7).abs() < 1e-9);
        assert!((d["no"] - 0.3).abs() < 1e-9);
    }

    #[test]
    fn truncated_alternatives_are_renormalized() {
        let pos = TokenLogprob {
            token: "a".into(),
            logprob: 0.4f64.ln(),
            top_logprobs: vec![alt("a", 0.4), alt("b", 0.4)],
        };
        let d = token_distribution(&pos, 1e-3);
        assert!((d["a"] - 0.5).abs() < 1e-9);
        assert!((d.values().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn sampled_token_alone() {
        let pos = TokenLogprob {
            token: "x".into(),
            logprob: -2.0,
            top_logprobs: vec![],
        };
        let d = token_distribution(&pos, 1e-3);
        assert_eq!(d.len(), 1);
        assert!((d["x"] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn within_tolerance_is_untouched() {
        let mut d = TokenDistribution::from([("a".to_string(), 0.6), ("b".to_string(), 0.3995)]);
        normalize_distribution(&mut d, 1e-3);
        assert_eq!(d["a"], 0.6);
    }
}
