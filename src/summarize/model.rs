//! Unigram probability table.
//!
//! The table starts as relative token frequencies, has its invalid tokens
//! zeroed and renormalized once, and is then decayed in place after every
//! selection round. Decay does not renormalize: after the first round the
//! values are comparative weights, not a distribution.

use crate::errors::SummarizeError;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProbabilityTable {
    probs: FxHashMap<String, f64>,
}

impl ProbabilityTable {
    /// Relative frequency of every token in `tokens`.
    pub fn build<I, S>(tokens: I) -> Result<Self, SummarizeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        let mut total = 0usize;
        for tok in tokens {
            *counts.entry(tok.as_ref().to_string()).or_insert(0) += 1;
            total += 1;
        }
        if total == 0 {
            return Err(SummarizeError::EmptyCorpus);
        }
        let total = total as f64;
        let probs = counts
            .into_iter()
            .map(|(tok, n)| (tok, n as f64 / total))
            .collect();
        Ok(Self { probs })
    }

    /// Zeroes every token for which `is_invalid` holds and rescales the
    /// remaining mass to 1.0.
    pub fn mask_invalid<F>(mut self, is_invalid: F) -> Result<Self, SummarizeError>
    where
        F: Fn(&str) -> bool,
    {
        for (tok, p) in self.probs.iter_mut() {
            if is_invalid(tok) {
                *p = 0.0;
            }
        }
        let mass = self.total();
        if mass <= 0.0 {
            return Err(SummarizeError::NoValidTokens {
                distinct: self.probs.len(),
            });
        }
        for p in self.probs.values_mut() {
            *p /= mass;
        }
        Ok(self)
    }

    /// Raises each distinct token of `tokens` to the power `2 * count`,
    /// where `count` is its multiplicity in `tokens`. Tokens missing from
    /// the table are ignored.
    pub fn decay<S: AsRef<str>>(&mut self, tokens: &[S]) {
        let mut counts: FxHashMap<&str, i32> = FxHashMap::default();
        for tok in tokens {
            *counts.entry(tok.as_ref()).or_insert(0) += 1;
        }
        for (tok, n) in counts {
            if let Some(p) = self.probs.get_mut(tok) {
                *p = p.powi(2 * n);
            }
        }
    }

    /// Probability of `token`; tokens never seen count as 0.0.
    pub fn get(&self, token: &str) -> f64 {
        self.probs.get(token).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.probs.contains_key(token)
    }

    pub fn total(&self) -> f64 {
        self.probs.values().sum()
    }

    pub fn len(&self) -> usize {
        self.probs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn words(s: &str) -> Vec<&str> {
        s.split_whitespace().collect()
    }

    #[test]
    fn build_yields_relative_frequencies() {
        let t = ProbabilityTable::build(words("a b b c c c d d d d")).unwrap();
        assert_eq!(t.len(), 4);
        assert!((t.get("a") - 0.1).abs() < EPS);
        assert!((t.get("d") - 0.4).abs() < EPS);
        assert!((t.total() - 1.0).abs() < EPS);
    }

    #[test]
    fn build_sums_to_one_for_skewed_inputs() {
        let mut toks: Vec<String> = (0..997).map(|i| format!("w{}", i % 13)).collect();
        toks.push("rare".into());
        let t = ProbabilityTable::build(&toks).unwrap();
        assert!((t.total() - 1.0).abs() < EPS);
    }

    #[test]
    fn build_rejects_empty_input() {
        let err = ProbabilityTable::build(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, SummarizeError::EmptyCorpus));
    }

    #[test]
    fn mask_zeroes_invalid_and_renormalizes() {
        let t = ProbabilityTable::build(words("the cat sat the dog"))
            .unwrap()
            .mask_invalid(|t| t == "the")
            .unwrap();
        assert_eq!(t.get("the"), 0.0);
        assert!(t.contains("the"));
        assert!((t.get("cat") - 1.0 / 3.0).abs() < EPS);
        assert!((t.total() - 1.0).abs() < EPS);
    }

    #[test]
    fn mask_with_no_valid_tokens_fails() {
        let err = ProbabilityTable::build(words(". , the"))
            .unwrap()
            .mask_invalid(|_| true)
            .unwrap_err();
        assert!(matches!(err, SummarizeError::NoValidTokens { distinct: 3 }));
    }

    #[test]
    fn decay_uses_twice_the_sentence_count() {
        let mut t = ProbabilityTable::build(words("a a b b")).unwrap();
        t.decay(&["a", "a", "b"]);
        assert!((t.get("a") - 0.5f64.powi(4)).abs() < EPS);
        assert!((t.get("b") - 0.5f64.powi(2)).abs() < EPS);
    }

    #[test]
    fn decay_never_increases_and_keeps_zero() {
        let mut t = ProbabilityTable::build(words("x y y z z z"))
            .unwrap()
            .mask_invalid(|t| t == "x")
            .unwrap();
        let before = t.clone();
        t.decay(&["x", "y", "z", "unknown"]);
        assert_eq!(t.get("x"), 0.0);
        for tok in ["y", "z"] {
            assert!(t.get(tok) < before.get(tok));
        }
        assert!(!t.contains("unknown"));
    }

    #[test]
    fn repeated_decay_compounds() {
        let mut t = ProbabilityTable::build(words("a b")).unwrap();
        t.decay(&["a"]);
        t.decay(&["a"]);
        assert!((t.get("a") - 0.5f64.powi(4)).abs() < EPS);
        assert!((t.get("b") - 0.5).abs() < EPS);
    }
}
