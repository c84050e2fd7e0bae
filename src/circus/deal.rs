use crate::error::Error;
use crate::error::Result;
use crate::tokens::Token;
use rand::Rng;
use std::collections::HashSet;

/// Two podium contents, bottom to top, that together hold every token once.
///
/// Like dealing cards: shuffle the whole set, then hand each token to the
/// left or the right pile on a coin flip. Piles need not be the same size
/// and either may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal<T> {
    left: Vec<T>,
    right: Vec<T>,
}

impl<T: Token> Deal<T> {
    /// Random bipartition of `tokens`. Successive calls are independent.
    pub fn scramble<R>(tokens: &[T], rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut stock = tokens.to_vec();
        let mut shuffled = Vec::with_capacity(stock.len());
        while !stock.is_empty() {
            let k = rng.random_range(0..stock.len());
            shuffled.push(stock.remove(k));
        }
        let mut left = Vec::with_capacity(tokens.len());
        let mut right = Vec::with_capacity(tokens.len());
        for token in shuffled {
            match rng.random_bool(crate::SPLIT_RATIO) {
                true => left.push(token),
                false => right.push(token),
            }
        }
        Self { left, right }
    }

    pub fn left(&self) -> &[T] {
        &self.left
    }
    pub fn right(&self) -> &[T] {
        &self.right
    }
    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Every token of the deal, left pile first.
    pub fn tokens(&self) -> impl Iterator<Item = &T> {
        self.left.iter().chain(self.right.iter())
    }
    /// True when both piles together hold exactly `tokens`, each once.
    pub fn partitions(&self, tokens: &[T]) -> bool {
        let dealt = self.tokens().collect::<HashSet<&T>>();
        let given = tokens.iter().collect::<HashSet<&T>>();
        dealt.len() == self.len() && given.len() == tokens.len() && dealt == given
    }
    /// Fails unless this deal is a bipartition of `tokens`.
    pub fn check(&self, tokens: &[T]) -> Result<()> {
        match self.partitions(tokens) {
            true => Ok(()),
            false => Err(Error::invalid(format!(
                "deal {:?} | {:?} does not partition {:?}",
                self.left, self.right, tokens
            ))),
        }
    }
}

impl<T> From<(Vec<T>, Vec<T>)> for Deal<T> {
    fn from((left, right): (Vec<T>, Vec<T>)) -> Self {
        Self { left, right }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn scramble_conserves_tokens() {
        let ref mut rng = SmallRng::seed_from_u64(0xC1);
        for n in 2..=crate::MAX_TOKENS {
            let tokens = (0..n as u8).collect::<Vec<u8>>();
            for _ in 0..1000 {
                let deal = Deal::scramble(&tokens, rng);
                assert_eq!(deal.len(), n);
                assert!(deal.partitions(&tokens));
            }
        }
    }

    #[test]
    fn scramble_is_reproducible() {
        let tokens = (0..8u8).collect::<Vec<u8>>();
        let a = Deal::scramble(&tokens, &mut SmallRng::seed_from_u64(42));
        let b = Deal::scramble(&tokens, &mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn successive_scrambles_differ() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let tokens = (0..8u8).collect::<Vec<u8>>();
        let first = Deal::scramble(&tokens, rng);
        assert!((0..100).any(|_| Deal::scramble(&tokens, rng) != first));
    }

    #[test]
    fn piles_are_balanced_on_average() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let tokens = (0..4u8).collect::<Vec<u8>>();
        let trials = 4000;
        let lefts = (0..trials)
            .map(|_| Deal::scramble(&tokens, rng).left().len())
            .sum::<usize>();
        let ratio = lefts as f64 / (trials * tokens.len()) as f64;
        assert!((0.45..0.55).contains(&ratio), "{}", ratio);
    }

    #[test]
    fn shuffle_reaches_every_order() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let tokens = vec!['a', 'b', 'c'];
        let orders = (0..2000)
            .map(|_| Deal::scramble(&tokens, rng))
            .map(|d| d.tokens().copied().collect::<String>())
            .collect::<HashSet<String>>();
        assert_eq!(orders.len(), 6);
    }

    #[test]
    fn check_rejects_bad_partitions() {
        let tokens = vec!['a', 'b', 'c'];
        assert!(Deal::from((vec!['a'], vec!['b', 'c'])).check(&tokens).is_ok());
        assert!(Deal::from((vec![], vec!['c', 'b', 'a'])).check(&tokens).is_ok());
        assert!(Deal::from((vec!['a'], vec!['b'])).check(&tokens).is_err());
        assert!(Deal::from((vec!['a', 'a'], vec!['b', 'c'])).check(&tokens).is_err());
        assert!(Deal::from((vec!['a', 'd'], vec!['b', 'c'])).check(&tokens).is_err());
    }
}
