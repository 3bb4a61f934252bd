use std::fmt;
use std::str::FromStr;

use crate::error::RuleError;

/// An outer-totalistic rule on the Moore neighbourhood.
///
/// Bit `n` of `birth` / `survival` is set when a dead / live cell with `n` live
/// neighbours is alive in the next generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LifeRule {
    birth: u16,
    survival: u16,
}

impl LifeRule {
    /// B3/S23.
    pub const CONWAY: LifeRule = LifeRule {
        birth: 1 << 3,
        survival: (1 << 2) | (1 << 3),
    };

    /// Builds a rule from neighbour counts; counts above 8 are ignored.
    ///
    /// Birth on 0 neighbours is refused: it would fill the empty plane, which a finite
    /// cell set cannot represent.
    pub fn new(birth: &[u8], survival: &[u8]) -> Result<Self, RuleError> {
        if birth.contains(&0) {
            return Err(RuleError::BirthOnZero);
        }
        let mask = |counts: &[u8]| {
            counts
                .iter()
                .filter(|&&n| n <= 8)
                .fold(0u16, |m, &n| m | (1 << n))
        };
        Ok(Self {
            birth: mask(birth),
            survival: mask(survival),
        })
    }

    /// Next state of a cell given its state and live neighbour count.
    #[inline]
    pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        let mask = if alive { self.survival } else { self.birth };
        neighbors <= 8 && mask & (1 << neighbors) != 0
    }

    pub fn birth_counts(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=8u8).filter(move |n| self.birth & (1 << n) != 0)
    }

    pub fn survival_counts(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=8u8).filter(move |n| self.survival & (1 << n) != 0)
    }
}

impl Default for LifeRule {
    fn default() -> Self {
        LifeRule::CONWAY
    }
}

/// Lower-case, slash-free form used in catagolue URLs, e.g. `b3s23`.
impl fmt::Display for LifeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b")?;
        for n in self.birth_counts() {
            write!(f, "{n}")?;
        }
        write!(f, "s")?;
        for n in self.survival_counts() {
            write!(f, "{n}")?;
        }
        Ok(())
    }
}

/// Accepts `B3/S23`, `b3s23` and `B36/S23`-style strings, case-insensitively.
impl FromStr for LifeRule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_ascii_lowercase();
        if text.is_empty() {
            return Err(RuleError::Empty);
        }

        let rest = text
            .strip_prefix('b')
            .ok_or_else(|| RuleError::MissingBirth(s.to_string()))?;
        let (birth, survival) = rest
            .split_once('s')
            .ok_or_else(|| RuleError::MissingSurvival(s.to_string()))?;
        let birth = birth.strip_suffix('/').unwrap_or(birth);

        let counts = |part: &str| -> Result<Vec<u8>, RuleError> {
            part.chars()
                .map(|ch| match ch.to_digit(10) {
                    Some(n) if n <= 8 => Ok(n as u8),
                    Some(_) => Err(RuleError::InvalidCount(ch)),
                    None if ch.is_ascii_alphabetic() || ch == '/' => {
                        Err(RuleError::Unexpected(part.to_string()))
                    }
                    None => Err(RuleError::InvalidCount(ch)),
                })
                .collect()
        };

        LifeRule::new(&counts(birth)?, &counts(survival)?)
    }
}
