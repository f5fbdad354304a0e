use crate::error::ConfigurationError;

/// Default prime modulus for rolling hashes. `DEFAULT_PRIME * 256` fits in a `u64`.
pub const DEFAULT_PRIME: u64 = 5003943032159437;

/// Largest modulus for which `modulus * 256` still fits in a `u64`.
pub const MAX_MODULUS: u64 = u64::MAX / 256;

/// Arithmetic over residues in `[0, modulus)`.
///
/// Every operation takes canonical residues and returns a canonical residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modulus {
    value: u64,
}

impl Default for Modulus {
    fn default() -> Self {
        Modulus {
            value: DEFAULT_PRIME,
        }
    }
}

impl Modulus {
    /// Creates a modulus, rejecting values below 2 or above [`MAX_MODULUS`].
    pub fn new(value: u64) -> Result<Self, ConfigurationError> {
        if !(2..=MAX_MODULUS).contains(&value) {
            return Err(ConfigurationError::Modulus(value));
        }
        Ok(Modulus { value })
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn reduce(&self, x: u64) -> u64 {
        x % self.value
    }

    pub fn add(&self, a: u64, b: u64) -> u64 {
        let sum = a + b;
        if sum >= self.value {
            sum - self.value
        } else {
            sum
        }
    }

    pub fn sub(&self, a: u64, b: u64) -> u64 {
        if a >= b {
            a - b
        } else {
            a + self.value - b
        }
    }

    pub fn mul(&self, a: u64, b: u64) -> u64 {
        ((a as u128 * b as u128) % self.value as u128) as u64
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn add_wraps_at_modulus() {
        let m = Modulus::new(7).unwrap();
        assert_eq!(m.add(3, 3), 6);
        assert_eq!(m.add(3, 4), 0);
        assert_eq!(m.add(6, 6), 5);
    }

    #[test]
    fn sub_never_goes_negative() {
        let m = Modulus::new(7).unwrap();
        assert_eq!(m.sub(5, 2), 3);
        assert_eq!(m.sub(2, 5), 4);
        assert_eq!(m.sub(0, 6), 1);
        assert_eq!(m.sub(4, 4), 0);
    }

    #[test]
    fn mul_stays_canonical_for_large_operands() {
        let m = Modulus::default();
        let a = DEFAULT_PRIME - 1;
        // (-1) * (-1) = 1
        assert_eq!(m.mul(a, a), 1);
        assert_eq!(m.mul(a, 256), DEFAULT_PRIME - 256);
    }

    #[test]
    fn results_are_reduced_for_random_residues() {
        let m = Modulus::default();
        for _ in 0..1000 {
            let a = m.reduce(rand::random::<u64>());
            let b = m.reduce(rand::random::<u64>());
            assert!(m.add(a, b) < m.value());
            assert!(m.sub(a, b) < m.value());
            assert!(m.mul(a, b) < m.value());
            assert_eq!(m.add(m.sub(a, b), b), a);
        }
    }

    #[test]
    fn rejects_degenerate_moduli() {
        assert_eq!(Modulus::new(0), Err(ConfigurationError::Modulus(0)));
        assert_eq!(Modulus::new(1), Err(ConfigurationError::Modulus(1)));
        assert!(Modulus::new(MAX_MODULUS).is_ok());
        assert_eq!(
            Modulus::new(MAX_MODULUS + 1),
            Err(ConfigurationError::Modulus(MAX_MODULUS + 1))
        );
    }
}
