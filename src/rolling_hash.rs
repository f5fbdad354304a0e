use crate::modular::Modulus;

/// Polynomial base: one digit per possible byte value.
pub const BASE: u64 = 256;

/// Returns `BASE^0 .. BASE^(window_len - 1)` reduced by `modulus`.
pub fn base_powers(window_len: usize, modulus: Modulus) -> Vec<u64> {
    let mut powers = Vec::with_capacity(window_len);
    let mut power = modulus.reduce(1);
    for _ in 0..window_len {
        powers.push(power);
        power = modulus.mul(power, BASE);
    }
    powers
}

/// Hash of `window` computed from scratch: `sum(window[len - 1 - j] * BASE^j) mod P`.
pub fn window_hash(window: &[u8], modulus: Modulus) -> u64 {
    window.iter().fold(0, |hash, &byte| {
        modulus.add(modulus.mul(hash, BASE), modulus.reduce(byte as u64))
    })
}

/// Shifts a window hash one byte to the right.
///
/// `top_power` is `BASE^(k - 1) mod P` for window length `k`.
pub fn advance(hash: u64, outgoing: u8, incoming: u8, top_power: u64, modulus: Modulus) -> u64 {
    let remainder = modulus.sub(hash, modulus.mul(top_power, outgoing as u64));
    modulus.add(modulus.reduce(incoming as u64), modulus.mul(BASE, remainder))
}

/// Hash state of a window of fixed length sliding over a byte sequence.
#[derive(Debug, Clone)]
pub struct RollingHash {
    modulus: Modulus,
    window_len: usize,
    top_power: u64,
    hash: u64,
}

impl RollingHash {
    /// Hashes the first `window_len` bytes of `seq`.
    ///
    /// Returns `None` when the window is empty or longer than `seq`.
    pub fn new(seq: &[u8], window_len: usize, modulus: Modulus) -> Option<Self> {
        if window_len == 0 || window_len > seq.len() {
            return None;
        }
        let powers = base_powers(window_len, modulus);
        let window = &seq[..window_len];
        let hash = window
            .iter()
            .rev()
            .zip(&powers)
            .fold(0, |hash, (&byte, &power)| {
                modulus.add(hash, modulus.mul(power, byte as u64))
            });

        Some(RollingHash {
            modulus,
            window_len,
            top_power: powers[window_len - 1],
            hash,
        })
    }

    pub fn hash(&self) -> u64 {
        self.hash
    }

    pub fn window_len(&self) -> usize {
        self.window_len
    }

    pub fn advance(&mut self, outgoing: u8, incoming: u8) -> u64 {
        self.hash = advance(self.hash, outgoing, incoming, self.top_power, self.modulus);
        self.hash
    }
}

/// Iterator over `(position, hash)` of every window of `seq`.
pub struct RollingWindows<'a> {
    seq: &'a [u8],
    state: Option<RollingHash>,
    position: usize,
}

impl<'a> RollingWindows<'a> {
    pub fn new(seq: &'a [u8], window_len: usize, modulus: Modulus) -> Self {
        RollingWindows {
            seq,
            state: RollingHash::new(seq, window_len, modulus),
            position: 0,
        }
    }
}

impl Iterator for RollingWindows<'_> {
    type Item = (usize, u64);

    fn next(&mut self) -> Option<Self::Item> {
        let state = self.state.as_mut()?;
        let window_len = state.window_len();
        if self.position + window_len > self.seq.len() {
            return None;
        }
        if self.position > 0 {
            let outgoing = self.seq[self.position - 1];
            let incoming = self.seq[self.position + window_len - 1];
            state.advance(outgoing, incoming);
        }
        let item = (self.position, state.hash());
        self.position += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match &self.state {
            Some(state) => (self.seq.len() + 1).saturating_sub(self.position + state.window_len()),
            None => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RollingWindows<'_> {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::modular::DEFAULT_PRIME;

    #[test]
    fn powers_start_at_one() {
        let m = Modulus::default();
        assert_eq!(base_powers(3, m), vec![1, 256, 65536]);
        assert!(base_powers(0, m).is_empty());
    }

    #[test]
    fn direct_hash_of_short_window() {
        let m = Modulus::default();
        assert_eq!(window_hash(b"ab", m), 97 * 256 + 98);
        assert_eq!(RollingHash::new(b"abc", 2, m).unwrap().hash(), 97 * 256 + 98);
    }

    #[test]
    fn advance_matches_from_scratch_hash() {
        let m = Modulus::default();
        let mut state = RollingHash::new(b"abcd", 3, m).unwrap();
        assert_eq!(state.advance(b'a', b'd'), window_hash(b"bcd", m));
    }

    #[test]
    fn rolling_hash_equals_direct_hash_at_every_position() {
        for modulus in [DEFAULT_PRIME, 1_000_003, 257] {
            let m = Modulus::new(modulus).unwrap();
            let data: Vec<u8> = (0..2048).map(|_| rand::random::<u8>()).collect();
            for window_len in [1, 2, 7, 64, 333, 2048] {
                let mut windows = 0;
                for (position, hash) in RollingWindows::new(&data, window_len, m) {
                    assert_eq!(hash, window_hash(&data[position..position + window_len], m));
                    windows += 1;
                }
                assert_eq!(windows, data.len() - window_len + 1);
            }
        }
    }

    #[test]
    fn degenerate_windows_yield_nothing() {
        let m = Modulus::default();
        assert!(RollingHash::new(b"abc", 0, m).is_none());
        assert!(RollingHash::new(b"abc", 4, m).is_none());
        assert_eq!(RollingWindows::new(b"abc", 4, m).count(), 0);
        assert_eq!(RollingWindows::new(b"", 1, m).count(), 0);
    }

    #[test]
    fn window_as_long_as_sequence_has_one_position() {
        let m = Modulus::default();
        let windows: Vec<_> = RollingWindows::new(b"abc", 3, m).collect();
        assert_eq!(windows, vec![(0, window_hash(b"abc", m))]);
    }

    #[test]
    fn size_hint_is_exact() {
        let m = Modulus::default();
        let mut windows = RollingWindows::new(b"abcdef", 4, m);
        assert_eq!(windows.len(), 3);
        windows.next();
        assert_eq!(windows.len(), 2);
    }
}
