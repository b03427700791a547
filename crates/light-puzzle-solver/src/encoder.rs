//! Canonical keys for search states.
//!
//! A search state is the light-color vector plus the per-button press
//! counts. The key packs both into one mixed-radix integer: each light is a
//! base-3 digit and each press count a base-(limit + 1) digit. Instances too
//! large for a `u128` fall back to a fixed-width byte string.

use smallvec::SmallVec;

use crate::puzzle::LightColor;

/// Hashable identity of a search state. Wide keys are boxed so packed keys
/// stay small in the visited set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StateKey {
    Packed(u128),
    Wide(Box<[u8]>),
}

/// Encodes states for one instance and one set of press limits.
#[derive(Debug, Clone)]
pub struct StateEncoder {
    num_lights: usize,
    press_radices: SmallVec<[u128; 16]>,
    packed: bool,
}

impl StateEncoder {
    /// Encoder for states whose press counts stay within `limits`
    pub fn new(num_lights: usize, limits: &[u32]) -> Self {
        let press_radices: SmallVec<[u128; 16]> =
            limits.iter().map(|&limit| limit as u128 + 1).collect();

        let light_capacity = (0..num_lights).try_fold(1u128, |acc, _| acc.checked_mul(3));
        let capacity = press_radices
            .iter()
            .fold(light_capacity, |acc, &radix| acc.and_then(|c| c.checked_mul(radix)));

        Self {
            num_lights,
            press_radices,
            packed: capacity.is_some(),
        }
    }

    /// Whether keys fit in a single integer
    pub fn is_packed(&self) -> bool {
        self.packed
    }

    /// Key for a state. `presses[i]` must not exceed the limit the encoder
    /// was built with.
    pub fn encode(&self, lights: &[LightColor], presses: &[u32]) -> StateKey {
        debug_assert_eq!(lights.len(), self.num_lights);
        debug_assert_eq!(presses.len(), self.press_radices.len());

        if self.packed {
            let mut key = lights
                .iter()
                .fold(0u128, |acc, light| acc * 3 + light.index() as u128);
            for (&count, &radix) in presses.iter().zip(&self.press_radices) {
                debug_assert!((count as u128) < radix);
                key = key * radix + count as u128;
            }
            StateKey::Packed(key)
        } else {
            let mut bytes = Vec::with_capacity(lights.len() + presses.len() * 4);
            bytes.extend(lights.iter().map(|light| light.index()));
            for count in presses {
                bytes.extend_from_slice(&count.to_le_bytes());
            }
            StateKey::Wide(bytes.into_boxed_slice())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Every combination of lights and counts for a tiny instance
    fn all_states(num_lights: usize, limits: &[u32]) -> Vec<(Vec<LightColor>, Vec<u32>)> {
        let mut states = vec![(Vec::new(), Vec::new())];
        for _ in 0..num_lights {
            states = states
                .into_iter()
                .flat_map(|(lights, presses)| {
                    LightColor::ALL.into_iter().map(move |c| {
                        let mut lights = lights.clone();
                        lights.push(c);
                        (lights, presses.clone())
                    })
                })
                .collect();
        }
        for &limit in limits {
            states = states
                .into_iter()
                .flat_map(|(lights, presses)| {
                    (0..=limit).map(move |count| {
                        let mut presses = presses.clone();
                        presses.push(count);
                        (lights.clone(), presses)
                    })
                })
                .collect();
        }
        states
    }

    #[test]
    fn test_packed_keys_are_injective() {
        let limits = [2, 0, 3];
        let encoder = StateEncoder::new(3, &limits);
        assert!(encoder.is_packed());

        let states = all_states(3, &limits);
        let keys: HashSet<StateKey> = states
            .iter()
            .map(|(lights, presses)| encoder.encode(lights, presses))
            .collect();
        assert_eq!(keys.len(), states.len());
        assert_eq!(states.len(), 27 * 3 * 4);
    }

    #[test]
    fn test_packed_digit_layout() {
        use LightColor::{Green as G, Red as R};
        let encoder = StateEncoder::new(2, &[4, 1]);
        assert!(encoder.is_packed());
        assert_eq!(
            encoder.encode(&[G, R], &[4, 1]),
            StateKey::Packed((3 * 5 + 4) * 2 + 1)
        );
    }

    #[test]
    fn test_packed_keys_stay_small() {
        assert!(std::mem::size_of::<StateKey>() <= 32);
    }

    #[test]
    fn test_wide_fallback() {
        // 3^81 alone overflows u128
        let encoder = StateEncoder::new(81, &[1]);
        assert!(!encoder.is_packed());

        let mut lights = vec![LightColor::Red; 81];
        let a = encoder.encode(&lights, &[0]);
        let b = encoder.encode(&lights, &[1]);
        lights[80] = LightColor::Blue;
        let c = encoder.encode(&lights, &[0]);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, encoder.encode(&vec![LightColor::Red; 81], &[0]));
    }

    #[test]
    fn test_large_limits_overflow_to_wide() {
        let encoder = StateEncoder::new(2, &[u32::MAX; 5]);
        assert!(!encoder.is_packed());
        let key = encoder.encode(&[LightColor::Red, LightColor::Green], &[7; 5]);
        assert!(matches!(key, StateKey::Wide(ref bytes) if bytes.len() == 2 + 5 * 4));
    }
}
