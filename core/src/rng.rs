//! Deterministic random number generation.
//!
//! RULE: Nothing in the generator may call any platform RNG.
//! All randomness flows through FieldRng streams derived from the single
//! master seed carried by the generation config.
//!
//! Each sampled column gets its own RNG stream, seeded deterministically
//! from (master_seed XOR field_slot). This means:
//!   - Adding a new column never changes existing columns' streams.
//!   - Each column's stream is fully reproducible in isolation.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// A deterministic RNG stream for one sampled column.
pub struct FieldRng {
    inner: Pcg64Mcg,
}

impl FieldRng {
    /// Create a column stream from the master seed and a stable field
    /// slot. The slot value must never change once assigned.
    pub fn new(master_seed: u64, slot: FieldSlot) -> Self {
        let derived_seed = master_seed ^ ((slot as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        use rand::RngCore;
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Roll a float in [lo, hi).
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }
}

/// All column streams for a single generation run.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn for_field(&self, slot: FieldSlot) -> FieldRng {
        FieldRng::new(self.master_seed, slot)
    }
}

/// Stable field slot assignments.
/// NEVER reorder or remove entries — only append.
/// Reordering changes every column's stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum FieldSlot {
    Date = 0,
    Season = 1,
    Category = 2,
    Sku = 3,
    Price = 4,
    Quantity = 5,
    Region = 6,
    Channel = 7,
    Payment = 8,
    CustomerAge = 9,
    Rating = 10,
    Delivery = 11,
    // Add new columns here — append only.
}
