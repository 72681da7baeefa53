//! Random connected label objects (random walks + replay tokens).
//!
//! Model
//! - A few walkers start at the grid center and take 4-neighbour steps,
//!   clamped to the grid. Every visited pixel is set, so the union is
//!   4-connected (and therefore 8-connected). Holes may appear.
//! - The mask is run-encoded row by row; `start_index` stays `(0, 0)`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::encode::mask_runs;
use super::types::LabelObject;

/// Random-walk blob configuration.
#[derive(Clone, Copy, Debug)]
pub struct BlobCfg {
    pub width: usize,
    pub height: usize,
    /// Steps per walker.
    pub steps: usize,
    pub walkers: usize,
}

impl Default for BlobCfg {
    fn default() -> Self {
        Self {
            width: 24,
            height: 24,
            steps: 60,
            walkers: 3,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a 4-connected blob as a row-major mask.
pub fn draw_blob_mask(cfg: BlobCfg, tok: ReplayToken) -> Vec<bool> {
    let mut rng = tok.to_std_rng();
    let w = cfg.width.max(1);
    let h = cfg.height.max(1);
    let mut mask = vec![false; w * h];
    let (cx, cy) = (w / 2, h / 2);
    mask[cy * w + cx] = true;
    for _ in 0..cfg.walkers.max(1) {
        let (mut x, mut y) = (cx, cy);
        for _ in 0..cfg.steps {
            match rng.gen_range(0..4u8) {
                0 if x + 1 < w => x += 1,
                1 if x > 0 => x -= 1,
                2 if y + 1 < h => y += 1,
                3 if y > 0 => y -= 1,
                _ => {}
            }
            mask[y * w + x] = true;
        }
    }
    mask
}

/// Draw a 4-connected blob and run-encode it.
pub fn draw_blob(cfg: BlobCfg, tok: ReplayToken) -> LabelObject {
    let mask = draw_blob_mask(cfg, tok);
    LabelObject::new(mask_runs(&mask, cfg.width.max(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let tok = ReplayToken { seed: 42, index: 7 };
        let a = draw_blob(BlobCfg::default(), tok);
        let b = draw_blob(BlobCfg::default(), tok);
        assert_eq!(a, b);
        let c = draw_blob(BlobCfg::default(), ReplayToken { seed: 42, index: 8 });
        assert_ne!(a.runs, c.runs);
    }

    #[test]
    fn blob_stays_on_grid() {
        let cfg = BlobCfg {
            width: 5,
            height: 4,
            steps: 200,
            walkers: 2,
        };
        let obj = draw_blob(cfg, ReplayToken { seed: 3, index: 0 });
        assert!(!obj.runs.is_empty());
        for r in &obj.runs {
            assert!(r.line >= 0 && r.line < 4);
            assert!(r.start >= 0 && r.end() <= 5);
        }
    }
}
