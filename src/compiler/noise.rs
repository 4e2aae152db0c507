//! Perlin noise for the script's `noise` family.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DEFAULT_OCTAVES: u32 = 4;
const DEFAULT_FALLOFF: f64 = 0.5;
/// Upper bound on `noiseDetail` octaves; beyond this the contribution is below f64 precision.
const MAX_OCTAVES: u32 = 32;

/// Shuffled permutation table shared by the 1D, 2D and 3D lattices.
#[derive(Clone)]
struct Perlin {
    perm: [u8; 512],
}

impl Perlin {
    fn new(rng: &mut StdRng) -> Self {
        let mut perm = [0u8; 512];
        for (i, p) in perm.iter_mut().take(256).enumerate() {
            *p = i as u8;
        }
        for i in 0..256 {
            let j = rng.gen_range(0..256);
            perm.swap(i, j);
        }
        let (low, high) = perm.split_at_mut(256);
        high.copy_from_slice(low);
        Self { perm }
    }

    fn p(&self, i: usize) -> usize {
        usize::from(self.perm[i & 511])
    }

    fn noise1(&self, x: f64) -> f64 {
        let (xi, x) = cell(x);
        let fx = fade(x);
        lerp(fx, grad1(self.p(xi), x), grad1(self.p(xi + 1), x - 1.0))
    }

    fn noise2(&self, x: f64, y: f64) -> f64 {
        let (xi, x) = cell(x);
        let (yi, y) = cell(y);
        let (fx, fy) = (fade(x), fade(y));
        let p0 = self.p(xi) + yi;
        let p1 = self.p(xi + 1) + yi;
        lerp(
            fy,
            lerp(fx, grad2(self.p(p0), x, y), grad2(self.p(p1), x - 1.0, y)),
            lerp(
                fx,
                grad2(self.p(p0 + 1), x, y - 1.0),
                grad2(self.p(p1 + 1), x - 1.0, y - 1.0),
            ),
        )
    }

    fn noise3(&self, x: f64, y: f64, z: f64) -> f64 {
        let (xi, x) = cell(x);
        let (yi, y) = cell(y);
        let (zi, z) = cell(z);
        let (fx, fy, fz) = (fade(x), fade(y), fade(z));
        let p0 = self.p(xi) + yi;
        let p00 = self.p(p0) + zi;
        let p01 = self.p(p0 + 1) + zi;
        let p1 = self.p(xi + 1) + yi;
        let p10 = self.p(p1) + zi;
        let p11 = self.p(p1 + 1) + zi;
        let g = |h: usize, dx: f64, dy: f64, dz: f64| grad3(self.p(h), x - dx, y - dy, z - dz);
        lerp(
            fz,
            lerp(
                fy,
                lerp(fx, g(p00, 0.0, 0.0, 0.0), g(p10, 1.0, 0.0, 0.0)),
                lerp(fx, g(p01, 0.0, 1.0, 0.0), g(p11, 1.0, 1.0, 0.0)),
            ),
            lerp(
                fy,
                lerp(fx, g(p00 + 1, 0.0, 0.0, 1.0), g(p10 + 1, 1.0, 0.0, 1.0)),
                lerp(fx, g(p01 + 1, 0.0, 1.0, 1.0), g(p11 + 1, 1.0, 1.0, 1.0)),
            ),
        )
    }
}

/// Lattice cell index (wrapped to 0..256) and the offset inside the cell.
fn cell(v: f64) -> (usize, f64) {
    let floor = v.floor();
    let idx = if floor.is_finite() {
        (floor as i64).rem_euclid(256) as usize
    } else {
        0
    };
    (idx, v - floor)
}

fn fade(t: f64) -> f64 {
    (3.0 - 2.0 * t) * t * t
}

fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

fn grad1(h: usize, x: f64) -> f64 {
    if h & 1 == 0 { -x } else { x }
}

fn grad2(h: usize, x: f64, y: f64) -> f64 {
    let v = if h & 1 == 0 { x } else { y };
    if h & 2 == 0 { -v } else { v }
}

fn grad3(h: usize, x: f64, y: f64, z: f64) -> f64 {
    let h = h & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}

/// Octave settings and the lazily built generator behind `noise`.
///
/// Without `noiseSeed` the generator is shuffled from the routine's RNG the first time
/// `noise` is called, so a seeded session gives the same noise on every run.
#[derive(Clone)]
pub struct NoiseField {
    generator: Option<Perlin>,
    seed: Option<u64>,
    octaves: u32,
    falloff: f64,
}

impl Default for NoiseField {
    fn default() -> Self {
        Self {
            generator: None,
            seed: None,
            octaves: DEFAULT_OCTAVES,
            falloff: DEFAULT_FALLOFF,
        }
    }
}

impl std::fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseField")
            .field("seeded", &self.seed)
            .field("octaves", &self.octaves)
            .field("falloff", &self.falloff)
            .field("built", &self.generator.is_some())
            .finish()
    }
}

impl NoiseField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn octaves(&self) -> u32 {
        self.octaves
    }

    pub fn falloff(&self) -> f64 {
        self.falloff
    }

    /// `noiseDetail(octaves[, falloff])`.
    pub fn set_detail(&mut self, octaves: u32, falloff: Option<f64>) {
        self.octaves = octaves.min(MAX_OCTAVES);
        if let Some(falloff) = falloff {
            self.falloff = falloff;
        }
    }

    /// `noiseSeed(seed)`: the next `noise` call rebuilds the lattice from this seed.
    pub fn reseed(&mut self, seed: u64) {
        self.seed = Some(seed);
        self.generator = None;
    }

    /// Sum of the octaves at the given 1 to 3 coordinates, each octave mapped to `[0, 1]`.
    pub fn sample(&mut self, coords: &[f64], rng: &mut StdRng) -> Option<f64> {
        if coords.is_empty() || coords.len() > 3 {
            return None;
        }
        let seed = self.seed;
        let generator = self.generator.get_or_insert_with(|| match seed {
            Some(seed) => Perlin::new(&mut StdRng::seed_from_u64(seed)),
            None => Perlin::new(rng),
        });

        let mut effect = 1.0;
        let mut k = 1.0;
        let mut sum = 0.0;
        for _ in 0..self.octaves {
            effect *= self.falloff;
            let n = match *coords {
                [x] => generator.noise1(k * x),
                [x, y] => generator.noise2(k * x, k * y),
                [x, y, z] => generator.noise3(k * x, k * y, k * z),
                _ => 0.0,
            };
            sum += effect * (1.0 + n) / 2.0;
            k *= 2.0;
        }
        Some(sum)
    }
}
