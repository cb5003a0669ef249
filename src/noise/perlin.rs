use crate::noise::rng::FxRng;

/// Seeded 2D gradient noise (classic Perlin, quintic fade), output in roughly `[-1, 1]`.
#[derive(Clone, Debug)]
pub(crate) struct Perlin2 {
    perm: [u8; 512],
}

const GRADIENTS: [(f32, f32); 8] = [
    (1.0, 0.0),
    (-1.0, 0.0),
    (0.0, 1.0),
    (0.0, -1.0),
    (std::f32::consts::FRAC_1_SQRT_2, std::f32::consts::FRAC_1_SQRT_2),
    (-std::f32::consts::FRAC_1_SQRT_2, std::f32::consts::FRAC_1_SQRT_2),
    (std::f32::consts::FRAC_1_SQRT_2, -std::f32::consts::FRAC_1_SQRT_2),
    (-std::f32::consts::FRAC_1_SQRT_2, -std::f32::consts::FRAC_1_SQRT_2),
];

impl Perlin2 {
    pub(crate) fn new(seed: u64) -> Self {
        let mut table: Vec<u8> = (0..=255u8).collect();
        FxRng::seeded(seed).shuffle(&mut table);
        let mut perm = [0u8; 512];
        for (i, p) in perm.iter_mut().enumerate() {
            *p = table[i & 255];
        }
        Self { perm }
    }

    pub(crate) fn sample(&self, x: f32, y: f32) -> f32 {
        let xf = x.floor();
        let yf = y.floor();
        let xi = (xf as i64 & 255) as usize;
        let yi = (yf as i64 & 255) as usize;
        let dx = x - xf;
        let dy = y - yf;

        let g00 = self.grad(xi, yi, dx, dy);
        let g10 = self.grad(xi + 1, yi, dx - 1.0, dy);
        let g01 = self.grad(xi, yi + 1, dx, dy - 1.0);
        let g11 = self.grad(xi + 1, yi + 1, dx - 1.0, dy - 1.0);

        let u = fade(dx);
        let v = fade(dy);
        let top = g00 + (g10 - g00) * u;
        let bottom = g01 + (g11 - g01) * u;
        (top + (bottom - top) * v) * std::f32::consts::SQRT_2
    }

    /// Sum of `octaves` layers with halving amplitude and doubling frequency, normalized.
    pub(crate) fn fbm(&self, x: f32, y: f32, octaves: u32) -> f32 {
        let mut amp = 1.0f32;
        let mut freq = 1.0f32;
        let mut sum = 0.0f32;
        let mut norm = 0.0f32;
        for _ in 0..octaves.max(1) {
            sum += self.sample(x * freq, y * freq) * amp;
            norm += amp;
            amp *= 0.5;
            freq *= 2.0;
        }
        sum / norm
    }

    fn grad(&self, xi: usize, yi: usize, dx: f32, dy: f32) -> f32 {
        let h = self.perm[self.perm[xi & 255] as usize + (yi & 255)] as usize;
        let (gx, gy) = GRADIENTS[h & 7];
        gx * dx + gy * dy
    }
}

fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[cfg(test)]
#[path = "../../tests/unit/noise/perlin.rs"]
mod tests;
