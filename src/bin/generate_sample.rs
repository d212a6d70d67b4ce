use std::path::Path;

use anyhow::{Context, Result};
use galaxy_mzr::config::DATA_FILE;
use galaxy_mzr::data::model::GalaxySample;

const GALAXY_COUNT: usize = 200;
const LOG_MASS_RANGE: (f64, f64) = (8.0, 11.5);

/// Saturating mass-metallicity relation, in solar units.
fn metallicity(log_mass: f64) -> f64 {
    0.1 + 0.55 / (1.0 + (-(log_mass - 9.5) * 1.5).exp())
}

/// Star-forming main sequence, log10 of M☉/yr.
fn log_sfr(log_mass: f64) -> f64 {
    0.8 * (log_mass - 10.0) + 0.3
}

/// Minimal deterministic PRNG (xoshiro256**)
struct Xoshiro256 {
    state: [u64; 4],
}

impl Xoshiro256 {
    fn seeded(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        Xoshiro256 { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.unit()
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.unit().max(1e-15);
        let u2 = self.unit();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn generate(rng: &mut Xoshiro256) -> Vec<GalaxySample> {
    (0..GALAXY_COUNT)
        .map(|_| {
            let log_mass = rng.uniform(LOG_MASS_RANGE.0, LOG_MASS_RANGE.1);
            GalaxySample {
                stellar_mass: 10f64.powf(log_mass),
                gas_metallicity: metallicity(log_mass) + rng.gauss(0.0, 0.05),
                star_formation_rate: 10f64.powf(log_sfr(log_mass) + rng.gauss(0.0, 0.3)),
            }
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = Xoshiro256::seeded(42);
    let samples = generate(&mut rng);

    let output_path = Path::new(DATA_FILE);
    if let Some(dir) = output_path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating {}", dir.display()))?;
    }
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;
    for sample in &samples {
        writer.serialize(sample).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;

    println!(
        "Wrote {} galaxies to {}",
        samples.len(),
        output_path.display()
    );
    Ok(())
}
