use anyhow::{Context, Result};
use serde::Serialize;

/// One CSV row, in the column layout of the public SpaceX launch table.
#[derive(Serialize)]
struct Row<'a> {
    #[serde(rename = "Flight Number")]
    flight_number: u32,
    #[serde(rename = "Launch Site")]
    launch_site: &'a str,
    class: u8,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version")]
    booster_version: String,
    #[serde(rename = "Booster Version Category")]
    booster_category: &'a str,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
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

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// (category, payload ceiling in kg, landing success rate)
const BOOSTERS: [(&str, f64, f64); 5] = [
    ("v1.0", 1_000.0, 0.0),
    ("v1.1", 4_500.0, 0.1),
    ("FT", 9_600.0, 0.65),
    ("B4", 9_600.0, 0.5),
    ("B5", 9_600.0, 0.9),
];

/// Site and its share of flights, relative weights.
const SITES: [(&str, u32); 4] = [
    ("CCAFS LC-40", 26),
    ("VAFB SLC-4E", 10),
    ("KSC LC-39A", 13),
    ("CCAFS SLC-40", 7),
];

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "spacex_launch_dash.csv".to_string());
    let mut rng = SimpleRng::new(42);

    let site_pool: Vec<&str> = SITES
        .iter()
        .flat_map(|&(site, weight)| std::iter::repeat(site).take(weight as usize))
        .collect();

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let n_flights: u32 = site_pool.len() as u32;
    for flight_number in 1..=n_flights {
        // Later flights fly newer boosters.
        let era = ((flight_number - 1) as usize * BOOSTERS.len()) / n_flights as usize;
        let (category, ceiling, success_rate) = BOOSTERS[era];
        let payload_mass_kg = (rng.next_f64() * ceiling).round();
        let landed = rng.next_f64() < success_rate;

        writer.serialize(Row {
            flight_number,
            launch_site: *rng.pick(&site_pool),
            class: u8::from(landed),
            payload_mass_kg,
            booster_version: format!("F9 {category} B{:04}", 1000 + flight_number),
            booster_category: category,
        })?;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {n_flights} launch records to {output_path}");
    Ok(())
}
