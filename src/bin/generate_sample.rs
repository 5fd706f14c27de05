use anyhow::{Context, Result};
use serde_json::{Value, json};

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

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Gutenberg–Richter-like magnitude: many small events, few large ones.
    fn magnitude(&mut self) -> f64 {
        let u = self.next_f64().max(1e-12);
        let m = -u.ln() / std::f64::consts::LN_10 * 1.1;
        (m * 10.0).round() / 10.0
    }
}

/// Seismically active regions: (label, latitude, longitude, depth scale km).
const REGIONS: [(&str, f64, f64, f64); 8] = [
    ("Tokyo, Japan", 35.6, 139.7, 60.0),
    ("Anchorage, Alaska", 61.2, -149.9, 40.0),
    ("Ridgecrest, CA", 35.7, -117.6, 10.0),
    ("Santiago, Chile", -33.4, -70.6, 100.0),
    ("Suva, Fiji", -18.1, 178.4, 500.0),
    ("Reykjanes Peninsula, Iceland", 63.9, -22.4, 8.0),
    ("Hilo, Hawaii", 19.7, -155.1, 15.0),
    ("Izmir, Turkey", 38.4, 27.1, 20.0),
];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    // One day of events ending at a fixed instant.
    let end_ms: i64 = 1_700_000_000_000;
    let n_events = 240;

    let features: Vec<Value> = (0..n_events)
        .map(|i| {
            let (region, lat, lon, depth_scale) = REGIONS[i % REGIONS.len()];
            let dlat = rng.range(-0.8, 0.8);
            let dlon = rng.range(-0.8, 0.8);
            let distance_km = ((dlat * dlat + dlon * dlon).sqrt() * 111.0).round();
            let depth = rng.range(0.5, depth_scale);
            let time = end_ms - (rng.next_f64() * 86_400_000.0) as i64;

            // A few events carry no place, like real feed entries at sea.
            let place = if i % 37 == 0 {
                Value::Null
            } else {
                json!(format!("{distance_km} km from {region}"))
            };

            json!({
                "type": "Feature",
                "id": format!("sample{i:04}"),
                "properties": {
                    "mag": rng.magnitude(),
                    "place": place,
                    "time": time,
                },
                "geometry": {
                    "type": "Point",
                    "coordinates": [lon + dlon, lat + dlat, (depth * 100.0).round() / 100.0],
                },
            })
        })
        .collect();

    let doc = json!({
        "type": "FeatureCollection",
        "metadata": { "title": "Rusty Quake sample feed", "count": features.len() },
        "features": features,
    });

    let output_path = "sample_quakes.geojson";
    let text = serde_json::to_string_pretty(&doc).context("serializing sample feed")?;
    std::fs::write(output_path, text).with_context(|| format!("writing {output_path}"))?;

    println!("Wrote {n_events} events to {output_path}");
    Ok(())
}
