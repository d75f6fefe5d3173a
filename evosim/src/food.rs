use crate::config;
use crate::vecmath::Vector;
use rand::Rng;
use serde_derive::Serialize;

#[derive(Copy, Clone, PartialEq, Debug, Serialize)]
pub struct Food {
    pub id: u64,
    pub pos: Vector,
    /// granted to whoever eats this
    pub energy: f64,
    /// added to the eaters size for collision
    pub size: f64,
}

impl Food {
    pub fn random<R: Rng>(id: u64, width: f64, height: f64, mut rng: R) -> Self {
        let margin = config::f::SPAWN_MARGIN;
        Self {
            id,
            pos: [
                rng.random_range(margin..width - margin),
                rng.random_range(margin..height - margin),
            ],
            energy: rng.random_range(config::f::ENERGY),
            size: rng.random_range(config::f::SIZE),
        }
    }
}

#[test]
fn random_food() {
    use rand::SeedableRng;
    let mut rng = rand_pcg::Pcg64Mcg::seed_from_u64(5);
    for id in 0..500 {
        let f = Food::random(id, 800., 600., &mut rng);
        assert!((10.0..790.).contains(&f.pos[0]));
        assert!((10.0..590.).contains(&f.pos[1]));
        assert!(config::f::ENERGY.contains(&f.energy));
        assert!(config::f::SIZE.contains(&f.size));
    }
}
