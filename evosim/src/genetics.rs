use crate::config;
use rand::Rng;
use serde_derive::Serialize;

/// where a trait starts out for fresh creatures and
/// the hard limits it is clamped to during reproduction
#[derive(Clone, Debug, PartialEq)]
pub struct TraitRange {
    pub spawn: std::ops::Range<f64>,
    pub min: f64,
    pub max: f64,
}

impl TraitRange {
    pub fn clamp(&self, v: f64) -> f64 {
        v.max(self.min).min(self.max)
    }
    pub fn contains(&self, v: f64) -> bool {
        (self.min..=self.max).contains(&v)
    }
}

pub const SPEED: TraitRange = TraitRange {
    spawn: 1.0..3.5,
    min: 0.5,
    max: 5.,
};
pub const SIZE: TraitRange = TraitRange {
    spawn: 8.0..20.,
    min: 5.,
    max: 25.,
};
pub const VISION_RANGE: TraitRange = TraitRange {
    spawn: 30.0..70.,
    min: 20.,
    max: 100.,
};
pub const EFFICIENCY: TraitRange = TraitRange {
    spawn: 0.6..1.,
    min: 0.3,
    max: 1.5,
};
pub const MAX_ENERGY: TraitRange = TraitRange {
    spawn: 120.0..200.,
    min: 80.,
    max: 250.,
};
pub const MAX_AGE: TraitRange = TraitRange {
    spawn: 1200.0..2000.,
    min: 800.,
    max: 2500.,
};

pub type Rgb = [u8; 3];

/// the heritable part of a creature, never changes during its lifetime
#[derive(Copy, Clone, PartialEq, Debug, Serialize)]
pub struct Genes {
    pub speed: f64,
    pub size: f64,
    pub vision_range: f64,
    // metabolic multiplier, energy drain is divided by this
    pub efficiency: f64,
    pub max_energy: f64,
    pub max_age: f64,
}

impl Genes {
    pub fn new<R: Rng>(mut rng: R) -> Self {
        Self {
            speed: rng.random_range(SPEED.spawn),
            size: rng.random_range(SIZE.spawn),
            vision_range: rng.random_range(VISION_RANGE.spawn),
            efficiency: rng.random_range(EFFICIENCY.spawn),
            max_energy: rng.random_range(MAX_ENERGY.spawn),
            max_age: rng.random_range(MAX_AGE.spawn),
        }
    }

    /// averages both parents, then mutates each trait on its own
    /// the result always lies within the trait ranges, no matter the parents
    #[must_use]
    pub fn crossover<R: Rng>(&self, other: &Self, mut rng: R) -> Self {
        Self {
            speed: inherit(&mut rng, self.speed, other.speed, &SPEED),
            size: inherit(&mut rng, self.size, other.size, &SIZE),
            vision_range: inherit(&mut rng, self.vision_range, other.vision_range, &VISION_RANGE),
            efficiency: inherit(&mut rng, self.efficiency, other.efficiency, &EFFICIENCY),
            max_energy: inherit(&mut rng, self.max_energy, other.max_energy, &MAX_ENERGY),
            max_age: inherit(&mut rng, self.max_age, other.max_age, &MAX_AGE),
        }
    }

    pub fn in_range(&self) -> bool {
        SPEED.contains(self.speed)
            && SIZE.contains(self.size)
            && VISION_RANGE.contains(self.vision_range)
            && EFFICIENCY.contains(self.efficiency)
            && MAX_ENERGY.contains(self.max_energy)
            && MAX_AGE.contains(self.max_age)
    }

    /// fast ones are red, efficient ones green, small ones blue
    pub fn color(&self) -> Rgb {
        let channel = |v: f64| v.floor().clamp(0., 255.) as u8;
        [
            channel(100. + self.speed * 50.),
            channel(150. + self.efficiency * 100.),
            channel(200. - self.size * 5.),
        ]
    }
}

fn inherit<R: Rng>(mut rng: R, a: f64, b: f64, range: &TraitRange) -> f64 {
    let mut value = (a + b) / 2.;
    if rng.random_bool(config::g::MUTATION_RATE) {
        value += rng.random_range(-0.5..0.5) * config::g::MUTATION_STRENGTH * value;
    }
    range.clamp(value)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg as DetRng;

    /// genes with arbitrary, possibly nonsensical, but finite values
    #[derive(Clone, Debug)]
    pub struct AnyGenes(pub Genes);

    impl Arbitrary for AnyGenes {
        fn arbitrary(g: &mut Gen) -> Self {
            let mut t = || {
                let v = f64::arbitrary(g);
                if v.is_finite() { v % 10_000. } else { 0. }
            };
            AnyGenes(Genes {
                speed: t(),
                size: t(),
                vision_range: t(),
                efficiency: t(),
                max_energy: t(),
                max_age: t(),
            })
        }
    }

    #[quickcheck]
    fn crossover_stays_in_range(a: AnyGenes, b: AnyGenes, seed: u64) -> bool {
        let rng = DetRng::seed_from_u64(seed);
        a.0.crossover(&b.0, rng).in_range()
    }

    #[test]
    fn fresh_genes_are_within_spawn_ranges() {
        let mut rng = DetRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let g = Genes::new(&mut rng);
            assert!(SPEED.spawn.contains(&g.speed));
            assert!(SIZE.spawn.contains(&g.size));
            assert!(VISION_RANGE.spawn.contains(&g.vision_range));
            assert!(EFFICIENCY.spawn.contains(&g.efficiency));
            assert!(MAX_ENERGY.spawn.contains(&g.max_energy));
            assert!(MAX_AGE.spawn.contains(&g.max_age));
            assert!(g.in_range());
        }
    }

    #[test]
    fn crossover_mostly_averages() {
        let mut rng = DetRng::seed_from_u64(99);
        let a = Genes {
            speed: 1.,
            size: 10.,
            vision_range: 40.,
            efficiency: 0.6,
            max_energy: 100.,
            max_age: 1000.,
        };
        let b = Genes {
            speed: 3.,
            size: 20.,
            vision_range: 60.,
            efficiency: 1.,
            max_energy: 200.,
            max_age: 2000.,
        };
        let mean = Genes {
            speed: 2.,
            size: 15.,
            vision_range: 50.,
            efficiency: 0.8,
            max_energy: 150.,
            max_age: 1500.,
        };
        let runs = 1_000;
        let exact = (0..runs)
            .filter(|_| a.crossover(&b, &mut rng).speed == mean.speed)
            .count();
        // 8% mutation rate
        assert!(exact > runs * 85 / 100, "{} of {} unmutated", exact, runs);

        for _ in 0..runs {
            let c = a.crossover(&b, &mut rng);
            // mutations are at most +-7.5%
            assert!((c.size - mean.size).abs() <= mean.size * 0.075 + 1e-9);
            assert!((c.max_age - mean.max_age).abs() <= mean.max_age * 0.075 + 1e-9);
        }
    }

    #[test]
    fn color_mapping() {
        let g = Genes {
            speed: 2.,
            size: 10.,
            vision_range: 40.,
            efficiency: 0.5,
            max_energy: 100.,
            max_age: 1000.,
        };
        assert_eq!(g.color(), [200, 200, 150]);
        let g = Genes {
            speed: 5.,
            size: 50.,
            efficiency: 1.5,
            ..g
        };
        assert_eq!(g.color(), [255, 255, 0]);
    }

    #[test]
    fn genes_report_by_trait_name() {
        let g = Genes {
            speed: 2.,
            size: 10.,
            vision_range: 40.,
            efficiency: 0.5,
            max_energy: 100.,
            max_age: 1000.,
        };
        let v = serde_json::to_value(g).unwrap();
        assert_eq!(v["vision_range"], 40.);
        assert_eq!(v["max_age"], 1000.);
        assert_eq!(v.as_object().map(|o| o.len()), Some(6));
    }
}
