use crate::config;
use crate::food::Food;
use crate::genetics::{Genes, Rgb};
use crate::vecmath;
use crate::vecmath::Vector;
use rand::Rng;
use serde_derive::Serialize;

/// things that change during the lifetime of a creature
#[derive(Copy, Clone, PartialEq, Default, Debug, Serialize)]
pub struct Status {
    pub pos: Vector,
    pub vel: Vector,
    // can dip below 0, see config::c::STARVATION
    pub energy: f64,
    pub age: f64,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Creature {
    id: u64,
    pub status: Status,
    /// only changes trough mutation during reproduction
    genes: Genes,
    generation: u32,
    // derived from the genes once, at birth
    color: Rgb,
}

impl Creature {
    pub fn new(id: u64, status: Status, genes: Genes, generation: u32) -> Self {
        Self {
            id,
            status,
            color: genes.color(),
            genes,
            generation,
        }
    }

    /// a fresh creature somewhere inside the world, not too close to the walls
    pub fn random<R: Rng>(id: u64, width: f64, height: f64, generation: u32, mut rng: R) -> Self {
        let genes = Genes::new(&mut rng);
        let margin = config::c::SPAWN_MARGIN;
        let x = rng.random_range(margin..width - margin);
        let y = rng.random_range(margin..height - margin);
        let status = Status {
            pos: [x, y],
            vel: random_velocity(&mut rng, genes.speed),
            energy: genes.max_energy * config::c::INITIAL_ENERGY,
            age: 0.,
        };
        Self::new(id, status, genes, generation)
    }

    /// the child of two parents, spawned close to them
    pub fn offspring<R: Rng>(id: u64, p1: &Self, p2: &Self, mut rng: R) -> Self {
        let genes = p1.genes.crossover(&p2.genes, &mut rng);
        let generation = p1.generation.max(p2.generation) + 1;

        let jitter = config::c::OFFSPRING_JITTER;
        let center = vecmath::midpoint(p1.status.pos, p2.status.pos);
        let pos = vecmath::add(
            center,
            [
                rng.random_range(-jitter..jitter),
                rng.random_range(-jitter..jitter),
            ],
        );
        let status = Status {
            pos,
            vel: random_velocity(&mut rng, genes.speed),
            energy: genes.max_energy * config::c::OFFSPRING_ENERGY,
            age: 0.,
        };
        Self::new(id, status, genes, generation)
    }

    pub fn id(&self) -> u64 {
        self.id
    }
    pub fn genes(&self) -> &Genes {
        &self.genes
    }
    pub fn generation(&self) -> u32 {
        self.generation
    }
    pub fn color(&self) -> Rgb {
        self.color
    }
    /// 1 means full, can be negative
    pub fn energy_fraction(&self) -> f64 {
        self.status.energy / self.genes.max_energy
    }

    /// one tick of getting older and burning energy
    pub fn metabolize(&mut self) {
        self.status.age += config::c::AGE_PER_TICK;
        self.status.energy -= config::c::METABOLISM / self.genes.efficiency;
    }

    /// wander around a bit, bouncing off the walls.
    ///
    /// afterwards the position lies within [size, width - size] x [size, height - size]
    /// and the velocity is no longer than the speed gene.
    pub fn motion<R: Rng>(&mut self, width: f64, height: f64, mut rng: R) {
        let steer = config::c::STEERING;
        let vel = vecmath::add(
            self.status.vel,
            [
                rng.random_range(-steer..steer),
                rng.random_range(-steer..steer),
            ],
        );
        let mut vel = vecmath::cap(vel, self.genes.speed);
        let mut pos = vecmath::add(self.status.pos, vel);

        let size = self.genes.size;
        for (axis, bound) in [width, height].into_iter().enumerate() {
            if pos[axis] <= size || pos[axis] >= bound - size {
                vel[axis] = -vel[axis];
                pos[axis] = pos[axis].max(size).min(bound - size);
            }
        }

        self.status.pos = pos;
        self.status.vel = vel;
    }

    pub fn touches(&self, food: &Food) -> bool {
        vecmath::dist(self.status.pos, food.pos) < self.genes.size + food.size
    }

    /// energy never goes above max_energy this way
    pub fn feed(&mut self, energy: f64) {
        self.status.energy = (self.status.energy + energy).min(self.genes.max_energy);
    }

    pub fn can_reproduce(&self) -> bool {
        self.status.energy > self.genes.max_energy * config::c::REPRODUCTION_THRESHOLD
    }

    /// pay for a child
    pub fn reproduced(&mut self) {
        self.status.energy *= config::c::REPRODUCTION_COST;
    }

    pub fn is_dead(&self) -> bool {
        self.status.energy <= config::c::STARVATION
            || self.status.age > self.genes.max_age * config::c::OLD_AGE
    }
}

fn random_velocity<R: Rng>(mut rng: R, speed: f64) -> Vector {
    let half = speed / 2.;
    [rng.random_range(-half..half), rng.random_range(-half..half)]
}
