use crate::arena::{Arena, Key};
use crate::config;
use crate::config::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::creature::Creature;
use crate::food::Food;
use rand::Rng;
use rand::SeedableRng;
use serde_derive::Serialize;

pub use rand_pcg::Pcg64Mcg as DetRng;

/// what happened during a single step
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TickSummary {
    pub tick: u64,
    pub births: usize,
    pub deaths: usize,
    pub food_eaten: usize,
    pub food_spawned: usize,
    /// population after the step
    pub alive: usize,
    /// food count after the step
    pub food: usize,
}

/// the whole simulation state.
///
/// only `step()` and `reset()` advance it, everything else is bookkeeping for
/// hand-built worlds.
#[derive(Debug)]
pub struct World {
    creatures: Arena<Creature>,
    food: Arena<Food>,
    // epoch counter, bumped once per tick that saw any births
    generation: u64,
    total_born: u64,
    total_died: u64,
    tick: u64,
    next_id: u64,
    rng: DetRng,
}

impl World {
    /// a freshly populated world
    pub fn new(seed: u64) -> Self {
        Self::from_rng(DetRng::seed_from_u64(seed))
    }

    pub fn from_rng(rng: DetRng) -> Self {
        let mut w = Self::empty(rng);
        w.populate();
        w
    }

    /// no creatures, no food, counters at their initial values
    pub fn empty(rng: DetRng) -> Self {
        Self {
            creatures: Arena::with_capacity(config::INITIAL_CREATURES * 2),
            food: Arena::with_capacity(config::MAX_FOOD),
            generation: 1,
            total_born: 0,
            total_died: 0,
            tick: 0,
            next_id: 0,
            rng,
        }
    }

    /// throws away all creatures and food and starts over,
    /// keeps drawing from the same generator
    pub fn reset(&mut self) {
        self.populate();
    }

    fn populate(&mut self) {
        self.creatures.clear();
        self.food.clear();
        self.generation = 1;
        self.total_born = config::INITIAL_CREATURES as u64;
        self.total_died = 0;
        self.tick = 0;

        for _ in 0..config::INITIAL_CREATURES {
            let id = self.fresh_id();
            let c = Creature::random(id, WORLD_WIDTH, WORLD_HEIGHT, 1, &mut self.rng);
            self.creatures.add(c);
        }
        for _ in 0..config::INITIAL_FOOD {
            let id = self.fresh_id();
            let f = Food::random(id, WORLD_WIDTH, WORLD_HEIGHT, &mut self.rng);
            self.food.add(f);
        }
        log::info!(
            "world populated: {} creatures, {} food",
            self.creatures.len(),
            self.food.len()
        );
    }

    fn fresh_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn creatures(&self) -> &Arena<Creature> {
        &self.creatures
    }
    pub fn food(&self) -> &Arena<Food> {
        &self.food
    }
    #[cfg(test)]
    pub(crate) fn creatures_mut(&mut self) -> &mut Arena<Creature> {
        &mut self.creatures
    }
    #[cfg(test)]
    pub(crate) fn food_mut(&mut self) -> &mut Arena<Food> {
        &mut self.food
    }
    pub fn generation(&self) -> u64 {
        self.generation
    }
    pub fn total_born(&self) -> u64 {
        self.total_born
    }
    pub fn total_died(&self) -> u64 {
        self.total_died
    }
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// places a hand-made creature, does not count as a birth
    #[cfg(test)]
    pub(crate) fn add_creature(
        &mut self,
        status: crate::creature::Status,
        genes: crate::genetics::Genes,
        generation: u32,
    ) -> Key {
        let id = self.fresh_id();
        self.creatures
            .add(Creature::new(id, status, genes, generation))
    }

    /// places a hand-made food item
    #[cfg(test)]
    pub(crate) fn add_food(&mut self, pos: [f64; 2], energy: f64, size: f64) -> Key {
        let id = self.fresh_id();
        self.food.add(Food {
            id,
            pos,
            energy,
            size,
        })
    }

    /// advances the world by one tick.
    ///
    /// the phases run in a fixed order:
    /// age & metabolism, movement, feeding, reproduction, death, food spawning.
    pub fn step(&mut self) -> TickSummary {
        self.tick += 1;
        let was_alive = !self.creatures.is_empty();

        for c in self.creatures.iter_mut() {
            c.metabolize();
            c.motion(WORLD_WIDTH, WORLD_HEIGHT, &mut self.rng);
        }

        // creatures earlier in the arena get the first bite
        let mut food_eaten = 0;
        let food = self.food.slots_mut();
        for c in self.creatures.iter_mut() {
            for slot in food.iter_mut() {
                if let Some(f) = slot.take_if(|f| c.touches(f)) {
                    c.feed(f.energy);
                    food_eaten += 1;
                }
            }
        }

        let pool: Vec<Key> = self
            .creatures
            .iter_indexed()
            .filter(|(_k, c)| c.can_reproduce())
            .map(|(k, _c)| k)
            .collect();
        let mut offspring = Vec::with_capacity(pool.len() / 2);
        for (a, b) in pairs(&pool) {
            let (Some(p1), Some(p2)) = (self.creatures.get(a), self.creatures.get(b)) else {
                continue;
            };
            let id = self.next_id;
            self.next_id += 1;
            offspring.push(Creature::offspring(id, p1, p2, &mut self.rng));
            for parent in [a, b] {
                if let Some(p) = self.creatures.get_mut(parent) {
                    p.reproduced();
                }
            }
        }
        let births = offspring.len();
        // children are not part of this ticks pool
        self.creatures.extend(offspring);

        let deaths = self.creatures.retain(|c| !c.is_dead());

        let mut food_spawned = 0;
        if self.food.len() < config::MAX_FOOD && self.rng.random_bool(config::FOOD_SPAWN_RATE) {
            let id = self.fresh_id();
            let f = Food::random(id, WORLD_WIDTH, WORLD_HEIGHT, &mut self.rng);
            self.food.add(f);
            food_spawned += 1;
        }

        self.total_born += births as u64;
        self.total_died += deaths as u64;
        if births > 0 {
            self.generation += 1;
        }

        let summary = TickSummary {
            tick: self.tick,
            births,
            deaths,
            food_eaten,
            food_spawned,
            alive: self.creatures.len(),
            food: self.food.len(),
        };
        if births > 0 || deaths > 0 {
            log::debug!(
                "tick {}: {} born, {} died, {} alive",
                summary.tick,
                births,
                deaths,
                summary.alive
            );
        }
        if was_alive && summary.alive == 0 {
            log::warn!("population went extinct at tick {}", self.tick);
        }
        summary
    }
}

/// consecutive pairs of the pool, an odd one out stays single
pub fn pairs(pool: &[Key]) -> impl Iterator<Item = (Key, Key)> + '_ {
    pool.chunks_exact(2).map(|p| (p[0], p[1]))
}
