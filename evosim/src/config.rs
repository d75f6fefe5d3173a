pub const WORLD_WIDTH: f64 = 800.;
pub const WORLD_HEIGHT: f64 = 600.;

pub const INITIAL_CREATURES: usize = 25;
pub const INITIAL_FOOD: usize = 40;

/// chance per tick to spawn one food item while below MAX_FOOD
pub const FOOD_SPAWN_RATE: f64 = 0.4;
pub const MAX_FOOD: usize = 60;

/// creature related constants
pub mod c {
    /// creatures spawn at least this far from the walls
    pub const SPAWN_MARGIN: f64 = 20.;

    pub const AGE_PER_TICK: f64 = 0.8;
    /// divided by efficiency, so inefficient creatures burn faster
    pub const METABOLISM: f64 = 0.3;

    /// random steering added to each velocity component per tick
    pub const STEERING: f64 = 0.05;

    pub const INITIAL_ENERGY: f64 = 0.8;
    pub const OFFSPRING_ENERGY: f64 = 0.7;
    /// fraction of max energy that has to be exceeded to breed
    pub const REPRODUCTION_THRESHOLD: f64 = 0.7;
    /// parents keep this fraction of their energy after breeding
    pub const REPRODUCTION_COST: f64 = 0.75;
    /// offspring spawn this far (per axis) from the parents midpoint
    pub const OFFSPRING_JITTER: f64 = 25.;

    /// energy at or below this kills
    pub const STARVATION: f64 = -10.;
    /// a creature outlives its max_age by this factor
    pub const OLD_AGE: f64 = 1.2;
}

/// genetics
pub mod g {
    pub const MUTATION_RATE: f64 = 0.08;
    pub const MUTATION_STRENGTH: f64 = 0.15;
}

/// food related constants
pub mod f {
    pub const SPAWN_MARGIN: f64 = 10.;
    pub const ENERGY: std::ops::Range<f64> = 20.0..50.;
    pub const SIZE: std::ops::Range<f64> = 4.0..8.;
}
