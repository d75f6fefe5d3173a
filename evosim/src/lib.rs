//! Evosim is a small evolutionary creature simulation
//!
//! ## The World
//! The world is a flat 800 by 600 box with walls.
//! Food pellets lie scattered around it, new ones grow in now and then.
//!
//! Creatures wander around the box, slightly randomly steering and bouncing off
//! the walls. Every tick they get older and burn energy,
//! touching a food pellet eats it and gives back energy.
//!
//! ## Evolution
//! Creatures with plenty of energy pair up and get a child.
//! The child inherits the average of its parents traits (speed, size, vision,
//! efficiency, max energy and lifespan), every trait has a small chance to mutate.
//! Starving creatures and very old ones die.
//!
//! ## Running it
//! The [`Session`] owns the [`World`] and steps it while it is running,
//! showing each new state to its [`Observer`]s.
//! [`World::step`] can be called on its own though, if you just want results.
//!
//! Randomness always comes from an explicit generator, a world built from the
//! same seed will always play out the same way.

// The main fun is the World::step() function in the world module.
// It runs the phases of a tick in order, the per creature rules
// (metabolism, motion, feeding, breeding, dying) live in the creature module,
// inheritance and mutation in the genetics module.
// If you just want to quickly change some parameters have a look at the config module.

pub mod config;

pub mod vecmath;

pub mod arena;

pub mod genetics;

pub mod creature;

pub mod food;

pub mod world;

pub mod session;

pub mod stats;

pub mod select;

#[cfg(feature = "gui")]
pub mod renderer;

pub use creature::{Creature, Status};
pub use food::Food;
pub use genetics::Genes;
pub use session::{Observer, Session};
pub use stats::Report;
pub use world::{TickSummary, World};

// coordinates:
// [width, height] <=> [x, y]
// y grows downwards, same as on screen
