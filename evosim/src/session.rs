use crate::world::{DetRng, TickSummary, World};
use rand::{Rng, SeedableRng};
use std::ops::ControlFlow;
use std::time::{Duration, Instant};

/// gets to look at the world after every completed tick.
/// breaking pauses the session once every observer has seen the tick.
pub trait Observer {
    fn observe(&mut self, world: &World, summary: &TickSummary) -> ControlFlow<()>;
}

impl<F> Observer for F
where
    F: FnMut(&World, &TickSummary) -> ControlFlow<()>,
{
    fn observe(&mut self, world: &World, summary: &TickSummary) -> ControlFlow<()> {
        self(world, summary)
    }
}

/// owns the world and decides when it gets stepped.
///
/// the session is the only writer, observers and `world()` only ever see the
/// state after a fully completed step.
pub struct Session {
    world: World,
    running: bool,
    observers: Vec<Box<dyn Observer>>,
}

impl Session {
    /// a paused session with a freshly populated world.
    /// without a seed one gets drawn (and logged, so a run can be repeated)
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        log::info!("seeding world with {}", seed);
        Self::from_world(World::from_rng(DetRng::seed_from_u64(seed)))
    }

    pub fn from_world(world: World) -> Self {
        Self {
            world,
            running: false,
            observers: Vec::new(),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
    }
    pub fn pause(&mut self) {
        self.running = false;
    }
    pub fn toggle(&mut self) {
        self.running = !self.running;
        log::info!("{}", if self.running { "running" } else { "paused" });
    }

    /// stops and starts over
    pub fn reset(&mut self) {
        self.pause();
        self.world.reset();
    }

    pub fn subscribe<O: Observer + 'static>(&mut self, observer: O) {
        self.observers.push(Box::new(observer));
    }

    /// steps once, if running, and shows the result to every observer
    pub fn tick(&mut self) -> Option<TickSummary> {
        if !self.running {
            return None;
        }
        let summary = self.world.step();
        let mut stop = false;
        for o in self.observers.iter_mut() {
            stop |= o.observe(&self.world, &summary).is_break();
        }
        if stop {
            log::info!("stopped by an observer after tick {}", summary.tick);
            self.pause();
        }
        Some(summary)
    }

    /// keeps ticking while running, at most once per cadence and at most limit times.
    /// a zero cadence runs as fast as it can, without a limit only a pause ends it.
    /// returns the number of ticks done
    pub fn run(&mut self, cadence: Duration, limit: Option<u64>) -> u64 {
        let mut ticks = 0;
        while self.running && limit.is_none_or(|l| ticks < l) {
            let start = Instant::now();
            self.tick();
            ticks += 1;
            let rest = cadence.saturating_sub(start.elapsed());
            if !rest.is_zero() {
                std::thread::sleep(rest);
            }
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn paused_sessions_do_nothing() {
        let mut s = Session::new(Some(5));
        assert!(!s.is_running());
        assert_eq!(s.tick(), None);
        assert_eq!(s.run(Duration::ZERO, Some(10)), 0);
        assert_eq!(s.world().tick(), 0);
    }

    #[test]
    fn observers_see_every_tick() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut s = Session::new(Some(5));
        let log = seen.clone();
        s.subscribe(move |w: &World, t: &TickSummary| {
            assert_eq!(w.tick(), t.tick);
            assert_eq!(w.creatures().len(), t.alive);
            log.borrow_mut().push(t.tick);
            ControlFlow::Continue(())
        });
        s.start();
        assert_eq!(s.run(Duration::ZERO, Some(25)), 25);
        assert_eq!(*seen.borrow(), (1..=25).collect::<Vec<u64>>());
    }

    #[test]
    fn observers_can_stop_an_endless_run() {
        let mut s = Session::new(Some(11));
        s.subscribe(|_: &World, t: &TickSummary| {
            if t.tick == 42 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        // everyone still sees the last tick
        let seen = Rc::new(RefCell::new(0));
        let count = seen.clone();
        s.subscribe(move |_: &World, _: &TickSummary| {
            *count.borrow_mut() += 1;
            ControlFlow::Continue(())
        });
        s.start();
        assert_eq!(s.run(Duration::ZERO, None), 42);
        assert!(!s.is_running());
        assert_eq!(s.world().tick(), 42);
        assert_eq!(*seen.borrow(), 42);
        assert_eq!(s.tick(), None);
    }

    #[test]
    fn stop_on_extinction() {
        let mut s = Session::from_world(World::empty(DetRng::seed_from_u64(3)));
        s.subscribe(|w: &World, _: &TickSummary| {
            if w.creatures().is_empty() {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        s.start();
        assert_eq!(s.run(Duration::ZERO, None), 1);
        assert_eq!(s.world().tick(), 1);
    }

    #[test]
    fn pause_and_toggle() {
        let mut s = Session::new(Some(6));
        s.toggle();
        assert!(s.tick().is_some());
        s.pause();
        assert!(s.tick().is_none());
        s.start();
        assert!(s.tick().is_some());
        s.toggle();
        assert!(!s.is_running());
        assert_eq!(s.world().tick(), 2);
    }

    #[test]
    fn reset_stops_and_reinitializes() {
        let mut s = Session::new(Some(7));
        s.start();
        s.run(Duration::ZERO, Some(50));
        s.reset();
        assert!(!s.is_running());
        let w = s.world();
        assert_eq!(w.tick(), 0);
        assert_eq!(w.creatures().len(), 25);
        assert_eq!(w.food().len(), 40);
        assert_eq!((w.generation(), w.total_born(), w.total_died()), (1, 25, 0));
    }

    #[test]
    fn same_seed_same_run() {
        let mut a = Session::new(Some(99));
        let mut b = Session::new(Some(99));
        a.start();
        b.start();
        for _ in 0..200 {
            assert_eq!(a.tick(), b.tick());
        }
    }
}
