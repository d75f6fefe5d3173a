use crate::creature::Creature;
use crate::session::Observer;
use crate::world::{TickSummary, World};
use serde_derive::Serialize;
use std::io::Write;
use std::ops::ControlFlow;

/// population wide numbers, what the statistics panel shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub tick: u64,
    pub alive: usize,
    pub generation: u64,
    pub total_born: u64,
    pub total_died: u64,
    pub food: usize,
    pub avg_speed: f64,
    pub avg_size: f64,
    pub avg_vision: f64,
    pub avg_efficiency: f64,
    pub avg_age: f64,
    /// in percent of max energy
    pub avg_energy: f64,
    pub oldest: f64,
    pub highest_generation: u32,
}

impl Report {
    pub fn gather(world: &World) -> Self {
        let creatures = world.creatures();
        let n = creatures.len();
        let avg = |f: fn(&Creature) -> f64| {
            if n == 0 {
                0.
            } else {
                creatures.iter().map(f).sum::<f64>() / n as f64
            }
        };
        Report {
            tick: world.tick(),
            alive: n,
            generation: world.generation(),
            total_born: world.total_born(),
            total_died: world.total_died(),
            food: world.food().len(),
            avg_speed: avg(|c| c.genes().speed),
            avg_size: avg(|c| c.genes().size),
            avg_vision: avg(|c| c.genes().vision_range),
            avg_efficiency: avg(|c| c.genes().efficiency),
            avg_age: avg(|c| c.status.age),
            avg_energy: avg(|c| c.energy_fraction() * 100.),
            oldest: creatures.iter().map(|c| c.status.age).fold(0., f64::max),
            highest_generation: creatures.iter().map(Creature::generation).max().unwrap_or(0),
        }
    }

    pub const CSV_HEADER: &str = "tick, alive, generation, total_born, total_died, food, \
        avg_speed, avg_size, avg_vision, avg_efficiency, avg_age, avg_energy, oldest, highest_generation\n";

    pub fn csv_line(&self) -> String {
        format!(
            "{}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}\n",
            self.tick,
            self.alive,
            self.generation,
            self.total_born,
            self.total_died,
            self.food,
            self.avg_speed,
            self.avg_size,
            self.avg_vision,
            self.avg_efficiency,
            self.avg_age,
            self.avg_energy,
            self.oldest,
            self.highest_generation
        )
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "report for         : {}", self.tick)?;
        writeln!(f, "alive              : {}", self.alive)?;
        writeln!(f, "generation         : {}", self.generation)?;
        writeln!(f, "total born         : {}", self.total_born)?;
        writeln!(f, "total died         : {}", self.total_died)?;
        writeln!(f, "food available     : {}", self.food)?;
        writeln!(f, "avg speed          : {:.2}", self.avg_speed)?;
        writeln!(f, "avg size           : {:.1}", self.avg_size)?;
        writeln!(f, "avg vision         : {:.1}", self.avg_vision)?;
        writeln!(f, "avg efficiency     : {:.2}", self.avg_efficiency)?;
        writeln!(f, "avg energy         : {:.1}%", self.avg_energy)?;
        writeln!(f, "avg age            : {:.0}", self.avg_age)?;
        writeln!(f, "oldest             : {:.0}", self.oldest)?;
        write!(f, "highest generation : {}", self.highest_generation)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Csv,
    /// one json object per line
    Json,
}

/// logs a report every `every` ticks, and optionally writes it somewhere.
/// an `every` of 0 never reports.
pub struct ReportLog {
    every: u64,
    sink: Option<(Box<dyn Write>, Format)>,
    wrote_header: bool,
}

impl ReportLog {
    pub fn new(every: u64) -> Self {
        Self {
            every,
            sink: None,
            wrote_header: false,
        }
    }

    pub fn with_sink<W: Write + 'static>(mut self, w: W, format: Format) -> Self {
        self.sink = Some((Box::new(w), format));
        self
    }

    fn write(&mut self, r: &Report) -> std::io::Result<()> {
        let Some((w, format)) = self.sink.as_mut() else {
            return Ok(());
        };
        match format {
            Format::Csv => {
                if !self.wrote_header {
                    w.write_all(Report::CSV_HEADER.as_bytes())?;
                    self.wrote_header = true;
                }
                w.write_all(r.csv_line().as_bytes())?;
            }
            Format::Json => {
                serde_json::to_writer(&mut *w, r)?;
                w.write_all(b"\n")?;
            }
        }
        w.flush()
    }
}

impl Observer for ReportLog {
    fn observe(&mut self, world: &World, summary: &TickSummary) -> ControlFlow<()> {
        if self.every == 0 || summary.tick % self.every != 0 {
            return ControlFlow::Continue(());
        }
        let r = Report::gather(world);
        log::info!(
            "tick {}: {} alive, generation {}, {} born, {} died, {} food",
            r.tick,
            r.alive,
            r.generation,
            r.total_born,
            r.total_died,
            r.food
        );
        if let Err(e) = self.write(&r) {
            log::error!("could not write report, no longer writing reports: {}", e);
            self.sink = None;
        }
        ControlFlow::Continue(())
    }
}
