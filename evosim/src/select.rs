use crate::arena::Key;
use crate::creature::Creature;
use crate::vecmath;

/// how far away from the mouse a creature can be and still get picked
pub const MOUSE_RANGE: f64 = 50.;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    None,
    #[default]
    Mouse,
    Oldest,
    Youngest,
    Energetic,
    Generation,
    Fastest,
    Biggest,
}

impl Selection {
    pub fn rotate(self) -> Self {
        match self {
            Selection::None => Selection::Mouse,
            Selection::Mouse => Selection::Oldest,
            Selection::Oldest => Selection::Youngest,
            Selection::Youngest => Selection::Energetic,
            Selection::Energetic => Selection::Generation,
            Selection::Generation => Selection::Fastest,
            Selection::Fastest => Selection::Biggest,
            Selection::Biggest => Selection::None,
        }
    }
    pub fn rotate_rev(self) -> Self {
        match self {
            Selection::Mouse => Selection::None,
            Selection::Oldest => Selection::Mouse,
            Selection::Youngest => Selection::Oldest,
            Selection::Energetic => Selection::Youngest,
            Selection::Generation => Selection::Energetic,
            Selection::Fastest => Selection::Generation,
            Selection::Biggest => Selection::Fastest,
            Selection::None => Selection::Biggest,
        }
    }

    /// mousepos needs to be scaled to world coordinates already
    pub fn select<'a, I>(self, creatures: I, mousepos: [f64; 2]) -> Option<Key>
    where
        I: Iterator<Item = (Key, &'a Creature)>,
    {
        match self {
            Selection::None => None,
            Selection::Mouse => extreme(
                creatures.filter(|(_k, c)| vecmath::dist(c.status.pos, mousepos) < MOUSE_RANGE),
                |c| -vecmath::dist(c.status.pos, mousepos),
            ),
            Selection::Oldest => extreme(creatures, |c| c.status.age),
            Selection::Youngest => extreme(creatures, |c| -c.status.age),
            Selection::Energetic => extreme(creatures, Creature::energy_fraction),
            Selection::Generation => extreme(creatures, |c| c.generation() as f64),
            Selection::Fastest => extreme(creatures, |c| c.genes().speed),
            Selection::Biggest => extreme(creatures, |c| c.genes().size),
        }
    }
}

/// the key of whichever creature scores highest
fn extreme<'a, I, F>(creatures: I, score: F) -> Option<Key>
where
    I: Iterator<Item = (Key, &'a Creature)>,
    F: Fn(&Creature) -> f64,
{
    creatures
        .map(|(k, c)| (k, score(c)))
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(k, _score)| k)
}

impl Iterator for Selection {
    type Item = Self;
    fn next(&mut self) -> Option<Self> {
        *self = self.rotate();
        Some(*self)
    }
}

impl DoubleEndedIterator for Selection {
    fn next_back(&mut self) -> Option<Self> {
        *self = self.rotate_rev();
        Some(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creature::Status;
    use crate::genetics::Genes;
    use crate::world::{DetRng, World};
    use rand::SeedableRng;

    fn world() -> World {
        let mut w = World::empty(DetRng::seed_from_u64(0));
        let genes = Genes {
            speed: 1.,
            size: 10.,
            vision_range: 50.,
            efficiency: 1.,
            max_energy: 100.,
            max_age: 1000.,
        };
        for i in 0..4 {
            let status = Status {
                pos: [100. * (i + 1) as f64, 100.],
                vel: [0., 0.],
                energy: 90. - 10. * i as f64,
                age: 10. * i as f64,
            };
            let genes = Genes {
                speed: 1. + i as f64,
                size: 20. - i as f64,
                ..genes
            };
            w.add_creature(status, genes, 4 - i);
        }
        w
    }

    #[test]
    fn picks() {
        let w = world();
        let pick = |s: Selection, m| s.select(w.creatures().iter_indexed(), m);
        let far = [-1000., -1000.];
        assert_eq!(pick(Selection::None, far), None);
        assert_eq!(pick(Selection::Oldest, far), Some(3));
        assert_eq!(pick(Selection::Youngest, far), Some(0));
        assert_eq!(pick(Selection::Energetic, far), Some(0));
        assert_eq!(pick(Selection::Generation, far), Some(0));
        assert_eq!(pick(Selection::Fastest, far), Some(3));
        assert_eq!(pick(Selection::Biggest, far), Some(0));
        assert_eq!(pick(Selection::Mouse, far), None);
        assert_eq!(pick(Selection::Mouse, [290., 110.]), Some(2));
    }

    #[test]
    fn rotation_round_trips() {
        let mut s = Selection::default();
        let all: Vec<Selection> = s.take(8).collect();
        assert_eq!(all.last(), Some(&Selection::default()));
        for sel in all {
            assert_eq!(sel.rotate().rotate_rev(), sel);
        }
        assert_eq!(s.next_back(), Some(Selection::None));
    }
}
