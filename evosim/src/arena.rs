/// a vec-like structure where removes do not disturb the keys of other elements
/// basically Vec<Option<T>>
///
/// keys stay valid until their element is removed, freed slots get reused by
/// later insertions. iteration always goes in slot order.
#[derive(Debug, Clone, PartialEq)]
pub struct Arena<T> {
    inner: Vec<Option<T>>,
}

pub type Key = usize;

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self { inner: Vec::new() }
    }
}

impl<T> Arena<T> {
    pub fn with_capacity(c: usize) -> Self {
        Self {
            inner: Vec::with_capacity(c),
        }
    }
    /// adds a new element, trying to reuse a dead slot
    /// before appending
    /// this is O(n)
    /// returns its key
    pub fn add(&mut self, e: T) -> Key {
        let empty = self.inner.iter_mut().enumerate().find(|(_i, e)| e.is_none());
        if let Some((i, empty)) = empty {
            *empty = Some(e);
            i
        } else {
            self.inner.push(Some(e));
            self.inner.len() - 1
        }
    }
    /// returns the element if an element existed at the key
    /// if the slot was already empty (or never existed) returns None
    pub fn remove(&mut self, key: Key) -> Option<T> {
        self.inner.get_mut(key).and_then(Option::take)
    }

    pub fn get(&self, key: Key) -> Option<&T> {
        self.inner.get(key).and_then(Option::as_ref)
    }
    pub fn get_mut(&mut self, key: Key) -> Option<&mut T> {
        self.inner.get_mut(key).and_then(Option::as_mut)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.inner.iter().flatten()
    }
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.inner.iter_mut().flatten()
    }
    pub fn iter_indexed(&self) -> impl Iterator<Item = (Key, &T)> {
        self.inner
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.as_ref().map(|e| (i, e)))
    }

    /// the raw slots, the feeding phase needs to take out of one arena
    /// while walking another
    pub fn slots_mut(&mut self) -> &mut [Option<T>] {
        &mut self.inner
    }

    /// removes every element the predicate returns false for,
    /// returns how many were removed
    pub fn retain<F>(&mut self, mut f: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut removed = 0;
        for e in self.inner.iter_mut() {
            let del = e
                .as_ref()
                .map(|e| !f(e))
                // no need to double-delete
                .unwrap_or(false);
            if del {
                *e = None;
                removed += 1;
            }
        }
        removed
    }
    /// this is O(n)
    pub fn len(&self) -> usize {
        self.inner.iter().flatten().count()
    }
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
    pub fn clear(&mut self) {
        self.inner.clear()
    }
}

impl<T> std::iter::Extend<T> for Arena<T> {
    /// this is strictly more performant than calling add multiple times
    fn extend<I>(&mut self, new: I)
    where
        I: IntoIterator<Item = T>,
    {
        let empties = self.inner.iter_mut().filter(|e| e.is_none());
        let mut new = new.into_iter();
        for empty in empties {
            let new = new.next();
            if new.is_some() {
                *empty = new
            } else {
                // exhausted input, we are done
                return;
            }
        }
        // exhausted empty slots, push to end
        self.inner.extend(new.map(Some))
    }
}

impl<T> FromIterator<T> for Arena<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().map(Some).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_survive_removal() {
        let mut a: Arena<_> = ["a", "b", "c"].into_iter().collect();
        assert_eq!(a.remove(1), Some("b"));
        assert_eq!(a.remove(1), None);
        assert_eq!(a.get(2), Some(&"c"));
        assert_eq!(a.len(), 2);
        assert_eq!(a.iter_indexed().collect::<Vec<_>>(), [(0, &"a"), (2, &"c")]);
    }

    #[test]
    fn holes_get_reused() {
        let mut a: Arena<_> = (0..4).collect();
        assert_eq!(a.retain(|e| e % 2 == 0), 2);
        assert_eq!(a.add(10), 1);
        a.extend([11, 12, 13]);
        assert_eq!(a.iter().copied().collect::<Vec<_>>(), [0, 10, 2, 11, 12, 13]);
    }

    #[test]
    fn out_of_range_is_none() {
        let mut a: Arena<u8> = Arena::with_capacity(4);
        assert!(a.is_empty());
        assert_eq!(a.get(3), None);
        assert_eq!(a.remove(3), None);
        assert_eq!(a.get_mut(0), None);
    }
}
