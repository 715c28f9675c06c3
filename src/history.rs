use std::collections::VecDeque;

use crate::palette::{Palette, PaletteId};

/// Committed palettes, most recent first. Pushing past capacity drops the
/// oldest entry.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<Palette>,
    capacity: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        History {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, palette: Palette) {
        self.entries.push_front(palette);
        self.entries.truncate(self.capacity);
    }

    pub fn find(&self, id: PaletteId) -> Option<&Palette> {
        self.entries.iter().find(|p| p.id() == id)
    }

    pub fn get(&self, index: usize) -> Option<&Palette> {
        self.entries.get(index)
    }

    pub fn latest(&self) -> Option<&Palette> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Palette> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Color;

    fn palette(hex: &str) -> Palette {
        Palette::new(vec![Color::new(hex, false)])
    }

    #[test]
    fn newest_first() {
        let mut history = History::new(3);
        let a = palette("#aa0000");
        let b = palette("#00aa00");

        history.push(a.clone());
        history.push(b.clone());

        assert_eq!(history.latest(), Some(&b));
        assert_eq!(history.get(1), Some(&a));
    }

    #[test]
    fn evicts_oldest_at_capacity() {
        let mut history = History::new(3);
        let first = palette("#000001");
        history.push(first.clone());

        for i in 2..=5 {
            history.push(palette(&format!("#00000{}", i)));
        }

        assert_eq!(history.len(), 3);
        assert!(history.find(first.id()).is_none());
        assert_eq!(history.latest().unwrap().colors()[0].hex(), "#000005");
        assert_eq!(history.get(2).unwrap().colors()[0].hex(), "#000003");
    }
}
