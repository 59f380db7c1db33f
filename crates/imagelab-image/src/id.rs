//! Explicit image identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier distinguishing images held by one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(u64);

impl ImageId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out increasing [`ImageId`]s, starting at 1.
///
/// The allocator is an ordinary value owned by whoever manages the images;
/// two allocators never share state.
#[derive(Debug, Default)]
pub struct ImageIdAllocator {
    last: u64,
}

impl ImageIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next unused identifier, or `None` once every `u64` has been handed out.
    pub fn allocate(&mut self) -> Option<ImageId> {
        self.last = self.last.checked_add(1)?;
        Some(ImageId(self.last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut ids = ImageIdAllocator::new();
        let a = ids.allocate().unwrap();
        let b = ids.allocate().unwrap();
        assert_eq!(a.get(), 1);
        assert_eq!(b.get(), 2);
        assert!(b > a);
        assert_eq!(b.to_string(), "#2");
    }

    #[test]
    fn allocators_are_independent() {
        let mut first = ImageIdAllocator::new();
        first.allocate();
        let mut second = ImageIdAllocator::new();
        assert_eq!(second.allocate().unwrap().get(), 1);
    }

    #[test]
    fn exhausted_allocator_stops_instead_of_wrapping() {
        let mut ids = ImageIdAllocator { last: u64::MAX - 1 };
        assert_eq!(ids.allocate().map(ImageId::get), Some(u64::MAX));
        assert_eq!(ids.allocate(), None);
        assert_eq!(ids.allocate(), None);
    }
}
