//! Cyclic carousel over a fixed, non-empty list of items.
//!
//! Every index change produces a [`Slide`] describing the animation the
//! renderer should play. Only the newest slide is ever in flight: starting a
//! new one supersedes the previous, and [`Carousel::settle`] ignores stale
//! generations so late animation timers cannot clear a newer slide.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselError {
    #[error("carousel needs at least one item")]
    Empty,
    #[error("index {index} is out of range for a carousel of {len} items")]
    OutOfRangeIndex { index: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Incoming item enters from the right, outgoing leaves to the left.
    Forward,
    /// Mirror image of `Forward`.
    Backward,
}

impl Direction {
    /// CSS animation class for the incoming item.
    pub fn enter_class(self) -> &'static str {
        match self {
            Self::Forward => "slide-in-right",
            Self::Backward => "slide-in-left",
        }
    }

    /// CSS animation class for the outgoing item.
    pub fn exit_class(self) -> &'static str {
        match self {
            Self::Forward => "slide-out-left",
            Self::Backward => "slide-out-right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
    pub generation: u64,
}

#[derive(Debug, Clone)]
pub struct Carousel<T> {
    items: Vec<T>,
    current: usize,
    generation: u64,
    in_flight: Option<Slide>,
}

#[allow(clippy::len_without_is_empty)]
impl<T> Carousel<T> {
    pub fn new(items: Vec<T>) -> Result<Self, CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::Empty);
        }
        Ok(Self {
            items,
            current: 0,
            generation: 0,
            in_flight: None,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &T {
        &self.items[self.current]
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of transitions started so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn in_flight(&self) -> Option<Slide> {
        self.in_flight
    }

    pub fn next(&mut self) -> Slide {
        let to = (self.current + 1) % self.len();
        self.start(to, Direction::Forward)
    }

    pub fn previous(&mut self) -> Slide {
        let len = self.len();
        let to = (self.current + len - 1) % len;
        self.start(to, Direction::Backward)
    }

    /// Moves straight to `index`. Out of range indices leave the carousel untouched.
    pub fn jump_to(&mut self, index: usize) -> Result<Slide, CarouselError> {
        if index >= self.len() {
            return Err(CarouselError::OutOfRangeIndex {
                index,
                len: self.len(),
            });
        }
        let direction = if index > self.current {
            Direction::Forward
        } else {
            Direction::Backward
        };
        Ok(self.start(index, direction))
    }

    /// Marks the slide of `generation` as finished.
    ///
    /// Returns `false` when a newer slide has superseded it.
    pub fn settle(&mut self, generation: u64) -> bool {
        match self.in_flight {
            Some(slide) if slide.generation == generation => {
                self.in_flight = None;
                true
            }
            _ => false,
        }
    }

    fn start(&mut self, to: usize, direction: Direction) -> Slide {
        self.generation += 1;
        let slide = Slide {
            from: self.current,
            to,
            direction,
            generation: self.generation,
        };
        self.current = to;
        self.in_flight = Some(slide);
        slide
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn three() -> Carousel<&'static str> {
        Carousel::new(vec!["federated", "anomaly", "plotter"]).unwrap()
    }

    #[test]
    fn test_empty_carousel_is_rejected() {
        let res = Carousel::<u8>::new(vec![]);
        assert_eq!(res.unwrap_err(), CarouselError::Empty);
    }

    #[test]
    fn test_items_keep_order_while_cycling() {
        let mut c = three();
        c.next();
        c.jump_to(2).unwrap();
        assert_eq!(c.items(), ["federated", "anomaly", "plotter"]);
        assert_eq!(c.len(), c.items().len());
    }

    #[test]
    fn test_starts_at_first_item() {
        let c = three();
        assert_eq!(c.current_index(), 0);
        assert_eq!(*c.current(), "federated");
        assert_eq!(c.generation(), 0);
        assert!(c.in_flight().is_none());
    }

    #[test]
    fn test_next_wraps_around() {
        let mut c = three();
        let seen: Vec<usize> = (0..3).map(|_| c.next().to).collect();
        assert_eq!(seen, vec![1, 2, 0]);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_previous_from_first_goes_to_last() {
        let mut c = three();
        let slide = c.previous();
        assert_eq!(slide.from, 0);
        assert_eq!(slide.to, 2);
        assert_eq!(slide.direction, Direction::Backward);
        assert_eq!(*c.current(), "plotter");
    }

    #[test]
    fn test_jump_out_of_range_leaves_state() {
        let mut c = three();
        c.next();
        let before = c.in_flight();
        let err = c.jump_to(5).unwrap_err();
        assert_eq!(err, CarouselError::OutOfRangeIndex { index: 5, len: 3 });
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.in_flight(), before);
        assert_eq!(c.generation(), 1);
    }

    #[test]
    fn test_jump_direction_follows_target() {
        let mut c = three();
        let slide = c.jump_to(2).unwrap();
        assert_eq!(slide.direction, Direction::Forward);
        let slide = c.jump_to(0).unwrap();
        assert_eq!(slide.direction, Direction::Backward);
        assert_eq!(slide.from, 2);
    }

    #[test]
    fn test_jump_to_current_still_supersedes() {
        let mut c = three();
        let first = c.next();
        let again = c.jump_to(1).unwrap();
        assert_eq!(again.from, 1);
        assert_eq!(again.to, 1);
        assert!(!c.settle(first.generation));
        assert!(c.settle(again.generation));
    }

    #[test]
    fn test_settle_ignores_superseded_slides() {
        let mut c = three();
        let first = c.next();
        let second = c.next();
        assert!(!c.settle(first.generation));
        assert_eq!(c.in_flight(), Some(second));
        assert!(c.settle(second.generation));
        assert!(c.in_flight().is_none());
        // already settled
        assert!(!c.settle(second.generation));
    }

    #[test]
    fn test_single_item_cycles_to_itself() {
        let mut c = Carousel::new(vec!["only"]).unwrap();
        assert_eq!(c.next().to, 0);
        assert_eq!(c.previous().to, 0);
        assert_eq!(c.jump_to(1).unwrap_err(), CarouselError::OutOfRangeIndex { index: 1, len: 1 });
    }

    #[test]
    fn test_direction_classes_mirror() {
        assert_eq!(Direction::Forward.enter_class(), "slide-in-right");
        assert_eq!(Direction::Forward.exit_class(), "slide-out-left");
        assert_eq!(Direction::Backward.enter_class(), "slide-in-left");
        assert_eq!(Direction::Backward.exit_class(), "slide-out-right");
    }

    proptest! {
        #[test]
        fn test_index_stays_in_bounds(len in 1usize..12, steps in proptest::collection::vec(any::<bool>(), 0..64)) {
            let mut c = Carousel::new((0..len).collect::<Vec<_>>()).unwrap();
            for forward in steps {
                let slide = if forward { c.next() } else { c.previous() };
                prop_assert!(slide.to < len);
                prop_assert!(c.current_index() < len);
                prop_assert_eq!(*c.current(), c.current_index());
            }
        }

        #[test]
        fn test_next_previous_round_trip(len in 2usize..12, start in 0usize..12, next_first in any::<bool>()) {
            let mut c = Carousel::new((0..len).collect::<Vec<_>>()).unwrap();
            let start = start % len;
            c.jump_to(start).unwrap();
            if next_first {
                c.next();
                c.previous();
            } else {
                c.previous();
                c.next();
            }
            prop_assert_eq!(c.current_index(), start);
        }

        #[test]
        fn test_full_cycle_returns_home(len in 1usize..12, start in 0usize..12) {
            let mut c = Carousel::new((0..len).collect::<Vec<_>>()).unwrap();
            let start = start % len;
            c.jump_to(start).unwrap();
            for _ in 0..len {
                c.next();
            }
            prop_assert_eq!(c.current_index(), start);
        }

        #[test]
        fn test_out_of_range_jump_is_rejected(len in 1usize..12, start in 0usize..12, extra in 0usize..100) {
            let mut c = Carousel::new((0..len).collect::<Vec<_>>()).unwrap();
            let start = start % len;
            c.jump_to(start).unwrap();
            let index = len + extra;
            prop_assert_eq!(c.jump_to(index), Err(CarouselError::OutOfRangeIndex { index, len }));
            prop_assert_eq!(c.current_index(), start);
        }
    }
}
