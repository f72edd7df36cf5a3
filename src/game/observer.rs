use std::rc::Rc;

use super::state::GameState;
use super::types::GameEvent;

pub trait GameObserver {
    fn on_state_change(&self, state: &GameState, event: GameEvent);
}

#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<Rc<dyn GameObserver>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    // Idempotent by identity: the same Rc registered twice is stored once.
    pub fn add(&mut self, observer: Rc<dyn GameObserver>) {
        if self.observers.iter().any(|o| Rc::ptr_eq(o, &observer)) {
            return;
        }
        self.observers.push(observer);
    }

    pub fn remove(&mut self, observer: &Rc<dyn GameObserver>) {
        self.observers.retain(|o| !Rc::ptr_eq(o, observer));
    }

    // Iterates a snapshot of the registry taken at call time, in
    // registration order.
    pub fn notify(&self, state: &GameState, event: GameEvent) {
        let snapshot = self.observers.clone();
        for observer in snapshot {
            observer.on_state_change(state, event);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;
    use crate::game::types::{Direction, Point};

    struct Recorder {
        label: &'static str,
        seen: Rc<RefCell<Vec<(&'static str, GameEvent)>>>,
    }

    impl GameObserver for Recorder {
        fn on_state_change(&self, _state: &GameState, event: GameEvent) {
            self.seen.borrow_mut().push((self.label, event));
        }
    }

    fn dummy_state() -> GameState {
        GameState {
            width: 5,
            height: 5,
            snake: VecDeque::from([Point::new(2, 2)]),
            direction: Direction::Right,
            food: Point::new(0, 0),
            alive: true,
            score: 0,
        }
    }

    #[test]
    fn test_add_same_observer_twice_notifies_once() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let observer: Rc<dyn GameObserver> = Rc::new(Recorder {
            label: "a",
            seen: seen.clone(),
        });

        let mut registry = ObserverRegistry::new();
        registry.add(observer.clone());
        registry.add(observer);
        assert_eq!(registry.len(), 1);

        registry.notify(&dummy_state(), GameEvent::Step);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_structurally_identical_observers_are_distinct() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let first: Rc<dyn GameObserver> = Rc::new(Recorder {
            label: "a",
            seen: seen.clone(),
        });
        let second: Rc<dyn GameObserver> = Rc::new(Recorder {
            label: "a",
            seen: seen.clone(),
        });

        let mut registry = ObserverRegistry::new();
        registry.add(first);
        registry.add(second);
        assert_eq!(registry.len(), 2);

        registry.notify(&dummy_state(), GameEvent::Step);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_notification_follows_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let first: Rc<dyn GameObserver> = Rc::new(Recorder {
            label: "first",
            seen: seen.clone(),
        });
        let second: Rc<dyn GameObserver> = Rc::new(Recorder {
            label: "second",
            seen: seen.clone(),
        });

        let mut registry = ObserverRegistry::new();
        registry.add(first);
        registry.add(second);
        registry.notify(&dummy_state(), GameEvent::Reset);

        let seen = seen.borrow();
        assert_eq!(seen[0], ("first", GameEvent::Reset));
        assert_eq!(seen[1], ("second", GameEvent::Reset));
    }

    #[test]
    fn test_remove_unregisters_observer() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let observer: Rc<dyn GameObserver> = Rc::new(Recorder {
            label: "a",
            seen: seen.clone(),
        });

        let mut registry = ObserverRegistry::new();
        registry.add(observer.clone());
        registry.remove(&observer);
        assert!(registry.is_empty());

        registry.notify(&dummy_state(), GameEvent::Step);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_remove_absent_observer_is_noop() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let registered: Rc<dyn GameObserver> = Rc::new(Recorder {
            label: "a",
            seen: seen.clone(),
        });
        let stranger: Rc<dyn GameObserver> = Rc::new(Recorder {
            label: "b",
            seen: seen.clone(),
        });

        let mut registry = ObserverRegistry::new();
        registry.add(registered);
        registry.remove(&stranger);
        assert_eq!(registry.len(), 1);
    }
}
