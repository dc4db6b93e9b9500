use std::collections::VecDeque;

use super::KeyedVec;
use super::StorageKey;

/// A first-in first-out queue which holds every element at most once.
///
/// Pushing an element which is still pending is a no-op; once an element has been popped it can be
/// pushed again, in which case it is placed at the back of the queue. This is the worklist used to
/// establish arc consistency.
#[derive(Debug, Clone)]
pub struct UniqueQueue<Key> {
    queue: VecDeque<Key>,
    is_enqueued: KeyedVec<Key, bool>,
}

impl<Key> Default for UniqueQueue<Key> {
    fn default() -> Self {
        UniqueQueue {
            queue: VecDeque::default(),
            is_enqueued: KeyedVec::default(),
        }
    }
}

impl<Key: StorageKey> UniqueQueue<Key> {
    /// Enqueues `element` unless it is already pending.
    ///
    /// Returns `true` if the element was added to the queue.
    pub fn push(&mut self, element: Key) -> bool {
        if self.contains(element.clone()) {
            return false;
        }

        self.is_enqueued.accomodate(element.clone(), false);
        self.is_enqueued[element.clone()] = true;
        self.queue.push_back(element);
        true
    }

    pub fn pop(&mut self) -> Option<Key> {
        let element = self.queue.pop_front()?;
        self.is_enqueued[element.clone()] = false;
        Some(element)
    }

    pub fn contains(&self, element: Key) -> bool {
        self.is_enqueued.get(element).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<Key: StorageKey> Extend<Key> for UniqueQueue<Key> {
    fn extend<I: IntoIterator<Item = Key>>(&mut self, iter: I) {
        for element in iter {
            let _ = self.push(element);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_are_not_enqueued_while_pending() {
        let mut queue = UniqueQueue::default();

        for _ in 0..10 {
            let _ = queue.push(2_u32);
        }
        for _ in 0..8 {
            let _ = queue.push(3_u32);
        }
        for _ in 0..18 {
            let _ = queue.push(2_u32);
        }

        assert_eq!(2, queue.len());
        assert_eq!(Some(2), queue.pop());
        assert_eq!(Some(3), queue.pop());
        assert_eq!(None, queue.pop());
    }

    #[test]
    fn popped_elements_can_be_enqueued_again() {
        let mut queue = UniqueQueue::default();
        assert!(queue.push(0_u32));
        assert!(queue.push(1_u32));

        assert_eq!(Some(0), queue.pop());
        assert!(!queue.contains(0));

        assert!(queue.push(0_u32));
        assert!(!queue.push(1_u32));

        assert_eq!(Some(1), queue.pop());
        assert_eq!(Some(0), queue.pop());
        assert!(queue.is_empty());
    }

    #[test]
    fn order_follows_arrival_of_distinct_elements() {
        let mut queue = UniqueQueue::default();
        queue.extend([4_usize, 1, 4, 3, 1, 0]);

        let popped = std::iter::from_fn(|| queue.pop()).collect::<Vec<_>>();
        assert_eq!(vec![4, 1, 3, 0], popped);
    }
}
