use super::error::CollectionError;
use slotmap::{SlotMap, new_key_type};
use std::fmt;
use std::iter::FusedIterator;

new_key_type! {
    struct NodeId;
}

#[derive(Debug, Clone)]
struct Node<T> {
    item: T,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// A double-ended queue backed by a doubly-linked chain of nodes.
///
/// Nodes live in a slot-map arena and refer to each other through handles,
/// so the chain owns every payload exactly once and no node is shared.
/// Insertion and removal at either end touch at most two nodes.
#[derive(Clone)]
pub struct Deque<T> {
    nodes: SlotMap<NodeId, Node<T>>,
    front: Option<NodeId>,
    back: Option<NodeId>,
}

impl<T> Deque<T> {
    /// Creates an empty deque.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            front: None,
            back: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Inserts `item` at the front.
    pub fn add_first(&mut self, item: T) {
        let id = self.nodes.insert(Node {
            item,
            prev: None,
            next: self.front,
        });
        match self.front {
            Some(old_front) => self.nodes[old_front].prev = Some(id),
            None => self.back = Some(id),
        }
        self.front = Some(id);
    }

    /// Inserts `item` at the back.
    pub fn add_last(&mut self, item: T) {
        let id = self.nodes.insert(Node {
            item,
            prev: self.back,
            next: None,
        });
        match self.back {
            Some(old_back) => self.nodes[old_back].next = Some(id),
            None => self.front = Some(id),
        }
        self.back = Some(id);
    }

    /// Removes and returns the item at the front.
    pub fn remove_first(&mut self) -> Result<T, CollectionError> {
        let node = self
            .front
            .and_then(|id| self.nodes.remove(id))
            .ok_or(CollectionError::Empty {
                operation: "remove_first",
            })?;

        self.front = node.next;
        match node.next {
            Some(new_front) => self.nodes[new_front].prev = None,
            None => self.back = None,
        }
        Ok(node.item)
    }

    /// Removes and returns the item at the back.
    pub fn remove_last(&mut self) -> Result<T, CollectionError> {
        let node = self
            .back
            .and_then(|id| self.nodes.remove(id))
            .ok_or(CollectionError::Empty {
                operation: "remove_last",
            })?;

        self.back = node.prev;
        match node.prev {
            Some(new_back) => self.nodes[new_back].next = None,
            None => self.front = None,
        }
        Ok(node.item)
    }

    pub fn peek_first(&self) -> Option<&T> {
        self.front.map(|id| &self.nodes[id].item)
    }

    pub fn peek_last(&self) -> Option<&T> {
        self.back.map(|id| &self.nodes[id].item)
    }

    /// Returns a front-to-back iterator over the items.
    ///
    /// Every call starts a fresh traversal; any number of iterators may be
    /// alive at once.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            head: self.front,
            tail: self.back,
            remaining: self.nodes.len(),
        }
    }

    /// Verifies the structural invariants of the node chain.
    ///
    /// An empty deque has no ends; a single node is both ends and has no
    /// links; otherwise the ends differ, their outward links are absent, and
    /// walking forward from the front visits exactly `len()` nodes and stops
    /// at the back, with every `prev` mirroring the `next` that led to it.
    pub fn check_invariants(&self) -> bool {
        match (self.front, self.back) {
            (None, None) => self.nodes.is_empty(),
            (Some(front), Some(back)) if self.nodes.len() == 1 => {
                let node = &self.nodes[front];
                front == back && node.prev.is_none() && node.next.is_none()
            }
            (Some(front), Some(back)) => {
                if front == back
                    || self.nodes.len() < 2
                    || self.nodes[front].prev.is_some()
                    || self.nodes[back].next.is_some()
                {
                    return false;
                }

                let mut visited = 1;
                let mut current = front;
                while let Some(next) = self.nodes[current].next {
                    if self.nodes[next].prev != Some(current) || visited > self.nodes.len() {
                        return false;
                    }
                    visited += 1;
                    current = next;
                }
                visited == self.nodes.len() && current == back
            }
            _ => false,
        }
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add_last(item);
        }
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

pub struct Iter<'a, T> {
    nodes: &'a SlotMap<NodeId, Node<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let node = &nodes[self.head?];
        self.head = node.next;
        self.remaining -= 1;
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let node = &nodes[self.tail?];
        self.tail = node.prev;
        self.remaining -= 1;
        Some(&node.item)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct IntoIter<T>(Deque<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.remove_first().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.0.remove_last().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}
