use std::collections::TryReserveError;
use std::marker::PhantomData;
use std::vec::Vec;

/// 1-based position of a node inside one side of the pair.
/// Slot 0 is never live, so the tree arithmetic stays `i / 2`, `2i`, `2i + 1`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub(crate) struct Slot(usize);

impl Slot {
    pub(crate) const ROOT: Slot = Slot(1);

    #[inline(always)]
    pub(crate) fn new(index: usize) -> Self {
        debug_assert!(index > 0, "Slot 0 is never live");
        Self(index)
    }

    #[cfg(test)]
    #[inline(always)]
    pub(crate) fn as_usize(self) -> usize {
        self.0
    }

    #[inline(always)]
    fn parent(self) -> Slot {
        Slot(self.0 / 2)
    }

    #[inline(always)]
    fn left(self) -> Slot {
        Slot(self.0 * 2)
    }

    #[inline(always)]
    fn right(self) -> Slot {
        Slot(self.0 * 2 + 1)
    }

    // Position in backing vector
    #[inline(always)]
    fn offset(self) -> usize {
        self.0 - 1
    }
}

/// Index of an element in the value vector shared by both sides.
/// Kept apart from `Slot` so the two are never mixed up.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub(crate) struct ElementIndex(pub(crate) usize);

/// Decides which of two values belongs closer to the root.
pub(crate) trait Direction {
    fn outranks<T: Ord>(a: &T, b: &T) -> bool;
}

/// Smallest value at the root.
pub(crate) enum MinFirst {}

/// Biggest value at the root.
pub(crate) enum MaxFirst {}

impl Direction for MinFirst {
    #[inline(always)]
    fn outranks<T: Ord>(a: &T, b: &T) -> bool {
        a < b
    }
}

impl Direction for MaxFirst {
    #[inline(always)]
    fn outranks<T: Ord>(a: &T, b: &T) -> bool {
        a > b
    }
}

/// One array of the pair: a binary heap of element indexes ordered by the values they point at.
///
/// `elements[slot]` names the element sitting at `slot`, `slots[element]` is the inverse.
/// Every swap rewrites both, so the slot of an element on this side is one lookup away,
/// and the opposite side's slot for the element at `slot` is `other.slot_of(self.element(slot))`.
///
/// Values themselves live outside, in a vector indexed by `ElementIndex`,
/// and are passed in by reference whenever entries have to be compared.
pub(crate) struct HeapSide<D> {
    elements: Vec<ElementIndex>,
    slots: Vec<Slot>,
    direction: PhantomData<D>,
}

impl<D> HeapSide<D> {
    #[inline(always)]
    pub(crate) fn new() -> Self {
        Self {
            elements: Vec::new(),
            slots: Vec::new(),
            direction: PhantomData,
        }
    }

    #[inline(always)]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            slots: Vec::with_capacity(capacity),
            direction: PhantomData,
        }
    }

    /// Places elements `0..len` at slots `1..=len` in order.
    /// Result is not heap-ordered yet.
    pub(crate) fn identity(len: usize) -> Self {
        Self {
            elements: (0..len).map(ElementIndex).collect(),
            slots: (1..=len).map(Slot).collect(),
            direction: PhantomData,
        }
    }

    pub(crate) fn try_reserve_exact(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.elements.try_reserve_exact(additional)?;
        self.slots.try_reserve_exact(additional)
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline(always)]
    pub(crate) fn clear(&mut self) {
        self.elements.clear();
        self.slots.clear();
    }

    #[inline(always)]
    pub(crate) fn last_slot(&self) -> Option<Slot> {
        if self.elements.is_empty() {
            None
        } else {
            Some(Slot(self.elements.len()))
        }
    }

    #[inline(always)]
    pub(crate) fn peek(&self) -> Option<ElementIndex> {
        self.elements.first().copied()
    }

    #[inline(always)]
    pub(crate) fn element(&self, slot: Slot) -> ElementIndex {
        self.elements[slot.offset()]
    }

    #[inline(always)]
    pub(crate) fn slot_of(&self, ElementIndex(element): ElementIndex) -> Slot {
        self.slots[element]
    }

    /// Appends the next element to the last slot without restoring order.
    /// Elements must be pushed in index order, `0, 1, 2, ...`.
    /// Returns the slot it landed in.
    #[inline(always)]
    pub(crate) fn push(&mut self, element: ElementIndex) -> Slot {
        debug_assert_eq!(element.0, self.slots.len(), "Elements must be pushed in order");
        self.elements.push(element);
        let slot = Slot(self.elements.len());
        self.slots.push(slot);
        slot
    }

    /// Exchanges two slots and rewrites the slots of both moved elements.
    pub(crate) fn swap(&mut self, a: Slot, b: Slot) {
        debug_assert!(a.offset() < self.elements.len(), "Out of index in first pos in swap");
        debug_assert!(b.offset() < self.elements.len(), "Out of index in second pos in swap");
        if a == b {
            return;
        }
        self.elements.swap(a.offset(), b.offset());
        self.slots[self.elements[a.offset()].0] = a;
        self.slots[self.elements[b.offset()].0] = b;
    }

    /// Drops an element whose value was just removed from the value vector with `swap_remove`.
    /// The element that had the last index now answers to `removed`.
    ///
    /// `removed` must be gone from the heap already, see [`remove`](HeapSide::remove).
    pub(crate) fn forget(&mut self, removed: ElementIndex) {
        debug_assert_eq!(self.slots.len(), self.elements.len() + 1);
        self.slots.swap_remove(removed.0);
        if let Some(&moved) = self.slots.get(removed.0) {
            self.elements[moved.offset()] = removed;
        }
    }
}

impl<D: Direction> HeapSide<D> {
    #[inline(always)]
    fn outranks<T: Ord>(&self, a: Slot, b: Slot, values: &[T]) -> bool {
        D::outranks(&values[self.element(a).0], &values[self.element(b).0])
    }

    /// Moves entry toward the root while it outranks its parent.
    /// Returns final slot.
    pub(crate) fn sift_up<T: Ord>(&mut self, slot: Slot, values: &[T]) -> Slot {
        debug_assert!(slot.offset() < self.elements.len(), "Out of index in sift_up");
        let mut position = slot;
        while position != Slot::ROOT {
            let parent = position.parent();
            if self.outranks(position, parent, values) {
                self.swap(parent, position);
                position = parent;
            } else {
                break;
            }
        }
        position
    }

    /// Moves entry toward the leaves while some child outranks it.
    /// Returns final slot.
    pub(crate) fn sift_down<T: Ord>(&mut self, slot: Slot, values: &[T]) -> Slot {
        debug_assert!(slot.offset() < self.elements.len(), "Out of index in sift_down");
        let len = self.elements.len();
        let mut position = slot;
        loop {
            let best_child = {
                let left = position.left();
                let right = position.right();
                if left.0 > len {
                    break;
                }
                if right.0 <= len && self.outranks(right, left, values) {
                    right
                } else {
                    left
                }
            };

            if self.outranks(best_child, position, values) {
                self.swap(position, best_child);
                position = best_child;
            } else {
                break;
            }
        }
        position
    }

    /// Puts an entry that was dropped into an arbitrary slot back in order.
    /// It may belong above its parent or below its children, never both.
    pub(crate) fn restore<T: Ord>(&mut self, slot: Slot, values: &[T]) -> Slot {
        let position = self.sift_up(slot, values);
        if position != slot {
            return position;
        }
        self.sift_down(slot, values)
    }

    /// Takes the element at `slot` out of the heap: the last entry fills the hole
    /// and is restored from there.
    ///
    /// The slot table still holds the removed element until [`forget`](HeapSide::forget).
    pub(crate) fn remove<T: Ord>(&mut self, slot: Slot, values: &[T]) -> Option<ElementIndex> {
        let last = self.last_slot()?;
        self.swap(slot, last);
        let removed = self.elements.pop()?;
        if slot < last {
            self.restore(slot, values);
        }
        Some(removed)
    }
}

// Default implementations

impl<D> Clone for HeapSide<D> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            slots: self.slots.clone(),
            direction: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_valid_heap<T: Ord, D: Direction>(side: &HeapSide<D>, values: &[T]) -> bool {
        (2..=side.len())
            .map(Slot)
            .all(|slot| !side.outranks(slot, slot.parent(), values))
    }

    fn assert_slots_match<D>(side: &HeapSide<D>) {
        assert_eq!(side.slots.len(), side.len(), "Slot table has stale entries");
        for position in (1..=side.len()).map(Slot) {
            let element = side.element(position);
            assert_eq!(
                side.slot_of(element),
                position,
                "Slot of {:?} is stale",
                element
            );
        }
    }

    fn values_in_slot_order<T: Copy, D>(side: &HeapSide<D>, values: &[T]) -> Vec<T> {
        (1..=side.len())
            .map(|slot| values[side.element(Slot(slot)).0])
            .collect()
    }

    #[test]
    fn test_slot_arithmetic() {
        let slot = Slot::new(5);
        assert_eq!(slot.parent(), Slot(2));
        assert_eq!(slot.left(), Slot(10));
        assert_eq!(slot.right(), Slot(11));
        assert_eq!(slot.offset(), 4);
        assert_eq!(Slot::ROOT.parent(), Slot(0));
        assert_eq!(Slot::ROOT.left(), Slot(2));
    }

    #[test]
    fn test_sift_up_keeps_slots() {
        let items = [
            70, 50, 0, 1, 2, 4, 6, 7, 9, 72, 4, 4, 87, 78, 72, 6, 7, 9, 2, -50, -72, -50, -42, -1,
            -3, -13,
        ];
        let mut side = HeapSide::<MaxFirst>::new();
        let mut maximum = std::i32::MIN;
        assert!(side.peek().is_none());
        for (i, &x) in items.iter().enumerate() {
            let slot = side.push(ElementIndex(i));
            side.sift_up(slot, &items);
            maximum = maximum.max(x);
            assert_eq!(side.peek().map(|e| items[e.0]), Some(maximum));
            assert!(is_valid_heap(&side, &items), "Heap is invalid after {}", x);
            assert_slots_match(&side);
        }
    }

    #[test]
    fn test_sift_down_min_side() {
        let items = [9, 3, 7, 1, 8, 2, 6, 4, 5, 0];
        let mut side = HeapSide::<MinFirst>::identity(items.len());
        for slot in (1..=side.len() / 2).rev().map(Slot) {
            side.sift_down(slot, &items);
        }
        assert!(is_valid_heap(&side, &items), "Heap must be valid after heapify");
        assert_eq!(side.peek(), Some(ElementIndex(9)));
        assert_slots_match(&side);
    }

    #[test]
    fn test_remove_moves_up() {
        // Max side with a small value deep in the left subtree.
        let items = [10, 2, 9, 1, 1, 8, 8];
        let mut side = HeapSide::<MaxFirst>::identity(items.len());
        assert!(is_valid_heap(&side, &items));

        // 8 from the last slot lands under 2 and must climb.
        assert_eq!(side.remove(Slot(4), &items), Some(ElementIndex(3)));
        assert!(is_valid_heap(&side, &items));
        assert_eq!(items[side.element(Slot(2)).0], 8);
        assert_eq!(items[side.element(Slot(4)).0], 2);
    }

    #[test]
    fn test_remove_moves_down() {
        let items = [10, 9, 8, 7, 6, 5, 4];
        let mut side = HeapSide::<MaxFirst>::identity(items.len());
        assert_eq!(side.remove(Slot::ROOT, &items), Some(ElementIndex(0)));
        assert!(is_valid_heap(&side, &items));
        assert_eq!(side.peek(), Some(ElementIndex(1)));
    }

    #[test]
    fn test_remove_last_slot() {
        let items = [1, 2, 3];
        let mut side = HeapSide::<MinFirst>::identity(items.len());
        assert_eq!(side.remove(Slot(3), &items), Some(ElementIndex(2)));
        assert_eq!(values_in_slot_order(&side, &items), vec![1, 2]);

        let mut empty = HeapSide::<MinFirst>::new();
        assert_eq!(empty.remove(Slot::ROOT, &items), None);
    }

    #[test]
    fn test_forget_relabels_last_element() {
        let mut items = vec![4, 1, 3, 2];
        let mut side = HeapSide::<MinFirst>::identity(items.len());
        for slot in (1..=side.len() / 2).rev().map(Slot) {
            side.sift_down(slot, &items);
        }

        let root = side.remove(Slot::ROOT, &items).unwrap();
        assert_eq!(items[root.0], 1);
        items.swap_remove(root.0);
        side.forget(root);

        assert_slots_match(&side);
        assert!(is_valid_heap(&side, &items));
        // Value 2 had the last index and now answers to the removed one.
        assert_eq!(side.peek(), Some(ElementIndex(1)));
        assert_eq!(items[1], 2);
    }

    #[test]
    fn test_forget_last_index() {
        let mut items = vec![1, 2];
        let mut side = HeapSide::<MaxFirst>::identity(items.len());
        side.sift_down(Slot::ROOT, &items);
        let root = side.remove(Slot::ROOT, &items).unwrap();
        assert_eq!(root, ElementIndex(1));
        items.swap_remove(root.0);
        side.forget(root);
        assert_slots_match(&side);
        assert_eq!(side.peek(), Some(ElementIndex(0)));
    }

    #[test]
    fn test_swap_same_slot_is_noop() {
        let items = [1, 2, 3];
        let mut side = HeapSide::<MinFirst>::identity(items.len());
        side.swap(Slot(2), Slot(2));
        assert_slots_match(&side);
        side.swap(Slot(1), Slot(3));
        assert_slots_match(&side);
        assert_eq!(values_in_slot_order(&side, &items), vec![3, 2, 1]);
    }

    #[test]
    fn test_clear() {
        let mut side = HeapSide::<MinFirst>::identity(5);
        assert!(!side.is_empty(), "Heap must be non empty");
        side.clear();
        assert!(side.is_empty(), "Heap must be empty");
        assert_eq!(side.last_slot(), None);
        assert_eq!(side.peek(), None);
    }
}
