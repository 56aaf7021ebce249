use std::fmt::Debug;
use std::iter::{FromIterator, FusedIterator};

use crate::error::DualHeapError;
use crate::mirrored_heap::{Direction, ElementIndex, HeapSide, MaxFirst, MinFirst, Slot};

/// Backing slots allocated by [`DualHeap::new`], counting the unused slot 0.
///
/// [`DualHeap::new`]: struct.DualHeap.html#method.new
pub const DEFAULT_CAPACITY: usize = 50;

/// Factor applied to capacity when an insert finds the container full.
pub const GROWTH_FACTOR: usize = 2;

/// A double-ended priority queue.
///
/// Every element is stored once. Two binary heaps of element indexes sit on top of the values:
/// one ordered by minimum and one by maximum.
/// Each heap knows the slot of every element, so removing an extremum from one heap
/// finds and removes the same element from the other without a scan.
///
/// It is logic error if an element's ordering changes while it is in the container.
/// This is normally possible only through `Cell`, `RefCell`, global state, IO, or unsafe code.
///
/// # Examples
///
/// ```
/// use dual_heap::{DualHeap, DualHeapError};
///
/// let mut heap = DualHeap::new();
///
/// // Currently heap is empty
/// assert_eq!(heap.find_min(), Err(DualHeapError::NotFound));
///
/// heap.insert(1000).unwrap();
/// heap.insert(1).unwrap();
/// heap.insert(5).unwrap();
///
/// // Both ends are visible at once
/// assert_eq!(heap.find_min(), Ok(&1));
/// assert_eq!(heap.find_max(), Ok(&1000));
/// assert_eq!(heap.len(), 3);
///
/// assert_eq!(heap.extract_max(), Ok(1000));
/// assert_eq!(heap.extract_max(), Ok(5));
/// assert_eq!(heap.extract_max(), Ok(1));
/// assert_eq!(heap.extract_max(), Err(DualHeapError::NotFound));
/// ```
#[derive(Clone)]
pub struct DualHeap<T> {
    // Indexed by ElementIndex
    values: Vec<T>,
    min: HeapSide<MinFirst>,
    max: HeapSide<MaxFirst>,
    // Backing slots including the unused slot 0, always > len()
    capacity: usize,
}

impl<T: Ord> DualHeap<T> {
    /// Creates an empty heap with [`DEFAULT_CAPACITY`] slots.
    ///
    /// ### Examples
    ///
    /// ```
    /// use dual_heap::{DualHeap, DEFAULT_CAPACITY};
    /// let heap: DualHeap<i32> = DualHeap::new();
    /// assert!(heap.is_empty());
    /// assert_eq!(heap.capacity(), DEFAULT_CAPACITY);
    /// ```
    ///
    /// [`DEFAULT_CAPACITY`]: constant.DEFAULT_CAPACITY.html
    #[inline]
    pub fn new() -> Self {
        let elements = DEFAULT_CAPACITY - 1;
        Self {
            values: Vec::with_capacity(elements),
            min: HeapSide::with_capacity(elements),
            max: HeapSide::with_capacity(elements),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Creates an empty heap that holds `capacity` elements before it grows.
    ///
    /// Fails with [`DualHeapError::InvalidArgument`] when `capacity` is zero
    /// or when storage for that many elements cannot be allocated.
    ///
    /// ### Examples
    ///
    /// ```
    /// use dual_heap::{DualHeap, DualHeapError};
    /// let mut heap = DualHeap::with_capacity(10).unwrap();
    /// heap.insert("Key").unwrap();
    /// assert_eq!(heap.capacity(), 11);
    ///
    /// assert!(matches!(
    ///     DualHeap::<i32>::with_capacity(0),
    ///     Err(DualHeapError::InvalidArgument(_))
    /// ));
    /// assert!(matches!(
    ///     DualHeap::<u64>::with_capacity(usize::MAX - 1),
    ///     Err(DualHeapError::InvalidArgument(_))
    /// ));
    /// ```
    ///
    /// [`DualHeapError::InvalidArgument`]: enum.DualHeapError.html#variant.InvalidArgument
    pub fn with_capacity(capacity: usize) -> Result<Self, DualHeapError> {
        if capacity == 0 {
            return Err(DualHeapError::InvalidArgument("capacity must be positive"));
        }
        let slots = capacity
            .checked_add(1)
            .ok_or(DualHeapError::InvalidArgument("capacity overflows usize"))?;
        let mut heap = Self::unallocated();
        heap.set_capacity(slots)?;
        Ok(heap)
    }

    /// Builds a heap from `values` in place, without copying them.
    ///
    /// Both heaps start as the identity over `values`,
    /// then each is heapified bottom-up on its own.
    /// Capacity is exactly `values.len() + 1`, so the next insert grows.
    ///
    /// ### Examples
    ///
    /// ```
    /// use dual_heap::DualHeap;
    /// let heap = DualHeap::from_vec(vec![3, 1, 4, 1, 5, 9, 2, 6]);
    /// assert_eq!(heap.find_min(), Ok(&1));
    /// assert_eq!(heap.find_max(), Ok(&9));
    /// assert_eq!(heap.into_sorted_vec(), vec![1, 1, 2, 3, 4, 5, 6, 9]);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(n)***
    pub fn from_vec(values: Vec<T>) -> Self {
        let len = values.len();
        let mut heap = Self {
            values,
            min: HeapSide::identity(len),
            max: HeapSide::identity(len),
            capacity: len + 1,
        };

        for slot in (1..=len / 2).rev().map(Slot::new) {
            heap.min.sift_down(slot, &heap.values);
            heap.max.sift_down(slot, &heap.values);
        }
        heap
    }

    /// Adds element to the heap.
    ///
    /// Grows storage by [`GROWTH_FACTOR`] when full.
    /// Fails with [`DualHeapError::InvalidState`] if capacity is zero,
    /// since growing zero gives zero, or if grown storage cannot be allocated.
    /// Use [`reserve`] to recover a zero-capacity heap.
    ///
    /// ### Examples
    ///
    /// ```
    /// use dual_heap::DualHeap;
    /// let mut heap = DualHeap::with_capacity(1).unwrap();
    /// for x in 0..5 {
    ///     heap.insert(x).unwrap();
    /// }
    /// assert_eq!(heap.len(), 5);
    /// assert_eq!(heap.find_max(), Ok(&4));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(log n)***, amortized over growth.
    ///
    /// [`GROWTH_FACTOR`]: constant.GROWTH_FACTOR.html
    /// [`DualHeapError::InvalidState`]: enum.DualHeapError.html#variant.InvalidState
    /// [`reserve`]: struct.DualHeap.html#method.reserve
    pub fn insert(&mut self, element: T) -> Result<(), DualHeapError> {
        if self.is_full() {
            self.grow()?;
        }

        let index = ElementIndex(self.values.len());
        self.values.push(element);
        let min_slot = self.min.push(index);
        let max_slot = self.max.push(index);
        self.min.sift_up(min_slot, &self.values);
        self.max.sift_up(max_slot, &self.values);
        Ok(())
    }

    /// Same as [`insert`] for a value that may be absent.
    /// `None` is rejected with [`DualHeapError::InvalidArgument`] and nothing changes.
    ///
    /// ### Examples
    ///
    /// ```
    /// use dual_heap::{DualHeap, DualHeapError};
    /// let mut heap = DualHeap::new();
    /// assert_eq!(heap.try_insert(Some(3)), Ok(()));
    /// assert!(matches!(heap.try_insert(None), Err(DualHeapError::InvalidArgument(_))));
    /// assert_eq!(heap.len(), 1);
    /// ```
    ///
    /// [`insert`]: struct.DualHeap.html#method.insert
    /// [`DualHeapError::InvalidArgument`]: enum.DualHeapError.html#variant.InvalidArgument
    #[inline]
    pub fn try_insert(&mut self, element: Option<T>) -> Result<(), DualHeapError> {
        match element {
            Some(element) => self.insert(element),
            None => Err(DualHeapError::InvalidArgument("element is absent")),
        }
    }

    /// Removes and returns the smallest element.
    ///
    /// ### Examples
    ///
    /// ```
    /// use dual_heap::{DualHeap, DualHeapError};
    /// let mut heap: DualHeap<i32> = [4, 2, 8].iter().copied().collect();
    /// assert_eq!(heap.extract_min(), Ok(2));
    /// assert_eq!(heap.extract_min(), Ok(4));
    /// assert_eq!(heap.extract_min(), Ok(8));
    /// assert_eq!(heap.extract_min(), Err(DualHeapError::NotFound));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(log n)***
    #[inline]
    pub fn extract_min(&mut self) -> Result<T, DualHeapError> {
        take_root(&mut self.values, &mut self.min, &mut self.max).ok_or(DualHeapError::NotFound)
    }

    /// Removes and returns the biggest element.
    ///
    /// ### Examples
    ///
    /// ```
    /// use dual_heap::{DualHeap, DualHeapError};
    /// let mut heap: DualHeap<i32> = [4, 2, 8].iter().copied().collect();
    /// assert_eq!(heap.extract_max(), Ok(8));
    /// assert_eq!(heap.extract_max(), Ok(4));
    /// assert_eq!(heap.extract_max(), Ok(2));
    /// assert_eq!(heap.extract_max(), Err(DualHeapError::NotFound));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(log n)***
    #[inline]
    pub fn extract_max(&mut self) -> Result<T, DualHeapError> {
        take_root(&mut self.values, &mut self.max, &mut self.min).ok_or(DualHeapError::NotFound)
    }

    /// Reserves room for at least `additional` more elements without growing.
    ///
    /// Fails with [`DualHeapError::InvalidArgument`] when the new capacity overflows
    /// or cannot be allocated; the heap is left as it was.
    ///
    /// ```
    /// use dual_heap::DualHeap;
    /// let mut heap: DualHeap<i32> = DualHeap::with_capacity(2).unwrap();
    /// heap.reserve(100).unwrap();
    /// assert!(heap.capacity() > 100);
    /// assert!(heap.reserve(usize::MAX).is_err());
    /// ```
    ///
    /// [`DualHeapError::InvalidArgument`]: enum.DualHeapError.html#variant.InvalidArgument
    pub fn reserve(&mut self, additional: usize) -> Result<(), DualHeapError> {
        let required = self
            .len()
            .checked_add(additional)
            .and_then(|elements| elements.checked_add(1))
            .ok_or(DualHeapError::InvalidArgument("capacity overflows usize"))?;
        if required > self.capacity {
            self.set_capacity(required)?;
        }
        Ok(())
    }

    /// Returns all elements in ascending order.
    ///
    /// ### Time complexity
    ///
    /// ***O(n log n)***
    #[inline]
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    #[inline(always)]
    fn is_full(&self) -> bool {
        self.len() + 1 >= self.capacity
    }

    fn grow(&mut self) -> Result<(), DualHeapError> {
        if self.capacity == 0 {
            return Err(DualHeapError::InvalidState);
        }
        self.set_capacity(self.capacity.saturating_mul(GROWTH_FACTOR))
            .map_err(|_| DualHeapError::InvalidState)
    }
}

impl<T> DualHeap<T> {
    // Zero slots, nothing allocated
    #[inline]
    fn unallocated() -> Self {
        Self {
            values: Vec::new(),
            min: HeapSide::new(),
            max: HeapSide::new(),
            capacity: 0,
        }
    }

    // Either every vector has room for `capacity - 1` elements or capacity stays as it was.
    fn set_capacity(&mut self, capacity: usize) -> Result<(), DualHeapError> {
        debug_assert!(capacity > self.len(), "Capacity must cover slot 0 and all elements");
        let additional = capacity - 1 - self.len();
        self.values
            .try_reserve_exact(additional)
            .and_then(|_| self.min.try_reserve_exact(additional))
            .and_then(|_| self.max.try_reserve_exact(additional))
            .map_err(|_| DualHeapError::InvalidArgument("capacity exceeds available memory"))?;
        self.capacity = capacity;
        Ok(())
    }

    /// Returns the smallest element without removing it.
    ///
    /// ### Examples
    ///
    /// ```
    /// use dual_heap::{DualHeap, DualHeapError};
    /// let mut heap = DualHeap::new();
    /// assert_eq!(heap.find_min(), Err(DualHeapError::NotFound));
    /// heap.insert(i32::MAX).unwrap();
    /// heap.insert(i32::MIN).unwrap();
    /// assert_eq!(heap.find_min(), Ok(&i32::MIN));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    #[inline]
    pub fn find_min(&self) -> Result<&T, DualHeapError> {
        self.min
            .peek()
            .map(|ElementIndex(index)| &self.values[index])
            .ok_or(DualHeapError::NotFound)
    }

    /// Returns the biggest element without removing it.
    ///
    /// ### Examples
    ///
    /// ```
    /// use dual_heap::{DualHeap, DualHeapError};
    /// let mut heap = DualHeap::new();
    /// assert_eq!(heap.find_max(), Err(DualHeapError::NotFound));
    /// heap.insert(i32::MAX).unwrap();
    /// heap.insert(i32::MIN).unwrap();
    /// assert_eq!(heap.find_max(), Ok(&i32::MAX));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    #[inline]
    pub fn find_max(&self) -> Result<&T, DualHeapError> {
        self.max
            .peek()
            .map(|ElementIndex(index)| &self.values[index])
            .ok_or(DualHeapError::NotFound)
    }

    /// Get the number of elements in heap.
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    #[inline]
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.values.len(), self.min.len());
        debug_assert_eq!(self.values.len(), self.max.len());
        self.values.len()
    }

    /// Returns true if heap is empty.
    ///
    /// ```
    /// let mut heap = dual_heap::DualHeap::new();
    /// assert!(heap.is_empty());
    /// heap.insert(5).unwrap();
    /// assert!(!heap.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.min.is_empty(), self.max.is_empty());
        self.values.is_empty()
    }

    /// Length of each backing array, counting the unused slot 0.
    /// Heap is full when `len() == capacity() - 1`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Make the heap empty. Capacity is kept.
    ///
    /// ### Time complexity
    ///
    /// Always ***O(n)***
    #[inline]
    pub fn clear(&mut self) {
        self.values.clear();
        self.min.clear();
        self.max.clear();
    }

    /// Create readonly borrowing iterator over heap.
    /// Elements come in storage order, which is not sorted.
    ///
    /// ```
    /// use dual_heap::DualHeap;
    /// let heap: DualHeap<i32> = (0..5).collect();
    /// let mut seen: Vec<i32> = heap.iter().copied().collect();
    /// seen.sort();
    /// assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            values: self.values.iter(),
        }
    }
}

// Removes the root of `near` and the same element from `far`.
// Each side fills the hole with its last entry and reorders from there;
// on `far` the hole may be anywhere, so the filler can move either way.
// The value leaves with `swap_remove`, and both sides relabel the element that took its index.
fn take_root<T: Ord, N: Direction, F: Direction>(
    values: &mut Vec<T>,
    near: &mut HeapSide<N>,
    far: &mut HeapSide<F>,
) -> Option<T> {
    let root = near.remove(Slot::ROOT, values.as_slice())?;
    let twin = far.slot_of(root);
    let removed = far.remove(twin, values.as_slice());
    debug_assert_eq!(removed, Some(root), "Both sides must drop the same element");

    let value = values.swap_remove(root.0);
    near.forget(root);
    far.forget(root);
    Some(value)
}

impl<T: Ord> Default for DualHeap<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vec<T>> for DualHeap<T> {
    #[inline]
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

impl<T: Ord> FromIterator<T> for DualHeap<T> {
    /// Allows building heap from iterator using `collect()`.
    ///
    /// ### Time complexity
    ///
    /// ***O(n)***
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Ord> Extend<T> for DualHeap<T> {
    /// Inserts every element, panicking if storage cannot be allocated.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0)
            .expect("Failed to reserve DualHeap storage");
        for element in iter {
            // Reserve above never leaves capacity at zero.
            self.insert(element).expect("Failed to grow DualHeap storage");
        }
    }
}

impl<T: Debug> Debug for DualHeap<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        f.debug_list().entries(self.values.iter()).finish()
    }
}

impl<T: Ord> IntoIterator for DualHeap<T> {
    type Item = T;
    type IntoIter = IntoAscending<T>;

    /// Make iterator that returns items in ascending order from the front
    /// and in descending order from the back.
    ///
    /// ### Examples
    ///
    /// ```
    /// use dual_heap::DualHeap;
    /// let heap: DualHeap<i32> = vec![5, 1, 4, 2, 3].into();
    /// let mut iterator = heap.into_iter();
    /// assert_eq!(iterator.next(), Some(1));
    /// assert_eq!(iterator.next_back(), Some(5));
    /// assert_eq!(iterator.next(), Some(2));
    /// assert_eq!(iterator.next_back(), Some(4));
    /// assert_eq!(iterator.next(), Some(3));
    /// assert_eq!(iterator.next(), None);
    /// assert_eq!(iterator.next_back(), None);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(n log n)*** for iteration.
    fn into_iter(self) -> Self::IntoIter {
        IntoAscending { heap: self }
    }
}

/// Consuming iterator that yields the smallest remaining element from the front
/// and the biggest remaining element from the back.
///
/// ### Time complexity
/// Overall complexity of iteration is ***O(n log n)***
#[derive(Clone, Debug)]
pub struct IntoAscending<T> {
    heap: DualHeap<T>,
}

impl<T: Ord> Iterator for IntoAscending<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.heap.extract_min().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.heap.len()
    }
}

impl<T: Ord> DoubleEndedIterator for IntoAscending<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.heap.extract_max().ok()
    }
}

impl<T: Ord> ExactSizeIterator for IntoAscending<T> {}

impl<T: Ord> FusedIterator for IntoAscending<T> {}

/// This is unordered borrowing iterator over heap.
///
/// ### Time complexity
/// Overall complexity of iteration is ***O(n)***
pub struct Iter<'a, T> {
    values: std::slice::Iter<'a, T>,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.values.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.values.next_back()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a DualHeap<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
