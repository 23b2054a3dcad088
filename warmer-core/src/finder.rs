//! Monotonic-stack search for the next strictly warmer reading
//!
//! For every position in a sequence of readings, the distance to the nearest
//! later position holding a strictly greater value is computed in a single
//! left-to-right pass. Positions still waiting for an answer sit on a
//! [`PendingStack`], whose readings never increase from bottom to top. A new
//! reading resolves every pending position strictly colder than itself, then
//! waits on the stack in turn.
//!
//! Each position is pushed exactly once and popped at most once, so the scan
//! runs in `O(n)` time with `O(n)` auxiliary space in the worst case
//! (a strictly decreasing series never pops anything).

use smallvec::SmallVec;

/// Pending positions kept inline before the stack spills to the heap
pub const INLINE_PENDING: usize = 32;

/// Stack of positions whose next warmer reading has not been seen yet
///
/// The readings at the held positions never increase from bottom to top.
/// Equal readings never resolve each other, so a plateau sits on the stack
/// as a run of equal entries.
#[derive(Debug, Clone, Default)]
pub struct PendingStack {
    indices: SmallVec<[usize; INLINE_PENDING]>,
}

impl PendingStack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty stack sized for a series of `n` readings
    pub fn with_capacity(n: usize) -> Self {
        Self {
            indices: SmallVec::with_capacity(n),
        }
    }

    /// Push a position whose answer is still unknown
    ///
    /// Callers must have popped every colder position first; the ordering
    /// invariant is checked in debug builds only.
    pub fn push<T: Ord>(&mut self, temps: &[T], index: usize) {
        debug_assert!(
            self.peek().map_or(true, |top| temps[top] >= temps[index]),
            "pending readings must never increase towards the top"
        );
        self.indices.push(index);
    }

    /// Pop every pending position strictly colder than `temps[current]`
    ///
    /// Each popped position is handed to `resolve`, top of the stack first.
    pub fn pop_while_colder<T: Ord>(
        &mut self,
        temps: &[T],
        current: usize,
        mut resolve: impl FnMut(usize),
    ) {
        while let Some(&top) = self.indices.last() {
            if temps[current] <= temps[top] {
                break;
            }
            self.indices.pop();
            resolve(top);
        }
    }

    /// Position on top of the stack, if any
    pub fn peek(&self) -> Option<usize> {
        self.indices.last().copied()
    }

    /// Number of unresolved positions
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether every position seen so far has been resolved
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Whether the stack has outgrown its inline buffer
    pub fn spilled(&self) -> bool {
        self.indices.spilled()
    }
}

/// Days to wait after each reading for a strictly warmer one
///
/// `waits[i]` is the distance from `i` to the first later position with a
/// strictly greater reading, or `0` when no such position exists. The output
/// always has the same length as `temps`.
///
/// # Example
///
/// ```rust
/// use warmer_core::days_until_warmer;
///
/// let waits = days_until_warmer(&[73, 74, 75, 71, 69, 72, 76, 73]);
/// assert_eq!(waits, vec![1, 1, 4, 2, 1, 1, 0, 0]);
/// ```
pub fn days_until_warmer<T: Ord>(temps: &[T]) -> Vec<usize> {
    let mut waits = vec![0; temps.len()];
    let mut pending = PendingStack::new();

    for i in 0..temps.len() {
        pending.pop_while_colder(temps, i, |p| waits[p] = i - p);
        pending.push(temps, i);
    }

    // Whatever is still pending never warms up; those entries stay 0.
    waits
}
