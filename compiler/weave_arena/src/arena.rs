//! Untyped bump arena.

use std::cell::Cell;

use bumpalo::Bump;

/// Allocated-vs-reserved byte counts, as reported by [`Arena::query_usage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct MemoryUsage {
    /// Bytes actually handed out to callers (bump-pointer usage).
    pub allocated: usize,
    /// Bytes reserved across all segments (chunk capacity).
    pub reserved: usize,
}

/// Segment-chained bump allocator.
///
/// Backed by [`bumpalo::Bump`], which already implements the segment list,
/// the aligned bump pointer, and the "oversized allocation gets its own
/// segment" slow path. Reimplementing that by hand would mean unsafe
/// raw-pointer bumping, which the workspace lint policy
/// (`unsafe_code = "deny"`) forbids.
pub struct Arena {
    bump: Bump,
    /// Running total of bytes reserved (segment capacities), tracked
    /// separately since `bumpalo` does not expose it directly.
    reserved: Cell<usize>,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

impl Arena {
    /// Create an arena with the default segment capacity (64 KiB).
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(crate::DEFAULT_CAPACITY)
    }

    /// Create an arena whose first segment reserves at least `capacity` bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let bump = Bump::with_capacity(capacity);
        let reserved = Cell::new(bump.chunk_capacity());
        tracing::debug!(capacity = reserved.get(), "arena created");
        Self { bump, reserved }
    }

    /// Allocate `size` zero-filled bytes.
    ///
    /// `align` is accepted for symmetry with a generic `allocate(size, align)`
    /// contract but unused beyond debug-asserting it is a power of two:
    /// `bumpalo` always aligns byte-slice allocations to 1, and callers that
    /// need stricter alignment go through `create`/`create_array_from`
    /// instead, which pick up `T`'s natural alignment from `alloc`.
    pub fn allocate(&self, size: usize, align: usize) -> &mut [u8] {
        debug_assert!(align.is_power_of_two());
        let out = self.bump.alloc_slice_fill_copy(size, 0u8);
        self.track_growth();
        out
    }

    /// Allocate and copy a byte slice into the arena.
    #[must_use]
    pub fn alloc_slice_copy<'a>(&'a self, bytes: &[u8]) -> &'a [u8] {
        let out = self.bump.alloc_slice_copy(bytes);
        self.track_growth();
        out
    }

    /// Allocate and copy a `str` into the arena.
    #[must_use]
    pub fn alloc_str<'a>(&'a self, s: &str) -> &'a str {
        let out = self.bump.alloc_str(s);
        self.track_growth();
        out
    }

    /// Construct a trivially-destructible `T` in place and return a reference.
    #[must_use]
    pub fn create<T>(&self, value: T) -> &mut T
    where
        T: Copy,
    {
        let out = self.bump.alloc(value);
        self.track_growth();
        out
    }

    /// Copy-construct a contiguous array from a source slice.
    #[must_use]
    pub fn create_array_from<'a, T>(&'a self, source: &[T]) -> &'a [T]
    where
        T: Copy,
    {
        let out = self.bump.alloc_slice_copy(source);
        self.track_growth();
        out
    }

    /// Current allocated-vs-reserved usage across every segment.
    #[must_use]
    pub fn query_usage(&self) -> MemoryUsage {
        MemoryUsage {
            allocated: self.bump.allocated_bytes(),
            reserved: self.reserved.get().max(self.bump.allocated_bytes()),
        }
    }

    /// Re-sample `bumpalo`'s chunk capacity after a possible segment grow.
    ///
    /// `bumpalo` does not report total reserved capacity directly, only the
    /// current tail chunk's capacity; we track the high-water mark of
    /// allocated bytes as a conservative stand-in for "reserved", which is
    /// exact once at least one allocation has touched every segment.
    fn track_growth(&self) {
        let allocated = self.bump.allocated_bytes();
        if allocated > self.reserved.get() {
            tracing::trace!(allocated, previous = self.reserved.get(), "arena segment grew");
            self.reserved.set(allocated);
        }
    }

    pub(crate) fn bump(&self) -> &Bump {
        &self.bump
    }
}

impl std::fmt::Debug for Arena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arena")
            .field("usage", &self.query_usage())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn alloc_slice_round_trips() {
        let arena = Arena::new();
        let s = arena.alloc_slice_copy(b"hello");
        assert_eq!(s, b"hello");
    }

    #[test]
    fn equal_inputs_are_not_deduplicated_by_the_untyped_arena() {
        let arena = Arena::new();
        let a = arena.alloc_slice_copy(b"same");
        let b = arena.alloc_slice_copy(b"same");
        assert_eq!(a, b);
        assert_ne!(a.as_ptr(), b.as_ptr());
    }

    #[test]
    fn usage_grows_with_allocations() {
        let arena = Arena::new();
        let before = arena.query_usage();
        let _ = arena.alloc_slice_copy(&[0u8; 4096]);
        let after = arena.query_usage();
        assert!(after.allocated >= before.allocated + 4096);
        assert!(after.reserved >= after.allocated);
    }

    #[test]
    fn large_allocation_does_not_panic() {
        let arena = Arena::with_capacity(64);
        let big = vec![1u8; 1 << 20];
        let out = arena.alloc_slice_copy(&big);
        assert_eq!(out.len(), big.len());
    }

    #[test]
    fn byte_slice_allocation_grows_usage_by_exactly_its_length() {
        let arena = Arena::with_capacity(256);
        let before = arena.query_usage();
        let _ = arena.alloc_slice_copy(b"grown");
        let after = arena.query_usage();
        assert_eq!(
            after,
            MemoryUsage {
                allocated: before.allocated + 5,
                reserved: after.reserved,
            }
        );
    }
}
