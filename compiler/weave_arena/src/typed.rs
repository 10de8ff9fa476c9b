//! Typed sub-arena: drop glue for non-trivial `T` on top of [`Arena`].

use std::cell::RefCell;

use bumpalo::boxed::Box as BumpBox;

use crate::Arena;

/// A typed view over an [`Arena`] that runs `T`'s destructor when the typed
/// arena itself is dropped.
///
/// `bumpalo::Bump::alloc` never runs `Drop` for the value it stores, even
/// once the underlying `Bump` is dropped — that is `bumpalo`'s documented
/// behavior, not a bug. `bumpalo::boxed::Box`, by contrast, calls
/// `Drop::drop` on its contents when the box itself is dropped (it just
/// never frees the backing bytes, since a bump arena has no per-object
/// free). `create` allocates through that box type and retains it here, so
/// the destructor fires when this sub-arena is dropped.
pub struct TypedArena<'a, T> {
    arena: &'a Arena,
    count: RefCell<usize>,
    retained: RefCell<Vec<BumpBox<'a, T>>>,
}

impl<'a, T> TypedArena<'a, T> {
    /// Create a typed sub-arena borrowing from `arena`.
    #[must_use]
    pub fn new(arena: &'a Arena) -> Self {
        Self {
            arena,
            count: RefCell::new(0),
            retained: RefCell::new(Vec::new()),
        }
    }

    /// Construct `value` in place. Its destructor runs when this sub-arena
    /// is dropped, not before: the box backing it is retained in `self`, so
    /// callers that need the value back should hold their own copy made
    /// before calling this (see `weave_lexer::context`, which always builds
    /// the struct first and returns that local binding).
    pub fn create(&self, value: T) {
        let boxed = BumpBox::new_in(value, self.arena.bump());
        self.retained.borrow_mut().push(boxed);
        *self.count.borrow_mut() += 1;
    }

    /// Construct a `T` with no destructor tracking, returning a directly
    /// addressable reference valid for the backing arena's whole lifetime.
    ///
    /// Only valid for trivially-destructible `T` (nothing that owns memory
    /// or other cleanup-requiring resources) — `weave_stringpool`'s chain
    /// nodes are the motivating case: they must stay reachable through
    /// `Cell`-linked pointers for as long as the pool lives, which a
    /// `create`-retained box cannot offer since its reference only borrows
    /// from `self`.
    pub fn create_stable(&self, value: T) -> &'a mut T {
        let out = self.arena.bump().alloc(value);
        *self.count.borrow_mut() += 1;
        out
    }

    /// Copy-construct a contiguous array of `T: Copy` from a source slice.
    #[must_use]
    pub fn create_array_from(&self, source: &[T]) -> &'a [T]
    where
        T: Copy,
    {
        let out = self.arena.bump().alloc_slice_copy(source);
        *self.count.borrow_mut() += source.len();
        out
    }

    /// Number of `T` values created through this sub-arena so far.
    #[must_use]
    pub fn len(&self) -> usize {
        *self.count.borrow()
    }

    /// Whether this sub-arena has created any values yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_destructors_on_arena_drop() {
        use std::cell::Cell;
        use std::rc::Rc;

        struct DropCounter(Rc<Cell<usize>>);
        impl Drop for DropCounter {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let dropped = Rc::new(Cell::new(0));
        {
            let arena = Arena::new();
            let typed: TypedArena<DropCounter> = TypedArena::new(&arena);
            typed.create(DropCounter(Rc::clone(&dropped)));
            typed.create(DropCounter(Rc::clone(&dropped)));
            assert_eq!(dropped.get(), 0);
            assert_eq!(typed.len(), 2);
        }
        assert_eq!(dropped.get(), 2);
    }

    #[test]
    fn create_array_from_copies() {
        let arena = Arena::new();
        let typed: TypedArena<u32> = TypedArena::new(&arena);
        let out = typed.create_array_from(&[1, 2, 3]);
        assert_eq!(out, &[1, 2, 3]);
    }

    #[test]
    fn create_stable_returns_a_long_lived_reference() {
        let arena = Arena::new();
        let typed: TypedArena<u32> = TypedArena::new(&arena);
        let r = typed.create_stable(42);
        assert_eq!(*r, 42);
        assert_eq!(typed.len(), 1);
    }
}
