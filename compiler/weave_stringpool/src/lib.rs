//! Content-addressed string interning pool for the Weave lexer (component B).
//!
//! A manually chained hash table rather than a `HashMap`-based interner: the
//! contract requires pointer-stable, content-addressed handles with an
//! exact rehash-factor policy (`count > buckets / 4` doubles the table), and
//! a `HashMap` gives neither the guaranteed pointer identity for equal keys
//! nor a convenient hook for custom rehashing. Bytes and chain nodes both
//! live in a [`weave_arena::Arena`] so interned handles are valid for the
//! arena's whole lifetime.

use std::cell::{Cell, RefCell};

use rustc_hash::FxHasher;
use std::hash::Hasher;

use weave_arena::{Arena, TypedArena};

/// Bucket-array growth factor: rehash when `count > buckets / REHASH_FACTOR`.
const REHASH_FACTOR: usize = 4;

/// Initial bucket-array size.
const INITIAL_BUCKETS: usize = 4096;

struct Entry<'a> {
    /// `Cell`-wrapped so `rehash` can relink chains through shared
    /// references to arena-owned nodes without `unsafe`.
    next: Cell<Option<&'a Entry<'a>>>,
    value: &'a [u8],
    hash: u64,
}

/// Content-addressed interner: equal byte strings always return the same
/// (pointer, length) slice.
pub struct StringPool<'a> {
    arena: &'a Arena,
    nodes: TypedArena<'a, Entry<'a>>,
    buckets: RefCell<Vec<Option<&'a Entry<'a>>>>,
    count: Cell<usize>,
}

impl<'a> StringPool<'a> {
    /// Create a new, empty pool backed by `arena`.
    #[must_use]
    pub fn new(arena: &'a Arena) -> Self {
        Self {
            arena,
            nodes: TypedArena::new(arena),
            buckets: RefCell::new(vec![None; INITIAL_BUCKETS]),
            count: Cell::new(0),
        }
    }

    /// Intern `bytes`, returning a stable, content-addressed slice.
    ///
    /// Equal-by-bytes inputs always return the same `(pointer, length)`.
    pub fn get(&self, bytes: &[u8]) -> &'a [u8] {
        let hash = hash_bytes(bytes);
        let bucket_count = self.buckets.borrow().len();
        let index = (hash as usize) % bucket_count;

        let mut cursor = self.buckets.borrow()[index];
        while let Some(entry) = cursor {
            if entry.hash == hash && entry.value == bytes {
                tracing::trace!(len = bytes.len(), "string pool hit");
                return entry.value;
            }
            cursor = entry.next.get();
        }

        let value = self.arena.alloc_slice_copy(bytes);
        let head = self.buckets.borrow()[index];
        let entry = self.nodes.create_stable(Entry {
            next: Cell::new(head),
            value,
            hash,
        });
        self.buckets.borrow_mut()[index] = Some(entry);
        self.count.set(self.count.get() + 1);
        tracing::trace!(len = bytes.len(), total = self.count.get(), "string pool miss");

        if self.count.get() > bucket_count / REHASH_FACTOR {
            self.rehash();
        }

        value
    }

    /// Intern a `&str` by its UTF-8 bytes.
    pub fn get_str(&self, s: &str) -> &'a str {
        let bytes = self.get(s.as_bytes());
        // SAFETY-free: `bytes` is a verbatim copy of `s.as_bytes()`, so it is
        // valid UTF-8 by construction; no unchecked conversion is used.
        std::str::from_utf8(bytes).unwrap_or_default()
    }

    /// Visit every interned string, in unspecified order.
    pub fn enumerate<F: FnMut(&'a [u8])>(&self, mut callback: F) {
        for bucket in self.buckets.borrow().iter() {
            let mut cursor = *bucket;
            while let Some(entry) = cursor {
                callback(entry.value);
                cursor = entry.next.get();
            }
        }
    }

    /// Number of distinct strings currently interned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count.get()
    }

    /// Whether the pool has interned anything yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn rehash(&self) {
        let old_buckets = self.buckets.borrow();
        let new_len = old_buckets.len() * 2;
        let mut new_buckets: Vec<Option<&'a Entry<'a>>> = vec![None; new_len];

        for bucket in old_buckets.iter() {
            let mut cursor = *bucket;
            while let Some(entry) = cursor {
                let next_in_old_chain = entry.next.get();
                let index = (entry.hash as usize) % new_len;
                entry.next.set(new_buckets[index]);
                new_buckets[index] = Some(entry);
                cursor = next_in_old_chain;
            }
        }

        let old_len = old_buckets.len();
        drop(old_buckets);
        tracing::debug!(old = old_len, new = new_len, "string pool rehash");
        *self.buckets.borrow_mut() = new_buckets;
    }
}

fn hash_bytes(bytes: &[u8]) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(bytes);
    hasher.finish()
}
