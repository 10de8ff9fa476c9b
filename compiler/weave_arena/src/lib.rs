//! Segment-chained bump allocation for the Weave compiler front-end.
//!
//! This crate provides a standalone arena allocator with **zero `weave_*`
//! dependencies**, so it can be reused by tools that only need a fast bump
//! allocator (formatter scratch space, IDE caches) without pulling in the
//! rest of the lexer.
//!
//! # Architecture
//!
//! [`Arena`] is an untyped bump allocator: it hands out raw, uninitialized
//! memory and never runs destructors. [`TypedArena`] sits on top of it and
//! offers two ways to create values: `create` retains an owning
//! `bumpalo::boxed::Box` so non-`Copy` payloads have their destructors run
//! when the typed arena itself is dropped, and `create_stable` skips that
//! bookkeeping to hand back a directly addressable, arena-lifetime
//! reference for trivially-destructible types that must stay reachable for
//! as long as the arena lives (chain-linked nodes, for instance).
//!
//! Both are backed by [`bumpalo`], which already implements the
//! segment-chained (chunked) bump allocation this crate's contract requires;
//! reimplementing that by hand would mean a hand-rolled unsafe pointer-bump
//! allocator, which this workspace's `unsafe_code = "deny"` lint forbids
//! outside of narrow, reason-annotated escapes.
//!
//! # Usage
//!
//! ```
//! use weave_arena::{Arena, TypedArena};
//!
//! let arena = Arena::new();
//! let bytes = arena.alloc_slice_copy(b"hello");
//! assert_eq!(bytes, b"hello");
//!
//! let typed: TypedArena<String> = TypedArena::new(&arena);
//! typed.create(String::from("owned"));
//! assert_eq!(typed.len(), 1);
//! ```

mod arena;
mod typed;

pub use arena::{Arena, MemoryUsage};
pub use typed::TypedArena;

/// Default segment (chunk) capacity: 64 KiB, matching the original allocator's default.
pub const DEFAULT_CAPACITY: usize = 64 << 10;
