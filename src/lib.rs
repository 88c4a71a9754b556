//! # RecBox: Recursion-Breaking Boxes for Enums
//!
//! [`RecBox`] lets an enum hold a value of a type that recursively contains
//! the enum itself. Written directly, such a definition has infinite size
//! and is rejected by the compiler; behind a `RecBox` it stays finite,
//! because the box's own layout never depends on the payload's size.
//! Payloads that fit a configurable inline region are stored directly in
//! the box with no allocation at all, so small non-recursive alternatives
//! stay as cheap as plain fields.
//!
//! ## Core Concept
//!
//! A `RecBox<T, Space>` owns a fixed-size storage cell. At construction it
//! decides, once and only from the size and alignment of `T`, whether `T`
//! lives directly inside the cell's `Space`-sized region or in a separately
//! allocated heap block reached through a pointer kept in that same region.
//! A recursive payload can never fit inside a region that is part of
//! itself, so it always takes the heap route, which is exactly what breaks
//! the size cycle.
//!
//! ## Quick Start
//!
//! Add RecBox to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! recbox = "0.1"
//! ```
//!
//! Basic usage:
//!
//! ```rust
//! use recbox::space::S4;
//! use recbox::RecBox;
//!
//! // Small values are stored inline
//! let small: RecBox<u64, S4> = RecBox::new(7);
//! assert!(!small.is_heap());
//!
//! // Large values automatically use heap allocation
//! let large: RecBox<[u64; 16], S4> = RecBox::new([0; 16]);
//! assert!(large.is_heap());
//!
//! // Use like a plain value
//! assert_eq!(*small + large[0], 7);
//! ```
//!
//! Breaking a recursive definition:
//!
//! ```rust
//! use recbox::RecBox;
//!
//! #[derive(Clone, Default)]
//! enum List {
//!     #[default]
//!     Nil,
//!     Cons(RecBox<Node>),
//! }
//!
//! #[derive(Clone, Default)]
//! struct Node {
//!     head: u32,
//!     tail: List,
//! }
//!
//! let list = List::Cons(RecBox::new(Node { head: 1, tail: List::Nil }));
//! if let List::Cons(node) = &list {
//!     assert_eq!(node.head, 1);
//! }
//! ```
//!
//! ## Configuration
//!
//! ### Inline capacity
//!
//! The second type parameter picks the inline region. The provided
//! [`space`] types cover 1 to 64 machine words; the default is
//! [`space::S32`], 32 words (256 bytes on 64-bit targets). A larger Space
//! keeps bigger payloads inline at the cost of a bigger box; pick per use
//! site:
//!
//! ```rust
//! use recbox::RecBox;
//!
//! // Custom 64-word capacity
//! type MySpace = [usize; 64];
//! type MyRecBox<T> = RecBox<T, MySpace>;
//!
//! let value: MyRecBox<[u64; 32]> = RecBox::new([0; 32]);
//! assert!(!value.is_heap()); // fits the custom space
//! ```
//!
//! **Important**: Space alignment matters! If the Space alignment is not a
//! multiple of the value's required alignment, the value will be
//! heap-allocated regardless of size. A `[u8; 128]` Space has alignment 1
//! and sends every multi-byte payload to the heap; the word-based [`space`]
//! types avoid that.
//!
//! ### Payload requirements
//!
//! Constructing or cloning a box requires `T: Default + Clone`: the chosen
//! strategy binds all of its lifecycle operations together, default and
//! copy construction included. Access, [`RecBox::set`],
//! [`RecBox::into_inner`], and dropping impose no bounds.
//!
//! ### No-std Usage
//!
//! RecBox works in `#![no_std]` environments; the heap strategy only needs
//! `alloc`:
//!
//! ```toml
//! [dependencies]
//! recbox = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![deny(clippy::as_conversions)]

extern crate alloc;

mod recbox;
pub mod space;
mod storage;

pub use crate::recbox::RecBox;
