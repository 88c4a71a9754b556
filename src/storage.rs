//! Storage cell and storage strategies backing [`RecBox`](crate::RecBox).
//!
//! A [`StorageCell`] is a fixed-size region interpreted either as a value of
//! `T` placed directly into the Space bytes, or as a single owning pointer
//! to a heap-allocated `T`. Which interpretation is active is decided once
//! per instantiation by [`fits_inline`] and never changes afterwards. All
//! lifecycle work on a cell goes through a [`StorageOps`] table bound at the
//! same time, so the wrapper itself never needs to know which strategy it
//! runs on.

use core::mem;
use core::mem::MaybeUninit;
use core::ptr;
use core::ptr::addr_of_mut;

use alloc::boxed::Box;

/// Fixed-size region holding either an inline `T` or an owning pointer.
///
/// The layout depends on `Space` and the pointer width only, never on
/// `size_of::<T>()`. That is what keeps an enum that reaches itself through
/// a `RecBox` finite-sized.
pub(crate) union StorageCell<T, Space> {
    inline: mem::ManuallyDrop<MaybeUninit<Space>>,
    heap: *mut T,
}

/// Decides whether `T` is placed directly into the Space bytes.
///
/// `T` qualifies when it fits the region and the region's alignment is an
/// exact multiple of `T`'s. Relocation safety, the third requirement for
/// inline placement, needs no check: moving a value in Rust is an
/// infallible bitwise copy. A type that reaches itself through the
/// enclosing enum can never satisfy the size arm, so recursive payloads
/// always resolve to the heap strategy.
pub(crate) const fn fits_inline<T, Space>() -> bool {
    mem::size_of::<T>() <= mem::size_of::<Space>()
        && mem::align_of::<Space>() % mem::align_of::<T>() == 0
}

/// The seven lifecycle operations of one storage strategy.
///
/// Construction entries are safe: they produce a fully initialized cell
/// from nothing but the payload. The remaining entries require the cell to
/// hold a live value under the same strategy, which is an invariant of the
/// owning wrapper.
pub(crate) struct StorageOps<T, Space> {
    pub(crate) construct_default: fn() -> StorageCell<T, Space>,
    pub(crate) construct_copy: fn(&T) -> StorageCell<T, Space>,
    pub(crate) construct_move: fn(T) -> StorageCell<T, Space>,
    pub(crate) destroy: unsafe fn(*mut StorageCell<T, Space>),
    pub(crate) value_ptr: unsafe fn(*mut StorageCell<T, Space>) -> *mut T,
    pub(crate) assign_copy: unsafe fn(*mut StorageCell<T, Space>, &T),
    pub(crate) assign_move: unsafe fn(*mut StorageCell<T, Space>, T),
}

impl<T: Default + Clone, Space> StorageOps<T, Space> {
    const INLINE: Self = StorageOps {
        construct_default: inline::construct_default::<T, Space>,
        construct_copy: inline::construct_copy::<T, Space>,
        construct_move: inline::construct_move::<T, Space>,
        destroy: inline::destroy::<T, Space>,
        value_ptr: inline::value_ptr::<T, Space>,
        assign_copy: inline::assign_copy::<T, Space>,
        assign_move: inline::assign_move::<T, Space>,
    };

    const HEAP: Self = StorageOps {
        construct_default: heap::construct_default::<T, Space>,
        construct_copy: heap::construct_copy::<T, Space>,
        construct_move: heap::construct_move::<T, Space>,
        destroy: heap::destroy::<T, Space>,
        value_ptr: heap::value_ptr::<T, Space>,
        assign_copy: heap::assign_copy::<T, Space>,
        assign_move: heap::assign_move::<T, Space>,
    };
}

/// Binds the strategy for a `T`/`Space` pairing.
///
/// Deterministic, so independent callers always agree on the same table.
pub(crate) fn select<T: Default + Clone, Space>() -> &'static StorageOps<T, Space> {
    if fits_inline::<T, Space>() {
        &StorageOps::INLINE
    } else {
        &StorageOps::HEAP
    }
}

/// Strategy for payloads living directly inside the Space bytes.
mod inline {
    use super::*;

    pub(super) fn construct_default<T: Default, Space>() -> StorageCell<T, Space> {
        construct_move(T::default())
    }

    pub(super) fn construct_copy<T: Clone, Space>(source: &T) -> StorageCell<T, Space> {
        construct_move(source.clone())
    }

    pub(super) fn construct_move<T, Space>(value: T) -> StorageCell<T, Space> {
        debug_assert!(fits_inline::<T, Space>());
        let mut region = MaybeUninit::<Space>::uninit();
        // in-bounds and aligned: the decision admits only payloads whose
        // alignment divides the region's
        unsafe { region.as_mut_ptr().cast::<T>().write(value) };
        StorageCell {
            inline: mem::ManuallyDrop::new(region),
        }
    }

    pub(super) unsafe fn destroy<T, Space>(cell: *mut StorageCell<T, Space>) {
        unsafe { ptr::drop_in_place(value_ptr::<T, Space>(cell)) }
    }

    pub(super) unsafe fn value_ptr<T, Space>(cell: *mut StorageCell<T, Space>) -> *mut T {
        unsafe { addr_of_mut!((*cell).inline).cast::<T>() }
    }

    pub(super) unsafe fn assign_copy<T: Clone, Space>(
        cell: *mut StorageCell<T, Space>,
        source: &T,
    ) {
        // clone before destroying: a panicking clone must leave the old
        // value live
        let replacement = source.clone();
        unsafe { assign_move(cell, replacement) }
    }

    pub(super) unsafe fn assign_move<T, Space>(cell: *mut StorageCell<T, Space>, value: T) {
        // destroy-then-construct, never `T`'s own assignment operators
        unsafe {
            let slot = value_ptr::<T, Space>(cell);
            ptr::drop_in_place(slot);
            slot.write(value);
        }
    }
}

/// Strategy for payloads living in a separately allocated block.
mod heap {
    use super::*;

    pub(super) fn construct_default<T: Default, Space>() -> StorageCell<T, Space> {
        construct_move(T::default())
    }

    pub(super) fn construct_copy<T: Clone, Space>(source: &T) -> StorageCell<T, Space> {
        construct_move(source.clone())
    }

    pub(super) fn construct_move<T, Space>(value: T) -> StorageCell<T, Space> {
        StorageCell {
            heap: Box::into_raw(Box::new(value)),
        }
    }

    pub(super) unsafe fn destroy<T, Space>(cell: *mut StorageCell<T, Space>) {
        let slot = unsafe { (*cell).heap };
        debug_assert!(!slot.is_null());
        drop(unsafe { Box::from_raw(slot) });
    }

    pub(super) unsafe fn value_ptr<T, Space>(cell: *mut StorageCell<T, Space>) -> *mut T {
        let slot = unsafe { (*cell).heap };
        debug_assert!(!slot.is_null());
        slot
    }

    pub(super) unsafe fn assign_copy<T: Clone, Space>(
        cell: *mut StorageCell<T, Space>,
        source: &T,
    ) {
        let replacement = source.clone();
        unsafe { assign_move(cell, replacement) }
    }

    pub(super) unsafe fn assign_move<T, Space>(cell: *mut StorageCell<T, Space>, value: T) {
        // always a fresh block, stored before the old one is released
        let fresh = Box::into_raw(Box::new(value));
        let old = unsafe { ptr::replace(addr_of_mut!((*cell).heap), fresh) };
        drop(unsafe { Box::from_raw(old) });
    }
}
