//! Space types that configure the inline capacity of [`RecBox`](crate::RecBox).
//!
//! A Space is never instantiated; only its size and alignment matter. The
//! word-sized building blocks below keep the region aligned for anything
//! with pointer alignment or less. Any other type can serve as a Space as
//! well, for example `type MySpace = [usize; 24];`.

/// 1-word inline region (8 bytes on 64-bit targets).
pub struct S1 {
    #[allow(dead_code)]
    inner: [usize; 1],
}

/// 2-word inline region (16 bytes on 64-bit targets).
pub struct S2 {
    #[allow(dead_code)]
    inner: [usize; 2],
}

/// 4-word inline region (32 bytes on 64-bit targets).
pub struct S4 {
    #[allow(dead_code)]
    inner: [usize; 4],
}

/// 8-word inline region (64 bytes on 64-bit targets).
pub struct S8 {
    #[allow(dead_code)]
    inner: [usize; 8],
}

/// 16-word inline region (128 bytes on 64-bit targets).
pub struct S16 {
    #[allow(dead_code)]
    inner: [usize; 16],
}

/// 32-word inline region (256 bytes on 64-bit targets).
///
/// This is the default Space of [`RecBox`](crate::RecBox).
pub struct S32 {
    #[allow(dead_code)]
    inner: [usize; 32],
}

/// 64-word inline region (512 bytes on 64-bit targets).
pub struct S64 {
    #[allow(dead_code)]
    inner: [usize; 64],
}
