//! Casting.
//!
//! This module provides utilities for casting between types.
//!
//! # 64-bit invariant
//! All functions are lossless on {32,64}-bit arches.

#[rustfmt::skip]
//============================ SAFETY: DO NOT REMOVE ===========================//
//                                                                              //
//                                                                              //
//                   Only allow building {32,64}-bit targets.                   //
//          This allows us to assume {32,64}-bit invariants in this file.       //
    #[cfg(not(any(target_pointer_width = "64", target_pointer_width = "32")))]
      compile_error!("This module is only compatible with {32,64}-bit CPUs");
//                                                                              //
//                                                                              //
//============================ SAFETY: DO NOT REMOVE ===========================//

/// Cast [`usize`] to [`u64`].
#[inline(always)]
pub const fn usize_to_u64(u: usize) -> u64 {
    u as u64
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn max_usize() {
        assert_eq!(usize_to_u64(usize::MAX), usize::MAX as u64);
    }
}
