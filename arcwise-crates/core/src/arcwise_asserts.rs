//! Leveled assertions for the invariants of the engine.
//!
//! Bookkeeping bugs (pruning a value twice, restoring a value that was never pruned, a heuristic
//! leaving the domains in a different state than it found them) are fatal. The cheap checks are
//! always on; the expensive ones are only enabled in tests or with the `debug-checks` feature.

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const ARCWISE_ASSERT_LEVEL_DEFINITION: u8 = ARCWISE_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const ARCWISE_ASSERT_LEVEL_DEFINITION: u8 = ARCWISE_ASSERT_ADVANCED;

pub const ARCWISE_ASSERT_SIMPLE: u8 = 1;
pub const ARCWISE_ASSERT_MODERATE: u8 = 2;
pub const ARCWISE_ASSERT_ADVANCED: u8 = 3;

#[macro_export]
#[doc(hidden)]
macro_rules! arcwise_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::ARCWISE_ASSERT_LEVEL_DEFINITION >= $crate::asserts::ARCWISE_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! arcwise_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::ARCWISE_ASSERT_LEVEL_DEFINITION >= $crate::asserts::ARCWISE_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! arcwise_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::ARCWISE_ASSERT_LEVEL_DEFINITION >= $crate::asserts::ARCWISE_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}
