//! Cheap random selection used to spread lookups over the resolver pool.
//!
//! Entropy comes from the wall clock, not from a PRNG. Selection is neither
//! uniform (modulo bias) nor unpredictable, which is fine for load spreading.

use std::time::{SystemTime, UNIX_EPOCH};

/// Returns a random element of `pool`.
///
/// # Panics
///
/// Panics if `pool` is empty.
pub fn pick<T>(pool: &[T]) -> &T {
    let idx = clock_u32() as usize % pool.len();
    &pool[idx]
}

/// Folds the high half of the current nanosecond timestamp into the low half.
fn clock_u32() -> u32 {
    let nanos: u64 = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    ((nanos >> 32) ^ nanos) as u32
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
