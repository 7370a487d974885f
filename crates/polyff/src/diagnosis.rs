//! Thread-local evaluation diagnostics (feature `diagnosis`).
//!
//! Records which algorithm branch the last form-factor evaluation took and
//! the highest series order it reached. Counters are thread-local so that
//! concurrent evaluations never observe each other; they carry no
//! correctness guarantees and tests must not rely on them.

use std::cell::Cell;

thread_local! {
    static ALGO: Cell<u32> = const { Cell::new(0) };
    static ORDER: Cell<u32> = const { Cell::new(0) };
}

/// Branch identifiers, kept numeric to allow cheap accumulation.
pub mod algo {
    /// Body-level power series.
    pub const BODY_SERIES: u32 = 100;
    /// Body-level analytic edge sum.
    pub const BODY_ANALYTIC: u32 = 200;
    /// Prism evaluation.
    pub const PRISM: u32 = 500;
    /// Incremented once per face-level series expansion.
    pub const FACE_EXPANSION: u32 = 1;
}

/// Clears both counters; called at the start of each body evaluation.
pub fn reset() {
    ALGO.with(|c| c.set(0));
    ORDER.with(|c| c.set(0));
}

/// Adds `a` to the branch counter of the current thread.
pub fn note_algo(a: u32) {
    ALGO.with(|c| c.set(c.get() + a));
}

/// Raises the recorded series order to at least `n`.
pub fn note_order(n: u32) {
    ORDER.with(|c| c.set(c.get().max(n)));
}

/// Returns `(algo, order)` as recorded on the current thread.
pub fn read() -> (u32, u32) {
    (ALGO.with(Cell::get), ORDER.with(Cell::get))
}

/// One-line human-readable summary.
pub fn message() -> String {
    let (a, o) = read();
    format!("algo={a}, order={o}")
}
