//! Map type used for sparse bitmap words and tick storage.
//!
//! `ahash` is the default backend; enable `rustc-hash` for FxHash, or
//! `std-hash` to fall back to SipHash. When several backends are enabled
//! the standard library map wins.

#[cfg(all(feature = "ahash", not(any(feature = "rustc-hash", feature = "std-hash"))))]
pub type FastMap<K, V> = ahash::AHashMap<K, V>;

#[cfg(all(feature = "rustc-hash", not(any(feature = "ahash", feature = "std-hash"))))]
pub type FastMap<K, V> = rustc_hash::FxHashMap<K, V>;

#[cfg(not(any(
    all(feature = "ahash", not(any(feature = "rustc-hash", feature = "std-hash"))),
    all(feature = "rustc-hash", not(any(feature = "ahash", feature = "std-hash"))),
)))]
pub type FastMap<K, V> = std::collections::HashMap<K, V>;
