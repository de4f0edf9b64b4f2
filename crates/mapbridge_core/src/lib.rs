//! Public library API for converting native objects to bridge-friendly generic maps and back.

/// Generic values, cycle-guarded object walking, schema-driven population, and the JSON bridge.
pub mod bridge;
