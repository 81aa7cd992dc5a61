//! Centralized limits and thresholds for the usage checker.

/// Maximum node depth for the per-file usage walk.
///
/// The walk recurses once per level of syntactic nesting. Host front ends
/// produce trees far shallower than this; the cap only matters for
/// pathological machine-generated input, where subtrees beyond the limit
/// are skipped rather than overflowing the stack.
pub const MAX_WALK_DEPTH: u32 = 2048;
