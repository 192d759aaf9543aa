/// Prefix yosys gives to names derived from parameterized module instantiation.
pub const PARAMOD_PREFIX: &str = "$paramod";

/// Longest segment (in characters) that survives shortening.
pub const MAX_SEGMENT_LEN: usize = 13;

pub const SEGMENT_SEPARATOR: &str = "\\";
pub const SUB_SEGMENT_SEPARATOR: &str = "$";
