/// Limits for one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalcConfig {
    /// Entries in each of the node, value and leaf arenas
    pub capacity: usize,
    /// Longest accepted input, in bytes
    pub max_input_len: usize,
}

impl CalcConfig {
    pub const DEFAULT_CAPACITY: usize = 1024;
    /// One protocol line
    pub const DEFAULT_MAX_INPUT_LEN: usize = 512;
    /// Upper bound on `capacity`; larger values are clamped
    pub const MAX_CAPACITY: usize = 16_384;
    /// Upper bound on `max_input_len`; larger values are clamped. Tree
    /// construction is quadratic in the input length at worst.
    pub const MAX_INPUT_LEN: usize = 8_192;

    /// This configuration with both limits clamped to their maximum
    pub fn bounded(self) -> Self {
        Self {
            capacity: self.capacity.min(Self::MAX_CAPACITY),
            max_input_len: self.max_input_len.min(Self::MAX_INPUT_LEN),
        }
    }
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            capacity: Self::DEFAULT_CAPACITY,
            max_input_len: Self::DEFAULT_MAX_INPUT_LEN,
        }
    }
}
