/// One row of the depth table: a short label and the nesting depth it stands for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DepthTier {
    pub label: &'static str,
    pub depth: u64,
}

impl DepthTier {
    pub const fn new(label: &'static str, depth: u64) -> Self {
        Self { label, depth }
    }

    pub fn file_name(&self) -> String {
        format!("{}_recursion.json", self.label)
    }
}

/// Depths generated on every run, in output order.
pub const DEPTH_TABLE: [DepthTier; 5] = [
    DepthTier::new("1K", 1_000),
    DepthTier::new("10K", 10_000),
    DepthTier::new("100K", 100_000),
    DepthTier::new("1M", 1_000_000),
    DepthTier::new("10M", 10_000_000),
];
