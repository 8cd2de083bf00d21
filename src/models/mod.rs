pub mod segments;

pub use segments::{aggregate, IndexGroup, SegmentTotals, ShardSummary};
