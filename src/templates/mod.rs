use askama::Template;

use crate::models::{IndexGroup, SegmentTotals};

#[derive(Template)]
#[template(path = "segments.html")]
pub struct SegmentsTemplate {
    pub groups: Vec<IndexGroup>,
    pub totals: SegmentTotals,
}
