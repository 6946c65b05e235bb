use crate::features::reports::models::ReportCategory;

/// A static remediation guide for one kind of civic issue. The catalog is
/// compiled in, so fields borrow from the binary.
#[derive(Debug, Clone, Copy)]
pub struct Solution {
    pub id: &'static str,
    pub category: ReportCategory,
    pub title: &'static str,
    pub thumbnail: &'static str,
    pub steps: &'static [&'static str],
}
