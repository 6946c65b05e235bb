use crate::features::reports::models::ReportCategory;
use crate::features::solutions::catalog::SOLUTIONS;
use crate::features::solutions::models::Solution;

/// Search over the static solutions catalog.
pub struct SolutionService;

impl SolutionService {
    pub fn new() -> Self {
        Self
    }

    /// Filter the catalog by free-text term and optional category.
    ///
    /// A solution matches the term when it appears, case-insensitively, in
    /// the title or in any step; the empty term matches everything. The
    /// category predicate is plain equality, or always-true when absent.
    /// Both predicates must hold. Catalog order is preserved and no
    /// ranking is applied, so identical inputs always yield identical
    /// output sequences.
    pub fn search(&self, term: &str, category: Option<ReportCategory>) -> Vec<&'static Solution> {
        let needle = term.to_lowercase();

        SOLUTIONS
            .iter()
            .filter(|solution| {
                let category_matches = category.map_or(true, |c| solution.category == c);
                let text_matches = needle.is_empty()
                    || solution.title.to_lowercase().contains(&needle)
                    || solution
                        .steps
                        .iter()
                        .any(|step| step.to_lowercase().contains(&needle));
                category_matches && text_matches
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(solutions: &[&Solution]) -> Vec<&'static str> {
        solutions.iter().map(|s| s.id).collect()
    }

    #[test]
    fn empty_term_and_no_category_returns_the_whole_catalog_in_order() {
        let service = SolutionService::new();
        let all = service.search("", None);

        assert_eq!(ids(&all), vec!["s1", "s2", "s3", "s4", "s5"]);
    }

    #[test]
    fn term_matches_titles_and_steps_case_insensitively() {
        let service = SolutionService::new();

        // "pothole" appears in s2's title and steps only
        assert_eq!(ids(&service.search("pothole", None)), vec!["s2"]);
        assert_eq!(ids(&service.search("POTHOLE", None)), vec!["s2"]);

        // "complaint" appears only in steps, across several guides
        assert_eq!(
            ids(&service.search("complaint", None)),
            vec!["s1", "s2", "s3", "s5"]
        );
    }

    #[test]
    fn category_filter_intersects_with_the_term() {
        let service = SolutionService::new();

        let drains = service.search("", Some(ReportCategory::OpenDrainage));
        assert_eq!(ids(&drains), vec!["s5"]);

        // both predicates must hold
        let none = service.search("pothole", Some(ReportCategory::OpenDrainage));
        assert!(none.is_empty());
    }

    #[test]
    fn category_without_solutions_yields_nothing_regardless_of_term() {
        let service = SolutionService::new();

        assert!(service.search("", Some(ReportCategory::HeavyTraffic)).is_empty());
        assert!(service
            .search("complaint", Some(ReportCategory::HeavyTraffic))
            .is_empty());
    }

    #[test]
    fn search_is_idempotent() {
        let service = SolutionService::new();

        let first = ids(&service.search("report", Some(ReportCategory::WaterLogging)));
        let second = ids(&service.search("report", Some(ReportCategory::WaterLogging)));

        assert_eq!(first, second);
    }
}
