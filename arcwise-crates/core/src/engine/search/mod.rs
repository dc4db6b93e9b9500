mod backtracking_search;
mod search_options;
mod search_statistics;

pub use backtracking_search::BacktrackingSearch;
pub use search_options::SearchOptions;
pub use search_statistics::SearchStatistics;
