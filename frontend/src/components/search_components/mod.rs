pub mod search_filter_bar;
pub mod date_chip_selector;
pub mod sort_selector;
pub mod search_results_panel;
pub mod branch_result_card;
