pub mod search_page_state;
