pub mod catalog_search;
pub mod import;
pub mod interactions;
pub mod personalize;
pub mod similar;
pub mod stats;
