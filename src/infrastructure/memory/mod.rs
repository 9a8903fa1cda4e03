pub mod catalog;
pub mod knn_index;
