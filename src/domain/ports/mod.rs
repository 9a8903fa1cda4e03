pub mod artifact_store;
pub mod catalog;
pub mod interaction_log;
pub mod seed_shuffler;
pub mod similarity_index;
