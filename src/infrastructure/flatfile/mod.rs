pub mod artifact_files;
pub mod interaction_log;
