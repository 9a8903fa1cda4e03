pub mod shufflers;
