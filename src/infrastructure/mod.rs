pub mod flatfile;
pub mod memory;
pub mod random;
pub mod sqlite;
