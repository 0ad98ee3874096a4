pub mod footer;
pub mod header;
pub mod logs;
pub mod next_race;
pub mod tables;
