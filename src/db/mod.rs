pub mod counters;
pub mod persons;
pub mod users;
