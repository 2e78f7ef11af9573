pub mod person;
pub mod report;
pub mod user;

pub use person::{Person, PersonInput};
pub use report::ClassCount;
pub use user::User;
