pub mod person;
pub mod response;
