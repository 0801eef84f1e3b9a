pub mod candidate;
pub mod department;
pub mod document;
pub mod job;
pub mod notification;
pub mod permission;
pub mod role;
pub mod session;
pub mod setting;
pub mod token;
pub mod user;
