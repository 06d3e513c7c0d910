pub mod admin;
pub mod exam;
pub mod learn;
pub mod pages;
