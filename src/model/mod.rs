pub mod advisory;
pub mod catalog;
pub mod report;
