pub mod import;
pub mod link;
