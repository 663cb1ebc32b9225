pub mod entry;
pub mod link;
