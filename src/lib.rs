pub mod build_out;
pub mod cache;
pub mod collection;
pub mod content;
pub mod utility;
