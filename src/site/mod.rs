pub mod content;
pub mod nav;
