pub mod batch_runner;
pub mod dataset_store;
pub mod droid;
pub mod extractor;
pub mod link_runner;
pub mod page_parser;

pub use batch_runner::*;
pub use dataset_store::*;
pub use droid::*;
pub use extractor::*;
pub use link_runner::*;
pub use page_parser::*;
