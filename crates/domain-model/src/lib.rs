pub mod node;
pub mod tree_report;

pub use node::*;
pub use tree_report::*;
