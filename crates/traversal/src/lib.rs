pub mod size;
pub mod folders;
pub mod levels;
pub mod report;

pub use size::{par_total_size, total_size, try_par_total_size, try_total_size};
pub use folders::{folder_sizes, folder_sizes_by_path};
pub use levels::{level_order, level_order_limited};
pub use report::build_report;
pub use fstree_common::{TraversalConfig, TreeError};
pub use fstree_domain::{Node, TreeReport};
