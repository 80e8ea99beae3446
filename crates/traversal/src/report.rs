use std::collections::BTreeMap;

use fstree_common::{TraversalConfig, TreeError};
use fstree_domain::{Node, TreeReport};

use crate::folders::{folder_sizes, folder_sizes_by_path};
use crate::levels::level_order_limited;
use crate::size::{try_par_total_size, try_total_size};

/// 对整棵树做一次完整遍历，生成汇总报告
pub fn build_report(root: &Node, config: &TraversalConfig) -> Result<TreeReport, TreeError> {
    config.validate()?;

    let total_size = if config.parallel {
        try_par_total_size(Some(root))?
    } else {
        try_total_size(Some(root))?
    };

    let folder_sizes: BTreeMap<String, u64> = if config.key_by_path {
        folder_sizes_by_path(Some(root))
    } else {
        folder_sizes(Some(root)).into_iter().collect()
    };

    let node_count = root.node_count();
    let height = root.height();
    log::debug!(
        "report for {:?}: total_size={}, nodes={}, height={}, folders={}",
        root.name,
        total_size,
        node_count,
        height,
        folder_sizes.len()
    );

    Ok(TreeReport {
        root_name: root.name.clone(),
        total_size,
        node_count,
        height,
        folder_sizes,
        levels: level_order_limited(Some(root), config.max_depth),
    })
}
