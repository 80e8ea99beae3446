use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// 遍历结果汇总，包含总大小、文件夹大小与层序列表
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeReport {
    pub root_name: String,
    pub total_size: u64,
    pub node_count: usize,
    pub height: usize,
    /// 键为文件夹名称，或在按路径模式下为完整路径
    pub folder_sizes: BTreeMap<String, u64>,
    /// 受 max_depth 限制时可能少于 height 层
    #[serde(default)]
    pub levels: Vec<Vec<String>>,
}
