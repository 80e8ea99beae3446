use crate::TreeError;

/// 遍历配置
#[derive(Debug, Clone, Default)]
pub struct TraversalConfig {
    /// 层序遍历最多输出的层数，None 表示不限
    pub max_depth: Option<usize>,
    /// 使用 rayon 并行汇总大小
    pub parallel: bool,
    /// 文件夹大小按完整路径（而非名称）作键，避免同名覆盖
    pub key_by_path: bool,
}

impl TraversalConfig {
    pub fn validate(&self) -> Result<(), TreeError> {
        if self.max_depth == Some(0) {
            return Err(TreeError::Config("max_depth 必须大于 0".to_string()));
        }
        Ok(())
    }
}
