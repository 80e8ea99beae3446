use fstree_domain::Node;

/// 层序（广度优先）遍历，按深度分组输出节点名，根为第 0 层
pub fn level_order(node: Option<&Node>) -> Vec<Vec<String>> {
    level_order_limited(node, None)
}

/// 同 [`level_order`]，最多输出 `max_depth` 层
pub fn level_order_limited(node: Option<&Node>, max_depth: Option<usize>) -> Vec<Vec<String>> {
    let mut levels = Vec::new();
    let mut frontier: Vec<&Node> = node.into_iter().collect();

    while !frontier.is_empty() {
        if max_depth.is_some_and(|max| levels.len() >= max) {
            break;
        }
        levels.push(frontier.iter().map(|n| n.name.clone()).collect());
        // 下一层按父节点访问顺序拼接各自的子节点
        frontier = frontier
            .iter()
            .flat_map(|n| n.children.iter())
            .collect();
    }

    levels
}
