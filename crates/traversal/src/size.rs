use fstree_common::TreeError;
use fstree_domain::Node;
use rayon::prelude::*;

/// 后序遍历中的一帧：当前节点、下一个待访问子节点下标、已累计大小
struct Frame<'a> {
    node: &'a Node,
    next: usize,
    sum: u64,
}

impl<'a> Frame<'a> {
    fn new(node: &'a Node) -> Self {
        Self {
            node,
            next: 0,
            sum: node.size,
        }
    }
}

/// 显式栈后序聚合（不递归）；`add` 返回 None 表示溢出
fn aggregate(root: &Node, add: fn(u64, u64) -> Option<u64>) -> Result<u64, TreeError> {
    let mut stack = vec![Frame::new(root)];

    while let Some(frame) = stack.last_mut() {
        let node = frame.node;
        if let Some(child) = node.children.get(frame.next) {
            frame.next += 1;
            stack.push(Frame::new(child));
            continue;
        }

        let sum = frame.sum;
        stack.pop();
        match stack.last_mut() {
            Some(parent) => {
                let parent_node = parent.node;
                parent.sum = add(parent.sum, sum).ok_or_else(|| TreeError::SizeOverflow {
                    name: parent_node.name.clone(),
                })?;
            }
            None => return Ok(sum),
        }
    }

    Ok(0)
}

/// 子树总大小（自身 + 全部后代），None 返回 0；超出 u64 时饱和
pub fn total_size(node: Option<&Node>) -> u64 {
    match node {
        Some(root) => aggregate(root, |a, b| Some(a.saturating_add(b))).unwrap_or(u64::MAX),
        None => 0,
    }
}

/// 与 [`total_size`] 相同，但溢出时返回错误并指出溢出的子树
pub fn try_total_size(node: Option<&Node>) -> Result<u64, TreeError> {
    let Some(root) = node else {
        return Ok(0);
    };
    aggregate(root, u64::checked_add).map_err(|e| {
        log::warn!("total size overflow under {:?}: {}", root.name, e);
        e
    })
}

/// 仅在根的子节点之间并行，每个子树内部仍走显式栈聚合
fn par_aggregate(root: &Node, add: fn(u64, u64) -> Option<u64>) -> Result<u64, TreeError> {
    let overflow = || TreeError::SizeOverflow {
        name: root.name.clone(),
    };
    // 并行处理子项
    let children = root
        .children
        .par_iter()
        .map(|child| aggregate(child, add))
        .try_reduce(|| 0, |a, b| add(a, b).ok_or_else(overflow))?;
    add(root.size, children).ok_or_else(overflow)
}

/// 用 rayon 并行汇总子树大小，结果与 [`total_size`] 一致
pub fn par_total_size(node: Option<&Node>) -> u64 {
    match node {
        Some(root) => {
            par_aggregate(root, |a, b| Some(a.saturating_add(b))).unwrap_or(u64::MAX)
        }
        None => 0,
    }
}

/// [`par_total_size`] 的检查版本，溢出行为与 [`try_total_size`] 相同
pub fn try_par_total_size(node: Option<&Node>) -> Result<u64, TreeError> {
    let Some(root) = node else {
        return Ok(0);
    };
    par_aggregate(root, u64::checked_add).map_err(|e| {
        log::warn!("total size overflow under {:?}: {}", root.name, e);
        e
    })
}
