use serde::{Deserialize, Serialize};

/// 文件树节点：无子节点即为文件，有子节点即为文件夹
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    /// 节点自身大小，不含子节点
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: 0,
            children: vec![],
        }
    }

    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Self::new(name).with_size(size)
    }

    pub fn folder(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self::new(name).with_children(children)
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// 是否为文件夹（仅按是否有子节点判断，与 size 无关）
    pub fn is_folder(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_file(&self) -> bool {
        self.children.is_empty()
    }

    /// 子树节点总数（含自身）
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }

    /// 子树层数，叶子为 1
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut frontier = vec![self];
        while !frontier.is_empty() {
            height += 1;
            frontier = frontier.iter().flat_map(|n| n.children.iter()).collect();
        }
        height
    }
}
