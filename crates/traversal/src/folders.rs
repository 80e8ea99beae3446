use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use fstree_domain::Node;

use crate::size::total_size;

/// 文件夹名称 -> 子树总大小。文件（无子节点）不计入，根为文件时返回空表。
///
/// 按先序遍历写入，同名文件夹中先序最后访问者覆盖之前的值。
pub fn folder_sizes(node: Option<&Node>) -> HashMap<String, u64> {
    let mut sizes = HashMap::new();
    let mut stack: Vec<&Node> = node.into_iter().collect();

    while let Some(node) = stack.pop() {
        if node.is_file() {
            continue;
        }
        sizes.insert(node.name.clone(), total_size(Some(node)));
        // 逆序入栈，出栈时按原顺序访问子节点
        stack.extend(node.children.iter().rev());
    }

    sizes
}

/// 路径段转义：`\` -> `\\`，`/` -> `\/`，保证不同路径生成不同的键
fn path_segment(name: &str) -> Cow<'_, str> {
    if name.contains(['/', '\\']) {
        Cow::Owned(name.replace('\\', "\\\\").replace('/', "\\/"))
    } else {
        Cow::Borrowed(name)
    }
}

/// 与 [`folder_sizes`] 相同，但以 `/` 连接的完整路径作键，同名文件夹不会互相覆盖。
///
/// 名称中的 `/` 与 `\` 会被转义，例如名为 `a/b` 的文件夹键为 `R/a\/b`。
pub fn folder_sizes_by_path(node: Option<&Node>) -> BTreeMap<String, u64> {
    let mut sizes = BTreeMap::new();
    let mut stack: Vec<(&Node, String)> = node
        .map(|n| (n, path_segment(&n.name).into_owned()))
        .into_iter()
        .collect();

    while let Some((node, path)) = stack.pop() {
        if node.is_file() {
            continue;
        }
        for child in node.children.iter().rev() {
            stack.push((child, format!("{}/{}", path, path_segment(&child.name))));
        }
        sizes.insert(path, total_size(Some(node)));
    }

    sizes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn duplicate_names_tree() -> Node {
        Node::folder(
            "R",
            vec![
                Node::folder("X", vec![Node::file("f1", 3)]),
                Node::folder(
                    "Y",
                    vec![Node::folder("X", vec![Node::file("f2", 7)])],
                ),
            ],
        )
    }

    #[test]
    fn test_absent_and_leaf_are_empty() {
        assert!(folder_sizes(None).is_empty());
        assert!(folder_sizes(Some(&Node::file("F", 42))).is_empty());
        assert!(folder_sizes_by_path(None).is_empty());
        assert!(folder_sizes_by_path(Some(&Node::file("F", 42))).is_empty());
    }

    #[test]
    fn test_files_never_keys() {
        let tree = Node::folder(
            "A",
            vec![
                Node::file("B", 10),
                Node::folder("C", vec![Node::file("D", 5)]),
            ],
        );
        let sizes = folder_sizes(Some(&tree));
        assert_eq!(sizes.len(), 2);
        assert_eq!(sizes["A"], 15);
        assert_eq!(sizes["C"], 5);
        assert!(!sizes.contains_key("B"));
        assert!(!sizes.contains_key("D"));
    }

    #[test]
    fn test_duplicate_name_last_preorder_wins() {
        let sizes = folder_sizes(Some(&duplicate_names_tree()));
        assert_eq!(sizes["R"], 10);
        assert_eq!(sizes["Y"], 7);
        assert_eq!(sizes["X"], 7);
    }

    #[test]
    fn test_descendant_overwrites_same_named_ancestor() {
        let tree = Node::folder("X", vec![Node::folder("X", vec![Node::file("f", 2)]), Node::file("g", 5)]);
        assert_eq!(folder_sizes(Some(&tree))["X"], 2);
    }

    #[test]
    fn test_by_path_keeps_duplicates() {
        let sizes = folder_sizes_by_path(Some(&duplicate_names_tree()));
        let expected: BTreeMap<String, u64> = [("R", 10), ("R/X", 3), ("R/Y", 7), ("R/Y/X", 7)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        assert_eq!(sizes, expected);
    }

    #[test]
    fn test_by_path_escapes_separator() {
        let tree = Node::folder(
            "R",
            vec![
                Node::folder("a/b", vec![Node::file("f1", 1)]),
                Node::folder("a", vec![Node::folder("b", vec![Node::file("f2", 2)])]),
                Node::folder("c\\", vec![Node::file("f3", 4)]),
            ],
        );
        let sizes = folder_sizes_by_path(Some(&tree));
        assert_eq!(sizes.len(), 5);
        assert_eq!(sizes["R/a\\/b"], 1);
        assert_eq!(sizes["R/a/b"], 2);
        assert_eq!(sizes["R/a"], 2);
        assert_eq!(sizes["R/c\\\\"], 4);
        assert_eq!(sizes["R"], 7);
    }
}
