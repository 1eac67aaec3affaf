use nwkit::model::{Node, PhyloTree, TreeError};
use nwkit::parse_newick_str;

fn names_in_postorder(tree: &PhyloTree) -> Vec<&str> {
    tree.postorder_traversal()
        .into_iter()
        .map(|index| tree[index].name())
        .collect()
}

// ============= Construction Tests =============
#[test]
fn test_building_tree() {
    let mut tree = PhyloTree::new(Node::new("root", ""));
    let root = tree.root_index();
    let inner = tree.add_child(root, Node::new("inner", "1.5"));
    let a = tree.add_child(inner, Node::new("A", "1.0"));
    tree.add_child(inner, Node::new("B", "1.0"));
    tree.add_child(root, Node::new("C", "0.5"));

    assert_eq!(tree.num_nodes(), 5);
    assert_eq!(tree.num_leaves(), 3);
    assert_eq!(tree[inner].children().len(), 2);
    assert!(tree[a].is_leaf());
    assert_eq!(tree.node(inner).branch_length(), "1.5");
    assert_eq!(tree.to_newick(), "((A:1.0,B:1.0)inner:1.5,C:0.5)root;");
}

#[test]
#[should_panic]
fn test_get_node_out_of_bounds() {
    let tree = PhyloTree::new(Node::new("root", ""));
    let _ = &tree[55];
}

// ============= Traversal Tests =============
#[test]
fn test_postorder() {
    let tree = parse_newick_str("((5,6)3,2,4)1").unwrap();
    assert_eq!(names_in_postorder(&tree), ["5", "6", "3", "2", "4", "1"]);
}

#[test]
fn test_postorder_iter_matches_traversal() {
    let tree = parse_newick_str("(((a,b)c,(d)e)f,g)h").unwrap();
    let from_iter: Vec<_> = tree.post_order_iter().map(|(index, _)| index).collect();
    assert_eq!(from_iter, tree.postorder_traversal());
    assert_eq!(names_in_postorder(&tree), ["a", "b", "c", "d", "e", "f", "g", "h"]);
}

#[test]
fn test_postorder_of_deep_caterpillar() {
    let depth = 2_000;
    let newick = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
    let tree = parse_newick_str(&newick).unwrap();

    let order = tree.postorder_traversal();
    assert_eq!(order.len(), depth + 1);
    assert_eq!(tree[order[0]].name(), "x");
    assert_eq!(*order.last().unwrap(), tree.root_index());
}

#[test]
fn test_preorder() {
    let tree = parse_newick_str("((5,6)3,2,4)1").unwrap();
    let names: Vec<_> = tree.pre_order_iter().map(|(_, node)| node.name()).collect();
    assert_eq!(names, ["1", "3", "5", "6", "2", "4"]);
}

#[test]
fn test_visit_parent_before_children() {
    let mut tree = parse_newick_str("(a:1.1,(c,d)e)b").unwrap();
    let mut seen = Vec::new();
    tree.visit(|node, depth| seen.push((node.name().to_string(), depth)));

    let expected = [("b", 0), ("a", 1), ("e", 1), ("c", 2), ("d", 2)];
    let expected: Vec<(String, usize)> =
        expected.iter().map(|(n, d)| (n.to_string(), *d)).collect();
    assert_eq!(seen, expected);
}

#[test]
fn test_visit_mutates() {
    let mut tree = parse_newick_str("(a:1.1,c)b").unwrap();
    tree.visit(|node, _| {
        if !node.has_branch_length() {
            node.set_branch_length("0.0");
        }
    });
    assert_eq!(tree.to_newick(), "(a:1.1,c:0.0)b:0.0;");
}

// ============= Redundant Node Tests =============
#[test]
fn test_remove_redundant_sums_lengths() {
    let mut tree = parse_newick_str("((c,d)a:1.0)b:1.0").unwrap();
    let root = tree.root_index();
    tree.remove_redundant_nodes().unwrap();

    assert_eq!(tree.root_index(), root);
    assert_eq!(tree.to_newick(), "(c,d)a:2.000000;");
    assert_eq!(tree.num_nodes(), 3);
}

#[test]
fn test_remove_redundant_without_own_length() {
    // Length is only accumulated into a node that had one
    let mut tree = parse_newick_str("((c,d)a:1.0)b").unwrap();
    tree.remove_redundant_nodes().unwrap();
    assert_eq!(tree.to_newick(), "(c,d)a;");
}

#[test]
fn test_remove_redundant_child_without_length() {
    let mut tree = parse_newick_str("((c,d)a)b:0.25").unwrap();
    tree.remove_redundant_nodes().unwrap();
    assert_eq!(tree.to_newick(), "(c,d)a:0.250000;");
}

#[test]
fn test_remove_redundant_chain() {
    let mut tree = parse_newick_str("((((x:1,y:1)a:1)b:1)c:1,z:1)r").unwrap();
    tree.remove_redundant_nodes().unwrap();
    assert_eq!(tree.to_newick(), "((x:1,y:1)a:3.000000,z:1)r;");
    assert_eq!(tree.num_nodes(), 5);
}

#[test]
fn test_remove_redundant_unary_leaf_parent() {
    let mut tree = parse_newick_str("(a)b").unwrap();
    tree.remove_redundant_nodes().unwrap();
    assert_eq!(tree.to_newick(), "a;");
    assert!(tree.root().is_leaf());
}

#[test]
fn test_remove_redundant_untouched() {
    let newick = "((a:1,b:2)c:3,d:4)e:5;";
    let mut tree = parse_newick_str(newick).unwrap();
    tree.remove_redundant_nodes().unwrap();
    assert_eq!(tree.to_newick(), newick);
}

#[test]
fn test_remove_redundant_invalid_length() {
    let mut tree = parse_newick_str("((c,d)a:x)b:1.0").unwrap();
    let err = tree.remove_redundant_nodes().unwrap_err();
    assert_eq!(
        err,
        TreeError::InvalidBranchLength {
            name: "a".to_string(),
            value: "x".to_string()
        }
    );
    // Tree left as it was
    assert_eq!(tree.to_newick(), "((c,d)a:x)b:1.0;");
}

// ============= Polytomy Tests =============
#[test]
fn test_binarise() {
    let mut tree = parse_newick_str("((a,b,c,d)e)f").unwrap();
    tree.remove_redundant_nodes().unwrap();
    tree.resolve_polytomies();
    assert_eq!(tree.to_newick(), "(a,(b,(c,d)))e;");
}

#[test]
fn test_resolve_polytomies_nested() {
    let mut tree = parse_newick_str("((a,b,c)x:1,d,e)r").unwrap();
    tree.resolve_polytomies();
    assert_eq!(tree.to_newick(), "((a,(b,c))x:1,(d,e))r;");
    assert!(tree.is_binary());
    assert_eq!(tree.leaf_names(), ["a", "b", "c", "d", "e"]);
}

#[test]
fn test_resolve_polytomies_idempotent() {
    let mut tree = parse_newick_str("(a,b,c,d,e,f)g").unwrap();
    tree.resolve_polytomies();
    let once = tree.to_newick();
    tree.resolve_polytomies();
    assert_eq!(tree.to_newick(), once);
    assert_eq!(tree.max_degree(), 2);
}

#[test]
fn test_resolve_polytomies_reuses_released_slots() {
    let mut tree = parse_newick_str("((((a,b,c)x)y)z)r").unwrap();
    let nodes_before = tree.num_nodes();
    tree.remove_redundant_nodes().unwrap();
    assert_eq!(tree.num_nodes(), nodes_before - 3);
    tree.resolve_polytomies();
    assert_eq!(tree.num_nodes(), nodes_before - 2);
    assert_eq!(tree.to_newick(), "(a,(b,c))x;");
}

#[test]
fn test_resolve_polytomies_binary_untouched() {
    let newick = "((a,b)c,(d)e)f;";
    let mut tree = parse_newick_str(newick).unwrap();
    tree.resolve_polytomies();
    assert_eq!(tree.to_newick(), newick);
}
