//! Tests for the standard 13-node tree

use rand::rngs::StdRng;
use rand::SeedableRng;
use rstest::rstest;

use tagtree::domain::{
    DomainError, Layout, Node, NodeSpec, TaggedTree, TreeBuilder, Value, ValueKind,
};

fn standard_tree() -> TaggedTree {
    TreeBuilder::new(StdRng::seed_from_u64(1))
        .build(&Layout::standard())
        .expect("build standard tree")
}

fn tags(nodes: &[Node]) -> Vec<char> {
    nodes.iter().map(Node::tag).collect()
}

// ============================================================
// Lookup
// ============================================================

#[test]
fn given_standard_tree_when_finding_i_then_text_node_with_k_l_m() {
    // Arrange
    let tree = standard_tree();

    // Act
    let node = tree.find('I').expect("I is in the tree");

    // Assert
    assert_eq!(node.tag(), 'I');
    assert!(matches!(node.value(), Value::Text(_)));
    assert_eq!(tags(node.children()), vec!['K', 'L', 'M']);
}

#[rstest]
#[case('0')]
#[case('Z')]
#[case('a')]
#[case(' ')]
fn given_standard_tree_when_finding_unassigned_tag_then_none(#[case] tag: char) {
    let tree = standard_tree();
    assert!(tree.find(tag).is_none());
}

#[rstest]
#[case('A', ValueKind::Text)]
#[case('B', ValueKind::Int)]
#[case('C', ValueKind::Text)]
#[case('D', ValueKind::Int)]
#[case('E', ValueKind::Text)]
#[case('F', ValueKind::Int)]
#[case('H', ValueKind::Int)]
#[case('J', ValueKind::Int)]
#[case('L', ValueKind::Int)]
#[case('M', ValueKind::Text)]
fn given_standard_tree_when_finding_then_value_kind_alternates(
    #[case] tag: char,
    #[case] kind: ValueKind,
) {
    let tree = standard_tree();
    assert_eq!(tree.find(tag).map(|n| n.value().kind()), Some(kind));
}

#[test]
fn given_standard_tree_then_shape_matches_layout() {
    let tree = standard_tree();
    let root = tree.root().unwrap();

    assert_eq!(root.tag(), 'A');
    assert_eq!(tags(root.children()), vec!['B', 'C', 'D']);
    assert_eq!(tags(tree.find('B').unwrap().children()), vec!['E', 'F', 'G']);
    assert_eq!(tags(tree.find('C').unwrap().children()), vec!['H']);
    assert_eq!(tags(tree.find('D').unwrap().children()), vec!['I', 'J']);
    assert_eq!(root.leaf_tags(), vec!['E', 'F', 'G', 'H', 'K', 'L', 'M', 'J']);
    assert_eq!(tree.depth(), 4);
}

// ============================================================
// Rendering
// ============================================================

#[test]
fn given_standard_tree_when_rendering_all_then_thirteen_lines_in_pre_order() {
    // Arrange
    let tree = standard_tree();
    let mut out = Vec::new();

    // Act
    tree.render_all(&mut out).unwrap();

    // Assert
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 13);

    let order: String = lines
        .iter()
        .map(|line| {
            line.strip_prefix("Node Name : ")
                .and_then(|rest| rest.chars().next())
                .unwrap()
        })
        .collect();
    assert_eq!(order, "ABEFGCHDIKLMJ");

    for (line, node) in lines.iter().zip(tree.iter()) {
        assert_eq!(*line, format!("Node Name : {}\tNode Value : {}", node.tag(), node.value()));
    }
}

#[test]
fn given_same_seed_when_building_twice_then_identical_trees() {
    assert_eq!(standard_tree(), standard_tree());
}

// ============================================================
// Append and duplicates
// ============================================================

#[test]
fn given_children_when_appending_more_then_earlier_children_unchanged() {
    // Arrange
    let mut tree = standard_tree();
    let before: Vec<Node> = tree.find('I').unwrap().children().to_vec();

    // Act
    tree.attach('I', Node::new('N', 5)).unwrap();
    tree.attach('I', Node::new('O', "tail")).unwrap();

    // Assert
    let after = tree.find('I').unwrap().children();
    assert_eq!(after.len(), 5);
    assert_eq!(&after[..3], before.as_slice());
    assert_eq!(tags(&after[3..]), vec!['N', 'O']);
}

#[test]
fn given_duplicate_tags_when_finding_then_first_pre_order_match_wins() {
    // Arrange: a second 'K' under B comes before I's 'K' in pre-order
    let mut tree = standard_tree();
    tree.attach('B', Node::new('K', 777)).unwrap();

    // Act
    let found = tree.find('K').unwrap();

    // Assert
    assert_eq!(found.value(), &Value::Int(777));
    assert!(found.is_leaf());
}

#[test]
fn given_unique_tags_when_layout_repeats_tag_then_builder_rejects() {
    // Arrange
    let mut layout = Layout::standard();
    layout.push(NodeSpec::child('J', 'E', ValueKind::Int));

    // Act
    let strict = TreeBuilder::new(StdRng::seed_from_u64(1))
        .unique_tags(true)
        .build(&layout);
    let lenient = TreeBuilder::new(StdRng::seed_from_u64(1)).build(&layout);

    // Assert
    assert!(matches!(strict, Err(DomainError::DuplicateTag('E'))));
    assert_eq!(lenient.unwrap().len(), 14);
}

// ============================================================
// Teardown
// ============================================================

#[test]
fn given_very_deep_chain_when_traversing_then_no_stack_overflow() {
    // Arrange
    let mut node = Node::new('z', 0);
    for i in 1..200_000i64 {
        let mut parent = Node::new('y', i);
        parent.add_child(node);
        node = parent;
    }
    let mut tree = TaggedTree::with_root(node);

    // Act
    tree.attach('z', Node::new('w', -1)).unwrap();
    let mut out = Vec::new();
    tree.render_all(&mut out).unwrap();

    // Assert
    assert_eq!(tree.depth(), 200_001);
    assert_eq!(tree.len(), 200_001);
    assert_eq!(tree.find('w').map(Node::value), Some(&Value::Int(-1)));
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 200_001);
    assert_eq!(text.lines().last(), Some("Node Name : w\tNode Value : -1"));
    drop(tree);
}

#[test]
fn given_wide_tree_when_counting_then_every_node_visited_once() {
    let mut root = Node::new('r', 0);
    for i in 0..1000i64 {
        let mut child = Node::new('c', i);
        child.add_child(Node::new('g', i));
        root.add_child(child);
    }
    assert_eq!(root.len(), 2001);
    assert_eq!(root.iter().filter(|n| n.tag() == 'g').count(), 1000);
}
