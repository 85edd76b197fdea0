//! Tests for TreeBuilder: folding flat parameter names into a hierarchy

use rstest::rstest;

use ssm_tree::domain::{build_tree, build_tree_from_records, NodeIdentity, ParameterRecord, TreeBuilder};

// ============================================================
// Shared prefixes
// ============================================================

#[test]
fn given_paths_with_shared_prefix_when_building_then_prefix_becomes_shared_ancestor() {
    // Arrange
    let paths = ["/A/B/C", "/A/B/D", "/A/E"];

    // Act
    let tree = build_tree(paths, NodeIdentity::Path);

    // Assert
    assert_eq!(tree.root_labels(), vec!["A"]);
    assert_eq!(tree.children_labels("/A"), vec!["B", "E"]);
    assert_eq!(tree.children_labels("/A/B"), vec!["C", "D"]);
    assert_eq!(tree.len(), 5);
    assert_eq!(tree.depth(), 3);
}

#[test]
fn given_single_segment_path_when_building_then_single_root_without_children() {
    let tree = build_tree(["/A"], NodeIdentity::Path);

    assert_eq!(tree.root_labels(), vec!["A"]);
    assert!(tree.children_labels("/A").is_empty());
    assert_eq!(tree.len(), 1);
}

#[test]
fn given_no_paths_when_building_then_tree_is_empty() {
    let tree = build_tree(Vec::<String>::new(), NodeIdentity::Path);

    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.depth(), 0);
}

#[test]
fn given_only_separator_paths_when_building_then_tree_is_empty() {
    let tree = build_tree(["", "/"], NodeIdentity::Path);
    assert!(tree.is_empty());
}

#[test]
fn given_different_top_level_segments_when_building_then_one_root_each() {
    let tree = build_tree(["/Servers/Prod/DbHost", "/Apps/Web/Port"], NodeIdentity::Path);

    assert_eq!(tree.root_labels(), vec!["Servers", "Apps"]);
    assert_eq!(tree.leaf_nodes(), vec!["/Servers/Prod/DbHost", "/Apps/Web/Port"]);
}

// ============================================================
// Idempotence
// ============================================================

#[rstest]
#[case(NodeIdentity::Path)]
#[case(NodeIdentity::Name)]
fn given_same_path_twice_when_building_then_same_tree_as_once(#[case] identity: NodeIdentity) {
    let once = build_tree(["/Servers/Prod/DbHost"], identity);
    let twice = build_tree(["/Servers/Prod/DbHost", "/Servers/Prod/DbHost"], identity);

    assert_eq!(once.len(), twice.len());
    assert_eq!(once.leaf_nodes(), twice.leaf_nodes());
    assert_eq!(once.depth(), twice.depth());
}

#[test]
fn given_builder_when_adding_known_path_then_returns_same_leaf() {
    let mut builder = TreeBuilder::new(NodeIdentity::Path);

    let first = builder.add_path("/A/B");
    let second = builder.add_path("/A/B");

    assert!(first.is_some());
    assert_eq!(first, second);
    assert_eq!(builder.skipped(), 0);
}

// ============================================================
// Node identity
// ============================================================

#[test]
fn given_repeated_leaf_name_when_building_by_name_then_second_occurrence_collapses() {
    // Equal names at different depths share one node: the later one is dropped.
    let tree = build_tree(["/X/Name", "/Y/Z/Name"], NodeIdentity::Name);

    assert_eq!(tree.root_labels(), vec!["X", "Y"]);
    assert_eq!(tree.children_labels("X"), vec!["Name"]);
    assert!(tree.children_labels("Z").is_empty());
    assert_eq!(tree.len(), 4);
}

#[test]
fn given_repeated_leaf_name_when_building_by_path_then_both_occurrences_kept() {
    let tree = build_tree(["/X/Name", "/Y/Z/Name"], NodeIdentity::Path);

    assert_eq!(tree.children_labels("/X"), vec!["Name"]);
    assert_eq!(tree.children_labels("/Y/Z"), vec!["Name"]);
    assert_eq!(tree.len(), 5);
}

#[test]
fn given_repeated_intermediate_name_when_building_by_name_then_subtrees_merge() {
    // Prod under Servers and under Apps becomes one node under Servers.
    let tree = build_tree(["/Servers/Prod/DbHost", "/Apps/Prod/Port"], NodeIdentity::Name);

    assert_eq!(tree.children_labels("Prod"), vec!["DbHost", "Port"]);
    assert!(tree.children_labels("Apps").is_empty());
}

// ============================================================
// Metadata
// ============================================================

#[test]
fn given_records_when_building_then_leaves_carry_type_and_version() {
    let records = vec![
        ParameterRecord::new("/Servers/Prod/DbHost", "String", 3),
        ParameterRecord::new("/Servers/Prod/DbPassword", "SecureString", 1),
    ];

    let tree = build_tree_from_records(&records, NodeIdentity::Path);

    let (_, host) = tree.find("/Servers/Prod/DbHost").unwrap();
    let meta = host.data.meta.as_ref().unwrap();
    assert_eq!(meta.kind, "String");
    assert_eq!(meta.version, 3);

    let (_, prod) = tree.find("/Servers/Prod").unwrap();
    assert!(prod.data.meta.is_none());
}

#[test]
fn given_parameter_that_is_also_a_prefix_when_building_then_node_keeps_children_and_meta() {
    let records = vec![
        ParameterRecord::new("/App/Db", "String", 1),
        ParameterRecord::new("/App/Db/Port", "String", 2),
    ];

    let tree = build_tree_from_records(&records, NodeIdentity::Path);

    let (_, db) = tree.find("/App/Db").unwrap();
    assert_eq!(db.data.meta.as_ref().map(|m| m.version), Some(1));
    assert_eq!(tree.children_labels("/App/Db"), vec!["Port"]);
}
