//! End-to-end edit/query sequences against a write-through store.

use semnet::{EdgeAttributes, GraphError, LinkType};

use crate::common::{path, Fixture};

#[test]
fn first_edge_lists_nodes_in_order_of_appearance() {
    let mut fx = Fixture::new();
    fx.store
        .add_or_update_edge(
            "Cat",
            "Animal",
            "(Gen) Генеративная связь".parse().unwrap(),
            "cat is an animal",
        )
        .unwrap();

    assert_eq!(fx.store.list_nodes(), vec!["Cat", "Animal"]);
    let paths = fx.store.find_paths("Cat", "Animal").unwrap();
    assert_eq!(paths.directed, vec![path(&["Cat", "Animal"])]);
    assert_eq!(paths.undirected, vec![path(&["Cat", "Animal"])]);
}

#[test]
fn chain_is_directed_one_way_and_undirected_both_ways() {
    let mut fx = Fixture::new();
    fx.store
        .add_or_update_edge("Cat", "Animal", LinkType::Generative, "")
        .unwrap();
    fx.store
        .add_or_update_edge("Animal", "Thing", LinkType::Generative, "")
        .unwrap();

    let forward = fx.store.find_paths("Cat", "Thing").unwrap();
    assert_eq!(forward.directed, vec![path(&["Cat", "Animal", "Thing"])]);

    let backward = fx.store.find_paths("Thing", "Cat").unwrap();
    assert!(backward.directed.is_empty());
    assert_eq!(backward.undirected, vec![path(&["Thing", "Animal", "Cat"])]);
}

#[test]
fn edit_after_add_is_visible_immediately_and_after_reopen() {
    let mut fx = Fixture::new();
    fx.store
        .add_or_update_edge("Cat", "Animal", LinkType::Generative, "cat is an animal")
        .unwrap();
    fx.store
        .edit_edge("Cat", "Animal", LinkType::Possessive, "has fur")
        .unwrap();

    let expected = EdgeAttributes::new(LinkType::Possessive, "has fur");
    assert_eq!(fx.store.edge("Cat", "Animal"), Some(&expected));
    assert_eq!(fx.reopen().edge("Cat", "Animal"), Some(&expected));
}

/// **Scenario**: Deleting a node removes it and every edge touching it, on disk as well.
#[test]
fn delete_node_removes_all_references() {
    let mut fx = Fixture::new();
    for (s, t) in [("Cat", "Animal"), ("Dog", "Animal"), ("Animal", "Thing")] {
        fx.store
            .add_or_update_edge(s, t, LinkType::Generative, "")
            .unwrap();
    }

    fx.store.delete_node("Animal").unwrap();

    for store in [&fx.store, &fx.reopen()] {
        assert!(!store.list_nodes().contains(&"Animal".to_string()));
        assert!(store
            .graph()
            .edges()
            .all(|e| e.source != "Animal" && e.target != "Animal"));
        assert_eq!(store.list_nodes(), vec!["Cat", "Dog", "Thing"]);
    }
}

#[test]
fn delete_missing_edge_fails_and_leaves_store_unchanged() {
    let mut fx = Fixture::new();
    fx.store
        .add_or_update_edge("Cat", "Animal", LinkType::Generative, "")
        .unwrap();
    let before = fx.store.graph().clone();

    let err = fx.store.delete_edge("Animal", "Cat").unwrap_err();

    assert_eq!(
        err,
        GraphError::EdgeNotFound {
            from: "Animal".into(),
            to: "Cat".into()
        }
    );
    assert_eq!(fx.store.graph(), &before);
    assert_eq!(fx.reopen().graph(), &before);
}

#[test]
fn operations_on_missing_nodes_report_not_found() {
    let mut fx = Fixture::new();
    fx.store.create_node("Cat").unwrap();

    assert!(fx.store.delete_node("Dog").unwrap_err().is_not_found());
    assert!(fx.store.delete_edge("Cat", "Dog").unwrap_err().is_not_found());
    assert!(fx
        .store
        .edit_edge("Dog", "Cat", LinkType::Generative, "")
        .unwrap_err()
        .is_not_found());
    assert!(fx.store.find_paths("Cat", "Dog").unwrap_err().is_not_found());
    assert_eq!(fx.store.list_nodes(), vec!["Cat"]);
}

#[test]
fn unconnected_nodes_give_two_empty_results() {
    let mut fx = Fixture::new();
    fx.store.create_node("Left").unwrap();
    fx.store.create_node("Right").unwrap();

    let paths = fx.store.find_paths("Left", "Right").unwrap();
    assert!(paths.directed.is_empty());
    assert!(paths.undirected.is_empty());

    let own = fx.store.find_paths("Left", "Left").unwrap();
    assert_eq!(own.directed, vec![path(&["Left"])]);
    assert_eq!(own.undirected, vec![path(&["Left"])]);
}
