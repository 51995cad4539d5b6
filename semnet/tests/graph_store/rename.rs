//! Node rename: relabel to a fresh label, and merge onto an existing one.

use semnet::{EdgeAttributes, GraphError, LinkType};

use crate::common::Fixture;

#[test]
fn rename_to_fresh_label_moves_incident_edges() {
    let mut fx = Fixture::new();
    fx.store
        .add_or_update_edge("Cat", "Animal", LinkType::Generative, "is a")
        .unwrap();
    fx.store
        .add_or_update_edge("Animal", "Cell", LinkType::Instrumental, "made of")
        .unwrap();

    fx.store.rename_node("Animal", "Beast").unwrap();

    let store = fx.reopen();
    assert!(!store.contains_node("Animal"));
    assert!(store.contains_node("Beast"));
    assert_eq!(
        store.edge("Cat", "Beast"),
        Some(&EdgeAttributes::new(LinkType::Generative, "is a"))
    );
    assert_eq!(
        store.edge("Beast", "Cell"),
        Some(&EdgeAttributes::new(LinkType::Instrumental, "made of"))
    );
    assert_eq!(store.edge("Beast", "Cat"), None);
}

/// **Scenario**: Merge keeps the union of both edge sets; on a shared pair the renamed node's attributes win.
#[test]
fn rename_onto_existing_label_merges() {
    let mut fx = Fixture::new();
    fx.store
        .add_or_update_edge("Kitty", "Animal", LinkType::Generative, "kitty edge")
        .unwrap();
    fx.store
        .add_or_update_edge("Cat", "Animal", LinkType::Causal, "cat edge")
        .unwrap();
    fx.store
        .add_or_update_edge("Cat", "Milk", LinkType::Potential, "likes")
        .unwrap();

    fx.store.rename_node("Kitty", "Cat").unwrap();

    assert_eq!(fx.store.list_nodes(), vec!["Animal", "Cat", "Milk"]);
    assert_eq!(
        fx.store.edge("Cat", "Animal"),
        Some(&EdgeAttributes::new(LinkType::Generative, "kitty edge"))
    );
    assert_eq!(fx.store.edge("Cat", "Milk").unwrap().description, "likes");
    assert_eq!(fx.store.graph().edge_count(), 2);
}

#[test]
fn rename_missing_node_fails() {
    let mut fx = Fixture::new();
    assert_eq!(
        fx.store.rename_node("Ghost", "Spirit"),
        Err(GraphError::NodeNotFound("Ghost".into()))
    );
    assert!(!fx.path.exists());
}
