//! Reopen round trips, data file shape, and corrupt-file recovery.

use semnet::{GraphStore, LinkType};

use crate::common::Fixture;

/// **Scenario**: Every link type and description survives a save/load cycle exactly.
#[test]
fn reopen_reproduces_edge_attributes() {
    let mut fx = Fixture::new();
    for (i, link_type) in LinkType::ALL.into_iter().enumerate() {
        fx.store
            .add_or_update_edge(
                &format!("N{}", i),
                &format!("N{}", i + 1),
                link_type,
                &format!("\"quoted\" описание {}", i),
            )
            .unwrap();
    }

    let reopened = fx.reopen();

    assert_eq!(reopened.graph(), fx.store.graph());
    assert_eq!(reopened.list_nodes().len(), 18);
    assert!(reopened.load_warning().is_none());
}

#[test]
fn isolated_nodes_survive_reopen() {
    let mut fx = Fixture::new();
    fx.store.create_node("Lonely").unwrap();
    fx.store
        .add_or_update_edge("Cat", "Animal", LinkType::Generative, "")
        .unwrap();

    assert_eq!(fx.reopen().list_nodes(), vec!["Lonely", "Cat", "Animal"]);
}

#[test]
fn data_file_is_an_adjacency_map() {
    let mut fx = Fixture::new();
    fx.store
        .add_or_update_edge("Cat", "Animal", LinkType::Negative, "not a plant")
        .unwrap();

    let text = std::fs::read_to_string(&fx.path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        value["Cat"]["Animal"]["link_type"],
        "(Neg) Негативаня связь"
    );
    assert_eq!(value["Cat"]["Animal"]["description"], "not a plant");
    assert_eq!(value["Animal"], serde_json::json!({}));
}

/// **Scenario**: A corrupt data file opens as an empty, usable store with a warning.
#[test]
fn corrupt_file_opens_empty_with_warning() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("semantic_network.json");
    std::fs::write(&path, "{\"Cat\": [not json").unwrap();

    let mut store = GraphStore::open(&path).unwrap();

    assert!(store.graph().is_empty());
    assert!(store.load_warning().is_some());

    store
        .add_or_update_edge("Cat", "Animal", LinkType::Generative, "")
        .unwrap();
    let reopened = GraphStore::open(&path).unwrap();
    assert!(reopened.load_warning().is_none());
    assert_eq!(reopened.list_nodes(), vec!["Cat", "Animal"]);
}

#[test]
fn legacy_file_without_neighbor_keys_still_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("semantic_network.json");
    std::fs::write(
        &path,
        r#"{"Cat": {"Animal": {"link_type": "(Gen) Генеративная связь", "description": ""}}}"#,
    )
    .unwrap();

    let store = GraphStore::open(&path).unwrap();

    assert_eq!(store.list_nodes(), vec!["Cat", "Animal"]);
    assert!(store.edge("Cat", "Animal").is_some());
}
