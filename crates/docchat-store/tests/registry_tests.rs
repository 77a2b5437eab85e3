use std::sync::Arc;

use docchat_core::types::DocumentMeta;
use docchat_store::StoreRegistry;
use docchat_text::DocumentIndex;

fn index(id: &str, pages: &[&str]) -> DocumentIndex {
    let meta = DocumentMeta { id: id.to_string(), name: format!("{id}.pdf"), source_location: format!("/uploads/{id}") };
    DocumentIndex::build(meta, pages.iter().map(|s| s.to_string()).collect())
}

fn put(registry: &StoreRegistry, id: &str) {
    registry.put(id, index(id, &["some page text"]));
}

#[test]
fn sixth_document_evicts_the_first() {
    let registry = StoreRegistry::new(5);
    for id in ["d1", "d2", "d3", "d4", "d5", "d6"] {
        put(&registry, id);
    }
    assert!(registry.get("d1").is_none());
    assert!(registry.get("d6").is_some());
    assert_eq!(registry.len(), 5);
    assert_eq!(registry.ids(), vec!["d2", "d3", "d4", "d5", "d6"]);
}

#[test]
fn reput_replaces_content_and_refreshes_position() {
    let registry = StoreRegistry::new(3);
    registry.put("a", index("a", &["old content"]));
    put(&registry, "b");
    put(&registry, "c");

    registry.put("a", index("a", &["new content", "second page"]));
    assert_eq!(registry.ids(), vec!["b", "c", "a"]);
    let current = registry.get("a").expect("a resident");
    assert_eq!(current.page_count(), 2);
    assert_eq!(current.pages()[0], "new content");

    // "b" is now the oldest, not "a"
    put(&registry, "d");
    assert!(!registry.contains("b"));
    assert!(registry.contains("a"));
    assert_eq!(registry.len(), 3);
}

#[test]
fn lookups_do_not_refresh_recency() {
    let registry = StoreRegistry::new(2);
    put(&registry, "first");
    put(&registry, "second");
    for _ in 0..10 {
        assert!(registry.get("first").is_some());
    }
    put(&registry, "third");
    assert!(registry.get("first").is_none());
    assert_eq!(registry.ids(), vec!["second", "third"]);
}

#[test]
fn evicted_index_stays_usable_by_holder() {
    let registry = StoreRegistry::new(1);
    put(&registry, "held");
    let held: Arc<DocumentIndex> = registry.get("held").expect("resident");

    put(&registry, "newer");
    assert!(registry.get("held").is_none());
    assert_eq!(held.id(), "held");
    assert_eq!(held.pages()[0], "some page text");
}

#[test]
fn unknown_id_is_absent() {
    let registry = StoreRegistry::new(5);
    assert!(registry.is_empty());
    assert!(registry.get("missing").is_none());
}

#[test]
fn zero_capacity_is_raised_to_one() {
    let registry = StoreRegistry::new(0);
    assert_eq!(registry.capacity(), 1);
    put(&registry, "only");
    assert_eq!(registry.len(), 1);
}

#[test]
fn concurrent_readers_see_whole_indexes() {
    let registry = StoreRegistry::new(4);
    std::thread::scope(|scope| {
        scope.spawn(|| {
            for i in 0..50 {
                let id = format!("doc{}", i % 8);
                registry.put(id.clone(), index(&id, &["alpha beta", "gamma delta"]));
            }
        });
        for _ in 0..4 {
            scope.spawn(|| {
                for i in 0..200 {
                    if let Some(found) = registry.get(&format!("doc{}", i % 8)) {
                        assert_eq!(found.page_count(), 2);
                        assert_eq!(found.vectors().len(), 2);
                    }
                    assert!(registry.len() <= 4);
                }
            });
        }
    });
    assert_eq!(registry.len(), 4);
}
