//! Independent wrappers decoding in parallel with shared immutable contexts.

use include_core::{DirResolver, IncludeSeed, Wrapper};
use include_test_utils::Fixtures;
use serde::de::DeserializeSeed;
use std::sync::Arc;
use std::thread;

#[test]
fn test_parallel_decodes_share_context() {
    let fixtures = Fixtures::standard();
    let ctx = Arc::new(DirResolver::new(fixtures.root()));

    let results: Vec<i64> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ctx = Arc::clone(&ctx);
                scope.spawn(move || {
                    let mut w = Wrapper::with_context(ctx, 0i64);
                    w.decode(br#"{"include":"int.json"}"#).unwrap();
                    w.into_inner()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results, vec![123; 8]);
}

#[test]
fn test_seed_decodes_array_elements_independently() {
    let fixtures = Fixtures::standard();
    let ctx = DirResolver::new(fixtures.root());
    let raw = r#"[{"include":"int.json"}, 7, {"include":"int.json"}]"#;

    let values: Vec<serde_json::Value> = serde_json::from_str(raw).unwrap();
    let decoded: Vec<i64> = values
        .into_iter()
        .map(|v| IncludeSeed::new(&ctx).deserialize(v).unwrap())
        .collect();

    assert_eq!(decoded, vec![123, 7, 123]);
}
