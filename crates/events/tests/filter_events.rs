//! Black-box checks of the audit-log page pipeline against catalog-shaped JSON.

use auditlog_events::{
    EventCatalog, PipelineDefaults, Plan, VersionKey, VersionedEventStore,
    filter_and_update_ghes_data_by_allowlist_values, filter_by_allowlist_values,
};

fn key(raw: &str) -> VersionKey {
    raw.parse().unwrap()
}

#[test]
fn ghes_merge_updates_multiple_versions() {
    auditlog_observability::init_for_tests();

    let catalog = EventCatalog::from_json(
        r#"[
            {
                "action": "repo.create",
                "description": "repo was created",
                "ghes": {
                    "3.10": { "_allowlists": ["user"] },
                    "3.11": { "_allowlists": ["user"] }
                }
            }
        ]"#,
    )
    .unwrap();

    let mut store = VersionedEventStore::from_json(
        r#"{
            "ghes-3.11": { "organization": [ { "action": "repo.update", "description": "repo was created" } ] },
            "ghes-3.12": { "enterprise": [ { "action": "repo.delete", "description": "repo was deleted" } ] }
        }"#,
    )
    .unwrap();
    let before = store.clone();
    let page = Plan::user();

    filter_and_update_ghes_data_by_allowlist_values(
        catalog.events(),
        &Plan::user(),
        &mut store,
        &PipelineDefaults::default(),
        &page,
    );

    assert!(store.actions(&key("ghes-3.10"), &page).contains(&"repo.create"));
    assert!(store.actions(&key("ghes-3.11"), &page).contains(&"repo.create"));
    assert!(!store.has_page(&key("ghes-3.12"), &page));

    // Pre-existing buckets are untouched.
    assert_eq!(
        store.pages(&key("ghes-3.11")).unwrap().get(&Plan::organization()),
        before.pages(&key("ghes-3.11")).unwrap().get(&Plan::organization())
    );
    assert_eq!(store.pages(&key("ghes-3.12")), before.pages(&key("ghes-3.12")));
}

#[test]
fn version_excluding_plan_is_untouched() {
    auditlog_observability::init_for_tests();

    let catalog = EventCatalog::from_json(
        r#"[
            {
                "action": "repo.create",
                "description": "repo was created",
                "_allowlists": ["user"],
                "ghes": {
                    "3.11": { "_allowlists": ["user"] },
                    "3.12": { "_allowlists": ["enterprise"] }
                }
            }
        ]"#,
    )
    .unwrap();

    let mut store = VersionedEventStore::new();
    let user = Plan::user();
    catalog.merge_ghes_into(&user, &mut store, &PipelineDefaults::default(), &user);

    let keys: Vec<String> = store.version_keys().map(ToString::to_string).collect();
    assert_eq!(keys, vec!["ghes-3.11"]);
}

#[test]
fn gets_the_correct_event_fields_data() {
    auditlog_observability::init_for_tests();

    let catalog = EventCatalog::from_json(
        r#"[
            {
                "action": "repo.create",
                "_allowlists": ["user"],
                "description": "repo was created",
                "fields": ["beep"],
                "ghes": { "3.10": { "_allowlists": ["user"], "fields": ["boop"] } }
            }
        ]"#,
    )
    .unwrap();

    let filtered = filter_by_allowlist_values(catalog.events(), "user");
    assert!(filtered[0].fields.as_ref().unwrap().contains(&"beep".to_string()));

    let mut store = VersionedEventStore::new();
    let page = Plan::user();
    filter_and_update_ghes_data_by_allowlist_values(
        catalog.events(),
        &Plan::user(),
        &mut store,
        &PipelineDefaults::default(),
        &page,
    );

    let merged = &store.bucket(&key("ghes-3.10"), &page).unwrap()[0];
    let fields = merged.fields.as_ref().unwrap();
    assert!(fields.contains(&"boop".to_string()));
    assert!(!fields.contains(&"beep".to_string()));
}

#[test]
fn store_renders_back_to_catalog_keys() {
    let catalog = EventCatalog::from_json(
        r#"[ { "action": "repo.create", "ghes": { "3.10": { "_allowlists": ["user"] } } } ]"#,
    )
    .unwrap();

    let mut store = VersionedEventStore::new();
    let user = Plan::user();
    catalog.merge_ghes_into(&user, &mut store, &PipelineDefaults::default(), &user);

    let rendered = serde_json::to_value(&store).unwrap();
    assert_eq!(
        rendered,
        serde_json::json!({
            "ghes-3.10": {
                "user": [
                    { "action": "repo.create", "description": "", "_allowlists": ["user"], "fields": [] }
                ]
            }
        })
    );
}
