//! End-to-end flow over the public API: configuration, category changes,
//! dependent loads, and the wonder formset, all against the in-memory
//! backend.

use std::sync::Arc;

use sheetwright_client::application::controllers::{SpendFormController, WonderFormController};
use sheetwright_client::application::services::ExampleService;
use sheetwright_client::config::FormConfig;
use sheetwright_client::infrastructure::testing::{
    InMemoryChainedQuery, RecordingFormsetView, RecordingSpendFormView,
};
use sheetwright_domain::{FieldGroup, Formset, FormsetPrefix};
use sheetwright_shared::ExampleOptionData;

fn option_data(value: &str, label: &str, poolable: Option<&str>) -> ExampleOptionData {
    let mut data = ExampleOptionData {
        value: value.to_string(),
        label: label.to_string(),
        metadata: Default::default(),
    };
    if let Some(flag) = poolable {
        data.metadata.insert("poolable".to_string(), flag.to_string());
    }
    data
}

fn backend() -> Arc<InMemoryChainedQuery> {
    Arc::new(
        InMemoryChainedQuery::new()
            .with_examples(
                "Background",
                vec![
                    option_data("bg_1", "Allies", None),
                    option_data("bg_2", "Library", Some("false")),
                ],
            )
            .with_examples("MeritFlaw", vec![option_data("mf_4", "Acute Senses", None)])
            .with_values("mf_4", vec!["-2", "2"]),
    )
}

#[tokio::test]
async fn spend_form_drives_the_full_selector_chain() {
    let config = FormConfig::from_attributes(vec![
        ("data-examples-url", "http://localhost:8000/load-examples/"),
        ("data-values-url", "http://localhost:8000/load-values/"),
        ("data-subject", "char_9"),
        ("data-group-member", "true"),
    ])
    .expect("valid attributes");

    let backend = backend();
    let mut controller = SpendFormController::new(
        RecordingSpendFormView::default(),
        ExampleService::new(backend.clone()),
        config.subject.clone(),
        config.is_group_member,
    );

    // Background spend: note and pooled show, examples arrive with metadata.
    controller.category_changed("Background").await;
    assert!(controller.view().wrap(FieldGroup::Note));
    assert!(controller.view().wrap(FieldGroup::Pooled));
    assert_eq!(
        controller.view().example_select.labels(),
        vec!["---------", "Allies", "Library"]
    );

    // A non-poolable background hides the pooled group without a query.
    assert!(controller.view_mut().example_select.select_value("bg_2"));
    controller.example_changed().await;
    assert!(!controller.view().wrap(FieldGroup::Pooled));

    // Merit/flaw spend: ratings load for the picked example.
    controller.category_changed("MeritFlaw").await;
    assert!(controller.view().wrap(FieldGroup::Value));
    assert!(controller.view_mut().example_select.select_value("mf_4"));
    controller.example_changed().await;
    assert_eq!(
        controller.view().value_select.labels(),
        vec!["---------", "-2", "2"]
    );

    // Willpower is terminal: everything hides, nothing else is queried.
    controller.category_changed("Willpower").await;
    for group in FieldGroup::ALL {
        assert!(!controller.view().wrap(group));
    }
    assert_eq!(
        backend.requests(),
        vec![
            "examples:Background".to_string(),
            "examples:MeritFlaw".to_string(),
            "values:mf_4".to_string(),
        ]
    );
}

#[tokio::test]
async fn wonder_formset_collapses_for_restricted_types() {
    let mut controller = WonderFormController::new(
        Formset::with_rows(FormsetPrefix::new("effects").expect("valid prefix"), 1),
        RecordingFormsetView::default(),
        vec!["charm".to_string()],
    );

    controller.attach();
    controller.add_row();
    controller.add_row();
    assert_eq!(controller.formset().total_count(), 3);
    assert_eq!(
        controller.view().rows,
        vec!["effects-1".to_string(), "effects-2".to_string()]
    );

    controller.type_changed("charm");
    assert!(!controller.view().add_visible);
    assert_eq!(controller.view().rows, vec!["effects-0".to_string()]);
    assert_eq!(controller.view().total_count, 1);

    controller.type_changed("talisman");
    assert!(controller.view().add_visible);
    assert_eq!(controller.formset().total_count(), 1);
}
