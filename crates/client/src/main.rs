//! SheetWright demo binary - scripted walkthrough over the in-memory backend
//!
//! Drives both controllers through the interactions a player would perform
//! on the experience and wonder forms, logging every transition. Useful as a
//! manual smoke check without a page shell.

use std::sync::Arc;

use sheetwright_client::application::controllers::{SpendFormController, WonderFormController};
use sheetwright_client::application::services::ExampleService;
use sheetwright_client::config::FormConfig;
use sheetwright_client::infrastructure::testing::{
    InMemoryChainedQuery, RecordingFormsetView, RecordingSpendFormView,
};
use sheetwright_domain::{FieldGroup, Formset, FormsetPrefix};
use sheetwright_shared::ExampleOptionData;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

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

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sheetwright=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting SheetWright demo");

    let config = FormConfig::from_attributes(vec![
        ("data-examples-url", "http://localhost:8000/characters/load-examples/"),
        ("data-values-url", "http://localhost:8000/characters/load-values/"),
        ("data-subject", "char_9"),
        ("data-group-member", "true"),
    ])?;

    let backend = Arc::new(
        InMemoryChainedQuery::new()
            .with_examples(
                "Background",
                vec![
                    option_data("bg_1", "Allies", None),
                    option_data("bg_2", "Library", Some("false")),
                ],
            )
            .with_examples(
                "MeritFlaw",
                vec![option_data("mf_4", "Acute Senses", None)],
            )
            .with_values("mf_4", vec!["-2", "2"]),
    );

    let service = ExampleService::new(backend.clone());
    let mut spend_form = SpendFormController::new(
        RecordingSpendFormView::default(),
        service,
        config.subject.clone(),
        config.is_group_member,
    );

    for tag in ["Background", "MeritFlaw", "Willpower"] {
        spend_form.category_changed(tag).await;
        let view = spend_form.view();
        tracing::info!(
            category = tag,
            examples = ?view.example_select.labels(),
            example_wrap = view.wrap(FieldGroup::Example),
            value_wrap = view.wrap(FieldGroup::Value),
            note_wrap = view.wrap(FieldGroup::Note),
            pooled_wrap = view.wrap(FieldGroup::Pooled),
            "category changed"
        );
    }

    spend_form.category_changed("MeritFlaw").await;
    spend_form.view_mut().example_select.select_value("mf_4");
    spend_form.example_changed().await;
    tracing::info!(
        values = ?spend_form.view().value_select.labels(),
        "merit/flaw ratings loaded"
    );

    let mut wonder_form = WonderFormController::new(
        Formset::with_rows(FormsetPrefix::new("effects")?, 1),
        RecordingFormsetView::default(),
        vec!["charm".to_string()],
    );
    wonder_form.attach();
    wonder_form.add_row();
    wonder_form.add_row();
    wonder_form.row_toggled(1, true);
    tracing::info!(
        rows = ?wonder_form.view().rows,
        count = wonder_form.formset().total_count(),
        "effects added"
    );

    wonder_form.type_changed("charm");
    tracing::info!(
        rows = ?wonder_form.view().rows,
        count = wonder_form.formset().total_count(),
        add_visible = wonder_form.view().add_visible,
        "charms carry no sub-effects; formset collapsed"
    );

    tracing::info!(requests = ?backend.requests(), "backend saw");

    Ok(())
}
