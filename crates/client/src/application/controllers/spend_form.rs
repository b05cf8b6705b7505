//! Experience-spend form controller
//!
//! Drives the category -> example -> value selector chain: applies the
//! field-visibility table on category changes, refreshes the dependent
//! selectors from the query endpoints, and re-evaluates the poolable flag
//! for group-member background spends.
//!
//! Every load runs under a ticket so a completion that lost the race to a
//! newer request is discarded instead of clobbering the newer contents.

use crate::application::controllers::{options, RequestTickets, Ticket};
use crate::application::services::ExampleService;
use crate::application::ServiceError;
use crate::ports::outbound::SpendFormView;
use sheetwright_domain::{
    poolable_from_selection, FieldGroup, FieldVisibility, OptionEntry, SpendCategory, SubjectId,
};

/// Controller for the experience-spend form
pub struct SpendFormController<V: SpendFormView> {
    view: V,
    service: ExampleService,
    subject: SubjectId,
    is_group_member: bool,
    category: SpendCategory,
    examples_tickets: RequestTickets,
    values_tickets: RequestTickets,
}

impl<V: SpendFormView> SpendFormController<V> {
    /// Create a controller over an attached view.
    ///
    /// The form starts on the placeholder category; callers normally follow
    /// up with `category_changed` once the page state is known.
    pub fn new(
        view: V,
        service: ExampleService,
        subject: SubjectId,
        is_group_member: bool,
    ) -> Self {
        Self {
            view,
            service,
            subject,
            is_group_member,
            category: SpendCategory::Placeholder,
            examples_tickets: RequestTickets::new(),
            values_tickets: RequestTickets::new(),
        }
    }

    /// The category the controller currently considers active.
    pub fn category(&self) -> SpendCategory {
        self.category
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// The category selector changed.
    ///
    /// Applies the visibility table synchronously, then refreshes the
    /// example selector from the backend unless the category is terminal.
    /// An unknown tag is logged and ignored; the selector is rendered from
    /// the same closed set, so this only fires on a page-wiring bug.
    pub async fn category_changed(&mut self, raw_tag: &str) {
        let category = match raw_tag.parse::<SpendCategory>() {
            Ok(category) => category,
            Err(error) => {
                tracing::warn!(raw_tag, %error, "ignoring change to unknown category");
                return;
            }
        };

        self.category = category;
        self.apply_visibility();

        if category.is_terminal() {
            // No query for terminal categories; both dependent selectors
            // collapse to their placeholder.
            options::clear(self.view.example_select(), None);
            options::clear(self.view.value_select(), None);
            return;
        }

        let ticket = self.begin_examples_load();
        let result = self.service.load_examples(category, &self.subject).await;
        self.apply_examples(ticket, result);
    }

    /// The example selector changed.
    ///
    /// MeritFlaw spends refresh the value selector from the backend; group
    /// backgrounds re-evaluate the poolable flag locally. Everything else
    /// ignores the event.
    pub async fn example_changed(&mut self) {
        match self.category {
            SpendCategory::MeritFlaw => {
                let selected = self
                    .view
                    .example_select()
                    .and_then(|select| select.selected())
                    .filter(|entry| !entry.is_placeholder());

                let Some(example) = selected else {
                    options::clear(self.view.value_select(), None);
                    return;
                };

                let ticket = self.begin_values_load();
                let result = self.service.load_values(&example.value, &self.subject).await;
                self.apply_values(ticket, result);
            }
            SpendCategory::Background if self.is_group_member => {
                let selected = self
                    .view
                    .example_select()
                    .and_then(|select| select.selected());
                let poolable = poolable_from_selection(selected.as_ref());
                match self.view.field_wrap(FieldGroup::Pooled) {
                    Some(wrap) => wrap.set_visible(poolable),
                    None => tracing::warn!("pooled wrap missing; visibility not applied"),
                }
            }
            _ => {}
        }
    }

    /// Start an examples load, invalidating any in-flight one.
    pub fn begin_examples_load(&mut self) -> Ticket {
        self.examples_tickets.issue()
    }

    /// Apply an examples completion if its ticket is still current.
    ///
    /// On failure the previous dropdown contents stay in place; there is no
    /// retry and no user-visible error surface.
    pub fn apply_examples(&mut self, ticket: Ticket, result: Result<Vec<OptionEntry>, ServiceError>) {
        if !self.examples_tickets.is_current(ticket) {
            tracing::debug!("discarding stale examples response");
            return;
        }

        match result {
            Ok(entries) => {
                options::populate(self.view.example_select(), None, entries);
                options::clear(self.view.value_select(), None);
            }
            Err(error) => {
                tracing::warn!(%error, "examples load failed; keeping previous options");
            }
        }
    }

    /// Start a values load, invalidating any in-flight one.
    pub fn begin_values_load(&mut self) -> Ticket {
        self.values_tickets.issue()
    }

    /// Apply a values completion if its ticket is still current.
    pub fn apply_values(&mut self, ticket: Ticket, result: Result<Vec<OptionEntry>, ServiceError>) {
        if !self.values_tickets.is_current(ticket) {
            tracing::debug!("discarding stale values response");
            return;
        }

        match result {
            Ok(entries) => options::populate(self.view.value_select(), None, entries),
            Err(error) => {
                tracing::warn!(%error, "values load failed; keeping previous options");
            }
        }
    }

    fn apply_visibility(&mut self) {
        let visibility = FieldVisibility::for_category(self.category, self.is_group_member);
        for group in FieldGroup::ALL {
            match self.view.field_wrap(group) {
                Some(wrap) => wrap.set_visible(visibility.visible(group)),
                None => {
                    tracing::warn!(?group, "field wrap missing; visibility not applied");
                }
            }
        }
    }
}
