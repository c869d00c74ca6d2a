//! Catalog State and Controller
//!
//! `CatalogState` holds everything the catalog page shows: the last fetched
//! list, the list load state, the add/edit modal, the form and the toasts.
//! `CatalogController` drives it against a `MonkeyClient`. The list is never
//! patched in place; every successful mutation is followed by a full reload.

use reactive_stores::Store;

use crate::client::{ClientError, MonkeyClient};
use crate::models::{ApiResponse, Monkey, MonkeyFields};

pub const NAME_REQUIRED: &str = "Please enter monkey name";
pub const SPECIES_REQUIRED: &str = "Please enter species";

pub const LOAD_FAILED: &str = "Failed to load monkeys";
pub const SAVE_FAILED: &str = "Failed to save monkey";
pub const FAVORITE_FAILED: &str = "Failed to update favorite status";
pub const ADDED: &str = "Monkey added successfully!";
pub const UPDATED: &str = "Monkey updated successfully!";
pub const REMOVED: &str = "Monkey removed!";

/// Lifecycle of the list fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Add/edit modal
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    Closed,
    Create,
    Edit(Monkey),
}

impl Modal {
    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::Closed)
    }

    pub fn editing(&self) -> Option<&Monkey> {
        match self {
            Modal::Edit(monkey) => Some(monkey),
            _ => None,
        }
    }
}

/// Raw form values, exactly as typed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MonkeyForm {
    pub name: String,
    pub species: String,
    pub habitat: String,
    /// Empty string means no status selected
    pub conservation_status: String,
    pub image_url: String,
    pub fun_fact: String,
    pub is_favorite: bool,
}

impl MonkeyForm {
    pub fn from_monkey(monkey: &Monkey) -> Self {
        Self {
            name: monkey.name.clone(),
            species: monkey.species.clone(),
            habitat: monkey.habitat.clone().unwrap_or_default(),
            conservation_status: monkey.conservation_status.clone().unwrap_or_default(),
            image_url: monkey.image_url.clone().unwrap_or_default(),
            fun_fact: monkey.fun_fact.clone().unwrap_or_default(),
            is_favorite: monkey.is_favorite,
        }
    }

    /// Required-field check; blank optional fields become `None`
    pub fn validate(&self) -> Result<MonkeyFields, FormErrors> {
        let name = self.name.trim();
        let species = self.species.trim();
        let errors = FormErrors {
            name: name.is_empty().then_some(NAME_REQUIRED),
            species: species.is_empty().then_some(SPECIES_REQUIRED),
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(MonkeyFields {
            name: name.to_string(),
            species: species.to_string(),
            habitat: optional(&self.habitat),
            conservation_status: optional(&self.conservation_status),
            image_url: optional(&self.image_url),
            fun_fact: optional(&self.fun_fact),
            is_favorite: self.is_favorite,
        })
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Per-field validation messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormErrors {
    pub name: Option<&'static str>,
    pub species: Option<&'static str>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.species.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub message: String,
}

/// Where a submitted form goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveTarget {
    Create,
    Update(u32),
}

/// Catalog page state with field-level reactivity
#[derive(Debug, Clone, Default, Store)]
pub struct CatalogState {
    /// Last successful fetch, in returned order
    pub monkeys: Vec<Monkey>,
    pub load_state: LoadState,
    pub modal: Modal,
    pub form: MonkeyForm,
    pub form_errors: FormErrors,
    pub notifications: Vec<Notification>,
    pub next_notification_id: u32,
}

impl CatalogState {
    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    /// Empty state replaces the grid once a load has settled with no records
    pub fn show_empty_state(&self) -> bool {
        self.monkeys.is_empty() && matches!(self.load_state, LoadState::Loaded | LoadState::Failed)
    }

    pub fn begin_load(&mut self) {
        self.load_state = LoadState::Loading;
    }

    /// Replace the list on success; on failure keep it and raise a toast
    pub fn finish_load(&mut self, result: Result<Vec<Monkey>, ClientError>) {
        match result {
            Ok(monkeys) => {
                self.monkeys = monkeys;
                self.load_state = LoadState::Loaded;
            }
            Err(e) => {
                log::error!("loading monkeys failed: {}", e);
                self.load_state = LoadState::Failed;
                self.notify(NotificationKind::Error, LOAD_FAILED);
            }
        }
    }

    pub fn open_create_form(&mut self) {
        self.form = MonkeyForm::default();
        self.form_errors = FormErrors::default();
        self.modal = Modal::Create;
    }

    pub fn open_edit_form(&mut self, monkey: Monkey) {
        self.form = MonkeyForm::from_monkey(&monkey);
        self.form_errors = FormErrors::default();
        self.modal = Modal::Edit(monkey);
    }

    pub fn close_form(&mut self) {
        self.modal = Modal::Closed;
    }

    /// Validate the form and decide between create and update
    pub fn prepare_submit(&self) -> Result<(SaveTarget, MonkeyFields), FormErrors> {
        let fields = self.form.validate()?;
        let target = match self.modal.editing() {
            Some(monkey) => SaveTarget::Update(monkey.id),
            None => SaveTarget::Create,
        };
        Ok((target, fields))
    }

    /// Apply a save outcome. Returns true when the list should be reloaded.
    pub fn finish_save(&mut self, target: SaveTarget, result: Result<Monkey, ClientError>) -> bool {
        match result {
            Ok(saved) => {
                log::info!("saved monkey {} ({:?})", saved.id, target);
                let message = match target {
                    SaveTarget::Create => ADDED,
                    SaveTarget::Update(_) => UPDATED,
                };
                self.notify(NotificationKind::Success, message);
                self.modal = Modal::Closed;
                true
            }
            Err(e) => {
                log::error!("saving monkey failed ({:?}): {}", target, e);
                self.notify(NotificationKind::Error, SAVE_FAILED);
                false
            }
        }
    }

    pub fn notify(&mut self, kind: NotificationKind, message: &str) -> u32 {
        let id = self.next_notification_id;
        self.next_notification_id = self.next_notification_id.wrapping_add(1);
        self.notifications.push(Notification {
            id,
            kind,
            message: message.to_string(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.notifications.retain(|n| n.id != id);
    }
}

/// Owner of a `CatalogState` that the controller can read and mutate
pub trait CatalogCell {
    fn with_state<R>(&self, f: impl FnOnce(&CatalogState) -> R) -> R;

    fn update_state(&self, f: impl FnOnce(&mut CatalogState));
}

/// Catalog operations against a remote client
#[derive(Clone, Copy)]
pub struct CatalogController<C, S> {
    client: C,
    state: S,
}

impl<C: MonkeyClient, S: CatalogCell> CatalogController<C, S> {
    pub fn new(client: C, state: S) -> Self {
        Self { client, state }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Fetch the full list and replace local state with it
    pub async fn load_records(&self) {
        self.state.update_state(CatalogState::begin_load);
        let result = self.client.list().await.and_then(ApiResponse::into_result);
        if let Ok(monkeys) = &result {
            log::debug!("loaded {} monkeys", monkeys.len());
        }
        self.state.update_state(|s| s.finish_load(result));
    }

    pub fn open_create_form(&self) {
        self.state.update_state(CatalogState::open_create_form);
    }

    pub fn open_edit_form(&self, monkey: &Monkey) {
        let monkey = monkey.clone();
        self.state.update_state(move |s| s.open_edit_form(monkey));
    }

    pub fn close_form(&self) {
        self.state.update_state(CatalogState::close_form);
    }

    pub fn update_form(&self, edit: impl FnOnce(&mut MonkeyForm)) {
        self.state.update_state(|s| edit(&mut s.form));
    }

    /// Validate, then create or update. Invalid forms never reach the client.
    pub async fn submit_form(&self) {
        let (target, fields) = match self.state.with_state(CatalogState::prepare_submit) {
            Ok(prepared) => prepared,
            Err(errors) => {
                self.state.update_state(|s| s.form_errors = errors);
                return;
            }
        };
        self.state.update_state(|s| s.form_errors = FormErrors::default());

        let response = match target {
            SaveTarget::Create => self.client.create(&fields).await,
            SaveTarget::Update(id) => self.client.update(id, &fields).await,
        };
        let result = response.and_then(ApiResponse::into_result);

        let mut reload = false;
        self.state.update_state(|s| reload = s.finish_save(target, result));
        if reload {
            self.load_records().await;
        }
    }

    /// Reports success and refreshes. No deletion request is sent, so the
    /// record comes back on the next fetch.
    pub async fn remove_record(&self, id: u32) {
        log::warn!("remove requested for monkey {}; no delete call is wired", id);
        self.state.update_state(|s| {
            s.notify(NotificationKind::Success, REMOVED);
        });
        self.load_records().await;
    }

    /// Send the record back with `isFavorite` inverted, then refresh
    pub async fn toggle_favorite(&self, monkey: &Monkey) {
        let mut fields = MonkeyFields::from(monkey);
        fields.is_favorite = !monkey.is_favorite;

        let result = self
            .client
            .update(monkey.id, &fields)
            .await
            .and_then(ApiResponse::into_result);
        match result {
            Ok(_) => self.load_records().await,
            Err(e) => {
                log::error!("toggling favorite on monkey {} failed: {}", monkey.id, e);
                self.state.update_state(|s| {
                    s.notify(NotificationKind::Error, FAVORITE_FAILED);
                });
            }
        }
    }

    pub fn dismiss_notification(&self, id: u32) {
        self.state.update_state(|s| s.dismiss(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientResult;
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Failure {
        Rejected,
        Unsuccessful,
    }

    impl Failure {
        fn into_err<T>(self) -> ClientResult<T> {
            match self {
                Failure::Rejected => Err(ClientError::Rejected("backend unavailable".into())),
                Failure::Unsuccessful => Ok(ApiResponse::failure("Internal error: disk full")),
            }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        List,
        Create(MonkeyFields),
        Update(u32, MonkeyFields),
    }

    /// In-memory stand-in for the backend
    #[derive(Default)]
    struct FakeClient {
        records: RefCell<Vec<Monkey>>,
        calls: RefCell<Vec<Call>>,
        fail_list: Cell<Option<Failure>>,
        fail_create: Cell<Option<Failure>>,
        fail_update: Cell<Option<Failure>>,
    }

    impl FakeClient {
        fn with_records(records: Vec<Monkey>) -> Rc<Self> {
            let client = Self::default();
            *client.records.borrow_mut() = records;
            Rc::new(client)
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl MonkeyClient for Rc<FakeClient> {
        async fn list(&self) -> ClientResult<Vec<Monkey>> {
            self.calls.borrow_mut().push(Call::List);
            if let Some(failure) = self.fail_list.get() {
                return failure.into_err();
            }
            Ok(ApiResponse::ok(self.records.borrow().clone()))
        }

        async fn create(&self, fields: &MonkeyFields) -> ClientResult<Monkey> {
            self.calls.borrow_mut().push(Call::Create(fields.clone()));
            if let Some(failure) = self.fail_create.get() {
                return failure.into_err();
            }
            let id = self.records.borrow().iter().map(|m| m.id).max().unwrap_or(0) + 1;
            let created = record_from(id, fields);
            self.records.borrow_mut().push(created.clone());
            Ok(ApiResponse::ok(created))
        }

        async fn update(&self, id: u32, fields: &MonkeyFields) -> ClientResult<Monkey> {
            self.calls.borrow_mut().push(Call::Update(id, fields.clone()));
            if let Some(failure) = self.fail_update.get() {
                return failure.into_err();
            }
            let mut records = self.records.borrow_mut();
            match records.iter_mut().find(|m| m.id == id) {
                Some(existing) => {
                    *existing = record_from(id, fields);
                    Ok(ApiResponse::ok(existing.clone()))
                }
                None => Ok(ApiResponse::failure(format!("Not found: Monkey {}", id))),
            }
        }
    }

    impl CatalogCell for Rc<RefCell<CatalogState>> {
        fn with_state<R>(&self, f: impl FnOnce(&CatalogState) -> R) -> R {
            f(&self.borrow())
        }

        fn update_state(&self, f: impl FnOnce(&mut CatalogState)) {
            f(&mut self.borrow_mut())
        }
    }

    type TestController = CatalogController<Rc<FakeClient>, Rc<RefCell<CatalogState>>>;

    fn record_from(id: u32, fields: &MonkeyFields) -> Monkey {
        Monkey {
            id,
            name: fields.name.clone(),
            species: fields.species.clone(),
            habitat: fields.habitat.clone(),
            conservation_status: fields.conservation_status.clone(),
            image_url: fields.image_url.clone(),
            fun_fact: fields.fun_fact.clone(),
            is_favorite: fields.is_favorite,
            created_at: None,
            updated_at: None,
        }
    }

    fn monkey(id: u32, name: &str, species: &str) -> Monkey {
        record_from(
            id,
            &MonkeyFields {
                name: name.to_string(),
                species: species.to_string(),
                ..Default::default()
            },
        )
    }

    fn controller(client: &Rc<FakeClient>) -> TestController {
        CatalogController::new(client.clone(), Rc::new(RefCell::new(CatalogState::default())))
    }

    fn snapshot(ctrl: &TestController) -> CatalogState {
        ctrl.state().with_state(|s| s.clone())
    }

    fn messages(state: &CatalogState) -> Vec<(NotificationKind, String)> {
        state
            .notifications
            .iter()
            .map(|n| (n.kind, n.message.clone()))
            .collect()
    }

    #[tokio::test]
    async fn test_load_shows_records_in_returned_order() {
        let records = vec![
            monkey(3, "Zed", "Howler"),
            monkey(1, "Amy", "Gorilla"),
            monkey(2, "Max", "Tamarin"),
        ];
        let client = FakeClient::with_records(records.clone());
        let ctrl = controller(&client);

        ctrl.load_records().await;

        let state = snapshot(&ctrl);
        assert_eq!(state.monkeys, records);
        assert_eq!(state.load_state, LoadState::Loaded);
        assert!(!state.show_empty_state());
        assert!(state.notifications.is_empty());
    }

    #[tokio::test]
    async fn test_empty_list_shows_empty_state() {
        let client = FakeClient::with_records(vec![]);
        let ctrl = controller(&client);
        assert!(!snapshot(&ctrl).show_empty_state());

        ctrl.load_records().await;

        let state = snapshot(&ctrl);
        assert!(state.monkeys.is_empty());
        assert!(state.show_empty_state());
    }

    #[test]
    fn test_no_empty_state_while_loading() {
        let mut state = CatalogState::default();
        state.begin_load();
        assert!(state.is_loading());
        assert!(!state.show_empty_state());
    }

    #[tokio::test]
    async fn test_load_failure_keeps_previous_list() {
        for failure in [Failure::Rejected, Failure::Unsuccessful] {
            let client = FakeClient::with_records(vec![monkey(1, "George", "Capuchin")]);
            let ctrl = controller(&client);
            ctrl.load_records().await;

            client.records.borrow_mut().clear();
            client.fail_list.set(Some(failure));
            ctrl.load_records().await;

            let state = snapshot(&ctrl);
            assert_eq!(state.monkeys, vec![monkey(1, "George", "Capuchin")], "{:?}", failure);
            assert_eq!(state.load_state, LoadState::Failed);
            assert_eq!(messages(&state), vec![(NotificationKind::Error, LOAD_FAILED.to_string())]);
        }
    }

    #[test]
    fn test_open_create_form_resets_previous_edit() {
        let mut state = CatalogState::default();
        state.open_edit_form(monkey(4, "Abu", "Macaque"));
        state.form_errors.name = Some(NAME_REQUIRED);

        state.open_create_form();

        assert_eq!(state.modal, Modal::Create);
        assert_eq!(state.form, MonkeyForm::default());
        assert!(state.form_errors.is_empty());
    }

    #[test]
    fn test_open_edit_form_populates_fields() {
        let mut record = monkey(4, "Abu", "Macaque");
        record.habitat = Some("Agrabah".to_string());
        record.conservation_status = Some("Vulnerable".to_string());
        record.is_favorite = true;

        let mut state = CatalogState::default();
        state.open_edit_form(record.clone());

        assert_eq!(state.modal.editing(), Some(&record));
        assert_eq!(state.form.name, "Abu");
        assert_eq!(state.form.habitat, "Agrabah");
        assert_eq!(state.form.conservation_status, "Vulnerable");
        assert_eq!(state.form.image_url, "");
        assert!(state.form.is_favorite);
    }

    #[tokio::test]
    async fn test_submit_rejects_missing_required_fields() {
        let client = FakeClient::with_records(vec![]);
        let ctrl = controller(&client);

        ctrl.open_create_form();
        ctrl.update_form(|f| {
            f.name = "   ".to_string();
            f.species = "Capuchin".to_string();
        });
        ctrl.submit_form().await;

        let state = snapshot(&ctrl);
        assert_eq!(state.form_errors.name, Some(NAME_REQUIRED));
        assert_eq!(state.form_errors.species, None);
        assert!(state.modal.is_open());

        ctrl.update_form(|f| {
            f.name = "George".to_string();
            f.species.clear();
        });
        ctrl.submit_form().await;

        let state = snapshot(&ctrl);
        assert_eq!(state.form_errors.name, None);
        assert_eq!(state.form_errors.species, Some(SPECIES_REQUIRED));
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn test_edit_with_blank_species_is_not_sent() {
        let record = monkey(5, "Abu", "Macaque");
        let client = FakeClient::with_records(vec![record.clone()]);
        let ctrl = controller(&client);
        ctrl.load_records().await;

        ctrl.open_edit_form(&record);
        ctrl.update_form(|f| f.species = "  ".to_string());
        ctrl.submit_form().await;

        let state = snapshot(&ctrl);
        assert_eq!(state.form_errors.species, Some(SPECIES_REQUIRED));
        assert_eq!(state.modal, Modal::Edit(record.clone()));
        assert!(state.notifications.is_empty());
        assert_eq!(client.calls(), vec![Call::List]);
        assert_eq!(client.records.borrow().clone(), vec![record]);
    }

    #[tokio::test]
    async fn test_create_sends_exact_fields_then_reloads() {
        let client = FakeClient::with_records(vec![]);
        let ctrl = controller(&client);
        ctrl.load_records().await;

        ctrl.open_create_form();
        ctrl.update_form(|f| {
            f.name = "George".to_string();
            f.species = "Capuchin".to_string();
        });
        ctrl.submit_form().await;

        let expected = MonkeyFields {
            name: "George".to_string(),
            species: "Capuchin".to_string(),
            ..Default::default()
        };
        assert_eq!(
            client.calls(),
            vec![Call::List, Call::Create(expected), Call::List]
        );

        let state = snapshot(&ctrl);
        assert_eq!(state.modal, Modal::Closed);
        assert_eq!(messages(&state), vec![(NotificationKind::Success, ADDED.to_string())]);
        assert_eq!(state.monkeys.len(), 1);
        assert_eq!(state.monkeys[0].name, "George");
    }

    #[tokio::test]
    async fn test_create_failure_keeps_modal_open() {
        for failure in [Failure::Rejected, Failure::Unsuccessful] {
            let client = FakeClient::with_records(vec![monkey(1, "Abu", "Macaque")]);
            let ctrl = controller(&client);
            ctrl.load_records().await;
            client.fail_create.set(Some(failure));

            ctrl.open_create_form();
            ctrl.update_form(|f| {
                f.name = "George".to_string();
                f.species = "Capuchin".to_string();
            });
            ctrl.submit_form().await;

            let state = snapshot(&ctrl);
            assert_eq!(state.modal, Modal::Create, "{:?}", failure);
            assert_eq!(state.form.name, "George");
            assert_eq!(state.monkeys, vec![monkey(1, "Abu", "Macaque")]);
            assert_eq!(messages(&state), vec![(NotificationKind::Error, SAVE_FAILED.to_string())]);
            // No reload after a failed save
            assert_eq!(client.calls().last(), Some(&Call::Create(MonkeyFields {
                name: "George".to_string(),
                species: "Capuchin".to_string(),
                ..Default::default()
            })));
        }
    }

    #[tokio::test]
    async fn test_edit_submits_update_with_record_id() {
        let mut record = monkey(7, "Abu", "Macaque");
        record.fun_fact = Some("Steals gems".to_string());
        let client = FakeClient::with_records(vec![record.clone()]);
        let ctrl = controller(&client);
        ctrl.load_records().await;

        ctrl.open_edit_form(&record);
        ctrl.update_form(|f| {
            f.habitat = "  Agrabah ".to_string();
            f.conservation_status = "Endangered".to_string();
        });
        ctrl.submit_form().await;

        let expected = MonkeyFields {
            name: "Abu".to_string(),
            species: "Macaque".to_string(),
            habitat: Some("Agrabah".to_string()),
            conservation_status: Some("Endangered".to_string()),
            image_url: None,
            fun_fact: Some("Steals gems".to_string()),
            is_favorite: false,
        };
        assert_eq!(client.calls()[1], Call::Update(7, expected));

        let state = snapshot(&ctrl);
        assert_eq!(state.modal, Modal::Closed);
        assert_eq!(messages(&state), vec![(NotificationKind::Success, UPDATED.to_string())]);
        assert_eq!(state.monkeys[0].habitat.as_deref(), Some("Agrabah"));
    }

    #[tokio::test]
    async fn test_toggle_favorite_sends_full_field_set() {
        let mut record = monkey(2, "George", "Capuchin");
        record.habitat = Some("Rainforest".to_string());
        record.image_url = Some("https://example.com/george.jpg".to_string());
        let client = FakeClient::with_records(vec![record.clone()]);
        let ctrl = controller(&client);
        ctrl.load_records().await;

        ctrl.toggle_favorite(&record).await;

        let mut expected = MonkeyFields::from(&record);
        expected.is_favorite = true;
        assert_eq!(
            client.calls(),
            vec![Call::List, Call::Update(2, expected), Call::List]
        );
        assert!(snapshot(&ctrl).monkeys[0].is_favorite);
    }

    #[tokio::test]
    async fn test_toggle_favorite_twice_restores_original() {
        let record = monkey(2, "George", "Capuchin");
        let client = FakeClient::with_records(vec![record.clone()]);
        let ctrl = controller(&client);
        ctrl.load_records().await;

        let current = snapshot(&ctrl).monkeys[0].clone();
        ctrl.toggle_favorite(&current).await;
        let current = snapshot(&ctrl).monkeys[0].clone();
        assert!(current.is_favorite);
        ctrl.toggle_favorite(&current).await;

        assert_eq!(snapshot(&ctrl).monkeys[0], record);
    }

    #[tokio::test]
    async fn test_toggle_favorite_failure_notifies() {
        let record = monkey(2, "George", "Capuchin");
        let client = FakeClient::with_records(vec![record.clone()]);
        let ctrl = controller(&client);
        ctrl.load_records().await;
        client.fail_update.set(Some(Failure::Rejected));

        ctrl.toggle_favorite(&record).await;

        let state = snapshot(&ctrl);
        assert_eq!(messages(&state), vec![(NotificationKind::Error, FAVORITE_FAILED.to_string())]);
        assert!(!state.monkeys[0].is_favorite);
        assert_eq!(client.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_remove_reports_success_without_deleting() {
        let record = monkey(5, "Bubbles", "Chimpanzee");
        let client = FakeClient::with_records(vec![record.clone()]);
        let ctrl = controller(&client);
        ctrl.load_records().await;

        ctrl.remove_record(record.id).await;

        let state = snapshot(&ctrl);
        assert_eq!(messages(&state), vec![(NotificationKind::Success, REMOVED.to_string())]);
        assert_eq!(client.calls(), vec![Call::List, Call::List]);
        assert_eq!(state.monkeys, vec![record]);
    }

    #[test]
    fn test_dismiss_removes_only_that_notification() {
        let mut state = CatalogState::default();
        let first = state.notify(NotificationKind::Success, ADDED);
        let second = state.notify(NotificationKind::Error, SAVE_FAILED);
        assert_ne!(first, second);

        state.dismiss(first);

        assert_eq!(messages(&state), vec![(NotificationKind::Error, SAVE_FAILED.to_string())]);
    }

    #[test]
    fn test_close_form_keeps_form_values() {
        let mut state = CatalogState::default();
        state.open_create_form();
        state.form.name = "Half typed".to_string();

        state.close_form();

        assert!(!state.modal.is_open());
        assert_eq!(state.form.name, "Half typed");
    }
}
