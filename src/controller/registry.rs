//! Data source registry client
//!
//! Read-through cache of the backend's data source list. Every change
//! reloads the whole list.

use crate::api::{DataSource, DataSourceId};
use crate::config::DataSourceForm;
use crate::controller::dispatch::{Dispatch, Request};
use crate::controller::Workbench;
use crate::error::{Result, WorkbenchError};
use rust_i18n::t;
use tracing::{debug, info};

/// The last fetched list plus the user's selection
#[derive(Clone, Debug, Default)]
pub struct DataSourceRegistry {
    sources: Vec<DataSource>,
    selected: Option<DataSourceId>,
}

impl DataSourceRegistry {
    /// Swap in a freshly fetched list; keep the selection if it still exists
    pub fn replace(&mut self, sources: Vec<DataSource>) {
        if let Some(id) = self.selected {
            if !sources.iter().any(|s| s.id == id) {
                self.selected = None;
            }
        }
        self.sources = sources;
    }

    pub fn sources(&self) -> &[DataSource] {
        &self.sources
    }

    pub fn selected(&self) -> Option<DataSourceId> {
        self.selected
    }

    pub fn selected_source(&self) -> Option<&DataSource> {
        let id = self.selected?;
        self.sources.iter().find(|s| s.id == id)
    }

    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selected?;
        self.sources.iter().position(|s| s.id == id)
    }

    /// Select by id; unknown ids clear the selection
    pub fn select(&mut self, id: Option<DataSourceId>) {
        self.selected = id.filter(|id| self.sources.iter().any(|s| s.id == *id));
    }

    pub fn select_index(&mut self, index: usize) {
        self.selected = self.sources.get(index).map(|s| s.id);
    }

    pub fn select_next(&mut self) {
        let next = match self.selected_index() {
            Some(i) if i + 1 < self.sources.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.select_index(next);
    }

    pub fn select_previous(&mut self) {
        if let Some(i) = self.selected_index() {
            self.select_index(i.saturating_sub(1));
        }
    }
}

impl Workbench {
    /// Fetch the data source list
    pub fn begin_list_data_sources(&mut self) -> Dispatch {
        Dispatch::new(Request::ListDataSources)
    }

    pub async fn list_data_sources(&mut self) -> Result<()> {
        let dispatch = self.begin_list_data_sources();
        self.run(dispatch).await
    }

    /// Validate the form and register a new data source
    pub fn begin_create_data_source(&mut self, form: &DataSourceForm) -> Result<Dispatch> {
        let Some(source) = form.to_new_data_source() else {
            return Err(self.reject(WorkbenchError::validation(t!("fill_all_fields"))));
        };
        info!("Creating data source '{}' ({})", source.name, source.database_type);
        Ok(Dispatch::tracked(
            Request::CreateDataSource(source),
            self.loading.acquire(),
        ))
    }

    pub async fn create_data_source(&mut self, form: &DataSourceForm) -> Result<()> {
        let dispatch = self.begin_create_data_source(form)?;
        self.run(dispatch).await
    }

    /// Ask the backend to build and register its sample database
    pub fn begin_seed_sample_data(&mut self) -> Dispatch {
        Dispatch::tracked(Request::SeedSampleData, self.loading.acquire())
    }

    pub async fn seed_sample_data(&mut self) -> Result<()> {
        let dispatch = self.begin_seed_sample_data();
        self.run(dispatch).await
    }

    pub(super) fn finish_list(&mut self, result: Result<Vec<DataSource>>) -> Result<Option<Dispatch>> {
        match result {
            Ok(sources) => {
                debug!("Loaded {} data source(s)", sources.len());
                self.registry.replace(sources);
                Ok(None)
            }
            Err(e) => Err(self.fail(e, &t!("load_data_sources_failed"))),
        }
    }

    pub(super) fn finish_create(&mut self, result: Result<()>) -> Result<Option<Dispatch>> {
        match result {
            Ok(()) => {
                self.notifications.success(t!("data_source_added"));
                Ok(Some(self.begin_list_data_sources()))
            }
            Err(e) => Err(self.fail(e, &t!("add_data_source_failed"))),
        }
    }

    pub(super) fn finish_seed(&mut self, result: Result<()>) -> Result<Option<Dispatch>> {
        match result {
            Ok(()) => {
                self.notifications.success(t!("sample_data_created"));
                Ok(Some(self.begin_list_data_sources()))
            }
            Err(e) => Err(self.fail(e, &t!("sample_data_failed"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{data_source, Call, MockBackend};
    use crate::api::DatabaseType;
    use crate::controller::tests::workbench_with;
    use std::sync::Arc;

    fn filled_form() -> DataSourceForm {
        DataSourceForm {
            name: "Warehouse".to_string(),
            database_type: DatabaseType::Postgresql,
            connection_string: "postgresql://localhost/warehouse".to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_populates_registry() {
        let mock = Arc::new(MockBackend::with_data_sources(vec![
            data_source(1, "Sales"),
            data_source(3, "CRM"),
        ]));
        let (mut wb, _dir) = workbench_with(&mock);

        wb.list_data_sources().await.unwrap();

        let labels: Vec<String> = wb.registry().sources().iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Sales (sqlite)", "CRM (sqlite)"]);
    }

    #[tokio::test]
    async fn test_list_failure_keeps_previous_cache() {
        let mock = Arc::new(MockBackend::with_data_sources(vec![data_source(1, "Sales")]));
        let (mut wb, _dir) = workbench_with(&mock);
        wb.list_data_sources().await.unwrap();

        mock.push_list(Err(WorkbenchError::Transport("refused".to_string())));
        assert!(wb.list_data_sources().await.is_err());

        assert_eq!(wb.registry().sources().len(), 1);
        assert_eq!(wb.notifications().last_error(), Some("Failed to load data sources"));
    }

    #[tokio::test]
    async fn test_create_validates_before_network() {
        let mock = Arc::new(MockBackend::new());
        let (mut wb, _dir) = workbench_with(&mock);

        let mut form = filled_form();
        form.connection_string.clear();
        let err = wb.create_data_source(&form).await.unwrap_err();

        assert!(err.is_validation());
        assert_eq!(mock.call_count(), 0);
        assert_eq!(wb.notifications().last_error(), Some("Please fill in all fields"));
    }

    #[tokio::test]
    async fn test_create_success_reloads_list() {
        let mock = Arc::new(MockBackend::with_data_sources(vec![data_source(9, "Warehouse")]));
        let (mut wb, _dir) = workbench_with(&mock);

        wb.create_data_source(&filled_form()).await.unwrap();

        let calls = mock.calls();
        assert_eq!(calls.len(), 2);
        assert!(matches!(calls[0], Call::CreateDataSource(ref s) if s.name == "Warehouse"));
        assert_eq!(calls[1], Call::ListDataSources);
        assert_eq!(wb.registry().sources().len(), 1);
        assert!(!wb.loading().is_visible());
    }

    #[tokio::test]
    async fn test_create_backend_error_is_shown() {
        let mock = Arc::new(MockBackend::new());
        mock.push_create(Err(WorkbenchError::Backend("Unsupported database type: oracle".to_string())));
        let (mut wb, _dir) = workbench_with(&mock);

        assert!(wb.create_data_source(&filled_form()).await.is_err());
        assert_eq!(mock.calls().len(), 1);
        assert_eq!(wb.notifications().last_error(), Some("Unsupported database type: oracle"));
        assert!(!wb.loading().is_visible());
    }

    #[tokio::test]
    async fn test_seed_sample_data_reloads_list() {
        let mock = Arc::new(MockBackend::with_data_sources(vec![data_source(1, "Sample Data")]));
        let (mut wb, _dir) = workbench_with(&mock);

        wb.seed_sample_data().await.unwrap();

        assert_eq!(mock.calls(), vec![Call::SeedSampleData, Call::ListDataSources]);
        assert_eq!(wb.registry().sources()[0].name, "Sample Data");
    }

    #[test]
    fn test_selection_survives_reload_only_if_present() {
        let mut registry = DataSourceRegistry::default();
        registry.replace(vec![data_source(1, "A"), data_source(2, "B")]);
        registry.select(Some(DataSourceId(2)));

        registry.replace(vec![data_source(2, "B"), data_source(3, "C")]);
        assert_eq!(registry.selected(), Some(DataSourceId(2)));

        registry.replace(vec![data_source(3, "C")]);
        assert_eq!(registry.selected(), None);
    }

    #[test]
    fn test_select_next_and_previous() {
        let mut registry = DataSourceRegistry::default();
        registry.replace(vec![data_source(1, "A"), data_source(2, "B")]);
        registry.select_next();
        assert_eq!(registry.selected(), Some(DataSourceId(1)));
        registry.select_next();
        registry.select_next();
        assert_eq!(registry.selected(), Some(DataSourceId(2)));
        registry.select_previous();
        assert_eq!(registry.selected_source().unwrap().name, "A");
    }
}
