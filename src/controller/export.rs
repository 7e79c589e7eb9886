//! Export of the current session's results

use crate::api::{ExportFile, ExportFormat, ExportRequest};
use crate::controller::dispatch::{Dispatch, Request};
use crate::controller::Workbench;
use crate::error::{Result, WorkbenchError};
use rust_i18n::t;
use tracing::info;

impl Workbench {
    /// Start an export of the current session
    pub fn begin_export(&mut self, format: ExportFormat) -> Result<Dispatch> {
        let Some(query_id) = self.session.active_query_id() else {
            return Err(self.reject(WorkbenchError::no_session(t!("no_results_to_export"))));
        };
        info!("Exporting query {} as {}", query_id, format);
        Ok(Dispatch::new(Request::Export(ExportRequest { query_id, format })))
    }

    /// Export and save the content locally. One shot, no retry.
    pub async fn export_data(&mut self, format: ExportFormat) -> Result<()> {
        let dispatch = self.begin_export(format)?;
        self.run(dispatch).await
    }

    pub(super) fn finish_export(
        &mut self,
        format: ExportFormat,
        result: Result<ExportFile>,
    ) -> Result<Option<Dispatch>> {
        let file = match result {
            Ok(file) => file,
            Err(e) => return Err(self.fail(e, &t!("export_failed"))),
        };

        match self.downloads.save(&file.filename, &file.content) {
            Ok(path) => {
                info!("{} export saved to {}", format, path.display());
                self.notifications
                    .success(t!("export_saved", path = path.display()));
                self.view.last_download = Some(path);
                Ok(None)
            }
            Err(e) => Err(self.fail(WorkbenchError::Download(e), &t!("export_failed"))),
        }
    }
}
