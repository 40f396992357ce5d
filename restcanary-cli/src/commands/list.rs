//! `list` command -- one-shot object collection fetch

use std::io::Write;

use serde::Serialize;
use tracing::info;

use restcanary_core::config::CanaryConfig;
use restcanary_core::types::{ApiObject, STATUS_CODE_SUCCESS};
use restcanary_lifecycle::{HttpObjectsApi, ObjectsApi};

use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Execute the `list` command.
///
/// Fetches `GET /objects` once and prints the collection. Unlike `run`
/// this performs no contract checks; it is a quick way to eyeball what
/// the service currently serves.
pub async fn execute(config: &CanaryConfig, writer: &OutputWriter) -> Result<(), CliError> {
    let api =
        HttpObjectsApi::from_config(&config.service).map_err(|e| CliError::Config(e.to_string()))?;

    info!(base_url = %config.service.base_url, "fetching object collection");
    let response = api
        .list_objects()
        .await
        .map_err(|e| CliError::ServiceUnreachable(e.to_string()))?;

    if response.status != STATUS_CODE_SUCCESS {
        return Err(CliError::Command(format!(
            "object list request returned status {}",
            response.status
        )));
    }

    let objects: Vec<ApiObject> = serde_json::from_value(response.body)
        .map_err(|e| CliError::Command(format!("unexpected object list shape: {e}")))?;

    let listing = ObjectListing {
        base_url: config.service.base_url.clone(),
        count: objects.len(),
        objects,
    };
    writer.render(&listing)?;

    Ok(())
}

/// Payload rendered by the `list` command.
#[derive(Debug, Serialize)]
pub struct ObjectListing {
    /// Service the objects were fetched from.
    pub base_url: String,
    /// Number of objects in the collection.
    pub count: usize,
    /// The objects, in server order.
    pub objects: Vec<ApiObject>,
}

impl Render for ObjectListing {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        use colored::Colorize;

        writeln!(w, "Objects at {}", self.base_url.bold())?;
        writeln!(w)?;
        writeln!(w, "{:<36} {:<42} {}", "ID", "Name", "Data")?;
        writeln!(w, "{}", "-".repeat(90))?;

        for object in &self.objects {
            let data = object
                .data
                .as_ref()
                .map_or_else(|| "-".to_owned(), |d| format!("{} fields", d.len()));
            writeln!(w, "{:<36} {:<42} {}", object.id, object.name, data)?;
        }

        writeln!(w)?;
        writeln!(w, "Total: {}", self.count)?;
        Ok(())
    }
}
