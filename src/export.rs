// Exporters: pull objects from the API, strip fields that do not survive
// a move between instances, and write one JSON file per object.
//
// Only the initial listing call can abort an export; everything after it
// is best-effort per item. The target directory is created after the
// listing succeeds, so a failed export leaves no trace on disk.

use anyhow::Result;
use serde_json::Value;
use std::path::Path;
use tracing::{info, warn};

use crate::api::ApiClient;
use crate::store;

/// Remove the server-assigned fields a datasource cannot carry to another
/// instance: the numeric `id` and the display-only `typeLogoUrl`.
fn portable_datasource(mut ds: Value) -> Value {
    if let Some(obj) = ds.as_object_mut() {
        obj.remove("id");
        obj.remove("typeLogoUrl");
    }
    ds
}

/// Remove the instance-local `dashboard.id` from a dashboard envelope.
/// `meta` stays intact; `meta.folderTitle` is what the importer joins on.
fn strip_dashboard_id(envelope: &mut Value) {
    if let Some(dash) = envelope.get_mut("dashboard").and_then(Value::as_object_mut) {
        dash.remove("id");
    }
}

/// Download every datasource as `<dir>/<name>.json`.
pub fn datasources(api: &ApiClient, dir: &Path) -> Result<()> {
    let datasources = api.list_datasources()?;
    store::ensure_dir(dir)?;
    for ds in datasources {
        let Some(name) = ds.get("name").and_then(Value::as_str).map(str::to_string) else {
            warn!("Skipping datasource without a name");
            continue;
        };
        store::write_object(dir, &name, &portable_datasource(ds))?;
        info!("Datasource {} downloaded", name);
    }
    info!("Datasources download done");
    Ok(())
}

/// Download every folder as a minimal `{uid, title}` record. Titles that
/// sanitize to the same filename overwrite each other.
pub fn folders(api: &ApiClient, dir: &Path) -> Result<()> {
    let folders = api.list_folders()?;
    store::ensure_dir(dir)?;
    for folder in folders {
        let stem = store::sanitize_title(&folder.title);
        store::write_object(dir, &stem, &folder)?;
        info!("Folder {} downloaded", stem);
    }
    info!("Folders download done");
    Ok(())
}

/// Download every dashboard: search for uids, then fetch each dashboard
/// individually. A failed per-uid fetch is skipped with a warning.
pub fn dashboards(api: &ApiClient, dir: &Path) -> Result<()> {
    let hits = api.search_dashboards()?;
    store::ensure_dir(dir)?;
    for hit in hits {
        let mut envelope = match api.get_dashboard(&hit.uid) {
            Ok(envelope) => envelope,
            Err(err) => {
                warn!("Dashboard {} skipped: {:#}", hit.uid, err);
                continue;
            }
        };
        let title = envelope
            .pointer("/dashboard/title")
            .and_then(Value::as_str)
            .map(str::to_string);
        let Some(title) = title else {
            warn!("Dashboard {} skipped: no title in payload", hit.uid);
            continue;
        };
        strip_dashboard_id(&mut envelope);
        let stem = store::sanitize_title(&title);
        store::write_object(dir, &stem, &envelope)?;
        info!("Dashboard {} downloaded", stem);
    }
    info!("Dashboards download done");
    Ok(())
}
