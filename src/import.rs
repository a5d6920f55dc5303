// Importers: read exported files back and re-submit them to the API.
// Datasources and folders go up unmodified; dashboards first have their
// folder reference rewritten against the destination instance.
//
// Upload loops are best-effort: a file that fails to parse or a POST the
// server rejects is logged as a warning and the loop moves on. The one
// fatal condition is a dashboard whose folder cannot be resolved on the
// destination (see `reconcile_folder`).

use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

use crate::api::ApiClient;
use crate::store;

/// The platform's implicit root folder. Dashboards in it carry no numeric
/// folder id, so their payload needs no rewrite.
const GENERAL_FOLDER: &str = "General";

/// Upload every file in `dir` as-is via `send`.
fn upload_unmodified<F>(dir: &Path, kind: &str, send: F) -> Result<()>
where
    F: Fn(&Value) -> Result<()>,
{
    for path in store::list_object_files(dir)? {
        let name = file_label(&path);
        let payload = match store::read_object(&path) {
            Ok(payload) => payload,
            Err(err) => {
                warn!("{}: {:#}", name, err);
                continue;
            }
        };
        match send(&payload) {
            Ok(()) => info!("{} {} uploaded", kind, name),
            Err(err) => warn!("{}: {:#}", name, err),
        }
    }
    Ok(())
}

/// Upload every datasource file in `dir`.
pub fn datasources(api: &ApiClient, dir: &Path) -> Result<()> {
    upload_unmodified(dir, "Datasource", |payload| api.create_datasource(payload))
}

/// Upload every folder file in `dir`. The destination assigns its own
/// numeric ids; uid and title pass straight through.
pub fn folders(api: &ApiClient, dir: &Path) -> Result<()> {
    upload_unmodified(dir, "Folder", |payload| api.create_folder(payload))
}

/// Upload every dashboard file in `dir`, resolving each file's
/// `meta.folderTitle` to the destination's numeric folder id first.
pub fn dashboards(api: &ApiClient, dir: &Path) -> Result<()> {
    // The folder list endpoint omits numeric ids, so each folder is
    // fetched again by uid to resolve one.
    let folders = api.list_folders()?;
    let mut entries = Vec::with_capacity(folders.len());
    for folder in &folders {
        let detail = api.get_folder(&folder.uid)?;
        entries.push((detail.title, detail.id));
    }
    let folder_ids = folder_id_map(entries);

    for path in store::list_object_files(dir)? {
        let name = file_label(&path);
        let mut payload = match store::read_object(&path) {
            Ok(payload) => payload,
            Err(err) => {
                warn!("{}: {:#}", name, err);
                continue;
            }
        };
        // A folder lookup miss is fatal; the run stops before this POST.
        reconcile_folder(&mut payload, &folder_ids)
            .with_context(|| format!("Upload aborted at {}", path.display()))?;
        match api.create_dashboard(&payload) {
            Ok(()) => info!("Dashboard {} uploaded", name),
            Err(err) => warn!("{}: {:#}", name, err),
        }
    }
    Ok(())
}

/// Collapse `(title, id)` pairs into the reconciliation lookup map.
/// Duplicate titles keep the later id; the overwrite is logged.
fn folder_id_map(entries: impl IntoIterator<Item = (String, i64)>) -> HashMap<String, i64> {
    let mut map = HashMap::new();
    for (title, id) in entries {
        if let Some(previous) = map.insert(title.clone(), id) {
            warn!(
                "Folder title {} maps to ids {} and {}; keeping {}",
                title, previous, id, id
            );
        }
    }
    map
}

/// Point a dashboard envelope at the destination folder named by its
/// `meta.folderTitle`. General dashboards are left untouched. A title the
/// destination does not have is an error.
fn reconcile_folder(payload: &mut Value, folder_ids: &HashMap<String, i64>) -> Result<()> {
    let title = payload
        .pointer("/meta/folderTitle")
        .and_then(Value::as_str)
        .context("dashboard file has no meta.folderTitle")?;
    if title == GENERAL_FOLDER {
        return Ok(());
    }
    let id = *folder_ids
        .get(title)
        .with_context(|| format!("no folder titled {:?} on the destination instance", title))?;
    payload
        .as_object_mut()
        .context("dashboard file is not a json object")?
        .insert("folderId".to_string(), Value::from(id));
    Ok(())
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("<non-utf8 filename>")
        .to_string()
}
