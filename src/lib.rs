// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the backup/restore flows.
//
// Module responsibilities:
// - `api`: Encapsulates HTTP interactions with the Grafana REST API
//   (list/fetch/create datasources, folders and dashboards).
// - `cli`: Argument parsing and dispatch of the one selected action.
// - `config`: Environment-driven configuration, built once at startup
//   and passed explicitly to every component.
// - `export`: Pulls objects from the API, strips non-portable fields and
//   writes one JSON file per object.
// - `import`: Reads JSON files back and re-submits them to the API; the
//   dashboard importer rewrites folder references for the destination
//   instance.
// - `logging`: tracing subscriber setup from LOG_LEVEL.
// - `store`: Filesystem helpers (directories, pretty-printed JSON files,
//   filename sanitization).
// - `ui`: Interactive confirmation before uploads.
pub mod api;
pub mod cli;
pub mod config;
pub mod export;
pub mod import;
pub mod logging;
pub mod store;
pub mod ui;
