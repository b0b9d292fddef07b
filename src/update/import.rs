//! CSV import message handlers

use std::time::Duration;

use crate::commands::Cmd;
use crate::import::ImportedFields;
use crate::messages::ImportMsg;
use crate::model::{AppModel, DragState, Row};

/// Handle import messages
pub fn update_import(model: &mut AppModel, msg: ImportMsg) -> Option<Cmd> {
    match msg {
        ImportMsg::Request => {
            let start_dir = model
                .ui
                .last_import
                .as_ref()
                .and_then(|p| p.parent())
                .map(|p| p.to_path_buf());
            Some(Cmd::ShowImportDialog { start_dir })
        }

        // Cancelled chooser
        ImportMsg::FileChosen(None) => None,

        ImportMsg::FileChosen(Some(path)) => {
            // The column count is fixed when the file is chosen
            let columns = model.columns();
            model.ui.is_importing = true;
            model.ui.set_status(format!("Importing {}...", path.display()));
            Some(Cmd::batch(vec![
                Cmd::ReadImportFile { path, columns },
                Cmd::Redraw,
            ]))
        }

        ImportMsg::Loaded {
            path,
            columns,
            result,
        } => {
            model.ui.is_importing = false;
            match result {
                Ok(rows) => {
                    let count = rows.len();
                    replace_rows(model, rows);
                    tracing::info!(
                        rows = count,
                        columns = columns.get(),
                        "Imported {}",
                        path.display()
                    );
                    model.ui.set_status(format!(
                        "Imported {} row{} from {}",
                        count,
                        if count == 1 { "" } else { "s" },
                        path.display()
                    ));
                    model.ui.last_import = Some(path);
                }
                Err(e) => {
                    tracing::warn!("Failed to import {}: {}", path.display(), e);
                    model.ui.set_status("Ready");
                    model
                        .ui
                        .show_transient(e.to_string(), Duration::from_millis(4000));
                }
            }
            Some(Cmd::Redraw)
        }
    }
}

/// Destructively replace the sequence with imported rows, then renumber
fn replace_rows(model: &mut AppModel, imported: Vec<ImportedFields>) {
    let rows: Vec<Row> = imported
        .into_iter()
        .enumerate()
        .map(|(i, fields)| model.list.build_row(fields, i + 1))
        .collect();
    model.list.replace_all(rows);
    model.list.renumber();

    // Interactions bound to rows that no longer exist end here
    model.ui.position_edit = None;
    model.drag = DragState::Idle;
    model.ui.scroll_offset = 0.0;
}
