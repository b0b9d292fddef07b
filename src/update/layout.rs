//! Layout setting message handlers

use std::time::Duration;

use crate::commands::Cmd;
use crate::messages::LayoutMsg;
use crate::model::AppModel;

/// Handle layout messages
///
/// Existing rows and an open form keep their field counts.
pub fn update_layout(model: &mut AppModel, msg: LayoutMsg) -> Option<Cmd> {
    match msg {
        LayoutMsg::SetColumns(columns) => {
            if !model.layout.set_columns(columns) {
                return None;
            }
            tracing::info!(class = model.layout.container_class(), "Layout changed");
            model.clamp_scroll();
            model
                .ui
                .show_transient(format!("Columns: {}", columns), Duration::from_millis(1500));
            Some(Cmd::Redraw)
        }
    }
}
