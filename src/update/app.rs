//! App message handlers (window events, lifecycle)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;

/// Handle app messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(width, height) => {
            model.resize(width, height);
            Some(Cmd::Redraw)
        }

        AppMsg::ScaleFactorChanged(scale_factor) => {
            model.set_scale_factor(scale_factor);
            Some(Cmd::ReinitializeRenderer)
        }

        AppMsg::Quit => Some(Cmd::Quit),
    }
}
