use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use ranklist::cli::CliArgs;
use ranklist::config::AppConfig;
use ranklist::theme::{list_available_themes, load_theme, Theme, ThemeSource};

mod runtime;

use runtime::App;

const INITIAL_WINDOW_SIZE: (u32, u32) = (900, 640);

fn main() -> Result<()> {
    ranklist::tracing::init();

    let startup = CliArgs::parse()
        .into_config()
        .map_err(|e| anyhow::anyhow!(e))?;

    if startup.list_themes {
        for info in list_available_themes() {
            let source = match info.source {
                ThemeSource::User => "user",
                ThemeSource::Builtin => "built-in",
            };
            println!("{:<20} {} ({})", info.id, info.name, source);
        }
        return Ok(());
    }

    let mut config = AppConfig::load();
    startup.apply_to(&mut config);

    let theme = load_theme(&config.theme).unwrap_or_else(|e| {
        tracing::warn!("Failed to load theme '{}': {}; using default", config.theme, e);
        Theme::default()
    });

    let event_loop = EventLoop::new()?;
    let (width, height) = INITIAL_WINDOW_SIZE;
    let mut app = App::new(width, height, config, theme, startup.import);
    event_loop.run_app(&mut app)?;

    app.into_result()
}
