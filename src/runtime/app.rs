use std::path::PathBuf;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use anyhow::Result;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::ModifiersState;
use winit::window::{CursorIcon, Window};

use ranklist::commands::Cmd;
use ranklist::config::AppConfig;
use ranklist::import::read_import_file;
use ranklist::messages::{AppMsg, DragMsg, ImportMsg, ListMsg, Msg, UiMsg};
use ranklist::model::AppModel;
use ranklist::theme::Theme;
use ranklist::update::update;
use ranklist::view::hit_test::{hit_test_ui, HitTarget, MouseEvent, Point};
use ranklist::view::Renderer;

use super::input::{handle_key, KeyModifiers};
use super::mouse::{handle_mouse_move, handle_mouse_press, handle_mouse_release, PendingRowDrag};

/// Interval of the blink / transient-expiry tick
const TICK_INTERVAL: Duration = Duration::from_millis(500);
/// How often a held drag near the list edge keeps auto-scrolling
const AUTO_SCROLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct App {
    model: AppModel,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    last_tick: Instant,
    last_auto_scroll: Instant,
    modifiers: ModifiersState,
    mouse_position: Option<Point>,
    hover: Option<HitTarget>,
    pending_drag: Option<PendingRowDrag>,
    /// File passed on the command line, imported once the window is up
    startup_import: Option<PathBuf>,
    /// Fatal error raised inside the event loop (e.g. no usable font)
    fatal: Option<anyhow::Error>,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
}

impl App {
    pub fn new(
        window_width: u32,
        window_height: u32,
        config: AppConfig,
        theme: Theme,
        startup_import: Option<PathBuf>,
    ) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model: AppModel::new(window_width, window_height, config, theme),
            renderer: None,
            window: None,
            context: None,
            last_tick: Instant::now(),
            last_auto_scroll: Instant::now(),
            modifiers: ModifiersState::empty(),
            mouse_position: None,
            hover: None,
            pending_drag: None,
            startup_import,
            fatal: None,
            msg_tx,
            msg_rx,
        }
    }

    /// Error that stopped the event loop, if any
    pub fn into_result(self) -> Result<()> {
        match self.fatal {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn init_renderer(&mut self, window: Rc<Window>, context: &Context<Rc<Window>>) -> Result<()> {
        let renderer = Renderer::new(window, context, &self.model.config)?;
        self.model.set_scale_factor(renderer.scale_factor());
        self.model
            .set_font_metrics(renderer.line_height(), renderer.char_width());
        let (w, h) = renderer.dimensions();
        self.model.resize(w, h);
        self.renderer = Some(renderer);
        Ok(())
    }

    fn reinit_renderer(&mut self) -> Result<()> {
        let (Some(window), Some(context)) = (self.window.clone(), self.context.take()) else {
            return Ok(());
        };
        let result = self.init_renderer(window, &context);
        self.context = Some(context);
        result
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let (w, h) = self.model.window_size;
        let attributes = Window::default_attributes()
            .with_title("Ranklist")
            .with_inner_size(LogicalSize::new(w, h));

        let window = Rc::new(event_loop.create_window(attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create graphics context: {}", e))?;

        self.init_renderer(Rc::clone(&window), &context)?;
        self.window = Some(window);
        self.context = Some(context);
        Ok(())
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn update_hover(&mut self, pt: Point) {
        let target = hit_test_ui(&self.model, pt);
        let icon = match &target {
            _ if self.model.drag.is_dragging() => CursorIcon::Grabbing,
            Some(HitTarget::RowHandle(_)) => CursorIcon::Grab,
            Some(HitTarget::FormInput { .. }) | Some(HitTarget::PositionInput { .. }) => {
                CursorIcon::Text
            }
            Some(
                HitTarget::ToolbarAdd
                | HitTarget::ToolbarImport
                | HitTarget::ColumnOption(_)
                | HitTarget::FormSave
                | HitTarget::FormCancel
                | HitTarget::RowRemove(_)
                | HitTarget::RowLabel(_)
                | HitTarget::RowField { .. },
            ) => CursorIcon::Pointer,
            _ => CursorIcon::Default,
        };
        if let Some(window) = &self.window {
            window.set_cursor(icon);
        }
        self.hover = target;
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::Resized(size) => {
                update(&mut self.model, Msg::resize(size.width, size.height))
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => update(
                &mut self.model,
                Msg::App(AppMsg::ScaleFactorChanged(*scale_factor)),
            ),
            WindowEvent::ModifiersChanged(mods) => {
                self.modifiers = mods.state();
                None
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return None;
                }
                let mods = KeyModifiers {
                    ctrl: self.modifiers.control_key(),
                    shift: self.modifiers.shift_key(),
                    alt: self.modifiers.alt_key(),
                    logo: self.modifiers.super_key(),
                };
                handle_key(&mut self.model, event.logical_key.clone(), mods)
            }
            WindowEvent::RedrawRequested => {
                if let Some(renderer) = &mut self.renderer {
                    if let Err(e) = renderer.render(&self.model, self.hover.as_ref()) {
                        tracing::error!("Render error: {}", e);
                    }
                }
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                let pt = Point::new(position.x, position.y);
                self.mouse_position = Some(pt);
                let (cmd, started) = handle_mouse_move(&mut self.model, pt, self.pending_drag);
                if started {
                    self.pending_drag = None;
                }
                let before = self.hover.clone();
                self.update_hover(pt);
                if before != self.hover {
                    return Some(Cmd::batch(vec![Cmd::from_option(cmd), Cmd::Redraw]));
                }
                cmd
            }
            WindowEvent::CursorLeft { .. } => {
                self.mouse_position = None;
                self.hover.take().map(|_| Cmd::Redraw)
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let Some(pt) = self.mouse_position else {
                    return None;
                };
                match state {
                    ElementState::Pressed => {
                        let event = MouseEvent::new(pt.x, pt.y, *button, *state, self.modifiers);
                        let result = handle_mouse_press(&mut self.model, event);
                        self.pending_drag = result.pending_drag;
                        self.update_hover(pt);
                        result.cmd
                    }
                    ElementState::Released => {
                        self.pending_drag = None;
                        let cmd = handle_mouse_release(&mut self.model, *button);
                        self.update_hover(pt);
                        cmd
                    }
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y * 3.0 * self.model.line_height as f32,
                    MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
                };
                if dy == 0.0 || self.model.form.is_some() {
                    return None;
                }
                update(&mut self.model, Msg::List(ListMsg::Scroll(dy)))
            }
            WindowEvent::DroppedFile(path) => update(
                &mut self.model,
                Msg::Import(ImportMsg::FileChosen(Some(path.clone()))),
            ),
            _ => None,
        }
    }

    fn process_cmd(&mut self, cmd: Cmd, event_loop: &ActiveEventLoop) {
        match cmd {
            Cmd::None | Cmd::Redraw => {}
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd, event_loop);
                }
            }

            Cmd::ShowImportDialog { start_dir } => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let mut dlg = rfd::FileDialog::new()
                        .set_title("Import CSV")
                        .add_filter("CSV", &["csv", "txt"]);
                    if let Some(dir) = start_dir {
                        dlg = dlg.set_directory(dir);
                    }
                    let path = dlg.pick_file();
                    let _ = tx.send(Msg::Import(ImportMsg::FileChosen(path)));
                });
            }

            Cmd::ReadImportFile { path, columns } => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let result = read_import_file(&path, columns);
                    let _ = tx.send(Msg::Import(ImportMsg::Loaded {
                        path,
                        columns,
                        result,
                    }));
                });
            }

            Cmd::ReinitializeRenderer => {
                if let Err(e) = self.reinit_renderer() {
                    tracing::error!("Failed to reinitialize renderer: {}", e);
                    self.fatal = Some(e);
                    event_loop.exit();
                }
            }

            Cmd::Quit => event_loop.exit(),
        }
    }

    fn dispatch(&mut self, cmd: Option<Cmd>, event_loop: &ActiveEventLoop) {
        let Some(cmd) = cmd else { return };
        let redraw = cmd.needs_redraw();
        self.process_cmd(cmd, event_loop);
        if redraw {
            self.request_redraw();
        }
    }

    fn process_async_messages(&mut self, event_loop: &ActiveEventLoop) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            let cmd = update(&mut self.model, msg);
            self.dispatch(cmd, event_loop);
        }
    }

    /// Keep auto-scrolling while a drag is held still near the list edge
    fn auto_scroll_held_drag(&mut self, event_loop: &ActiveEventLoop) {
        if !self.model.drag.is_dragging() || self.last_auto_scroll.elapsed() < AUTO_SCROLL_INTERVAL {
            return;
        }
        let Some(pt) = self.mouse_position else { return };
        self.last_auto_scroll = Instant::now();
        let cmd = update(
            &mut self.model,
            Msg::Drag(DragMsg::Over {
                pointer_y: pt.y as f32,
            }),
        );
        self.dispatch(cmd, event_loop);
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.create_window(event_loop) {
            tracing::error!("Failed to start: {:#}", e);
            self.fatal = Some(e);
            event_loop.exit();
            return;
        }

        if let Some(path) = self.startup_import.take() {
            let cmd = update(&mut self.model, Msg::Import(ImportMsg::FileChosen(Some(path))));
            self.dispatch(cmd, event_loop);
        }
        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        if self.window.as_ref().map(|w| w.id()) != Some(window_id) {
            return;
        }
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }
        let cmd = self.handle_event(&event);
        self.dispatch(cmd, event_loop);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.process_async_messages(event_loop);
        self.auto_scroll_held_drag(event_loop);

        if self.last_tick.elapsed() >= TICK_INTERVAL {
            self.last_tick = Instant::now();
            let cmd = update(&mut self.model, Msg::Ui(UiMsg::BlinkCursor));
            self.dispatch(cmd, event_loop);
        }

        // Wake up regularly so worker results and held drags are picked up
        let wake = if self.model.drag.is_dragging() || self.model.ui.is_importing {
            AUTO_SCROLL_INTERVAL
        } else {
            Duration::from_millis(100)
        };
        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + wake));
    }
}
