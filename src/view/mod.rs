//! Terminal preview of the detail screen (impure shell)

pub mod constants;
pub mod scene_widget;
mod styles;

pub use scene_widget::{truncate_to_width, CellScale, SceneWidget};
pub use styles::{ColorConfig, SceneStyles};

use crate::config::KeyBindings;
use crate::model::ModuleVariant;
use crate::state::AppState;
use constants::STATUS_BAR_HEIGHT;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Startup options for the preview.
///
/// # Example
///
/// ```
/// use module_detail::model::ModuleVariant;
/// use module_detail::view::{CellScale, PreviewArgs};
///
/// let args = PreviewArgs::new(ModuleVariant::Solar, true, CellScale::new(10.0, 20.0), false);
/// assert!(args.show_settings);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewArgs {
    /// Module shown first.
    pub module: ModuleVariant,
    /// Whether the settings affordance starts visible.
    pub show_settings: bool,
    /// Layout points per terminal cell.
    pub scale: CellScale,
    /// Disable colors regardless of terminal support.
    pub no_color: bool,
}

impl PreviewArgs {
    /// Create preview args.
    pub fn new(module: ModuleVariant, show_settings: bool, scale: CellScale, no_color: bool) -> Self {
        Self {
            module,
            show_settings,
            scale,
            no_color,
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    scale: CellScale,
    styles: SceneStyles,
    /// Surface of the last drawn frame, in layout points
    last_surface: Option<(f64, f64)>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(args: PreviewArgs) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(terminal, args))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits. Every key press and every resize
    /// recomposes the scene from scratch.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(width, height) => {
                    debug!(width, height, "Terminal resized");
                    self.draw()?;
                }
                _ => {}
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Wrap an existing terminal. Does not touch raw mode.
    pub fn with_terminal(terminal: Terminal<B>, args: PreviewArgs) -> Self {
        Self {
            terminal,
            app_state: AppState::new(args.module, args.show_settings),
            key_bindings: KeyBindings::default(),
            scale: args.scale,
            styles: SceneStyles::with_color_config(ColorConfig::from_env_and_args(args.no_color)),
            last_surface: None,
        }
    }

    /// Current preview state.
    pub fn state(&self) -> &AppState {
        &self.app_state
    }

    /// The wrapped terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Handle a key press. Returns true when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if let Some(action) = self.key_bindings.get(key) {
            debug!(?action, "Key action");
            self.app_state.apply(action);
        }
        self.app_state.should_quit
    }

    /// Compose the current state for the terminal size and draw it.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let scale = self.scale;
        let styles = &self.styles;
        let mut surface = None;

        self.terminal.draw(|frame| {
            surface = Some(render_preview(frame, state, scale, styles));
        })?;

        if surface != self.last_surface {
            if let Some((width, height)) = surface {
                debug!(width, height, "Surface changed");
            }
            self.last_surface = surface;
        }
        Ok(())
    }
}

/// Draw the scene above a one-line status bar. Returns the surface size
/// the scene was composed for.
fn render_preview(
    frame: &mut Frame,
    state: &AppState,
    scale: CellScale,
    styles: &SceneStyles,
) -> (f64, f64) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                    // Scene
            Constraint::Length(STATUS_BAR_HEIGHT), // Status bar
        ])
        .split(frame.area());
    let scene_area = chunks[0];
    let status_area = chunks[1];

    let (width, height) = scale.surface_of(scene_area);
    let status = match state.scene(width, height) {
        Ok(scene) => {
            let widget = SceneWidget::new(
                &scene,
                scale,
                state.toggle_label(),
                state.is_toggle_active(state.module),
                styles,
            );
            frame.render_widget(widget, scene_area);
            status_line(state)
        }
        Err(err) => {
            // A terminal too small to hold any scene rows
            warn!(error = %err, "Cannot compose scene for terminal");
            Line::from(err.to_string())
        }
    };

    frame.render_widget(Paragraph::new(status), status_area);
    (width, height)
}

fn status_line(state: &AppState) -> Line<'static> {
    let settings = if state.show_settings { "on" } else { "off" };
    Line::from(vec![
        Span::styled(
            format!(" {} ", state.module.name()),
            Style::default().add_modifier(Modifier::REVERSED),
        ),
        Span::raw(format!(
            " 1-3/Tab module | t {} | s settings ({settings}) | q quit",
            state.toggle_label()
        )),
    ])
}

/// Initialize and run the preview
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// even if the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_preview(args: PreviewArgs) -> Result<(), TuiError> {
    let mut app = TuiApp::new(args)?;

    let result = app.run();

    restore_terminal()?;

    result
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
