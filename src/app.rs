//! Application orchestration layer
//!
//! Owns the application state and is the only place it is mutated. Fetch completions
//! and user input arrive over channels and are applied one at a time, with a redraw
//! after each.

pub mod dispatch;
pub mod runtime;
pub mod state;

use crate::data::{spawn_loaders, DataSource, LoadEvent};
use crate::error::Result;
use crate::input::InputAction;
use crate::render::ui::{UIRenderer, ViewState};
use state::AppState;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// How long the input thread blocks per poll before rechecking for shutdown.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Application orchestrator - wires the data source, input and renderer together
pub struct Application {
    source: Arc<dyn DataSource>,
    ui_renderer: Box<dyn UIRenderer>,
    state: AppState,
}

impl Application {
    pub fn new(source: Arc<dyn DataSource>, ui_renderer: Box<dyn UIRenderer>) -> Self {
        Self {
            source,
            ui_renderer,
            state: AppState::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run against the real terminal until the user quits.
    pub async fn run(&mut self) -> Result<()> {
        self.ui_renderer.initialize()?;

        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let shutdown = Arc::new(AtomicBool::new(false));
        let input_thread =
            runtime::spawn_input_thread(input_tx, Arc::clone(&shutdown), INPUT_POLL_INTERVAL);

        let result = self.run_session(input_rx).await;

        shutdown.store(true, Ordering::SeqCst);
        let input_result = runtime::join_input_thread(input_thread);
        self.ui_renderer.cleanup()?;
        // A session that ended because input failed reports that failure.
        result.and(input_result)
    }

    /// Start both fetches and process events until quit or until the input channel
    /// closes. The renderer is expected to be initialized already.
    pub async fn run_session(&mut self, mut input_rx: UnboundedReceiver<InputAction>) -> Result<()> {
        let (width, height) = self.ui_renderer.get_terminal_size()?;
        let mut view = ViewState::new(width, height);

        let (load_tx, mut load_rx) = mpsc::unbounded_channel();
        let loaders = spawn_loaders(Arc::clone(&self.source), load_tx);

        let result = self.event_loop(&mut view, &mut load_rx, &mut input_rx).await;
        loaders.abort();
        result
    }

    async fn event_loop(
        &mut self,
        view: &mut ViewState,
        load_rx: &mut UnboundedReceiver<LoadEvent>,
        input_rx: &mut UnboundedReceiver<InputAction>,
    ) -> Result<()> {
        self.ui_renderer.render(&self.state, view)?;

        loop {
            tokio::select! {
                Some(event) = load_rx.recv() => {
                    self.state.apply_load(event);
                }
                action = input_rx.recv() => {
                    let Some(action) = action else {
                        log::debug!("input channel closed");
                        break;
                    };
                    if !dispatch::process_action(&mut self.state, view, action) {
                        break;
                    }
                }
            }

            self.ui_renderer.render(&self.state, view)?;
        }

        Ok(())
    }
}
