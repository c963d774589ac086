mod common;

use async_trait::async_trait;
use common::{serve, Reply, HENRY_STREET_SCHOOLS, HENRY_STREET_SCORES};
use nycschools::data::{Decoded, Endpoints, HttpSource};
use nycschools::input::{InputAction, ScrollDirection};
use nycschools::render::ui::{draw, ColorTheme, UIRenderer, ViewState};
use nycschools::{AppState, Application, DataSource, LoadState, SatScore, School};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

const WAIT: Duration = Duration::from_secs(5);

/// What one render call saw.
#[derive(Debug, Clone)]
struct Snapshot {
    schools: LoadState,
    scores: LoadState,
    selected: Option<String>,
    alert: Option<String>,
    screen: String,
}

/// Renderer that draws into a `TestBackend` and reports every frame.
struct RecordingRenderer {
    terminal: Terminal<TestBackend>,
    theme: ColorTheme,
    frames: UnboundedSender<Snapshot>,
}

impl RecordingRenderer {
    fn new(frames: UnboundedSender<Snapshot>) -> Self {
        Self {
            terminal: Terminal::new(TestBackend::new(80, 24)).unwrap(),
            theme: ColorTheme::default(),
            frames,
        }
    }
}

impl UIRenderer for RecordingRenderer {
    fn render(&mut self, state: &AppState, view: &ViewState) -> nycschools::Result<()> {
        let theme = &self.theme;
        self.terminal
            .draw(|frame| draw(frame, state, view, theme))?;

        let buffer = self.terminal.backend().buffer();
        let screen = (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer.get(x, y).symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");

        let _ = self.frames.send(Snapshot {
            schools: state.schools().state(),
            scores: state.scores().state(),
            selected: state.selected().map(|school| school.school_name.clone()),
            alert: state.alert().map(str::to_string),
            screen,
        });
        Ok(())
    }

    fn initialize(&mut self) -> nycschools::Result<()> {
        Ok(())
    }

    fn cleanup(&mut self) -> nycschools::Result<()> {
        Ok(())
    }

    fn get_terminal_size(&self) -> nycschools::Result<(u16, u16)> {
        Ok((80, 24))
    }
}

async fn wait_for(
    frames: &mut UnboundedReceiver<Snapshot>,
    mut predicate: impl FnMut(&Snapshot) -> bool,
) -> Snapshot {
    tokio::time::timeout(WAIT, async {
        loop {
            let snapshot = frames.recv().await.expect("renderer went away");
            if predicate(&snapshot) {
                return snapshot;
            }
        }
    })
    .await
    .expect("expected frame never rendered")
}

fn http_source(addr: std::net::SocketAddr) -> Arc<dyn DataSource> {
    Arc::new(
        HttpSource::new(Endpoints {
            schools: format!("http://{addr}/schools.json"),
            sat_scores: format!("http://{addr}/sat.json"),
        })
        .unwrap(),
    )
}

#[tokio::test]
async fn selecting_henry_street_shows_its_scores() {
    let addr = serve(HashMap::from([
        ("/schools.json", Reply::ok(HENRY_STREET_SCHOOLS)),
        ("/sat.json", Reply::ok(HENRY_STREET_SCORES)),
    ]))
    .await;

    let (frames_tx, mut frames) = mpsc::unbounded_channel();
    let (input, input_rx) = mpsc::unbounded_channel();
    let mut app = Application::new(
        http_source(addr),
        Box::new(RecordingRenderer::new(frames_tx)),
    );

    let driver = async move {
        let loaded = wait_for(&mut frames, |s| {
            s.schools == LoadState::Populated && s.scores == LoadState::Populated
        })
        .await;
        assert!(loaded.screen.contains("Henry Street School"));

        // Henry Street is the second row (screen row 4); its VIEW control is at the right edge.
        input.send(InputAction::Click { column: 76, row: 4 }).unwrap();
        let open = wait_for(&mut frames, |s| s.selected.is_some()).await;
        assert_eq!(open.selected.as_deref(), Some("Henry Street School"));
        assert!(open.screen.contains("Avg. Reading Score: 391"));
        assert!(open.screen.contains("Avg. Writing Score: 381"));
        assert!(open.screen.contains("Avg. Math Score: 368"));
        assert!(!open.screen.contains("Unable to find SAT scores"));

        input.send(InputAction::Close).unwrap();
        let closed = wait_for(&mut frames, |s| s.selected.is_none()).await;
        assert!(!closed.screen.contains("Avg. Math Score"));

        input.send(InputAction::Quit).unwrap();
    };

    let (result, ()) = tokio::join!(app.run_session(input_rx), driver);
    result.unwrap();
}

#[tokio::test]
async fn failed_score_fetch_alerts_then_falls_back() {
    let addr = serve(HashMap::from([
        ("/schools.json", Reply::ok(HENRY_STREET_SCHOOLS)),
        ("/sat.json", Reply::status(500)),
    ]))
    .await;

    let (frames_tx, mut frames) = mpsc::unbounded_channel();
    let (input, input_rx) = mpsc::unbounded_channel();
    let mut app = Application::new(
        http_source(addr),
        Box::new(RecordingRenderer::new(frames_tx)),
    );

    let driver = async move {
        let alerted = wait_for(&mut frames, |s| {
            s.alert.is_some() && s.schools == LoadState::Populated
        })
        .await;
        assert_eq!(alerted.scores, LoadState::Unloaded);
        assert!(alerted
            .screen
            .contains("Could not retrieve data from the server!"));

        input.send(InputAction::Activate).unwrap();
        wait_for(&mut frames, |s| s.alert.is_none()).await;

        input
            .send(InputAction::Scroll {
                direction: ScrollDirection::Down,
                lines: 1,
            })
            .unwrap();
        input.send(InputAction::Activate).unwrap();
        let open = wait_for(&mut frames, |s| s.selected.is_some()).await;
        assert_eq!(open.selected.as_deref(), Some("Henry Street School"));
        assert!(open
            .screen
            .contains("Unable to find SAT scores for this school!"));

        input.send(InputAction::Back).unwrap();
        wait_for(&mut frames, |s| s.selected.is_none()).await;
        input.send(InputAction::Quit).unwrap();
    };

    let (result, ()) = tokio::join!(app.run_session(input_rx), driver);
    result.unwrap();
    assert_eq!(app.state().pending_alerts(), 0);
}

/// Source whose requests never resolve.
struct NeverSource;

#[async_trait]
impl DataSource for NeverSource {
    async fn fetch_schools(&self) -> nycschools::Result<Decoded<School>> {
        std::future::pending().await
    }

    async fn fetch_scores(&self) -> nycschools::Result<Decoded<SatScore>> {
        std::future::pending().await
    }
}

#[tokio::test]
async fn before_any_fetch_resolves_the_screen_is_empty_and_closed() {
    let (frames_tx, mut frames) = mpsc::unbounded_channel();
    let (input, input_rx) = mpsc::unbounded_channel();
    let mut app = Application::new(
        Arc::new(NeverSource),
        Box::new(RecordingRenderer::new(frames_tx)),
    );

    let driver = async move {
        let first = wait_for(&mut frames, |_| true).await;
        assert_eq!(first.schools, LoadState::Unloaded);
        assert_eq!(first.scores, LoadState::Unloaded);
        assert!(first.selected.is_none());
        assert!(first.alert.is_none());
        assert!(!first.screen.contains("[ VIEW ]"));

        input.send(InputAction::Activate).unwrap();
        let after = wait_for(&mut frames, |_| true).await;
        assert!(after.selected.is_none());

        input.send(InputAction::Quit).unwrap();
    };

    let (result, ()) = tokio::join!(app.run_session(input_rx), driver);
    result.unwrap();
}
