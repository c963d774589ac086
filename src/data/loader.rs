//! Startup loaders: one task per collection, reporting back over a channel.

use crate::data::decode::Decoded;
use crate::data::model::{SatScore, School};
use crate::data::source::DataSource;
use crate::error::Result;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Completion of one startup fetch, applied by the owner of the application state.
#[derive(Debug)]
pub enum LoadEvent {
    Schools(Result<Decoded<School>>),
    Scores(Result<Decoded<SatScore>>),
}

/// Handles to the two fetch tasks.
pub struct Loaders {
    schools: JoinHandle<()>,
    scores: JoinHandle<()>,
}

impl Loaders {
    /// Abort whatever is still in flight. Used only on shutdown.
    pub fn abort(&self) {
        self.schools.abort();
        self.scores.abort();
    }
}

/// Start both fetches without waiting on either.
///
/// Each task sends exactly one [`LoadEvent`] when its request resolves. A receiver
/// that has gone away is not an error; the result is simply dropped.
pub fn spawn_loaders(source: Arc<dyn DataSource>, tx: UnboundedSender<LoadEvent>) -> Loaders {
    let schools = {
        let source = Arc::clone(&source);
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = source.fetch_schools().await;
            let _ = tx.send(LoadEvent::Schools(result));
        })
    };

    let scores = tokio::spawn(async move {
        let result = source.fetch_scores().await;
        let _ = tx.send(LoadEvent::Scores(result));
    });

    Loaders { schools, scores }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Dataset, SchoolsError};
    use async_trait::async_trait;
    use std::time::Duration;
    use tokio::sync::{mpsc, Notify};

    /// Source whose school fetch blocks until released, to prove the score
    /// fetch does not wait on it.
    struct GatedSource {
        release_schools: Arc<Notify>,
    }

    #[async_trait]
    impl DataSource for GatedSource {
        async fn fetch_schools(&self) -> Result<Decoded<School>> {
            self.release_schools.notified().await;
            Ok(Decoded {
                records: vec![School {
                    dbn: "01M292".to_string(),
                    school_name: "Henry Street School".to_string(),
                    overview_paragraph: String::new(),
                }],
                rejected: 0,
            })
        }

        async fn fetch_scores(&self) -> Result<Decoded<SatScore>> {
            Err(SchoolsError::fetch(Dataset::SatScores, "HTTP status 500"))
        }
    }

    #[tokio::test]
    async fn fetches_complete_independently() {
        let release = Arc::new(Notify::new());
        let source: Arc<dyn DataSource> = Arc::new(GatedSource {
            release_schools: Arc::clone(&release),
        });
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _loaders = spawn_loaders(source, tx);

        let first = tokio::time::timeout(Duration::from_millis(500), rx.recv())
            .await
            .expect("score fetch should not wait for schools")
            .unwrap();
        assert!(matches!(first, LoadEvent::Scores(Err(_))));

        release.notify_one();
        let second = tokio::time::timeout(Duration::from_millis(500), rx.recv())
            .await
            .unwrap()
            .unwrap();
        match second {
            LoadEvent::Schools(Ok(decoded)) => assert_eq!(decoded.records.len(), 1),
            other => panic!("unexpected event: {other:?}"),
        }

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn abort_stops_pending_fetches() {
        let release = Arc::new(Notify::new());
        let source: Arc<dyn DataSource> = Arc::new(GatedSource {
            release_schools: release,
        });
        let (tx, mut rx) = mpsc::unbounded_channel();
        let loaders = spawn_loaders(source, tx);

        // Scores resolve immediately; schools would hang forever.
        assert!(matches!(rx.recv().await, Some(LoadEvent::Scores(_))));
        loaders.abort();
        assert!(rx.recv().await.is_none());
    }
}
