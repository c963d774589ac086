use crate::error::{Result, SchoolsError};
use crate::input::{InputAction, InputService};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// Spawn a blocking thread that collects terminal input and forwards actions onto a channel.
///
/// The thread ends when `shutdown` is set, when the receiver goes away, or when polling
/// the terminal fails; the failure is returned through the handle.
pub fn spawn_input_thread(
    tx: UnboundedSender<InputAction>,
    shutdown: Arc<AtomicBool>,
    poll_interval: Duration,
) -> JoinHandle<Result<()>> {
    let mut service = InputService::new();
    spawn_polling_thread(
        move |timeout| service.poll_actions(Some(timeout)),
        tx,
        shutdown,
        poll_interval,
    )
}

fn spawn_polling_thread<P>(
    mut poll: P,
    tx: UnboundedSender<InputAction>,
    shutdown: Arc<AtomicBool>,
    poll_interval: Duration,
) -> JoinHandle<Result<()>>
where
    P: FnMut(Duration) -> Result<Vec<InputAction>> + Send + 'static,
{
    std::thread::spawn(move || {
        while !shutdown.load(Ordering::SeqCst) {
            let actions = match poll(poll_interval) {
                Ok(actions) => actions,
                Err(err) => {
                    log::error!("input thread error: {err}");
                    return Err(err);
                }
            };
            for action in actions {
                if tx.send(action).is_err() {
                    return Ok(());
                }
            }
        }
        Ok(())
    })
}

/// Wait for the input thread and surface how it ended.
pub fn join_input_thread(handle: JoinHandle<Result<()>>) -> Result<()> {
    handle
        .join()
        .map_err(|_| SchoolsError::other("input thread panicked"))?
}
