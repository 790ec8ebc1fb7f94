//! Async driver for the shell state machine.
//!
//! Runs the reducer in a single task; UI interaction stays responsive while
//! loads are in flight. Each load is spawned tagged with the key it was
//! issued for, and the reducer's key comparison discards any outcome
//! belonging to a superseded selection — in-flight work for an old key is not
//! aborted, its result is simply dropped on arrival.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};

use ideaboard_core::DateKey;
use ideaboard_store::{ArtifactStore, LoadError};

use crate::state::{reduce, ShellEvent, ShellState, ViewState};

const COMMAND_BUFFER: usize = 16;

/// Handle to a running shell.
///
/// Cloneable; dropping every handle closes the command channel and shuts the
/// shell task down.
#[derive(Debug, Clone)]
pub struct ShellDriver {
    commands: mpsc::Sender<DateKey>,
    state: watch::Receiver<ShellState>,
}

impl ShellDriver {
    /// Spawns the shell task, immediately loading `initial`.
    ///
    /// `load_timeout` bounds every load; a stalled store surfaces as an
    /// errored view rather than an indefinite loading indicator.
    pub fn spawn<S>(store: Arc<S>, initial: DateKey, load_timeout: Duration) -> Self
    where
        S: ArtifactStore + 'static,
    {
        let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
        let (state_tx, state_rx) = watch::channel(ShellState::initial(initial));
        tokio::spawn(run_shell(store, initial, load_timeout, command_rx, state_tx));
        Self {
            commands: command_tx,
            state: state_rx,
        }
    }

    /// Selects a new date, superseding any in-flight load.
    pub async fn select_date(&self, key: DateKey) {
        // A closed channel means the shell task is gone; the watch receiver
        // keeps serving the last published state.
        let _ = self.commands.send(key).await;
    }

    /// The current shell state.
    #[must_use]
    pub fn state(&self) -> ShellState {
        self.state.borrow().clone()
    }

    /// A watch receiver for reactive consumers.
    #[must_use]
    pub fn watch(&self) -> watch::Receiver<ShellState> {
        self.state.clone()
    }

    /// Waits until the view for the current selection is no longer loading
    /// and returns it.
    pub async fn settled(&self) -> ShellState {
        let mut rx = self.state.clone();
        // Clone out of the watch ref before matching so the borrow of `rx`
        // ends with the wait, not the block.
        let result = rx
            .wait_for(|s| !matches!(s.view, ViewState::Loading))
            .await
            .map(|state| state.clone());
        match result {
            Ok(state) => state,
            Err(_) => self.state(),
        }
    }
}

async fn run_shell<S>(
    store: Arc<S>,
    initial: DateKey,
    load_timeout: Duration,
    mut commands: mpsc::Receiver<DateKey>,
    state_tx: watch::Sender<ShellState>,
) where
    S: ArtifactStore + 'static,
{
    let (result_tx, mut results) = mpsc::channel::<ShellEvent>(COMMAND_BUFFER);
    let mut state = ShellState::initial(initial);
    spawn_load(&store, initial, load_timeout, result_tx.clone());

    loop {
        let event = tokio::select! {
            command = commands.recv() => match command {
                Some(key) => {
                    spawn_load(&store, key, load_timeout, result_tx.clone());
                    ShellEvent::SelectDate(key)
                }
                None => break,
            },
            outcome = results.recv() => match outcome {
                Some(event) => event,
                None => break,
            },
        };

        state = reduce(&state, event);
        if state_tx.send(state.clone()).is_err() {
            break;
        }
    }
}

fn spawn_load<S>(
    store: &Arc<S>,
    key: DateKey,
    load_timeout: Duration,
    results: mpsc::Sender<ShellEvent>,
) where
    S: ArtifactStore + 'static,
{
    let store = Arc::clone(store);
    tokio::spawn(async move {
        let event = match tokio::time::timeout(load_timeout, store.load(key)).await {
            Ok(Ok(doc)) => ShellEvent::LoadSucceeded(key, doc),
            Ok(Err(error)) => ShellEvent::LoadFailed(key, error),
            Err(_) => ShellEvent::LoadFailed(key, LoadError::Timeout { key }),
        };
        let _ = results.send(event).await;
    });
}
