use anyhow::*;
use parking_lot::RwLock;
use std::sync::Arc;
use std::thread;

use crate::game::session::SessionId;

#[derive(Clone, Debug)]
pub enum FetchState<T> {
    InProgress,
    Success(T),
    Failure(String),
}

/// Poll handle for work running on a worker thread, tagged with the session
/// the work was spawned for. Completions for a stale session are discarded.
pub struct FetchHandle<T> {
    session_id: SessionId,
    state: Arc<RwLock<FetchState<T>>>,
}

impl<T: Send + Sync + 'static> FetchHandle<T> {
    pub fn spawn<F>(session_id: SessionId, task: F) -> Self
    where
        F: FnOnce() -> Result<T> + Send + 'static,
    {
        let state = Arc::new(RwLock::new(FetchState::InProgress));
        let task_state = Arc::clone(&state);
        thread::spawn(move || {
            let outcome = match task() {
                Result::Ok(value) => FetchState::Success(value),
                Err(e) => FetchState::Failure(format!("{:#}", e)),
            };
            *task_state.write() = outcome;
        });
        FetchHandle { session_id, state }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }
}

impl<T: Clone> FetchHandle<T> {
    pub fn get_state(&self) -> FetchState<T> {
        self.state.read().clone()
    }
}
