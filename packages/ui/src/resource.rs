//! # Request status tracking
//!
//! Every screen that loads data walks the same four-state machine:
//!
//! ```text
//! Initial ──begin──▶ InProgress ──settle──▶ Success(T) | Failure(err)
//!                        ▲                        │
//!                        └────────── retry ───────┘
//! ```
//!
//! [`RequestState`] is the pure machine. [`use_async_resource`] binds it to a
//! Dioxus resource: the fetch closure is re-run whenever a signal it reads
//! changes, or when [`AsyncResource::retry`] is called. A re-run drops the
//! in-flight future, so a stale response never overwrites a newer one.

use std::future::Future;

use api::ApiError;
use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum RequestState<T> {
    Initial,
    InProgress,
    Success(T),
    Failure(ApiError),
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        RequestState::Initial
    }
}

impl<T> RequestState<T> {
    pub fn begin(&mut self) {
        *self = RequestState::InProgress;
    }

    pub fn settle(&mut self, outcome: Result<T, ApiError>) {
        *self = match outcome {
            Ok(value) => RequestState::Success(value),
            Err(err) => RequestState::Failure(err),
        };
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            RequestState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&ApiError> {
        match self {
            RequestState::Failure(err) => Some(err),
            _ => None,
        }
    }
}

/// What a list screen shows for its current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Empty,
    List,
    Failure,
}

impl<T> RequestState<Vec<T>> {
    pub fn list_view(&self) -> ListView {
        match self {
            RequestState::Initial | RequestState::InProgress => ListView::Loading,
            RequestState::Success(rows) if rows.is_empty() => ListView::Empty,
            RequestState::Success(_) => ListView::List,
            RequestState::Failure(_) => ListView::Failure,
        }
    }
}

/// Handle returned by [`use_async_resource`].
pub struct AsyncResource<T: 'static> {
    state: Signal<RequestState<T>>,
    task: Resource<()>,
}

impl<T: 'static> Clone for AsyncResource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for AsyncResource<T> {}

impl<T: Clone + 'static> AsyncResource<T> {
    pub fn state(&self) -> RequestState<T> {
        self.state.read().clone()
    }

    /// Re-issue the same fetch with the current inputs.
    pub fn retry(&mut self) {
        self.task.restart();
    }
}

/// Track `fetch` through a [`RequestState`].
///
/// Signals read while *building* the future (before the first `.await`)
/// become dependencies: changing one restarts the fetch.
pub fn use_async_resource<T, F, Fut>(mut fetch: F) -> AsyncResource<T>
where
    T: 'static,
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let mut state = use_signal(RequestState::<T>::default);
    let task = use_resource(move || {
        let request = fetch();
        async move {
            state.set(RequestState::InProgress);
            let outcome = request.await;
            if let Err(err) = &outcome {
                tracing::warn!("request failed: {err}");
            }
            state.write().settle(outcome);
        }
    });
    AsyncResource { state, task }
}
