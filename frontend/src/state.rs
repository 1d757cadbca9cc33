//! Load state for the events grid.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use event_types::EventRecord;
use yew::AttrValue;

use crate::data::featured_events;
use crate::services::api::{FetchError, API_EVENTS_URL};

/// Where the events section gets its records from.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EventSource {
    /// The built-in featured listing.
    #[default]
    Static,
    /// A JSON endpoint returning a `ListEventsResponse`.
    Remote(AttrValue),
}

impl EventSource {
    /// The remote listing served at [`API_EVENTS_URL`].
    pub fn remote_default() -> Self {
        EventSource::Remote(AttrValue::Static(API_EVENTS_URL))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded(Rc<Vec<EventRecord>>),
    Failed(String),
}

impl LoadState {
    /// Static sources start loaded; remote ones wait for their fetch.
    pub fn initial(source: &EventSource) -> Self {
        match source {
            EventSource::Static => LoadState::Loaded(Rc::new(featured_events())),
            EventSource::Remote(_) => LoadState::Idle,
        }
    }

    pub fn from_result(result: Result<Vec<EventRecord>, FetchError>) -> Self {
        match result {
            Ok(events) => LoadState::Loaded(Rc::new(events)),
            Err(e) => LoadState::Failed(e.to_string()),
        }
    }

    /// True while the skeleton should be shown.
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Idle | LoadState::Loading)
    }

    pub fn events(&self) -> Option<&[EventRecord]> {
        match self {
            LoadState::Loaded(events) => Some(events.as_slice()),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            LoadState::Idle => "idle",
            LoadState::Loading => "loading",
            LoadState::Loaded(_) => "loaded",
            LoadState::Failed(_) => "failed",
        }
    }
}

/// Drives one remote load through `set`: `Loading`, then `Loaded` or `Failed`.
///
/// The outcome is dropped if `cancelled` was raised while `fetch` was pending,
/// so a superseded request never overwrites a newer source's state.
pub async fn run_load<F, S>(fetch: F, cancelled: Rc<Cell<bool>>, set: S)
where
    F: Future<Output = Result<Vec<EventRecord>, FetchError>>,
    S: Fn(LoadState),
{
    set(LoadState::Loading);
    let result = fetch.await;

    if cancelled.get() {
        tracing::debug!("Discarding events from a superseded source");
        return;
    }

    match &result {
        Ok(events) => tracing::info!("Loaded {} events", events.len()),
        Err(e) => tracing::error!("Failed to fetch events: {:?}", e),
    }
    set(LoadState::from_result(result));
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use tokio::sync::oneshot;

    use super::*;

    #[test]
    fn test_static_source_starts_loaded() {
        let state = LoadState::initial(&EventSource::Static);
        assert!(!state.is_pending());
        assert_eq!(state.events().map(<[EventRecord]>::len), Some(3));
    }

    #[test]
    fn test_remote_source_starts_idle() {
        let state = LoadState::initial(&EventSource::Remote("/api/events".into()));
        assert_eq!(state, LoadState::Idle);
        assert!(state.is_pending());
        assert!(state.events().is_none());
    }

    #[test]
    fn test_loading_is_pending() {
        assert!(LoadState::Loading.is_pending());
        assert!(LoadState::Loading.events().is_none());
    }

    #[test]
    fn test_from_result_ok() {
        let state = LoadState::from_result(Ok(featured_events()[..1].to_vec()));
        let events = state.events().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "1");
    }

    #[test]
    fn test_from_result_err() {
        let state = LoadState::from_result(Err(FetchError::Status(500)));
        assert_eq!(state, LoadState::Failed("HTTP error: 500".to_string()));
        assert!(!state.is_pending());
        assert!(state.events().is_none());
    }

    #[test]
    fn test_default_source_is_static() {
        assert_eq!(EventSource::default(), EventSource::Static);
    }

    #[test]
    fn test_remote_default_uses_api_url() {
        assert_eq!(
            EventSource::remote_default(),
            EventSource::Remote("/api/events".into())
        );
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(LoadState::Idle.kind(), "idle");
        assert_eq!(LoadState::Loading.kind(), "loading");
        assert_eq!(LoadState::Failed("x".to_string()).kind(), "failed");
        assert_eq!(LoadState::initial(&EventSource::Static).kind(), "loaded");
    }

    fn recorder() -> (Rc<RefCell<Vec<LoadState>>>, impl Fn(LoadState)) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |next: LoadState| sink.borrow_mut().push(next))
    }

    #[tokio::test]
    async fn test_run_load_success() {
        let (seen, set) = recorder();
        let events = featured_events();
        let expected = events[1..].to_vec();

        run_load(
            async move { Ok(events[1..].to_vec()) },
            Rc::new(Cell::new(false)),
            set,
        )
        .await;

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], LoadState::Loading);
        assert_eq!(seen[1].events(), Some(expected.as_slice()));
    }

    #[tokio::test]
    async fn test_run_load_failure() {
        let (seen, set) = recorder();

        run_load(
            async { Err(FetchError::Status(503)) },
            Rc::new(Cell::new(false)),
            set,
        )
        .await;

        assert_eq!(
            *seen.borrow(),
            vec![
                LoadState::Loading,
                LoadState::Failed("HTTP error: 503".to_string())
            ]
        );
    }

    #[tokio::test]
    async fn test_run_load_drops_cancelled_response() {
        let (seen, set) = recorder();
        let cancelled = Rc::new(Cell::new(false));
        let flag = cancelled.clone();

        run_load(
            async move {
                flag.set(true);
                Ok(featured_events())
            },
            cancelled,
            set,
        )
        .await;

        assert_eq!(*seen.borrow(), vec![LoadState::Loading]);
    }

    #[tokio::test]
    async fn test_superseded_load_cannot_overwrite_newer_one() {
        let (seen, set) = recorder();
        let set = Rc::new(set);
        let (tx_old, rx_old) = oneshot::channel::<Vec<EventRecord>>();
        let (tx_new, rx_new) = oneshot::channel::<Vec<EventRecord>>();
        let old_cancelled = Rc::new(Cell::new(false));

        let old_load = run_load(
            async move { rx_old.await.map_err(|e| FetchError::Network(e.to_string())) },
            old_cancelled.clone(),
            {
                let set = set.clone();
                move |next: LoadState| set(next)
            },
        );
        let new_load = run_load(
            async move { rx_new.await.map_err(|e| FetchError::Network(e.to_string())) },
            Rc::new(Cell::new(false)),
            {
                let set = set.clone();
                move |next: LoadState| set(next)
            },
        );
        let switch_and_answer = async {
            // source changed: the first load is torn down, then both answer
            // with the stale one arriving last
            old_cancelled.set(true);
            tx_new.send(featured_events()[..1].to_vec()).unwrap();
            tx_old.send(featured_events()).unwrap();
        };

        tokio::join!(old_load, new_load, switch_and_answer);

        let seen = seen.borrow();
        let loaded: Vec<usize> = seen
            .iter()
            .filter_map(|state| state.events().map(<[EventRecord]>::len))
            .collect();
        assert_eq!(loaded, vec![1]);
        assert_eq!(
            seen.last().and_then(LoadState::events).map(<[EventRecord]>::len),
            Some(1)
        );
    }
}
