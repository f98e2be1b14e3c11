//! Owner of the displayed search session
//!
//! Each submitted query gets a monotonically increasing generation. Starting a
//! new query cancels the previous one, and a result is only committed while
//! its generation is still the latest, so a slow stale search can never
//! overwrite a newer session.

use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::SearchAggregator;
use crate::modules::search::domain::SearchSession;

#[derive(Debug)]
struct InFlight {
    generation: u64,
    token: CancellationToken,
}

/// What happened to a submitted query
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The session is now the displayed one
    Committed(SearchSession),
    /// A newer query replaced this one before it finished
    Superseded { generation: u64 },
}

impl SearchOutcome {
    pub fn session(&self) -> Option<&SearchSession> {
        match self {
            SearchOutcome::Committed(session) => Some(session),
            SearchOutcome::Superseded { .. } => None,
        }
    }

    pub fn is_superseded(&self) -> bool {
        matches!(self, SearchOutcome::Superseded { .. })
    }
}

#[derive(Debug)]
pub struct SearchCoordinator {
    aggregator: Arc<SearchAggregator>,
    in_flight: Mutex<InFlight>,
    current: RwLock<SearchSession>,
}

impl SearchCoordinator {
    pub fn new(aggregator: Arc<SearchAggregator>) -> Self {
        Self {
            aggregator,
            in_flight: Mutex::new(InFlight {
                generation: 0,
                token: CancellationToken::new(),
            }),
            current: RwLock::new(SearchSession::default()),
        }
    }

    /// Run a search and display it unless a newer one was submitted meanwhile
    pub async fn submit(&self, query: &str) -> SearchOutcome {
        let (generation, token) = self.begin().await;
        let query = query.trim();

        if query.is_empty() {
            return self
                .commit(generation, SearchSession::empty("").with_generation(generation))
                .await;
        }

        self.mark_loading(generation, query).await;

        tokio::select! {
            _ = token.cancelled() => {
                debug!(generation, query = %query, "Search superseded before completion");
                SearchOutcome::Superseded { generation }
            }
            session = self.aggregator.unified_search(query) => {
                self.commit(generation, session.with_generation(generation)).await
            }
        }
    }

    /// Cancel anything in flight and show the cleared state
    pub async fn clear(&self) -> SearchSession {
        let (generation, _) = self.begin().await;
        let session = SearchSession::empty("").with_generation(generation);
        self.commit(generation, session.clone()).await;
        session
    }

    /// Snapshot of the displayed session
    pub async fn current(&self) -> SearchSession {
        self.current.read().await.clone()
    }

    /// Generation of the most recently submitted query
    pub async fn latest_generation(&self) -> u64 {
        self.in_flight.lock().await.generation
    }

    pub fn aggregator(&self) -> &SearchAggregator {
        &self.aggregator
    }

    async fn begin(&self) -> (u64, CancellationToken) {
        let mut in_flight = self.in_flight.lock().await;
        in_flight.token.cancel();
        in_flight.generation += 1;
        in_flight.token = CancellationToken::new();
        (in_flight.generation, in_flight.token.clone())
    }

    /// Keep the previous results visible while the new query loads
    async fn mark_loading(&self, generation: u64, query: &str) {
        let in_flight = self.in_flight.lock().await;
        if in_flight.generation != generation {
            return;
        }
        let mut current = self.current.write().await;
        current.query = query.to_string();
        current.loading = true;
    }

    async fn commit(&self, generation: u64, session: SearchSession) -> SearchOutcome {
        // Held across the write so no newer query can begin in between
        let in_flight = self.in_flight.lock().await;
        if in_flight.generation != generation {
            debug!(
                generation,
                latest = in_flight.generation,
                "Discarding stale search result"
            );
            return SearchOutcome::Superseded { generation };
        }

        let mut current = self.current.write().await;
        *current = session.clone();
        SearchOutcome::Committed(session)
    }
}
