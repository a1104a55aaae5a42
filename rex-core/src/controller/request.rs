//! src/controller/request.rs
//! ============================================================================
//! # Requests, responses and staleness tracking
//!
//! The navigator never performs I/O. Each operation that needs the backend
//! hands back a [`Request`] stamped with a [`Ticket`]; the event loop runs it
//! through [`execute`] and feeds the [`Response`] back. Every browse or
//! search supersedes all earlier ones, so only the newest listing ticket is
//! ever accepted.

use std::fmt;

use tracing::debug;

use crate::{
    api::client::{ExplorerApi, RemoteConfig},
    error::AppError,
    model::entry::DirectoryEntry,
};

/// Monotonic request id, unique per navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestKind {
    Config,
    Browse { path: String },
    Search { query: String, scope: String },
}

impl RequestKind {
    pub const fn is_listing(&self) -> bool {
        !matches!(self, Self::Config)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub ticket: Ticket,
    pub kind: RequestKind,
}

#[derive(Debug)]
pub enum Payload {
    Config(RemoteConfig),
    Listing(Vec<DirectoryEntry>),
}

#[derive(Debug)]
pub struct Response {
    pub request: Request,
    pub outcome: Result<Payload, AppError>,
}

impl Response {
    pub fn ok(request: Request, payload: Payload) -> Self {
        Self {
            request,
            outcome: Ok(payload),
        }
    }

    pub fn failed(request: Request, error: AppError) -> Self {
        Self {
            request,
            outcome: Err(error),
        }
    }
}

/// Performs `request` against the backend. This is the only place the
/// navigator's requests touch the network.
pub async fn execute(api: &dyn ExplorerApi, request: Request) -> Response {
    debug!("Executing request {} {:?}", request.ticket, request.kind);

    let outcome = match &request.kind {
        RequestKind::Config => api.fetch_config().await.map(Payload::Config),
        RequestKind::Browse { path } => api.browse(path).await.map(Payload::Listing),
        RequestKind::Search { query, scope } => {
            api.search(query, scope).await.map(Payload::Listing)
        }
    };

    Response { request, outcome }
}

/// Hands out tickets and remembers which ones are still wanted.
#[derive(Debug, Default)]
pub struct RequestTracker {
    last_issued: u64,
    pending_listing: Option<Ticket>,
    pending_config: Option<Ticket>,
}

impl RequestTracker {
    pub fn issue(&mut self, kind: RequestKind) -> Request {
        self.last_issued += 1;
        let ticket = Ticket(self.last_issued);

        let slot = if kind.is_listing() {
            &mut self.pending_listing
        } else {
            &mut self.pending_config
        };
        if let Some(superseded) = slot.replace(ticket) {
            debug!("Request {} superseded by {}", superseded, ticket);
        }

        Request { ticket, kind }
    }

    /// Claims the pending slot for `request` if it is still the newest of
    /// its kind. A claimed ticket is never accepted twice.
    pub fn accept(&mut self, request: &Request) -> bool {
        let slot = if request.kind.is_listing() {
            &mut self.pending_listing
        } else {
            &mut self.pending_config
        };

        if *slot == Some(request.ticket) {
            *slot = None;
            true
        } else {
            false
        }
    }

    pub const fn listing_in_flight(&self) -> bool {
        self.pending_listing.is_some()
    }

    pub const fn config_in_flight(&self) -> bool {
        self.pending_config.is_some()
    }
}
