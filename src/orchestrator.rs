use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{error, info};

use crate::client::UsersClient;
use crate::view::{Surface, ViewState};

/// Drives one fetch-and-render pass per `run` call. One orchestrator serves
/// one trigger; independent triggers (page loads) each get their own and only
/// share the HTTP client.
pub struct Orchestrator {
    client: Arc<UsersClient>,
    // Held for the whole pass so overlapping runs of this trigger go one
    // after another.
    in_flight: Mutex<()>,
}

impl Orchestrator {
    pub fn new(client: Arc<UsersClient>) -> Self {
        Self {
            client,
            in_flight: Mutex::new(()),
        }
    }

    /// Present Loading, fetch, then present either Populated or Error.
    /// Returns the terminal state.
    pub async fn run<S>(&self, surface: &mut S) -> ViewState
    where
        S: Surface + ?Sized,
    {
        let _guard = self.in_flight.lock().await;

        surface.present(&ViewState::Loading);

        let state = match self.client.fetch_users().await {
            Ok(users) => {
                info!(count = users.len(), endpoint = %self.client.endpoint(), "fetched users");
                ViewState::Populated(users)
            }
            Err(err) => {
                error!(error = %err, endpoint = %self.client.endpoint(), "fetch error");
                ViewState::failed(&err)
            }
        };

        surface.present(&state);
        state
    }
}
