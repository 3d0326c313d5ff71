//! Roster loading: compute-shaped cache + manual-only fetch command.
//!
//! `RosterCompute` stores the latest fetch status/result and is updated by
//! `LoadUsersCommand` via `Updater::set`; the normal `StateCtx::sync()` path
//! applies it on the next frame.

use std::any::Any;

use fincontrol_states::{Command, CommandSnapshot, State, Updater};
use log::{error, info};

use crate::users::{self, UserItem};
use crate::BusinessConfig;

/// Result of the last roster fetch.
#[derive(Debug, Clone, Default)]
pub enum RosterResult {
    /// No fetch attempted yet.
    #[default]
    Idle,
    /// Fetch in progress.
    Pending,
    /// Full roster, in service order.
    Success(Vec<UserItem>),
    /// Fetch failed with an error message.
    Error(String),
}

/// Cache for the user roster shown on the admin screen.
#[derive(Default, Debug, Clone)]
pub struct RosterCompute {
    pub result: RosterResult,
}

impl RosterCompute {
    pub fn users(&self) -> Option<&[UserItem]> {
        if let RosterResult::Success(ref users) = self.result {
            Some(users)
        } else {
            None
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        if let RosterResult::Error(ref msg) = self.result {
            Some(msg)
        } else {
            None
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.result, RosterResult::Pending)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.result, RosterResult::Idle)
    }
}

impl State for RosterCompute {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Box<dyn Any + Send> {
        Box::new(self.clone())
    }
}

/// Manual-only command that fetches the roster.
///
/// Dispatch explicitly via `ctx.dispatch::<LoadUsersCommand>()`. Dispatched
/// again after every successful row action so the table reflects the server.
#[derive(Default, Debug)]
pub struct LoadUsersCommand;

impl Command for LoadUsersCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        _cancel: tokio_util::sync::CancellationToken,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()> + Send>> {
        let roster: RosterCompute = snap.state::<RosterCompute>();
        let config: BusinessConfig = snap.state::<BusinessConfig>();

        Box::pin(async move {
            if roster.is_pending() {
                info!("LoadUsersCommand: fetch already in progress, skipping");
                return;
            }

            updater.set(RosterCompute {
                result: RosterResult::Pending,
            });

            match users::api::list_all_users(&config.api_url()).await {
                Ok(users) => {
                    info!("LoadUsersCommand: fetched {} users", users.len());
                    updater.set(RosterCompute {
                        result: RosterResult::Success(users),
                    });
                }
                Err(e) => {
                    error!("LoadUsersCommand: fetch failed: {e}");
                    updater.set(RosterCompute {
                        result: RosterResult::Error(e.to_string()),
                    });
                }
            }
        })
    }
}
