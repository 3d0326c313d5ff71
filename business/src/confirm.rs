//! Action-confirmation coordinator.
//!
//! Every destructive row action (delete, role change, status toggle) funnels
//! through one shared confirmation dialog. Staging an action records what
//! will happen and to whom; confirming dispatches `ConfirmActionCommand`,
//! which performs the remote call and publishes the outcome through
//! [`UserActionCompute`] for the UI poll step to turn into a toast.
//!
//! The dialog is a small state machine with two fields: the staged action
//! and visibility. Cancel only hides the dialog; staged data survives so a
//! retry or a fresh `stage` always overwrites rather than merges.

use std::any::Any;

use fincontrol_states::{Command, CommandSnapshot, State, StateCtx, Updater};
use log::{error, info, warn};

use crate::notifications::Severity;
use crate::users::{self, UpdateRoleRequest, UpdateStatusRequest, UserItem, UserStatus};
use crate::BusinessConfig;

/// The kind of row action awaiting confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Delete,
    ChangeRole,
    ToggleStatus,
}

impl ActionKind {
    /// Dialog title for this action.
    pub fn title(self) -> &'static str {
        match self {
            Self::Delete => "Delete User",
            Self::ChangeRole => "Change Role",
            Self::ToggleStatus => "Activate/Deactivate User",
        }
    }

    /// Dialog body for this action.
    pub fn description(self) -> &'static str {
        match self {
            Self::Delete => "Confirm permanent deletion of this user.",
            Self::ChangeRole => "Confirm role change for this user.",
            Self::ToggleStatus => "Confirm status change for this user.",
        }
    }
}

/// A staged action carrying exactly the data its branch needs.
///
/// Delete only needs the id; the two toggle branches need the full row
/// snapshot to compute the flip direction without re-fetching.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingAction {
    Delete { user_id: i64 },
    ChangeRole { user: UserItem },
    ToggleStatus { user: UserItem },
}

impl PendingAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::Delete { .. } => ActionKind::Delete,
            Self::ChangeRole { .. } => ActionKind::ChangeRole,
            Self::ToggleStatus { .. } => ActionKind::ToggleStatus,
        }
    }

    pub fn user_id(&self) -> i64 {
        match self {
            Self::Delete { user_id } => *user_id,
            Self::ChangeRole { user } | Self::ToggleStatus { user } => user.user_id,
        }
    }
}

/// The shared confirmation dialog state.
#[derive(Debug, Clone, Default)]
pub struct ConfirmDialog {
    pending: Option<PendingAction>,
    open: bool,
}

impl ConfirmDialog {
    /// Stage an action and open the dialog. Overwrites any previously
    /// staged action wholesale.
    pub fn stage(&mut self, action: PendingAction) {
        info!(
            "staging {:?} for user {}",
            action.kind(),
            action.user_id()
        );
        self.pending = Some(action);
        self.open = true;
    }

    /// Hide the dialog. Staged data is intentionally retained.
    pub fn cancel(&mut self) {
        self.open = false;
    }

    /// Hide the dialog after a settled success.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn pending(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    /// Title for the currently staged action, if any.
    pub fn title(&self) -> Option<&'static str> {
        self.pending.as_ref().map(|p| p.kind().title())
    }

    /// Description for the currently staged action, if any.
    pub fn description(&self) -> Option<&'static str> {
        self.pending.as_ref().map(|p| p.kind().description())
    }
}

impl State for ConfirmDialog {
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

/// How the last confirmed action settled.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ActionOutcome {
    /// No action attempted or the last outcome was already consumed.
    #[default]
    Idle,
    /// A confirm is running; further confirms are ignored until it settles.
    InFlight(ActionKind),
    Succeeded {
        kind: ActionKind,
        message: String,
        severity: Severity,
    },
    Failed {
        kind: ActionKind,
        message: String,
    },
}

/// Cache for the latest confirmed-action outcome.
///
/// Updated by `ConfirmActionCommand` via `Updater::set`; the UI poll step
/// consumes settled outcomes exactly once (toast + dialog close + refresh)
/// and resets it to `Idle`.
#[derive(Debug, Clone, Default)]
pub struct UserActionCompute {
    pub outcome: ActionOutcome,
}

impl UserActionCompute {
    pub fn is_in_flight(&self) -> bool {
        matches!(self.outcome, ActionOutcome::InFlight(_))
    }

    pub fn reset(&mut self) {
        self.outcome = ActionOutcome::Idle;
    }
}

impl State for UserActionCompute {
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

/// Confirm the staged action.
///
/// This is the sole entry point for confirming: it checks the live
/// [`UserActionCompute`] on the UI thread and marks the action in flight
/// *before* dispatching, so two confirms in the same frame (a double-click
/// before any sync) cannot both submit. Re-entry while a call is in flight
/// is a logged no-op, as is confirming with nothing staged.
pub fn confirm_staged_action(ctx: &mut StateCtx) {
    if ctx.state_ref::<UserActionCompute>().is_in_flight() {
        info!("confirm ignored: action already in flight");
        return;
    }
    let Some(kind) = ctx
        .state_ref::<ConfirmDialog>()
        .pending()
        .map(PendingAction::kind)
    else {
        warn!("confirm ignored: nothing staged");
        return;
    };

    // Mark in flight synchronously; the command snapshot carries the mark.
    ctx.state_mut::<UserActionCompute>().outcome = ActionOutcome::InFlight(kind);
    ctx.dispatch::<ConfirmActionCommand>();
}

/// Manual-only command that executes the staged action.
///
/// Always dispatched through [`confirm_staged_action`], which marks the
/// action in flight first; a snapshot without that mark means the command
/// was dispatched out of band and it refuses to run.
#[derive(Default, Debug)]
pub struct ConfirmActionCommand;

impl Command for ConfirmActionCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        _cancel: tokio_util::sync::CancellationToken,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()> + Send>> {
        let dialog: ConfirmDialog = snap.state::<ConfirmDialog>();
        let compute: UserActionCompute = snap.state::<UserActionCompute>();
        let config: BusinessConfig = snap.state::<BusinessConfig>();

        Box::pin(async move {
            let Some(action) = dialog.pending().cloned() else {
                warn!("ConfirmActionCommand: nothing staged, skipping");
                return;
            };

            let kind = action.kind();
            // Backstop for out-of-band dispatches: only run when
            // `confirm_staged_action` marked this exact action in flight.
            if compute.outcome != ActionOutcome::InFlight(kind) {
                info!("ConfirmActionCommand: dispatched without in-flight mark, skipping");
                return;
            }

            info!(
                "ConfirmActionCommand: confirming {:?} for user {}",
                kind,
                action.user_id()
            );

            let api_url = config.api_url();
            let outcome = match action {
                PendingAction::Delete { user_id } => {
                    match users::api::delete_user(&api_url, user_id).await {
                        Ok(response) => ActionOutcome::Succeeded {
                            kind,
                            message: response.message,
                            severity: Severity::Success,
                        },
                        Err(e) => ActionOutcome::Failed {
                            kind,
                            message: e.to_string(),
                        },
                    }
                }
                PendingAction::ChangeRole { user } => {
                    let request = UpdateRoleRequest {
                        user_id: user.user_id,
                        role_id: user.role.toggled().role_id(),
                    };
                    match users::api::update_role(&api_url, &request).await {
                        Ok(()) => ActionOutcome::Succeeded {
                            kind,
                            message: "Role changed successfully.".to_string(),
                            severity: Severity::Success,
                        },
                        Err(e) => ActionOutcome::Failed {
                            kind,
                            message: e.to_string(),
                        },
                    }
                }
                PendingAction::ToggleStatus { user } => {
                    let new_status = user.status.toggled();
                    let request = UpdateStatusRequest {
                        user_id: user.user_id,
                        status: new_status,
                    };
                    match users::api::update_status(&api_url, &request).await {
                        Ok(()) => {
                            let (message, severity) = match new_status {
                                UserStatus::Inactive => {
                                    ("User deactivated successfully.", Severity::Warning)
                                }
                                UserStatus::Active => {
                                    ("User activated successfully.", Severity::Success)
                                }
                            };
                            ActionOutcome::Succeeded {
                                kind,
                                message: message.to_string(),
                                severity,
                            }
                        }
                        Err(e) => ActionOutcome::Failed {
                            kind,
                            message: e.to_string(),
                        },
                    }
                }
            };

            if let ActionOutcome::Failed { ref message, .. } = outcome {
                error!("ConfirmActionCommand: {kind:?} failed: {message}");
            }

            updater.set(UserActionCompute { outcome });
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::Role;

    fn user(id: i64, role: Role, status: UserStatus) -> UserItem {
        UserItem {
            user_id: id,
            name: format!("user{id}"),
            email: format!("user{id}@example.com"),
            role,
            status,
        }
    }

    #[test]
    fn copy_lookup_matches_action_kind() {
        assert_eq!(ActionKind::Delete.title(), "Delete User");
        assert_eq!(
            ActionKind::Delete.description(),
            "Confirm permanent deletion of this user."
        );
        assert_eq!(ActionKind::ChangeRole.title(), "Change Role");
        assert_eq!(
            ActionKind::ChangeRole.description(),
            "Confirm role change for this user."
        );
        assert_eq!(
            ActionKind::ToggleStatus.title(),
            "Activate/Deactivate User"
        );
        assert_eq!(
            ActionKind::ToggleStatus.description(),
            "Confirm status change for this user."
        );
    }

    #[test]
    fn stage_opens_dialog_with_derived_copy() {
        let mut dialog = ConfirmDialog::default();
        assert!(!dialog.is_open());

        dialog.stage(PendingAction::Delete { user_id: 7 });
        assert!(dialog.is_open());
        assert_eq!(dialog.title(), Some("Delete User"));
        assert_eq!(
            dialog.description(),
            Some("Confirm permanent deletion of this user.")
        );
        assert_eq!(dialog.pending().map(PendingAction::user_id), Some(7));
    }

    #[test]
    fn cancel_closes_but_keeps_staged_data() {
        let mut dialog = ConfirmDialog::default();
        dialog.stage(PendingAction::Delete { user_id: 7 });
        dialog.cancel();

        assert!(!dialog.is_open());
        assert_eq!(
            dialog.pending(),
            Some(&PendingAction::Delete { user_id: 7 })
        );
    }

    #[test]
    fn restaging_overwrites_prior_action_wholesale() {
        let mut dialog = ConfirmDialog::default();
        dialog.stage(PendingAction::Delete { user_id: 7 });
        dialog.cancel();

        let target = user(3, Role::Admin, UserStatus::Active);
        dialog.stage(PendingAction::ChangeRole {
            user: target.clone(),
        });

        assert!(dialog.is_open());
        assert_eq!(dialog.title(), Some("Change Role"));
        assert_eq!(
            dialog.pending(),
            Some(&PendingAction::ChangeRole { user: target })
        );
    }

    #[test]
    fn pending_action_exposes_target_id() {
        let target = user(11, Role::Manager, UserStatus::Inactive);
        assert_eq!(
            PendingAction::ToggleStatus { user: target }.user_id(),
            11
        );
        assert_eq!(PendingAction::Delete { user_id: 4 }.user_id(), 4);
    }

    #[test]
    fn in_flight_guard_reflects_outcome() {
        let mut compute = UserActionCompute::default();
        assert!(!compute.is_in_flight());

        compute.outcome = ActionOutcome::InFlight(ActionKind::Delete);
        assert!(compute.is_in_flight());

        compute.reset();
        assert_eq!(compute.outcome, ActionOutcome::Idle);
    }
}
