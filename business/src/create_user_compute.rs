//! Create-user form: input state, validation, compute cache, command.
//!
//! New accounts are always created with the manager role; promotion to
//! admin happens afterwards through the row actions.

use std::any::Any;

use fincontrol_states::{Command, CommandSnapshot, State, Updater};
use log::{error, info};

use crate::users::{self, CreateUserRequest, Role};
use crate::BusinessConfig;

/// Inputs for the create-user modal. Set before dispatching
/// `CreateUserCommand`.
#[derive(Default, Debug, Clone)]
pub struct CreateUserInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl CreateUserInput {
    /// Validate the form. Returns the first problem found, or `None`
    /// when the input is submittable.
    pub fn validate(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            return Some("Name is required.");
        }
        if !self.email.contains('@') || self.email.trim().is_empty() {
            return Some("A valid e-mail is required.");
        }
        if self.password.len() < 3 {
            return Some("Password must be at least 3 characters.");
        }
        if self.password != self.confirm_password {
            return Some("Passwords do not match.");
        }
        None
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl State for CreateUserInput {
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

/// Result of the last create-user attempt.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CreateUserResult {
    #[default]
    Idle,
    Pending,
    Success(String),
    Error(String),
}

/// Cache for the latest create-user status, updated by `CreateUserCommand`.
#[derive(Default, Debug, Clone)]
pub struct CreateUserCompute {
    pub result: CreateUserResult,
}

impl CreateUserCompute {
    pub fn is_pending(&self) -> bool {
        matches!(self.result, CreateUserResult::Pending)
    }

    pub fn reset(&mut self) {
        self.result = CreateUserResult::Idle;
    }
}

impl State for CreateUserCompute {
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

/// Manual-only command that posts the new account.
#[derive(Default, Debug)]
pub struct CreateUserCommand;

impl Command for CreateUserCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        _cancel: tokio_util::sync::CancellationToken,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()> + Send>> {
        let input: CreateUserInput = snap.state::<CreateUserInput>();
        let compute: CreateUserCompute = snap.state::<CreateUserCompute>();
        let config: BusinessConfig = snap.state::<BusinessConfig>();

        Box::pin(async move {
            if compute.is_pending() {
                info!("CreateUserCommand: creation already in progress, skipping");
                return;
            }

            if let Some(problem) = input.validate() {
                updater.set(CreateUserCompute {
                    result: CreateUserResult::Error(problem.to_string()),
                });
                return;
            }

            info!("CreateUserCommand: creating user '{}'", input.name.trim());
            updater.set(CreateUserCompute {
                result: CreateUserResult::Pending,
            });

            let request = CreateUserRequest {
                name: input.name.trim().to_string(),
                email: input.email.trim().to_string(),
                password: input.password.clone(),
                role_id: Role::Manager.role_id(),
            };

            match users::api::create_user(&config.api_url(), &request).await {
                Ok(()) => {
                    info!("CreateUserCommand: user '{}' created", request.name);
                    updater.set(CreateUserCompute {
                        result: CreateUserResult::Success(
                            "User created successfully.".to_string(),
                        ),
                    });
                }
                Err(e) => {
                    error!("CreateUserCommand: creation failed: {e}");
                    updater.set(CreateUserCompute {
                        result: CreateUserResult::Error(e.to_string()),
                    });
                }
            }
        })
    }
}
