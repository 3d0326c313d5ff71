//! Password recovery: input state, compute cache, command.

use std::any::Any;

use fincontrol_states::{Command, CommandSnapshot, State, Updater};
use log::{error, info};

use crate::users::{self, ForgotPasswordRequest};
use crate::BusinessConfig;

/// Input for the password recovery form.
#[derive(Default, Debug, Clone)]
pub struct ForgotPasswordInput {
    pub email: String,
}

impl ForgotPasswordInput {
    pub fn validate(&self) -> Option<&'static str> {
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Some("A valid e-mail is required.");
        }
        None
    }
}

impl State for ForgotPasswordInput {
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

/// Result of the last recovery request.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ForgotPasswordResult {
    #[default]
    Idle,
    Pending,
    Success(String),
    Error(String),
}

/// Cache for the latest recovery status, updated by `ForgotPasswordCommand`.
#[derive(Default, Debug, Clone)]
pub struct ForgotPasswordCompute {
    pub result: ForgotPasswordResult,
}

impl ForgotPasswordCompute {
    pub fn is_pending(&self) -> bool {
        matches!(self.result, ForgotPasswordResult::Pending)
    }

    pub fn reset(&mut self) {
        self.result = ForgotPasswordResult::Idle;
    }
}

impl State for ForgotPasswordCompute {
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

/// Manual-only command that requests the recovery e-mail.
#[derive(Default, Debug)]
pub struct ForgotPasswordCommand;

impl Command for ForgotPasswordCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        _cancel: tokio_util::sync::CancellationToken,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()> + Send>> {
        let input: ForgotPasswordInput = snap.state::<ForgotPasswordInput>();
        let compute: ForgotPasswordCompute = snap.state::<ForgotPasswordCompute>();
        let config: BusinessConfig = snap.state::<BusinessConfig>();

        Box::pin(async move {
            if compute.is_pending() {
                info!("ForgotPasswordCommand: request already in progress, skipping");
                return;
            }

            if let Some(problem) = input.validate() {
                updater.set(ForgotPasswordCompute {
                    result: ForgotPasswordResult::Error(problem.to_string()),
                });
                return;
            }

            let email = input.email.trim().to_string();
            info!("ForgotPasswordCommand: requesting recovery for '{email}'");
            updater.set(ForgotPasswordCompute {
                result: ForgotPasswordResult::Pending,
            });

            let request = ForgotPasswordRequest {
                email: email.clone(),
            };
            match users::api::forgot_password(&config.api_url(), &request).await {
                Ok(()) => {
                    info!("ForgotPasswordCommand: recovery e-mail requested");
                    updater.set(ForgotPasswordCompute {
                        result: ForgotPasswordResult::Success(format!(
                            "Password recovery e-mail sent to {email}."
                        )),
                    });
                }
                Err(e) => {
                    error!("ForgotPasswordCommand: request failed: {e}");
                    updater.set(ForgotPasswordCompute {
                        result: ForgotPasswordResult::Error(e.to_string()),
                    });
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_requires_plausible_email() {
        let empty = ForgotPasswordInput::default();
        assert_eq!(empty.validate(), Some("A valid e-mail is required."));

        let bad = ForgotPasswordInput {
            email: "nope".to_string(),
        };
        assert_eq!(bad.validate(), Some("A valid e-mail is required."));

        let ok = ForgotPasswordInput {
            email: "alice@example.com".to_string(),
        };
        assert_eq!(ok.validate(), None);
    }
}
