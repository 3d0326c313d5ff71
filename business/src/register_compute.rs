//! Profile completion form: currency parsing, input state, command.

use std::any::Any;

use fincontrol_states::{Command, CommandSnapshot, State, Updater};
use log::{error, info};

use crate::users::{self, RegisterRequest};
use crate::BusinessConfig;

/// Parse a Brazilian-formatted currency string such as `"R$ 1.234,56"`
/// into its numeric value. Thousands separators are dots, the decimal
/// separator is a comma. Returns `None` for empty or malformed input.
pub fn parse_currency(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    let normalized = cleaned.replace(',', ".");
    // More than one decimal separator means the input was malformed.
    if normalized.matches('.').count() > 1 {
        return None;
    }
    normalized.parse().ok()
}

/// Inputs for the profile completion form. Raw strings are kept as typed
/// so the text fields can round-trip; parsing happens at submit time.
#[derive(Default, Debug, Clone)]
pub struct RegisterInput {
    pub user_id: i64,
    pub cell: String,
    pub salary: String,
    pub others: String,
    /// Base64 photo payload, empty when none was picked.
    pub photo: String,
}

impl RegisterInput {
    /// Digits-only rendition of the cell field.
    pub fn cell_digits(&self) -> String {
        self.cell.chars().filter(char::is_ascii_digit).collect()
    }

    /// Validate and convert to the wire request.
    pub fn to_request(&self) -> Result<RegisterRequest, &'static str> {
        let cell = self.cell_digits();
        if cell.is_empty() {
            return Err("Cell number is required.");
        }
        let salary = parse_currency(&self.salary).ok_or("Salary must be a valid amount.")?;
        let others = if self.others.trim().is_empty() {
            0.0
        } else {
            parse_currency(&self.others).ok_or("Other income must be a valid amount.")?
        };
        Ok(RegisterRequest {
            user_id: self.user_id,
            cell,
            salary,
            others,
            photo: self.photo.clone(),
        })
    }
}

impl State for RegisterInput {
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

/// Result of the last register submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RegisterResult {
    #[default]
    Idle,
    Pending,
    Success(String),
    Error(String),
}

/// Cache for the latest register status, updated by `RegisterCommand`.
#[derive(Default, Debug, Clone)]
pub struct RegisterCompute {
    pub result: RegisterResult,
}

impl RegisterCompute {
    pub fn is_pending(&self) -> bool {
        matches!(self.result, RegisterResult::Pending)
    }

    pub fn reset(&mut self) {
        self.result = RegisterResult::Idle;
    }
}

impl State for RegisterCompute {
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

/// Manual-only command that submits the profile completion form.
#[derive(Default, Debug)]
pub struct RegisterCommand;

impl Command for RegisterCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        _cancel: tokio_util::sync::CancellationToken,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()> + Send>> {
        let input: RegisterInput = snap.state::<RegisterInput>();
        let compute: RegisterCompute = snap.state::<RegisterCompute>();
        let config: BusinessConfig = snap.state::<BusinessConfig>();

        Box::pin(async move {
            if compute.is_pending() {
                info!("RegisterCommand: submission already in progress, skipping");
                return;
            }

            let request = match input.to_request() {
                Ok(request) => request,
                Err(problem) => {
                    updater.set(RegisterCompute {
                        result: RegisterResult::Error(problem.to_string()),
                    });
                    return;
                }
            };

            info!("RegisterCommand: submitting register for user {}", request.user_id);
            updater.set(RegisterCompute {
                result: RegisterResult::Pending,
            });

            match users::api::create_register(&config.api_url(), &request).await {
                Ok(()) => {
                    info!("RegisterCommand: register submitted");
                    updater.set(RegisterCompute {
                        result: RegisterResult::Success(
                            "Registration completed successfully.".to_string(),
                        ),
                    });
                }
                Err(e) => {
                    error!("RegisterCommand: submission failed: {e}");
                    updater.set(RegisterCompute {
                        result: RegisterResult::Error(e.to_string()),
                    });
                }
            }
        })
    }
}
