//! Core domain types shared across the assembly pipeline

use serde::{Deserialize, Serialize};

/// Preparer identity applied when the caller omits one.
pub const DEFAULT_PREPARER_NAME: &str = "Kevin Fuller";
pub const DEFAULT_PREPARER_EMAIL: &str = "k.fuller@avatarmsp.com";

/// Client the agreement is prepared for.
///
/// All fields are required and non-empty after trimming; validation happens
/// in the caller layer before the core runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientProfile {
    pub name: String,
    pub email: String,
    /// Possibly multi-line; see the injector for the split rules.
    pub address: String,
    pub phone: String,
}

/// Preparer identity; fixed defaults apply when a field is absent or blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparerProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl PreparerProfile {
    /// Preparer name, falling back to the fixed default.
    pub fn name(&self) -> &str {
        resolve(self.name.as_deref(), DEFAULT_PREPARER_NAME)
    }

    /// Preparer email, falling back to the fixed default.
    pub fn email(&self) -> &str {
        resolve(self.email.as_deref(), DEFAULT_PREPARER_EMAIL)
    }
}

fn resolve<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    match value {
        Some(value) if !value.trim().is_empty() => value.trim(),
        _ => default,
    }
}

/// Independent optional-service toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSelection {
    #[serde(default)]
    pub include_compliance: bool,
    #[serde(default)]
    pub include_security_plus: bool,
}

/// Billing basis for the engagement; exactly one variant per generation.
///
/// Counts are non-negative by type. Unit prices are caller-validated as
/// non-negative numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum PricingPlan {
    Workstation { count: u32, unit_price: f64 },
    User { count: u32, unit_price: f64 },
}

impl PricingPlan {
    pub fn count(&self) -> u32 {
        match self {
            Self::Workstation { count, .. } | Self::User { count, .. } => *count,
        }
    }

    pub fn unit_price(&self) -> f64 {
        match self {
            Self::Workstation { unit_price, .. } | Self::User { unit_price, .. } => *unit_price,
        }
    }

    /// Model name used in log lines.
    pub fn model_name(&self) -> &'static str {
        match self {
            Self::Workstation { .. } => "workstation",
            Self::User { .. } => "user",
        }
    }
}
