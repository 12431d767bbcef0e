//! Check definitions.
//!
//! A [`Check`] is a name, a unit of work, the [`Requirement`]s it needs from
//! the [`RunContext`], and two flags: `gating` (a failure halts the run) and an
//! optional hint shown when it fails.

use std::fmt;

use tracing::debug;

use crate::http::CallError;

use super::context::RunContext;

/// What a check needs from earlier checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// A bearer credential from a login check.
    Credential,
    /// The authenticated principal's id.
    PrincipalId,
    /// A named value stored by an earlier check.
    Value(String),
}

impl Requirement {
    /// Requirement on a stored value.
    pub fn value(key: impl Into<String>) -> Self {
        Self::Value(key.into())
    }

    /// Whether the context satisfies this requirement.
    pub fn is_met(&self, ctx: &RunContext) -> bool {
        match self {
            Self::Credential => ctx.credential().is_some(),
            Self::PrincipalId => ctx.principal_id().is_some(),
            Self::Value(key) => ctx.value(key).is_some(),
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Credential => write!(f, "credential from a successful login"),
            Self::PrincipalId => write!(f, "authenticated user id"),
            Self::Value(key) => write!(f, "'{}' from an earlier check", key),
        }
    }
}

/// What a check's unit of work reports.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    /// Whether the check passed.
    pub passed: bool,
    /// Human-readable detail.
    pub details: String,
    /// Error message for failures.
    pub error: Option<String>,
    /// A failure that stops the run even when the check is not gating.
    pub halts: bool,
}

impl CheckOutcome {
    /// A passing outcome.
    pub fn pass(details: impl Into<String>) -> Self {
        Self {
            passed: true,
            details: details.into(),
            error: None,
            halts: false,
        }
    }

    /// A failing outcome with no detail.
    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            passed: false,
            details: String::new(),
            error: Some(error.into()),
            halts: false,
        }
    }

    /// A failure nothing after it can recover from.
    ///
    /// Use on non-gating checks that only stop the run for some failures.
    pub fn fail_and_halt(error: impl Into<String>) -> Self {
        Self {
            halts: true,
            ..Self::fail(error)
        }
    }

    /// A failing outcome that still has something useful to say.
    pub fn fail_with_details(details: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            passed: false,
            details: details.into(),
            error: Some(error.into()),
            halts: false,
        }
    }
}

impl From<CallError> for CheckOutcome {
    fn from(err: CallError) -> Self {
        Self::fail(err.to_string())
    }
}

/// Boxed unit of work.
pub type CheckUnit<'a> =
    Box<dyn FnMut(&mut RunContext) -> Result<CheckOutcome, CallError> + 'a>;

/// A named check in a run plan.
pub struct Check<'a> {
    name: String,
    requires: Vec<Requirement>,
    gating: bool,
    hint: Option<String>,
    unit: CheckUnit<'a>,
}

impl<'a> Check<'a> {
    /// Create a check from a unit of work.
    pub fn new(
        name: impl Into<String>,
        unit: impl FnMut(&mut RunContext) -> Result<CheckOutcome, CallError> + 'a,
    ) -> Self {
        Self {
            name: name.into(),
            requires: Vec::new(),
            gating: false,
            hint: None,
            unit: Box::new(unit),
        }
    }

    /// Add a requirement.
    pub fn requires(mut self, requirement: Requirement) -> Self {
        self.requires.push(requirement);
        self
    }

    /// Halt the run if this check fails.
    pub fn gating(mut self) -> Self {
        self.gating = true;
        self
    }

    /// Suggestion shown when this check fails.
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Check name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a failure halts the run.
    pub fn is_gating(&self) -> bool {
        self.gating
    }

    /// Failure hint.
    pub fn hint_text(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// Declared requirements.
    pub fn requirements(&self) -> &[Requirement] {
        &self.requires
    }

    /// First requirement the context does not satisfy.
    pub fn missing_requirement(&self, ctx: &RunContext) -> Option<&Requirement> {
        self.requires.iter().find(|r| !r.is_met(ctx))
    }

    /// Run the unit, folding call errors into a failing outcome.
    pub(crate) fn execute(&mut self, ctx: &mut RunContext) -> CheckOutcome {
        match (self.unit)(ctx) {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!(
                    check = %self.name,
                    unreachable = err.is_connectivity(),
                    error = %err,
                    "Check call failed"
                );
                CheckOutcome::from(err)
            }
        }
    }
}

impl fmt::Debug for Check<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("name", &self.name)
            .field("requires", &self.requires)
            .field("gating", &self.gating)
            .field("hint", &self.hint)
            .finish_non_exhaustive()
    }
}
