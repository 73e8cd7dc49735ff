use serde::{Serialize, Serializer};
use thiserror::Error;

/// Reasons a buffer is rejected before any output is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("Missing #include directive")]
    MissingInclude,

    #[error("Missing main function")]
    MissingMain,
}

/// Outcome of one simulated compile-and-run.
///
/// Output only exists on success and an error only on failure, so the two
/// are separate variants rather than optional fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationResult {
    Success { output: String },
    Failure { error: CompileError },
}

impl SimulationResult {
    pub fn success(&self) -> bool {
        matches!(self, SimulationResult::Success { .. })
    }

    pub fn output(&self) -> Option<&str> {
        match self {
            SimulationResult::Success { output } => Some(output),
            SimulationResult::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<CompileError> {
        match self {
            SimulationResult::Success { .. } => None,
            SimulationResult::Failure { error } => Some(*error),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            SimulationResult::Success { .. } => 0,
            SimulationResult::Failure { .. } => 1,
        }
    }
}

/// Flat wire shape: `{"success", "output" | "error", "exitCode"}`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireResult<'a> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    exit_code: i32,
}

impl Serialize for SimulationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WireResult {
            success: self.success(),
            output: self.output(),
            error: self.error().map(|e| e.to_string()),
            exit_code: self.exit_code(),
        }
        .serialize(serializer)
    }
}
