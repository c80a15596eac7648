use serde::{Deserialize, Serialize};

/// Canonical internship lifecycle. The legacy application stored a free-text
/// column with French/English/accented spellings of these; parsing accepts
/// the old variants, storage and the API only ever emit the canonical names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InternshipStatus {
    Proposed,
    InProgress,
    Finished,
    Refused,
    Validated,
    Rejected,
}

impl InternshipStatus {
    pub const ALL: [InternshipStatus; 6] = [
        InternshipStatus::Proposed,
        InternshipStatus::InProgress,
        InternshipStatus::Finished,
        InternshipStatus::Refused,
        InternshipStatus::Validated,
        InternshipStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InternshipStatus::Proposed => "Proposed",
            InternshipStatus::InProgress => "InProgress",
            InternshipStatus::Finished => "Finished",
            InternshipStatus::Refused => "Refused",
            InternshipStatus::Validated => "Validated",
            InternshipStatus::Rejected => "Rejected",
        }
    }

    /// The single transition table. Every status write in the system goes
    /// through this check; no endpoint gets its own idea of the lifecycle.
    ///
    /// Proposed → InProgress → Finished | Refused, then
    /// Finished → Validated | Rejected (department-head counter-validation).
    pub fn can_transition_to(&self, next: InternshipStatus) -> bool {
        use InternshipStatus::*;
        matches!(
            (self, next),
            (Proposed, InProgress)
                | (InProgress, Finished)
                | (InProgress, Refused)
                | (Finished, Validated)
                | (Finished, Rejected)
        )
    }

    /// Terminal states accept no further transitions in normal flow.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            InternshipStatus::Refused | InternshipStatus::Validated | InternshipStatus::Rejected
        )
    }
}

impl std::fmt::Display for InternshipStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown internship status: {0}")]
pub struct UnknownStatus(pub String);

impl std::str::FromStr for InternshipStatus {
    type Err = UnknownStatus;

    /// Accepts the canonical names plus every spelling the legacy data
    /// actually contains (see the normalize migration).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use InternshipStatus::*;
        match s.trim() {
            "Proposed" | "Proposé" | "En attente" => Ok(Proposed),
            "InProgress" | "In Progress" | "En cours" | "En Cours" => Ok(InProgress),
            "Finished" | "Terminé" => Ok(Finished),
            "Refused" | "Refusé" => Ok(Refused),
            "Validated" | "Validé" | "Accepted" => Ok(Validated),
            "Rejected" | "Non validé" => Ok(Rejected),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}
