use std::fmt::{Display, Formatter, Result as FmtResult};

/// Role segment of a stored key: `<timestamp>_<role>_<filename>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactRole {
    Original,
    Processed,
    Package,
}

impl ArtifactRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactRole::Original => "original",
            ArtifactRole::Processed => "processed",
            ArtifactRole::Package => "package",
        }
    }
}

impl Display for ArtifactRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
