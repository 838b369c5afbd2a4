use std::{fmt, path::Path};

/// The three supported file kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// Event markers (`.Nev`)
    Event,
    /// Video tracker positions (`.p`)
    Position,
    /// Continuously sampled signal (`.Ncs`)
    Continuous,
}

impl FileFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Event => "nev",
            Self::Position => "p",
            Self::Continuous => "ncs",
        }
    }

    /// Detect the format from a file extension, ignoring case.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "nev" => Some(Self::Event),
            "p" => Some(Self::Position),
            "ncs" => Some(Self::Continuous),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::Position => "position",
            Self::Continuous => "continuous",
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
