//! Load failures for the portfolio record

/// Which keyed collection a duplicate title was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    SkillCategories,
    Skills,
    Projects,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::SkillCategories => "skill categories",
            Collection::Skills => "skills",
            Collection::Projects => "projects",
        }
    }
}

/// Why the portfolio record could not be loaded
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    /// The fetch promise rejected (offline, blocked, bad URL)
    Fetch(String),
    /// The asset was reached but the server answered with a non-2xx status
    Status(u16),
    /// The body was not a valid portfolio record
    Parse(String),
    /// Two entries in a keyed collection share a title
    DuplicateTitle {
        collection: Collection,
        title: String,
    },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Fetch(msg) => write!(f, "could not fetch portfolio data: {}", msg),
            LoadError::Status(code) => write!(f, "portfolio data request failed with HTTP {}", code),
            LoadError::Parse(msg) => write!(f, "portfolio data is malformed: {}", msg),
            LoadError::DuplicateTitle { collection, title } => {
                write!(f, "duplicate title {:?} in {}", title, collection.as_str())
            }
        }
    }
}

impl std::error::Error for LoadError {}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}
