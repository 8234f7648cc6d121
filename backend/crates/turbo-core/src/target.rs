use crate::ModelMeta;

/// Reference to a persisted (or about to be persisted) record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelRef {
    pub meta: ModelMeta,
    pub pk: Option<i64>,
}

impl ModelRef {
    pub fn new(meta: ModelMeta, pk: Option<i64>) -> Self {
        Self { meta, pk }
    }
}

/// Something a broadcast can be addressed to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A record, addressed through its model metadata
    Model(ModelRef),
    /// A literal channel name not backed by a model
    Channel(String),
}

impl Target {
    pub fn model(meta: ModelMeta, pk: Option<i64>) -> Self {
        Self::Model(ModelRef::new(meta, pk))
    }

    pub fn channel(name: impl Into<String>) -> Self {
        Self::Channel(name.into())
    }
}

impl From<&str> for Target {
    fn from(name: &str) -> Self {
        Self::Channel(name.to_string())
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Model(ModelRef { meta, pk: Some(pk) }) => write!(f, "{}#{}", meta, pk),
            Self::Model(ModelRef { meta, pk: None }) => write!(f, "{}#unsaved", meta),
            Self::Channel(name) => write!(f, "channel:{}", name),
        }
    }
}
