use crate::Target;

/// A named target a model also broadcasts to.
///
/// Field relations resolve through a typed accessor; when the accessor
/// yields nothing (e.g. a null foreign key) the name itself is used as a
/// literal channel.
pub struct Relation<M> {
    name: &'static str,
    accessor: Option<fn(&M) -> Option<Target>>,
}

impl<M> Relation<M> {
    /// Relation resolved through `accessor`
    pub fn field(name: &'static str, accessor: fn(&M) -> Option<Target>) -> Self {
        Self {
            name,
            accessor: Some(accessor),
        }
    }

    /// Literal channel named `name`
    pub fn channel(name: &'static str) -> Self {
        Self {
            name,
            accessor: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn resolve(&self, model: &M) -> Target {
        self.accessor
            .and_then(|accessor| accessor(model))
            .unwrap_or_else(|| Target::channel(self.name))
    }
}

impl<M> Clone for Relation<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for Relation<M> {}

impl<M> std::fmt::Debug for Relation<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Relation")
            .field("name", &self.name)
            .field("field", &self.accessor.is_some())
            .finish()
    }
}
