/// A selectable text-generation model exposed by the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    pub id: String,
    pub name: Option<String>,
    pub owner: Option<String>,
    pub ready: Option<bool>,
}

impl Engine {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            owner: None,
            ready: None,
        }
    }
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}
