use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifier minted for quizzes, uploads and chat messages. Nothing is
/// stored, so ids are only unique, never resolvable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(Uuid);

impl Id {
    pub fn new() -> Self {
        Id(Uuid::new_v4())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Id {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Id)
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}

impl utoipa::ToSchema<'_> for Id {
    fn schema() -> (&'static str, utoipa::openapi::RefOr<utoipa::openapi::schema::Schema>) {
        (
            "Id",
            utoipa::openapi::ObjectBuilder::new()
                .schema_type(utoipa::openapi::schema::SchemaType::String)
                .format(Some(utoipa::openapi::schema::SchemaFormat::Custom(
                    "uuid".to_string(),
                )))
                .description(Some("Random identifier, not stored server-side"))
                .into(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_fresh() {
        assert_ne!(Id::new(), Id::new());
    }

    #[test]
    fn display_parses_back() {
        let id = Id::new();
        let parsed: Id = id.to_string().parse().expect("valid uuid");
        assert_eq!(parsed, id);
    }

    #[test]
    fn rejects_garbage() {
        assert!("quiz_123".parse::<Id>().is_err());
    }
}
