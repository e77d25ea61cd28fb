use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Entity not found: {entity} with slug '{slug}'")]
    SlugNotFound { entity: &'static str, slug: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A product reference points at something that cannot be priced.
    #[error("Capability error: {0}")]
    Capability(String),

    /// The target is in a state that does not allow the change, such as an
    /// ordered cart.
    #[error("Conflict: {0}")]
    Conflict(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_not_found_message_names_the_slug() {
        let err = CoreError::SlugNotFound {
            entity: "Artist",
            slug: "nobody".into(),
        };
        assert_eq!(
            err.to_string(),
            "Entity not found: Artist with slug 'nobody'"
        );
    }
}
