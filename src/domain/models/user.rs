use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub uuid: Uuid,
}

impl User {
    /// Fresh record with a random v4 identifier.
    pub fn generate() -> Self {
        Self {
            uuid: Uuid::new_v4(),
        }
    }

    /// Canonical lowercase hyphenated form, as stored in the `uuid` column.
    pub fn uuid_string(&self) -> String {
        self.uuid.hyphenated().to_string()
    }
}
