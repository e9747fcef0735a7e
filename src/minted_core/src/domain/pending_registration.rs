use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize, ser::SerializeStruct};

/// The state of a registration before the activation link is clicked.
///
/// Nothing about it is persisted; the whole struct travels inside the signed
/// activation token and becomes a `User` only once the token is presented
/// back. The password is already hashed by the time it lands here.
#[derive(Debug, Deserialize, Clone)]
pub struct PendingRegistration {
    pub name: String,
    pub email: Secret<String>,
    pub password_hash: Secret<String>,
}

impl PendingRegistration {
    pub fn new(name: String, email: Secret<String>, password_hash: Secret<String>) -> Self {
        Self {
            name,
            email,
            password_hash,
        }
    }
}

impl Serialize for PendingRegistration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("PendingRegistration", 3)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("email", &self.email.expose_secret())?;
        state.serialize_field("password_hash", &self.password_hash.expose_secret())?;
        state.end()
    }
}
