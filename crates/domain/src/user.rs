use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The kind of account a `User` holds. A client books services, a
/// provider publishes availability and services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Provider,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Provider => "provider",
        }
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "client" => Ok(Self::Client),
            "provider" => Ok(Self::Provider),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Public handle that resolves a provider account on anonymous routes.
    pub slug: Option<String>,
}

impl User {
    pub fn new(name: &str, email: &str, role: Role) -> Self {
        Self {
            id: Default::default(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            slug: None,
        }
    }

    pub fn is_provider(&self) -> bool {
        self.role == Role::Provider
    }
}

impl Entity for User {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_parses_role() {
        assert_eq!("client".parse::<Role>(), Ok(Role::Client));
        assert_eq!("provider".parse::<Role>(), Ok(Role::Provider));
        assert!("admin".parse::<Role>().is_err());
    }
}
