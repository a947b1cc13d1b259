/*!
Users who may log in.

Users only ever come from seed data; nothing creates or deletes them while
the server runs.
*/
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum Role {
    Admin,
    Student,
    Faculty,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let token = match self {
            Role::Admin   => "Admin",
            Role::Student => "Student",
            Role::Faculty => "Faculty",
        };

        write!(f, "{}", token)
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin"   => Ok(Role::Admin),
            "Student" => Ok(Role::Student),
            "Faculty" => Ok(Role::Faculty),
            _ => Err(format!("{:?} is not a valid Role.", s)),
        }
    }
}

/**
A user as the store holds it, plaintext password included.

This deliberately does not implement `Serialize`; anything headed out to a
client goes through `PublicUser`.
*/
#[derive(Clone, Debug, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub role: Role,
    pub name: String,
}

impl User {
    pub fn new(id: i64, username: &str, password: &str, role: Role, name: &str) -> Self {
        Self {
            id,
            username: username.to_owned(),
            password: password.to_owned(),
            role,
            name: name.to_owned(),
        }
    }

    /// Whether all three login fields match exactly.
    pub fn matches(&self, username: &str, password: &str, role: Role) -> bool {
        self.username == username
            && self.password == password
            && self.role == role
    }

    pub fn public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            username: self.username.clone(),
            role: self.role,
            name: self.name.clone(),
        }
    }
}

/// A `User` with the password stripped.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PublicUser {
    pub id: i64,
    pub username: String,
    pub role: Role,
    pub name: String,
}
