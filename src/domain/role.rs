use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::ConfigError;
use crate::domain::navigation::{resolve, Route, Screen};

// Which side of the marketplace a login attempt acts as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Buyer,
    Seller,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Buyer, Role::Seller];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Buyer => "buyer",
            Role::Seller => "seller",
        }
    }

    // Capitalized label used on the login screen heading.
    pub fn title(self) -> &'static str {
        match self {
            Role::Buyer => "Buyer",
            Role::Seller => "Seller",
        }
    }

    pub fn login_path(self) -> String {
        format!("/{}/login", self.as_str())
    }

    pub fn home_path(self) -> String {
        format!("/{}/home", self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "buyer" => Ok(Role::Buyer),
            "seller" => Ok(Role::Seller),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role `{0}`")]
pub struct UnknownRole(pub String);

// Where each role lands after a successful code verification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedirectTargets {
    pub buyer: String,
    pub seller: String,
}

impl Default for RedirectTargets {
    fn default() -> Self {
        Self {
            buyer: Role::Buyer.home_path(),
            seller: Role::Seller.home_path(),
        }
    }
}

impl RedirectTargets {
    pub fn for_role(&self, role: Role) -> &str {
        match role {
            Role::Buyer => &self.buyer,
            Role::Seller => &self.seller,
        }
    }

    // Every target must land on its own role's home screen. This also keeps
    // the buyer and seller targets distinct.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for role in Role::ALL {
            let path = self.for_role(role);
            match resolve(path) {
                Route::Screen(Screen::Home { role: target }) if target == role => {}
                _ => {
                    return Err(ConfigError::InvalidRedirect {
                        role,
                        path: path.to_string(),
                    })
                }
            }
        }
        Ok(())
    }
}
