use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Visibility of a project, portfolio or application
///
/// Only the two labels `public` and `private` ever reach the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    const PUBLIC_LABEL: &'static str = "public";
    const PRIVATE_LABEL: &'static str = "private";

    pub fn from_is_private(is_private: bool) -> Self {
        if is_private {
            Visibility::Private
        } else {
            Visibility::Public
        }
    }

    /// Label for the `is_private` flag stored on component rows
    pub fn label_of(is_private: bool) -> &'static str {
        Self::from_is_private(is_private).label()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Visibility::Public => Self::PUBLIC_LABEL,
            Visibility::Private => Self::PRIVATE_LABEL,
        }
    }

    pub fn is_private(&self) -> bool {
        matches!(self, Visibility::Private)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Visibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::PUBLIC_LABEL => Ok(Visibility::Public),
            Self::PRIVATE_LABEL => Ok(Visibility::Private),
            _ => Err(format!(
                "Invalid visibility: {}. Possible values are '{}' and '{}'",
                s,
                Self::PUBLIC_LABEL,
                Self::PRIVATE_LABEL
            )),
        }
    }
}

impl Serialize for Visibility {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
