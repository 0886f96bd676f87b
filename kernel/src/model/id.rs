use serde::{Deserialize, Serialize};

macro_rules! define_string_id {
    ($id_type:ident) => {
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $id_type(String);

        impl $id_type {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $id_type {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $id_type {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl std::fmt::Display for $id_type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// URL-safe unique key of a Game in the catalog.
define_string_id!(GameSlug);
// Key of a Snack in the catalog.
define_string_id!(SnackId);
