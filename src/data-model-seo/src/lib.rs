/// Construct a new zero-sized type wrapper around a to-be-validated value.
/// The newtype only exists for values that are valid according to the $is_valid function.
/// Any attributes placed before the name are forwarded onto the generated struct.
macro_rules! newtype_valid {
    ($(#[$meta:meta])* $name:ident, $inner:path, $is_valid:expr, $error:path, $new_error:expr) => {
        $(#[$meta])*
        #[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash)]
        pub struct $name($inner);

        impl std::fmt::Display for $name {
            /// Displays $inner only.
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl $name {
            /// Create a new instance of $name if the $inner value is valid. Returns an error on failure.
            pub fn new(maybe_valid_inner: $inner) -> Result<Self, $error> {
                if Self::is_valid(&maybe_valid_inner) {
                    Ok($name(maybe_valid_inner))
                } else {
                    let e: $error = $new_error(&maybe_valid_inner);
                    Err(e)
                }
            }

            /// True if the $inner value is a valid instance of $name. False otherwise.
            pub fn is_valid(maybe_valid_inner: &$inner) -> bool {
                $is_valid(maybe_valid_inner)
            }

            /// Borrow the validated $inner value.
            pub fn as_inner(&self) -> &$inner {
                &self.0
            }

            /// Destroys the $name wrapper, obtaining the $inner value directly.
            pub fn extract(self) -> $inner {
                self.0
            }
        }

        impl TryFrom<$inner> for $name {
            type Error = $error;

            fn try_from(value: $inner) -> Result<Self, Self::Error> {
                $name::new(value)
            }
        }

        impl From<$name> for $inner {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

pub(crate) use newtype_valid;

pub mod errors;
pub mod route;
pub mod site;

pub use errors::ModelError;
pub use route::{ChangeFrequency, LastModified, Priority, Route};
pub use site::{BaseUrl, ContactPoint, Organization, PageMeta, PostalAddress, SeoConfig, SiteConfig};
