//! Status values reported by the commerce API
//!
//! Only a handful of values change how returnable items are derived. Every
//! other value, including ones this crate has never seen, is preserved in an
//! `Other` variant and follows the default path.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_status {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// Any value not listed above, kept verbatim
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $wire,)+
                    $name::Other(value) => value.as_str(),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                let known = match value.as_str() {
                    $($wire => Some($name::$variant),)+
                    _ => None,
                };
                known.unwrap_or_else(|| $name::Other(value))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                $name::from(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(status: $name) -> String {
                match status {
                    $name::Other(value) => value,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_status! {
    /// Fulfillment status of a claim or swap
    FulfillmentStatus {
        /// Nothing has been fulfilled yet
        NotFulfilled => "not_fulfilled",
        PartiallyFulfilled => "partially_fulfilled",
        Fulfilled => "fulfilled",
        PartiallyShipped => "partially_shipped",
        Shipped => "shipped",
        PartiallyReturned => "partially_returned",
        Returned => "returned",
        Canceled => "canceled",
        RequiresAction => "requires_action",
    }
}

string_status! {
    /// Refund status of a claim
    ClaimPaymentStatus {
        /// No payment applies to the claim (yet)
        Na => "na",
        NotRefunded => "not_refunded",
        Refunded => "refunded",
    }
}

string_status! {
    /// Status of the return attached to a claim
    ReturnStatus {
        Requested => "requested",
        Received => "received",
        RequiresAction => "requires_action",
        Canceled => "canceled",
    }
}
