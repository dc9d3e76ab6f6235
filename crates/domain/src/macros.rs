//! Macro for implementing Display and FromStr for label enums
//!
//! Status-like enums in the ledger travel as human-readable labels
//! ("In Progress", "Delivered"). This macro keeps the label table in one
//! place and derives both conversions from it.
//!
//! # Example
//!
//! ```rust
//! use goldledger_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Metal {
//!     Gold,
//!     Silver,
//! }
//!
//! impl_domain_status_conversions!(Metal {
//!     Gold => "Gold",
//!     Silver => "Silver",
//! });
//!
//! assert_eq!(Metal::Gold.to_string(), "Gold");
//! assert_eq!("silver".parse::<Metal>(), Ok(Metal::Silver));
//! ```

/// Implements Display and FromStr traits for label enums
///
/// This macro generates:
/// - Display trait: writes the canonical label verbatim
/// - FromStr trait: matches labels ignoring ASCII case and surrounding
///   whitespace
///
/// Additional aliases may follow the canonical label, separated by `|`; they
/// are accepted by `FromStr` but never produced by `Display`.
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal $(| $alias:literal)*),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let candidate = s.trim();
                $(
                    if candidate.eq_ignore_ascii_case($str)
                        $(|| candidate.eq_ignore_ascii_case($alias))*
                    {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}
