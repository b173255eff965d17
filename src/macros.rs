//! Macros to reduce boilerplate in the codebase

/// Macro to generate Display and FromStr implementations for enums
///
/// `FromStr` accepts every listed spelling (case-insensitive); `Display`
/// writes the first one.
///
/// # Usage
///
/// ```rust,ignore
/// enum_display_fromstr!(
///     SortKey,
///     CatalogError::invalid_sort_key,
///     {
///         IdAscending => "id" | "id-asc",
///         NameAscending => "name" | "name-asc",
///     }
/// );
/// ```
#[macro_export]
macro_rules! enum_display_fromstr {
    (
        $enum_name:ident,
        $error_fn:path,
        { $($variant:ident => $str:literal $(| $alias:literal)*),+ $(,)? }
    ) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $($enum_name::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::error::CatalogError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str $(| $alias)* => Ok($enum_name::$variant),)+
                    _ => Err($error_fn(s.to_string())),
                }
            }
        }
    };
}

/// Macro to generate only Display implementation for enums
#[macro_export]
macro_rules! enum_display {
    (
        $enum_name:ident,
        { $($variant:ident => $str:literal),+ $(,)? }
    ) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $($enum_name::$variant => write!(f, $str),)+
                }
            }
        }
    };
}
