/*
This code is part of the GpTools geoprocessing catalog.
Authors: GpTools developers
Created: 02/09/2026
Last Modified: 09/10/2026
License: MIT
*/

/// Declares a coded-value enumeration. Each variant maps a Rust name to the
/// literal token expected by the geoprocessing engine.
///
/// ```
/// use gptools_common::coded_value_enum;
///
/// coded_value_enum! {
///     pub enum TravelDirection {
///         TowardStores => "TOWARD_STORES",
///         AwayFromStores => "AWAY_FROM_STORES",
///     }
/// }
///
/// assert_eq!(TravelDirection::TowardStores.as_str(), "TOWARD_STORES");
/// assert_eq!("toward_stores".parse::<TravelDirection>().unwrap(), TravelDirection::TowardStores);
/// ```
#[macro_export]
macro_rules! coded_value_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// The literal token for this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $token ),+
                }
            }

            /// All tokens, in declaration order.
            pub fn tokens() -> Vec<String> {
                Self::ALL.iter().map(|v| v.as_str().to_string()).collect()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::errors::GpError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let t = s.trim().trim_matches('"').trim_matches('\'');
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(t))
                    .ok_or_else(|| {
                        $crate::errors::GpError::invalid_value(
                            stringify!($name),
                            t,
                            format!("expected one of {}", Self::tokens().join(", ")),
                        )
                    })
            }
        }

        impl ::std::convert::From<$name> for $crate::values::GpValue {
            fn from(v: $name) -> Self {
                $crate::values::GpValue::String(v.as_str().to_string())
            }
        }
    };
}

#[cfg(test)]
mod test {
    use crate::errors::GpError;
    use crate::values::GpValue;

    coded_value_enum! {
        enum OverlapType {
            Overlap => "OVERLAP",
            NotOverlap => "NOT_OVERLAP",
            Split => "SPLIT",
        }
    }

    #[test]
    fn test_tokens_in_declaration_order() {
        assert_eq!(OverlapType::tokens(), vec!["OVERLAP", "NOT_OVERLAP", "SPLIT"]);
        assert_eq!(OverlapType::NotOverlap.to_string(), "NOT_OVERLAP");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("split".parse::<OverlapType>().unwrap(), OverlapType::Split);
        assert_eq!(" 'Not_Overlap' ".parse::<OverlapType>().unwrap(), OverlapType::NotOverlap);
    }

    #[test]
    fn test_parse_unknown_token() {
        match "DISSOLVE".parse::<OverlapType>() {
            Err(GpError::InvalidValue { parameter, value, reason }) => {
                assert_eq!(parameter, "OverlapType");
                assert_eq!(value, "DISSOLVE");
                assert!(reason.contains("OVERLAP, NOT_OVERLAP, SPLIT"));
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_into_gp_value() {
        let v: GpValue = OverlapType::Overlap.into();
        assert_eq!(v, GpValue::String("OVERLAP".to_string()));
    }
}
