//! Helper macro for declaring port error enums.
//!
//! Each variant gets a snake_case constructor accepting `impl Into<_>` for
//! its fields and an `is_<variant>` predicate, so callers classify failures
//! by variant rather than by comparing rendered messages.

macro_rules! define_port_error {
    (@methods $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }

            pub fn [<is_ $variant:snake>](&self) -> bool {
                matches!(self, Self::$variant)
            }
        }
    };

    (@methods $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        ::paste::paste! {
            pub fn [<is_ $variant:snake>](&self) -> bool {
                matches!(self, Self::$variant { .. })
            }
        }
        define_port_error!(@ctor $variant () () $( $field : $ty, )*);
    };

    (@ctor $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@methods $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum SamplePortError {
            Missing { id: String } => "missing: {id}",
            Busy => "store busy",
            Rejected { id: String, attempts: u32 } => "rejected {id} after {attempts}",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = SamplePortError::missing("abc");
        assert_eq!(err.to_string(), "missing: abc");
    }

    #[test]
    fn unit_variants_get_constructors() {
        assert_eq!(SamplePortError::busy(), SamplePortError::Busy);
    }

    #[test]
    fn constructors_support_mixed_fields() {
        let err = SamplePortError::rejected("abc", 3_u32);
        assert_eq!(err.to_string(), "rejected abc after 3");
    }

    #[test]
    fn predicates_match_only_their_variant() {
        let err = SamplePortError::missing("abc");
        assert!(err.is_missing());
        assert!(!err.is_busy());
        assert!(!err.is_rejected());
    }
}
