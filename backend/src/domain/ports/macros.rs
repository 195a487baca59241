//! Helper macro for declaring port error enums.
//!
//! Each variant gets a snake_case constructor; struct-like variants accept
//! `impl Into<T>` for every field so call sites can pass `&str` for `String`.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* }) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                Self::$variant { $($field: $field.into()),* }
            }
        }
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
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    define_port_error! {
        pub enum SamplePortError {
            Unavailable => "sample port unavailable",
            Rejected { message: String } => "rejected: {message}",
            Lagging { source_name: String, millis: u64 } =>
                "{source_name} lagged by {millis}ms",
        }
    }

    #[test]
    fn unit_variants_get_nullary_constructors() {
        let err = SamplePortError::unavailable();
        assert_eq!(err, SamplePortError::Unavailable);
        assert_eq!(err.to_string(), "sample port unavailable");
    }

    #[test]
    fn string_fields_accept_str() {
        let err = SamplePortError::rejected("no rows");
        assert_eq!(err.to_string(), "rejected: no rows");
    }

    #[test]
    fn mixed_fields_keep_their_types() {
        let err = SamplePortError::lagging("corporates", 250_u64);
        assert_eq!(err.to_string(), "corporates lagged by 250ms");
    }
}
