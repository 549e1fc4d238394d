//! `define_port_error!`: port error enums with snake_case constructors.
//!
//! Each variant `Foo { a: A, b: B } => "message"` becomes a `thiserror`
//! variant plus `fn foo(a: impl Into<A>, b: impl Into<B>) -> Self`.

macro_rules! define_port_error {
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

        ::paste::paste! {
            impl $name {
                $(
                    #[doc = "Construct [`" $name "::" $variant "`]."]
                    pub fn [<$variant:snake>]($($($field: impl Into<$ty>),*)?) -> Self {
                        Self::$variant $( { $($field: $field.into()),* } )?
                    }
                )*
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    use crate::domain::TokenNumber;

    define_port_error! {
        pub enum SamplePortError {
            Offline => "store offline",
            Busy { message: String } => "store busy: {message}",
            Held { token_number: TokenNumber } => "token {token_number} held",
            Partial { message: String, attempts: u32 } => "partial: {message} after {attempts}",
        }
    }

    #[test]
    fn unit_variants_get_nullary_constructors() {
        assert_eq!(SamplePortError::offline().to_string(), "store offline");
    }

    #[test]
    fn string_fields_accept_str() {
        assert_eq!(SamplePortError::busy("lock").to_string(), "store busy: lock");
    }

    #[test]
    fn typed_fields_accept_into() {
        let err = SamplePortError::held(1001_i64);
        assert_eq!(
            err,
            SamplePortError::Held {
                token_number: TokenNumber::new(1001)
            }
        );
        assert_eq!(err.to_string(), "token 1001 held");
    }

    #[test]
    fn mixed_fields_keep_order() {
        let err = SamplePortError::partial("write", 3_u32);
        assert_eq!(err.to_string(), "partial: write after 3");
    }
}
