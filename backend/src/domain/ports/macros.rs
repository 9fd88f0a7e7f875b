//! Generates port error enums with snake-case constructors.
//!
//! Each variant becomes a `thiserror` variant plus a constructor that accepts
//! `impl Into<T>` for every field, so adapters can write
//! `GallerySourceError::status(404_u16, "missing")`.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
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
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum ProbeLikeError {
            Offline => "offline",
            Refused { host: String } => "refused by {host}",
            Status { status: u16, body: String } => "status {status}: {body}",
        }
    }

    #[test]
    fn unit_variants_get_nullary_constructors() {
        assert_eq!(ProbeLikeError::offline(), ProbeLikeError::Offline);
    }

    #[test]
    fn string_fields_accept_str() {
        assert_eq!(ProbeLikeError::refused("picsum.photos").to_string(), "refused by picsum.photos");
    }

    #[test]
    fn mixed_fields_keep_their_types() {
        let err = ProbeLikeError::status(502_u16, "bad gateway");
        assert_eq!(err.to_string(), "status 502: bad gateway");
    }
}
