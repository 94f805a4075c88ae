//! Macros for declaring port error types.

/// Declare a port error enum with display messages and field constructors.
///
/// Each variant lists named fields followed by `=>` and a `thiserror`
/// format string. The macro derives the usual error traits and generates one
/// snake_case constructor per variant whose parameters accept `impl Into`
/// conversions, so call sites can pass string literals directly:
///
/// ```ignore
/// define_port_error! {
///     /// Errors raised by the widget store.
///     pub enum WidgetStoreError {
///         /// The store is unreachable.
///         Offline { message: String } => "widget store offline: {message}",
///     }
/// }
///
/// let error = WidgetStoreError::offline("socket closed");
/// ```
macro_rules! define_port_error {
    (
        $(#[$enum_meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $field_ty:ty),* $(,)? } => $message:literal
            ),* $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant {
                    $(
                        #[doc = concat!("`", stringify!($field), "` interpolated into the message.")]
                        $field: $field_ty,
                    )*
                },
            )*
        }

        impl $name {
            ::paste::paste! {
                $(
                    #[doc = concat!("Build [`Self::", stringify!($variant), "`], converting each field via `Into`.")]
                    pub fn [<$variant:snake>]($($field: impl Into<$field_ty>),*) -> Self {
                        Self::$variant { $($field: $field.into()),* }
                    }
                )*
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        /// Example error for exercising the macro.
        pub enum GaugeError {
            /// The gauge is not calibrated.
            Uncalibrated { serial: String } => "gauge {serial} is not calibrated",
            /// The reading fell outside the measurable band.
            OutOfBand { reading: i64, limit: i64 } => "reading {reading} exceeds limit {limit}",
        }
    }

    #[test]
    fn constructors_accept_into_conversions() {
        let error = GaugeError::uncalibrated("XJ-900");
        assert_eq!(error.to_string(), "gauge XJ-900 is not calibrated");
    }

    #[test]
    fn multi_field_variants_interpolate_every_field() {
        let error = GaugeError::out_of_band(120_i64, 100_i64);
        assert_eq!(
            error,
            GaugeError::OutOfBand {
                reading: 120,
                limit: 100
            }
        );
        assert_eq!(error.to_string(), "reading 120 exceeds limit 100");
    }
}
