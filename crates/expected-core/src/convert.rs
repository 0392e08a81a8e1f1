//! Conversion between instantiations.
//!
//! A container converts into another instantiation when both payload types
//! convert. The alternative is always preserved. Void sides convert
//! trivially, since `(): From<()>`.

use expected_error::{Error, Result};

use crate::expected::Expected;
use crate::storage::Slot;

impl<V, E> Expected<V, E> {
    /// Builds a container from another instantiation, converting whichever
    /// payload is live.
    pub fn convert_from<V2, E2>(other: Expected<V2, E2>) -> Self
    where
        V: From<V2>,
        E: From<E2>,
    {
        match other.slot {
            Slot::Value(value) => Self::from_value(V::from(value)),
            Slot::Error(error) => Self::from_error(E::from(error)),
        }
    }

    /// The `Into` direction of [`Expected::convert_from`].
    pub fn convert_into<V2, E2>(self) -> Expected<V2, E2>
    where
        V2: From<V>,
        E2: From<E>,
    {
        Expected::convert_from(self)
    }

    /// Fallible form of [`Expected::convert_from`].
    ///
    /// A payload that does not fit is reported as
    /// [`ErrorKind::ConversionFailed`](expected_error::ErrorKind::ConversionFailed)
    /// with the side that failed recorded under the `side` context key. The
    /// conversion error is kept as the source.
    pub fn try_convert_from<V2, E2>(other: Expected<V2, E2>) -> Result<Self>
    where
        V: TryFrom<V2>,
        E: TryFrom<E2>,
        <V as TryFrom<V2>>::Error: std::error::Error + Send + Sync + 'static,
        <E as TryFrom<E2>>::Error: std::error::Error + Send + Sync + 'static,
    {
        match other.slot {
            Slot::Value(value) => V::try_from(value)
                .map(Self::from_value)
                .map_err(|err| conversion_error("value", err)),
            Slot::Error(error) => E::try_from(error)
                .map(Self::from_error)
                .map_err(|err| conversion_error("error", err)),
        }
    }
}

fn conversion_error<X>(side: &'static str, err: X) -> Error
where
    X: std::error::Error + Send + Sync + 'static,
{
    tracing::debug!(side, "conversion failed: {err}");
    Error::conversion_failed(side, err.to_string())
        .with_operation("expected::try_convert_from")
        .set_source(err)
}
