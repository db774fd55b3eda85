use tracing::debug;

use crate::common::config::validate_addresses;
use crate::common::coords::Coordinate;
use crate::common::error::Result;
use crate::geocoding::GeoCoder;

/// Resolve the origin and destination addresses into coordinates. If either
/// address is empty, `InvalidAddressInput` is returned without calling the
/// geocoder. The origin is always resolved first.
pub fn get_navigation_coordinates<C: GeoCoder + ?Sized>(
    geocoder: &C,
    from_address: &str,
    to_address: &str,
) -> Result<(Coordinate, Coordinate)> {
    let (from_address, to_address) = validate_addresses(
        Some(from_address.to_string()),
        Some(to_address.to_string()),
    )?;

    let location_orig = geocoder.resolve(&from_address)?;
    let location_dest = geocoder.resolve(&to_address)?;

    debug!(
        ?location_orig,
        ?location_dest,
        "resolved origin and destination"
    );

    Ok((location_orig, location_dest))
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::common::error::NavigationError;
    use crate::fixtures::{CountingGeoCoder, DESTINATION, ORIGIN};

    #[test]
    fn test_resolves_in_order() {
        let geocoder = CountingGeoCoder::default();

        let result = get_navigation_coordinates(&geocoder, ORIGIN, DESTINATION);

        assert_eq!(
            result,
            Ok((
                Coordinate::new(42.3900, -72.5300),
                Coordinate::new(42.3910, -72.5200)
            ))
        );
        assert_eq!(geocoder.calls.get(), 2);
    }

    /// Invalid input must short-circuit before the geocoder is used
    #[test]
    fn test_empty_address() {
        let geocoder = CountingGeoCoder::default();

        let from_empty = get_navigation_coordinates(&geocoder, "", DESTINATION);
        let to_empty = get_navigation_coordinates(&geocoder, ORIGIN, " ");

        assert_eq!(from_empty, Err(NavigationError::InvalidAddressInput));
        assert_eq!(to_empty, Err(NavigationError::InvalidAddressInput));
        assert_eq!(geocoder.calls.get(), 0);
    }

    /// An unresolvable address is a lookup failure, not invalid input
    #[test]
    fn test_address_not_found() {
        let geocoder = CountingGeoCoder::default();

        let result =
            get_navigation_coordinates(&geocoder, ORIGIN, "Nowhere Road");

        assert_eq!(
            result,
            Err(NavigationError::AddressNotFound {
                address: "Nowhere Road".to_string()
            })
        );
    }
}
