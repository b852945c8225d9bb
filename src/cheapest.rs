use crate::{FuelKind, Station};

/// Finds the station with the lowest price for `fuel`. Stations without a price for that fuel are
/// skipped; on a tie the first one wins.
pub fn select_cheapest(stations: &[Station], fuel: Option<FuelKind>) -> Option<&Station> {
    let fuel = fuel?;

    let mut cheapest: Option<(&Station, f64)> = None;
    for station in stations {
        let price = match station.prices.get(fuel) {
            Some(price) => price,
            None => continue,
        };
        match cheapest {
            Some((_, lowest)) if price >= lowest => {}
            _ => cheapest = Some((station, price)),
        }
    }

    cheapest.map(|(station, _)| station)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FuelPriceSet;
    use proptest::prelude::*;

    fn station(id: &str, fuel: FuelKind, price: Option<f64>) -> Station {
        let mut prices = FuelPriceSet::default();
        prices.set(fuel, price);
        Station {
            id: id.to_string(),
            name: id.to_string(),
            latitude: 0.0,
            longitude: 0.0,
            address: String::new(),
            prices,
        }
    }

    #[test]
    fn picks_lowest_diesel() {
        let stations = vec![
            station("A", FuelKind::Diesel, Some(5.0)),
            station("B", FuelKind::Diesel, Some(3.2)),
            station("C", FuelKind::Diesel, None),
        ];
        let cheapest = select_cheapest(&stations, Some(FuelKind::Diesel)).unwrap();
        assert_eq!(cheapest.id, "B");
    }

    #[test]
    fn none_for_empty_or_unset_fuel() {
        assert!(select_cheapest(&[], Some(FuelKind::Gasoline)).is_none());
        let stations = vec![station("A", FuelKind::Gasoline, Some(5.0))];
        assert!(select_cheapest(&stations, None).is_none());
    }

    #[test]
    fn none_when_nobody_sells_it() {
        let stations = vec![
            station("A", FuelKind::Gasoline, Some(5.0)),
            station("B", FuelKind::Ethanol, Some(3.0)),
        ];
        assert!(select_cheapest(&stations, Some(FuelKind::NaturalGas)).is_none());
    }

    #[test]
    fn absent_price_is_not_zero() {
        let stations = vec![
            station("A", FuelKind::Ethanol, None),
            station("B", FuelKind::Ethanol, Some(4.0)),
        ];
        assert_eq!(select_cheapest(&stations, Some(FuelKind::Ethanol)).unwrap().id, "B");
    }

    #[test]
    fn ties_keep_first() {
        let stations = vec![
            station("A", FuelKind::Gasoline, Some(5.5)),
            station("B", FuelKind::Gasoline, Some(5.0)),
            station("C", FuelKind::Gasoline, Some(5.0)),
        ];
        assert_eq!(select_cheapest(&stations, Some(FuelKind::Gasoline)).unwrap().id, "B");
    }

    #[test]
    fn result_is_a_lower_bound() {
        let prices = [6.1, 5.3, 7.0, 5.29, 5.31, 9.99];
        let stations: Vec<Station> = prices
            .iter()
            .enumerate()
            .map(|(i, p)| station(&i.to_string(), FuelKind::Diesel, Some(*p)))
            .collect();
        let cheapest = select_cheapest(&stations, Some(FuelKind::Diesel)).unwrap();
        let best = cheapest.prices.diesel.unwrap();
        assert!(stations
            .iter()
            .all(|s| s.prices.diesel.map_or(true, |p| best <= p)));
        assert_eq!(cheapest.id, "3");
    }

    fn fuel_kind() -> impl Strategy<Value = FuelKind> {
        prop::sample::select(FuelKind::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn selection_is_first_lowest_candidate(
            offers in prop::collection::vec(
                (prop::option::of(0.0f64..20.0), fuel_kind()),
                0..16,
            ),
            fuel in prop::option::of(fuel_kind()),
        ) {
            let stations: Vec<Station> = offers
                .iter()
                .enumerate()
                .map(|(i, (price, kind))| station(&i.to_string(), *kind, *price))
                .collect();

            let mut expected: Option<(usize, f64)> = None;
            if let Some(fuel) = fuel {
                for (i, s) in stations.iter().enumerate() {
                    if let Some(p) = s.prices.get(fuel) {
                        if expected.map_or(true, |(_, lowest)| p < lowest) {
                            expected = Some((i, p));
                        }
                    }
                }
            }

            let selected = select_cheapest(&stations, fuel);
            prop_assert_eq!(selected.is_none(), expected.is_none());

            if let (Some(selected), Some(fuel), Some((index, _))) = (selected, fuel, expected) {
                let price = selected.prices.get(fuel);
                prop_assert!(price.is_some());
                let price = price.unwrap();
                for s in &stations {
                    if let Some(other) = s.prices.get(fuel) {
                        prop_assert!(price <= other);
                    }
                }
                prop_assert!(std::ptr::eq(selected, &stations[index]));
            }
        }

        #[test]
        fn ties_go_to_first_candidate(
            price in 0.0f64..20.0,
            copies in 2usize..6,
            fuel in fuel_kind(),
        ) {
            let stations: Vec<Station> = (0..copies)
                .map(|i| station(&i.to_string(), fuel, Some(price)))
                .collect();
            let selected = select_cheapest(&stations, Some(fuel)).unwrap();
            prop_assert_eq!(selected.id.as_str(), "0");
        }
    }
}
