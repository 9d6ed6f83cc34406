use std::collections::{HashMap, HashSet};

use crate::{
    consts::consts::{CityName, CityZipcodes, Zipcode},
    model::person::Person,
};

/// Secondary index from postal code to the cities listing it.
///
/// Produces the same grouping as [`super::builder::build_index`] without rescanning every
/// city's list per person.
#[derive(Debug, Default, Clone)]
pub struct ZipcodeLookup {
    cities_by_zipcode: HashMap<Zipcode, Vec<CityName>>,
}

impl ZipcodeLookup {
    pub fn new(city_zipcodes: &CityZipcodes) -> Self {
        let mut cities_by_zipcode = HashMap::<Zipcode, Vec<CityName>>::new();

        for (city, zipcodes) in city_zipcodes.iter() {
            for zipcode in zipcodes {
                let cities = cities_by_zipcode.entry(zipcode.clone()).or_default();

                // A city repeating the same code must not be listed twice
                if !cities.contains(city) {
                    cities.push(city.clone());
                }
            }
        }

        Self { cities_by_zipcode }
    }

    /// Cities listing this zipcode, empty when none do
    pub fn cities_for(&self, zipcode: &str) -> &[CityName] {
        self.cities_by_zipcode
            .get(zipcode)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    #[tracing::instrument(skip_all)]
    pub fn build_index(&self, people: &[Person]) -> HashMap<CityName, HashSet<Person>> {
        let mut people_index = HashMap::<CityName, HashSet<Person>>::new();

        for person in people {
            let cities = self.cities_for(person.zipcode());

            if cities.is_empty() {
                log::debug!("No city lists zipcode {}, skipping {}", person.zipcode(), person);
                continue;
            }

            for city in cities {
                people_index
                    .entry(city.clone())
                    .or_default()
                    .insert(person.clone());
            }
        }

        people_index
    }
}
