use std::{
    collections::{hash_map, HashMap, HashSet},
    fmt,
};

use crate::{
    consts::consts::{CityName, CityZipcodes},
    model::person::Person,
};

use super::builder::build_index;

/// People grouped by the city their zipcode belongs to.
///
/// Two indexes are equal when they hold the same cities with the same people, regardless of
/// the order either was built in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PeopleIndex {
    people_index: HashMap<CityName, HashSet<Person>>,
}

impl PeopleIndex {
    pub fn new(city_zipcodes: &CityZipcodes, people: &[Person]) -> Self {
        Self {
            people_index: build_index(city_zipcodes, people),
        }
    }

    /// Wraps an already grouped map, used when reconstructing a decoded index
    pub fn from_map(people_index: HashMap<CityName, HashSet<Person>>) -> Self {
        Self { people_index }
    }

    pub fn get(&self, city: &str) -> Option<&HashSet<Person>> {
        self.people_index.get(city)
    }

    pub fn contains(&self, city: &str, person: &Person) -> bool {
        self.get(city)
            .map(|people| people.contains(person))
            .unwrap_or(false)
    }

    pub fn cities(&self) -> impl Iterator<Item = &CityName> + '_ {
        self.people_index.keys()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, CityName, HashSet<Person>> {
        self.people_index.iter()
    }

    /// Number of cities
    pub fn len(&self) -> usize {
        self.people_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people_index.is_empty()
    }

    /// Total (city, person) pairs. A person listed under two cities counts twice.
    pub fn membership_count(&self) -> usize {
        self.people_index.values().map(HashSet::len).sum()
    }

    pub fn as_map(&self) -> &HashMap<CityName, HashSet<Person>> {
        &self.people_index
    }

    pub fn into_map(self) -> HashMap<CityName, HashSet<Person>> {
        self.people_index
    }
}

impl<'a> IntoIterator for &'a PeopleIndex {
    type Item = (&'a CityName, &'a HashSet<Person>);
    type IntoIter = hash_map::Iter<'a, CityName, HashSet<Person>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Sorted so the rendering is stable between runs
impl fmt::Display for PeopleIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cities: Vec<&CityName> = self.cities().collect();
        cities.sort();

        write!(f, "PeopleIndex({{")?;

        for (city_position, city) in cities.into_iter().enumerate() {
            if city_position > 0 {
                write!(f, ", ")?;
            }

            let mut people: Vec<&Person> = self.people_index[city].iter().collect();
            people.sort();

            write!(f, "{:?}: {{", city)?;
            for (person_position, person) in people.into_iter().enumerate() {
                if person_position > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", person)?;
            }
            write!(f, "}}")?;
        }

        write!(f, "}})")
    }
}
