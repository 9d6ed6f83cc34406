pub mod bay_area;
pub mod options;

use crate::{consts::consts::CityZipcodes, model::person::Person};

/// Supplies the (city -> zipcodes, people) pair an index is built from
pub trait DataSource {
    fn city_zipcodes(&self) -> CityZipcodes;
    fn people(&mut self) -> Vec<Person>;
}

/// A fixed data set, handy when the input is already in memory
pub struct StaticSource {
    city_zipcodes: CityZipcodes,
    people: Vec<Person>,
}

impl StaticSource {
    pub fn new(city_zipcodes: CityZipcodes, people: Vec<Person>) -> Self {
        Self {
            city_zipcodes,
            people,
        }
    }
}

impl DataSource for StaticSource {
    fn city_zipcodes(&self) -> CityZipcodes {
        self.city_zipcodes.clone()
    }

    fn people(&mut self) -> Vec<Person> {
        self.people.clone()
    }
}
