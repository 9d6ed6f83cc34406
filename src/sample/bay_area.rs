use std::collections::HashMap;

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::{
    consts::consts::{CityZipcodes, Zipcode},
    model::person::Person,
};

use super::{options::SampleOptions, DataSource};

const CITY_ZIPCODES: [(&str, &[&str]); 6] = [
    ("San Jose", &["95110", "95111", "95112"]),
    ("Cupertino", &["95014", "95113", "95116", "95117"]),
    ("Los Altos", &["94022", "95121", "95122", "95123"]),
    ("Mountain View", &["94040", "94041"]),
    ("Santa Clara", &["95050", "95051", "95054", "94043"]),
    ("Palo Alto", &["94301", "94303"]),
];

const FIRST_NAMES: [&str; 16] = [
    "Anthony", "Elsie", "Tammy", "Robert", "Lynn", "Harold", "Jordan", "Stacy", "Patrick",
    "Nicki", "Mary", "Peggy", "Luke", "Cecil", "Claudia", "Vada",
];

const LAST_NAMES: [&str; 16] = [
    "Dube", "Austin", "Mention", "Cairns", "Lazenby", "White", "Gomez", "Cole", "Mcbride", "Woods",
    "Valle", "Mabe", "Higginbotham", "Arias", "Stock", "Torres",
];

/// Bay Area cities with generated residents for every listed zipcode
pub struct BayAreaSample {
    options: SampleOptions,
    rng: StdRng,
}

impl BayAreaSample {
    pub fn new(options: SampleOptions) -> Self {
        Self {
            rng: StdRng::seed_from_u64(options.seed),
            options,
        }
    }

    fn fake_name(&mut self) -> String {
        let first = FIRST_NAMES.choose(&mut self.rng).copied().unwrap_or_default();
        let last = LAST_NAMES.choose(&mut self.rng).copied().unwrap_or_default();

        format!("{} {}", first, last)
    }

    // Bay Area codes all start with 94 or 95, so anything below 90000 is unlisted
    fn unlisted_zipcode(&mut self) -> Zipcode {
        format!("{:05}", self.rng.gen_range(10000..90000))
    }
}

impl DataSource for BayAreaSample {
    fn city_zipcodes(&self) -> CityZipcodes {
        CITY_ZIPCODES
            .iter()
            .map(|(city, zipcodes)| {
                (
                    city.to_string(),
                    zipcodes.iter().map(|zipcode| zipcode.to_string()).collect(),
                )
            })
            .collect::<HashMap<_, _>>()
    }

    fn people(&mut self) -> Vec<Person> {
        let mut people = vec![];

        for (_, zipcodes) in CITY_ZIPCODES.iter() {
            for zipcode in zipcodes.iter() {
                for _ in 0..self.options.people_per_zipcode {
                    let name = self.fake_name();
                    people.push(Person::new(name, *zipcode));
                }
            }
        }

        for _ in 0..self.options.unmatched_people {
            let name = self.fake_name();
            let zipcode = self.unlisted_zipcode();
            people.push(Person::new(name, zipcode));
        }

        log::debug!("Generated {} sample people", people.len());

        people
    }
}
