use std::collections::{HashMap, HashSet};

use crate::{
    consts::consts::{CityName, CityZipcodes},
    model::person::Person,
};

/// Groups people by the cities whose postal code list contains their zipcode.
///
/// Every person is checked against every city's list. A person matching no city is left out,
/// a person whose zipcode is listed under several cities is added to each of them.
#[tracing::instrument(skip_all)]
pub fn build_index(
    city_zipcodes: &CityZipcodes,
    people: &[Person],
) -> HashMap<CityName, HashSet<Person>> {
    let mut people_index = HashMap::<CityName, HashSet<Person>>::new();

    for person in people {
        let mut matched = false;

        for (city, zipcodes) in city_zipcodes.iter() {
            if zipcodes.iter().any(|zipcode| zipcode == person.zipcode()) {
                people_index
                    .entry(city.clone())
                    .or_default()
                    .insert(person.clone());

                matched = true;
            }
        }

        if !matched {
            log::debug!("No city lists zipcode {}, skipping {}", person.zipcode(), person);
        }
    }

    people_index
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn city_zipcodes() -> CityZipcodes {
        HashMap::from([
            (
                "Mountain View".to_string(),
                vec!["94040".to_string(), "94041".to_string()],
            ),
            ("Palo Alto".to_string(), vec!["94301".to_string()]),
        ])
    }

    #[test]
    fn people_are_grouped_under_matching_city() {
        // Given people in two known cities and one unknown zipcode
        let people = vec![
            Person::new("A", "94040"),
            Person::new("B", "94301"),
            Person::new("C", "99999"),
        ];

        // When we build the index
        let index = build_index(&city_zipcodes(), &people);

        // Then each person sits under their own city, and the unknown zipcode is dropped
        assert_eq!(
            index,
            HashMap::from([
                (
                    "Mountain View".to_string(),
                    HashSet::from([Person::new("A", "94040")])
                ),
                (
                    "Palo Alto".to_string(),
                    HashSet::from([Person::new("B", "94301")])
                ),
            ])
        );
    }

    #[rstest]
    #[case::unknown_zipcode("99999")]
    #[case::empty_zipcode("")]
    #[case::prefix_of_known_zipcode("9404")]
    fn unmatched_person_is_omitted(#[case] zipcode: &str) {
        let index = build_index(&city_zipcodes(), &[Person::new("Nobody", zipcode)]);

        assert!(index.is_empty());
    }

    #[test]
    fn zipcode_listed_under_two_cities_adds_person_to_both() {
        // Given a zipcode that is (erroneously) listed under two cities
        let mut city_zipcodes = city_zipcodes();
        city_zipcodes
            .get_mut("Palo Alto")
            .unwrap()
            .push("94040".to_string());

        // When we index a person in that zipcode
        let person = Person::new("A", "94040");
        let index = build_index(&city_zipcodes, &[person.clone()]);

        // Then they appear under both cities
        assert!(index["Mountain View"].contains(&person));
        assert!(index["Palo Alto"].contains(&person));
    }

    #[test]
    fn duplicate_people_are_stored_once() {
        let people = vec![Person::new("A", "94040"), Person::new("A", "94040")];

        let index = build_index(&city_zipcodes(), &people);

        assert_eq!(index["Mountain View"].len(), 1);
    }

    #[test]
    fn order_of_people_does_not_change_the_index() {
        let people = vec![
            Person::new("A", "94040"),
            Person::new("B", "94041"),
            Person::new("C", "94301"),
        ];
        let mut reversed = people.clone();
        reversed.reverse();

        assert_eq!(
            build_index(&city_zipcodes(), &people),
            build_index(&city_zipcodes(), &reversed)
        );
    }

    #[test]
    fn inputs_are_left_untouched() {
        let city_zipcodes = city_zipcodes();
        let people = vec![Person::new("A", "94040")];

        let _ = build_index(&city_zipcodes, &people);

        assert_eq!(city_zipcodes, self::city_zipcodes());
        assert_eq!(people, vec![Person::new("A", "94040")]);
    }
}
