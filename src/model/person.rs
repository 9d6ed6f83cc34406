use std::{
    fmt,
    hash::{Hash, Hasher},
};

use crate::consts::consts::Zipcode;

/// A person and the postal code they live in.
///
/// Fields are only readable once constructed, the value never changes after `Person::new`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Person {
    name: String,
    zipcode: Zipcode,
}

impl Person {
    pub fn new(name: impl Into<String>, zipcode: impl Into<Zipcode>) -> Self {
        Person {
            name: name.into(),
            zipcode: zipcode.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn zipcode(&self) -> &str {
        &self.zipcode
    }

    #[cfg(test)]
    pub fn new_test() -> Self {
        Person::new("Full Name", "94040")
    }
}

// Hashes the unordered pair of field values. Equal people always hash equally, and the
// result does not depend on which field a value was stored in.
impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (low, high) = if self.name <= self.zipcode {
            (&self.name, &self.zipcode)
        } else {
            (&self.zipcode, &self.name)
        };

        low.hash(state);
        high.hash(state);
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person(name={}, zipcode={})", self.name, self.zipcode)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{hash_map::DefaultHasher, HashSet};

    use super::*;

    fn hash_of(person: &Person) -> u64 {
        let mut hasher = DefaultHasher::new();
        person.hash(&mut hasher);
        hasher.finish()
    }

    mod equality {
        use super::*;

        #[test]
        fn people_with_same_fields_are_equal() {
            let a = Person::new("Ada", "94040");
            let b = Person::new("Ada".to_string(), "94040".to_string());

            assert_eq!(a, b);
            assert_eq!(hash_of(&a), hash_of(&b));
        }

        #[test]
        fn people_differing_in_one_field_are_not_equal() {
            assert_ne!(Person::new("Ada", "94040"), Person::new("Ada", "94041"));
            assert_ne!(Person::new("Ada", "94040"), Person::new("Bob", "94040"));
        }

        #[test]
        fn swapped_fields_hash_the_same_but_are_not_equal() {
            // Given two people whose field values are swapped
            let a = Person::new("94040", "Ada");
            let b = Person::new("Ada", "94040");

            // Then the hash is order independent
            assert_eq!(hash_of(&a), hash_of(&b));

            // And equality still compares field by field
            assert_ne!(a, b);
        }
    }

    #[test]
    fn set_membership_dedupes_equal_people() {
        let mut people = HashSet::new();

        assert!(people.insert(Person::new_test()));
        assert!(!people.insert(Person::new_test()));

        assert_eq!(people.len(), 1);
    }

    #[test]
    fn display_renders_both_fields() {
        let person = Person::new("Ada Lovelace", "94301");

        assert_eq!(
            person.to_string(),
            "Person(name=Ada Lovelace, zipcode=94301)"
        );
    }
}
