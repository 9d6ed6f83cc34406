#[derive(Debug, Clone)]
pub struct SampleOptions {
    pub seed: u64,
    pub people_per_zipcode: usize,
    pub unmatched_people: usize,
}

// Implements: https://rust-unofficial.github.io/patterns/patterns/creational/builder.html
impl SampleOptions {
    /// Seed for the name / zipcode generator, the same seed always gives the same people
    pub fn set_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn set_people_per_zipcode(mut self, people_per_zipcode: usize) -> Self {
        self.people_per_zipcode = people_per_zipcode;
        self
    }

    /// Extra people whose zipcode no city lists. They are left out of the index.
    pub fn set_unmatched_people(mut self, unmatched_people: usize) -> Self {
        self.unmatched_people = unmatched_people;
        self
    }
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            seed: 0,
            people_per_zipcode: 1,
            unmatched_people: 0,
        }
    }
}

#[cfg(test)]
impl SampleOptions {
    pub fn new_test() -> Self {
        SampleOptions::default()
            .set_seed(42)
            .set_people_per_zipcode(2)
            .set_unmatched_people(3)
    }
}
