//! Individual field synthesizers: person names, street addresses,
//! zip codes and English ordinals.
//!
//! Every function draws from the caller's random number generator, so
//! seeding that one generator makes the whole dataset reproducible.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::scale::{Scale, MAX_AGE};
use crate::vocab;

/// First and last name for an entity. Name vocabularies are tiny, so
/// the numeric row id is appended to the first name in parentheses as
/// the uniqueness tag; the name itself is expected to collide.
pub struct Person {
    pub first_name: String,
    pub last_name: String,
}

/// Street address, city and zip code for one row.
pub struct Address {
    pub street: String,
    pub city: String,
    pub zip: u32,
}

/// Generate first and last name fields, tagging the first name with
/// the row id (e.g. "Emma (412)").
pub fn make_person(rng: &mut ChaCha8Rng, id: u64) -> Person {
    let first = vocab::FIRST_NAMES[rng.gen_range(0..vocab::FIRST_NAMES.len())];
    let last = vocab::LAST_NAMES[rng.gen_range(0..vocab::LAST_NAMES.len())];
    Person {
        first_name: format!("{first} ({id})"),
        last_name: last.to_string(),
    }
}

/// Generate a patient age, uniform in 1..=MAX_AGE (not realistic).
pub fn make_patient_age(rng: &mut ChaCha8Rng) -> u32 {
    rng.gen_range(1..=MAX_AGE)
}

/// Generate a voter age, uniform in 0..=MAX_AGE.
pub fn make_voter_age(rng: &mut ChaCha8Rng) -> u32 {
    rng.gen_range(0..=MAX_AGE)
}

/// Generate the (street, city, zip) fields of an address.
pub fn make_address(rng: &mut ChaCha8Rng, scale: &Scale, street_limit: usize) -> Address {
    let street = make_street_address(rng, scale, street_limit);
    let city = vocab::CITIES[rng.gen_range(0..vocab::CITIES.len())].to_string();
    let zip = make_zip_code(rng);
    Address { street, city, zip }
}

/// Generate a street address of the form "1000 53rd St NE", truncated
/// to at most `limit` characters. Truncation may cut mid-token; the
/// result is used as-is.
pub fn make_street_address(rng: &mut ChaCha8Rng, scale: &Scale, limit: usize) -> String {
    let mut address = String::new();

    let house_number = rng.gen_range(1..=scale.max_house_number());
    if house_number == 1 {
        address.push_str("One ");
    } else {
        address.push_str(&format!("{house_number} "));
    }

    let street_number = rng.gen_range(1..=scale.max_street_number());
    address.push_str(&ordinal_form_of(street_number));
    address.push(' ');
    address.push_str(if rng.gen() { "St " } else { "Ave " });
    address.push_str(vocab::DIRECTIONS[rng.gen_range(0..vocab::DIRECTIONS.len())]);

    address.truncate(limit);
    address
}

/// Generate a plausible zip code for the state of Washington.
pub fn make_zip_code(rng: &mut ChaCha8Rng) -> u32 {
    98000 + rng.gen_range(0..1000)
}

/// Stringify a number in English ordinal form (e.g. 53 -> "53rd").
pub fn ordinal_form_of(value: u32) -> String {
    format!("{value}{}", ordinal_suffix_for(value))
}

/// English ordinal suffix for a value. Values whose remainder mod 100
/// lies in 10..=20 take "th" (11th, 12th, 13th, ...); otherwise the
/// suffix is keyed by the last digit.
pub fn ordinal_suffix_for(value: u32) -> &'static str {
    let hundred_remainder = value % 100;
    if (10..=20).contains(&hundred_remainder) {
        return "th";
    }
    match value % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::make_rng;

    #[test]
    fn ordinal_forms() {
        assert_eq!(ordinal_form_of(1), "1st");
        assert_eq!(ordinal_form_of(2), "2nd");
        assert_eq!(ordinal_form_of(3), "3rd");
        assert_eq!(ordinal_form_of(4), "4th");
        assert_eq!(ordinal_form_of(11), "11th");
        assert_eq!(ordinal_form_of(12), "12th");
        assert_eq!(ordinal_form_of(13), "13th");
        assert_eq!(ordinal_form_of(21), "21st");
        assert_eq!(ordinal_form_of(111), "111th");
        assert_eq!(ordinal_form_of(113), "113th");
    }

    #[test]
    fn zip_codes_in_washington_range() {
        let mut rng = make_rng(1, "zip");
        for _ in 0..1000 {
            let zip = make_zip_code(&mut rng);
            assert!((98000..=98999).contains(&zip));
        }
    }

    #[test]
    fn street_address_respects_limit() {
        let mut rng = make_rng(2, "street");
        let scale = Scale::default();
        for _ in 0..200 {
            let street = make_street_address(&mut rng, &scale, 20);
            assert!(street.len() <= 20, "{street:?} exceeds 20");
        }
        // the shortest possible address ("One 1st St N") is 12
        // characters, so these limits always truncate, and truncation
        // must land on exactly the limit
        for limit in [5, 10] {
            for _ in 0..200 {
                let street = make_street_address(&mut rng, &scale, limit);
                assert_eq!(street.len(), limit, "{street:?} not cut to {limit}");
            }
        }
    }

    #[test]
    fn person_first_name_carries_id_tag() {
        let mut rng = make_rng(3, "person");
        let person = make_person(&mut rng, 412);
        assert!(person.first_name.ends_with(" (412)"));
        assert!(!person.last_name.is_empty());
    }

    #[test]
    fn ages_in_declared_ranges() {
        let mut rng = make_rng(4, "ages");
        for _ in 0..1000 {
            let age = make_patient_age(&mut rng);
            assert!((1..=100).contains(&age));
            let age = make_voter_age(&mut rng);
            assert!(age <= 100);
        }
    }
}
