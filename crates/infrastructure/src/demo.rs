//! Demo data generator
//!
//! Fills the address book with plausible Ukrainian contacts so a fresh
//! session has something to browse. Every record goes through the normal
//! book API, so name uniqueness and field validation still apply.

use chrono::{Duration, Local};
use domain::DomainError;
use domain::entities::{AddressBook, Record};
use domain::value_objects::{Birthday, ContactName};
use rand::Rng;
use tracing::info;

const FIRST_NAMES: &[&str] = &[
    "Olena", "Taras", "Iryna", "Petro", "Oksana", "Andriy", "Kateryna", "Mykola", "Sofia",
    "Dmytro",
];

const LAST_NAMES: &[&str] = &[
    "Shevchenko",
    "Kovalenko",
    "Bondarenko",
    "Tkachenko",
    "Kravchenko",
    "Boyko",
    "Melnyk",
    "Shevchuk",
    "Lysenko",
    "Moroz",
];

/// Mobile operator prefixes used for generated phone numbers
const OPERATOR_CODES: &[&str] = &["050", "067", "098", "093", "066"];

/// Oldest generated birthday, counted back from today
const MAX_AGE_DAYS: i64 = 30 * 365;

/// Generate `count` demo contacts and add them to the book
///
/// Each contact gets one phone number shaped like a local mobile number
/// ("8" + operator code + six digits) and a birthday within the last
/// thirty years. Names are drawn from fixed pools; when a drawn name is
/// already taken, a numeric suffix keeps it unique, so repeated runs
/// keep adding contacts instead of failing.
pub fn generate_demo_contacts(
    book: &mut AddressBook,
    count: usize,
) -> Result<String, DomainError> {
    let mut rng = rand::rng();
    let today = Local::now().date_naive();

    for _ in 0..count {
        let name = unique_name(book, &mut rng);
        let mut record = Record::new(ContactName::new(name)?);
        record.add_phone(&random_phone(&mut rng))?;

        let birthday = today - Duration::days(rng.random_range(0..=MAX_AGE_DAYS));
        record.set_birthday(&birthday.format(Birthday::DATE_FORMAT).to_string())?;

        book.add(record)?;
    }

    info!(count, "Generated demo contacts");
    Ok(format!(
        "{count} demo contacts generated and added to the address book."
    ))
}

/// Drawn name, suffixed with a counter when the pool repeats
fn unique_name(book: &AddressBook, rng: &mut impl Rng) -> String {
    let first = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];
    let base = format!("{first}_{last}");
    if book.find(&base).is_none() {
        return base;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{base}_{n}");
        if book.find(&candidate).is_none() {
            return candidate;
        }
        n += 1;
    }
}

fn random_phone(rng: &mut impl Rng) -> String {
    let code = OPERATOR_CODES[rng.random_range(0..OPERATOR_CODES.len())];
    format!("8{code}{:06}", rng.random_range(0..1_000_000_u32))
}
