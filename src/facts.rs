//! Random fact generators. Pure functions over an injected RNG so runs are
//! reproducible when the caller seeds the generator.

use chrono::{Duration, Utc};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::vocab;

const BUSINESS_HOURS: [u32; 8] = [8, 9, 10, 11, 13, 14, 15, 16];
const QUARTER_HOURS: [u32; 4] = [0, 15, 30, 45];

pub fn address(rng: &mut impl Rng) -> String {
    let number = rng.gen_range(1..=9999);
    let street = vocab::STREETS.choose(rng).copied().unwrap_or("Main St");
    let (city, state) = vocab::CITIES.choose(rng).copied().unwrap_or(("Austin", "TX"));
    format!("{number} {street}, {city}, {state}")
}

pub fn phone_number(rng: &mut impl Rng) -> String {
    let area = vocab::AREA_CODES.choose(rng).copied().unwrap_or(512);
    let exchange = rng.gen_range(100..=999);
    let subscriber = rng.gen_range(1000..=9999);
    format!("({area}) {exchange}-{subscriber}")
}

pub fn email_domain(rng: &mut impl Rng) -> &'static str {
    vocab::EMAIL_DOMAINS.choose(rng).copied().unwrap_or("gmail.com")
}

/// `YYYY-MM-DD`, between 1 and `max_days_ahead` days from today.
pub fn future_date(rng: &mut impl Rng, max_days_ahead: i64) -> String {
    let days = rng.gen_range(1..=max_days_ahead.max(1));
    (Utc::now() + Duration::days(days)).format("%Y-%m-%d").to_string()
}

/// `YYYY-MM-DD`, between 1 and `max_days_ago` days before today.
pub fn past_date(rng: &mut impl Rng, max_days_ago: i64) -> String {
    let days = rng.gen_range(1..=max_days_ago.max(1));
    (Utc::now() - Duration::days(days)).format("%Y-%m-%d").to_string()
}

/// `HH:MM` on a business hour (lunch hour skipped), quarter-hour minutes.
pub fn business_time(rng: &mut impl Rng) -> String {
    let hour = BUSINESS_HOURS.choose(rng).copied().unwrap_or(9);
    let minute = QUARTER_HOURS.choose(rng).copied().unwrap_or(0);
    format!("{hour:02}:{minute:02}")
}

/// Lowercases and strips everything but letters and digits, for deriving
/// email/website hosts from a company name.
pub fn normalize_company_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn phone_number_is_formatted() {
        let mut rng = rng();
        for _ in 0..50 {
            let phone = phone_number(&mut rng);
            let (area, rest) = phone.split_once(") ").expect("area code separator");
            assert!(area.starts_with('('));
            let (exchange, subscriber) = rest.split_once('-').expect("exchange separator");
            assert_eq!(exchange.len(), 3);
            assert_eq!(subscriber.len(), 4);
        }
    }

    #[test]
    fn business_time_skips_lunch() {
        let mut rng = rng();
        for _ in 0..100 {
            let time = business_time(&mut rng);
            let (hour, minute) = time.split_once(':').unwrap();
            let hour: u32 = hour.parse().unwrap();
            let minute: u32 = minute.parse().unwrap();
            assert!(BUSINESS_HOURS.contains(&hour), "hour {hour} outside business hours");
            assert!(QUARTER_HOURS.contains(&minute));
        }
    }

    #[test]
    fn dates_point_the_right_way() {
        let mut rng = rng();
        let today = Utc::now().date_naive();
        for _ in 0..50 {
            let ahead = NaiveDate::parse_from_str(&future_date(&mut rng, 60), "%Y-%m-%d").unwrap();
            let behind = NaiveDate::parse_from_str(&past_date(&mut rng, 30), "%Y-%m-%d").unwrap();
            assert!(ahead > today);
            assert!(behind < today);
            assert!(ahead <= today + Duration::days(60));
            assert!(behind >= today - Duration::days(30));
        }
    }

    #[test]
    fn normalize_strips_punctuation_and_case() {
        assert_eq!(
            normalize_company_name("Summit Heating & Air"),
            "summitheatingair"
        );
        assert_eq!(normalize_company_name("ProFlow Plumbing Group"), "proflowplumbinggroup");
    }
}
