//! Sampler - The single random source behind every generator
//!
//! Holds a seedable PRNG and the clock anchor that all relative dates are
//! computed from, so a fixed seed and anchor reproduce a dataset exactly.

use chrono::{DateTime, Duration, NaiveDate, Timelike, Utc};
use fake::faker::address::en::{
    BuildingNumber, CityName, CountryName, PostCode, StateAbbr, StateName, StreetName, ZipCode,
};
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::{SafeEmail, Username};
use fake::faker::lorem::en::{Paragraph, Sentence, Word};
use fake::faker::name::en::{FirstName, LastName, Name};
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use rand::distributions::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

const SECONDS_PER_DAY: i64 = 86_400;

/// Random source + clock anchor
#[derive(Debug, Clone)]
pub struct Sampler {
    rng: StdRng,
    now: DateTime<Utc>,
}

impl Sampler {
    pub fn new(rng: StdRng, now: DateTime<Utc>) -> Self {
        Self { rng, now }
    }

    /// Reproducible sampler
    pub fn seeded(seed: u64, now: DateTime<Utc>) -> Self {
        Self::new(StdRng::seed_from_u64(seed), now)
    }

    /// OS-seeded sampler anchored at the current instant
    pub fn from_entropy() -> Self {
        Self::with_anchor(Utc::now())
    }

    /// OS-seeded sampler with a fixed clock anchor
    pub fn with_anchor(now: DateTime<Utc>) -> Self {
        Self::new(StdRng::from_entropy(), now)
    }

    /// The generation instant all relative dates are computed from
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    // ============================================
    // Primitive draws
    // ============================================

    /// Uniform pick from a non-empty literal table
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.rng.gen_range(0..items.len())]
    }

    pub fn choice<T: Copy>(&mut self, items: &[T]) -> T {
        *self.pick(items)
    }

    pub fn choice_str(&mut self, items: &[&str]) -> String {
        self.pick(items).to_string()
    }

    /// Inclusive integer range
    pub fn int<T: SampleUniform + PartialOrd>(&mut self, lo: T, hi: T) -> T {
        self.rng.gen_range(lo..=hi)
    }

    /// Uniform float in `[lo, hi]`
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        self.rng.gen_range(lo..=hi)
    }

    /// Uniform float in `[lo, hi]` rounded to two decimals
    pub fn amount(&mut self, lo: f64, hi: f64) -> f64 {
        round2(self.rng.gen_range(lo..=hi))
    }

    /// Uniform float in `[lo, hi]` rounded to one decimal
    pub fn rating(&mut self, lo: f64, hi: f64) -> f64 {
        (self.rng.gen_range(lo..=hi) * 10.0).round() / 10.0
    }

    pub fn coin(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// `count` decimal digits, zero padded
    pub fn digits(&mut self, count: usize) -> String {
        (0..count)
            .map(|_| char::from(b'0' + self.rng.gen_range(0..10u8)))
            .collect()
    }

    /// Prefix followed by `count` digits, e.g. `code("SO", 8)` -> `SO04812291`
    pub fn code(&mut self, prefix: &str, count: usize) -> String {
        format!("{}{}", prefix, self.digits(count))
    }

    /// Two digit category + four digit item, as used for HSN codes
    pub fn hsn_code(&mut self) -> String {
        format!("{:02}{}", self.int(1u8, 99), self.int(1000u16, 9999))
    }

    /// State code + 10 digits + `Z` + check digit
    pub fn gstin(&mut self) -> String {
        format!(
            "{:02}{}Z{}",
            self.int(1u8, 37),
            self.digits(10),
            self.digits(1)
        )
    }

    pub fn uuid(&mut self) -> Uuid {
        uuid::Builder::from_random_bytes(self.rng.gen()).into_uuid()
    }

    pub fn hex(&mut self, len: usize) -> String {
        const HEX: &[u8; 16] = b"0123456789abcdef";
        (0..len)
            .map(|_| char::from(HEX[self.rng.gen_range(0..16)]))
            .collect()
    }

    /// `k` distinct elements in random order
    pub fn sample<T: Clone>(&mut self, items: &[T], k: usize) -> Vec<T> {
        items.choose_multiple(&mut self.rng, k).cloned().collect()
    }

    /// Between `min` and `max` (inclusive) distinct elements
    pub fn sample_between<T: Clone>(&mut self, items: &[T], min: usize, max: usize) -> Vec<T> {
        let k = self.int(min, max.min(items.len()));
        self.sample(items, k)
    }

    // ============================================
    // Dates
    // ============================================

    /// Uniform instant within the last `max_days` days
    pub fn days_ago(&mut self, max_days: i64) -> DateTime<Utc> {
        let offset = self.int(0, max_days * SECONDS_PER_DAY);
        self.now - Duration::seconds(offset)
    }

    /// Uniform instant in `[start, end]`
    pub fn between(&mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> DateTime<Utc> {
        if end <= start {
            return start;
        }
        let span = (end - start).num_seconds();
        start + Duration::seconds(self.int(0, span))
    }

    pub fn plus_days(&mut self, base: DateTime<Utc>, lo: i64, hi: i64) -> DateTime<Utc> {
        base + Duration::days(self.int(lo, hi))
    }

    pub fn plus_hours(&mut self, base: DateTime<Utc>, lo: i64, hi: i64) -> DateTime<Utc> {
        base + Duration::hours(self.int(lo, hi))
    }

    /// Same day as `base`, at a random minute inside `[from_hour, to_hour]`
    pub fn at_hour(&mut self, base: DateTime<Utc>, from_hour: u32, to_hour: u32) -> DateTime<Utc> {
        let hour = self.int(from_hour, to_hour);
        let minute = self.int(0u32, 59);
        base.with_hour(hour)
            .and_then(|t| t.with_minute(minute))
            .unwrap_or(base)
    }

    /// Birth date for someone aged between `min_age` and `max_age`
    pub fn date_of_birth(&mut self, min_age: i64, max_age: i64) -> NaiveDate {
        let days = self.int(min_age * 365, max_age * 365);
        (self.now - Duration::days(days)).date_naive()
    }

    // ============================================
    // Faker-backed text
    // ============================================

    pub fn company(&mut self) -> String {
        CompanyName().fake_with_rng(&mut self.rng)
    }

    pub fn person(&mut self) -> String {
        Name().fake_with_rng(&mut self.rng)
    }

    pub fn first_name(&mut self) -> String {
        FirstName().fake_with_rng(&mut self.rng)
    }

    pub fn last_name(&mut self) -> String {
        LastName().fake_with_rng(&mut self.rng)
    }

    pub fn email(&mut self) -> String {
        SafeEmail().fake_with_rng(&mut self.rng)
    }

    pub fn username(&mut self) -> String {
        Username().fake_with_rng(&mut self.rng)
    }

    pub fn phone(&mut self) -> String {
        PhoneNumber().fake_with_rng(&mut self.rng)
    }

    pub fn address(&mut self) -> String {
        let number: String = BuildingNumber().fake_with_rng(&mut self.rng);
        let street: String = StreetName().fake_with_rng(&mut self.rng);
        let city: String = CityName().fake_with_rng(&mut self.rng);
        let state: String = StateAbbr().fake_with_rng(&mut self.rng);
        let zip: String = ZipCode().fake_with_rng(&mut self.rng);
        format!("{} {}\n{}, {} {}", number, street, city, state, zip)
    }

    pub fn city(&mut self) -> String {
        CityName().fake_with_rng(&mut self.rng)
    }

    pub fn state(&mut self) -> String {
        StateName().fake_with_rng(&mut self.rng)
    }

    pub fn country(&mut self) -> String {
        CountryName().fake_with_rng(&mut self.rng)
    }

    pub fn postcode(&mut self) -> String {
        PostCode().fake_with_rng(&mut self.rng)
    }

    pub fn word(&mut self) -> String {
        Word().fake_with_rng(&mut self.rng)
    }

    /// Word with its first letter upper-cased
    pub fn title_word(&mut self) -> String {
        let word = self.word();
        let mut chars = word.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => word,
        }
    }

    pub fn sentence(&mut self) -> String {
        Sentence(4..10).fake_with_rng(&mut self.rng)
    }

    /// Lorem text no longer than `max_chars`, ending on a full stop
    pub fn text(&mut self, max_chars: usize) -> String {
        let paragraph: String = Paragraph(1..4).fake_with_rng(&mut self.rng);
        truncate_words(&paragraph, max_chars)
    }
}

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format an integer with `,` thousands separators
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if value < 0 {
        out.insert(0, '-');
    }
    out
}

fn truncate_words(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    // Reserve one char for the closing full stop
    let mut out = String::new();
    let mut len = 0;
    for word in text.split_whitespace() {
        let extra = word.chars().count() + usize::from(len > 0);
        if len + extra + 1 > max_chars {
            break;
        }
        if len > 0 {
            out.push(' ');
        }
        out.push_str(word);
        len += extra;
    }

    let mut out = out
        .trim_end_matches(|c: char| !c.is_alphanumeric())
        .to_string();
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 24, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = Sampler::seeded(7, anchor());
        let mut b = Sampler::seeded(7, anchor());
        for _ in 0..20 {
            assert_eq!(a.code("SO", 8), b.code("SO", 8));
            assert_eq!(a.company(), b.company());
            assert_eq!(a.uuid(), b.uuid());
        }
    }

    #[test]
    fn test_amount_has_two_decimals_at_most() {
        let mut s = Sampler::seeded(1, anchor());
        for _ in 0..500 {
            let v = s.amount(10.0, 100000.0);
            let text = v.to_string();
            let decimals = text.split('.').nth(1).map_or(0, str::len);
            assert!(decimals <= 2, "{} has too many decimals", text);
            assert!((10.0..=100000.0).contains(&v));
        }
    }

    #[test]
    fn test_days_ago_stays_in_window() {
        let mut s = Sampler::seeded(3, anchor());
        for _ in 0..200 {
            let t = s.days_ago(365);
            assert!(t <= anchor());
            assert!(t >= anchor() - Duration::days(365));
        }
    }

    #[test]
    fn test_code_and_gstin_shapes() {
        let mut s = Sampler::seeded(11, anchor());
        let code = s.code("INV", 8);
        assert!(code.starts_with("INV"));
        assert_eq!(code.len(), 11);

        let gstin = s.gstin();
        assert_eq!(gstin.len(), 14);
        assert_eq!(&gstin[12..13], "Z");

        assert_eq!(s.hsn_code().len(), 6);
    }

    #[test]
    fn test_text_respects_limit() {
        let mut s = Sampler::seeded(5, anchor());
        for _ in 0..50 {
            let t = s.text(100);
            assert!(t.chars().count() <= 100);
            assert!(t.ends_with('.'));
        }
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-45000), "-45,000");
    }

    #[test]
    fn test_sample_between_is_distinct() {
        let mut s = Sampler::seeded(9, anchor());
        let pool = ["a", "b", "c", "d"];
        for _ in 0..50 {
            let picked = s.sample_between(&pool, 1, 4);
            assert!((1..=4).contains(&picked.len()));
            let mut sorted = picked.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), picked.len());
        }
    }
}
