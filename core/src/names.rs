//! Deterministic name generation for demo datasets.
//!
//! All generation is deterministic: same RNG seed, same names.

use crate::rng::StreamRng;

pub struct NameGenerator;

impl NameGenerator {
    /// Generate a full customer name (first + last).
    pub fn full_name(rng: &mut StreamRng) -> String {
        format!("{} {}", rng.pick(FIRST_NAMES), rng.pick(LAST_NAMES))
    }

    /// Derive a plausible email address from a full name.
    pub fn email_for(name: &str, rng: &mut StreamRng) -> String {
        let slug = name.to_lowercase().replace(' ', ".");
        format!("{slug}@{}", rng.pick(EMAIL_DOMAINS))
    }

    /// Generate a US-style phone number.
    pub fn phone(rng: &mut StreamRng) -> String {
        format!(
            "555-{:03}-{:04}",
            rng.next_u64_below(1000),
            rng.next_u64_below(10000)
        )
    }

    /// Generate a merchant name ("Prefix Trade Suffix").
    pub fn business_name(rng: &mut StreamRng) -> String {
        format!(
            "{} {} {}",
            rng.pick(BUSINESS_PREFIXES),
            rng.pick(BUSINESS_TRADES),
            rng.pick(BUSINESS_SUFFIXES)
        )
    }

    /// Derive a contact address from a merchant name, dropping anything
    /// that does not belong in a mail slug ("&", ".", spaces).
    pub fn business_email(name: &str) -> String {
        let slug: String = name
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect::<String>()
            .to_lowercase();
        format!("hello@{slug}.example.com")
    }

    /// Generate an uppercase referral code, e.g. "REF-K7Q2MX".
    pub fn referral_code(rng: &mut StreamRng) -> String {
        const ALPHABET: &[u8] = b"ABCDEFGHJKMNPQRSTUVWXYZ23456789";
        let body: String = (0..6)
            .map(|_| ALPHABET[rng.next_u64_below(ALPHABET.len() as u64) as usize] as char)
            .collect();
        format!("REF-{body}")
    }
}

const FIRST_NAMES: &[&str] = &[
    "James", "Maria", "Robert", "Aisha", "Wei", "Elena", "Daniel", "Priya", "Marcus", "Sofia",
    "Omar", "Hannah", "Luis", "Grace", "Kenji", "Amara", "Peter", "Nadia", "Victor", "Rosa",
    "Tomas", "Ingrid", "Samuel", "Leila", "Andre", "Chloe", "Ivan", "Fatima", "Diego", "Emma",
    "Noah", "Yuki", "Carlos", "Zara", "Felix", "Anya", "Hassan", "Lucia", "Jonas", "Mei",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Garcia", "Chen", "Johnson", "Okafor", "Müller", "Silva", "Patel", "Kim", "Brown",
    "Nguyen", "Rossi", "Kowalski", "Haddad", "Jones", "Tanaka", "Lopez", "Novak", "Osei",
    "Williams", "Petrov", "Santos", "Khan", "Andersson", "Moreau", "Davis", "Yamamoto", "Costa",
    "Ali", "Wilson", "Ferrari", "Larsen", "Diallo", "Martin", "Schmidt", "Ito", "Torres",
    "Virtanen", "Mensah", "Taylor",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "mail.example.com", "inbox.example.org"];

const BUSINESS_PREFIXES: &[&str] = &[
    "Corner", "Golden", "Urban", "Riverside", "Sunset", "Harbor", "Maple", "Summit", "Cedar",
    "Willow",
];

const BUSINESS_TRADES: &[&str] = &[
    "Coffee", "Bakery", "Grill", "Books", "Fitness", "Florist", "Deli", "Cycles", "Records",
    "Garden",
];

const BUSINESS_SUFFIXES: &[&str] = &["Co.", "House", "Shop", "Studio", "& Sons", "Collective"];
