//! Random identifiers for invoices and stored objects.

use chrono::{DateTime, Utc};
use rand::Rng;
use uuid::Uuid;

const INVOICE_SUFFIX_CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const INVOICE_SUFFIX_LEN: usize = 6;

/// `INV-<unix millis>-<6 uppercase alphanumerics>`, used as the gateway order ID.
pub fn invoice_number(now: DateTime<Utc>) -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..INVOICE_SUFFIX_LEN)
        .map(|_| {
            let idx = rng.random_range(0..INVOICE_SUFFIX_CHARSET.len());
            INVOICE_SUFFIX_CHARSET[idx] as char
        })
        .collect();

    format!("INV-{}-{}", now.timestamp_millis(), suffix)
}

/// Random v4 UUID as 32 lowercase hex characters.
pub fn object_id() -> String {
    Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{invoice_number, object_id};

    #[test]
    fn invoice_number_has_expected_shape() {
        let now = Utc.timestamp_millis_opt(1_717_000_000_123).unwrap();

        let number = invoice_number(now);
        let parts: Vec<&str> = number.split('-').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "INV");
        assert_eq!(parts[1], "1717000000123");
        assert_eq!(parts[2].len(), 6);
        assert!(parts[2]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn object_ids_are_hex_and_distinct() {
        let a = object_id();
        let b = object_id();

        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(uuid::Uuid::parse_str(&a).unwrap().get_version_num(), 4);
        assert_ne!(a, b);
    }
}
