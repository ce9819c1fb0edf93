//! Field-level validation rules shared by the auth, listing, and profile forms.

pub const MIN_PASSWORD_LEN: usize = 6;

/// Loose structural email check: `local@domain.tld`, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

/// Removes all whitespace from a phone number.
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Indonesian mobile number: `+62`, `62` or `0` prefix, then `8`, a digit `1-9`, and
/// 6 to 9 more digits. Whitespace is ignored.
pub fn is_valid_phone(phone: &str) -> bool {
    let phone = normalize_phone(phone);

    let rest = phone
        .strip_prefix("+62")
        .or_else(|| phone.strip_prefix("62"))
        .or_else(|| phone.strip_prefix('0'));
    let Some(rest) = rest else {
        return false;
    };

    let Some(rest) = rest.strip_prefix('8') else {
        return false;
    };

    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if ('1'..='9').contains(&c) => {}
        _ => return false,
    }

    let tail = chars.as_str();
    (6..=9).contains(&tail.len()) && tail.chars().all(|c| c.is_ascii_digit())
}
