/// Splits a full name into (first_name, last_name).
///
/// The first whitespace-separated token becomes the first name; everything
/// after it, joined by single spaces, becomes the last name. Missing parts
/// degrade to empty strings rather than errors.
pub fn split_full_name(name: &str) -> (String, String) {
    let mut parts = name.split_whitespace();
    let first = parts.next().unwrap_or("").to_string();
    let rest: Vec<&str> = parts.collect();
    (first, rest.join(" "))
}

/// Derives a username from the local part of an email address. Falls back to
/// the full input when there is nothing before the '@'.
pub fn username_from_email(email: &str) -> String {
    match email.split('@').next() {
        Some(local) if !local.is_empty() => local.to_string(),
        _ => email.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_three_part_name() {
        let (first, last) = split_full_name("A B C");
        assert_eq!(first, "A");
        assert_eq!(last, "B C");
    }

    #[test]
    fn single_token_has_empty_last_name() {
        let (first, last) = split_full_name("A");
        assert_eq!(first, "A");
        assert_eq!(last, "");
    }

    #[test]
    fn empty_name_yields_empty_parts() {
        let (first, last) = split_full_name("");
        assert_eq!(first, "");
        assert_eq!(last, "");
    }

    #[test]
    fn collapses_extra_whitespace() {
        let (first, last) = split_full_name("  Ana   Maria  Silva ");
        assert_eq!(first, "Ana");
        assert_eq!(last, "Maria Silva");
    }

    #[test]
    fn username_is_email_local_part() {
        assert_eq!(username_from_email("local@domain"), "local");
    }

    #[test]
    fn username_falls_back_to_full_email() {
        assert_eq!(username_from_email("@domain"), "@domain");
        assert_eq!(username_from_email("no-at-sign"), "no-at-sign");
    }
}
