const EMAIL_LOCAL_SYMBOLS: &str = ".!#$%&'*+/=?^_`{|}~-";

/// Email check following the HTML `type="email"` rule: one `@`, a local part
/// of letters, digits and `EMAIL_LOCAL_SYMBOLS`, and dot-separated domain
/// labels. A single-label domain such as `localhost` is valid.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local_part, domain_part)) = email.trim().split_once('@') else {
        return false;
    };

    let local_ok = !local_part.is_empty()
        && local_part
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || EMAIL_LOCAL_SYMBOLS.contains(c));

    local_ok && domain_part.split('.').all(is_domain_label)
}

fn is_domain_label(label: &str) -> bool {
    (1..=63).contains(&label.len())
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn input_class(has_error: bool) -> &'static str {
    if has_error {
        "form-control is-invalid"
    } else {
        "form-control"
    }
}

pub fn select_class(has_error: bool) -> &'static str {
    if has_error {
        "form-select is-invalid"
    } else {
        "form-select"
    }
}
