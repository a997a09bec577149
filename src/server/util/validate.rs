/// The only email provider accepted at signup.
const ALLOWED_EMAIL_DOMAIN: &str = "gmail.com";

/// Checks that a signup email is well-formed and on the allowed provider.
///
/// The check is deliberately shallow: a non-empty local part and an exact,
/// case-insensitive domain match. Anything stricter belongs to the provider.
pub fn is_allowed_email(email: &str) -> bool {
    let Some((local, domain)) = email.trim().rsplit_once('@') else {
        return false;
    };

    !local.is_empty() && domain.eq_ignore_ascii_case(ALLOWED_EMAIL_DOMAIN)
}
