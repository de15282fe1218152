/// Password validation for the user admin endpoints.
pub struct PasswordValidator;

impl PasswordValidator {
    const MIN_LENGTH: usize = 12;

    pub fn validate(password: &str) -> Result<(), String> {
        if password.len() < Self::MIN_LENGTH {
            return Err(format!(
                "Password must be at least {} characters",
                Self::MIN_LENGTH
            ));
        }

        let has_uppercase = password.chars().any(|c| c.is_uppercase());
        let has_lowercase = password.chars().any(|c| c.is_lowercase());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        let has_special = password.chars().any(|c| !c.is_alphanumeric());

        let requirements_met = [has_uppercase, has_lowercase, has_digit, has_special]
            .iter()
            .filter(|b| **b)
            .count();

        if requirements_met < 3 {
            return Err(
                "Password must contain at least 3 of: uppercase, lowercase, digit, special character"
                    .to_string(),
            );
        }

        Ok(())
    }
}

/// Email validation
pub fn validate_email(email: &str) -> bool {
    let email = email.trim();

    if email.is_empty() || email.len() > 254 {
        return false;
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return false;
    }

    let local = parts[0];
    let domain = parts[1];

    if local.is_empty() || local.len() > 64 || domain.is_empty() {
        return false;
    }

    // Domain must have at least one dot
    if !domain.contains('.') {
        return false;
    }

    true
}

/// Phone validation: optional leading +, then 7-15 digits with spaces or
/// hyphens allowed as separators.
pub fn validate_phone(phone: &str) -> bool {
    let phone = phone.trim();
    if phone.is_empty() {
        return false;
    }

    let rest = phone.strip_prefix('+').unwrap_or(phone);
    let digits: String = rest.chars().filter(|c| c.is_ascii_digit()).collect();

    rest.chars()
        .all(|c| c.is_ascii_digit() || c == ' ' || c == '-')
        && (7..=15).contains(&digits.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_length_floor() {
        assert!(PasswordValidator::validate("Ab1!short").is_err());
        assert!(PasswordValidator::validate("Abcdef123456").is_ok());
    }

    #[test]
    fn test_password_needs_three_character_classes() {
        // Lowercase only, and lowercase plus digits.
        assert!(PasswordValidator::validate("abcdefghijkl").is_err());
        assert!(PasswordValidator::validate("abcdefghij12").is_err());
        // Three classes pass, with or without the fourth.
        assert!(PasswordValidator::validate("abcdefghiJ12").is_ok());
        assert!(PasswordValidator::validate("abcdefgHi12!").is_ok());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("staff@kennedia.example"));
        assert!(validate_email("  padded@kennedia.example  "));
        assert!(!validate_email(""));
        assert!(!validate_email("no-at-sign.example"));
        assert!(!validate_email("two@@kennedia.example"));
        assert!(!validate_email("nodomain@"));
        assert!(!validate_email("dotless@localhost"));
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("+351 912 345 678"));
        assert!(validate_phone("912-345-678"));
        assert!(validate_phone("1234567"));
        assert!(!validate_phone("123456"));
        assert!(!validate_phone("1234567890123456"));
        assert!(!validate_phone("(351) 912345678"));
        assert!(!validate_phone(""));
    }
}
