//! Password-strength checks for the registration form.
//!
//! ```rust
//! use ideabox_types::password::{Strength, validate_password};
//!
//! let report = validate_password("Coffee#2024");
//! assert!(report.is_valid);
//! assert_eq!(report.strength, Strength::Strong);
//! ```

use serde::Serialize;

/// Characters that satisfy the "special character" rule.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{};:'\"|<>?,./`~";

pub const MIN_LENGTH: usize = 8;
const STRONG_LENGTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

/// Which individual rules the password meets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Requirements {
    pub length: bool,
    pub lowercase: bool,
    pub uppercase: bool,
    pub number: bool,
    pub special: bool,
}

impl Requirements {
    fn met(&self) -> usize {
        [
            self.length,
            self.lowercase,
            self.uppercase,
            self.number,
            self.special,
        ]
        .into_iter()
        .filter(|met| *met)
        .count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordValidation {
    pub is_valid: bool,
    /// One message per unmet rule, in rule order.
    pub errors: Vec<&'static str>,
    pub strength: Strength,
    pub requirements: Requirements,
}

pub fn validate_password(password: &str) -> PasswordValidation {
    let length = password.chars().count();
    let requirements = Requirements {
        length: length >= MIN_LENGTH,
        lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
        uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
        number: password.chars().any(|c| c.is_ascii_digit()),
        special: password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)),
    };

    let errors = [
        (requirements.length, "密码长度至少为8个字符"),
        (requirements.lowercase, "密码应包含至少一个小写字母 (a-z)"),
        (requirements.uppercase, "密码应包含至少一个大写字母 (A-Z)"),
        (requirements.number, "密码应包含至少一个数字 (0-9)"),
        (
            requirements.special,
            "密码应包含至少一个特殊字符 (!@#$%^&*()_+-=[]{};':\"|<>?,./`~)",
        ),
    ]
    .into_iter()
    .filter_map(|(met, message)| (!met).then_some(message))
    .collect::<Vec<_>>();

    let met = requirements.met();
    let strength = if met >= 4 && length >= STRONG_LENGTH {
        Strength::Strong
    } else if met >= 3 && length >= MIN_LENGTH {
        Strength::Medium
    } else {
        Strength::Weak
    };

    PasswordValidation {
        is_valid: errors.is_empty(),
        errors,
        strength,
        requirements,
    }
}
