use devkit_core::PasswordConfig;
use rand::Rng;
use tracing::debug;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 32;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const NUMBERS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordOptions {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self::from(&PasswordConfig::default())
    }
}

impl From<&PasswordConfig> for PasswordOptions {
    fn from(config: &PasswordConfig) -> Self {
        Self {
            length: config.length,
            uppercase: config.uppercase,
            lowercase: config.lowercase,
            numbers: config.numbers,
            symbols: config.symbols,
        }
    }
}

impl PasswordOptions {
    /// Characters a password may be drawn from, in a fixed order
    pub fn charset(&self) -> Vec<char> {
        let mut chars = String::new();
        if self.uppercase {
            chars.push_str(UPPERCASE);
        }
        if self.lowercase {
            chars.push_str(LOWERCASE);
        }
        if self.numbers {
            chars.push_str(NUMBERS);
        }
        if self.symbols {
            chars.push_str(SYMBOLS);
        }
        chars.chars().collect()
    }

    /// Requested length clamped to the supported range
    pub fn effective_length(&self) -> usize {
        self.length.clamp(MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH)
    }
}

/// Generate a password using the given RNG.
///
/// Returns an empty string when every character class is disabled.
pub fn generate_password_with<R: Rng + ?Sized>(options: &PasswordOptions, rng: &mut R) -> String {
    let charset = options.charset();
    if charset.is_empty() {
        debug!("no character classes enabled");
        return String::new();
    }

    (0..options.effective_length())
        .map(|_| charset[rng.gen_range(0..charset.len())])
        .collect()
}

pub fn generate_password(options: &PasswordOptions) -> String {
    generate_password_with(options, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_password() {
        let password = generate_password(&PasswordOptions::default());
        assert_eq!(password.chars().count(), 12);
    }

    #[test]
    fn test_length_is_clamped() {
        let mut options = PasswordOptions {
            length: 2,
            ..PasswordOptions::default()
        };
        assert_eq!(generate_password(&options).len(), MIN_PASSWORD_LENGTH);

        options.length = 500;
        assert_eq!(generate_password(&options).len(), MAX_PASSWORD_LENGTH);
    }

    #[test]
    fn test_only_selected_classes_are_used() {
        let options = PasswordOptions {
            length: 32,
            uppercase: false,
            lowercase: false,
            numbers: true,
            symbols: false,
        };
        let password = generate_password(&options);
        assert!(password.chars().all(|c| c.is_ascii_digit()));

        let options = PasswordOptions {
            length: 32,
            uppercase: true,
            lowercase: false,
            numbers: false,
            symbols: true,
        };
        let password = generate_password(&options);
        assert!(password
            .chars()
            .all(|c| c.is_ascii_uppercase() || SYMBOLS.contains(c)));
    }

    #[test]
    fn test_no_classes_yields_empty() {
        let options = PasswordOptions {
            length: 16,
            uppercase: false,
            lowercase: false,
            numbers: false,
            symbols: false,
        };
        assert_eq!(generate_password(&options), "");
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let options = PasswordOptions::default();
        let a = generate_password_with(&options, &mut StdRng::seed_from_u64(7));
        let b = generate_password_with(&options, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_charset_sizes() {
        assert_eq!(PasswordOptions::default().charset().len(), 26 + 26 + 10 + 26);
    }
}
