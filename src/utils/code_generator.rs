//! Short code generation.
//!
//! Codes are drawn from the OS CSPRNG so they reveal nothing about creation
//! order or volume.

/// Symbols a short code may contain.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Number of symbols in a short code.
pub const CODE_LENGTH: usize = 6;

/// Largest multiple of the alphabet size that fits in a byte. Bytes at or
/// above it are rejected to keep every symbol equally likely.
const REJECTION_BOUND: u8 = (256 / ALPHABET.len() * ALPHABET.len()) as u8;

/// Generates a random short code of [`CODE_LENGTH`] symbols from [`ALPHABET`].
///
/// # Errors
///
/// Returns the underlying error if the system random source fails.
///
/// # Examples
///
/// ```
/// use link_tracker::utils::code_generator::{generate_code, is_valid_code};
///
/// let code = generate_code().unwrap();
/// assert!(is_valid_code(&code));
/// ```
pub fn generate_code() -> Result<String, getrandom::Error> {
    let mut code = String::with_capacity(CODE_LENGTH);
    let mut buffer = [0u8; 16];

    while code.len() < CODE_LENGTH {
        getrandom::fill(&mut buffer)?;

        for &byte in buffer.iter().filter(|&&b| b < REJECTION_BOUND) {
            if code.len() == CODE_LENGTH {
                break;
            }
            code.push(ALPHABET[byte as usize % ALPHABET.len()] as char);
        }
    }

    Ok(code)
}

/// Returns true if `code` has the shape of a generated short code.
pub fn is_valid_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| ALPHABET.contains(&b))
}
