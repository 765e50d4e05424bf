//! Random student identifier generation.

use rand::Rng;

/// Lowercase base-36 alphabet used for identifiers.
const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a random lowercase alphanumeric identifier of `len` characters.
///
/// Identifiers carry no ordering; uniqueness is only enforced by the store
/// that issues them.
pub fn generate_id(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_id_length_and_alphabet() {
        let id = generate_id(16);
        assert_eq!(id.len(), 16);
        assert!(id
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_generate_id_is_not_repeated() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_id(16)).collect();
        assert_eq!(ids.len(), 1000);
    }
}
