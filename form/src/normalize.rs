use crate::models::Field;

/// Moroccan calling code, substituted for the local trunk `0`.
pub const COUNTRY_CODE: &str = "+212";
const CNI_LEN: usize = 6;

/// Canonicalize a raw keystroke value before it is stored. Idempotent per
/// field, so re-normalizing a stored value is a no-op.
pub fn normalize(field: Field, raw: &str) -> String {
    match field {
        Field::Cni => raw
            .chars()
            .map(|c| c.to_ascii_uppercase())
            .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
            .take(CNI_LEN)
            .collect(),
        Field::Phone => {
            let digits: String = raw
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '+')
                .collect();
            // 06/07 mobile numbers become +2126/+2127
            match digits.strip_prefix('0') {
                Some(rest) => format!("{COUNTRY_CODE}{rest}"),
                None => digits,
            }
        }
        _ => raw.to_string(),
    }
}
