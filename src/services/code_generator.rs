//! Generador de códigos secuenciales
//!
//! Los códigos tienen la forma `<PREFIJO><número>` con un mínimo de tres
//! dígitos (`RUT001`, `TAR042`). Pasado el 999 el ancho crece (`TAR1000`).

use std::cmp::Ordering;

/// Ancho mínimo de la parte numérica
pub const MIN_CODE_DIGITS: usize = 3;

/// Calcular el siguiente código a partir del último asignado.
///
/// Si el último código no tiene un sufijo numérico se toma como 0: la
/// búsqueda del "último código" no garantiza ningún formato.
pub fn next_code(prefix: &str, last_code: Option<&str>) -> String {
    let last_number = last_code.map(|code| sequence_number(prefix, code)).unwrap_or(0);

    format!(
        "{}{:0width$}",
        prefix,
        last_number.saturating_add(1),
        width = MIN_CODE_DIGITS
    )
}

fn sequence_number(prefix: &str, code: &str) -> u64 {
    code.strip_prefix(prefix)
        .unwrap_or(code)
        .parse::<u64>()
        .unwrap_or(0)
}

/// Orden de los códigos: primero por longitud y luego lexicográfico, así
/// `RUT1000` queda por encima de `RUT999`.
pub fn compare_codes(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_code() {
        assert_eq!(next_code("RUT", None), "RUT001");
        assert_eq!(next_code("PROG", None), "PROG001");
    }

    #[test]
    fn test_increments_last_code() {
        assert_eq!(next_code("HOR", Some("HOR007")), "HOR008");
        assert_eq!(next_code("TAR", Some("TAR099")), "TAR100");
    }

    #[test]
    fn test_malformed_code_falls_back_to_zero() {
        assert_eq!(next_code("HOR", Some("HORabc")), "HOR001");
        assert_eq!(next_code("TAR", Some("TAR")), "TAR001");
        assert_eq!(next_code("TAR", Some("X-12")), "TAR001");
    }

    #[test]
    fn test_width_grows_past_three_digits() {
        assert_eq!(next_code("TAR", Some("TAR999")), "TAR1000");
        assert_eq!(next_code("TAR", Some("TAR1000")), "TAR1001");
    }

    #[test]
    fn test_compare_codes_by_length_first() {
        assert_eq!(compare_codes("RUT1000", "RUT999"), Ordering::Greater);
        assert_eq!(compare_codes("RUT002", "RUT010"), Ordering::Less);
        assert_eq!(compare_codes("RUT005", "RUT005"), Ordering::Equal);
    }
}
