//! Name hashing
//!
//! Sensor and category names are looked up by a 16-bit DJB2 hash of the
//! upper-cased name, so lookups are case-insensitive and the catalog can
//! carry the hash instead of comparing strings.
//!
//! ```text
//! h = 5381
//! for each byte c:  h = h·33 + upper(c)   (mod 2¹⁶)
//! ```

/// Case-insensitive 16-bit DJB2 hash
///
/// `const` so catalog entries compute their hash at compile time.
pub const fn djb2(name: &str) -> u16 {
    let bytes = name.as_bytes();
    let mut hash: u16 = 5381;
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i].to_ascii_uppercase();
        hash = hash.wrapping_mul(33).wrapping_add(c as u16);
        i += 1;
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        assert_eq!(djb2("NONE"), 0x2F75);
        assert_eq!(djb2("MAX6675"), 0x2A23);
        assert_eq!(djb2("W_PHASE_RPM"), 0x1F3A);
        assert_eq!(djb2("THERMOCOUPLE"), 0xA69C);
        assert_eq!(djb2("NTC"), 0x09CA);
        assert_eq!(djb2("TEMPERATURE"), 0x0353);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(djb2("max6675"), djb2("MAX6675"));
        assert_eq!(djb2("Vdo_5bar_Curve"), 0x231B);
    }

    #[test]
    fn empty_name_is_seed() {
        assert_eq!(djb2(""), 5381);
    }

    #[test]
    fn usable_in_const_context() {
        const H: u16 = djb2("HALL_SPEED");
        assert_eq!(H, 0xB076);
    }
}
