//! Character classes and pool building.

pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8] = b"0123456789";
pub const SPECIAL: &[u8] = b"!@#$%^&*()-_=+[]{}|;:,.<>?";

/// One of the four built-in character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Special,
}

impl CharClass {
    /// All classes in pool-definition order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digit,
        CharClass::Special,
    ];

    /// The fixed alphabet of this class.
    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharClass::Upper => UPPERCASE,
            CharClass::Lower => LOWERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Special => SPECIAL,
        }
    }
}

/// Which character classes a generation request includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassSet {
    pub upper: bool,
    pub lower: bool,
    pub digit: bool,
    pub special: bool,
}

impl ClassSet {
    pub const ALL: ClassSet = ClassSet {
        upper: true,
        lower: true,
        digit: true,
        special: true,
    };

    pub fn contains(&self, class: CharClass) -> bool {
        match class {
            CharClass::Upper => self.upper,
            CharClass::Lower => self.lower,
            CharClass::Digit => self.digit,
            CharClass::Special => self.special,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Number of selected classes.
    pub fn count(&self) -> usize {
        self.classes().count()
    }

    /// Selected classes in pool-definition order (Upper, Lower, Digit, Special).
    pub fn classes(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL.into_iter().filter(|c| self.contains(*c))
    }

    /// Concatenated alphabet of every selected class, in definition order.
    pub fn pool(&self) -> Vec<u8> {
        let mut pool = Vec::with_capacity(self.pool_size());
        for class in self.classes() {
            pool.extend_from_slice(class.alphabet());
        }
        pool
    }

    /// Effective pool size (for entropy calculation).
    pub fn pool_size(&self) -> usize {
        self.classes().map(|c| c.alphabet().len()).sum()
    }
}

impl Default for ClassSet {
    fn default() -> Self {
        Self::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_sizes() {
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(SPECIAL.len(), 26);
    }

    #[test]
    fn pool_concatenates_in_definition_order() {
        let pool = ClassSet::ALL.pool();
        assert_eq!(pool.len(), 88);
        assert_eq!(&pool[..26], UPPERCASE);
        assert_eq!(&pool[26..52], LOWERCASE);
        assert_eq!(&pool[52..62], DIGITS);
        assert_eq!(&pool[62..], SPECIAL);
    }

    #[test]
    fn pool_skips_unselected_classes() {
        let set = ClassSet {
            upper: false,
            lower: true,
            digit: true,
            special: false,
        };
        let pool = set.pool();
        assert_eq!(&pool[..26], LOWERCASE);
        assert_eq!(&pool[26..], DIGITS);
        assert_eq!(set.pool_size(), 36);
        assert_eq!(set.count(), 2);
    }

    #[test]
    fn empty_set() {
        let set = ClassSet {
            upper: false,
            lower: false,
            digit: false,
            special: false,
        };
        assert!(set.is_empty());
        assert_eq!(set.pool_size(), 0);
        assert!(set.pool().is_empty());
    }
}
