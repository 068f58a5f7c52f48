//! Cattle breed labels the mock classifier may return.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fixed cattle breed label set.
///
/// The variant order is part of the classification contract: the seed hasher
/// resolves indices against [`Breed::ALL`], so reordering variants changes
/// which label a given seed maps to. The set is bound once at process start
/// and never changes at runtime.
///
/// # Examples
/// ```
/// use breedsense::domain::Breed;
///
/// assert_eq!(Breed::ALL[0], Breed::Jersey);
/// assert_eq!(Breed::Gir.label(), "Gir");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Breed {
    /// Jersey dairy cattle.
    Jersey,
    /// Holstein dairy cattle.
    Holstein,
    /// Gir zebu cattle.
    Gir,
    /// Sahiwal zebu cattle.
    Sahiwal,
    /// Tharparkar zebu cattle.
    Tharparkar,
}

impl Breed {
    /// All breeds in contract order.
    pub const ALL: [Self; 5] = [
        Self::Jersey,
        Self::Holstein,
        Self::Gir,
        Self::Sahiwal,
        Self::Tharparkar,
    ];

    /// Returns the label string for this breed.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Jersey => "Jersey",
            Self::Holstein => "Holstein",
            Self::Gir => "Gir",
            Self::Sahiwal => "Sahiwal",
            Self::Tharparkar => "Tharparkar",
        }
    }
}

impl std::fmt::Display for Breed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use super::*;

    #[test]
    fn all_preserves_contract_order() {
        let labels: Vec<&str> = Breed::ALL.iter().map(|breed| breed.label()).collect();
        assert_eq!(
            labels,
            ["Jersey", "Holstein", "Gir", "Sahiwal", "Tharparkar"]
        );
    }

    #[test]
    fn serialises_as_label_string() {
        let json = serde_json::to_string(&Breed::Tharparkar).expect("breed serialises");
        assert_eq!(json, "\"Tharparkar\"");
    }

    #[test]
    fn deserialises_from_label_string() {
        let breed: Breed = serde_json::from_str("\"Holstein\"").expect("breed deserialises");
        assert_eq!(breed, Breed::Holstein);
    }

    #[test]
    fn display_matches_label() {
        for breed in Breed::ALL {
            assert_eq!(breed.to_string(), breed.label());
        }
    }
}
