//! Address domain entity.

use uuid::Uuid;

use crate::config::DEFAULT_COUNTRY;

/// A postal address that users point at.
///
/// Addresses are shared: registering with attributes that match an existing
/// row reuses that row instead of inserting a duplicate (see [`Address::same_place`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub id: Uuid,
    pub street: String,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// Unsaved address attributes.
#[derive(Debug, Clone, Default)]
pub struct NewAddress {
    pub street: String,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: Option<String>,
}

impl Address {
    /// Build a new address with a fresh id, normalizing whitespace.
    ///
    /// Blank optional fields become `None`; a missing country falls back to
    /// the default.
    pub fn new(attrs: NewAddress) -> Self {
        Self {
            id: Uuid::new_v4(),
            street: attrs.street.trim().to_string(),
            number: non_blank(attrs.number),
            complement: non_blank(attrs.complement),
            neighborhood: attrs.neighborhood.trim().to_string(),
            city: attrs.city.trim().to_string(),
            state: attrs.state.trim().to_uppercase(),
            zip_code: attrs.zip_code.trim().to_string(),
            country: non_blank(attrs.country).unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
        }
    }

    /// Whether two addresses share the dedup key
    /// (street, number, neighborhood, city, state, zip_code).
    ///
    /// Complement and country are not part of the key.
    pub fn same_place(&self, other: &Address) -> bool {
        self.street == other.street
            && self.number == other.number
            && self.neighborhood == other.neighborhood
            && self.city == other.city
            && self.state == other.state
            && self.zip_code == other.zip_code
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs() -> NewAddress {
        NewAddress {
            street: " Rua das Flores ".into(),
            number: Some("123".into()),
            complement: Some("  ".into()),
            neighborhood: "Centro".into(),
            city: "Salvador".into(),
            state: "ba".into(),
            zip_code: "40000-000".into(),
            country: None,
        }
    }

    #[test]
    fn test_new_normalizes_fields() {
        let address = Address::new(attrs());

        assert_eq!(address.street, "Rua das Flores");
        assert_eq!(address.state, "BA");
        assert_eq!(address.complement, None);
        assert_eq!(address.country, "Brasil");
    }

    #[test]
    fn test_same_place_ignores_id_complement_and_country() {
        let a = Address::new(attrs());
        let mut b = Address::new(attrs());
        b.complement = Some("Apto 4B".into());
        b.country = "Brazil".into();

        assert_ne!(a.id, b.id);
        assert!(a.same_place(&b));

        b.number = Some("124".into());
        assert!(!a.same_place(&b));
    }
}
