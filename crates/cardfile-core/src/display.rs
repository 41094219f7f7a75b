use cardfile_db::Contact;

/// Avatar background colors for contacts without a photo.
pub const AVATAR_PALETTE: [&str; 8] = [
    "#3498db", "#9b59b6", "#2ecc71", "#e74c3c", "#f39c12", "#1abc9c", "#34495e", "#95a5a6",
];

/// First character of each whitespace-separated name token, uppercased.
/// "Jane Doe" becomes "JD"; an empty name yields an empty string.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|token| token.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

/// Palette color keyed on the contact id, so the same contact renders
/// with the same color everywhere.
pub fn avatar_color(contact: &Contact) -> &'static str {
    AVATAR_PALETTE[contact.id.unsigned_abs() as usize % AVATAR_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(id: i64) -> Contact {
        Contact {
            id,
            name: "Jane Doe".to_string(),
            mobile_number: "9876543210".to_string(),
            landline_number: None,
            photo: None,
            is_favorite: false,
        }
    }

    #[test]
    fn initials_take_first_letter_of_each_token() {
        assert_eq!(initials("Jane Doe"), "JD");
        assert_eq!(initials("jane  van doe"), "JVD");
        assert_eq!(initials("Cher"), "C");
    }

    #[test]
    fn initials_of_empty_name_are_empty() {
        assert_eq!(initials(""), "");
        assert_eq!(initials("   "), "");
    }

    #[test]
    fn avatar_color_is_stable_per_contact() {
        let c = contact(5);
        assert_eq!(avatar_color(&c), avatar_color(&c.clone()));
    }

    #[test]
    fn avatar_color_cycles_through_the_palette() {
        assert_eq!(avatar_color(&contact(0)), AVATAR_PALETTE[0]);
        assert_eq!(avatar_color(&contact(9)), AVATAR_PALETTE[1]);
    }
}
