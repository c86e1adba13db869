//! The part record and its fixed 108-byte layout.
//!
//! ```text
//! offset  size  field
//!      0    40  part number  (20 x big-endian UTF-16 units, space padded)
//!     40    60  description  (30 x big-endian UTF-16 units, space padded)
//!    100     4  quantity     (big-endian i32)
//!    104     4  unit cost    (big-endian i32)
//! ```
//!
//! Decoding trims every character `<= U+0020` from both ends of the text
//! fields, so leading and trailing spaces of a stored value do not survive a
//! round trip.

use crate::file::{CHAR_WIDTH, Page, PageResult};

/// Character slots reserved for the part number.
pub const PART_NUMBER_LEN: usize = 20;
/// Character slots reserved for the description.
pub const DESCRIPTION_LEN: usize = 30;
pub const QUANTITY_LEN: usize = std::mem::size_of::<i32>();
pub const UNIT_COST_LEN: usize = std::mem::size_of::<i32>();

/// Encoded length of one record in bytes.
pub const RECORD_LEN: usize =
    CHAR_WIDTH * PART_NUMBER_LEN + CHAR_WIDTH * DESCRIPTION_LEN + QUANTITY_LEN + UNIT_COST_LEN;

const PART_NUMBER_OFFSET: usize = 0;
const DESCRIPTION_OFFSET: usize = PART_NUMBER_OFFSET + CHAR_WIDTH * PART_NUMBER_LEN;
const QUANTITY_OFFSET: usize = DESCRIPTION_OFFSET + CHAR_WIDTH * DESCRIPTION_LEN;
const UNIT_COST_OFFSET: usize = QUANTITY_OFFSET + QUANTITY_LEN;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    part_number: String,
    description: String,
    quantity: i32,
    unit_cost: i32,
}

impl Part {
    pub fn new(
        part_number: impl Into<String>,
        description: impl Into<String>,
        quantity: i32,
        unit_cost: i32,
    ) -> Self {
        Self {
            part_number: part_number.into(),
            description: description.into(),
            quantity,
            unit_cost,
        }
    }

    pub fn part_number(&self) -> &str {
        &self.part_number
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    /// Cost of one unit in minor currency units.
    pub fn unit_cost(&self) -> i32 {
        self.unit_cost
    }
}

/// Encodes the fields into a fresh record-sized page.
pub(crate) fn encode(
    part_number: &str,
    description: &str,
    quantity: i32,
    unit_cost: i32,
) -> PageResult<Page> {
    let mut page = Page::with_size(RECORD_LEN);
    page.set_chars(PART_NUMBER_OFFSET, part_number, PART_NUMBER_LEN)?;
    page.set_chars(DESCRIPTION_OFFSET, description, DESCRIPTION_LEN)?;
    page.set_integer(QUANTITY_OFFSET, quantity)?;
    page.set_integer(UNIT_COST_OFFSET, unit_cost)?;
    Ok(page)
}

pub(crate) fn decode(page: &Page) -> PageResult<Part> {
    let part_number = page.get_chars(PART_NUMBER_OFFSET, PART_NUMBER_LEN)?;
    let description = page.get_chars(DESCRIPTION_OFFSET, DESCRIPTION_LEN)?;
    Ok(Part {
        part_number: trim(&part_number).to_string(),
        description: trim(&description).to_string(),
        quantity: page.get_integer(QUANTITY_OFFSET)?,
        unit_cost: page.get_integer(UNIT_COST_OFFSET)?,
    })
}

fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn record_len_is_108() {
        assert_eq!(RECORD_LEN, 108);
        assert_eq!(QUANTITY_OFFSET, 100);
        assert_eq!(UNIT_COST_OFFSET, 104);
    }

    #[test]
    fn encode_lays_out_fields() {
        let page = encode("book", "note book", 4, 1500).expect("encode failed");
        let bytes = page.content();
        assert_eq!(bytes.len(), RECORD_LEN);
        assert_eq!(&bytes[0..8], &[0, b'b', 0, b'o', 0, b'o', 0, b'k']);
        assert!(bytes[8..40].chunks(2).all(|c| c == [0, b' ']));
        assert_eq!(&bytes[40..44], &[0, b'n', 0, b'o']);
        assert!(bytes[58..100].chunks(2).all(|c| c == [0, b' ']));
        assert_eq!(&bytes[100..104], &4i32.to_be_bytes());
        assert_eq!(&bytes[104..108], &1500i32.to_be_bytes());
    }

    #[test]
    fn decode_trims_padding() {
        let page = encode("book", "note book", 4, 1500).expect("encode failed");
        let part = decode(&page).expect("decode failed");
        assert_eq!(part, Part::new("book", "note book", 4, 1500));
    }

    #[test]
    fn decode_loses_leading_and_trailing_spaces() {
        let page = encode("  pn  ", " desc ", -1, i32::MIN).expect("encode failed");
        let part = decode(&page).expect("decode failed");
        assert_eq!(part.part_number(), "pn");
        assert_eq!(part.description(), "desc");
        assert_eq!(part.quantity(), -1);
        assert_eq!(part.unit_cost(), i32::MIN);
    }

    #[test]
    fn decode_trims_control_characters() {
        let page = Page::with_size(RECORD_LEN);
        let part = decode(&page).expect("decode failed");
        assert_eq!(part, Part::new("", "", 0, 0));
    }

    #[test]
    fn encode_truncates_long_fields() {
        let long_number = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
        let long_desc = "x".repeat(45);
        let page = encode(long_number, &long_desc, 0, 0).expect("encode failed");
        let part = decode(&page).expect("decode failed");
        assert_eq!(part.part_number(), "ABCDEFGHIJKLMNOPQRST");
        assert_eq!(part.description(), "x".repeat(30));
    }
}
