/// Width in bytes of one stored character slot (a big-endian UTF-16 code unit).
pub const CHAR_WIDTH: usize = std::mem::size_of::<u16>();

/// A Page is a fixed-size block of bytes holding exactly one encoded record.
#[derive(Debug)]
pub struct Page {
    content: Vec<u8>,
}

#[derive(thiserror::Error, Debug)]
pub enum PageError {
    #[error("Attempted to access data outside the bounds of the page")]
    OutOfBounds,
}

pub type PageResult<T> = Result<T, PageError>;

impl Page {
    pub fn with_size(size: usize) -> Self {
        Self {
            content: vec![0; size],
        }
    }

    pub fn get_integer(&self, offset: usize) -> PageResult<i32> {
        self.assert_offset_within_bounds(offset, std::mem::size_of::<i32>())?;

        let mut arr = [0u8; 4];
        arr.copy_from_slice(&self.content[offset..offset + std::mem::size_of::<i32>()]);
        Ok(i32::from_be_bytes(arr))
    }

    pub fn set_integer(&mut self, offset: usize, value: i32) -> PageResult<()> {
        self.assert_offset_within_bounds(offset, std::mem::size_of::<i32>())?;

        self.content[offset..offset + 4].copy_from_slice(&value.to_be_bytes());
        Ok(())
    }

    /// Reads `slots` UTF-16 code units starting at `offset`.
    ///
    /// Padding is returned as-is. Unpaired surrogates decode to U+FFFD.
    pub fn get_chars(&self, offset: usize, slots: usize) -> PageResult<String> {
        self.assert_offset_within_bounds(offset, slots * CHAR_WIDTH)?;

        let units = self.content[offset..offset + slots * CHAR_WIDTH]
            .chunks_exact(CHAR_WIDTH)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]));
        Ok(char::decode_utf16(units)
            .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect())
    }

    /// Writes `s` into exactly `slots` UTF-16 code units starting at `offset`.
    ///
    /// Longer text is cut after `slots` units, shorter text is right-padded with
    /// spaces. A character needing two units is never split across the cut; its
    /// remaining slot is padded instead.
    pub fn set_chars(&mut self, offset: usize, s: &str, slots: usize) -> PageResult<()> {
        self.assert_offset_within_bounds(offset, slots * CHAR_WIDTH)?;
        let end = offset + slots * CHAR_WIDTH;

        let mut units = Vec::with_capacity(slots);
        let mut buf = [0u16; 2];
        for c in s.chars() {
            let encoded = c.encode_utf16(&mut buf);
            if units.len() + encoded.len() > slots {
                break;
            }
            units.extend_from_slice(encoded);
        }
        units.resize(slots, u16::from(b' '));

        for (slot, unit) in self.content[offset..end]
            .chunks_exact_mut(CHAR_WIDTH)
            .zip(units)
        {
            slot.copy_from_slice(&unit.to_be_bytes());
        }
        Ok(())
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut [u8] {
        &mut self.content
    }

    fn assert_offset_within_bounds(&self, offset: usize, size: usize) -> PageResult<()> {
        if offset + size > self.content.len() {
            Err(PageError::OutOfBounds)
        } else {
            Ok(())
        }
    }
}
