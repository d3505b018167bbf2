//! Byte streams implementing the XDR wire rules: big-endian scalars and
//! 4-byte alignment padding for opaque data.

use alloc::vec::Vec;
use core::iter;

fn extend_to_multiple_of_4(value: usize) -> usize {
    (value + 3) & !3
}

/// Error produced while decoding from a read stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadStreamError {
    /// The stream ended before the expected data.
    SuddenEnd {
        at_position: usize,
        expected_length: usize,
    },
    /// The buffer continues past the end of the decoded value.
    TypeEndsTooEarly { missing_no_of_bytes: isize },
    /// A boolean was encoded as something other than 0 or 1.
    InvalidBoolean { found_integer: i32 },
    /// Variable-length opaque data longer than its bound.
    VarOpaqueExceedsMaxLength {
        at_position: usize,
        max_length: i32,
        actual_length: i32,
    },
    /// A string longer than its bound.
    StringExceedsMaxLength {
        at_position: usize,
        max_length: i32,
        actual_length: i32,
    },
    /// A variable-length array longer than its bound.
    VarArrayExceedsMaxLength {
        at_position: usize,
        max_length: i32,
        actual_length: i32,
    },
    /// An optional marker outside {0, 1}.
    InvalidOptional { at_position: usize, has_code: u32 },
    /// An enum discriminant with no matching variant.
    InvalidEnumDiscriminator { at_position: usize },
}

/// Error produced while encoding to a write stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteStreamError {
    /// A string longer than its bound.
    StringTooLong { string_length: usize },
}

pub struct ReadStream<'a> {
    read_index: usize,
    source: &'a [u8],
}

impl<'a> ReadStream<'a> {
    pub fn new(source: &'a [u8]) -> ReadStream<'a> {
        ReadStream {
            read_index: 0,
            source,
        }
    }

    fn ensure_size(&self, no_of_bytes_to_read: usize) -> Result<(), ReadStreamError> {
        if no_of_bytes_to_read + self.read_index > self.source.len() {
            return Err(self.generate_sudden_end_error(no_of_bytes_to_read));
        }
        Ok(())
    }

    fn generate_sudden_end_error(&self, no_of_bytes_to_read: usize) -> ReadStreamError {
        ReadStreamError::SuddenEnd {
            at_position: self.source.len(),
            expected_length: no_of_bytes_to_read + self.read_index,
        }
    }

    fn read_next_byte_array<const N: usize>(&mut self) -> Result<[u8; N], ReadStreamError> {
        self.ensure_size(N)?;
        let mut array = [0u8; N];
        array.copy_from_slice(&self.source[self.read_index..self.read_index + N]);
        self.read_index += N;
        Ok(array)
    }

    pub fn read_next_u32(&mut self) -> Result<u32, ReadStreamError> {
        Ok(u32::from_be_bytes(self.read_next_byte_array()?))
    }

    pub fn read_next_i32(&mut self) -> Result<i32, ReadStreamError> {
        Ok(i32::from_be_bytes(self.read_next_byte_array()?))
    }

    pub fn read_next_u64(&mut self) -> Result<u64, ReadStreamError> {
        Ok(u64::from_be_bytes(self.read_next_byte_array()?))
    }

    pub fn read_next_i64(&mut self) -> Result<i64, ReadStreamError> {
        Ok(i64::from_be_bytes(self.read_next_byte_array()?))
    }

    /// Reads `no_of_bytes` of opaque data and skips its alignment padding.
    pub fn read_next_binary_data(&mut self, no_of_bytes: usize) -> Result<Vec<u8>, ReadStreamError> {
        self.ensure_size(extend_to_multiple_of_4(no_of_bytes))?;
        let result = self.source[self.read_index..self.read_index + no_of_bytes].to_vec();
        self.read_index += extend_to_multiple_of_4(no_of_bytes);
        Ok(result)
    }

    pub fn no_of_bytes_left_to_read(&self) -> isize {
        self.source.len() as isize - self.read_index as isize
    }

    pub fn get_position(&self) -> usize {
        self.read_index
    }
}

pub struct WriteStream {
    result: Vec<u8>,
}

impl WriteStream {
    pub fn new() -> WriteStream {
        WriteStream {
            result: Vec::with_capacity(128),
        }
    }

    pub fn write_next_u32(&mut self, value: u32) {
        self.result.extend(value.to_be_bytes().iter());
    }

    pub fn write_next_i32(&mut self, value: i32) {
        self.result.extend(value.to_be_bytes().iter());
    }

    pub fn write_next_u64(&mut self, value: u64) {
        self.result.extend(value.to_be_bytes().iter());
    }

    pub fn write_next_i64(&mut self, value: i64) {
        self.result.extend(value.to_be_bytes().iter());
    }

    /// Writes opaque data followed by its alignment padding.
    pub fn write_next_binary_data(&mut self, value: &[u8]) {
        self.result.extend_from_slice(value);
        let length = value.len();
        let no_of_padding_bytes = extend_to_multiple_of_4(length) - length;
        self.result.extend(iter::repeat(0).take(no_of_padding_bytes));
    }

    pub fn get_result(self) -> Vec<u8> {
        self.result
    }
}

impl Default for WriteStream {
    fn default() -> Self {
        Self::new()
    }
}

pub fn is_valid_string(value: &str, max_no_of_bytes: u32) -> bool {
    match u32::try_from(value.len()) {
        Ok(length) => length <= max_no_of_bytes,
        Err(_) => false,
    }
}
