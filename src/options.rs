/*
    Inspection options
*/

/// Order in which the storage bytes of a value are unpacked into a bit string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// The value's in-memory bytes, read as one little-endian word.
    /// On little-endian hosts this is the usual sign, exponent, mantissa order.
    #[default]
    Native,
    /// Sign, exponent, mantissa order on every host.
    Big,
}

/// Options that control parsing and inspection.
///
/// The defaults reproduce the behavior of the `num_inspect` tool:
/// 100 significant digits, native byte order, and trailing characters
/// after a number are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InspectOptions {
    precision: usize,
    byte_order: ByteOrder,
    strict: bool,
}

impl InspectOptions {
    /// Number of significant digits used to render values by default.
    pub const DEFAULT_PRECISION: usize = 100;

    /// Creates the default options.
    pub fn new() -> Self {
        Self {
            precision: Self::DEFAULT_PRECISION,
            byte_order: ByteOrder::Native,
            strict: false,
        }
    }

    /// Sets the number of significant digits used to render values.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Sets the order in which storage bytes are unpacked.
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Rejects literals with characters after the number when set.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    pub fn strict(&self) -> bool {
        self.strict
    }
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self::new()
    }
}
