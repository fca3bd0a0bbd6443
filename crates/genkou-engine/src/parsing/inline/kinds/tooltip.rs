pub struct Tooltip;

impl Tooltip {
    pub const OPEN: &'static [u8; 2] = b"{{";
    pub const CLOSE: &'static str = "}}";
    pub const SEP: char = '|';
    /// Full-width pipe, accepted interchangeably with the ASCII separator.
    pub const SEP_FULLWIDTH: char = '｜';
}
