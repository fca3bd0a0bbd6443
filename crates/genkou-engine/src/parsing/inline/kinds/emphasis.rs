pub struct Emphasis;

impl Emphasis {
    pub const MARKER: &'static [u8; 2] = b"**";
    pub const STAR: u8 = b'*';
    /// Full-width asterisk, stripped from text runs like its ASCII cousin.
    pub const FULLWIDTH_STAR: char = '＊';
}
