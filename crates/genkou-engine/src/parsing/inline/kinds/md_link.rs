pub struct MdLink;

impl MdLink {
    pub const OPEN: u8 = b'[';
    pub const LABEL_CLOSE: u8 = b']';
    pub const HREF_OPEN: u8 = b'(';
    pub const HREF_CLOSE: u8 = b')';
}
