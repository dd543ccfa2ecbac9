/// Reference link delimiters: `[text][label]`, `[label][]`, `[label]`.
pub struct ReferenceLink;

impl ReferenceLink {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
}
