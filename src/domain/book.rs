use serde::Serialize;

/// Testament grouping, serialized with the Spanish labels the public
/// catalog has always used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Testament {
    #[serde(rename = "Antiguo")]
    Old,
    #[serde(rename = "Nuevo")]
    New,
}

/// One Bible book from the static catalog.
///
/// `key` is the canonical lowercase, no-space, de-accented identifier used
/// to address provider endpoints ("1samuel", "songofsolomon"). It is an
/// internal routing detail and not part of the public catalog payload.
/// `id` doubles as the numeric book id (1-66) that bolls.life expects.
#[derive(Debug, Clone, Serialize)]
pub struct Book {
    pub id: u8,
    pub name: &'static str,
    #[serde(rename = "nameEn")]
    pub name_en: &'static str,
    pub chapters: u16,
    pub testament: Testament,
    #[serde(skip)]
    pub key: &'static str,
}
