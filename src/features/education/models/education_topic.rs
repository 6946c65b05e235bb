/// One entry of the static education catalog. The catalog is compiled in,
/// so fields borrow from the binary.
#[derive(Debug, Clone, Copy)]
pub struct EducationTopic {
    pub id: &'static str,
    pub title: &'static str,
    pub thumbnail: &'static str,
    pub short_description: &'static str,
    pub full_text: &'static str,
}
