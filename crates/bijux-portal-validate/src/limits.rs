/// Extensions accepted for each declared attachment type. Types missing
/// from this table only match an identical extension.
pub(crate) const FILE_TYPE_EXTENSIONS: &[(&str, &[&str])] = &[
    ("pdf", &["pdf"]),
    ("doc", &["doc"]),
    ("docx", &["docx"]),
    ("xls", &["xls"]),
    ("xlsx", &["xlsx"]),
    ("csv", &["csv"]),
    ("txt", &["txt"]),
    ("md", &["md", "markdown"]),
    ("markdown", &["md", "markdown"]),
    ("eml", &["eml"]),
    ("msg", &["msg"]),
    ("png", &["png"]),
    ("jpg", &["jpg", "jpeg"]),
    ("jpeg", &["jpg", "jpeg"]),
    ("gif", &["gif"]),
    ("html", &["html", "htm"]),
    ("yaml", &["yaml", "yml"]),
    ("yml", &["yaml", "yml"]),
    ("json", &["json"]),
    ("zip", &["zip"]),
];

pub(crate) const FOLDER_TYPES: &[&str] = &["folder", "directory"];

/// Files a source email may be archived as.
pub const SOURCE_DOCUMENT_EXTENSIONS: &[&str] = &["pdf", "eml", "msg"];
