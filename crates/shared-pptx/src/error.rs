use thiserror::Error;

#[derive(Error, Debug)]
pub enum PptxError {
    #[error("Not a valid PPTX archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Missing part: {0}")]
    MissingPart(String),

    #[error("Invalid XML in {part}: {message}")]
    Xml { part: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
