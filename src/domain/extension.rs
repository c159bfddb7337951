//! File Extensions
//!
//! Closed set of document types the backend stores, with their MIME types and
//! display categories.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Document extension accepted by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileExtension {
    Doc,
    Docx,
    Gif,
    Jpeg,
    Jpg,
    Mov,
    Mp3,
    Mp4,
    Mpeg,
    Mpg,
    Odp,
    Ods,
    Odt,
    Pdf,
    Png,
    Ppt,
    Pptx,
    Rar,
    Rtf,
    Tar,
    Txt,
    Wav,
    Xls,
    Xlsx,
    Zip,
}

/// Icon category shown next to a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileCategory {
    Word,
    Presentation,
    Spreadsheet,
    Pdf,
    Text,
    Zip,
    Image,
    Audio,
    Video,
    OpenDocument,
    Archive,
}

impl FileExtension {
    pub const ALL: [FileExtension; 25] = [
        Self::Doc,
        Self::Docx,
        Self::Gif,
        Self::Jpeg,
        Self::Jpg,
        Self::Mov,
        Self::Mp3,
        Self::Mp4,
        Self::Mpeg,
        Self::Mpg,
        Self::Odp,
        Self::Ods,
        Self::Odt,
        Self::Pdf,
        Self::Png,
        Self::Ppt,
        Self::Pptx,
        Self::Rar,
        Self::Rtf,
        Self::Tar,
        Self::Txt,
        Self::Wav,
        Self::Xls,
        Self::Xlsx,
        Self::Zip,
    ];

    /// Parse `pdf`, `.pdf` or `PDF`
    pub fn from_extension(value: &str) -> Result<Self> {
        let ext = value.trim().trim_start_matches('.').to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == ext)
            .ok_or_else(|| Error::UnknownExtension {
                value: value.to_string(),
            })
    }

    /// Lowercase extension without the dot
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Doc => "doc",
            Self::Docx => "docx",
            Self::Gif => "gif",
            Self::Jpeg => "jpeg",
            Self::Jpg => "jpg",
            Self::Mov => "mov",
            Self::Mp3 => "mp3",
            Self::Mp4 => "mp4",
            Self::Mpeg => "mpeg",
            Self::Mpg => "mpg",
            Self::Odp => "odp",
            Self::Ods => "ods",
            Self::Odt => "odt",
            Self::Pdf => "pdf",
            Self::Png => "png",
            Self::Ppt => "ppt",
            Self::Pptx => "pptx",
            Self::Rar => "rar",
            Self::Rtf => "rtf",
            Self::Tar => "tar",
            Self::Txt => "txt",
            Self::Wav => "wav",
            Self::Xls => "xls",
            Self::Xlsx => "xlsx",
            Self::Zip => "zip",
        }
    }

    /// MIME type used for uploads
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Doc => "application/msword",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::Ppt => "application/vnd.ms-powerpoint",
            Self::Pptx => {
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            }
            Self::Xls => "application/vnd.ms-excel",
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Self::Pdf => "application/pdf",
            Self::Rtf => "application/rtf",
            Self::Txt => "text/plain",
            Self::Zip => "application/zip",
            Self::Jpeg | Self::Jpg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::Mp3 => "audio/mpeg",
            Self::Wav => "audio/wav",
            Self::Mp4 => "video/mp4",
            Self::Mpeg | Self::Mpg => "video/mpeg",
            Self::Mov => "video/quicktime",
            Self::Odt => "application/vnd.oasis.opendocument.text",
            Self::Odp => "application/vnd.oasis.opendocument.presentation",
            Self::Ods => "application/vnd.oasis.opendocument.spreadsheet",
            Self::Rar => "application/x-rar-compressed",
            Self::Tar => "application/x-tar",
        }
    }

    /// Canonical extension for a MIME type
    ///
    /// Shared MIME types resolve to the long form (`jpeg`, `mpeg`).
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let essence = content_type.split(';').next().unwrap_or_default().trim();
        match essence {
            "image/jpeg" => Some(Self::Jpeg),
            "video/mpeg" => Some(Self::Mpeg),
            _ => Self::ALL
                .into_iter()
                .find(|ext| ext.content_type().eq_ignore_ascii_case(essence)),
        }
    }

    pub fn category(self) -> FileCategory {
        match self {
            Self::Doc | Self::Docx => FileCategory::Word,
            Self::Ppt | Self::Pptx => FileCategory::Presentation,
            Self::Xls | Self::Xlsx => FileCategory::Spreadsheet,
            Self::Pdf => FileCategory::Pdf,
            Self::Rtf | Self::Txt => FileCategory::Text,
            Self::Zip => FileCategory::Zip,
            Self::Jpeg | Self::Jpg | Self::Png | Self::Gif => FileCategory::Image,
            Self::Mp3 | Self::Wav => FileCategory::Audio,
            Self::Mp4 | Self::Mpeg | Self::Mpg | Self::Mov => FileCategory::Video,
            Self::Odt | Self::Odp | Self::Ods => FileCategory::OpenDocument,
            Self::Rar | Self::Tar => FileCategory::Archive,
        }
    }
}

impl std::fmt::Display for FileExtension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, ".{}", self.as_str())
    }
}

impl std::str::FromStr for FileExtension {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_extension(s)
    }
}

/// Image formats accepted for avatars and logos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ImageExtension {
    Jpeg,
    Jpg,
    Png,
}

impl ImageExtension {
    pub fn from_extension(value: &str) -> Result<Self> {
        match FileExtension::from_extension(value)? {
            FileExtension::Jpeg => Ok(Self::Jpeg),
            FileExtension::Jpg => Ok(Self::Jpg),
            FileExtension::Png => Ok(Self::Png),
            _ => Err(Error::UnknownExtension {
                value: value.to_string(),
            }),
        }
    }
}

impl From<ImageExtension> for FileExtension {
    fn from(ext: ImageExtension) -> Self {
        match ext {
            ImageExtension::Jpeg => Self::Jpeg,
            ImageExtension::Jpg => Self::Jpg,
            ImageExtension::Png => Self::Png,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variants() {
        assert_eq!(FileExtension::from_extension("pdf").expect("pdf"), FileExtension::Pdf);
        assert_eq!(FileExtension::from_extension(".DOCX").expect("docx"), FileExtension::Docx);
        assert!(matches!(
            FileExtension::from_extension("exe"),
            Err(Error::UnknownExtension { .. })
        ));
        assert!(FileExtension::from_extension("").is_err());
    }

    #[test]
    fn test_every_extension_parses_back() {
        for ext in FileExtension::ALL {
            assert_eq!(FileExtension::from_extension(ext.as_str()).expect("known"), ext);
        }
    }

    #[test]
    fn test_content_type_lookup() {
        assert_eq!(
            FileExtension::from_content_type("application/pdf"),
            Some(FileExtension::Pdf)
        );
        assert_eq!(
            FileExtension::from_content_type("image/jpeg"),
            Some(FileExtension::Jpeg)
        );
        assert_eq!(
            FileExtension::from_content_type("text/plain; charset=utf-8"),
            Some(FileExtension::Txt)
        );
        assert_eq!(FileExtension::from_content_type("application/x-msdownload"), None);
        assert_eq!(FileExtension::Jpg.content_type(), "image/jpeg");
    }

    #[test]
    fn test_categories() {
        assert_eq!(FileExtension::Xlsx.category(), FileCategory::Spreadsheet);
        assert_eq!(FileExtension::Mov.category(), FileCategory::Video);
        assert_eq!(FileExtension::Tar.category(), FileCategory::Archive);
        // Zip has its own icon; rar and tar share the generic archive one
        assert_eq!(FileExtension::Zip.category(), FileCategory::Zip);
        assert_eq!(FileExtension::Rar.category(), FileCategory::Archive);
    }

    #[test]
    fn test_image_extension() {
        assert_eq!(ImageExtension::from_extension("PNG").expect("png"), ImageExtension::Png);
        assert!(ImageExtension::from_extension("gif").is_err());
        assert_eq!(FileExtension::from(ImageExtension::Jpg), FileExtension::Jpg);
    }

    #[test]
    fn test_serde_uppercase() {
        let json = serde_json::to_string(&FileExtension::Pptx).expect("serialize");
        assert_eq!(json, "\"PPTX\"");
    }
}
