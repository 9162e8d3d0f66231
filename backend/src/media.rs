//! Media kind detection from MIME types and file extensions.

use std::path::Path;

/// The two kinds of media the detector accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// `image/*` or `video/*`, case-insensitive.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let mime = mime.trim().to_ascii_lowercase();
        if mime.starts_with("image/") {
            Some(MediaKind::Image)
        } else if mime.starts_with("video/") {
            Some(MediaKind::Video)
        } else {
            None
        }
    }

    /// Guess kind and MIME type from a file extension.
    pub fn from_path(path: &Path) -> Option<(Self, &'static str)> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        let found = match ext.as_str() {
            "png" => (MediaKind::Image, "image/png"),
            "jpg" | "jpeg" => (MediaKind::Image, "image/jpeg"),
            "gif" => (MediaKind::Image, "image/gif"),
            "webp" => (MediaKind::Image, "image/webp"),
            "bmp" => (MediaKind::Image, "image/bmp"),
            "mp4" => (MediaKind::Video, "video/mp4"),
            "webm" => (MediaKind::Video, "video/webm"),
            "mov" => (MediaKind::Video, "video/quicktime"),
            "avi" => (MediaKind::Video, "video/x-msvideo"),
            "mkv" => (MediaKind::Video, "video/x-matroska"),
            _ => return None,
        };
        Some(found)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mime() {
        assert_eq!(MediaKind::from_mime("image/png"), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_mime("Video/MP4"), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_mime("application/octet-stream"), None);
        assert_eq!(MediaKind::from_mime("imagefoo"), None);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            MediaKind::from_path(Path::new("face.JPG")),
            Some((MediaKind::Image, "image/jpeg"))
        );
        assert_eq!(
            MediaKind::from_path(Path::new("/tmp/clip.mp4")),
            Some((MediaKind::Video, "video/mp4"))
        );
        assert_eq!(MediaKind::from_path(Path::new("notes.txt")), None);
        assert_eq!(MediaKind::from_path(Path::new("no_extension")), None);
    }
}
