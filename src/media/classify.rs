// src/media/classify.rs
// =============================================================================
// Picks the images and videos out of a directory listing.
//
// Rules, applied to each entry in order:
// 1. Directories are dropped
// 2. The name must end in ".jpg" or ".png" (image) or ".mp4" (video)
//    The test is a literal, case-sensitive suffix match: "PHOTO.JPG" is dropped
// 3. Entries without a download URL are dropped
//
// Survivors keep their original relative order. Nothing here can fail.
// =============================================================================

use serde::Serialize;

use crate::github::RepoEntry;

// Suffix -> media type. Checked in this order; the suffixes are disjoint.
const RECOGNIZED_SUFFIXES: &[(&str, MediaType)] = &[
    (".jpg", MediaType::Image),
    (".png", MediaType::Image),
    (".mp4", MediaType::Video),
];

/// How a media item should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    /// Media type implied by a file name's suffix, if it is a recognized one.
    pub fn from_name(name: &str) -> Option<MediaType> {
        RECOGNIZED_SUFFIXES
            .iter()
            .find(|(suffix, _)| name.ends_with(suffix))
            .map(|(_, media_type)| *media_type)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
        }
    }
}

/// A file from the listing that can be shown as an image or a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaItem {
    pub name: String,
    pub url: String,
    pub media_type: MediaType,
}

/// Keeps the entries that are displayable media, tagged by type.
pub fn classify(entries: &[RepoEntry]) -> Vec<MediaItem> {
    entries.iter().filter_map(classify_entry).collect()
}

fn classify_entry(entry: &RepoEntry) -> Option<MediaItem> {
    if !entry.is_file() {
        return None;
    }

    let media_type = MediaType::from_name(&entry.name)?;
    let url = entry.download_url.as_ref()?;

    Some(MediaItem {
        name: entry.name.clone(),
        url: url.clone(),
        media_type,
    })
}

/// Per-type counts for a classified listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MediaSummary {
    pub images: usize,
    pub videos: usize,
}

impl MediaSummary {
    pub fn of(items: &[MediaItem]) -> Self {
        items.iter().fold(Self::default(), |mut summary, item| {
            match item.media_type {
                MediaType::Image => summary.images += 1,
                MediaType::Video => summary.videos += 1,
            }
            summary
        })
    }

    pub fn total(&self) -> usize {
        self.images + self.videos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::EntryKind;

    fn file(name: &str, url: Option<&str>) -> RepoEntry {
        RepoEntry {
            name: name.to_string(),
            path: format!("media/{}", name),
            kind: EntryKind::File,
            download_url: url.map(str::to_string),
        }
    }

    fn dir(name: &str) -> RepoEntry {
        RepoEntry {
            name: name.to_string(),
            path: format!("media/{}", name),
            kind: EntryKind::Directory,
            download_url: None,
        }
    }

    fn item(name: &str, url: &str, media_type: MediaType) -> MediaItem {
        MediaItem {
            name: name.to_string(),
            url: url.to_string(),
            media_type,
        }
    }

    #[test]
    fn test_mixed_listing() {
        let entries = vec![file("a.jpg", Some("u1")), dir("b"), file("c.mp4", Some("u2"))];

        assert_eq!(
            classify(&entries),
            vec![
                item("a.jpg", "u1", MediaType::Image),
                item("c.mp4", "u2", MediaType::Video),
            ]
        );
    }

    #[test]
    fn test_unsupported_extension_is_dropped() {
        let entries = vec![file("d.gif", Some("u3"))];
        assert!(classify(&entries).is_empty());
    }

    #[test]
    fn test_suffix_match_is_case_sensitive() {
        let entries = vec![file("E.JPG", Some("u4")), file("clip.MP4", Some("u5"))];
        assert!(classify(&entries).is_empty());
    }

    #[test]
    fn test_png_is_image() {
        let entries = vec![file("logo.png", Some("u6"))];
        assert_eq!(classify(&entries), vec![item("logo.png", "u6", MediaType::Image)]);
    }

    #[test]
    fn test_directories_are_dropped_even_with_media_names() {
        let mut weird = dir("album.jpg");
        weird.download_url = Some("u7".to_string());

        assert!(classify(&[weird]).is_empty());
    }

    #[test]
    fn test_files_without_url_are_dropped() {
        let entries = vec![file("a.jpg", None), file("b.mp4", None), file("c.png", Some("u8"))];
        assert_eq!(classify(&entries), vec![item("c.png", "u8", MediaType::Image)]);
    }

    #[test]
    fn test_order_is_preserved() {
        let entries = vec![
            file("z.mp4", Some("1")),
            file("notes.txt", Some("2")),
            file("m.jpg", Some("3")),
            dir("y"),
            file("a.png", Some("4")),
        ];

        let names: Vec<String> = classify(&entries).into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["z.mp4", "m.jpg", "a.png"]);
    }

    #[test]
    fn test_classify_is_repeatable() {
        let entries = vec![file("a.jpg", Some("u1")), dir("b"), file("c.mp4", Some("u2"))];
        assert_eq!(classify(&entries), classify(&entries));
    }

    #[test]
    fn test_suffix_only_name() {
        assert_eq!(MediaType::from_name(".jpg"), Some(MediaType::Image));
        assert_eq!(MediaType::from_name("jpg"), None);
        assert_eq!(MediaType::from_name("video.mp4.bak"), None);
    }

    #[test]
    fn test_summary_counts() {
        let items = vec![
            item("a.jpg", "1", MediaType::Image),
            item("b.mp4", "2", MediaType::Video),
            item("c.png", "3", MediaType::Image),
        ];

        let summary = MediaSummary::of(&items);
        assert_eq!(summary, MediaSummary { images: 2, videos: 1 });
        assert_eq!(summary.total(), 3);
        assert_eq!(MediaSummary::of(&[]).total(), 0);
    }

    #[test]
    fn test_media_item_json_shape() {
        let json = serde_json::to_value(item("a.jpg", "u1", MediaType::Image)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "a.jpg", "url": "u1", "media_type": "image"})
        );
    }
}
