use std::time::Duration;

/// A piece of media to load onto a renderer.
///
/// ```
/// use std::time::Duration;
/// use upnpcast_dlna::MediaItem;
///
/// let item = MediaItem::new("http://10.0.0.2:3500/movie.mp4", "video/mp4")
///     .with_title("Movie")
///     .with_subtitles("http://10.0.0.2:3500/movie.srt")
///     .with_duration(Duration::from_secs(5400))
///     .seekable(true);
/// assert!(item.has_srt_subtitles());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaItem {
    pub url: String,
    pub title: String,
    /// MIME type, e.g. `video/mp4`
    pub content_type: String,
    pub subtitles_url: Option<String>,
    /// Whether the server honours byte range requests
    pub seekable: bool,
    /// Zero when unknown
    pub duration: Duration,
}

impl MediaItem {
    pub fn new(url: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            content_type: content_type.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_subtitles(mut self, url: impl Into<String>) -> Self {
        self.subtitles_url = Some(url.into());
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn seekable(mut self, seekable: bool) -> Self {
        self.seekable = seekable;
        self
    }

    /// Subtitle URL when it points at an SRT file.
    pub fn srt_subtitles(&self) -> Option<&str> {
        self.subtitles_url.as_deref().filter(|url| url.contains("srt"))
    }

    pub fn has_srt_subtitles(&self) -> bool {
        self.srt_subtitles().is_some()
    }
}
