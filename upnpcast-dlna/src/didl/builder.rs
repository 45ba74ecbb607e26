use quick_xml::escape::escape;
use tracing::trace;

use crate::content_features::{content_features, SeekFlag};
use crate::clock::duration_to_clock;
use crate::media::MediaItem;

pub const DIDL_NAMESPACE: &str = "urn:schemas-upnp-org:metadata-1-0/DIDL-Lite/";
pub const DC_NAMESPACE: &str = "http://purl.org/dc/elements/1.1/";
pub const SEC_NAMESPACE: &str = "http://www.sec.co.kr/";
pub const UPNP_NAMESPACE: &str = "urn:schemas-upnp-org:metadata-1-0/upnp/";

const SRT_PROTOCOL_INFO: &str = "http-get:*:text/srt:*";

/// `upnp:class` of the item, chosen from the top-level MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpnpClass {
    MusicTrack,
    Photo,
    Movie,
}

impl UpnpClass {
    pub fn from_mime(mime: &str) -> Self {
        let top_level = mime.split('/').next().unwrap_or_default();
        if top_level.eq_ignore_ascii_case("audio") {
            UpnpClass::MusicTrack
        } else if top_level.eq_ignore_ascii_case("image") {
            UpnpClass::Photo
        } else {
            UpnpClass::Movie
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UpnpClass::MusicTrack => "object.item.audioItem.musicTrack",
            UpnpClass::Photo => "object.item.imageItem.photo",
            UpnpClass::Movie => "object.item.videoItem.movie",
        }
    }
}

/// Build the DIDL-Lite fragment describing `item`.
///
/// The fragment is deliberately not well-formed for URLs containing `&`:
/// after serialisation `&amp;` is collapsed back to `&` and escaped quotes
/// are restored, which is what renderer firmware parses. The title is
/// escaped twice beforehand so it survives that pass as valid XML.
///
/// The envelope codec escapes the returned string once more when it is
/// embedded as `CurrentURIMetaData`.
pub fn build_metadata(item: &MediaItem) -> String {
    let seek = if item.seekable {
        SeekFlag::ByteRange
    } else {
        SeekFlag::None
    };
    let protocol_info = format!(
        "http-get:*:{}:{}",
        item.content_type,
        content_features(&item.content_type, seek, false)
    );
    let class = UpnpClass::from_mime(&item.content_type);
    let title = escape(escape(item.title.as_str()).as_ref()).into_owned();

    let mut xml = format!(
        r#"<DIDL-Lite xmlns="{DIDL_NAMESPACE}" xmlns:dc="{DC_NAMESPACE}" xmlns:sec="{SEC_NAMESPACE}" xmlns:upnp="{UPNP_NAMESPACE}"><item id="1" parentID="0" restricted="1">"#
    );

    let subtitles = item.srt_subtitles().map(|url| escape(url).into_owned());
    if let Some(url) = &subtitles {
        xml.push_str(&format!(
            r#"<sec:CaptionInfo sec:type="srt">{url}</sec:CaptionInfo><sec:CaptionInfoEx sec:type="srt">{url}</sec:CaptionInfoEx>"#
        ));
    }

    xml.push_str(&format!(
        "<dc:title>{}</dc:title><upnp:class>{}</upnp:class>",
        title,
        class.as_str()
    ));

    xml.push_str("<res ");
    if !item.duration.is_zero() {
        xml.push_str(&format!(r#"duration="{}" "#, duration_to_clock(item.duration)));
    }
    xml.push_str(&format!(
        r#"protocolInfo="{}">{}</res>"#,
        escape(protocol_info.as_str()),
        escape(item.url.as_str())
    ));

    if let Some(url) = &subtitles {
        xml.push_str(&format!(
            r#"<res protocolInfo="{SRT_PROTOCOL_INFO}">{url}</res>"#
        ));
    }

    xml.push_str("</item></DIDL-Lite>");

    let metadata = relax_escapes(&xml);
    trace!(class = class.as_str(), len = metadata.len(), "built DIDL-Lite metadata");
    metadata
}

fn relax_escapes(xml: &str) -> String {
    xml.replace("&#34;", "\"")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::didl::DidlLite;
    use rstest::rstest;
    use std::time::Duration;

    const MP4_FEATURES: &str = "DLNA.ORG_PN=AVC_MP4_MP_SD_AAC_MULT5;DLNA.ORG_OP=01;DLNA.ORG_CI=0;DLNA.ORG_FLAGS=01700000000000000000000000000000";

    #[test]
    fn test_build_metadata_with_subtitles_golden() {
        let item = MediaItem::new(
            "http://192.168.88.250:3500/video%20%26%20%27example%27.mp4",
            "video/mp4",
        )
        .with_title("foo")
        .with_subtitles("http://192.168.88.250:3500/video_example.srt")
        .seekable(true);

        let expected = format!(
            r#"<DIDL-Lite xmlns="urn:schemas-upnp-org:metadata-1-0/DIDL-Lite/" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:sec="http://www.sec.co.kr/" xmlns:upnp="urn:schemas-upnp-org:metadata-1-0/upnp/"><item id="1" parentID="0" restricted="1"><sec:CaptionInfo sec:type="srt">http://192.168.88.250:3500/video_example.srt</sec:CaptionInfo><sec:CaptionInfoEx sec:type="srt">http://192.168.88.250:3500/video_example.srt</sec:CaptionInfoEx><dc:title>foo</dc:title><upnp:class>object.item.videoItem.movie</upnp:class><res protocolInfo="http-get:*:video/mp4:{MP4_FEATURES}">http://192.168.88.250:3500/video%20%26%20%27example%27.mp4</res><res protocolInfo="http-get:*:text/srt:*">http://192.168.88.250:3500/video_example.srt</res></item></DIDL-Lite>"#
        );
        assert_eq!(build_metadata(&item), expected);
    }

    #[test]
    fn test_build_metadata_without_subtitles() {
        let item = MediaItem::new("http://h/a.mp3", "audio/mpeg").with_title("Song");
        let xml = build_metadata(&item);

        assert_eq!(xml.matches("<res ").count(), 1);
        assert!(!xml.contains("CaptionInfo"));
        assert!(xml.contains("<upnp:class>object.item.audioItem.musicTrack</upnp:class>"));
        assert!(xml.contains("DLNA.ORG_PN=MP3;DLNA.ORG_OP=00;"));
        assert!(!xml.contains("duration="));
    }

    #[test]
    fn test_non_srt_subtitles_are_ignored() {
        let item = MediaItem::new("http://h/a.mp4", "video/mp4").with_subtitles("http://h/a.vtt");
        let xml = build_metadata(&item);

        assert_eq!(xml.matches("<res ").count(), 1);
        assert!(!xml.contains("CaptionInfo"));
    }

    #[test]
    fn test_srt_subtitles_add_second_resource() {
        let item = MediaItem::new("http://h/a.mkv", "video/x-matroska").with_subtitles("http://h/a.srt");
        let didl = DidlLite::from_xml(&build_metadata(&item)).unwrap();

        assert_eq!(didl.item.res.len(), 2);
        assert_eq!(didl.item.res[1].protocol_info.as_deref(), Some("http-get:*:text/srt:*"));
        assert_eq!(didl.item.res[1].uri.as_deref(), Some("http://h/a.srt"));
        assert!(didl.item.caption_info.is_some());
        assert!(didl.item.caption_info_ex.is_some());
    }

    #[test]
    fn test_duration_attribute_precedes_protocol_info() {
        let item = MediaItem::new("http://h/a.mp4", "video/mp4")
            .with_duration(Duration::from_millis(5_400_600));
        let xml = build_metadata(&item);

        assert!(xml.contains(r#"<res duration="01:30:01" protocolInfo="http-get:*:video/mp4:"#));
    }

    #[rstest]
    #[case("audio/flac", UpnpClass::MusicTrack)]
    #[case("image/png", UpnpClass::Photo)]
    #[case("video/mp4", UpnpClass::Movie)]
    #[case("application/octet-stream", UpnpClass::Movie)]
    #[case("", UpnpClass::Movie)]
    fn test_class_from_mime(#[case] mime: &str, #[case] expected: UpnpClass) {
        assert_eq!(UpnpClass::from_mime(mime), expected);
    }

    #[test]
    fn test_title_survives_as_valid_xml() {
        let item = MediaItem::new("http://h/a.mp4", "video/mp4").with_title(r#"Tom & "Jerry" <1>"#);
        let xml = build_metadata(&item);

        assert!(xml.contains("<dc:title>Tom &amp; &quot;Jerry&quot; &lt;1&gt;</dc:title>"));
        let didl = DidlLite::from_xml(&xml).unwrap();
        assert_eq!(didl.item.title.as_deref(), Some(r#"Tom & "Jerry" <1>"#));
    }

    #[test]
    fn test_url_ampersand_is_left_raw() {
        let item = MediaItem::new("http://h/a.mp4?x=1&y=2", "video/mp4");
        assert!(build_metadata(&item).contains(">http://h/a.mp4?x=1&y=2</res>"));
    }
}
