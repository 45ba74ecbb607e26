//! Cast a media URL to the first renderer found on the network
//!
//! Usage: cargo run -p upnpcast --example cast <media-url> [content-type] [seek-secs]

use std::time::Duration;

use upnpcast::logging::{init_logging, LoggingMode};
use upnpcast::{search, CallContext, MediaItem, RendererExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(LoggingMode::Development)?;

    let mut args = std::env::args().skip(1);
    let url = args
        .next()
        .ok_or("usage: cast <media-url> [content-type] [seek-secs]")?;
    let content_type = args.next().unwrap_or_else(|| "video/mp4".to_string());
    let seek_to: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(0);

    let renderers = search(Duration::from_secs(3), &[])?;
    let renderer = &renderers[0];
    println!("Casting to {} ({})", renderer.friendly_name(), renderer.model_name());

    let transport = renderer.av_transport_client()?;
    let ctx = CallContext::with_timeout(Duration::from_secs(30));

    let title = url.rsplit('/').next().unwrap_or_default().to_string();
    let item = MediaItem::new(url, content_type)
        .with_title(title)
        .seekable(true);

    transport.set_media(&ctx, &item)?;
    transport.play(&ctx)?;

    if seek_to > 0 {
        // Renderers reject Seek until the transport leaves TRANSITIONING
        std::thread::sleep(Duration::from_secs(2));
        transport.seek(&ctx, seek_to)?;
    }

    let info = transport.get_transport_info(&ctx)?;
    let position = transport.get_position_info(&ctx)?;
    println!(
        "{}: {}s of {}s",
        info.transport_state(),
        position.rel_time.as_secs(),
        position.duration.as_secs()
    );

    Ok(())
}
