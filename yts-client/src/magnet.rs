use lazy_static::lazy_static;

/// Public trackers announced alongside every YTS release.
pub const TRACKERS: &[&str] = &[
    "udp://open.demonii.com:1337/announce",
    "udp://tracker.openbittorrent.com:80",
    "udp://tracker.coppersurfer.tk:6969",
    "udp://glotorrents.pw:6969/announce",
    "udp://tracker.opentrackr.org:1337/announce",
    "udp://torrent.gresille.org:80/announce",
    "udp://p4p.arenabg.com:1337",
    "udp://tracker.leechers-paradise.org:6969",
];

lazy_static! {
    static ref TRACKER_PARAMS: String = TRACKERS
        .iter()
        .map(|tracker| format!("&tr={}", urlencoding::encode(tracker)))
        .collect();
}

/// Builds a magnet URI from a torrent info hash and a display name.
pub fn magnet_link(hash: &str, display_name: &str) -> String {
    format!(
        "magnet:?xt=urn:btih:{}&dn={}{}",
        hash,
        urlencoding::encode(display_name),
        *TRACKER_PARAMS
    )
}
