use once_cell::sync::Lazy;
use regex::Regex;

use crate::dto::Layout;
use crate::entities::RequestContext;

/// User-agent fragments of known mobile browsers and handsets.
static MOBILE_UA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        "(?i)(nokia|iphone|ipod|android|motorola|blackberry|samsung|ericsson|huawei|htc|\
         webos|symbian|smartphone|mmp|midp|wap|phone|windows ce|iemobile|palm|\
         opera\\s*mobi|opera\\s*mini|netfront|up\\.browser|up\\.link|240x320|320x320)",
    )
    .expect("mobile user-agent pattern is valid")
});

/// Classifies the buyer's device from an explicit request context.
///
/// Static signature matching, not an algorithm: user-agent fragments,
/// the WAP Accept type, and WAP profile headers all indicate a handset.
pub fn is_mobile(request: &RequestContext) -> bool {
    if MOBILE_UA.is_match(&request.user_agent) {
        return true;
    }
    if request
        .accept
        .to_lowercase()
        .contains("application/vnd.wap.xhtml+xml")
    {
        return true;
    }
    request.wap_profile
}

/// GUI layout for the payload.
pub fn layout_for(request: &RequestContext) -> Layout {
    if is_mobile(request) {
        Layout::Mobile
    } else {
        Layout::Desktop
    }
}
