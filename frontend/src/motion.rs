use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map_or(false, |list| list.matches())
}

pub fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)")
}

pub fn is_compact_viewport() -> bool {
    media_matches("(max-width: 600px)")
}

/// Scrolls the element with `id` to the top of the viewport.
/// Returns false when no such element exists.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(target) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(if prefers_reduced_motion() {
        ScrollBehavior::Auto
    } else {
        ScrollBehavior::Smooth
    });
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}
