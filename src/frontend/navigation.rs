/// The parts of a link click that decide whether a route transition starts.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkClick<'a> {
    pub button: i16,
    pub meta_key: bool,
    pub ctrl_key: bool,
    pub shift_key: bool,
    pub alt_key: bool,
    pub default_prevented: bool,
    pub href: &'a str,
    pub target: Option<&'a str>,
    pub download: bool,
}

impl LinkClick<'_> {
    pub fn has_modifier(&self) -> bool {
        self.meta_key || self.ctrl_key || self.shift_key || self.alt_key
    }

    pub fn opens_elsewhere(&self) -> bool {
        self.target
            .map(str::trim)
            .is_some_and(|t| !t.is_empty() && !t.eq_ignore_ascii_case("_self"))
    }
}

/// True only for a plain primary-button click on an in-app, same-tab link
/// whose default action nobody cancelled.
pub fn should_start_loading(click: &LinkClick<'_>) -> bool {
    click.button == 0
        && !click.default_prevented
        && !click.has_modifier()
        && !click.opens_elsewhere()
        && !click.download
        && is_in_app_href(click.href)
}

/// Relative links stay inside the app; anything with a scheme or a host
/// (`https:`, `mailto:`, `//cdn...`) leaves it. Pure fragment links do not
/// navigate.
pub fn is_in_app_href(href: &str) -> bool {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') || href.starts_with("//") {
        return false;
    }

    match href.find(':') {
        Some(colon) => {
            let before = &href[..colon];
            // A colon after the first path/query separator is not a scheme.
            before.contains(|c: char| matches!(c, '/' | '?' | '#'))
        }
        None => true,
    }
}
