//! The fixed page set shown on the home screen.
//!
//! Content is static and immutable after launch; a page is identified only by
//! its 0-based index. Page 0 is the web-app icon grid, page 1 the mac apps
//! list, page 2 the infrastructure list.

/// Number of horizontally swipeable pages. The dot row and the track both
/// derive their geometry from this.
pub const PAGE_COUNT: usize = 3;

/// Host serving every web app on the grid page.
pub const PAGES_HOST: &str = "corvid-agent.github.io";

/// One icon on the grid page or in the dock.
#[derive(Debug, Clone, Copy)]
pub struct AppIcon {
    pub label: &'static str,
    pub glyph: &'static str,
    pub href: &'static str,
}

/// One row in a link-list page (pages 1 and 2).
#[derive(Debug, Clone, Copy)]
pub struct LinkItem {
    pub name: &'static str,
    pub detail: &'static str,
    pub url: &'static str,
}

/// Web apps on the first page, in grid order.
pub const HOME_APPS: [AppIcon; 17] = [
    AppIcon { label: "Weather", glyph: "🌤", href: "https://corvid-agent.github.io/weather/" },
    AppIcon { label: "Cinema", glyph: "🎬", href: "https://corvid-agent.github.io/cinema/" },
    AppIcon { label: "Space", glyph: "🛰", href: "https://corvid-agent.github.io/space/" },
    AppIcon { label: "Gallery", glyph: "🖼", href: "https://corvid-agent.github.io/gallery/" },
    AppIcon { label: "Notes", glyph: "📝", href: "https://corvid-agent.github.io/notes/" },
    AppIcon { label: "Music", glyph: "🎵", href: "https://corvid-agent.github.io/music/" },
    AppIcon { label: "Terminal", glyph: "💻", href: "https://corvid-agent.github.io/terminal/" },
    AppIcon { label: "Radar", glyph: "📡", href: "https://corvid-agent.github.io/radar/" },
    AppIcon { label: "Chess", glyph: "♟", href: "https://corvid-agent.github.io/chess/" },
    AppIcon { label: "Pixel", glyph: "🎨", href: "https://corvid-agent.github.io/pixel/" },
    AppIcon { label: "Synth", glyph: "🎹", href: "https://corvid-agent.github.io/synth/" },
    AppIcon { label: "Stocks", glyph: "📈", href: "https://corvid-agent.github.io/stocks/" },
    AppIcon { label: "Maps", glyph: "🗺", href: "https://corvid-agent.github.io/maps/" },
    AppIcon { label: "Recipes", glyph: "🍲", href: "https://corvid-agent.github.io/recipes/" },
    AppIcon { label: "Fitness", glyph: "🏃", href: "https://corvid-agent.github.io/fitness/" },
    AppIcon { label: "News", glyph: "📰", href: "https://corvid-agent.github.io/news/" },
    AppIcon { label: "Timer", glyph: "⏱", href: "https://corvid-agent.github.io/timer/" },
];

/// Pinned shortcuts in the dock, in display order.
pub const DOCK_APPS: [AppIcon; 4] = [
    AppIcon { label: "Dashboard", glyph: "📊", href: "https://corvid-agent.github.io/dashboard/" },
    AppIcon { label: "Profile", glyph: "👤", href: "https://corvid-agent.github.io/profile/" },
    AppIcon { label: "Explorer", glyph: "🔍", href: "https://corvid-agent.github.io/explorer/" },
    AppIcon { label: "Chat", glyph: "💬", href: "https://corvid-agent.github.io/chat/" },
];

/// Header of page 1.
pub const MAC_APPS_HEADER: &str = "mac apps";

/// Native utilities listed on page 1.
pub const MAC_APPS: [LinkItem; 9] = [
    LinkItem { name: "Beacon", detail: "menu bar status pings", url: "https://github.com/corvid-agent/beacon" },
    LinkItem { name: "Clip", detail: "clipboard history", url: "https://github.com/corvid-agent/clip" },
    LinkItem { name: "DevKit", detail: "developer toolbox", url: "https://github.com/corvid-agent/devkit" },
    LinkItem { name: "Netwatch", detail: "bandwidth monitor", url: "https://github.com/corvid-agent/netwatch" },
    LinkItem { name: "Palette", detail: "color picker", url: "https://github.com/corvid-agent/palette" },
    LinkItem { name: "Drift", detail: "window snapping", url: "https://github.com/corvid-agent/drift" },
    LinkItem { name: "Keyring", detail: "shortcut cheatsheet", url: "https://github.com/corvid-agent/keyring" },
    LinkItem { name: "Soundboard", detail: "ambient noise mixer", url: "https://github.com/corvid-agent/soundboard" },
    LinkItem { name: "Monitor", detail: "system stats", url: "https://github.com/corvid-agent/monitor" },
];

/// Header of page 2.
pub const INFRA_HEADER: &str = "infrastructure";

/// Project infrastructure listed on page 2.
pub const INFRA_LINKS: [LinkItem; 6] = [
    LinkItem { name: "Landing Page", detail: "corvid-agent.github.io", url: "https://corvid-agent.github.io/" },
    LinkItem { name: "Agent Core", detail: "main repository", url: "https://github.com/corvid-agent/agent-core" },
    LinkItem { name: "Discord", detail: "community server", url: "https://discord.gg/corvid-agent" },
    LinkItem { name: "Status Page", detail: "uptime and incidents", url: "https://status.corvid-agent.dev" },
    LinkItem { name: "Package Registry", detail: "published crates", url: "https://crates.io/users/corvid-agent" },
    LinkItem { name: "Blog", detail: "release notes", url: "https://corvid-agent.github.io/blog/" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_has_seventeen_apps_with_required_entries() {
        assert_eq!(HOME_APPS.len(), 17);
        for required in ["Weather", "Cinema", "Space", "Gallery"] {
            assert!(
                HOME_APPS.iter().any(|app| app.label == required),
                "missing grid app {required}"
            );
        }
    }

    #[test]
    fn every_grid_app_lives_on_the_pages_host() {
        for app in HOME_APPS {
            assert!(
                app.href.contains(PAGES_HOST),
                "{} points off-host: {}",
                app.label,
                app.href
            );
        }
    }

    #[test]
    fn dock_order_is_fixed() {
        let labels: Vec<&str> = DOCK_APPS.iter().map(|app| app.label).collect();
        assert_eq!(labels, ["Dashboard", "Profile", "Explorer", "Chat"]);
    }

    #[test]
    fn link_pages_have_expected_counts_and_names() {
        assert_eq!(MAC_APPS.len(), 9);
        assert_eq!(INFRA_LINKS.len(), 6);
        for required in ["Beacon", "Clip", "DevKit", "Netwatch"] {
            assert!(MAC_APPS.iter().any(|item| item.name == required));
        }
        for required in ["Landing Page", "Agent Core", "Discord"] {
            assert!(INFRA_LINKS.iter().any(|item| item.name == required));
        }
    }

    #[test]
    fn headers_match_the_published_screens() {
        assert_eq!(MAC_APPS_HEADER, "mac apps");
        assert_eq!(INFRA_HEADER, "infrastructure");
        assert_eq!(PAGE_COUNT, 3);
    }
}
