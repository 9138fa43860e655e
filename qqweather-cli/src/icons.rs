//! Icons bundled from `assets/icons` at build time.

use qqweather_core::IconAssets;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/icons.rs"));
}

pub fn assets() -> IconAssets {
    IconAssets::new(generated::ICONS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qqweather_core::icon::icon_ids;

    #[test]
    fn every_table_icon_is_bundled() {
        let assets = assets();
        for id in icon_ids() {
            assert!(assets.contains(id), "missing bundled icon '{id}'");
        }
    }

    #[test]
    fn bundled_icons_are_minified_svg() {
        for name in assets().names() {
            let svg = assets().get(name).unwrap();
            assert!(svg.starts_with("<svg"), "{name} does not start with <svg");
            assert!(!svg.contains('\n'), "{name} still has newlines");
        }
    }
}
