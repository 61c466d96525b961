//! Static icon and brand-color catalog.
//!
//! Read-only configuration data mapping each [`ResourceKind`] to its icon
//! path data and brand color. Icons are drawn in a 48×48 unit viewbox and
//! scaled into place by the renderer; sharing these tables across
//! invocations is safe since nothing here is mutable.

use crate::resource::ResourceKind;

/// Side length of the square viewbox all icon path data is authored in.
pub const ICON_VIEWBOX: f32 = 48.0;

/// Returns the icon path data for a resource kind, if one is registered.
///
/// Path data targets a [`ICON_VIEWBOX`]-unit square and is stroked, not
/// filled. Kinds without an icon fall back to a plain labeled box.
pub fn icon_path(kind: ResourceKind) -> Option<&'static str> {
    match kind {
        ResourceKind::Instance => Some(
            "M32.14 14.953v10.094l8.746 5.046v-10.093zm-16.275 0L7.12 20v10.093l8.745-5.047zm8.137 0L15.257 20v10.093l8.745 5.047m0-20.187L15.257 20l8.745 5.047",
        ),
        ResourceKind::Network => Some(
            "M41 5h-6c-1.105 0-2 0.895-2 2v6c0 1.105 0.895 2 2 2h6c1.105 0 2-0.895 2-2v-6c0-1.105-0.895-2-2-2zM13 5h-6c-1.105 0-2 0.895-2 2v6c0 1.105 0.895 2 2 2h6c1.105 0 2-0.895 2-2v-6c0-1.105-0.895-2-2-2zM41 33h-6c-1.105 0-2 0.895-2 2v6c0 1.105 0.895 2 2 2h6c1.105 0 2-0.895 2-2v-6c0-1.105-0.895-2-2-2zM13 33h-6c-1.105 0-2 0.895-2 2v6c0 1.105 0.895 2 2 2h6c1.105 0 2-0.895 2-2v-6c0-1.105-0.895-2-2-2zM9 15v18M41 15v18M15 9h18M15 41h18",
        ),
        ResourceKind::Subnet => Some("M10 10h28v28h-28z"),
        ResourceKind::SecurityGroup => Some(
            "M24 4l-16 16 16 16 16-16-16-16zM24 12.9l11.1 11.1-11.1 11.1-11.1-11.1 11.1-11.1z",
        ),
        ResourceKind::InternetGateway => {
            Some("M40 18h-32v12h32v-12zM24 10v-6M24 44v-6M8 24h-4M44 24h-4")
        }
        ResourceKind::NatGateway => Some("M36 18h-24v12h24v-12zM32 24l-12 0M36 30v-12M12 30v-12"),
        ResourceKind::ObjectStore => Some(
            "M24 4l-20 11.5v17l20 11.5 20-11.5v-17l-20-11.5zM5.9 15.7l18.1-10.4 18.1 10.4-18.1 10.4-18.1-10.4zM26.5 34.7l16.5-9.5v13.1l-16.5 9.5v-13.1zM5 38.3v-13.1l16.5 9.5v13.1l-16.5-9.5z",
        ),
        ResourceKind::Database => Some(
            "M24 4c-8.837 0-16 2.239-16 5v8.5c0 2.761 7.163 5 16 5s16-2.239 16-5v-8.5c0-2.761-7.163-5-16-5zM24 14c-8.837 0-16-2.239-16-5s7.163-5 16-5 16 2.239 16 5-7.163 5-16 5zM8 19.7v8.5c0 2.761 7.163 5 16 5s16-2.239 16-5v-8.5",
        ),
        ResourceKind::Function => Some("M15 14l-10 20h38l-10-20M24 4v10M21 34l3 10 3-10"),
        ResourceKind::KeyValueStore => Some(
            "M8 24c0-9.941 7.059-18 16-18s16 8.059 16 18-7.059 18-16 18-16-8.059-16-18zM24 10v28M10 24h28",
        ),
        ResourceKind::LoadBalancer => Some("M8 18h32v12h-32v-12zM18 18v12M30 18v12"),
    }
}

/// Returns the brand color for a resource kind as a CSS hex string.
pub fn brand_color(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Instance => "#FF9900",
        ResourceKind::Network => "#232F3E",
        ResourceKind::Subnet => "#147EBA",
        ResourceKind::SecurityGroup => "#1A694D",
        ResourceKind::InternetGateway => "#6B6B6B",
        ResourceKind::NatGateway => "#8C4FFF",
        ResourceKind::ObjectStore => "#E05243",
        ResourceKind::Database => "#3B48CC",
        ResourceKind::Function => "#FF9900",
        ResourceKind::KeyValueStore => "#3B48CC",
        ResourceKind::LoadBalancer => "#FF4F8B",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_every_kind_has_an_icon() {
        let kinds = [
            ResourceKind::Network,
            ResourceKind::Subnet,
            ResourceKind::SecurityGroup,
            ResourceKind::Instance,
            ResourceKind::InternetGateway,
            ResourceKind::NatGateway,
            ResourceKind::ObjectStore,
            ResourceKind::Database,
            ResourceKind::Function,
            ResourceKind::KeyValueStore,
            ResourceKind::LoadBalancer,
        ];
        for kind in kinds {
            assert!(icon_path(kind).is_some(), "missing icon for {kind}");
        }
    }

    #[test]
    fn test_brand_colors_are_valid_css() {
        let kinds = [
            ResourceKind::Network,
            ResourceKind::Subnet,
            ResourceKind::SecurityGroup,
            ResourceKind::Instance,
            ResourceKind::Database,
            ResourceKind::LoadBalancer,
        ];
        for kind in kinds {
            assert!(
                Color::new(brand_color(kind)).is_ok(),
                "invalid brand color for {kind}"
            );
        }
    }
}
