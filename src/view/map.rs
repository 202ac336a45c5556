use crate::domain::{GeoLocation, Location, LocationId, LocationKind};
use crate::search::SearchHit;

const SELECTED_ZOOM: u8 = 14;
const USER_ZOOM: u8 = 12;
const DEFAULT_ZOOM: u8 = 13;

#[derive(PartialEq, Debug, Clone)]
pub struct Marker {
    pub id: LocationId,
    pub kind: LocationKind,
    pub position: GeoLocation,
    pub selected: bool,
    pub popup: Vec<String>,
}

#[derive(PartialEq, Debug, Clone)]
pub enum Viewport {
    Center { center: GeoLocation, zoom: u8 },
    FitBounds { south_west: GeoLocation, north_east: GeoLocation },
}

/// Everything the map widget needs to draw one frame.
#[derive(PartialEq, Debug, Clone)]
pub struct MapScene {
    pub user_marker: Option<GeoLocation>,
    /// The user marker is the configured fallback, not a detected position.
    pub using_default_location: bool,
    pub markers: Vec<Marker>,
    pub viewport: Viewport,
}

impl MapScene {
    pub fn selected_marker(&self) -> Option<&Marker> {
        self.markers.iter().find(|marker| marker.selected)
    }
}

pub fn project<T: Location>(
    hits: &[SearchHit<T>],
    user_location: Option<&GeoLocation>,
    selected: Option<LocationId>,
    default_center: GeoLocation,
) -> MapScene {
    let markers = hits
        .iter()
        .map(|hit| Marker {
            id: hit.location.id(),
            kind: hit.location.kind(),
            position: *hit.location.geo_location(),
            selected: selected == Some(hit.location.id()),
            popup: popup(hit),
        })
        .collect::<Vec<_>>();

    let viewport = match (markers.iter().find(|marker| marker.selected), user_location) {
        (Some(marker), _) => Viewport::Center {
            center: marker.position,
            zoom: SELECTED_ZOOM,
        },
        (None, Some(user)) => Viewport::Center {
            center: *user,
            zoom: USER_ZOOM,
        },
        (None, None) => bounds(&markers).unwrap_or(Viewport::Center {
            center: default_center,
            zoom: DEFAULT_ZOOM,
        }),
    };

    MapScene {
        user_marker: user_location.copied(),
        using_default_location: false,
        markers,
        viewport,
    }
}

fn popup<T: Location>(hit: &SearchHit<T>) -> Vec<String> {
    let mut lines = vec![hit.location.name().to_string(), hit.location.address().to_string()];
    if let Some(distance) = hit.distance {
        lines.push(format!("Distance: {} miles", distance));
    }
    lines.extend(hit.location.details());
    lines
}

fn bounds(markers: &[Marker]) -> Option<Viewport> {
    let first = markers.first()?.position;
    let (south_west, north_east) = markers.iter().skip(1).fold((first, first), |(sw, ne), marker| {
        (
            GeoLocation::new(sw.latitude.min(marker.position.latitude), sw.longitude.min(marker.position.longitude)),
            GeoLocation::new(ne.latitude.max(marker.position.latitude), ne.longitude.max(marker.position.longitude)),
        )
    });

    Some(Viewport::FitBounds { south_west, north_east })
}
