use crate::app_config::Search as SearchConfig;
use crate::domain::{BloodTypeFilter, LocationId, Notice};
use crate::extensions::date_time_ext::ToCalendarDate;
use crate::geolocation::ResolvedLocation;
use crate::search::{FilterState, Radius, SortKey};
use chrono::NaiveDate;
use tracing::debug;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Page {
    /// Blood banks and donation camps in two tabs, list or map.
    Banks,
    /// Donation camps only, map and list side by side.
    Nearby,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Tab {
    Banks,
    Camps,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum ViewMode {
    List,
    Map,
    Split,
}

#[derive(PartialEq, Debug, Clone)]
pub struct ViewState {
    pub page: Page,
    pub tab: Tab,
    pub mode: ViewMode,
    pub filter: FilterState,
    pub max_radius_miles: f64,
    pub user_location: Option<ResolvedLocation>,
    pub selected: Option<LocationId>,
}

impl ViewState {
    pub fn new(page: Page, config: &SearchConfig) -> Self {
        let (tab, mode) = match page {
            Page::Banks => (Tab::Banks, ViewMode::List),
            Page::Nearby => (Tab::Camps, ViewMode::Split),
        };

        ViewState {
            page,
            tab,
            mode,
            filter: FilterState {
                radius: config.default_radius(),
                sort_key: config.sort_key(),
                ..FilterState::default()
            },
            max_radius_miles: config.max_radius_miles(),
            user_location: None,
            selected: None,
        }
    }
}

#[derive(PartialEq, Debug, Clone)]
pub enum ViewEvent {
    SearchChanged(String),
    BloodTypeChanged(BloodTypeFilter),
    RadiusChanged(f64),
    DateChanged(Option<NaiveDate>),
    SortChanged(SortKey),
    TabChanged(Tab),
    ToggleMapView,
    LocationResolved(ResolvedLocation),
    MarkerClicked(LocationId),
    /// A card was picked, either by clicking it or through "View on Map".
    CardSelected(LocationId),
}

impl ViewEvent {
    /// A date picked in the date filter, only the calendar day is kept.
    pub fn date_picked(picked: Option<&impl ToCalendarDate>) -> Self {
        ViewEvent::DateChanged(picked.map(ToCalendarDate::to_calendar_date))
    }
}

/// What the surrounding UI has to do after a transition.
#[derive(PartialEq, Debug, Clone)]
pub enum Effect {
    ScrollToCard(LocationId),
    /// Center the map on the marker and open its popup.
    FocusMarker(LocationId),
    Notify(Notice),
}

#[derive(PartialEq, Debug, Clone)]
pub struct Transition {
    pub state: ViewState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn to(state: ViewState) -> Self {
        Transition { state, effects: Vec::new() }
    }

    fn with(state: ViewState, effect: Effect) -> Self {
        Transition {
            state,
            effects: vec![effect],
        }
    }
}

pub fn reduce(state: &ViewState, event: ViewEvent) -> Transition {
    let mut next = state.clone();

    match event {
        ViewEvent::SearchChanged(search_term) => {
            next.filter.search_term = search_term;
            Transition::to(next)
        }
        ViewEvent::BloodTypeChanged(blood_type) => {
            next.filter.blood_type = blood_type;
            Transition::to(next)
        }
        ViewEvent::RadiusChanged(miles) => {
            next.filter.radius = Radius::capped(miles, state.max_radius_miles);
            Transition::to(next)
        }
        ViewEvent::DateChanged(date) => {
            next.filter.date = date;
            Transition::to(next)
        }
        ViewEvent::SortChanged(sort_key) => {
            next.filter.sort_key = sort_key;
            Transition::to(next)
        }
        ViewEvent::TabChanged(tab) if state.page == Page::Nearby && tab != Tab::Camps => {
            debug!("The nearby page only lists donation camps, ignoring tab {:?}", tab);
            Transition::to(next)
        }
        ViewEvent::TabChanged(tab) => {
            // Ids are only unique per kind, a selection does not carry over.
            if tab != state.tab {
                next.tab = tab;
                next.selected = None;
            }
            Transition::to(next)
        }
        ViewEvent::ToggleMapView => {
            next.mode = match state.mode {
                ViewMode::List => ViewMode::Map,
                ViewMode::Map => ViewMode::List,
                ViewMode::Split => ViewMode::Split,
            };
            Transition::to(next)
        }
        ViewEvent::LocationResolved(resolved) => {
            let notice = resolved.notice();
            next.user_location = Some(resolved);
            Transition::with(next, Effect::Notify(notice))
        }
        ViewEvent::MarkerClicked(id) => {
            next.selected = Some(id);
            match state.mode {
                ViewMode::Map => Transition::to(next),
                ViewMode::List | ViewMode::Split => Transition::with(next, Effect::ScrollToCard(id)),
            }
        }
        ViewEvent::CardSelected(id) => {
            next.selected = Some(id);
            if next.mode == ViewMode::List {
                next.mode = ViewMode::Map;
            }
            Transition::with(next, Effect::FocusMarker(id))
        }
    }
}
