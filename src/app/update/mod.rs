mod core;
mod navigation;
mod widgets;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Effect {
    /// Move the track strip to the given horizontal offset.
    ScrollTrack(f32),
    FetchGithub,
    FetchWeather,
    FetchSeismic,
    FetchSatellite,
    OpenLink(&'static str),
    Quit,
}
