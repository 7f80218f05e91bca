//! Axum route handlers for theme preference and the statistics counters.

use axum::{
    extract::{rejection::FormRejection, State},
    response::{
        sse::{Event, KeepAlive, Sse},
        Redirect,
    },
    Form, Json,
};
use axum_extra::extract::cookie::CookieJar;
use futures::{stream, Stream};
use serde::Serialize;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::stat::SiteStat;
use crate::routes::page::PageQuery;
use crate::state::AppState;
use crate::ui::counter::{StatsAnimation, StatsFrame};
use crate::ui::theme::{theme_from_jar, toggle_theme, Theme};

#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
    pub icon: &'static str,
}

impl From<Theme> for ThemeResponse {
    fn from(theme: Theme) -> Self {
        Self {
            theme,
            icon: theme.icon_class(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub stats: &'static [SiteStat],
    pub duration_ms: u64,
    pub tick_ms: u64,
}

/// GET /api/v1/theme
pub async fn handle_get_theme(State(state): State<AppState>, jar: CookieJar) -> Json<ThemeResponse> {
    Json(theme_from_jar(&jar, state.config.default_theme).into())
}

/// POST /api/v1/theme/toggle
pub async fn handle_toggle_theme(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<ThemeResponse>) {
    let (jar, theme) = toggle_theme(jar, state.config.default_theme);
    debug!(%theme, "Theme toggled");
    (jar, Json(theme.into()))
}

/// POST /theme
///
/// Form target for the navbar toggle. The form carries the visitor's active
/// filters, so the redirect lands on the same view.
pub async fn handle_toggle_theme_form(
    State(state): State<AppState>,
    jar: CookieJar,
    form: Result<Form<PageQuery>, FormRejection>,
) -> Result<(CookieJar, Redirect), AppError> {
    let Form(page) = form?;
    let location = page.page_location()?;
    let (jar, theme) = toggle_theme(jar, state.config.default_theme);
    debug!(%theme, %location, "Theme toggled from page form");
    Ok((jar, Redirect::to(&location)))
}

/// GET /api/v1/stats
pub async fn handle_list_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        stats: state.catalog.stats,
        duration_ms: state.config.counter_duration_ms,
        tick_ms: state.config.counter_tick_ms,
    })
}

/// GET /api/v1/stats/stream
///
/// One `tick` event per cadence interval until every counter reaches its
/// target. The stream (and its timer) is dropped when the client goes away.
pub async fn handle_stats_stream(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let animation = StatsAnimation::new(
        state.catalog.stats,
        state.config.counter_duration(),
        state.config.counter_tick(),
    );
    let mut ticker = interval(state.config.counter_tick());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    info!("Stats counter stream opened");

    let events = stream::unfold((ticker, animation), |(mut ticker, mut animation)| async move {
        let frame = animation.next()?;
        ticker.tick().await;
        Some((tick_event(&frame), (ticker, animation)))
    });

    Sse::new(events).keep_alive(KeepAlive::default())
}

fn tick_event(frame: &StatsFrame) -> Result<Event, axum::Error> {
    Event::default().event("tick").json_data(frame)
}
