mod handlers;

pub use handlers::{AppHandlers, dispatch_action};

use crate::app::state::AppState;
use crate::components::{
    achievements::AchievementsPanel,
    day_summary::DaySummaryModal,
    header::Header,
    hire_form::HireDialog,
    history::HistoryPanel,
    insights::{ForecastPanel, StatsPanel},
    toast::ToastStack,
};
use crate::pages::{dashboard::DashboardPage, not_found::NotFound};
use crate::router::Route;
use yew::prelude::*;

pub fn render_app(
    state: &AppState,
    handlers: &AppHandlers,
    route: &Route,
    animation_ms: u32,
) -> Html {
    let main_view = match route {
        Route::Dashboard => html! {
            <DashboardPage
                frame={(*state.frame).clone()}
                animation_ms={animation_ms}
                on_task={handlers.task.clone()}
                on_upgrade={handlers.upgrade.clone()}
                on_restore_energy={handlers.restore_energy.clone()}
                on_open_hire={handlers.open_hire.clone()}
                on_end_day={handlers.end_day.clone()}
                on_save={handlers.save.clone()}
                on_load={handlers.load.clone()}
                on_reset={handlers.reset.clone()}
            />
        },
        Route::Achievements => html! {
            <AchievementsPanel
                achievements={(*state.achievements).clone()}
                on_refresh={handlers.refresh_achievements.clone()}
            />
        },
        Route::History => html! {
            <HistoryPanel history={(*state.history).clone()} />
        },
        Route::Insights => html! {
            <div class="insights-grid">
                <StatsPanel stats={(*state.stats).clone()} />
                <ForecastPanel forecast={(*state.forecast).clone()} />
            </div>
        },
        Route::NotFound => html! { <NotFound on_go_home={handlers.go_home.clone()} /> },
    };

    html! {
        <>
            <Header
                current_lang={(*state.current_language).clone()}
                on_lang_change={handlers.lang_change.clone()}
                active={route.clone()}
                on_navigate={handlers.navigate.clone()}
            />
            <main id="main" role="main">
                <style>{ crate::a11y::visible_focus_css() }</style>
                { main_view }
            </main>
            <HireDialog
                open={*state.show_hire}
                departments={state.department_keys()}
                on_submit={handlers.hire.clone()}
                on_close={handlers.close_hire.clone()}
            />
            <DaySummaryModal
                summary={(*state.summary).clone()}
                on_close={handlers.close_summary.clone()}
                on_restart={handlers.restart.clone()}
            />
            <ToastStack
                notices={state.notices.items().to_vec()}
                on_dismiss={handlers.dismiss_notice.clone()}
            />
        </>
    }
}
