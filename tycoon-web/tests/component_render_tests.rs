use futures::executor::block_on;
use serde_json::json;
use tycoon_core::{
    ClientConfig, ClientState, DaySummary, Feedback, Forecast, GameStateSnapshot, NoticeBoard,
    Severity, StateFrame,
};
use tycoon_web::components::day_summary::DaySummaryModal;
use tycoon_web::components::header::Header;
use tycoon_web::components::insights::ForecastPanel;
use tycoon_web::components::stats_bar::StatsBar;
use tycoon_web::components::toast::ToastStack;
use tycoon_web::pages::dashboard::DashboardPage;
use tycoon_web::router::Route;
use yew::{Callback, LocalServerRenderer};

fn frame(doc: &serde_json::Value) -> StateFrame {
    ClientState::default().apply(GameStateSnapshot::from_value(doc))
}

#[test]
fn header_offers_every_locale() {
    tycoon_web::i18n::set_lang("en");
    let props = tycoon_web::components::header::Props {
        current_lang: "en".to_string(),
        on_lang_change: Callback::noop(),
        active: Route::History,
        on_navigate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains("lang-select"));
    assert!(html.contains("English"));
    assert!(html.contains("Türkçe"));
    assert!(html.contains("History"));
}

#[test]
fn stats_bar_shows_money_and_energy() {
    tycoon_web::i18n::set_lang("en");
    let props = tycoon_web::components::stats_bar::Props {
        frame: frame(&json!({
            "cash": 12500, "research": 40, "energy": 30, "max_energy": 100, "current_day": 3
        })),
        animation_ms: 700,
    };
    let html = block_on(LocalServerRenderer::<StatsBar>::with_props(props).render());
    assert!(html.contains("12,500"), "{html}");
    assert!(html.contains("TL"));
    assert!(html.contains("width: 30%"));
    assert!(html.contains("30/100"));
}

#[test]
fn dashboard_lists_departments_and_employees() {
    tycoon_web::i18n::set_lang("en");
    let props = tycoon_web::pages::dashboard::Props {
        frame: Some(frame(&json!({
            "cash": 1000,
            "energy": 80,
            "current_day": 2,
            "departments": { "eng": { "level": 2, "employees": 1 } },
            "employees": [
                { "name": "Deniz", "position": "Developer", "department": "eng", "salary": 300 }
            ]
        }))),
        animation_ms: 0,
        on_task: Callback::noop(),
        on_upgrade: Callback::noop(),
        on_restore_energy: Callback::noop(),
        on_open_hire: Callback::noop(),
        on_end_day: Callback::noop(),
        on_save: Callback::noop(),
        on_load: Callback::noop(),
        on_reset: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<DashboardPage>::with_props(props).render());
    assert!(html.contains("Engineering"));
    assert!(html.contains("Deniz"));
    assert!(html.contains("end-day-btn"));
    assert!(html.contains("kod_yaz"));
}

#[test]
fn day_summary_shows_bankruptcy_before_entries() {
    tycoon_web::i18n::set_lang("en");
    let summary = DaySummary::from_value(
        &json!({
            "bankruptcy_message": "Cash is running out",
            "income": 500,
            "expenses": { "salaries": 300 }
        }),
        32,
    );
    let props = tycoon_web::components::day_summary::Props {
        summary: Some(summary),
        on_close: Callback::noop(),
        on_restart: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<DaySummaryModal>::with_props(props).render());
    let warning = html.find("Cash is running out").expect("bankruptcy shown");
    let salaries = html.find("SALARIES").expect("nested entry shown");
    assert!(warning < salaries);
    assert!(html.contains("summary-close-btn"));
}

#[test]
fn toast_stack_keeps_duplicates_in_order() {
    tycoon_web::i18n::set_lang("en");
    let mut board = NoticeBoard::new(&ClientConfig::default());
    board.alert(Severity::Success, Feedback::Key("notify.saved"));
    board.alert(Severity::Success, Feedback::Key("notify.saved"));
    board.achievement("Night Owl".into(), Some("Ended ten days".into()));
    let props = tycoon_web::components::toast::Props {
        notices: board.items().to_vec(),
        on_dismiss: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ToastStack>::with_props(props).render());
    assert_eq!(html.matches("Game saved").count(), 2);
    assert!(html.contains("Achievement unlocked: Night Owl"));
    assert!(html.contains("achievement-toast"));
}

#[test]
fn forecast_marks_critical_days() {
    tycoon_web::i18n::set_lang("en");
    let forecast = Forecast::from_body(&json!({
        "predictions": [
            { "day": 4, "estimated_cash": 900, "income": 100, "expenses": 300, "net_flow": -200, "status": "warning" },
            { "day": 5, "estimated_cash": -100, "income": 100, "expenses": 1100, "net_flow": -1000, "status": "critical" }
        ],
        "recommendations": []
    }))
    .expect("forecast decodes");
    let props = tycoon_web::components::insights::ForecastProps {
        forecast: Some(forecast),
    };
    let html = block_on(LocalServerRenderer::<ForecastPanel>::with_props(props).render());
    assert!(html.contains("Critical"));
    assert!(html.contains("Warning"));
}
