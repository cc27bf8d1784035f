use super::*;
use crate::models::meal_count::MealCounts;
use crate::models::menu::{MenuDraft, MenuField, MenuLookup};
use crate::models::weekday::Weekday;
use crate::services::api::{ApiError, ConnectionStatus, MockMealApi};
use chrono::NaiveDate;
use mockall::predicate::eq;
use pretty_assertions::assert_eq;
use test_case::test_case;

fn sample_counts(date: &str) -> MealCounts {
    MealCounts {
        date: date.to_string(),
        veg: 1,
        non_veg: 2,
        veg_students: vec!["Asha".to_string()],
        non_veg_students: vec!["Ravi".to_string(), "Meera".to_string()],
        ..MealCounts::default()
    }
}

fn sample_draft() -> MenuDraft {
    MenuDraft {
        breakfast: "Poha".to_string(),
        lunch: "Rajma chawal".to_string(),
        snacks: "Bhel".to_string(),
        dinner: "Paneer roti".to_string(),
    }
}

/// Open the editor and complete its initial load with `lookup`.
fn editor_loaded(lookup: MenuLookup) -> DashboardState {
    let mut state = DashboardState::new();
    let pending = state.show_edit_menu().unwrap();
    let weekday = state.weekday();
    state.apply(
        pending.ticket,
        ApiResponse::Menu {
            weekday,
            result: Ok(lookup),
        },
    );
    state
}

#[test]
fn test_defaults() {
    let state = DashboardState::new();
    assert_eq!(state.active_view(), ActiveView::MealCounts);
    assert_eq!(state.weekday(), Weekday::Monday);
    assert_eq!(state.draft(), &MenuDraft::default());
    assert!(state.meal_counts().is_none());
    assert!(state.status().is_none());
}

#[test]
fn test_start_loads_meal_counts() {
    let mut state = DashboardState::new();
    let requests = state.start();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].request, ApiRequest::LoadMealCounts);
    assert_eq!(state.in_flight(), 1);
}

#[test]
fn test_meal_counts_success_replaces_snapshot_and_keeps_status() {
    let mut state = DashboardState::new();
    let pending = state.refresh_meal_counts();
    state.apply(pending.ticket, ApiResponse::MealCounts(Ok(Some(sample_counts("2026-10-20")))));

    assert_eq!(state.meal_counts(), Some(&sample_counts("2026-10-20")));
    assert!(state.status().is_none());
    assert_eq!(state.in_flight(), 0);
}

#[test]
fn test_meal_counts_empty_body_sets_info_message() {
    let mut state = DashboardState::new();
    let pending = state.refresh_meal_counts();
    state.apply(pending.ticket, ApiResponse::MealCounts(Ok(None)));

    assert_eq!(
        state.status(),
        Some(&StatusMessage::info(EMPTY_MEAL_COUNTS_MESSAGE))
    );
    assert!(state.meal_counts().is_none());
}

#[test]
fn test_meal_counts_http_500_keeps_previous_snapshot() {
    let mut state = DashboardState::new();
    let first = state.refresh_meal_counts();
    state.apply(first.ticket, ApiResponse::MealCounts(Ok(Some(sample_counts("2026-10-20")))));

    let second = state.refresh_meal_counts();
    state.apply(
        second.ticket,
        ApiResponse::MealCounts(Err(ApiError::Http {
            status: 500,
            body: "Internal Server Error".to_string(),
        })),
    );

    assert_eq!(state.meal_counts(), Some(&sample_counts("2026-10-20")));
    let status = state.status().unwrap();
    assert_eq!(status.kind, StatusKind::Error);
    assert!(status.text.starts_with("Error fetching meal counts:"));
    assert!(status.text.contains("500"));
}

#[test]
fn test_meal_counts_non_json_sets_error() {
    let mut state = DashboardState::new();
    let pending = state.refresh_meal_counts();
    state.apply(
        pending.ticket,
        ApiResponse::MealCounts(Err(ApiError::UnexpectedContentType("text/html".to_string()))),
    );

    let status = state.status().unwrap();
    assert_eq!(status.kind, StatusKind::Error);
    assert!(status.text.contains("text/html"));
}

#[test]
fn test_refresh_from_editor_switches_view_with_single_request() {
    let mut state = editor_loaded(MenuLookup::Found(sample_draft()));
    let pending = state.refresh_meal_counts();

    assert_eq!(state.active_view(), ActiveView::MealCounts);
    assert_eq!(pending.request, ApiRequest::LoadMealCounts);
    assert_eq!(state.in_flight(), 1);
}

#[test]
fn test_show_edit_menu_loads_selected_weekday_once() {
    let mut state = DashboardState::new();
    let pending = state.show_edit_menu().unwrap();
    assert_eq!(pending.request, ApiRequest::LoadMenu(Weekday::Monday));

    // Already in the editor: nothing new to fetch
    assert!(state.show_edit_menu().is_none());
}

#[test_case(Weekday::Tuesday)]
#[test_case(Weekday::Wednesday)]
#[test_case(Weekday::Thursday)]
#[test_case(Weekday::Friday)]
#[test_case(Weekday::Saturday)]
#[test_case(Weekday::Sunday)]
fn test_select_weekday_in_editor_issues_one_load(weekday: Weekday) {
    let mut state = editor_loaded(MenuLookup::Found(sample_draft()));
    let before = state.in_flight();

    let pending = state.select_weekday(weekday).unwrap();

    assert_eq!(pending.request, ApiRequest::LoadMenu(weekday));
    assert_eq!(state.in_flight(), before + 1);
    assert_eq!(state.weekday(), weekday);
}

#[test]
fn test_reselecting_same_weekday_is_noop() {
    let mut state = editor_loaded(MenuLookup::Missing);
    assert!(state.select_weekday(Weekday::Monday).is_none());
}

#[test]
fn test_select_weekday_outside_editor_does_not_fetch() {
    let mut state = DashboardState::new();
    assert!(state.select_weekday(Weekday::Friday).is_none());
    assert_eq!(state.weekday(), Weekday::Friday);

    let pending = state.show_edit_menu().unwrap();
    assert_eq!(pending.request, ApiRequest::LoadMenu(Weekday::Friday));
}

#[test]
fn test_menu_found_fills_draft_and_clears_status() {
    let mut state = DashboardState::new();
    let pending = state.show_edit_menu().unwrap();
    state.apply(
        pending.ticket,
        ApiResponse::Menu {
            weekday: Weekday::Monday,
            result: Err(ApiError::Transport("refused".to_string())),
        },
    );
    assert!(state.status().is_some());

    let pending = state.refresh_active_view();
    state.apply(
        pending.ticket,
        ApiResponse::Menu {
            weekday: Weekday::Monday,
            result: Ok(MenuLookup::Found(sample_draft())),
        },
    );

    assert_eq!(state.draft(), &sample_draft());
    assert!(state.status().is_none());
    assert!(state.can_submit());
}

#[test]
fn test_menu_404_for_tuesday_resets_draft() {
    let mut state = editor_loaded(MenuLookup::Found(sample_draft()));
    let pending = state.select_weekday(Weekday::Tuesday).unwrap();
    state.apply(
        pending.ticket,
        ApiResponse::Menu {
            weekday: Weekday::Tuesday,
            result: Ok(MenuLookup::Missing),
        },
    );

    assert_eq!(state.draft(), &MenuDraft::default());
    assert_eq!(
        state.status(),
        Some(&StatusMessage::info(
            "No menu found for Tuesday. You can create one."
        ))
    );
    assert!(state.can_submit());
}

#[test]
fn test_menu_http_error_is_reported_separately_from_network_error() {
    let mut state = editor_loaded(MenuLookup::Found(sample_draft()));

    let pending = state.refresh_active_view();
    state.apply(
        pending.ticket,
        ApiResponse::Menu {
            weekday: Weekday::Monday,
            result: Err(ApiError::Http {
                status: 503,
                body: String::new(),
            }),
        },
    );
    assert_eq!(
        state.status(),
        Some(&StatusMessage::error("Error fetching menu (HTTP 503)."))
    );

    let pending = state.refresh_active_view();
    state.apply(
        pending.ticket,
        ApiResponse::Menu {
            weekday: Weekday::Monday,
            result: Err(ApiError::Transport("timed out".to_string())),
        },
    );
    assert_eq!(
        state.status(),
        Some(&StatusMessage::error(MENU_NETWORK_ERROR_MESSAGE))
    );

    // Failed loads leave the draft alone
    assert_eq!(state.draft(), &sample_draft());
}

#[test]
fn test_update_draft_field_accepts_any_string() {
    let mut state = editor_loaded(MenuLookup::Found(sample_draft()));
    state.update_draft_field(MenuField::Lunch, "");
    state.update_draft_field(MenuField::Dinner, "  ✓ Biryani  ");

    assert_eq!(state.draft().lunch, "");
    assert_eq!(state.draft().dinner, "  ✓ Biryani  ");
    assert!(state.in_flight() == 0);
}

#[test]
fn test_submit_sends_draft_with_current_weekday() {
    let mut state = editor_loaded(MenuLookup::Missing);
    let pending = state.select_weekday(Weekday::Thursday).unwrap();
    state.apply(
        pending.ticket,
        ApiResponse::Menu {
            weekday: Weekday::Thursday,
            result: Ok(MenuLookup::Missing),
        },
    );
    state.update_draft_field(MenuField::Breakfast, "Dosa");

    let pending = state.submit_menu().unwrap();
    match pending.request {
        ApiRequest::SaveMenu(submission) => {
            assert_eq!(submission.weekday, Weekday::Thursday);
            assert_eq!(submission.breakfast, "Dosa");
            assert_eq!(submission.lunch, "");
        }
        other => panic!("unexpected request {:?}", other),
    }
    assert!(state.status().is_none(), "submit clears the previous message");
}

#[test]
fn test_submit_blocked_until_selected_weekday_loaded() {
    let mut state = editor_loaded(MenuLookup::Found(sample_draft()));
    state.select_weekday(Weekday::Saturday).unwrap();

    assert!(!state.can_submit());
    assert!(state.submit_menu().is_none());
}

#[test]
fn test_submit_success_sets_message_and_reloads() {
    let mut state = editor_loaded(MenuLookup::Missing);
    let pending = state.submit_menu().unwrap();

    let follow_up = state.apply(
        pending.ticket,
        ApiResponse::MenuSaved {
            weekday: Weekday::Monday,
            result: Ok("Menu for Monday created/updated successfully.".to_string()),
        },
    );

    assert_eq!(
        state.status(),
        Some(&StatusMessage::success(
            "Menu for Monday created/updated successfully."
        ))
    );
    assert_eq!(follow_up.len(), 1);
    assert_eq!(follow_up[0].request, ApiRequest::LoadMenu(Weekday::Monday));
}

#[test]
fn test_submit_success_after_weekday_change_does_not_reload_old_day() {
    let mut state = editor_loaded(MenuLookup::Missing);
    let save = state.submit_menu().unwrap();
    state.select_weekday(Weekday::Sunday).unwrap();

    let follow_up = state.apply(
        save.ticket,
        ApiResponse::MenuSaved {
            weekday: Weekday::Monday,
            result: Ok("Menu for Monday created/updated successfully.".to_string()),
        },
    );

    assert!(follow_up.is_empty());
    assert_eq!(state.status().unwrap().kind, StatusKind::Success);
}

#[test]
fn test_reload_after_save_keeps_confirmation() {
    let mut state = editor_loaded(MenuLookup::Found(sample_draft()));
    let save = state.submit_menu().unwrap();
    let reload = state.apply(
        save.ticket,
        ApiResponse::MenuSaved {
            weekday: Weekday::Monday,
            result: Ok("Menu for Monday created/updated successfully.".to_string()),
        },
    );

    state.apply(
        reload[0].ticket,
        ApiResponse::Menu {
            weekday: Weekday::Monday,
            result: Ok(MenuLookup::Found(sample_draft())),
        },
    );

    assert_eq!(state.status().unwrap().kind, StatusKind::Success);
    assert!(state.can_submit());
}

#[test]
fn test_later_menu_load_clears_old_save_confirmation() {
    let mut state = editor_loaded(MenuLookup::Found(sample_draft()));
    let save = state.submit_menu().unwrap();
    let reload = state.apply(
        save.ticket,
        ApiResponse::MenuSaved {
            weekday: Weekday::Monday,
            result: Ok("Menu saved".to_string()),
        },
    );
    state.apply(
        reload[0].ticket,
        ApiResponse::Menu {
            weekday: Weekday::Monday,
            result: Ok(MenuLookup::Found(sample_draft())),
        },
    );
    assert_eq!(state.status(), Some(&StatusMessage::success("Menu saved")));

    // Leave the editor and come back
    state.refresh_meal_counts();
    let pending = state.show_edit_menu().unwrap();
    state.apply(
        pending.ticket,
        ApiResponse::Menu {
            weekday: Weekday::Monday,
            result: Ok(MenuLookup::Found(sample_draft())),
        },
    );

    assert!(state.status().is_none());
}

#[test]
fn test_menu_refresh_clears_connection_success() {
    let mut state = editor_loaded(MenuLookup::Found(sample_draft()));
    let check = state.check_connection();
    state.apply(
        check.ticket,
        ApiResponse::Connection(Ok(ConnectionStatus {
            status: "connected".to_string(),
            time: Some("t".to_string()),
            error: None,
        })),
    );
    assert_eq!(state.status().unwrap().kind, StatusKind::Success);

    let pending = state.refresh_active_view();
    state.apply(
        pending.ticket,
        ApiResponse::Menu {
            weekday: Weekday::Monday,
            result: Ok(MenuLookup::Found(sample_draft())),
        },
    );

    assert!(state.status().is_none());
}

#[test]
fn test_reload_superseded_by_refresh_clears_confirmation() {
    let mut state = editor_loaded(MenuLookup::Found(sample_draft()));
    let save = state.submit_menu().unwrap();
    state.apply(
        save.ticket,
        ApiResponse::MenuSaved {
            weekday: Weekday::Monday,
            result: Ok("Menu saved".to_string()),
        },
    );

    // F5 before the reload arrives; the reload is now stale
    let refresh = state.refresh_active_view();
    state.apply(
        refresh.ticket,
        ApiResponse::Menu {
            weekday: Weekday::Monday,
            result: Ok(MenuLookup::Found(sample_draft())),
        },
    );

    assert!(state.status().is_none());
}

#[test]
fn test_changing_weekday_clears_previous_message() {
    let mut state = editor_loaded(MenuLookup::Missing);
    assert!(state.status().is_some());

    state.select_weekday(Weekday::Wednesday).unwrap();
    assert!(state.status().is_none());
}

#[test]
fn test_submit_failure_sets_generic_error() {
    let mut state = editor_loaded(MenuLookup::Found(sample_draft()));
    let pending = state.submit_menu().unwrap();

    let follow_up = state.apply(
        pending.ticket,
        ApiResponse::MenuSaved {
            weekday: Weekday::Monday,
            result: Err(ApiError::Http {
                status: 500,
                body: String::new(),
            }),
        },
    );

    assert!(follow_up.is_empty());
    assert_eq!(state.status(), Some(&StatusMessage::error(SUBMIT_ERROR_MESSAGE)));
    assert_eq!(state.draft(), &sample_draft());
}

#[test]
fn test_stale_menu_response_is_discarded() {
    let mut state = editor_loaded(MenuLookup::Missing);
    let tuesday = state.select_weekday(Weekday::Tuesday).unwrap();
    let wednesday = state.select_weekday(Weekday::Wednesday).unwrap();

    state.apply(
        wednesday.ticket,
        ApiResponse::Menu {
            weekday: Weekday::Wednesday,
            result: Ok(MenuLookup::Missing),
        },
    );
    // Tuesday's answer arrives late
    state.apply(
        tuesday.ticket,
        ApiResponse::Menu {
            weekday: Weekday::Tuesday,
            result: Ok(MenuLookup::Found(sample_draft())),
        },
    );

    assert_eq!(state.weekday(), Weekday::Wednesday);
    assert_eq!(state.draft(), &MenuDraft::default());
    assert_eq!(state.in_flight(), 0);
}

#[test]
fn test_meal_counts_after_navigating_away_is_discarded() {
    let mut state = DashboardState::new();
    let counts = state.refresh_meal_counts();
    state.show_edit_menu().unwrap();

    state.apply(
        counts.ticket,
        ApiResponse::MealCounts(Err(ApiError::Transport("refused".to_string()))),
    );

    assert!(state.status().is_none());
}

#[test]
fn test_older_meal_counts_do_not_overwrite_newer() {
    let mut state = DashboardState::new();
    let old = state.refresh_meal_counts();
    let new = state.refresh_meal_counts();

    state.apply(new.ticket, ApiResponse::MealCounts(Ok(Some(sample_counts("2026-10-21")))));
    state.apply(old.ticket, ApiResponse::MealCounts(Ok(Some(sample_counts("2026-10-20")))));

    assert_eq!(state.meal_counts().unwrap().date, "2026-10-21");
}

#[test]
fn test_edit_tomorrows_menu_from_meal_counts() {
    let mut state = DashboardState::new();
    // Thursday, so tomorrow is Friday
    let today = NaiveDate::from_ymd_opt(2026, 10, 22).unwrap();

    let pending = state.edit_tomorrows_menu(today).unwrap();
    assert_eq!(state.active_view(), ActiveView::EditMenu);
    assert_eq!(pending.request, ApiRequest::LoadMenu(Weekday::Friday));
}

#[test]
fn test_edit_tomorrows_menu_when_already_selected() {
    let mut state = editor_loaded(MenuLookup::Missing);
    // Sunday, so tomorrow is Monday, which is already selected
    let today = NaiveDate::from_ymd_opt(2026, 10, 25).unwrap();
    assert!(state.edit_tomorrows_menu(today).is_none());
}

#[test_case(
    Ok(ConnectionStatus { status: "connected".to_string(), time: Some("2026-10-19 08:00".to_string()), error: None }),
    StatusKind::Success,
    "Backend connected (server time 2026-10-19 08:00)" ; "connected")]
#[test_case(
    Ok(ConnectionStatus { status: "failed".to_string(), time: None, error: Some("no route".to_string()) }),
    StatusKind::Error,
    "Backend database unavailable: no route" ; "database down")]
#[test_case(
    Err(ApiError::Transport("refused".to_string())),
    StatusKind::Error,
    "Error checking backend connection: network error: refused" ; "unreachable")]
fn test_connection_check(
    result: Result<ConnectionStatus, ApiError>,
    kind: StatusKind,
    text: &str,
) {
    let mut state = DashboardState::new();
    let pending = state.check_connection();
    state.apply(pending.ticket, ApiResponse::Connection(result));

    assert_eq!(
        state.status(),
        Some(&StatusMessage {
            text: text.to_string(),
            kind,
        })
    );
}

#[test]
fn test_full_cycle_against_mock_api() {
    let mut api = MockMealApi::new();
    api.expect_menu()
        .with(eq(Weekday::Monday))
        .times(2)
        .returning(|_| Ok(MenuLookup::Missing));
    api.expect_save_menu()
        .withf(|submission| submission.weekday == Weekday::Monday && submission.dinner == "Thali")
        .times(1)
        .returning(|submission| {
            Ok(format!(
                "Menu for {} created/updated successfully.",
                submission.weekday
            ))
        });

    let mut state = DashboardState::new();
    let mut queue: Vec<PendingRequest> = state.show_edit_menu().into_iter().collect();
    while let Some(pending) = queue.pop() {
        let response = execute(&api, &pending.request);
        queue.extend(state.apply(pending.ticket, response));
    }

    state.update_draft_field(MenuField::Dinner, "Thali");
    let mut queue: Vec<PendingRequest> = state.submit_menu().into_iter().collect();
    while let Some(pending) = queue.pop() {
        let response = execute(&api, &pending.request);
        queue.extend(state.apply(pending.ticket, response));
    }

    // The reload after saving came back 404 again, so the info message wins
    assert_eq!(
        state.status(),
        Some(&StatusMessage::info(
            "No menu found for Monday. You can create one."
        ))
    );
    assert_eq!(state.draft(), &MenuDraft::default());
    assert_eq!(state.in_flight(), 0);
}
