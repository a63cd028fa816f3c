use std::time::Instant;

use super::*;
use crate::services::directory::FetchTicket;

fn fill_sale(app: &App, seller: &str, quantity: &str, fat: &str) {
    let mut state = app.state.write();
    state.sale.seller_id = seller.to_string();
    state.sale.quantity = quantity.to_string();
    state.sale.fat = fat.to_string();
}

fn fill_billing(app: &App) {
    let mut state = app.state.write();
    state.billing.seller_id = "7".to_string();
    state.billing.from = "2025-01-01".to_string();
    state.billing.to = "2025-01-31".to_string();
}

#[tokio::test]
async fn test_sale_amount_uses_rate_for_kind() {
    // Arrange
    let api = Arc::new(MockApi::default());
    let mut app = logged_in(api.clone()).await;
    app.navigate(Screen::Sale);
    app.settle().await;
    assert_eq!(
        app.state.read().sale.rates,
        Some(RateSnapshot { rate: 30.0, special_rate: 35.0 })
    );

    // Act
    fill_sale(&app, "7", "10", "4.0");
    app.handle_sale_submit();
    app.settle().await;
    let normal = app.state.read().sale.recent.clone();

    app.handle_supply_kind_change(shared::SupplyKind::Special);
    fill_sale(&app, "7", "10", "4.0");
    app.handle_sale_submit();
    app.settle().await;
    let special = app.state.read().sale.recent.clone();

    // Assert
    assert_eq!(normal.and_then(|r| r.amount), Some(1200.0));
    assert_eq!(special.and_then(|r| r.amount), Some(1400.0));
    assert_eq!(api.count("post_supply"), 1);
    assert_eq!(api.count("post_special_supply"), 1);

    let state = app.state.read();
    assert!(state.sale.seller_id.is_empty());
    assert!(state.sale.quantity.is_empty());
    assert!(state.sale.fat.is_empty());
    assert_eq!(
        state.sale.status,
        FormStatus::Succeeded("Special supply submitted successfully!".to_string())
    );
}

#[tokio::test]
async fn test_sale_rejects_unknown_seller() {
    // Arrange
    let api = Arc::new(MockApi::default());
    let mut app = logged_in(api.clone()).await;
    app.navigate(Screen::Sale);
    app.settle().await;

    // Act
    fill_sale(&app, "42", "10", "4.0");
    app.handle_sale_submit();
    app.settle().await;

    // Assert
    assert_eq!(api.count("post_supply"), 0);
    assert_eq!(
        app.state.read().sale.status,
        FormStatus::Failed("Unknown seller ID 42".to_string())
    );
}

#[tokio::test]
async fn test_sale_accepts_id_listed_without_details() {
    // Arrange
    let api = Arc::new(MockApi::default());
    *api.users_response.lock() = Some(UsersResponse {
        seller_data: vec![sellers()[0].clone()],
        seller_ids: vec![7, 12],
    });
    let mut app = logged_in(api.clone()).await;
    app.navigate(Screen::Sale);
    app.settle().await;
    assert_eq!(app.directory().seller_ids(), vec![7, 12]);

    // Act
    fill_sale(&app, "12", "10", "4.0");
    app.handle_sale_submit();
    app.settle().await;

    // Assert
    assert_eq!(api.count("post_supply"), 1);
    assert_eq!(api.posted.lock()[0].seller_numeric_id, 12);
    assert_eq!(
        app.state.read().sale.status,
        FormStatus::Succeeded("Normal supply submitted successfully!".to_string())
    );
}

#[tokio::test]
async fn test_sale_requires_all_fields() {
    // Arrange
    let api = Arc::new(MockApi::default());
    let mut app = logged_in(api.clone()).await;
    app.navigate(Screen::Sale);
    app.settle().await;

    // Act
    fill_sale(&app, "7", "", "4.0");
    app.handle_sale_submit();

    // Assert
    assert_eq!(
        app.state.read().sale.status,
        FormStatus::Failed("All fields are required".to_string())
    );
}

#[tokio::test]
async fn test_dashboard_summary() {
    // Arrange
    let api = Arc::new(MockApi::default());

    // Act
    let app = logged_in(api.clone()).await;

    // Assert
    let state = app.state.read();
    assert_eq!(state.current_screen, Screen::Dashboard);
    assert!(!state.dashboard.loading);
    assert_eq!(state.dashboard.summary.total_milk, 15.0);
    assert_eq!(state.dashboard.summary.total_amount, 1950.0);
    assert_eq!(state.dashboard.summary.avg_fat_display(), "4.5");
    assert_eq!(state.dashboard.summary.quantities, vec![10.0, 5.0]);
}

#[tokio::test]
async fn test_users_screen_fills_directory() {
    // Arrange
    let api = Arc::new(MockApi::default());
    let mut app = logged_in(api.clone()).await;

    // Act
    app.navigate(Screen::Users);
    app.settle().await;

    // Assert
    assert_eq!(app.directory().get(), sellers());
    assert_eq!(app.directory().seller_ids(), vec![7, 9]);
    let state = app.state.read();
    assert_eq!(state.users.sellers, sellers());
    assert_eq!(state.users.sellers[0].role.label(), "ADMIN");
}

#[tokio::test]
async fn test_leaving_screen_aborts_its_fetch() {
    // Arrange
    let api = Arc::new(MockApi::default());
    let mut app = logged_in(api.clone()).await;
    *api.users_delay.lock() = Some(Duration::from_secs(30));

    // Act
    let started = Instant::now();
    app.navigate(Screen::Users);
    app.navigate(Screen::Billing);
    app.settle().await;

    // Assert
    assert!(started.elapsed() < Duration::from_secs(10));
    assert_eq!(api.count("get_users"), 0);
    assert!(app.directory().is_empty());
}

#[tokio::test]
async fn test_late_result_of_finished_visit_is_discarded() {
    // Arrange
    let api = Arc::new(MockApi::default());
    let mut app = logged_in(api.clone()).await;
    app.navigate(Screen::Users);
    let old_visit = app.state.read().visit();
    app.directory().clear();
    app.navigate(Screen::Billing);
    app.settle().await;
    let ticket = app.directory().begin_fetch();

    // Act
    app.handle_event(AppEvent::Screen {
        visit: old_visit,
        event: ScreenEvent::UsersLoaded {
            ticket,
            result: Ok(UsersResponse {
                seller_data: sellers(),
                seller_ids: vec![7, 9],
            }),
        },
    });

    // Assert
    assert!(app.directory().is_empty());
    assert!(app.state.read().users.sellers.is_empty());
}

#[tokio::test]
async fn test_older_seller_fetch_cannot_overwrite_newer() {
    // Arrange
    let api = Arc::new(MockApi::default());
    let mut app = logged_in(api.clone()).await;
    app.navigate(Screen::Billing);
    let visit = app.state.read().visit();
    let older: FetchTicket = app.directory().begin_fetch();
    let newer: FetchTicket = app.directory().begin_fetch();
    let only_bala = vec![sellers()[1].clone()];

    // Act
    app.handle_event(AppEvent::Screen {
        visit,
        event: ScreenEvent::UsersLoaded {
            ticket: newer,
            result: Ok(UsersResponse {
                seller_data: only_bala.clone(),
                seller_ids: vec![9],
            }),
        },
    });
    app.handle_event(AppEvent::Screen {
        visit,
        event: ScreenEvent::UsersLoaded {
            ticket: older,
            result: Ok(UsersResponse {
                seller_data: sellers(),
                seller_ids: vec![7, 9],
            }),
        },
    });

    // Assert
    assert_eq!(app.directory().get(), only_bala);
}

#[tokio::test]
async fn test_rate_update_sends_both_rates_and_refetches() {
    // Arrange
    let api = Arc::new(MockApi::default());
    let mut app = logged_in(api.clone()).await;
    app.navigate(Screen::Forms);
    app.settle().await;
    assert_eq!(app.state.read().rate.rate_input, "30");
    assert_eq!(app.state.read().rate.special_rate_input, "35");

    // Act
    app.state.write().rate.rate_input = "32.5".to_string();
    app.handle_rate_update();
    app.settle().await;

    // Assert
    assert_eq!(
        api.last_rate_update.lock().clone(),
        Some((
            "r1".to_string(),
            UpdateRateRequest { rate: 32.5, special_rate: Some(35.0) }
        ))
    );
    assert_eq!(api.count("get_rate"), 2);
    assert_eq!(
        app.state.read().rate.status,
        FormStatus::Succeeded("Rate updated successfully".to_string())
    );
}

#[tokio::test]
async fn test_rate_update_rejects_non_numeric_rate() {
    // Arrange
    let api = Arc::new(MockApi::default());
    let mut app = logged_in(api.clone()).await;
    app.navigate(Screen::Forms);
    app.settle().await;

    // Act
    app.state.write().rate.rate_input = "thirty".to_string();
    app.handle_rate_update();
    app.settle().await;

    // Assert
    assert_eq!(api.count("update_rate"), 0);
    assert_eq!(
        app.state.read().rate.status,
        FormStatus::Failed("Rate must be a number".to_string())
    );
}

#[tokio::test]
async fn test_register_validates_and_resets_form() {
    // Arrange
    let api = Arc::new(MockApi::default());
    let mut app = logged_in(api.clone()).await;
    app.navigate(Screen::Forms);
    app.settle().await;
    app.set_register_phone("+91 77777-77777 ext");
    assert_eq!(app.state.read().register.phone, "9177777777");

    // Act: missing name
    app.state.write().register.password = "pw".to_string();
    app.handle_register_click();

    // Assert
    assert_eq!(
        app.state.read().register.status,
        FormStatus::Failed("Name and password are required.".to_string())
    );
    assert_eq!(api.count("register_user"), 0);

    // Act: complete form
    {
        let mut state = app.state.write();
        state.register.name = "Chitra".to_string();
        state.register.seller_id = "12".to_string();
    }
    app.handle_register_click();
    app.settle().await;

    // Assert
    let sent = api.last_register.lock().clone().expect("Registration sent");
    assert_eq!(sent.name, "Chitra");
    assert_eq!(sent.role, Role::Seller);
    assert_eq!(sent.phone_number, "9177777777");
    let state = app.state.read();
    assert!(state.register.name.is_empty());
    assert_eq!(
        state.register.status,
        FormStatus::Succeeded("Registered successfully!".to_string())
    );
}

#[tokio::test]
async fn test_billing_search_complete_and_delete() {
    // Arrange
    let api = Arc::new(MockApi::default());
    let mut app = logged_in(api.clone()).await;
    app.navigate(Screen::Billing);
    fill_billing(&app);

    // Act: search
    app.handle_billing_search();
    app.settle().await;

    // Assert
    {
        let state = app.state.read();
        let results = state.billing.results.as_ref().expect("Statement loaded");
        assert_eq!(results.total_amount, 1950.0);
        assert_eq!(results.supplies.len(), 2);
    }
    let range = api.last_range.lock().clone().expect("Range sent");
    assert_eq!(range.seller_id, "7");
    assert_eq!(range.to.to_string(), "2025-01-31");

    // Act: complete, then delete
    app.handle_mark_completed();
    app.settle().await;
    assert_eq!(
        app.state.read().billing.status,
        FormStatus::Succeeded("Supplies marked as completed".to_string())
    );
    app.handle_delete_supply("s1".to_string());
    app.settle().await;

    // Assert: each change re-ran the search
    assert_eq!(api.count("mark_completed"), 1);
    assert_eq!(api.count("delete_supply"), 1);
    assert_eq!(api.count("get_supply_range"), 3);
    assert_eq!(
        app.state.read().billing.status,
        FormStatus::Succeeded("Supply deleted".to_string())
    );
}

#[tokio::test]
async fn test_billing_rejects_bad_dates() {
    // Arrange
    let api = Arc::new(MockApi::default());
    let mut app = logged_in(api.clone()).await;
    app.navigate(Screen::Billing);
    fill_billing(&app);
    app.state.write().billing.from = "01/01/2025".to_string();

    // Act
    app.handle_billing_search();
    app.settle().await;

    // Assert
    assert_eq!(api.count("get_supply_range"), 0);
    assert_eq!(
        app.state.read().billing.status,
        FormStatus::Failed("From must be a date (YYYY-MM-DD)".to_string())
    );
}

#[tokio::test]
async fn test_tabs_cycle_through_shell() {
    // Arrange
    let api = Arc::new(MockApi::default());
    let mut app = logged_in(api.clone()).await;

    // Act
    app.next_tab();
    let after_next = app.current_screen();
    app.previous_tab();
    app.previous_tab();
    let after_previous = app.current_screen();
    app.settle().await;

    // Assert
    assert_eq!(after_next, Screen::Billing);
    assert_eq!(after_previous, Screen::Users);
}
