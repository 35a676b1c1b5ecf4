// skin-client/tests/endpoints.rs
// Auth, session and account endpoints against the mock backend

mod common;

use std::sync::Arc;

use chrono::TimeDelta;
use common::{MockBackend, TOKEN};
use skin_client::models::{BookingStatus, OrderStatus, Role, RoutineStatus};
use skin_client::{
    AuthSession, ClientError, ErrorCode, FileSessionStore, MemorySessionStore, OneshotHttpClient, SessionStore,
    SkinClient,
};
use tempfile::TempDir;

#[tokio::test]
async fn test_login_me_logout() {
    let backend = MockBackend::new();
    let client = backend.client();
    assert!(!client.is_authenticated());

    let session = client.login("lan@example.vn", "secret").await.unwrap();
    assert_eq!(session.token, TOKEN);
    assert_eq!(session.user_id.as_deref(), Some("7"));
    assert!(session.has_role(Role::Customer));
    assert!(client.is_authenticated());

    let me = client.me().await.unwrap();
    assert_eq!(me.email, "lan@example.vn");
    assert_eq!(me.point, 1200);

    client.logout().await.unwrap();
    assert!(!client.is_authenticated());
    assert_eq!(backend.state().logout_calls, 1);

    // Logging out without a session does not call the server
    client.logout().await.unwrap();
    assert_eq!(backend.state().logout_calls, 1);
}

#[tokio::test]
async fn test_bad_credentials() {
    let backend = MockBackend::new();
    let client = backend.client();

    let err = client.login("lan@example.vn", "wrong").await.unwrap_err();
    assert_eq!(err.error_code(), Some(ErrorCode::InvalidCredentials));
    assert_eq!(err.user_message(), "Invalid email or password");
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn test_401_clears_session() {
    let backend = MockBackend::new();
    let client = backend.client();
    client.login("lan@example.vn", "secret").await.unwrap();

    backend.state().token_revoked = true;
    let err = client.me().await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));
    assert!(client.session().unwrap().is_none());
}

#[tokio::test]
async fn test_expired_session_is_not_sent() {
    let backend = MockBackend::new();
    let expired = AuthSession::new(TOKEN, Some("7".into()), vec![Role::Customer], TimeDelta::seconds(-5));
    let store = Arc::new(MemorySessionStore::with_session(expired));
    let client = SkinClient::new(
        backend.config(),
        Arc::new(OneshotHttpClient::new(backend.router())),
        store.clone(),
    );

    // Without the token the backend answers 401
    let err = client.me().await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));
    assert!(store.load().unwrap().is_none());
}

#[tokio::test]
async fn test_file_session_survives_client_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("skin").join("session.json");
    let backend = MockBackend::new();

    let first = SkinClient::new(
        backend.config(),
        Arc::new(OneshotHttpClient::new(backend.router())),
        Arc::new(FileSessionStore::new(&path)),
    );
    first.login("lan@example.vn", "secret").await.unwrap();
    drop(first);

    let second = SkinClient::new(
        backend.config(),
        Arc::new(OneshotHttpClient::new(backend.router())),
        Arc::new(FileSessionStore::new(&path)),
    );
    assert!(second.is_authenticated());
    assert_eq!(second.me().await.unwrap().id, "7");
}

#[tokio::test]
async fn test_corrupt_session_file_is_cleared_and_login_recovers() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "not json").unwrap();
    let backend = MockBackend::new();

    let client = SkinClient::new(
        backend.config(),
        Arc::new(OneshotHttpClient::new(backend.router())),
        Arc::new(FileSessionStore::new(&path)),
    );
    assert!(client.session().unwrap().is_none());
    assert!(!path.exists());

    // Public endpoints go out unauthenticated instead of failing on the file
    assert_eq!(client.cart().await.unwrap().items.len(), 2);

    std::fs::write(&path, "not json").unwrap();
    let session = client.login("lan@example.vn", "secret").await.unwrap();
    assert_eq!(session.token, TOKEN);
    assert!(client.is_authenticated());
    assert_eq!(client.me().await.unwrap().id, "7");
}

#[tokio::test]
async fn test_login_with_huge_expires_in_does_not_panic() {
    let backend = MockBackend::new();
    let client = backend.client();

    // Out of calendar range: the configured lifetime applies instead
    backend.state().login_expires_in = Some(9_000_000_000_000_000);
    let session = client.login("lan@example.vn", "secret").await.unwrap();
    assert!(!session.is_expired());
    assert!(session.expires_at <= chrono::Utc::now() + TimeDelta::days(2));
    assert!(client.is_authenticated());

    backend.state().login_expires_in = Some(i64::MAX / 1000);
    let session = client.login("lan@example.vn", "secret").await.unwrap();
    assert!(!session.is_expired());
}

#[tokio::test]
async fn test_ids_are_escaped_in_paths() {
    let backend = MockBackend::new();
    let client = backend.client();

    // Without escaping this would hit GET /orders/55/cancel
    let err = client.order("55/cancel").await.unwrap_err();
    assert_eq!(err.error_code(), Some(ErrorCode::OrderNotFound));

    let err = client.cancel_order("55?x=1").await.unwrap_err();
    assert_eq!(err.error_code(), Some(ErrorCode::OrderNotFound));
    assert_eq!(client.order("55").await.unwrap().status, OrderStatus::Pending);
}

#[tokio::test]
async fn test_cart_mutations_refetch() {
    let backend = MockBackend::new();
    let client = backend.client();

    let cart = client.update_cart_item("p2", 4).await.unwrap();
    assert_eq!(cart.find("p2").unwrap().quantity, 4);
    assert_eq!(cart.total_price, 1_200_000.0);

    let cart = client.remove_cart_item("p1").await.unwrap();
    assert!(cart.find("p1").is_none());
    assert_eq!(cart.item_count(), 4);

    let err = client.update_cart_item("nope", 1).await.unwrap_err();
    assert_eq!(err.error_code(), Some(ErrorCode::CartItemNotFound));
}

#[tokio::test]
async fn test_voucher_exchange_moves_between_pools() {
    let backend = MockBackend::new();
    let client = backend.client();

    let available = client.available_vouchers(0, 10).await.unwrap();
    assert_eq!(available.items.len(), 1);
    assert_eq!(available.items[0].code, "NEW20");

    client.exchange_voucher(&available.items[0].id).await.unwrap();

    let owned = client.my_vouchers().await.unwrap();
    assert!(owned.iter().any(|v| v.code == "NEW20"));
    assert!(client.available_vouchers(0, 10).await.unwrap().is_empty());

    let err = client.exchange_voucher("999").await.unwrap_err();
    assert_eq!(err.error_code(), Some(ErrorCode::VoucherNotFound));
}

#[tokio::test]
async fn test_orders() {
    let backend = MockBackend::new();
    let client = backend.client();

    let page = client.my_orders(0, 10).await.unwrap();
    assert_eq!(page.total, 1);
    let order = &page.items[0];
    assert_eq!(order.status, OrderStatus::Pending);
    assert!(order.status.offers_cancel());

    let detail = client.order(&order.id).await.unwrap();
    assert_eq!(detail.total_price, 300_000.0);

    let cancelled = client.cancel_order(&order.id).await.unwrap();
    assert_eq!(cancelled.status, OrderStatus::Cancelled);

    // The server decides; a second cancel is refused
    let err = client.cancel_order(&order.id).await.unwrap_err();
    assert_eq!(err.error_code(), Some(ErrorCode::OrderNotCancellable));

    let err = client.order("404").await.unwrap_err();
    assert_eq!(err.error_code(), Some(ErrorCode::OrderNotFound));
}

#[tokio::test]
async fn test_bookings_and_routines() {
    let backend = MockBackend::new();
    let client = backend.client();

    let bookings = client.my_bookings().await.unwrap();
    assert_eq!(bookings[0].status, BookingStatus::ContactCustomer);
    assert_eq!(bookings[1].status, BookingStatus::Unknown);

    let cancelled = client.cancel_booking("5").await.unwrap();
    assert_eq!(cancelled.status, BookingStatus::Cancelled);

    let routines = client.my_routines().await.unwrap();
    assert_eq!(routines[0].status, RoutineStatus::Processing);
    assert_eq!(routines[0].progress(), (0, 2));

    let routine = client.complete_routine_step("8", "81").await.unwrap();
    assert_eq!(routine.progress(), (1, 2));
    assert_eq!(routine.next_pending_step().unwrap().name, "Serum");
}
