// skin-client/tests/common/mod.rs
// In-process mock of the storefront backend

#![allow(dead_code)]

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use axum::extract::{Path, Query, RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use shared::{ApiResponse, AppError, ErrorCode};
use skin_client::{ClientConfig, SkinClient};

pub const RETURN_URL: &str = "http://localhost:5173/payment-return";
pub const PAYMENT_URL: &str = "https://sandbox.vnpayment.vn/paymentv2/vpcpay.html?vnp_TxnRef=101";
pub const TOKEN: &str = "jwt-1";

#[derive(Debug, Clone)]
pub struct MockItem {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

#[derive(Debug, Clone)]
pub struct CheckoutCall {
    pub body: Value,
    pub idempotency_key: Option<String>,
    pub authorization: Option<String>,
}

#[derive(Debug, Default)]
pub struct MockState {
    pub items: Vec<MockItem>,
    pub addresses: Vec<Value>,
    pub vouchers: Vec<Value>,
    pub available_vouchers: Vec<Value>,
    pub orders: Vec<Value>,
    pub routines: Vec<Value>,
    pub next_id: u64,

    pub cart_fails: bool,
    pub vouchers_fail: bool,
    pub token_revoked: bool,
    pub checkout_delay: Duration,
    pub checkout_rejects: bool,
    /// Overrides the `expiresIn` a login returns
    pub login_expires_in: Option<i64>,

    pub checkout_calls: Vec<CheckoutCall>,
    pub callback_queries: Vec<String>,
    pub voucher_page_queries: Vec<(u32, u32)>,
    pub logout_calls: u32,
}

#[derive(Clone, Default)]
pub struct MockBackend(Arc<Mutex<MockState>>);

fn address(id: u64, name: &str, is_default: bool) -> Value {
    json!({
        "id": id,
        "name": name,
        "phone": "0901234567",
        "city": "Ho Chi Minh",
        "district": "District 1",
        "ward": "Ben Nghe",
        "street": format!("{id} Le Loi"),
        "isDefault": is_default
    })
}

fn voucher(id: u64, code: &str, discount: f64, min_order_value: f64) -> Value {
    json!({
        "id": id,
        "code": code,
        "discount": discount,
        "discountType": "FIXED_AMOUNT",
        "minOrderValue": min_order_value,
        "description": format!("{code} voucher"),
        "point": 100
    })
}

impl MockBackend {
    /// Cart of 600.000đ, two addresses (first is default), three owned vouchers
    pub fn new() -> Self {
        let state = MockState {
            items: vec![
                MockItem {
                    product_id: "p1".into(),
                    name: "Hydrating Serum".into(),
                    price: 200_000.0,
                    quantity: 2,
                },
                MockItem {
                    product_id: "p2".into(),
                    name: "Sunscreen SPF50".into(),
                    price: 200_000.0,
                    quantity: 1,
                },
            ],
            addresses: vec![address(1, "Lan Nguyen", true), address(2, "Lan Office", false)],
            vouchers: vec![
                voucher(1, "GLOW50", 50_000.0, 500_000.0),
                voucher(2, "BIG", 700_000.0, 0.0),
                voucher(3, "VIP", 100_000.0, 1_000_000.0),
            ],
            available_vouchers: vec![voucher(4, "NEW20", 20_000.0, 0.0)],
            orders: vec![json!({
                "id": 55,
                "status": "PENDING",
                "items": [],
                "totalPrice": 300000,
                "discount": 0,
                "paymentMethod": "COD"
            })],
            routines: vec![json!({
                "id": 8,
                "name": "Acne care",
                "status": "PROCESSING",
                "steps": [
                    {"id": 81, "stepNumber": 1, "name": "Cleanse", "done": false},
                    {"id": 82, "stepNumber": 2, "name": "Serum", "done": false}
                ]
            })],
            next_id: 100,
            ..MockState::default()
        };
        Self(Arc::new(Mutex::new(state)))
    }

    pub fn state(&self) -> MutexGuard<'_, MockState> {
        self.0.lock().unwrap()
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::new("http://mock.local/api").with_payment_return_url(RETURN_URL)
    }

    pub fn client(&self) -> SkinClient {
        self.client_with(self.config())
    }

    pub fn client_with(&self, config: ClientConfig) -> SkinClient {
        SkinClient::in_process(self.router(), config)
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/carts", get(get_cart))
            .route(
                "/carts/items/{product_id}",
                put(update_cart_item).delete(remove_cart_item),
            )
            .route("/vouchers/my-voucher", get(my_vouchers))
            .route("/vouchers/available", get(available_vouchers))
            .route("/vouchers/{id}/exchange", post(exchange_voucher))
            .route("/addresses", get(list_addresses).post(create_address))
            .route("/addresses/{id}", put(update_address))
            .route("/orders/checkout", post(checkout))
            .route("/orders/payment-callback", get(payment_callback))
            .route("/orders/my-orders", get(my_orders))
            .route("/orders/{id}", get(get_order))
            .route("/orders/{id}/cancel", put(cancel_order))
            .route("/booking-orders/my-bookings", get(my_bookings))
            .route("/booking-orders/{id}/cancel", put(cancel_booking))
            .route("/routines/my-routines", get(my_routines))
            .route("/routines/{id}/steps/{step_id}/done", put(complete_step))
            .route("/auth/login", post(login))
            .route("/auth/logout", post(logout))
            .route("/users/my-info", get(my_info))
            .with_state(self.clone())
    }
}

fn ok<T: Serialize>(data: T) -> Response {
    ApiResponse::success(data).into_response()
}

fn fail(status: StatusCode, code: ErrorCode, message: &str) -> Response {
    let err = AppError::with_message(code, message);
    (status, Json(ApiResponse::<()>::error(&err))).into_response()
}

fn cart_json(state: &MockState) -> Value {
    let items: Vec<Value> = state
        .items
        .iter()
        .map(|i| {
            json!({
                "productId": i.product_id,
                "name": i.name,
                "thumbnail": format!("https://cdn.example.vn/{}.jpg", i.product_id),
                "price": i.price,
                "quantity": i.quantity,
                "totalItemPrice": i.price * f64::from(i.quantity)
            })
        })
        .collect();
    let total: f64 = state.items.iter().map(|i| i.price * f64::from(i.quantity)).sum();
    json!({ "cartId": 11, "items": items, "totalPrice": total })
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

// ----- cart -----

async fn get_cart(State(backend): State<MockBackend>) -> Response {
    let state = backend.state();
    if state.cart_fails {
        return fail(StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::InternalError, "Database unavailable");
    }
    ok(cart_json(&state))
}

#[derive(Deserialize)]
struct QuantityBody {
    quantity: u32,
}

async fn update_cart_item(
    State(backend): State<MockBackend>,
    Path(product_id): Path<String>,
    Json(body): Json<QuantityBody>,
) -> Response {
    let mut state = backend.state();
    match state.items.iter_mut().find(|i| i.product_id == product_id) {
        Some(item) => {
            item.quantity = body.quantity;
            ApiResponse::ok().into_response()
        }
        None => fail(StatusCode::NOT_FOUND, ErrorCode::CartItemNotFound, "Cart item not found"),
    }
}

async fn remove_cart_item(State(backend): State<MockBackend>, Path(product_id): Path<String>) -> Response {
    let mut state = backend.state();
    state.items.retain(|i| i.product_id != product_id);
    ApiResponse::ok().into_response()
}

// ----- vouchers -----

#[derive(Deserialize)]
struct PageQuery {
    page: u32,
    size: u32,
}

async fn my_vouchers(State(backend): State<MockBackend>, Query(q): Query<PageQuery>) -> Response {
    let mut state = backend.state();
    state.voucher_page_queries.push((q.page, q.size));
    if state.vouchers_fail {
        return fail(StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::InternalError, "Voucher service down");
    }
    let total = state.vouchers.len();
    ok(json!({
        "content": state.vouchers,
        "page": q.page,
        "size": q.size,
        "totalElements": total,
        "totalPages": 1
    }))
}

async fn available_vouchers(State(backend): State<MockBackend>, Query(q): Query<PageQuery>) -> Response {
    let state = backend.state();
    ok(json!({
        "items": state.available_vouchers,
        "page": q.page,
        "size": q.size,
        "total": state.available_vouchers.len()
    }))
}

async fn exchange_voucher(State(backend): State<MockBackend>, Path(id): Path<String>) -> Response {
    let mut state = backend.state();
    let Some(pos) = state
        .available_vouchers
        .iter()
        .position(|v| v["id"].to_string() == id)
    else {
        return fail(StatusCode::NOT_FOUND, ErrorCode::VoucherNotFound, "Voucher not found");
    };
    let voucher = state.available_vouchers.remove(pos);
    state.vouchers.push(voucher);
    ApiResponse::ok().into_response()
}

// ----- addresses -----

async fn list_addresses(State(backend): State<MockBackend>) -> Response {
    ok(backend.state().addresses.clone())
}

async fn create_address(State(backend): State<MockBackend>, Json(mut body): Json<Value>) -> Response {
    let mut state = backend.state();
    state.next_id += 1;
    body["id"] = json!(state.next_id);
    state.addresses.push(body.clone());
    ok(body)
}

async fn update_address(
    State(backend): State<MockBackend>,
    Path(id): Path<String>,
    Json(mut body): Json<Value>,
) -> Response {
    let mut state = backend.state();
    let Some(existing) = state.addresses.iter_mut().find(|a| a["id"].to_string() == id) else {
        return fail(StatusCode::NOT_FOUND, ErrorCode::AddressNotFound, "Address not found");
    };
    body["id"] = existing["id"].clone();
    *existing = body.clone();
    ok(body)
}

// ----- orders -----

async fn checkout(State(backend): State<MockBackend>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    let (delay, rejects) = {
        let mut state = backend.state();
        state.checkout_calls.push(CheckoutCall {
            body: body.clone(),
            idempotency_key: header(&headers, "idempotency-key"),
            authorization: header(&headers, "authorization"),
        });
        (state.checkout_delay, state.checkout_rejects)
    };

    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    if rejects {
        return fail(StatusCode::BAD_REQUEST, ErrorCode::ProductOutOfStock, "Product out of stock");
    }

    match body["paymentMethod"].as_str() {
        Some("VNPAY") => ok(json!({ "orderId": 101, "paymentUrl": PAYMENT_URL })),
        _ => ok(json!({ "orderId": 101 })),
    }
}

async fn payment_callback(State(backend): State<MockBackend>, RawQuery(query): RawQuery) -> Response {
    let query = query.unwrap_or_default();
    backend.state().callback_queries.push(query.clone());

    // Envelope code, not HTTP status, carries the verdict
    if query.contains("vnp_SecureHash=valid") {
        ok(json!({ "orderId": 101, "status": "PROCESSING", "transactionNo": "14000001" }))
    } else {
        fail(StatusCode::OK, ErrorCode::PaymentVerificationFailed, "Invalid signature")
    }
}

async fn my_orders(State(backend): State<MockBackend>, Query(q): Query<PageQuery>) -> Response {
    let state = backend.state();
    ok(json!({
        "content": state.orders,
        "page": q.page,
        "size": q.size,
        "totalElements": state.orders.len()
    }))
}

async fn get_order(State(backend): State<MockBackend>, Path(id): Path<String>) -> Response {
    let state = backend.state();
    match state.orders.iter().find(|o| o["id"].to_string() == id) {
        Some(order) => ok(order.clone()),
        None => fail(StatusCode::NOT_FOUND, ErrorCode::OrderNotFound, "Order not found"),
    }
}

async fn cancel_order(State(backend): State<MockBackend>, Path(id): Path<String>) -> Response {
    let mut state = backend.state();
    let Some(order) = state.orders.iter_mut().find(|o| o["id"].to_string() == id) else {
        return fail(StatusCode::NOT_FOUND, ErrorCode::OrderNotFound, "Order not found");
    };
    if order["status"] != "PENDING" {
        return fail(StatusCode::CONFLICT, ErrorCode::OrderNotCancellable, "Order can no longer be cancelled");
    }
    order["status"] = json!("CANCELLED");
    ok(order.clone())
}

// ----- bookings and routines -----

async fn my_bookings() -> Response {
    ok(json!([
        { "id": 5, "status": "CONTACT_CUSTOMER", "serviceName": "Skin analysis" },
        { "id": 6, "status": "RESCHEDULED" }
    ]))
}

async fn cancel_booking(Path(id): Path<String>) -> Response {
    ok(json!({ "id": id, "status": "CANCELLED" }))
}

async fn my_routines(State(backend): State<MockBackend>) -> Response {
    ok(backend.state().routines.clone())
}

async fn complete_step(State(backend): State<MockBackend>, Path((id, step_id)): Path<(String, String)>) -> Response {
    let mut state = backend.state();
    let Some(routine) = state.routines.iter_mut().find(|r| r["id"].to_string() == id) else {
        return fail(StatusCode::NOT_FOUND, ErrorCode::RoutineNotFound, "Routine not found");
    };
    let Some(steps) = routine["steps"].as_array_mut() else {
        return fail(StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::InternalError, "Malformed routine");
    };
    let Some(step) = steps.iter_mut().find(|s| s["id"].to_string() == step_id) else {
        return fail(StatusCode::NOT_FOUND, ErrorCode::RoutineStepNotFound, "Routine step not found");
    };
    step["done"] = json!(true);
    ok(routine.clone())
}

// ----- auth -----

#[derive(Deserialize)]
struct LoginBody {
    email: String,
    password: String,
}

async fn login(State(backend): State<MockBackend>, Json(body): Json<LoginBody>) -> Response {
    if body.password != "secret" {
        return fail(StatusCode::BAD_REQUEST, ErrorCode::InvalidCredentials, "Invalid email or password");
    }
    let expires_in = backend.state().login_expires_in.unwrap_or(3600);
    ok(json!({
        "token": TOKEN,
        "userId": 7,
        "roles": ["CUSTOMER"],
        "expiresIn": expires_in,
        "email": body.email
    }))
}

async fn logout(State(backend): State<MockBackend>) -> Response {
    backend.state().logout_calls += 1;
    ApiResponse::ok().into_response()
}

async fn my_info(State(backend): State<MockBackend>, headers: HeaderMap) -> Response {
    let authorized = header(&headers, "authorization").as_deref() == Some("Bearer jwt-1");
    if !authorized || backend.state().token_revoked {
        return fail(StatusCode::UNAUTHORIZED, ErrorCode::TokenExpired, "Token expired");
    }
    ok(json!({
        "id": 7,
        "email": "lan@example.vn",
        "fullName": "Lan Nguyen",
        "point": 1200,
        "roles": ["CUSTOMER"]
    }))
}
