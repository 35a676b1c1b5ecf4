//! Walks one checkout against a running backend.
//!
//! ```text
//! SKIN_API_URL=http://localhost:8080/api \
//! SKIN_DEMO_EMAIL=lan@example.vn SKIN_DEMO_PASSWORD=secret \
//! cargo run -p skin-client --example checkout_demo -- GLOW50 COD
//! ```

use skin_client::checkout::{Checkout, Navigation};
use skin_client::logger::init_logger;
use skin_client::models::PaymentMethod;
use skin_client::pricing::format_vnd;
use skin_client::{ClientConfig, SkinClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger("info", false)?;

    let mut args = std::env::args().skip(1);
    let voucher = args.next().filter(|c| c != "-");
    let method = match args.next().as_deref() {
        Some("COD") | Some("cod") => PaymentMethod::Cod,
        _ => PaymentMethod::Vnpay,
    };

    let client = SkinClient::from_config(ClientConfig::from_env()?)?;
    if !client.is_authenticated() {
        let email = std::env::var("SKIN_DEMO_EMAIL")?;
        let password = std::env::var("SKIN_DEMO_PASSWORD")?;
        client.login(&email, &password).await?;
    }

    let mut checkout = Checkout::start(&client).await;
    if let Some(notice) = checkout.cart_error() {
        anyhow::bail!("cart unavailable: {}", notice.message);
    }

    if let Some(code) = voucher.as_deref()
        && let Err(e) = checkout.apply_voucher(Some(code))
    {
        println!("voucher not applied: {}", e.user_message());
    }
    println!(
        "subtotal {}  discount {}  total {}",
        format_vnd(checkout.totals().subtotal()),
        format_vnd(checkout.totals().discount()),
        format_vnd(checkout.final_price())
    );

    let checkout = checkout
        .continue_to_shipping()
        .map_err(|r| anyhow::anyhow!(r.error.user_message()))?;
    let mut checkout = checkout
        .continue_to_payment()
        .map_err(|r| anyhow::anyhow!(r.error.user_message()))?;
    checkout.select_payment_method(method);

    match checkout.place_order().await {
        Ok(outcome) => match outcome.navigation() {
            Navigation::External(url) => println!("open the payment page: {url}"),
            Navigation::Route(route) => println!("order placed, go to {route}"),
        },
        Err(e) => println!("order failed: {}", e.user_message()),
    }
    Ok(())
}
