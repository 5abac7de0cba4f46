//! Resource operations exercised against a mock HTTP server.

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use payname_client::resources::card::{Card, CardExpiry, CardRequest};
use payname_client::resources::debit::Debit;
use payname_client::resources::payment::{Payment, SimulateRequest};
use payname_client::resources::popup::{Popup, PopupRequest};
use payname_client::resources::user::User;
use payname_client::{Config, Payname};

fn client_for(server: &MockServer) -> Payname {
    Payname::new(
        Config::new("shop1", "sec-XYZ")
            .with_oauth(false)
            .with_host(server.uri()),
    )
}

fn envelope_with(data: serde_json::Value) -> serde_json::Value {
    json!({"success": true, "msg": "OK", "data": data})
}

#[tokio::test]
async fn payment_create_decodes_the_record() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/payment"))
        .and(body_json(json!({"order": "ord_9", "confirmation": "simple"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_with(json!({
            "hash": "pay_1",
            "order": "ord_9",
            "status": "W_DEBIT",
            "confirmation": "simple",
            "debit": [{"hash": "deb_1", "status": "W_EXEC", "amount": 25.0}]
        }))))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let payment = Payment::create(&client, &json!({"order": "ord_9", "confirmation": "simple"}))
        .await
        .expect("create should succeed");

    assert_eq!(payment.hash, "pay_1");
    assert_eq!(payment.status, "W_DEBIT");
    assert_eq!(payment.debits.len(), 1);
    assert_eq!(payment.debits[0].amount, Some(25.0));
}

#[tokio::test]
async fn payment_get_and_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/payment/pay_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_with(json!({
            "hash": "pay_1",
            "status": "F_DONE"
        }))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/payment"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_with(json!([
            {"hash": "pay_1"},
            {"hash": "pay_2"}
        ]))))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let payment = Payment::get(&client, "pay_1").await.expect("get");
    assert_eq!(payment.status, "F_DONE");

    let payments = Payment::list(&client).await.expect("list");
    assert_eq!(payments.len(), 2);
    assert_eq!(payments[1].hash, "pay_2");
}

#[tokio::test]
async fn payment_update_puts_the_serialized_record() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/payment/pay_1"))
        .and(body_json(json!({
            "hash": "pay_1",
            "order": "ord_9",
            "status": "W_DEBIT",
            "confirmation": "double",
            "commission": 0.0,
            "comm_fixed": 0.0,
            "external_data": "",
            "option_urssaf": false,
            "urssaf_nb_hours": 0.0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_with(json!({
            "hash": "pay_1",
            "order": "ord_9",
            "status": "C_WAITING",
            "confirmation": "double"
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut payment: Payment = serde_json::from_value(json!({
        "hash": "pay_1",
        "order": "ord_9",
        "status": "W_DEBIT",
        "confirmation": "double"
    }))
    .expect("payment should decode");

    payment.update(&client).await.expect("update");
    assert_eq!(payment.status, "C_WAITING");
}

#[tokio::test]
async fn payment_lifecycle_calls_use_put() {
    let server = MockServer::start().await;
    for action in ["confirm", "exec_debits", "exec_credits", "balance"] {
        Mock::given(method("PUT"))
            .and(path(format!("/payment/pay_1/{action}")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(envelope_with(json!({"status": "F_CREDIT"}))),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client_for(&server);
    let payment: Payment =
        serde_json::from_value(json!({"hash": "pay_1"})).expect("payment should decode");

    let confirmed = payment.confirm(&client).await.expect("confirm");
    assert_eq!(confirmed.expect("data")["status"], "F_CREDIT");
    payment.exec_debits(&client).await.expect("exec_debits");
    payment.exec_credits(&client).await.expect("exec_credits");
    payment.balance(&client).await.expect("balance");
}

#[tokio::test]
async fn simulate_posts_only_the_anchor_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/payment/simulate"))
        .and(body_json(json!({"credit": 100.0})))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_with(json!({
            "debit": 103.5,
            "credit": 100.0
        }))))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let amounts = Payment::simulate(&client, &SimulateRequest::from_credit(100.0))
        .await
        .expect("simulate");
    assert_eq!(amounts["debit"], 103.5);
}

#[tokio::test]
async fn finalize_3ds_posts_the_bank_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/payment/finalize3ds"))
        .and(body_json(json!({"PaRes": "pares-blob", "MD": "md-42"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_with(json!({
            "status": "F_DONE"
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let data = Payment::finalize_3ds(&client, "pares-blob", "md-42")
        .await
        .expect("finalize");
    assert_eq!(data.expect("data")["status"], "F_DONE");
}

#[tokio::test]
async fn debit_operations_carry_the_parent_hash() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/payment/pay_1/debit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_with(json!({
            "hash": "deb_1",
            "status": "W_USER"
        }))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/payment/pay_1/debit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_with(json!([
            {"hash": "deb_1"},
            {"hash": "deb_2"}
        ]))))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let debit = Debit::create(&client, "pay_1", &json!({"method": "card"}))
        .await
        .expect("create");
    assert_eq!(debit.payment, "pay_1");

    let debits = Debit::list(&client, "pay_1").await.expect("list");
    assert!(debits.iter().all(|debit| debit.payment == "pay_1"));
}

#[tokio::test]
async fn user_get_decodes_inline_ibans() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/usr_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_with(json!({
            "hash": "usr_1",
            "email": "jane@example.com",
            "birthdate": 631152000,
            "iban": [{"hash": "ibn_1", "iban": "FR7630006000011234567890189", "master": true}]
        }))))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let user = User::get(&client, "usr_1").await.expect("get");
    assert_eq!(user.email.as_deref(), Some("jane@example.com"));
    assert_eq!(user.ibans.len(), 1);
    assert_eq!(user.ibans[0].master, Some(true));
    assert_eq!(
        user.birth_date().expect("timestamp is valid").to_string(),
        "1990-01-01"
    );
}

#[tokio::test]
async fn user_cards_are_fetched_under_the_user() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/usr_1/card"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_with(json!([
            {"hash": "crd_1", "type": "CB", "number": "497010XXXXXX0000"}
        ]))))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let user: User =
        serde_json::from_value(json!({"hash": "usr_1"})).expect("user should decode");
    let cards = user.cards(&client).await.expect("cards");
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].card_type.as_deref(), Some("CB"));
    assert_eq!(cards[0].user.as_deref(), Some("usr_1"));
}

#[tokio::test]
async fn card_tokenization_posts_to_the_token_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_json(json!({
            "number": "4970100000000000",
            "expiry": {"year": 2030, "month": 4},
            "security": "123",
            "user": "jane@example.com"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_with(json!({
            "hash": "crd_1",
            "number": "497010XXXXXX0000",
            "is_prod": false
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = CardRequest {
        number: "4970100000000000".to_string(),
        expiry: CardExpiry {
            year: 2030,
            month: 4,
        },
        security: "123".to_string(),
        user: "jane@example.com".to_string(),
    };
    let card = Card::create(&client, &request).await.expect("create");
    assert_eq!(card.hash, "crd_1");
    assert_eq!(card.is_prod, Some(false));
}

#[tokio::test]
async fn popup_creation_returns_the_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/popup"))
        .and(body_json(json!({"amount": 49.9, "callback_ok": "https://shop.example/done"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_with(json!({
            "url": "https://pay.example/popup/abc"
        }))))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = PopupRequest {
        callback_ok: Some("https://shop.example/done".to_string()),
        ..PopupRequest::new(49.9)
    };
    let url = Popup::create(&client, &request).await.expect("create");
    assert_eq!(url, "https://pay.example/popup/abc");
}

#[tokio::test]
async fn token_request_and_refresh_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/token"))
        .and(body_json(json!({"ID": "shop1", "secret": "sec-XYZ"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_with(json!({
            "token": "tok-abc"
        }))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh_token"))
        .and(body_json(json!({"ID": "shop1", "token": "tok-abc"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_with(json!({
            "token": "tok-def"
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let client = Payname::new(Config::new("shop1", "sec-XYZ").with_host(server.uri()));
    let grant = client.request_token().await.expect("token grant");
    assert_eq!(grant.token, "tok-abc");

    // Storing the grant is the caller's move, never the dispatcher's.
    client.set_token(grant.token);
    let refreshed = client.refresh_token().await.expect("refreshed grant");
    assert_eq!(refreshed.token, "tok-def");
}
