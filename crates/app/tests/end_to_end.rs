//! End-to-end flows over the application state and the AI gateway,
//! with the model scripted through the mock client.

use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use medius_ai::{AiGateway, MockGenerativeClient};
use medius_app::{HospitalState, ACCOUNTS_PAYABLE_ACCOUNT, REGISTRATION_FEE};
use medius_patients::{Gender, PatientStatus, RegisterPatient};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 10, 26).unwrap()
}

fn register_cmd(name: &str) -> RegisterPatient {
    RegisterPatient {
        name: name.to_string(),
        age: 40,
        gender: Gender::Male,
        status: PatientStatus::Outpatient,
        insurance_provider: "National Health".to_string(),
        admission_date: today(),
    }
}

#[tokio::test]
async fn invoice_text_flows_from_extraction_to_the_ledger() -> Result<()> {
    medius_observability::init();

    let mut state = HospitalState::with_sample_data()?;
    let entries_before = state.ledger().len();

    let reply = json!({
        "vendorName": "MedSupply Corp",
        "invoiceDate": "2023-10-25",
        "totalAmount": 500,
        "lineItems": [{"description": "Surgical Gloves (50 boxes)", "amount": 500}],
        "confidence": 0.9
    })
    .to_string();
    let gateway = AiGateway::new(MockGenerativeClient::replying(reply));

    let invoice = gateway
        .extract_invoice("Vendor: MedSupply Corp\nDate: 2023-10-25\nTotal: $500")
        .await
        .expect("scripted extraction succeeds");

    let id = state.post_invoice(&invoice, today())?;

    assert_eq!(state.ledger().len(), entries_before + 1);
    let txn = state.ledger().find(id).expect("posted entry is readable");
    assert_eq!(txn.account_code(), ACCOUNTS_PAYABLE_ACCOUNT);
    assert_eq!(txn.amount(), 50_000);
    assert_eq!(txn.date(), NaiveDate::from_ymd_opt(2023, 10, 25).unwrap());
    assert_eq!(
        txn.description(),
        "Invoice: MedSupply Corp - Surgical Gloves (50 boxes)"
    );
    Ok(())
}

#[tokio::test]
async fn forecast_round_trips_the_full_catalogue() -> Result<()> {
    medius_observability::init();

    let state = HospitalState::with_sample_data()?;
    let snapshot = state.inventory_snapshot();

    // Script a reply covering every catalogue item.
    let reply: Vec<_> = snapshot
        .iter()
        .map(|item| {
            json!({
                "itemId": item.id,
                "itemName": item.name,
                "predictedDemand": item.last_usage_rate * 4,
                "recommendedOrder": item.last_usage_rate * 5,
                "reasoning": "four weeks of usage plus safety stock"
            })
        })
        .collect();
    let mock = MockGenerativeClient::replying(json!(reply).to_string());
    let gateway = AiGateway::new(mock);

    let forecasts = gateway.forecast_inventory(&snapshot).await;
    assert_eq!(forecasts.len(), state.inventory().len());

    // The request carried every item and the declared schema.
    let requests = gateway_requests(&gateway);
    assert_eq!(requests.len(), 1);
    for item in &snapshot {
        assert!(requests[0].prompt.contains(&item.id));
    }
    assert_eq!(
        requests[0].response_schema,
        medius_ai::schema::forecast_schema()
    );
    Ok(())
}

#[tokio::test]
async fn analysis_prompt_is_bounded_to_fifty_entries() -> Result<()> {
    medius_observability::init();

    let mut state = HospitalState::with_sample_data()?;
    for i in 0..60 {
        state.register_patient(register_cmd(&format!("Patient {i}")))?;
    }
    assert_eq!(state.ledger().len(), 64);

    let mock = MockGenerativeClient::replying("[]");
    let gateway = AiGateway::new(mock);
    let _ = gateway.analyze_financials(&state.transaction_snapshot()).await;

    let requests = gateway_requests(&gateway);
    let serialized_entries = requests[0].prompt.matches("\"accountCode\"").count();
    assert_eq!(serialized_entries, 50);
    Ok(())
}

#[tokio::test]
async fn model_failure_degrades_without_touching_state() -> Result<()> {
    medius_observability::init();

    let state = HospitalState::with_sample_data()?;
    let entries_before = state.ledger().len();

    let gateway = AiGateway::new(MockGenerativeClient::failing());
    let insights = gateway.analyze_financials(&state.transaction_snapshot()).await;
    assert!(insights.is_empty());

    let gateway = AiGateway::new(MockGenerativeClient::failing());
    assert!(gateway.extract_invoice("anything").await.is_none());

    assert_eq!(state.ledger().len(), entries_before);
    Ok(())
}

#[tokio::test]
async fn registration_pairing_is_visible_end_to_end() -> Result<()> {
    medius_observability::init();

    let mut state = HospitalState::with_sample_data()?;
    let receipt = state.register_patient(register_cmd("Kyle Reese"))?;

    let patient = state
        .find_patient(receipt.patient_id)
        .expect("registered patient is readable");
    assert_eq!(patient.name(), "Kyle Reese");

    let linked = state.ledger().entries_for(receipt.patient_id.into());
    assert_eq!(linked.len(), 1);
    assert_eq!(linked[0].amount(), REGISTRATION_FEE);
    Ok(())
}

fn gateway_requests(
    gateway: &AiGateway<MockGenerativeClient>,
) -> Vec<medius_ai::RecordedRequest> {
    gateway.client().requests()
}
