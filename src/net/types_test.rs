use super::*;

fn asha() -> BankAccount {
    BankAccount {
        id: "665f1c0a9d3e2b0001a4f001".to_owned(),
        holder_name: "Asha".to_owned(),
        phone_no: "9990001111".to_owned(),
        account_type: "Savings".to_owned(),
    }
}

// =============================================================
// BankAccount
// =============================================================

#[test]
fn bank_account_decodes_backend_field_names() {
    let json = r#"{
        "id": "665f1c0a9d3e2b0001a4f001",
        "holder_name": "Asha",
        "phone_no": "9990001111",
        "account_type": "Savings"
    }"#;
    let account: BankAccount = serde_json::from_str(json).expect("account");
    assert_eq!(account, asha());
}

#[test]
fn bank_account_decodes_when_id_is_omitted() {
    // The backend leaves the id out of payloads where it is unset.
    let json = r#"{"holder_name":"Asha","phone_no":"9990001111","account_type":"Savings"}"#;
    let account: BankAccount = serde_json::from_str(json).expect("account");
    assert_eq!(account.id, "");
    assert_eq!(account.holder_name, "Asha");
}

#[test]
fn create_body_omits_the_empty_id() {
    let record = BankAccount {
        holder_name: "Asha".to_owned(),
        phone_no: "9990001111".to_owned(),
        account_type: "Savings".to_owned(),
        ..BankAccount::default()
    };
    let body = serde_json::to_value(&record).expect("body");
    assert!(body.get("id").is_none());
    assert_eq!(body["holder_name"], "Asha");
}

#[test]
fn update_body_keeps_the_assigned_id() {
    let body = serde_json::to_value(asha()).expect("body");
    assert_eq!(body["id"], "665f1c0a9d3e2b0001a4f001");
}

// =============================================================
// Response envelopes
// =============================================================

#[test]
fn mutation_response_decodes_message_and_record() {
    let json = r#"{
        "message": "Bank details created successfully",
        "bank": {
            "id": "665f1c0a9d3e2b0001a4f001",
            "holder_name": "Asha",
            "phone_no": "9990001111",
            "account_type": "Savings"
        }
    }"#;
    let resp: MutationResponse = serde_json::from_str(json).expect("envelope");
    assert_eq!(resp.message, "Bank details created successfully");
    assert_eq!(resp.bank, asha());
}

#[test]
fn delete_response_decodes_message() {
    let json = r#"{"message":"Bank details deleted successfully"}"#;
    let resp: DeleteResponse = serde_json::from_str(json).expect("envelope");
    assert_eq!(resp.message, "Bank details deleted successfully");
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn api_error_display_defaults_to_generic() {
    assert_eq!(ApiError::default().to_string(), "Server Error");
}

#[test]
fn api_error_display_uses_backend_message() {
    let error = ApiError::with_message("Bank details not found");
    assert_eq!(error.to_string(), "Bank details not found");
}
