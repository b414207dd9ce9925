//! Form model shared by the create and edit screens.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::BankAccount;

/// The editable fields of a record. Labels, input ids, and placeholders
/// live here so the create, edit, and view screens stay in sync.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountField {
    HolderName,
    PhoneNo,
    AccountType,
}

impl AccountField {
    /// Every editable field, in display order.
    pub const ALL: [Self; 3] = [Self::HolderName, Self::PhoneNo, Self::AccountType];

    pub fn label(self) -> &'static str {
        match self {
            Self::HolderName => "Holder Name:",
            Self::PhoneNo => "Phone Number:",
            Self::AccountType => "Account Type:",
        }
    }

    /// DOM id for the input, matching the wire field name.
    pub fn input_id(self) -> &'static str {
        match self {
            Self::HolderName => "holder_name",
            Self::PhoneNo => "phone_no",
            Self::AccountType => "account_type",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::HolderName => "Please enter holder name",
            Self::PhoneNo => "Please enter phone number",
            Self::AccountType => "Please enter account type",
        }
    }
}

/// Read one field off a record.
pub fn field_value(record: &BankAccount, field: AccountField) -> &str {
    match field {
        AccountField::HolderName => &record.holder_name,
        AccountField::PhoneNo => &record.phone_no,
        AccountField::AccountType => &record.account_type,
    }
}

/// Replace exactly one field, leaving the others (and the id) untouched.
pub fn set_field_value(record: &mut BankAccount, field: AccountField, value: String) {
    match field {
        AccountField::HolderName => record.holder_name = value,
        AccountField::PhoneNo => record.phone_no = value,
        AccountField::AccountType => record.account_type = value,
    }
}

/// Where a screen's submit currently stands.
///
/// `Idle --submit--> Submitting --success--> Navigated`, and back to
/// `Idle` on failure. Field edits never leave `Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    /// Editable; no request in flight.
    #[default]
    Idle,
    /// A create or update request is outstanding.
    Submitting,
    /// The submit succeeded and the screen has redirected away.
    Navigated,
}

/// One record under edit plus its submit lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub record: BankAccount,
    pub phase: SubmitPhase,
}

impl FormState {
    /// Replace the whole record, e.g. from the edit screen's
    /// fetch-on-mount.
    pub fn seed(&mut self, record: BankAccount) {
        self.record = record;
    }

    /// Shallow merge: replace one field, keep the rest.
    pub fn set_field(&mut self, field: AccountField, value: String) {
        set_field_value(&mut self.record, field, value);
    }

    pub fn field(&self, field: AccountField) -> &str {
        field_value(&self.record, field)
    }

    /// Move to `Submitting`. Returns `false` when a submit is already in
    /// flight so callers can drop the duplicate action.
    pub fn begin_submit(&mut self) -> bool {
        if self.phase != SubmitPhase::Idle {
            return false;
        }
        self.phase = SubmitPhase::Submitting;
        true
    }

    /// The server acknowledged: keep its copy of the record.
    pub fn submit_succeeded(&mut self, record: BankAccount) {
        self.record = record;
        self.phase = SubmitPhase::Navigated;
    }

    /// The request failed; stay on the screen with the current values.
    pub fn submit_failed(&mut self) {
        self.phase = SubmitPhase::Idle;
    }

    pub fn submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }
}
