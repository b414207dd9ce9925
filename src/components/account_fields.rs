//! Labeled field rendering for one record, editable and read-only.

use leptos::prelude::*;

use crate::net::types::BankAccount;
use crate::state::form::{AccountField, FormState, field_value};

/// The three text inputs shared by the create and edit screens.
///
/// No validation: whatever string is typed goes straight into the form
/// state via a single-field replace.
#[component]
pub fn AccountFields(form: RwSignal<FormState>) -> impl IntoView {
    view! {
        <div class="account-form">
            {AccountField::ALL
                .into_iter()
                .map(|field| {
                    view! {
                        <div class="account-form__group">
                            <label class="account-form__label" for=field.input_id()>
                                {field.label()}
                            </label>
                            <input
                                class="account-form__input"
                                type="text"
                                id=field.input_id()
                                placeholder=field.placeholder()
                                prop:value=move || form.with(|f| f.field(field).to_owned())
                                on:input=move |ev| {
                                    form.update(|f| f.set_field(field, event_target_value(&ev)));
                                }
                            />
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Read-only rendering of the same fields for the view screen.
#[component]
pub fn AccountDetails(record: BankAccount) -> impl IntoView {
    view! {
        <div class="account-form">
            {AccountField::ALL
                .into_iter()
                .map(|field| {
                    let value = field_value(&record, field).to_owned();
                    view! {
                        <div class="account-form__group">
                            <label class="account-form__label">{field.label()}</label>
                            <div class="account-form__value" id=field.input_id()>
                                {value}
                            </div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
