use napi::Result as NapiResult;
use napi_derive::napi;

use lending_core::loan_book::{originate, InMemoryLoanBook, LoanRecord};
use lending_core::portfolio::{analyze_portfolio, LoanPosition};
use lending_core::schedule::{build_schedule, LoanRequest, LoanSchedule};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Schedules
// ---------------------------------------------------------------------------

/// Calculate-only entry point: build the amortization schedule for a loan
/// request, no persistence.
#[napi]
pub fn build_loan_schedule(input_json: String) -> NapiResult<String> {
    let request: LoanRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = build_schedule(&request).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[derive(serde::Deserialize)]
struct OriginateBindingInput {
    customer_reference: String,
    #[serde(flatten)]
    request: LoanRequest,
}

#[derive(serde::Serialize)]
struct OriginateBindingOutput {
    record: LoanRecord,
    schedule: LoanSchedule,
}

/// Calculate-and-persist entry point, demonstrated against the bundled
/// in-memory book. A host with its own data store implements `LoanStore`
/// on the Rust side instead and keeps this shape.
#[napi]
pub fn originate_loan(input_json: String) -> NapiResult<String> {
    let binding_input: OriginateBindingInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;

    let mut book = InMemoryLoanBook::new();
    let (record, schedule) = originate(
        &mut book,
        &binding_input.customer_reference,
        &binding_input.request,
    )
    .map_err(to_napi_error)?;

    serde_json::to_string(&OriginateBindingOutput { record, schedule }).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Portfolio
// ---------------------------------------------------------------------------

/// Book-level statistics over an array of loan positions. Returns JSON
/// null for an empty book.
#[napi]
pub fn analyze_loan_portfolio(input_json: String) -> NapiResult<String> {
    let loans: Vec<LoanPosition> = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = analyze_portfolio(&loans);
    serde_json::to_string(&output).map_err(to_napi_error)
}
