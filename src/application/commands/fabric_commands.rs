// src/application/commands/fabric_commands.rs
//
// Fabric Command Handlers
//
// RULES:
// - Accept DTOs
// - Call services
// - Return DTOs
// - Never contain business logic

use crate::application::commands::input;
use crate::application::error_handling::{ErrorResponse, ToErrorResponse, FABRIC_FORM_ALERT};
use crate::application::sorting::{sort_fabrics, FabricSortKey, SortOrder};
use crate::application::{dto::*, state::AppState};
use crate::domain::FabricDraft;

/// Fabric table rows, in store order unless a sort is given
pub async fn list_fabrics(
    state: &AppState,
    sort: Option<SortOrder<FabricSortKey>>,
) -> Result<Vec<FabricRowDto>, ErrorResponse> {
    state.require_session().to_error_response()?;

    let mut fabrics = state.catalog.list_fabrics();
    if let Some(order) = sort {
        sort_fabrics(&mut fabrics, order);
    }

    Ok(fabrics.iter().map(FabricRowDto::from).collect())
}

/// Options for the design form's fabric selector
pub async fn fabric_options(state: &AppState) -> Result<Vec<FabricOptionDto>, ErrorResponse> {
    state.require_session().to_error_response()?;

    Ok(state
        .catalog
        .list_fabrics()
        .iter()
        .map(FabricOptionDto::from)
        .collect())
}

/// Create or replace a fabric
pub async fn save_fabric(
    state: &AppState,
    form: FabricFormDto,
) -> Result<UpsertResultDto, ErrorResponse> {
    state.require_session().to_error_response()?;

    let purchase_date = input::optional_date(&form.purchase_date)
        .map_err(|e| ErrorResponse::for_form(e, FABRIC_FORM_ALERT))?;

    let draft = FabricDraft::new(
        &form.id,
        &form.name,
        Some(form.color.as_str()),
        Some(form.supplier.as_str()),
        input::amount(&form.meters),
        input::amount(&form.cost_per_meter),
        purchase_date,
    );

    let outcome = state
        .catalog
        .upsert_fabric(draft)
        .await
        .map_err(|e| ErrorResponse::for_form(e, FABRIC_FORM_ALERT))?;

    Ok(UpsertResultDto::from(outcome))
}

/// Delete a fabric no design uses
pub async fn delete_fabric(state: &AppState, fabric_id: String) -> Result<(), ErrorResponse> {
    state.require_session().to_error_response()?;

    state.catalog.delete_fabric(&fabric_id).to_error_response()
}
