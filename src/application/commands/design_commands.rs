// src/application/commands/design_commands.rs
//
// Design Command Handlers
//
// RULES:
// - Accept DTOs
// - Call services
// - Return DTOs
// - Never contain business logic

use crate::application::commands::input;
use crate::application::error_handling::{ErrorResponse, ToErrorResponse, DESIGN_FORM_ALERT};
use crate::application::sorting::{sort_designs, DesignSortKey, SortOrder};
use crate::application::{dto::*, state::AppState};
use crate::domain::{DesignDraft, SizeLabel, SizeRun};

/// Design table rows with derived costs, in store order unless a sort is given
pub async fn list_designs(
    state: &AppState,
    sort: Option<SortOrder<DesignSortKey>>,
) -> Result<Vec<DesignRowDto>, ErrorResponse> {
    state.require_session().to_error_response()?;

    let snapshot = state.catalog.snapshot();
    let mut designs = snapshot.designs.clone();
    if let Some(order) = sort {
        sort_designs(&snapshot, &mut designs, order);
    }

    Ok(designs
        .iter()
        .map(|d| DesignRowDto::from_design(d, snapshot.resolve(d)))
        .collect())
}

/// Create or replace a design
pub async fn save_design(
    state: &AppState,
    form: DesignFormDto,
) -> Result<UpsertResultDto, ErrorResponse> {
    state.require_session().to_error_response()?;

    let sizes = SizeRun::from_pairs([
        (SizeLabel::XS, input::quantity(&form.size_xs)),
        (SizeLabel::S, input::quantity(&form.size_s)),
        (SizeLabel::M, input::quantity(&form.size_m)),
        (SizeLabel::L, input::quantity(&form.size_l)),
        (SizeLabel::XL, input::quantity(&form.size_xl)),
    ]);

    let draft = DesignDraft::new(
        &form.id,
        &form.name,
        &form.fabric_id,
        sizes,
        input::optional_amount(&form.fabric_per_piece),
        input::amount_or_zero(&form.other_cost),
    );

    let outcome = state
        .catalog
        .upsert_design(draft)
        .await
        .map_err(|e| ErrorResponse::for_form(e, DESIGN_FORM_ALERT))?;

    Ok(UpsertResultDto::from(outcome))
}

pub async fn delete_design(state: &AppState, design_id: String) -> Result<(), ErrorResponse> {
    state.require_session().to_error_response()?;

    state.catalog.delete_design(&design_id).to_error_response()
}
